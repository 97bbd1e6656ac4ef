use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use datefmt::debug_log;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Defaults read from `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) format: Option<String>,
    #[serde(default)]
    pub(crate) separator: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                if let Some(config) = Self::parse(&content, path) {
                    return config;
                }
            }
        }

        debug_log!("No config file found, using defaults");
        Self::default()
    }

    fn parse(content: &str, path: &Path) -> Option<Self> {
        match toml::from_str::<Config>(content) {
            Ok(config) => {
                debug_log!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/datefmt/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("datefmt").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, $XDG_CONFIG_HOME)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("datefmt").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.datefmt.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".datefmt.toml"));
        }

        paths
    }
}
