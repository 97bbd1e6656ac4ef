//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};
use datefmt::{DEFAULT_SEPARATOR, DEFAULT_TEMPLATE};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "datefmt")]
#[command(about = "Format dates with token templates like yyyy-mm-dd", version)]
#[command(allow_negative_numbers = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Dates to format (one per line from stdin when omitted)
    #[arg(value_name = "DATE")]
    pub(crate) dates: Vec<String>,

    /// Template of '-'-separated tokens: yyyy yy mm dd ddd mmm hh mi ss [default: yyyy-mm-dd]
    #[arg(short, long, global = true, value_name = "TEMPLATE")]
    pub(crate) format: Option<String>,

    /// String placed between rendered segments [default: -]
    #[arg(short, long, global = true, value_name = "SEP", allow_hyphen_values = true)]
    pub(crate) separator: Option<String>,

    /// Treat inputs as Unix timestamps in milliseconds
    #[arg(short, long, global = true)]
    pub(crate) millis: bool,

    /// Timezone for reading date fields (e.g., "Asia/Shanghai", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.format.is_none() {
            self.format = config.format.clone();
        }
        if self.separator.is_none() {
            self.separator = config.separator.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn template(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }

    pub(crate) fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datefmt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&["2023-01-05"]);
        assert_eq!(cli.dates, vec!["2023-01-05"]);
        assert_eq!(cli.template(), "yyyy-mm-dd");
        assert_eq!(cli.separator(), "-");
        assert!(cli.command.is_none());
    }

    #[test]
    fn separator_may_look_like_a_flag() {
        let cli = parse(&["-s", "-", "2023-01-05"]);
        assert_eq!(cli.separator(), "-");
        let cli = parse(&["--separator", "-|-", "2023-01-05"]);
        assert_eq!(cli.separator(), "-|-");
    }

    #[test]
    fn negative_timestamps_are_positional() {
        let cli = parse(&["-m", "-86400000"]);
        assert!(cli.millis);
        assert_eq!(cli.dates, vec!["-86400000"]);
    }

    #[test]
    fn subcommand_with_global_flag() {
        let cli = parse(&["template", "-f", "dd-T-mm"]);
        assert_eq!(cli.command, Some(Commands::Template));
        assert_eq!(cli.template(), "dd-T-mm");
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            format: Some("dd-mmm-yyyy".to_string()),
            separator: Some("/".to_string()),
            timezone: Some("UTC".to_string()),
            color: Some(ConfigColorMode::Never),
            json: true,
            debug: false,
        };
        let cli = parse(&["2023-01-05"]).with_config(&config);
        assert_eq!(cli.template(), "dd-mmm-yyyy");
        assert_eq!(cli.separator(), "/");
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.json);
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_wins_over_config() {
        let config = Config {
            format: Some("dd-mmm-yyyy".to_string()),
            separator: Some("/".to_string()),
            timezone: Some("UTC".to_string()),
            ..Config::default()
        };
        let cli = parse(&["-f", "hh-mi", "-s", ":", "--timezone", "Asia/Tokyo", "x"])
            .with_config(&config);
        assert_eq!(cli.template(), "hh-mi");
        assert_eq!(cli.separator(), ":");
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn no_color_overrides_always() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
        let cli = parse(&["--color", "always"]);
        assert!(cli.use_color());
    }
}
