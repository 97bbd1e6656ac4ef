//! CLI subcommand definitions

use clap::Subcommand;

/// Without a subcommand the positional arguments are formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// List the supported template tokens
    Tokens,
    /// Show how the --format template is split into tokens and literals
    Template,
}
