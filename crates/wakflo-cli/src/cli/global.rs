//! Flags shared by every `wakflo` subcommand.

use clap::Args;
use std::path::PathBuf;

/// Flattened into [`super::Cli`]; each flag is `global` so it may follow the
/// subcommand (`wakflo add action -v`).
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Repeat for more detail: `-v` progress, `-vv` diagnostics, `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never emit ANSI colours"
    )]
    pub no_color: bool,

    /// Replaces the platform config file; it must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Styled output for terminals, plain text for pipes"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Symbols and colours.
    Human,
    /// Symbols only.
    Plain,
}

impl OutputFormat {
    /// Resolve `Auto` against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}
