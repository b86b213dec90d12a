//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use wakflo_core::domain::ResourceSubtype;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wakflo",
    bin_name = "wakflo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Wakflo integrations, actions and triggers",
    long_about = "Wakflo generates the boilerplate for integrations and wires new \
                  actions and triggers into an existing integration project.",
    after_help = "EXAMPLES:\n\
        \x20 wakflo create integration --name Slack\n\
        \x20 wakflo add action --name \"Send Message\" --type normal\n\
        \x20 wakflo add trigger --name \"New Message\" --type webhook\n\
        \x20 wakflo completions bash > /usr/share/bash-completion/completions/wakflo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add actions, triggers or flows to the current integration.
    #[command(
        subcommand,
        about = "Add resources to an integration",
        after_help = "EXAMPLES:\n\
            \x20 wakflo add action\n\
            \x20 wakflo add action  --name \"Run Python\" -d \"Runs a script\" -t normal\n\
            \x20 wakflo add trigger --name \"New Row\" -t polling --dry-run"
    )]
    Add(AddCommands),

    /// Create new integrations.
    #[command(
        subcommand,
        about = "Create resources",
        after_help = "EXAMPLES:\n\
            \x20 wakflo create integration\n\
            \x20 wakflo create i --name Slack --author \"Jane <jane@example.com>\""
    )]
    Create(CreateCommands),

    /// Log in to or out of the Wakflo backend.
    #[command(subcommand, about = "Authentication")]
    Auth(AuthCommands),

    /// Print the CLI version.
    #[command(about = "Print the CLI version")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wakflo completions bash > ~/.local/share/bash-completion/completions/wakflo\n\
            \x20 wakflo completions zsh  > ~/.zfunc/_wakflo\n\
            \x20 wakflo completions fish > ~/.config/fish/completions/wakflo.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Wakflo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wakflo config path\n\
            \x20 wakflo config get backend.url\n\
            \x20 wakflo config list"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Subcommands for `wakflo add`.
#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Add a new action to the integration in the current directory.
    Action(ResourceArgs),
    /// Add a new trigger to the integration in the current directory.
    Trigger(ResourceArgs),
    /// Add a new flow.
    Flow,
}

/// Arguments shared by `wakflo add action` and `wakflo add trigger`.
///
/// Anything left out is asked for interactively.
#[derive(Debug, Args)]
pub struct ResourceArgs {
    #[arg(short = 'n', long = "name", help = "Name of the resource")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        help = "Description of the resource (generated when omitted)"
    )]
    pub description: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "How the resource runs"
    )]
    pub subtype: Option<Subtype>,

    /// Preview what would be written without touching the project.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Subcommands for `wakflo create`.
#[derive(Debug, Subcommand)]
pub enum CreateCommands {
    /// Create a new integration folder in the current directory.
    #[command(visible_aliases = ["i", "int", "integ", "integrations"])]
    Integration(IntegrationArgs),
}

/// Arguments for `wakflo create integration`.
#[derive(Debug, Args)]
pub struct IntegrationArgs {
    #[arg(short = 'n', long = "name", help = "Name of the integration")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        help = "Description (generated when omitted)"
    )]
    pub description: Option<String>,

    #[arg(long = "icon", help = "Icon identifier, e.g. mdi:slack")]
    pub icon: Option<String>,

    #[arg(
        long = "category",
        value_name = "KEY",
        action = clap::ArgAction::Append,
        help = "Category key (repeatable)"
    )]
    pub categories: Vec<String>,

    #[arg(
        long = "author",
        value_name = "AUTHOR",
        action = clap::ArgAction::Append,
        help = "Author, e.g. \"Jane <jane@example.com>\" (repeatable)"
    )]
    pub authors: Vec<String>,

    #[arg(long = "docs", help = "README body (generated when omitted)")]
    pub docs: Option<String>,

    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── auth ──────────────────────────────────────────────────────────────────────

/// Subcommands for `wakflo auth`.
#[derive(Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in to the Wakflo backend.
    Login,
    /// Log out of the Wakflo backend.
    Logout,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wakflo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `wakflo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `backend.url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Resource subtypes as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Subtype {
    Normal,
    Polling,
    Event,
    Webhook,
    Scheduled,
}

impl From<Subtype> for ResourceSubtype {
    fn from(value: Subtype) -> Self {
        match value {
            Subtype::Normal => Self::Normal,
            Subtype::Polling => Self::Polling,
            Subtype::Event => Self::Event,
            Subtype::Webhook => Self::Webhook,
            Subtype::Scheduled => Self::Scheduled,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
