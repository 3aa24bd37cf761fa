//! Clap derive structures for the `amc` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// amc -- active mode controller for CBRS devices
#[derive(Debug, Parser)]
#[command(
    name = "amc",
    version,
    about = "Reconcile CBRS devices with the Spectrum Access System",
    long_about = "Periodically compares the desired state of every managed CBSD with\n\
        its actual state and sends the SAS requests (registration, spectrum\n\
        inquiry, grant, heartbeat, relinquishment, deregistration) that move\n\
        it toward compliance.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "AMC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Log line format
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Log Enums ───────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile continuously until interrupted
    Run,

    /// Run a single reconciliation pass and print its summary
    Once,

    /// Print the actions a state snapshot would produce, without sending them
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show per-device status for a state snapshot
    Status(StatusArgs),

    /// Inspect or initialize the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Offline commands ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// State snapshot JSON (as served by the active mode service)
    #[arg(long)]
    pub state: PathBuf,

    /// Evaluate liveness at this epoch second instead of the current time
    #[arg(long)]
    pub now: Option<i64>,

    /// Drop requests already pending for each device
    #[arg(long)]
    pub pending: bool,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// State snapshot JSON (as served by the active mode service)
    #[arg(long)]
    pub state: PathBuf,

    /// Evaluate liveness at this epoch second instead of the current time
    #[arg(long)]
    pub now: Option<i64>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file + environment)
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
