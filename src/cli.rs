use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "setup-php",
    version,
    about = "Render PHP setup scripts for CI runners"
)]
pub struct Cli {
    /// TOML file of inputs, consulted when the environment has no value.
    #[arg(long = "inputs", global = true)]
    pub inputs: Option<PathBuf>,
    /// Raise log output to debug (ignored when `RUST_LOG` is set).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the PHP version that will be installed.
    Version,
    /// Print the assembled setup script.
    Render(TargetArgs),
    /// Write setup scripts to the tool cache, printing `<path> <php-version>` per script.
    Write(WriteArgs),
    /// Print a single platform specific shell fragment.
    #[command(name = "command")]
    Fragment {
        #[command(subcommand)]
        command: FragmentCommand,
    },
    /// Print the parsed extension list as php.ini directives.
    Extensions { csv: String },
    /// Print the parsed php.ini values.
    Ini { csv: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Platform identifier (`linux`, `darwin`, `win32`); defaults to the host.
    #[arg(long = "os")]
    pub os: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WriteArgs {
    /// Platform identifiers to write, in order; defaults to the host.
    #[arg(long = "os")]
    pub os: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum FragmentCommand {
    /// Colored log line.
    Log {
        message: String,
        /// `error`, `success` or `warning`.
        #[arg(long = "type", default_value = "success")]
        log_type: String,
        #[command(flatten)]
        target: TargetArgs,
    },
    StepLog {
        message: String,
        #[command(flatten)]
        target: TargetArgs,
    },
    AddLog {
        mark: String,
        subject: String,
        status: String,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Redirection that silences a command.
    Suppress {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// ANSI color code for a log type.
    Color {
        #[arg(default_value = "success")]
        log_type: String,
    },
    /// Name of the platform's setup script.
    ScriptName {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
