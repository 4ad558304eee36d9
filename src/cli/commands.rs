use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = concat!("tally v", env!("CARGO_PKG_VERSION"), " - a command-driven todo list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path of the task data file (overrides tally.toml)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single command line against the stored list
    Exec(ExecArgs),
    /// Print the task list
    List,
}

#[derive(Args)]
pub struct ExecArgs {
    /// The command line, e.g. "deadline finish report /by 2024-12-31"
    pub line: String,
}
