use std::path::Path;

use crate::cli::commands::{Cli, Commands, ExecArgs};
use crate::cli::output;
use crate::cli::repl;
use crate::io::{config_io, store};
use crate::ops::dispatch::execute;
use crate::ops::task_list::TaskList;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_file = resolve_data_file(cli.file.as_deref())?;

    match cli.command {
        // No subcommand → interactive session
        None => repl::run(&data_file),
        Some(Commands::Exec(args)) => cmd_exec(args, &data_file),
        Some(Commands::List) => cmd_list(&data_file, json),
    }
}

/// Resolve the data-file path from the CLI flag and tally.toml in the
/// working directory.
fn resolve_data_file(
    cli_file: Option<&Path>,
) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(&cwd)?;
    Ok(config_io::resolve_data_file(cli_file, &config))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Run one command line against the stored list, persisting any mutation.
fn cmd_exec(args: ExecArgs, data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load_list(data_file)?;
    let outcome = execute(&args.line, &mut list);
    if outcome.mutated {
        store::write_all(data_file, list.tasks())?;
    }
    println!("{}", outcome.reply);
    Ok(())
}

fn cmd_list(data_file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = load_list(data_file)?;
    if json {
        let out = output::list_to_json(list.tasks());
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if list.is_empty() {
        println!("Your list is empty.");
        return Ok(());
    }
    for (i, task) in list.tasks().iter().enumerate() {
        println!("{}. {}", i + 1, task);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_list(data_file: &Path) -> Result<TaskList, Box<dyn std::error::Error>> {
    let (tasks, dropped) = store::read_all(data_file)?;
    warn_dropped(data_file, &dropped);
    Ok(TaskList::from_tasks(tasks))
}

/// Undecodable lines are reported, never silently discarded.
pub(crate) fn warn_dropped(data_file: &Path, dropped: &[String]) {
    for line in dropped {
        eprintln!(
            "warning: skipped undecodable line in {}: {}",
            data_file.display(),
            line
        );
    }
}
