use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::handlers::warn_dropped;
use crate::io::store;
use crate::ops::dispatch::execute;
use crate::ops::task_list::TaskList;

const BANNER: &str = "Hi there! This is tally. Type a command, or `bye` to leave.";

/// The interactive session: read a line, dispatch it, print the reply,
/// persist after every mutation, until `bye` or end of input.
///
/// One command is fully handled before the next line is read; a malformed
/// command only ever produces a reply, never ends the loop.
pub fn run(data_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (tasks, dropped) = store::read_all(data_file)?;
    warn_dropped(data_file, &dropped);
    let mut list = TaskList::from_tasks(tasks);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{BANNER}")?;

    let mut input = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // End of input is a termination signal, same as `bye`
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let outcome = execute(line, &mut list);
        writeln!(out, "{}", outcome.reply)?;

        // Persist the full list after each successful mutation. A failed
        // save is a warning; the session keeps going.
        if outcome.mutated
            && let Err(e) = store::write_all(data_file, list.tasks())
        {
            eprintln!("warning: {e}");
        }

        if outcome.exit {
            break;
        }
    }

    Ok(())
}
