use crate::model::task::Task;
use crate::ops::task_list::TaskList;
use crate::parse::parse_input;

const GREETING: &str = "Hi there! This is tally. What needs doing today?";
const FAREWELL: &str = "Bye! See you soon.";

/// Usage hints shown for malformed deadline/event commands.
const DEADLINE_USAGE: &str = "use this format: deadline finish report /by 2024-12-31";
const EVENT_USAGE: &str = "use this format: event trip /from 2024-12-01 /to 2024-12-31";

/// The fixed command vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Greeting,
    Exit,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    Todo,
    Deadline,
    Event,
    Undo,
}

impl Command {
    /// Case-insensitive match against the command word.
    fn from_word(word: &str) -> Option<Command> {
        match word.to_ascii_uppercase().as_str() {
            "HI" | "HELLO" | "HEY" => Some(Command::Greeting),
            "BYE" => Some(Command::Exit),
            "LIST" => Some(Command::List),
            "MARK" => Some(Command::Mark),
            "UNMARK" => Some(Command::Unmark),
            "DELETE" => Some(Command::Delete),
            "FIND" => Some(Command::Find),
            "TODO" => Some(Command::Todo),
            "DEADLINE" => Some(Command::Deadline),
            "EVENT" => Some(Command::Event),
            "UNDO" => Some(Command::Undo),
            _ => None,
        }
    }
}

/// Error type for rejected commands. Every variant's message is meant for
/// direct display; none of these escape the dispatcher.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CommandError {
    #[error("I don't know the command `{0}`.")]
    Unrecognized(String),
    #[error("Tell me the number of the task to edit, e.g. `mark 2`.")]
    MissingIndex,
    #[error("There are only {0} tasks in the list.")]
    OnlyNTasks(usize),
    #[error("Task {0} does not exist.")]
    NoSuchTask(i64),
    #[error("A todo needs a description.")]
    EmptyDescription,
    #[error(
        "A deadline needs a description and a date; use this format: deadline finish report /by 2024-12-31"
    )]
    MissingDeadlineArgs,
    #[error(
        "An event needs a description and two dates; use this format: event trip /from 2024-12-01 /to 2024-12-31"
    )]
    MissingEventArgs,
}

/// The result of one dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Reply text for the front-end to show.
    pub reply: String,
    /// True when the command asked the session to end.
    pub exit: bool,
    /// True when the task list changed and should be persisted.
    pub mutated: bool,
}

impl Outcome {
    fn reply(text: impl Into<String>) -> Self {
        Outcome {
            reply: text.into(),
            exit: false,
            mutated: false,
        }
    }

    fn mutated(text: impl Into<String>) -> Self {
        Outcome {
            reply: text.into(),
            exit: false,
            mutated: true,
        }
    }
}

/// Interpret one raw command line against the list.
///
/// Every command error is folded into the reply here; this never fails and
/// a malformed line never touches the list.
pub fn execute(input: &str, list: &mut TaskList) -> Outcome {
    match run(input, list) {
        Ok(outcome) => outcome,
        Err(e) => Outcome::reply(e.to_string()),
    }
}

fn run(input: &str, list: &mut TaskList) -> Result<Outcome, CommandError> {
    let parts = parse_input(input);
    let word = parts[0].as_str();
    let command =
        Command::from_word(word).ok_or_else(|| CommandError::Unrecognized(word.to_string()))?;

    match command {
        Command::Greeting => Ok(Outcome::reply(GREETING)),
        Command::Exit => Ok(Outcome {
            reply: FAREWELL.to_string(),
            exit: true,
            mutated: false,
        }),
        Command::List => Ok(Outcome::reply(render_list(list))),
        Command::Mark | Command::Unmark | Command::Delete => index_command(command, &parts, list),
        Command::Find => Ok(Outcome::reply(find(arg(&parts, 1), list))),
        Command::Todo => add_todo(arg(&parts, 1), list),
        Command::Deadline => add_deadline(arg(&parts, 1), arg(&parts, 2), list),
        Command::Event => add_event(arg(&parts, 1), arg(&parts, 2), arg(&parts, 3), list),
        Command::Undo => Ok(undo(list)),
    }
}

/// Argument accessor: a missing position reads as an empty argument.
fn arg(parts: &[String], index: usize) -> &str {
    parts.get(index).map(String::as_str).unwrap_or("")
}

/// mark/unmark/delete share the index validation: the argument must parse
/// as an integer and land in 1..=len, checked before the list is touched.
fn index_command(
    command: Command,
    parts: &[String],
    list: &mut TaskList,
) -> Result<Outcome, CommandError> {
    let len = list.len();
    let number: i64 = arg(parts, 1)
        .parse()
        .map_err(|_| CommandError::MissingIndex)?;
    if number > len as i64 {
        return Err(CommandError::OnlyNTasks(len));
    }
    if number < 1 {
        return Err(CommandError::NoSuchTask(number));
    }
    let index = (number - 1) as usize;

    // Bounds were validated above; TaskList still defends its own.
    match command {
        Command::Mark => {
            let task = list.mark(index).map_err(|_| CommandError::OnlyNTasks(len))?;
            Ok(Outcome::mutated(format!("Marked as done:\n  {task}")))
        }
        Command::Unmark => {
            let task = list
                .unmark(index)
                .map_err(|_| CommandError::OnlyNTasks(len))?;
            Ok(Outcome::mutated(format!("Marked as not done yet:\n  {task}")))
        }
        Command::Delete => {
            let task = list
                .delete(index)
                .map_err(|_| CommandError::OnlyNTasks(len))?;
            Ok(Outcome::mutated(format!(
                "Removed this task:\n  {task}\nNow you have {} tasks in your list.",
                list.len()
            )))
        }
        _ => unreachable!("index_command only handles mark/unmark/delete"),
    }
}

fn render_list(list: &TaskList) -> String {
    if list.is_empty() {
        return "Your list is empty.".to_string();
    }
    let mut out = String::from("Here are the tasks in your list:");
    for (i, task) in list.tasks().iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, task));
    }
    out
}

fn find(needle: &str, list: &TaskList) -> String {
    let hits = list.find(needle);
    if hits.is_empty() {
        return "No matching tasks.".to_string();
    }
    // Matches keep their real list positions so `mark`/`delete` can use
    // the numbers directly.
    let mut out = String::from("Here are the matching tasks in your list:");
    for (i, task) in hits {
        out.push_str(&format!("\n{}. {}", i + 1, task));
    }
    out
}

fn add_todo(description: &str, list: &mut TaskList) -> Result<Outcome, CommandError> {
    if description.is_empty() {
        return Err(CommandError::EmptyDescription);
    }
    Ok(add(Task::todo(description), list))
}

fn add_deadline(
    description: &str,
    by: &str,
    list: &mut TaskList,
) -> Result<Outcome, CommandError> {
    if description.is_empty() || by.is_empty() {
        return Err(CommandError::MissingDeadlineArgs);
    }
    match Task::deadline(description, by) {
        Ok(task) => Ok(add(task, list)),
        // A bad date is a soft hint, not a command error
        Err(e) => Ok(Outcome::reply(format!("{e}; {DEADLINE_USAGE}"))),
    }
}

fn add_event(
    description: &str,
    from: &str,
    to: &str,
    list: &mut TaskList,
) -> Result<Outcome, CommandError> {
    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(CommandError::MissingEventArgs);
    }
    match Task::event(description, from, to) {
        Ok(task) => Ok(add(task, list)),
        Err(e) => Ok(Outcome::reply(format!("{e}; {EVENT_USAGE}"))),
    }
}

fn add(task: Task, list: &mut TaskList) -> Outcome {
    let rendered = task.to_string();
    list.add(task);
    Outcome::mutated(format!(
        "Added this task:\n  {rendered}\nNow you have {} tasks in your list.",
        list.len()
    ))
}

fn undo(list: &mut TaskList) -> Outcome {
    if list.undo() {
        Outcome::mutated("Undid the last change.")
    } else {
        Outcome::reply("There is nothing to undo.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskKind;

    fn list_with(lines: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for line in lines {
            let outcome = execute(line, &mut list);
            assert!(outcome.mutated, "setup command did not mutate: {line}");
        }
        list
    }

    #[test]
    fn greeting_and_farewell() {
        let mut list = TaskList::new();
        let hi = execute("hello", &mut list);
        assert_eq!(hi.reply, GREETING);
        assert!(!hi.exit);

        let bye = execute("bye", &mut list);
        assert!(bye.exit);
        assert!(!bye.mutated);
    }

    #[test]
    fn command_words_are_case_insensitive() {
        let mut list = TaskList::new();
        assert!(execute("ToDo read book", &mut list).mutated);
        assert!(execute("LIST", &mut list).reply.contains("read book"));
        assert!(execute("MaRk 1", &mut list).mutated);
    }

    #[test]
    fn unknown_command_is_reported_not_crashed() {
        let mut list = TaskList::new();
        let outcome = execute("frobnicate the list", &mut list);
        assert!(outcome.reply.contains("frobnicate"));
        assert!(!outcome.exit);
        assert!(!outcome.mutated);
    }

    #[test]
    fn todo_adds_and_counts() {
        let mut list = TaskList::new();
        let outcome = execute("todo read book", &mut list);
        assert!(outcome.mutated);
        assert!(outcome.reply.contains("[T][ ] read book"));
        assert!(outcome.reply.contains("1 tasks in your list"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn todo_without_description_is_rejected() {
        let mut list = TaskList::new();
        for line in ["todo", "todo ", "todo    "] {
            let outcome = execute(line, &mut list);
            assert!(!outcome.mutated);
            assert_eq!(outcome.reply, "A todo needs a description.");
        }
        assert!(list.is_empty());
    }

    #[test]
    fn deadline_parses_the_by_date() {
        let mut list = list_with(&["deadline submit report /by 2024-12-31"]);
        assert_eq!(
            list.get(0).unwrap().kind,
            TaskKind::Deadline {
                by: crate::model::task::parse_date("2024-12-31").unwrap()
            }
        );
        let reply = execute("list", &mut list).reply;
        assert!(reply.contains("[D][ ] submit report (by Tue, Dec 31 2024)"));
    }

    #[test]
    fn deadline_missing_pieces() {
        let mut list = TaskList::new();
        for line in ["deadline", "deadline finish report", "deadline /by 2024-12-31"] {
            let outcome = execute(line, &mut list);
            assert!(!outcome.mutated, "accepted: {line}");
            assert!(outcome.reply.contains("deadline finish report /by"));
        }
        assert!(list.is_empty());
    }

    #[test]
    fn deadline_bad_date_is_a_soft_hint() {
        let mut list = TaskList::new();
        let outcome = execute("deadline finish report /by tomorrow", &mut list);
        assert!(!outcome.mutated);
        assert!(outcome.reply.contains("not a calendar date: tomorrow"));
        assert!(outcome.reply.contains(DEADLINE_USAGE));
        assert!(list.is_empty());
    }

    #[test]
    fn event_needs_both_dates() {
        let mut list = TaskList::new();
        let outcome = execute("event trip /from 2024-12-01", &mut list);
        assert!(!outcome.mutated);
        assert!(outcome.reply.contains("event trip /from"));

        let outcome = execute("event trip /from 2024-12-01 /to 2024-12-31", &mut list);
        assert!(outcome.mutated);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn event_accepts_reversed_range() {
        let mut list = TaskList::new();
        let outcome = execute("event trip /from 2024-12-31 /to 2024-01-01", &mut list);
        assert!(outcome.mutated);
    }

    #[test]
    fn mark_past_the_end_reports_only_n_tasks() {
        let mut list = list_with(&["todo a", "todo b", "todo c"]);
        let outcome = execute("mark 5", &mut list);
        assert!(!outcome.mutated);
        assert!(outcome.reply.contains("only 3 tasks"));
        assert!(list.tasks().iter().all(|t| !t.done));
    }

    #[test]
    fn mark_below_one_reports_no_such_task() {
        let mut list = list_with(&["todo a"]);
        for line in ["mark 0", "delete -2"] {
            let outcome = execute(line, &mut list);
            assert!(!outcome.mutated);
            assert!(outcome.reply.contains("does not exist"));
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn non_numeric_index_is_rejected() {
        let mut list = list_with(&["todo a"]);
        for line in ["mark", "mark two", "unmark x1", "delete "] {
            let outcome = execute(line, &mut list);
            assert!(!outcome.mutated, "accepted: {line}");
            assert!(outcome.reply.contains("number of the task"));
        }
    }

    #[test]
    fn mark_and_unmark_round_trip() {
        let mut list = list_with(&["todo read book"]);
        let outcome = execute("mark 1", &mut list);
        assert!(outcome.reply.contains("[T][X] read book"));
        assert!(list.get(0).unwrap().done);

        let outcome = execute("unmark 1", &mut list);
        assert!(outcome.reply.contains("[T][ ] read book"));
        assert!(!list.get(0).unwrap().done);
    }

    #[test]
    fn delete_reports_the_removed_task_and_new_count() {
        let mut list = list_with(&["todo a", "todo b"]);
        let outcome = execute("delete 1", &mut list);
        assert!(outcome.reply.contains("[T][ ] a"));
        assert!(outcome.reply.contains("1 tasks in your list"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().description, "b");
    }

    #[test]
    fn list_renders_one_based_positions() {
        let mut list = list_with(&["todo a", "todo b"]);
        let reply = execute("list", &mut list).reply;
        assert!(reply.contains("1. [T][ ] a"));
        assert!(reply.contains("2. [T][ ] b"));
    }

    #[test]
    fn list_when_empty() {
        let mut list = TaskList::new();
        assert_eq!(execute("list", &mut list).reply, "Your list is empty.");
    }

    #[test]
    fn find_matches_keep_their_positions() {
        let mut list = list_with(&["todo read book", "todo walk dog", "todo book club"]);
        let reply = execute("find book", &mut list).reply;
        assert!(reply.contains("1. [T][ ] read book"));
        assert!(reply.contains("3. [T][ ] book club"));
        assert!(!reply.contains("walk dog"));
    }

    #[test]
    fn find_with_no_matches_is_not_an_error() {
        let mut list = list_with(&["todo read book"]);
        let outcome = execute("find xyzzy", &mut list);
        assert_eq!(outcome.reply, "No matching tasks.");
        assert!(!outcome.mutated);
    }

    #[test]
    fn find_without_argument_matches_everything() {
        let mut list = list_with(&["todo a", "todo b"]);
        let reply = execute("find", &mut list).reply;
        assert!(reply.contains("1. [T][ ] a"));
        assert!(reply.contains("2. [T][ ] b"));
    }

    #[test]
    fn undo_reverses_the_last_mutation() {
        let mut list = list_with(&["todo a", "todo b"]);
        execute("delete 2", &mut list);
        let outcome = execute("undo", &mut list);
        assert!(outcome.mutated);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().description, "b");
    }

    #[test]
    fn undo_with_nothing_to_undo_is_informational() {
        let mut list = TaskList::new();
        let outcome = execute("undo", &mut list);
        assert!(!outcome.mutated);
        assert_eq!(outcome.reply, "There is nothing to undo.");

        // a second consecutive undo after a real one is the same no-op
        execute("todo a", &mut list);
        assert!(execute("undo", &mut list).mutated);
        let outcome = execute("undo", &mut list);
        assert!(!outcome.mutated);
        assert!(list.is_empty());
    }

    #[test]
    fn failed_validation_leaves_undo_history_intact() {
        let mut list = list_with(&["todo a"]);
        execute("mark 1", &mut list);
        execute("mark 9", &mut list); // rejected before dispatch
        assert!(execute("undo", &mut list).mutated);
        assert!(!list.get(0).unwrap().done);
    }
}
