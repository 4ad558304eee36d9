use std::fmt;

use chrono::NaiveDate;

/// Input grammar for dates: ISO `2024-12-31`.
const DATE_INPUT: &str = "%Y-%m-%d";
/// Display pattern for dates in rendered task lines: `Tue, Dec 31 2024`.
const DATE_DISPLAY: &str = "%a, %b %-d %Y";

/// Error for a date string that does not match the calendar-date grammar.
#[derive(Debug, Clone, thiserror::Error)]
#[error("not a calendar date: {input}")]
pub struct DateError {
    pub input: String,
}

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s, DATE_INPUT).map_err(|_| DateError {
        input: s.to_string(),
    })
}

/// Variant-specific task fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// The letter inside the leading type tag `[T]`/`[D]`/`[E]`
    pub fn tag_char(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// A tracked unit of work: a description, a completion flag, and the
/// variant-specific date bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    /// Create a plain todo. Not done.
    pub fn todo(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Create a deadline task from a raw date string.
    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self, DateError> {
        Ok(Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline {
                by: parse_date(by)?,
            },
        })
    }

    /// Create an event task from two raw date strings. No ordering between
    /// `from` and `to` is enforced.
    pub fn event(description: impl Into<String>, from: &str, to: &str) -> Result<Self, DateError> {
        Ok(Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Event {
                from: parse_date(from)?,
                to: parse_date(to)?,
            },
        })
    }

    /// The character inside the completion marker `[X]`/`[ ]`
    pub fn done_char(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }
}

/// Format a date for display in a rendered task line.
fn display_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY).to_string()
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag_char(),
            self.done_char(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by {})", display_date(*by)),
            TaskKind::Event { from, to } => {
                write!(f, " (from {} to {})", display_date(*from), display_date(*to))
            }
        }
    }
}
