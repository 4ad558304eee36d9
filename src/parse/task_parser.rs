use crate::model::task::{Task, TaskKind, parse_date};

/// Decode one storage line into a task.
///
/// Lines look like `D | 0 | return book | 2024-12-31`: variant tag, done
/// flag, description, then the variant's dates. Dates are peeled off the
/// *end* of the line, so a description containing the ` | ` delimiter still
/// decodes correctly. Returns `None` for anything malformed; callers collect
/// such lines as dropped rather than failing the whole load.
pub fn decode_task(line: &str) -> Option<Task> {
    let (tag, rest) = line.split_once(" | ")?;
    let (done, rest) = rest.split_once(" | ")?;
    let done = match done {
        "1" => true,
        "0" => false,
        _ => return None,
    };

    let (description, kind) = match tag {
        "T" => (rest, TaskKind::Todo),
        "D" => {
            let (description, by) = rest.rsplit_once(" | ")?;
            (
                description,
                TaskKind::Deadline {
                    by: parse_date(by).ok()?,
                },
            )
        }
        "E" => {
            let (rest, to) = rest.rsplit_once(" | ")?;
            let (description, from) = rest.rsplit_once(" | ")?;
            (
                description,
                TaskKind::Event {
                    from: parse_date(from).ok()?,
                    to: parse_date(to).ok()?,
                },
            )
        }
        _ => return None,
    };

    if description.is_empty() {
        return None;
    }

    Some(Task {
        description: description.to_string(),
        done,
        kind,
    })
}
