/// Tokenize a raw command line.
///
/// Element 0 is the command word: the text before the first space. A line
/// with no space at all yields only that one element. Otherwise element 1 is
/// the primary description (the first `/`-delimited segment, trimmed), and
/// elements 2.. are the later segments with their leading tag word (`by`,
/// `from`, `to`) stripped off.
///
/// No case folding happens here; the dispatcher folds the command word.
pub fn parse_input(input: &str) -> Vec<String> {
    let Some((word, remainder)) = input.split_once(' ') else {
        return vec![input.to_string()];
    };

    let mut parts = vec![word.to_string()];

    let mut segments = remainder.split('/');
    // First segment is the primary description
    let description = segments.next().unwrap_or("");
    parts.push(description.trim().to_string());

    for segment in segments {
        let segment = segment.trim();
        // Drop the tag word up to the first space. A segment with no space
        // is passed through as-is and left for validation downstream.
        let value = match segment.split_once(' ') {
            Some((_tag, rest)) => rest.trim(),
            None => segment,
        };
        parts.push(value.to_string());
    }

    parts
}
