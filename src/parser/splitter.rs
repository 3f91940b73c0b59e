/// Split a string on every occurrence of any of the given literal delimiters.
///
/// Delimiters are pure cut points; they never appear in the output. Empty
/// spans between consecutive delimiters, or at the string boundaries, are
/// dropped rather than emitted as empty strings. Spans are not trimmed here.
pub fn split_by_delimiters(source: &str, delimiters: &[&str]) -> Vec<String> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < source.len() {
        let matched = delimiters
            .iter()
            .find(|d| !d.is_empty() && source[pos..].starts_with(**d));

        if let Some(delim) = matched {
            if pos > start {
                spans.push(source[start..pos].to_string());
            }
            pos += delim.len();
            start = pos;
        } else {
            // No delimiter here; advance one whole character
            pos += source[pos..].chars().next().map_or(1, |c| c.len_utf8());
        }
    }

    if start < source.len() {
        spans.push(source[start..].to_string());
    }

    spans
}
