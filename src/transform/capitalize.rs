/// Puts every tag on its own line and capitalises the first letter of each tag name
///
/// The markup is split at `>` and joined back with `>` followed by a newline.
/// Only the first letter of a tag name changes case, attributes are untouched.
pub fn capitalize_tags(input: &str) -> String {
    input
        .split('>')
        .map(capitalize_segment)
        .collect::<Vec<String>>()
        .join(">\n")
}

/// Uppercases the leading characters of a segment up to and including the first
/// letter of the tag name
fn capitalize_segment(segment: &str) -> String {
    if segment.trim().chars().count() <= 1 {
        return segment.to_string();
    }

    let closing = segment.chars().nth(1) == Some('/');
    let prefix_len = if closing { 3 } else { 2 };
    let split_at = segment
        .char_indices()
        .nth(prefix_len)
        .map_or(segment.len(), |(index, _)| index);

    let (head, tail) = segment.split_at(split_at);
    format!("{}{}", head.to_uppercase(), tail)
}
