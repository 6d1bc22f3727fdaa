//! Comment block formatting for generated macro files.

/// Format raw comment lines into `# `-prefixed output lines.
///
/// Trailing whitespace is stripped; leading whitespace is preserved so
/// indented comments stay indented. Lines that are empty (or whitespace-only)
/// become blank lines. The prefix is applied unconditionally, so a line that
/// already starts with `#` comes out doubled (`# # foo`) - the formatter
/// never inspects content for an existing marker.
///
/// Output has exactly one line per input line, in input order.
pub fn format_comments(comments: &[String]) -> Vec<String> {
    let mut formatted = Vec::with_capacity(comments.len());

    for comment in comments {
        let stripped = comment.trim_end();
        if stripped.is_empty() {
            formatted.push(String::new());
        } else {
            formatted.push(format!("# {}", stripped));
        }
    }

    formatted
}
