//! Text helpers for document generation.

/// Removes the indentation shared by a block of text.
///
/// Leading blank lines are dropped, the indentation of the first non-blank
/// line is stripped from every line that starts with it, and trailing
/// whitespace is trimmed. Lines indented less than the first one lose only
/// their leading whitespace.
///
/// ```rust
/// use arbor::mark::dedent;
///
/// let long = "\n\t\tHere is a long description.\n\t\tOn multiple lines.\n\t";
/// assert_eq!(dedent(long), "Here is a long description.\nOn multiple lines.");
/// ```
pub fn dedent(text: &str) -> String {
    let mut lines = text.lines().skip_while(|l| l.trim().is_empty()).peekable();

    let prefix: String = match lines.peek() {
        Some(first) => first
            .chars()
            .take_while(|c| c.is_whitespace())
            .collect(),
        None => return String::new(),
    };

    let out: Vec<&str> = lines
        .map(|line| match line.strip_prefix(prefix.as_str()) {
            Some(rest) => rest,
            None => line.trim_start(),
        })
        .collect();

    out.join("\n").trim_end().to_string()
}

/// Indents every non-empty line by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
