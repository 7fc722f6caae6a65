// Output formatting: terminal summary, overlap chart and PDF report.

pub mod pdf;
pub mod terminal;

/// Shown in the terminal summary when the resume covers every job keyword.
pub const NO_MISSING_SUMMARY: &str = "None! Great match!";

/// Shown in the exported report when the resume covers every job keyword.
pub const NO_MISSING_REPORT: &str = "None! Excellent match!";

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Words longer than the limit get a line of their own rather than being split.
/// Always returns at least one line, so blank input keeps its slot in a layout.
pub fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
