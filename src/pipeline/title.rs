/// Only the file header is searched for a title comment.
const MAX_SCAN_LINES: usize = 21;

/// Contest marker first, then the localized "problem" markers.
const TITLE_MARKERS: &[&str] = &["LeetCode", "Problem", "题目"];

pub fn placeholder_title(problem_id: u32) -> String {
    format!("Problem {}", problem_id)
}

/// Text after the first ASCII or full-width colon.
fn after_colon(line: &str) -> Option<&str> {
    line.char_indices()
        .find(|(_, c)| *c == ':' || *c == '：')
        .map(|(i, c)| &line[i + c.len_utf8()..])
}

fn title_from_line(line: &str) -> Option<String> {
    let line = line.trim();
    let marker = TITLE_MARKERS.iter().copied().find(|m| line.contains(m))?;
    let title = after_colon(line)?.trim();

    if title.is_empty() || title.contains(marker) {
        return None;
    }
    Some(title.to_string())
}

/// Recover the problem title from a comment such as `// Problem: Two Sum`
/// in the first 21 lines of `code`, falling back to `Problem <id>`.
pub fn extract_title(code: &str, fallback_id: u32) -> String {
    code.lines()
        .take(MAX_SCAN_LINES)
        .find_map(title_from_line)
        .unwrap_or_else(|| placeholder_title(fallback_id))
}
