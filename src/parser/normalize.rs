use super::*;

static HORIZONTAL_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t\u{00A0}\u{2000}-\u{200A}\u{202F}\u{3000}]+")
        .expect("valid whitespace regex")
});

/// Unifies line endings and collapses horizontal whitespace runs to a single
/// space. Line structure is preserved; only surrounding blank space changes.
pub fn normalize_document(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .split('\n')
        .map(|line| HORIZONTAL_WHITESPACE.replace_all(line, " ").trim_end().to_string())
        .collect::<Vec<String>>()
        .join("\n")
        .trim()
        .to_string()
}
