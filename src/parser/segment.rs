use super::*;

/// Splits a document into candidate question blocks, in source order.
///
/// Strategies are tried in order and the first one producing more than one
/// substantial block wins: explicit `---` separator lines, then
/// `QUESTION n` headings. Otherwise the whole document is one block.
pub fn segment_document(text: &str) -> Vec<String> {
    let normalized = normalize_document(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let by_separator = keep_substantial(SEPARATOR_LINE.split(&normalized));
    if by_separator.len() > 1 {
        debug!(blocks = by_separator.len(), "segmented on separator lines");
        return by_separator;
    }

    let by_heading = keep_substantial(split_at_headings(&normalized).into_iter());
    if by_heading.len() > 1 {
        debug!(blocks = by_heading.len(), "segmented on question headings");
        return by_heading;
    }

    debug!("no block delimiters found, treating document as a single block");
    vec![normalized]
}

/// Cuts before every heading so each heading stays with the block it opens.
fn split_at_headings(text: &str) -> Vec<&str> {
    let mut cuts = QUESTION_HEADING
        .find_iter(text)
        .map(|found| found.start())
        .filter(|start| *start > 0)
        .collect::<Vec<usize>>();
    cuts.push(text.len());

    let mut pieces = Vec::with_capacity(cuts.len());
    let mut from = 0usize;
    for to in cuts {
        pieces.push(&text[from..to]);
        from = to;
    }

    pieces
}

fn keep_substantial<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<String> {
    segments
        .map(str::trim)
        .filter(|segment| segment.chars().count() > MIN_BLOCK_CHARS)
        .map(ToOwned::to_owned)
        .collect()
}
