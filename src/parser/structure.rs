use super::*;

/// Which structural indicator types a document contains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StructureSignals {
    pub question_headings: bool,
    pub topic_labels: bool,
    pub statement_labels: bool,
    pub option_labels: bool,
    pub answer_labels: bool,
    pub separators: bool,
}

impl StructureSignals {
    pub fn scan(text: &str) -> Self {
        let text = normalize_document(text);
        Self {
            question_headings: QUESTION_HEADING.is_match(&text),
            topic_labels: TOPIC_LINE.is_match(&text),
            statement_labels: STATEMENT_LABEL.is_match(&text),
            option_labels: OPTIONS_LABEL.is_match(&text) || text.lines().any(is_option_line),
            answer_labels: ANSWER_LINE.is_match(&text),
            separators: SEPARATOR_LINE.is_match(&text),
        }
    }

    pub fn count(&self) -> usize {
        [
            self.question_headings,
            self.topic_labels,
            self.statement_labels,
            self.option_labels,
            self.answer_labels,
            self.separators,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Cheap pre-filter: is this document structured enough for the heuristic
/// parser, or should it go to another extraction path?
pub fn looks_structured(text: &str) -> bool {
    StructureSignals::scan(text).count() >= MIN_STRUCTURE_SIGNALS
}
