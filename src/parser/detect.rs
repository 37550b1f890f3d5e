use super::*;

/// Surface features of a block that the format rules look at.
#[derive(Debug, Default, Clone, Copy)]
struct BlockSignals {
    bracket_marker: bool,
    bare_marker: bool,
    board: bool,
    year: bool,
    topic: bool,
    statement_label: bool,
    options_marker: bool,
}

impl BlockSignals {
    fn scan(block: &str) -> Self {
        Self {
            bracket_marker: TRUE_FALSE_BRACKET.is_match(block),
            bare_marker: block.lines().any(is_bare_true_false_line),
            board: BOARD_LINE.is_match(block),
            year: YEAR_FIELD.is_match(block),
            topic: TOPIC_LINE.is_match(block),
            statement_label: STATEMENT_LABEL.is_match(block),
            options_marker: OPTIONS_LABEL.is_match(block) || block.lines().any(is_option_line),
        }
    }

    fn has_metadata(&self) -> bool {
        self.board && self.year
    }
}

struct FormatRule {
    name: &'static str,
    classify: fn(&BlockSignals) -> Option<DetectedFormat>,
}

// Evaluated top to bottom, first match wins. The true/false rule must come
// first: such blocks also declare board and year and would otherwise be
// routed to the metadata multiple-choice extraction.
const FORMAT_RULES: &[FormatRule] = &[
    FormatRule {
        name: "true_false_with_metadata",
        classify: true_false_with_metadata,
    },
    FormatRule {
        name: "multiple_choice_with_metadata",
        classify: multiple_choice_with_metadata,
    },
    FormatRule {
        name: "multiple_choice_complete",
        classify: multiple_choice_complete,
    },
    FormatRule {
        name: "multiple_choice_partial",
        classify: multiple_choice_partial,
    },
];

fn true_false_with_metadata(signals: &BlockSignals) -> Option<DetectedFormat> {
    if !(signals.bracket_marker || signals.bare_marker) || !signals.has_metadata() {
        return None;
    }

    if signals.bracket_marker {
        Some(DetectedFormat::TrueFalseBracketed)
    } else {
        Some(DetectedFormat::TrueFalseBareWord)
    }
}

fn multiple_choice_with_metadata(signals: &BlockSignals) -> Option<DetectedFormat> {
    (signals.has_metadata() && signals.topic).then_some(DetectedFormat::MultipleChoiceWithMetadata)
}

fn multiple_choice_complete(signals: &BlockSignals) -> Option<DetectedFormat> {
    (signals.topic && signals.statement_label && signals.options_marker)
        .then_some(DetectedFormat::MultipleChoiceSimple)
}

// Partial structure; the missing fields degrade confidence later.
fn multiple_choice_partial(signals: &BlockSignals) -> Option<DetectedFormat> {
    (signals.statement_label || signals.options_marker)
        .then_some(DetectedFormat::MultipleChoiceSimple)
}

pub fn detect_format(block: &str) -> DetectedFormat {
    let signals = BlockSignals::scan(block);

    for rule in FORMAT_RULES {
        if let Some(format) = (rule.classify)(&signals) {
            debug!(rule = rule.name, format = %format, "format detected");
            return format;
        }
    }

    DetectedFormat::Unknown
}
