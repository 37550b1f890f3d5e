use super::*;

/// Reads the answer key for a block of the given format.
///
/// True/false answers accept a letter code (`C`, `E`, `V`, `F`, `T`, `A`,
/// `B`), a code followed by the restated word (`E (ERRADO)`) or the word
/// itself. Affirmative always maps to `A` and negative to `B`, whatever
/// letters the source language uses.
pub fn extract_answer_key(block: &str, format: DetectedFormat) -> AnswerKey {
    match format.question_kind() {
        QuestionKind::TrueFalse => true_false_answer(block),
        QuestionKind::MultipleChoice => multiple_choice_answer(block),
    }
}

fn multiple_choice_answer(block: &str) -> AnswerKey {
    ANSWER_LETTER
        .captures(block)
        .and_then(|captures| captures["letter"].chars().next())
        .and_then(OptionLetter::from_char)
        .map(AnswerKey::from)
        .unwrap_or(AnswerKey::Unknown)
}

fn true_false_answer(block: &str) -> AnswerKey {
    ANSWER_LINE
        .captures_iter(block)
        .find_map(|captures| answer_polarity(&captures["value"]))
        .map(Polarity::answer_key)
        .unwrap_or(AnswerKey::Unknown)
}

fn answer_polarity(value: &str) -> Option<Polarity> {
    let first = value
        .split(|ch: char| !ch.is_alphanumeric())
        .find(|token| !token.is_empty())?;

    if let Some(polarity) = word_polarity(first) {
        return Some(polarity);
    }

    let mut chars = first.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => code_polarity(code),
        _ => None,
    }
}
