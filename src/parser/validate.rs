use super::*;

/// Integrity checks for a question, fresh from the assembler or edited by a
/// reviewer. All checks run; an empty list means the record is clean. A
/// default topic is reported too, as a soft signal for reviewers.
pub fn validate_question(question: &ParsedQuestion) -> Vec<String> {
    let mut issues = Vec::new();

    let statement_chars = char_len(&question.statement);
    if statement_chars < MIN_STATEMENT_CHARS {
        issues.push(format!(
            "statement has {statement_chars} characters, at least {MIN_STATEMENT_CHARS} required"
        ));
    }

    let option_count = question
        .options
        .values()
        .filter(|text| !text.trim().is_empty())
        .count();
    match question.question_kind {
        QuestionKind::MultipleChoice
            if option_count < QuestionKind::MultipleChoice.min_options() =>
        {
            issues.push(format!(
                "multiple choice question has {option_count} options, at least {} required",
                QuestionKind::MultipleChoice.min_options()
            ));
        }
        QuestionKind::TrueFalse if option_count != QuestionKind::TrueFalse.min_options() => {
            issues.push(format!(
                "true/false question has {option_count} options, exactly {} required",
                QuestionKind::TrueFalse.min_options()
            ));
        }
        _ => {}
    }

    match question.correct_key.letter() {
        None => issues.push("answer key could not be determined".to_string()),
        Some(letter) if !question.options.contains_key(&letter) => {
            issues.push(format!("answer key {letter} does not match any option"));
        }
        Some(_) => {}
    }

    if question.topic.trim() == DEFAULT_TOPIC {
        issues.push(format!("topic fell back to the default \"{DEFAULT_TOPIC}\""));
    }

    issues
}
