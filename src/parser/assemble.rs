use super::*;

/// Why a block did not yield a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Unrecognized format and too short to be worth extracting.
    Unrecognized,
    StatementTooShort,
    TooFewOptions { found: usize, required: usize },
    /// Strict mode only.
    MissingTrueFalseMarkers,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => f.write_str("format not recognized"),
            Self::StatementTooShort => write!(
                f,
                "statement missing or shorter than {MIN_STATEMENT_CHARS} characters"
            ),
            Self::TooFewOptions { found, required } => {
                write!(f, "found {found} options, at least {required} required")
            }
            Self::MissingTrueFalseMarkers => {
                f.write_str("true/false block lacks an affirmative and a negative marker")
            }
        }
    }
}

/// Assembles one block with default options; `None` means rejected.
pub fn assemble_question(block: &str) -> Option<ParsedQuestion> {
    assemble_question_with(block, &ParseOptions::default()).ok()
}

pub fn assemble_question_with(
    block: &str,
    options: &ParseOptions,
) -> Result<ParsedQuestion, Rejection> {
    let detected_format = detect_format(block);
    if detected_format == DetectedFormat::Unknown && char_len(block) < NOISE_THRESHOLD_CHARS {
        return Err(Rejection::Unrecognized);
    }

    let question_kind = detected_format.question_kind();
    let statement = extract_statement(block).ok_or(Rejection::StatementTooShort)?;

    let answer_options = extract_options(block, detected_format, options)?;
    let required = question_kind.min_options();
    if answer_options.len() < required {
        return Err(Rejection::TooFewOptions {
            found: answer_options.len(),
            required,
        });
    }

    let mut correct_key = extract_answer_key(block, detected_format);
    if let Some(letter) = correct_key.letter() {
        if !answer_options.contains_key(&letter) {
            debug!(key = %correct_key, "answer key names a missing option, treating as unknown");
            correct_key = AnswerKey::Unknown;
        }
    }

    let topic = extract_topic(block);
    let (source_board, source_year) = match detected_format {
        DetectedFormat::MultipleChoiceWithMetadata
        | DetectedFormat::TrueFalseBracketed
        | DetectedFormat::TrueFalseBareWord => (extract_board(block), extract_year(block)),
        DetectedFormat::MultipleChoiceSimple | DetectedFormat::Unknown => (None, None),
    };

    let confidence = assign_confidence(
        correct_key,
        question_kind,
        answer_options.len(),
        topic.defaulted,
    );

    let mut question = ParsedQuestion {
        sequence_number: extract_sequence_number(block),
        source_board,
        source_year,
        topic: topic.topic,
        sub_topic: topic.sub_topic,
        statement,
        options: answer_options,
        correct_key,
        confidence,
        detected_format,
        question_kind,
        issues: Vec::new(),
    };
    question.issues = validate_question(&question);

    Ok(question)
}

fn assign_confidence(
    correct_key: AnswerKey,
    question_kind: QuestionKind,
    option_count: usize,
    topic_defaulted: bool,
) -> Confidence {
    if !correct_key.is_resolved() {
        return Confidence::Low;
    }

    let partial_options = question_kind == QuestionKind::MultipleChoice && option_count < 5;
    if partial_options || topic_defaulted {
        return Confidence::Medium;
    }

    Confidence::High
}
