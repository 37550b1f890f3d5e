use rstest::rstest;

use super::*;

const CREDIT_BLOCK: &str = "\
QUESTION 1
TOPIC: Credit Cards / Revolving Credit
STATEMENT: Which statement best describes revolving credit on a credit card?
A) The balance must be paid in full every month.
B) Unpaid balances roll over and accrue interest.
C) It only applies to debit cards.
D) It is a fixed-term installment loan.
E) It cannot exceed the minimum payment.
ANSWER: B";

const BARE_TRUE_FALSE_BLOCK: &str = "\
BOARD: CESPE
YEAR: 2018
TOPIC: Banking Law
STATEMENT: Revolving credit is always cheaper than a personal loan.
TRUE
FALSE
ANSWER: E (ERRADO)";

const BRACKET_TRUE_FALSE_BLOCK: &str = "\
QUESTÃO 7
BANCA: CESPE
ANO: 2019
ASSUNTO: Direito Constitucional - Direitos Fundamentais
ENUNCIADO: A casa é asilo inviolável do indivíduo, salvo exceções previstas.
( ) CERTO ( ) ERRADO
GABARITO: C";

const METADATA_CHOICE_BLOCK: &str = "\
QUESTÃO 3
BANCA: FGV | ANO: 2021
ASSUNTO: Matemática Financeira / Juros Compostos
ENUNCIADO: Um capital aplicado a juros compostos de 10% ao mês rende quanto em dois meses?
(A) R$ 200,00
(B) R$ 210,00
(C) R$ 220,00
(D) R$ 100,00
(E) R$ 110,00
GABARITO: B";

#[test]
fn normalize_document_unifies_line_endings_and_spacing() {
    let normalized = normalize_document("  TOPIC:\tLaw   Basics \r\nSTATEMENT:  Text\rnext  ");
    assert_eq!(normalized, "TOPIC: Law Basics\nSTATEMENT: Text\nnext");
}

#[test]
fn segment_document_prefers_separator_lines() {
    let text = format!("{CREDIT_BLOCK}\n---\n{BARE_TRUE_FALSE_BLOCK}\n-----\nshort tail");
    let blocks = segment_document(&text);

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("QUESTION 1"));
    assert!(blocks[1].starts_with("BOARD: CESPE"));
}

#[test]
fn segment_document_keeps_heading_with_its_block() {
    let text = format!(
        "{CREDIT_BLOCK}\n{}",
        CREDIT_BLOCK.replace("QUESTION 1", "QUESTION 2")
    );
    let blocks = segment_document(&text);

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("QUESTION 1"));
    assert!(blocks[1].starts_with("QUESTION 2"));
    assert!(blocks[0].ends_with("ANSWER: B"));
}

#[test]
fn segment_document_falls_back_to_single_block() {
    let blocks = segment_document(BARE_TRUE_FALSE_BLOCK);
    assert_eq!(blocks, vec![BARE_TRUE_FALSE_BLOCK.to_string()]);
}

#[test]
fn segment_document_returns_nothing_for_blank_input() {
    assert!(segment_document("  \n\t\n").is_empty());
}

#[rstest]
#[case::simple(CREDIT_BLOCK, DetectedFormat::MultipleChoiceSimple)]
#[case::metadata(METADATA_CHOICE_BLOCK, DetectedFormat::MultipleChoiceWithMetadata)]
#[case::bracketed(BRACKET_TRUE_FALSE_BLOCK, DetectedFormat::TrueFalseBracketed)]
#[case::bare_word(BARE_TRUE_FALSE_BLOCK, DetectedFormat::TrueFalseBareWord)]
#[case::prose(
    "Just some notes about the lecture with nothing that looks like a question.",
    DetectedFormat::Unknown
)]
fn detect_format_classifies_dialects(#[case] block: &str, #[case] expected: DetectedFormat) {
    assert_eq!(detect_format(block), expected);
}

#[test]
fn detect_format_checks_true_false_before_metadata() {
    // board, year and topic are all present, as for format2
    assert!(BARE_TRUE_FALSE_BLOCK.contains("TOPIC:"));
    assert_eq!(
        detect_format(BARE_TRUE_FALSE_BLOCK),
        DetectedFormat::TrueFalseBareWord
    );
}

#[test]
fn detect_format_needs_metadata_for_true_false() {
    let block = "STATEMENT: The central bank sets the basic interest rate.\nTRUE\nFALSE";
    assert_eq!(detect_format(block), DetectedFormat::MultipleChoiceSimple);
}

#[rstest]
#[case("Credit Cards / Revolving Credit", "Credit Cards", Some("Revolving Credit"))]
#[case("Law - Civil - Contracts", "Law", Some("Civil - Contracts"))]
#[case("Economics: Inflation", "Economics", Some("Inflation"))]
#[case("Tax - Income / Deductions", "Tax - Income", Some("Deductions"))]
#[case("Statistics", "Statistics", None)]
#[case("Ethics / Compliance / Audit", "Ethics", Some("Compliance / Audit"))]
fn split_topic_uses_first_listed_separator(
    #[case] line: &str,
    #[case] topic: &str,
    #[case] sub_topic: Option<&str>,
) {
    let fields = split_topic(line);
    assert_eq!(fields.topic, topic);
    assert_eq!(fields.sub_topic.as_deref(), sub_topic);
    assert!(!fields.defaulted);
}

#[test]
fn extract_topic_defaults_without_topic_line() {
    let fields = extract_topic("STATEMENT: What is the capital of France, in your opinion?");
    assert_eq!(fields.topic, DEFAULT_TOPIC);
    assert_eq!(fields.sub_topic, None);
    assert!(fields.defaulted);
}

#[test]
fn extract_statement_stops_before_options() {
    let statement = extract_statement(CREDIT_BLOCK).expect("statement");
    assert_eq!(
        statement,
        "Which statement best describes revolving credit on a credit card?"
    );
}

#[test]
fn extract_statement_spans_lines_until_marker() {
    let block = "ENUNCIADO: Julgue o item a seguir.\nO contrato de cartão de crédito é de adesão.\n( ) CERTO ( ) ERRADO";
    let statement = extract_statement(block).expect("statement");
    assert_eq!(
        statement,
        "Julgue o item a seguir.\nO contrato de cartão de crédito é de adesão."
    );
}

#[test]
fn extract_statement_falls_back_to_text_after_topic() {
    let block = "QUESTION 4\nTOPIC: History\nWho was the first emperor of Rome after the Republic?\nA) Julius Caesar\nB) Augustus\nC) Nero";
    let statement = extract_statement(block).expect("statement");
    assert_eq!(statement, "Who was the first emperor of Rome after the Republic?");
}

#[test]
fn extract_statement_rejects_short_text() {
    assert_eq!(extract_statement("STATEMENT: Too short.\nA) x\nB) y"), None);
}

#[test]
fn extract_options_reads_bare_letter_lines() {
    let found = extract_options(
        CREDIT_BLOCK,
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");

    assert_eq!(found.len(), 5);
    assert_eq!(
        found[&OptionLetter::B],
        "Unpaid balances roll over and accrue interest."
    );
}

#[test]
fn extract_options_reads_parenthesized_letters() {
    let found = extract_options(
        METADATA_CHOICE_BLOCK,
        DetectedFormat::MultipleChoiceWithMetadata,
        &ParseOptions::default(),
    )
    .expect("options");

    assert_eq!(found.len(), 5);
    assert_eq!(found[&OptionLetter::E], "R$ 110,00");
}

#[test]
fn extract_options_earlier_pass_wins_per_letter() {
    let block = "STATEMENT: Pick the right one among these.\n(A) first choice\nA) shadowed choice\nB) second choice\nC) third choice";
    let found = extract_options(
        block,
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");

    assert_eq!(found.len(), 3);
    assert_eq!(found[&OptionLetter::A], "first choice");
    assert_eq!(found[&OptionLetter::C], "third choice");
}

#[test]
fn extract_options_recovers_single_line_dump() {
    let block = "TOPIC: Geography\nSTATEMENT: Which of these cities is the capital of Australia?\nOPTIONS:\nChoose one: A) Sydney Harbour B) Canberra City C) Melbourne Town D) Perth Coast\nANSWER: B";
    let found = extract_options(
        block,
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");

    assert_eq!(found.len(), 4);
    assert_eq!(found[&OptionLetter::A], "Sydney Harbour");
    assert_eq!(found[&OptionLetter::B], "Canberra City");
    assert_eq!(found[&OptionLetter::D], "Perth Coast");
}

#[test]
fn extract_options_inline_skips_tiny_fragments() {
    let found = extract_options(
        "A) ok B) fine C) sure",
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");

    assert!(found.len() < 3);
}

#[test]
fn extract_options_reads_lowercase_letters() {
    let block = "ASSUNTO: Economia\nENUNCIADO: Qual índice mede a inflação oficial no Brasil?\na) IPCA\nb) Selic\nc) CDI\nd) IGP-M\ne) TR\nGABARITO: A";
    let found = extract_options(
        block,
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");

    assert_eq!(found.len(), 5);
    assert_eq!(found[&OptionLetter::A], "IPCA");
    assert_eq!(found[&OptionLetter::D], "IGP-M");
}

#[test]
fn hyphenated_word_is_not_an_option_line() {
    let block = "TOPIC: Networking\nSTATEMENT: Consider the following about messaging systems.\nE-mail protocols rely on SMTP for sending messages.\nA) Only for outgoing mail\nB) Only for incoming mail\nC) Never used today\nANSWER: A";

    assert_eq!(
        extract_statement(block).as_deref(),
        Some("Consider the following about messaging systems.\nE-mail protocols rely on SMTP for sending messages.")
    );

    let found = extract_options(
        block,
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");
    assert_eq!(found.len(), 3);
    assert!(!found.contains_key(&OptionLetter::E));
}

#[test]
fn dash_delimited_option_lines_still_parse() {
    let found = extract_options(
        "A - first choice\nB - second choice\nC - third choice",
        DetectedFormat::MultipleChoiceSimple,
        &ParseOptions::default(),
    )
    .expect("options");

    assert_eq!(found.len(), 3);
    assert_eq!(found[&OptionLetter::B], "second choice");
}

#[rstest]
#[case::bracketed(BRACKET_TRUE_FALSE_BLOCK, DetectedFormat::TrueFalseBracketed)]
#[case::bare_word(BARE_TRUE_FALSE_BLOCK, DetectedFormat::TrueFalseBareWord)]
fn extract_options_synthesizes_true_false_pair(
    #[case] block: &str,
    #[case] format: DetectedFormat,
) {
    let found = extract_options(block, format, &ParseOptions::default()).expect("options");
    assert_eq!(
        found,
        BTreeMap::from([
            (OptionLetter::A, TRUE_OPTION_TEXT.to_string()),
            (OptionLetter::B, FALSE_OPTION_TEXT.to_string()),
        ])
    );
}

#[test]
fn scan_true_false_markers_sees_both_passes() {
    let bracketed = options::scan_true_false_markers("( ) Certo ( ) errado");
    assert!(bracketed.complete());

    let bare = options::scan_true_false_markers("Statement\n  Verdadeiro \nFALSO");
    assert!(bare.complete());

    let partial = options::scan_true_false_markers("Statement\nTRUE");
    assert!(partial.affirmative);
    assert!(!partial.negative);
}

#[test]
fn extract_options_strict_mode_requires_both_markers() {
    let block = "BOARD: X\nYEAR: 2018\nSTATEMENT: The statement has only one marker below.\nTRUE";
    let strict = ParseOptions {
        strict_true_false: true,
    };

    assert_eq!(
        extract_options(block, DetectedFormat::TrueFalseBareWord, &strict),
        Err(Rejection::MissingTrueFalseMarkers)
    );
    assert_eq!(
        extract_options(block, DetectedFormat::TrueFalseBareWord, &ParseOptions::default())
            .map(|found| found.len()),
        Ok(2)
    );
}

#[rstest]
#[case("C", AnswerKey::A)]
#[case("E", AnswerKey::B)]
#[case("C (CERTO)", AnswerKey::A)]
#[case("E (ERRADO)", AnswerKey::B)]
#[case("Certo", AnswerKey::A)]
#[case("errado", AnswerKey::B)]
#[case("V", AnswerKey::A)]
#[case("F", AnswerKey::B)]
#[case("Verdadeiro", AnswerKey::A)]
#[case("FALSO", AnswerKey::B)]
#[case("T", AnswerKey::A)]
#[case("TRUE", AnswerKey::A)]
#[case("false", AnswerKey::B)]
#[case("A", AnswerKey::A)]
#[case("B", AnswerKey::B)]
#[case("maybe", AnswerKey::Unknown)]
fn extract_answer_key_maps_true_false_wording(#[case] value: &str, #[case] expected: AnswerKey) {
    for label in ["ANSWER", "GABARITO", "Resposta correta"] {
        let block = format!("STATEMENT: Some statement here.\n{label}: {value}");
        assert_eq!(
            extract_answer_key(&block, DetectedFormat::TrueFalseBareWord),
            expected,
            "{label}: {value}"
        );
    }
}

#[rstest]
#[case("ANSWER: B", AnswerKey::B)]
#[case("CORRECT: d", AnswerKey::D)]
#[case("GABARITO: (E)", AnswerKey::E)]
#[case("Resposta: A) first", AnswerKey::A)]
#[case("Correct answer: B", AnswerKey::B)]
#[case("Resposta correta: c", AnswerKey::C)]
#[case("The correct answer: D", AnswerKey::D)]
#[case("ANSWER: Banana", AnswerKey::Unknown)]
#[case("no answer line at all", AnswerKey::Unknown)]
fn extract_answer_key_reads_multiple_choice_letter(
    #[case] line: &str,
    #[case] expected: AnswerKey,
) {
    let block = format!("STATEMENT: Some statement here.\n{line}");
    assert_eq!(
        extract_answer_key(&block, DetectedFormat::MultipleChoiceSimple),
        expected
    );
}

#[test]
fn extract_metadata_fields() {
    assert_eq!(extract_board(METADATA_CHOICE_BLOCK).as_deref(), Some("FGV"));
    assert_eq!(extract_year(METADATA_CHOICE_BLOCK), Some(2021));
    assert_eq!(extract_sequence_number(METADATA_CHOICE_BLOCK), Some(3));
    assert_eq!(extract_board("BOARD: Vunesp YEAR: 2015").as_deref(), Some("Vunesp"));
    assert_eq!(extract_sequence_number("Questão Nº 12\nTOPIC: x"), Some(12));
    assert_eq!(extract_board(CREDIT_BLOCK), None);
}

#[test]
fn assemble_question_builds_high_confidence_record() {
    let question = assemble_question(CREDIT_BLOCK).expect("question");

    assert_eq!(question.sequence_number, Some(1));
    assert_eq!(question.topic, "Credit Cards");
    assert_eq!(question.sub_topic.as_deref(), Some("Revolving Credit"));
    assert_eq!(question.options.len(), 5);
    assert_eq!(question.correct_key, AnswerKey::B);
    assert_eq!(question.confidence, Confidence::High);
    assert_eq!(question.detected_format, DetectedFormat::MultipleChoiceSimple);
    assert_eq!(question.question_kind, QuestionKind::MultipleChoice);
    assert_eq!(question.source_board, None);
    assert!(question.issues.is_empty());
}

#[test]
fn assemble_question_reads_lowercase_options_and_trailing_answer_label() {
    let block = "TOPIC: Finance / Inflation\nSTATEMENT: Which index measures official consumer inflation in Brazil?\na) IPCA index\nb) Selic rate\nc) CDI rate\nd) IGP-M index\ne) TR rate\nCorrect answer: a";
    let question = assemble_question(block).expect("question");

    assert_eq!(question.options.len(), 5);
    assert_eq!(question.options[&OptionLetter::E], "TR rate");
    assert_eq!(question.correct_key, AnswerKey::A);
    assert_eq!(question.confidence, Confidence::High);
    assert!(question.issues.is_empty());
}

#[test]
fn assemble_question_keeps_metadata_for_metadata_formats() {
    let question = assemble_question(BRACKET_TRUE_FALSE_BLOCK).expect("question");

    assert_eq!(question.detected_format, DetectedFormat::TrueFalseBracketed);
    assert_eq!(question.question_kind, QuestionKind::TrueFalse);
    assert_eq!(question.source_board.as_deref(), Some("CESPE"));
    assert_eq!(question.source_year, Some(2019));
    assert_eq!(question.sequence_number, Some(7));
    assert_eq!(question.topic, "Direito Constitucional");
    assert_eq!(question.sub_topic.as_deref(), Some("Direitos Fundamentais"));
    assert_eq!(question.correct_key, AnswerKey::A);
    assert_eq!(question.confidence, Confidence::High);
}

#[test]
fn assemble_question_drops_key_missing_from_options() {
    let block = "TOPIC: Physics\nSTATEMENT: Which quantity is measured in newtons?\nA) Force\nB) Mass\nC) Energy\nANSWER: E";
    let question = assemble_question(block).expect("question");

    assert_eq!(question.correct_key, AnswerKey::Unknown);
    assert_eq!(question.confidence, Confidence::Low);
}

#[rstest]
#[case::few_options(
    "TOPIC: Physics\nSTATEMENT: Which quantity is measured in newtons?\nA) Force\nB) Mass\nC) Energy\nD) Power\nANSWER: A",
    Confidence::Medium
)]
#[case::default_topic(
    "STATEMENT: Which quantity is measured in newtons?\nA) Force\nB) Mass\nC) Energy\nD) Power\nE) Speed\nANSWER: A",
    Confidence::Medium
)]
#[case::no_key(
    "TOPIC: Physics\nSTATEMENT: Which quantity is measured in newtons?\nA) Force\nB) Mass\nC) Energy\nD) Power\nE) Speed",
    Confidence::Low
)]
fn assemble_question_degrades_confidence(#[case] block: &str, #[case] expected: Confidence) {
    let question = assemble_question(block).expect("question");
    assert_eq!(question.confidence, expected);
}

#[test]
fn assemble_question_rejects_short_unknown_block() {
    assert_eq!(
        assemble_question_with("nothing to see", &ParseOptions::default()),
        Err(Rejection::Unrecognized)
    );
}

#[test]
fn assemble_question_rejects_too_few_options() {
    let block = "TOPIC: Physics\nSTATEMENT: Which quantity is measured in newtons?\nA) Force\nB) Mass";
    assert_eq!(
        assemble_question_with(block, &ParseOptions::default()),
        Err(Rejection::TooFewOptions {
            found: 2,
            required: 3
        })
    );
}

#[test]
fn assemble_question_rejects_missing_statement() {
    let block = "TOPIC: Physics\nSTATEMENT: Newtons?\nA) Force\nB) Mass\nC) Energy";
    assert_eq!(
        assemble_question_with(block, &ParseOptions::default()),
        Err(Rejection::StatementTooShort)
    );
}

fn sample_question() -> ParsedQuestion {
    assemble_question(CREDIT_BLOCK).expect("question")
}

#[test]
fn validate_question_accepts_clean_record() {
    assert!(validate_question(&sample_question()).is_empty());
}

#[test]
fn validate_question_reports_every_issue() {
    let mut question = sample_question();
    question.statement = "Too short".to_string();
    question.options.retain(|letter, _| *letter < OptionLetter::C);
    question.correct_key = AnswerKey::Unknown;
    question.topic = DEFAULT_TOPIC.to_string();

    let issues = validate_question(&question);
    assert_eq!(issues.len(), 4, "{issues:?}");
    assert!(issues[0].contains("statement"));
    assert!(issues[1].contains("at least 3"));
    assert!(issues[2].contains("could not be determined"));
    assert!(issues[3].contains("General"));
}

#[test]
fn validate_question_checks_true_false_option_count() {
    let mut question = assemble_question(BARE_TRUE_FALSE_BLOCK).expect("question");
    assert!(validate_question(&question).is_empty());

    question
        .options
        .insert(OptionLetter::C, "MAYBE".to_string());
    let issues = validate_question(&question);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("exactly 2"));
}

#[test]
fn validate_question_flags_key_without_option() {
    let mut question = sample_question();
    question.options.remove(&OptionLetter::B);
    let issues = validate_question(&question);

    assert_eq!(issues, vec!["answer key B does not match any option".to_string()]);
}

#[test]
fn validate_question_ignores_blank_options() {
    let mut question = sample_question();
    for letter in [OptionLetter::C, OptionLetter::D, OptionLetter::E] {
        question.options.insert(letter, "  ".to_string());
    }

    let issues = validate_question(&question);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("has 2 options"));
}

#[test]
fn looks_structured_counts_signal_types() {
    let document = format!("{CREDIT_BLOCK}\n---\n{CREDIT_BLOCK}");
    let signals = StructureSignals::scan(&document);

    assert_eq!(signals.count(), 6);
    assert!(looks_structured(&document));
}

#[test]
fn looks_structured_rejects_prose() {
    let prose = "Minutes of the meeting.\nWe talked about the budget and the upcoming audit.\nNext meeting is on Friday.";
    assert_eq!(StructureSignals::scan(prose).count(), 0);
    assert!(!looks_structured(prose));
}

#[test]
fn looks_structured_needs_three_signal_types() {
    let two_signals = "TOPIC: Law\nSTATEMENT: Something something something.";
    assert!(!looks_structured(two_signals));

    let three_signals = "TOPIC: Law\nSTATEMENT: Something something something.\nANSWER: A";
    assert!(looks_structured(three_signals));
}
