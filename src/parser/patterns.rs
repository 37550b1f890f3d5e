use super::*;

// Labels accept the English spelling and the Portuguese one used by the
// source material. Everything is matched case-insensitively.

pub(super) static SEPARATOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").expect("valid separator regex"));

pub(super) static QUESTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:QUESTION|QUEST[ÃA]O)[ \t]*(?:N[º°O]\.?[ \t]*)?(?P<number>\d+)")
        .expect("valid question heading regex")
});

pub(super) static TOPIC_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:TOPIC|ASSUNTO|TEMA)[ \t]*:[ \t]*(?P<value>.*)$")
        .expect("valid topic regex")
});

pub(super) static STATEMENT_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:STATEMENT|ENUNCIADO)[ \t]*:[ \t]*").expect("valid statement regex")
});

pub(super) static OPTIONS_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:OPTIONS|ALTERNATIVAS)[ \t]*:").expect("valid options label regex")
});

// Answer labels may follow other words on the line (`Correct answer: B`).
pub(super) static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\b(?:CORRECT[ \t]+ANSWER|ANSWER|CORRECT|GABARITO|RESPOSTA(?:[ \t]+CORRETA)?)[ \t]*:[ \t]*(?P<value>.*)$",
    )
    .expect("valid answer regex")
});

pub(super) static ANSWER_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)\b(?:CORRECT[ \t]+ANSWER|ANSWER|CORRECT|GABARITO|RESPOSTA(?:[ \t]+CORRETA)?)[ \t]*:[ \t]*\(?(?P<letter>[A-E])\b",
    )
    .expect("valid answer letter regex")
});

pub(super) static BOARD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:BOARD|BANCA)[ \t]*:[ \t]*(?P<value>\S.*)$")
        .expect("valid board regex")
});

pub(super) static YEAR_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:YEAR|ANO)[ \t]*:[ \t]*(?P<value>\d{4})\b").expect("valid year regex")
});

pub(super) static TRUE_FALSE_BRACKET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\([ \t]*\)[ \t]*(?P<word>TRUE|FALSE|CERTO|ERRADO|VERDADEIRO|FALSO)\b")
        .expect("valid true/false bracket regex")
});

pub(super) static OPTION_PAREN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*\((?P<letter>[A-Ea-e])\)[ \t]*(?P<text>\S.*)$")
        .expect("valid parenthesized option regex")
});

pub(super) static OPTION_BARE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?P<letter>[A-Ea-e])[ \t]*(?:[\).:]|-[ \t])[ \t]*(?P<text>\S.*)$")
        .expect("valid bare option regex")
});

// A delimiter must be followed by whitespace, so `E-mail` is not an option.
pub(super) static OPTION_INLINE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)\(?(?P<letter>[A-Ea-e])[\).:\-](?:\s|$)")
        .expect("valid inline option regex")
});

pub(super) const AFFIRMATIVE_WORDS: &[&str] = &["TRUE", "CERTO", "VERDADEIRO"];
pub(super) const NEGATIVE_WORDS: &[&str] = &["FALSE", "ERRADO", "FALSO"];

/// Single-letter answer codes. `C`/`E` come from certo/errado, `V`/`F` from
/// verdadeiro/falso (and `T`/`F` from true/false).
pub(super) const AFFIRMATIVE_CODES: &[char] = &['A', 'C', 'T', 'V'];
pub(super) const NEGATIVE_CODES: &[char] = &['B', 'E', 'F'];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Polarity {
    Affirmative,
    Negative,
}

impl Polarity {
    pub(super) fn answer_key(self) -> AnswerKey {
        match self {
            Self::Affirmative => AnswerKey::A,
            Self::Negative => AnswerKey::B,
        }
    }
}

pub(super) fn word_polarity(word: &str) -> Option<Polarity> {
    let upper = word.trim().to_uppercase();
    if AFFIRMATIVE_WORDS.contains(&upper.as_str()) {
        Some(Polarity::Affirmative)
    } else if NEGATIVE_WORDS.contains(&upper.as_str()) {
        Some(Polarity::Negative)
    } else {
        None
    }
}

pub(super) fn code_polarity(code: char) -> Option<Polarity> {
    let upper = code.to_ascii_uppercase();
    if AFFIRMATIVE_CODES.contains(&upper) {
        Some(Polarity::Affirmative)
    } else if NEGATIVE_CODES.contains(&upper) {
        Some(Polarity::Negative)
    } else {
        None
    }
}

pub(super) fn is_option_line(line: &str) -> bool {
    OPTION_PAREN_LINE.is_match(line) || OPTION_BARE_LINE.is_match(line)
}

pub(super) fn is_bare_true_false_line(line: &str) -> bool {
    word_polarity(line).is_some()
}

pub(super) fn is_metadata_line(line: &str) -> bool {
    QUESTION_HEADING.is_match(line)
        || TOPIC_LINE.is_match(line)
        || BOARD_LINE.is_match(line)
        || YEAR_FIELD.find(line).is_some_and(|found| line[..found.start()].trim().is_empty())
}

pub(super) fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}
