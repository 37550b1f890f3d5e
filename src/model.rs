use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOPIC: &str = "General";
pub const TRUE_OPTION_TEXT: &str = "TRUE";
pub const FALSE_OPTION_TEXT: &str = "FALSE";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
    E,
}

impl OptionLetter {
    pub fn from_char(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Answer key of a question. `Unknown` is a sentinel, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
    E,
    #[serde(rename = "unknown")]
    Unknown,
}

impl AnswerKey {
    pub fn letter(self) -> Option<OptionLetter> {
        match self {
            Self::A => Some(OptionLetter::A),
            Self::B => Some(OptionLetter::B),
            Self::C => Some(OptionLetter::C),
            Self::D => Some(OptionLetter::D),
            Self::E => Some(OptionLetter::E),
            Self::Unknown => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        self != Self::Unknown
    }
}

impl From<OptionLetter> for AnswerKey {
    fn from(letter: OptionLetter) -> Self {
        match letter {
            OptionLetter::A => Self::A,
            OptionLetter::B => Self::B,
            OptionLetter::C => Self::C,
            OptionLetter::D => Self::D,
            OptionLetter::E => Self::E,
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{letter}"),
            None => f.write_str("unknown"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Textual dialect a block was recognized as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DetectedFormat {
    /// Multiple choice with topic, statement and options only.
    #[serde(rename = "format1")]
    MultipleChoiceSimple,
    /// Multiple choice declaring source board and year.
    #[serde(rename = "format2")]
    MultipleChoiceWithMetadata,
    /// True/false with `( ) TRUE` / `( ) FALSE` style markers.
    #[serde(rename = "format3")]
    TrueFalseBracketed,
    /// True/false with bare `TRUE` / `FALSE` lines.
    #[serde(rename = "format4")]
    TrueFalseBareWord,
    #[serde(rename = "unknown")]
    Unknown,
}

impl DetectedFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoiceSimple => "format1",
            Self::MultipleChoiceWithMetadata => "format2",
            Self::TrueFalseBracketed => "format3",
            Self::TrueFalseBareWord => "format4",
            Self::Unknown => "unknown",
        }
    }

    pub fn question_kind(self) -> QuestionKind {
        match self {
            Self::TrueFalseBracketed | Self::TrueFalseBareWord => QuestionKind::TrueFalse,
            Self::MultipleChoiceSimple | Self::MultipleChoiceWithMetadata | Self::Unknown => {
                QuestionKind::MultipleChoice
            }
        }
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
}

impl QuestionKind {
    /// Options required for a record of this kind to be structurally valid.
    pub fn min_options(self) -> usize {
        match self {
            Self::MultipleChoice => 3,
            Self::TrueFalse => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub sequence_number: Option<u32>,
    pub source_board: Option<String>,
    pub source_year: Option<i32>,
    pub topic: String,
    pub sub_topic: Option<String>,
    pub statement: String,
    pub options: BTreeMap<OptionLetter, String>,
    pub correct_key: AnswerKey,
    pub confidence: Confidence,
    pub detected_format: DetectedFormat,
    pub question_kind: QuestionKind,
    #[serde(default)]
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub total_blocks: usize,
    pub rejected_blocks: usize,
    pub by_format: BTreeMap<DetectedFormat, usize>,
    pub by_confidence: BTreeMap<Confidence, usize>,
    pub with_answer_key: usize,
    pub without_answer_key: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    pub questions: Vec<ParsedQuestion>,
    pub errors: Vec<String>,
    pub stats: ParseStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Reject true/false blocks lacking both markers instead of synthesizing options.
    pub strict_true_false: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub looks_structured: bool,
    pub options: ParseOptions,
    pub result: ParseResult,
}
