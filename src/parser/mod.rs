//! Heuristic parser turning pasted exam text into structured questions.
//!
//! Control flow: [`parse_document`] normalizes and segments the input, then
//! assembles every block independently. Assembly detects the block's format,
//! runs the field extractors and finally the validator. Nothing in here
//! fails hard: missing fields fall back to documented sentinels and the
//! uncertainty ends up in [`Confidence`].

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::model::{
    AnswerKey, Confidence, DEFAULT_TOPIC, DetectedFormat, FALSE_OPTION_TEXT, OptionLetter,
    ParseOptions, ParseResult, ParseStats, ParsedQuestion, QuestionKind, TRUE_OPTION_TEXT,
};

/// Trimmed segments at or below this many characters are dropped as noise.
pub const MIN_BLOCK_CHARS: usize = 50;
/// Unrecognized blocks shorter than this are skipped without an error entry.
pub const NOISE_THRESHOLD_CHARS: usize = 100;
pub const MIN_STATEMENT_CHARS: usize = 20;
/// Structure signal types required before a document is worth parsing.
pub const MIN_STRUCTURE_SIGNALS: usize = 3;

mod answer;
mod assemble;
mod detect;
mod document;
mod fields;
mod normalize;
mod options;
mod patterns;
mod segment;
mod structure;
#[cfg(test)]
mod tests;
mod validate;

pub use answer::extract_answer_key;
pub use assemble::{Rejection, assemble_question, assemble_question_with};
pub use detect::detect_format;
pub use document::{parse_document, parse_document_with};
pub use fields::{
    TopicFields, extract_board, extract_sequence_number, extract_statement, extract_topic,
    extract_year, split_topic,
};
pub use normalize::normalize_document;
pub use options::extract_options;
pub use segment::segment_document;
pub use structure::{StructureSignals, looks_structured};
pub use validate::validate_question;

use patterns::*;
