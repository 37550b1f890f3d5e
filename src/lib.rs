//! Heuristic parser for free-form exam question text.
//!
//! Takes plain text (already extracted from whatever document it came in)
//! and produces structured [`ParsedQuestion`] records with a confidence
//! level for human review. Four dialects are understood: plain multiple
//! choice, multiple choice with board/year metadata, and true/false with
//! bracketed or bare-word markers.

pub mod model;
pub mod parser;

pub use model::{
    AnswerKey, Confidence, DetectedFormat, OptionLetter, ParseOptions, ParseResult, ParseStats,
    ParsedQuestion, QuestionKind,
};
pub use parser::{looks_structured, parse_document, parse_document_with, validate_question};
