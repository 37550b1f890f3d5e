use anyhow::Result;
use tracing::info;

use exam_parser::parser::{
    MIN_STRUCTURE_SIGNALS, StructureSignals, detect_format, extract_sequence_number,
    segment_document,
};

use crate::cli::DetectArgs;
use crate::util::{preview, read_text_document};

pub fn run(args: DetectArgs) -> Result<()> {
    let (text, source_sha256) = read_text_document(&args.input)?;
    let signals = StructureSignals::scan(&text);

    info!(
        path = %args.input.display(),
        sha256 = %source_sha256,
        signals = signals.count(),
        required = MIN_STRUCTURE_SIGNALS,
        looks_structured = signals.count() >= MIN_STRUCTURE_SIGNALS,
        "structure signals"
    );
    info!(
        question_headings = signals.question_headings,
        topic_labels = signals.topic_labels,
        statement_labels = signals.statement_labels,
        option_labels = signals.option_labels,
        answer_labels = signals.answer_labels,
        separators = signals.separators,
        "signal breakdown"
    );

    let blocks = segment_document(&text);
    info!(blocks = blocks.len(), "segmented document");

    for (index, block) in blocks.iter().enumerate() {
        info!(
            block = index + 1,
            number = ?extract_sequence_number(block),
            format = %detect_format(block),
            chars = block.chars().count(),
            head = %preview(block, 60),
            "block format"
        );
    }

    Ok(())
}
