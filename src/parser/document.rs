use super::*;

pub fn parse_document(text: &str) -> ParseResult {
    parse_document_with(text, &ParseOptions::default())
}

/// Segments `text` and assembles every block independently, in order.
///
/// A rejected block never stops the rest of the document. Rejections of
/// blocks longer than [`NOISE_THRESHOLD_CHARS`] are reported in `errors`;
/// shorter ones are treated as noise.
pub fn parse_document_with(text: &str, options: &ParseOptions) -> ParseResult {
    let blocks = segment_document(text);
    let mut result = ParseResult {
        stats: ParseStats {
            total_blocks: blocks.len(),
            ..ParseStats::default()
        },
        ..ParseResult::default()
    };

    for (index, block) in blocks.iter().enumerate() {
        let position = index + 1;
        match assemble_question_with(block, options) {
            Ok(question) => {
                debug!(
                    block = position,
                    format = %question.detected_format,
                    confidence = question.confidence.as_str(),
                    "question assembled"
                );
                result.questions.push(question);
            }
            Err(rejection) => {
                result.stats.rejected_blocks += 1;
                let chars = char_len(block);
                if chars > NOISE_THRESHOLD_CHARS {
                    warn!(block = position, chars, reason = %rejection, "block rejected");
                    result.errors.push(format!("block {position}: {rejection}"));
                } else {
                    debug!(block = position, chars, reason = %rejection, "noise block skipped");
                }
            }
        }
    }

    tally(&result.questions, &mut result.stats);
    result.success = !result.questions.is_empty();
    result
}

fn tally(questions: &[ParsedQuestion], stats: &mut ParseStats) {
    for question in questions {
        *stats.by_format.entry(question.detected_format).or_default() += 1;
        *stats.by_confidence.entry(question.confidence).or_default() += 1;
        if question.correct_key.is_resolved() {
            stats.with_answer_key += 1;
        } else {
            stats.without_answer_key += 1;
        }
    }
}
