use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use exam_parser::model::{ParseOptions, ParseReport};
use exam_parser::{looks_structured, parse_document_with};

use crate::cli::ParseArgs;
use crate::util::{now_utc_string, preview, read_text_document, write_json_pretty};

const REPORT_VERSION: u32 = 1;

pub fn run(args: ParseArgs) -> Result<()> {
    let (text, source_sha256) = read_text_document(&args.input)?;
    let options = ParseOptions {
        strict_true_false: args.strict,
    };

    let structured = looks_structured(&text);
    if !structured {
        warn!(
            path = %args.input.display(),
            "document shows few structure signals, results may be poor"
        );
    }

    let result = parse_document_with(&text, &options);

    for question in &result.questions {
        info!(
            number = ?question.sequence_number,
            format = %question.detected_format,
            key = %question.correct_key,
            confidence = question.confidence.as_str(),
            statement = %preview(&question.statement, 60),
            "parsed question"
        );
    }
    for message in &result.errors {
        warn!(error = %message, "block rejected");
    }

    info!(
        blocks = result.stats.total_blocks,
        questions = result.questions.len(),
        rejected = result.stats.rejected_blocks,
        with_answer_key = result.stats.with_answer_key,
        without_answer_key = result.stats.without_answer_key,
        success = result.success,
        "parse completed"
    );

    let report = ParseReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        source_path: args.input.display().to_string(),
        source_sha256,
        looks_structured: structured,
        options,
        result,
    };

    if let Some(output) = &args.output {
        write_json_pretty(output, &report)?;
        info!(path = %output.display(), "wrote parse report");
    }

    if args.json {
        let data = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{data}").context("failed to write report to stdout")?;
    }

    Ok(())
}
