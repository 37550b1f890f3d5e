use std::fs;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use exam_parser::{ParsedQuestion, validate_question};

use crate::cli::ValidateArgs;

pub fn run(args: ValidateArgs) -> Result<()> {
    let raw = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let questions: Vec<ParsedQuestion> = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let mut flagged = 0usize;
    for (index, question) in questions.iter().enumerate() {
        let issues = validate_question(question);
        if issues.is_empty() {
            continue;
        }

        flagged += 1;
        for issue in &issues {
            warn!(
                question = index + 1,
                number = ?question.sequence_number,
                issue = %issue,
                "validation issue"
            );
        }
    }

    info!(
        questions = questions.len(),
        flagged,
        "validation completed"
    );

    if flagged > 0 {
        bail!("{flagged} of {} questions have validation issues", questions.len());
    }

    Ok(())
}
