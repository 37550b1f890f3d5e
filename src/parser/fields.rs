use super::*;

const TOPIC_SEPARATORS: &[&str] = &[" / ", " - ", ": "];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFields {
    pub topic: String,
    pub sub_topic: Option<String>,
    pub defaulted: bool,
}

impl TopicFields {
    fn fallback() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            sub_topic: None,
            defaulted: true,
        }
    }
}

pub fn extract_topic(block: &str) -> TopicFields {
    TOPIC_LINE
        .captures(block)
        .and_then(|captures| captures.name("value"))
        .map(|value| split_topic(value.as_str()))
        .unwrap_or_else(TopicFields::fallback)
}

/// Splits a topic line on the first separator of the candidate list that
/// occurs in it. Anything past the second part stays in the sub-topic.
pub fn split_topic(line: &str) -> TopicFields {
    let line = line.trim();
    if line.is_empty() {
        return TopicFields::fallback();
    }

    let Some(&separator) = TOPIC_SEPARATORS.iter().find(|sep| line.contains(**sep)) else {
        return TopicFields {
            topic: line.to_string(),
            sub_topic: None,
            defaulted: false,
        };
    };

    let parts = line
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>();

    match parts.split_first() {
        None => TopicFields::fallback(),
        Some((topic, rest)) => TopicFields {
            topic: (*topic).to_string(),
            sub_topic: (!rest.is_empty()).then(|| rest.join(separator)),
            defaulted: false,
        },
    }
}

type StatementStrategy = (&'static str, fn(&str) -> Option<String>);

// Labelled capture first; the positional fallback only runs when no
// statement label exists at all.
const STATEMENT_STRATEGIES: &[StatementStrategy] = &[
    ("labelled", statement_after_label),
    ("positional", statement_before_options),
];

/// Returns the question prose, or `None` when it is missing or shorter than
/// [`MIN_STATEMENT_CHARS`].
pub fn extract_statement(block: &str) -> Option<String> {
    let (strategy, statement) = STATEMENT_STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(block).map(|text| (*name, text)))?;

    if char_len(&statement) < MIN_STATEMENT_CHARS {
        debug!(strategy, chars = char_len(&statement), "statement too short");
        return None;
    }

    Some(statement)
}

fn statement_after_label(block: &str) -> Option<String> {
    let label = STATEMENT_LABEL.find(block)?;
    Some(collect_statement_lines(block[label.end()..].lines()))
}

fn statement_before_options(block: &str) -> Option<String> {
    let body = match TOPIC_LINE.find(block) {
        Some(topic) => &block[topic.end()..],
        None => block,
    };

    let lines = body.lines().filter(|line| !is_metadata_line(line));
    Some(collect_statement_lines(lines))
}

/// Gathers lines until the first option, answer or true/false marker line.
fn collect_statement_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let mut collected = Vec::<&str>::new();

    for line in lines {
        if OPTIONS_LABEL.is_match(line)
            || ANSWER_LINE.is_match(line)
            || SEPARATOR_LINE.is_match(line)
            || is_option_line(line)
            || is_bare_true_false_line(line)
        {
            break;
        }

        if let Some(marker) = TRUE_FALSE_BRACKET.find(line) {
            let head = line[..marker.start()].trim();
            if !head.is_empty() {
                collected.push(head);
            }
            break;
        }

        collected.push(line.trim());
    }

    collected.join("\n").trim().to_string()
}

pub fn extract_board(block: &str) -> Option<String> {
    let value = BOARD_LINE.captures(block)?.name("value")?.as_str();
    let board = value
        .split(['|', ';'])
        .next()
        .map(str::trim)
        .unwrap_or_default();

    // "BOARD: X YEAR: 2018" on one line
    let board = match YEAR_FIELD.find(board) {
        Some(year) => board[..year.start()].trim_end_matches([' ', ',', '-']).trim(),
        None => board,
    };

    (!board.is_empty()).then(|| board.to_string())
}

pub fn extract_year(block: &str) -> Option<i32> {
    YEAR_FIELD
        .captures(block)?
        .name("value")?
        .as_str()
        .parse::<i32>()
        .ok()
}

pub fn extract_sequence_number(block: &str) -> Option<u32> {
    QUESTION_HEADING
        .captures(block)?
        .name("number")?
        .as_str()
        .parse::<u32>()
        .ok()
}
