use super::*;

type OptionMap = BTreeMap<OptionLetter, String>;
type OptionPass = (&'static str, fn(&str, &mut OptionMap));

/// Passes never overwrite a letter an earlier pass already captured.
const MULTIPLE_CHOICE_PASSES: &[OptionPass] = &[
    ("parenthesized", parenthesized_letter_pass),
    ("bare_letter", bare_letter_pass),
    ("inline", inline_letter_pass),
];

const MULTIPLE_CHOICE_TARGET: usize = 3;
const MIN_INLINE_OPTION_CHARS: usize = 5;

/// Extracts answer options for a block of the given format.
///
/// Multiple-choice blocks may come back with fewer options than required;
/// the assembler decides what that means. True/false blocks always yield the
/// synthetic `A = TRUE`, `B = FALSE` pair unless strict mode asks for both
/// markers to be present.
pub fn extract_options(
    block: &str,
    format: DetectedFormat,
    options: &ParseOptions,
) -> Result<OptionMap, Rejection> {
    match format.question_kind() {
        QuestionKind::TrueFalse => true_false_options(block, options),
        QuestionKind::MultipleChoice => Ok(multiple_choice_options(block)),
    }
}

fn multiple_choice_options(block: &str) -> OptionMap {
    let region = options_region(block);
    let mut found = OptionMap::new();

    for (name, pass) in MULTIPLE_CHOICE_PASSES {
        pass(&region, &mut found);
        debug!(pass = name, options = found.len(), "option pass finished");
        if found.len() >= MULTIPLE_CHOICE_TARGET {
            break;
        }
    }

    found
}

/// Text after the options label when one exists, without answer lines.
fn options_region(block: &str) -> String {
    let start = OPTIONS_LABEL
        .find(block)
        .map(|label| label.end())
        .unwrap_or(0);

    block[start..]
        .lines()
        .filter(|line| !ANSWER_LINE.is_match(line))
        .collect::<Vec<&str>>()
        .join("\n")
}

fn parenthesized_letter_pass(region: &str, found: &mut OptionMap) {
    for captures in OPTION_PAREN_LINE.captures_iter(region) {
        record_option(found, &captures["letter"], &captures["text"]);
    }
}

fn bare_letter_pass(region: &str, found: &mut OptionMap) {
    for captures in OPTION_BARE_LINE.captures_iter(region) {
        record_option(found, &captures["letter"], &captures["text"]);
    }
}

/// Last resort for options dumped on a single line: each letter token owns
/// the text up to the next token.
fn inline_letter_pass(region: &str, found: &mut OptionMap) {
    let tokens = OPTION_INLINE_TOKEN
        .captures_iter(region)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let letter = captures.name("letter")?;
            Some((letter.as_str(), whole.start(), whole.end()))
        })
        .collect::<Vec<(&str, usize, usize)>>();

    for (index, (letter, _, text_start)) in tokens.iter().enumerate() {
        let text_end = tokens
            .get(index + 1)
            .map(|(_, next_start, _)| *next_start)
            .unwrap_or(region.len());
        if text_end <= *text_start {
            continue;
        }

        let text = region[*text_start..text_end]
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ");
        if text.chars().count() >= MIN_INLINE_OPTION_CHARS {
            record_option(found, letter, &text);
        }
    }
}

fn record_option(found: &mut OptionMap, letter: &str, text: &str) {
    let Some(letter) = letter.chars().next().and_then(OptionLetter::from_char) else {
        return;
    };
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    found.entry(letter).or_insert_with(|| text.to_string());
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct TrueFalseMarkers {
    pub(super) affirmative: bool,
    pub(super) negative: bool,
}

impl TrueFalseMarkers {
    fn record(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Affirmative => self.affirmative = true,
            Polarity::Negative => self.negative = true,
        }
    }

    pub(super) fn complete(&self) -> bool {
        self.affirmative && self.negative
    }
}

/// Bracketed markers first, then bare marker lines.
pub(super) fn scan_true_false_markers(block: &str) -> TrueFalseMarkers {
    let mut markers = TrueFalseMarkers::default();

    for captures in TRUE_FALSE_BRACKET.captures_iter(block) {
        if let Some(polarity) = word_polarity(&captures["word"]) {
            markers.record(polarity);
        }
    }

    if markers.complete() {
        return markers;
    }

    for line in block.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(polarity) = word_polarity(line) {
            markers.record(polarity);
        }
    }

    markers
}

fn true_false_options(block: &str, options: &ParseOptions) -> Result<OptionMap, Rejection> {
    let markers = scan_true_false_markers(block);

    if !markers.complete() {
        if options.strict_true_false {
            return Err(Rejection::MissingTrueFalseMarkers);
        }
        debug!(
            affirmative = markers.affirmative,
            negative = markers.negative,
            "true/false markers incomplete, synthesizing both options"
        );
    }

    Ok(OptionMap::from([
        (OptionLetter::A, TRUE_OPTION_TEXT.to_string()),
        (OptionLetter::B, FALSE_OPTION_TEXT.to_string()),
    ]))
}
