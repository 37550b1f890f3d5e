use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "exam-parser",
    version,
    about = "Heuristic extraction of structured exam questions from plain text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a text document into structured questions.
    Parse(ParseArgs),
    /// Report structure signals and per-block formats without assembling.
    Detect(DetectArgs),
    /// Re-validate a JSON array of questions, e.g. after manual edits.
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Reject true/false blocks lacking both markers.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the report to stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long)]
    pub input: PathBuf,
}
