use clap::{Parser, ValueEnum};
use soft404::parsers::InputFormat;

#[derive(Parser, Debug)]
#[command(name = "soft404")]
#[command(about = "Classifies rendered pages as soft 404s or legitimate content")]
#[command(version)]
pub struct Args {
    /// Page snapshots to classify (file paths, or - for stdin)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Input format (html, json); guessed from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Page URL for HTML inputs (the domain is derived from it)
    #[arg(short, long, default_value = "")]
    pub url: String,

    /// Path to a JSON detector configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum number of body-text characters analyzed
    #[arg(long)]
    pub max_body_chars: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
}

/// Resolve the input format for one input, falling back to its file extension
pub fn resolve_format(arg: Option<FormatArg>, input: &str) -> InputFormat {
    match arg {
        Some(FormatArg::Html) => InputFormat::Html,
        Some(FormatArg::Json) => InputFormat::Json,
        None => InputFormat::from_path(input),
    }
}
