use clap::Parser;
use soft404::Detector;
use std::error::Error;
use std::fs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a rendered HTML document
    #[arg(short, long)]
    file: String,

    /// URL the document was served from
    #[arg(short, long, default_value = "")]
    url: String,

    /// JSON configuration string
    #[arg(short, long)]
    config: Option<String>,

    /// Path to JSON configuration file
    #[arg(long)]
    config_file: Option<String>,

    /// Maximum body characters analyzed
    #[arg(short, long)]
    max_body_chars: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();
    let mut detector = Detector::new();

    if let Some(config_file) = args.config_file {
        println!("Loading configuration from file: {}", config_file);
        detector = detector.with_config_file(config_file)?;
    }

    // String config overrides file config
    if let Some(config_str) = args.config {
        println!("Applying configuration from string");
        detector = detector.with_config_str(&config_str)?;
    }

    if let Some(max_body_chars) = args.max_body_chars {
        println!("Overriding max body chars: {}", max_body_chars);
        detector = detector.with_max_body_chars(max_body_chars);
    }

    let html = fs::read_to_string(&args.file)?;
    let outcome = detector.classify_html(&html, &args.url);

    println!(
        "{}: {} (confidence {:.1})",
        args.file,
        if outcome.is_404 { "soft 404" } else { "ok" },
        outcome.confidence
    );
    for indicator in &outcome.indicators {
        println!("  {}", indicator);
    }

    Ok(())
}
