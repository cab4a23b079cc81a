use clap::Parser;
use serde::Serialize;
use soft404::{ClassificationOutcome, Detector, DetectorResult, parsers};
use std::io::Read;
use std::process::ExitCode;

mod args;
use args::{Args, resolve_format};

/// One line of CLI output
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    outcome: ClassificationOutcome,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let detector = match build_detector(&args) {
        Ok(detector) => detector,
        Err(e) => {
            ::log::error!("Failed to configure detector: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0;
    for input in &args.inputs {
        match classify_input(&detector, &args, input) {
            Ok(outcome) => {
                ::log::info!(
                    "{}: is404={} confidence={:.1}",
                    input,
                    outcome.is_404,
                    outcome.confidence
                );
                print_report(&Report { input, outcome }, args.pretty);
            }
            Err(e) => {
                ::log::error!("Failed to classify {}: {}", input, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn build_detector(args: &Args) -> DetectorResult<Detector> {
    let mut detector = Detector::new();
    if let Some(path) = &args.config {
        detector = detector.with_config_file(path)?;
    }
    if let Some(max) = args.max_body_chars {
        detector = detector.with_max_body_chars(max);
    }
    Ok(detector)
}

fn classify_input(
    detector: &Detector,
    args: &Args,
    input: &str,
) -> DetectorResult<ClassificationOutcome> {
    let content = read_input(input)?;
    let format = resolve_format(args.format, input);
    let raw = parsers::parse(&content, format, &args.url)?;
    Ok(detector.classify_raw(raw))
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
    }
}

fn print_report(report: &Report, pretty: bool) {
    let line = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    match line {
        Ok(line) => println!("{}", line),
        Err(e) => ::log::error!("Failed to serialize result for {}: {}", report.input, e),
    }
}
