//! # Spline CLI
//!
//! Runs the Dudley spline check on a saved input, on every case of a project
//! file, or on the built-in demo spline when no file is given.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spline_core::calculations::{calculate, SplineForm, SplineInput};
use spline_core::errors::CalcError;
use spline_core::file_io::{load_input, load_project};
use spline_core::report::format_report;

#[derive(Parser, Debug)]
#[command(name = "spline_cli")]
#[command(version)]
#[command(about = "Spline coupling strength check (Dudley method)", long_about = None)]
struct Args {
    /// Spline input JSON file
    #[arg(short, long, conflicts_with = "project")]
    input: Option<PathBuf>,

    /// Project JSON file; every case is evaluated
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Also print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", env = "SPLINE_LOG_LEVEL")]
    log_level: String,
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print one case. Returns false when the calculation failed.
fn run_case(input: &SplineInput, json: bool) -> bool {
    match calculate(input) {
        Ok(result) => {
            println!("{}", format_report(input, &result));
            if json {
                println!();
                println!("JSON Output:");
                match serde_json::to_string_pretty(&result) {
                    Ok(text) => println!("{}", text),
                    Err(e) => error!("could not serialize result: {}", e),
                }
            }
            true
        }
        Err(e) => {
            report_error(&input.label, &e);
            false
        }
    }
}

fn report_error(label: &str, e: &CalcError) {
    if label.is_empty() {
        eprintln!("Error: {}", e);
    } else {
        eprintln!("Error in {}: {}", label, e);
    }
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run(args: &Args) -> Result<bool> {
    if let Some(path) = &args.input {
        let input = load_input(path).with_context(|| format!("loading input {}", path.display()))?;
        info!(path = %path.display(), "running input file");
        return Ok(run_case(&input, args.json));
    }

    if let Some(path) = &args.project {
        let project = load_project(path).with_context(|| format!("loading project {}", path.display()))?;
        info!(
            path = %path.display(),
            title = %project.meta.title,
            cases = project.case_count(),
            "running project"
        );
        println!("Project {} ({} cases)", project.meta.title, project.case_count());
        println!();

        let mut all_ok = true;
        for case in &project.cases {
            all_ok &= run_case(&case.input, args.json);
            println!();
        }
        return Ok(all_ok);
    }

    println!("No input given. Running the demo spline...");
    println!();
    Ok(run_case(&SplineForm::demo().to_input(), args.json))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
