//! Command-line interface for quizmix
//! This binary turns a directory's questions.docx into a shuffled randoms.docx
//! with a hidden answer key, and can inspect a quiz source as JSON.
//!
//! Usage:
//!   quizmix generate `<directory>` --count `<N>`  - Write a randomized quiz document
//!   quizmix inspect `<file>`                      - Print parsed questions as JSON

use clap::{Arg, Command};
use std::path::{Path, PathBuf};

use quizmix::quiz::docx::extract_text;
use quizmix::quiz::parser::parse_document;
use quizmix::quiz::pipeline::{self, QUESTIONS_FILE};

fn main() {
    let matches = Command::new("quizmix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for shuffling quiz documents and deriving their answer keys")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Shuffle questions.docx in a directory into randoms.docx")
                .arg(
                    Arg::new("directory")
                        .help("Directory containing questions.docx")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('c')
                        .help("Number of questions to select")
                        .required(true)
                        .value_parser(clap::value_parser!(u32).range(1..)),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a quiz document and print the extracted questions as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the .docx file to inspect")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("generate", generate_matches)) => {
            let directory = generate_matches.get_one::<String>("directory").unwrap();
            let count = *generate_matches.get_one::<u32>("count").unwrap();
            handle_generate_command(directory, count as usize);
        }
        Some(("inspect", inspect_matches)) => {
            let path = inspect_matches.get_one::<String>("path").unwrap();
            handle_inspect_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the generate command
fn handle_generate_command(directory: &str, count: usize) {
    let dir = PathBuf::from(directory);
    if !dir.is_dir() {
        eprintln!("Error: {} is not a directory", dir.display());
        std::process::exit(1);
    }
    if !dir.join(QUESTIONS_FILE).is_file() {
        eprintln!(
            "Error: {} does not exist in {}",
            QUESTIONS_FILE,
            dir.display()
        );
        std::process::exit(1);
    }

    match pipeline::run(&dir, count) {
        Ok(summary) => {
            println!(
                "Selected {} of {} questions -> {}",
                summary.selected,
                summary.parsed,
                summary.output.display()
            );
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str) {
    let text = extract_text(Path::new(path)).unwrap_or_else(|e| {
        report_error(&e);
        std::process::exit(1);
    });

    let questions = parse_document(&text);
    let json = serde_json::to_string_pretty(&questions).unwrap_or_else(|e| {
        eprintln!("Error serializing questions: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Print an error with its cause chain
fn report_error(err: &dyn std::error::Error) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("Caused by: {}", cause);
        source = cause.source();
    }
}
