//! mdpdf – command-line Markdown → PDF converter.
//!
//! Usage:
//!   mdpdf [input.md] [output.pdf]
//!
//! With no arguments, `DOCUMENTATION.md` in the working directory is
//! converted into `DOCUMENTATION.pdf` next to it. If `output.pdf` is omitted
//! the PDF is written next to the input file with the same stem.

use std::{env, path::PathBuf, process};

use mdpdf::error::Error;
use mdpdf::pipeline::{convert_file, PipelineConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut positional = 0usize;

    for arg in args.iter().skip(1) {
        if positional == 0 {
            input_path = Some(PathBuf::from(arg));
        } else if positional == 1 {
            output_path = Some(PathBuf::from(arg));
        } else {
            eprintln!("Unexpected argument: {arg}");
            print_usage(&args[0]);
            process::exit(1);
        }
        positional += 1;
    }

    let input = input_path.unwrap_or_else(|| PathBuf::from("DOCUMENTATION.md"));

    // Default output: same directory + same stem as input, but with .pdf
    let output = output_path.unwrap_or_else(|| {
        let mut o = input.clone();
        o.set_extension("pdf");
        o
    });

    if !input.exists() {
        println!("{} not found", input.display());
        process::exit(1);
    }

    // Document title: stem of the input filename.
    let title = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mdpdf output")
        .to_string();

    let config = PipelineConfig {
        title,
        ..PipelineConfig::default()
    };

    println!("Generating PDF: {} ...", output.display());

    match convert_file(&input, &output, &config) {
        Ok(layout) => {
            let pages = layout.pages.len();
            println!(
                "Wrote '{}' ({} page{})",
                output.display(),
                pages,
                if pages == 1 { "" } else { "s" }
            );
        }
        Err(Error::MissingInput(path)) => {
            println!("{} not found", path.display());
            process::exit(1);
        }
        Err(e) => {
            println!("Error generating PDF: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("mdpdf – Markdown to PDF converter");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} [input.md] [output.pdf]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [input.md]    Markdown file to convert (default: DOCUMENTATION.md)");
    eprintln!("  [output.pdf]  Output path (default: same stem as input with .pdf)");
}
