//! spamlight - highlight spam trigger phrases in text

mod display;

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use spamlight::config::RuleFile;
use spamlight::error::{HighlightError, Result};
use spamlight::highlight::{build_boundaries, catalogue, HighlightConfig, Highlighter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut html = false;
    let mut summary_only = false;
    let mut rules_path: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--html" => html = true,
            "--summary" => summary_only = true,
            "--rules" => {
                let path = args
                    .next()
                    .ok_or_else(|| HighlightError::Config("--rules requires a file".to_string()))?;
                rules_path = Some(PathBuf::from(path));
            }
            _ if arg.starts_with('-') => {
                return Err(HighlightError::Config(format!("unknown option: {}", arg)));
            }
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let config = match rules_path {
        Some(path) => RuleFile::load(&path)?,
        None => HighlightConfig::new(catalogue::spam_rules()),
    };
    let highlighter = Highlighter::new(config)?;
    let report = highlighter.update(&text)?;

    if html {
        println!("{}", report.markup);
    } else if summary_only {
        println!("{}", report.summary.to_html());
    } else {
        let boundaries = build_boundaries(&report.ranges);
        display::print_highlighted(&text, &boundaries)?;
        println!();
        display::print_summary(&report.summary)?;
    }

    Ok(())
}

fn print_usage() {
    println!("spamlight {} - highlight spam trigger phrases", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: spamlight [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and highlights phrases matching the rule");
    println!("catalogue, then prints a per-category summary and spam score.");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("      --html     Print the highlight markup as HTML");
    println!("      --summary  Print the summary panel as HTML");
    println!("      --rules F  Load the rule catalogue from TOML file F");
}

fn print_version() {
    println!("spamlight {}", env!("CARGO_PKG_VERSION"));
}
