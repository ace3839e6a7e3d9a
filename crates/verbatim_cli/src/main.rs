//! verbatim: round-trip checker for the verbatim parser.
//!
//! Usage:
//!   verbatim [options] <FILE>
//!
//! Tokenizes and parses the file, then checks that both the token stream and
//! the AST restore to the exact original text.

mod diff;
mod report;

use std::path::{Path, PathBuf};
use std::process;

use bumpalo::Bump;
use clap::Parser as ClapParser;
use verbatim_ast::{Restore, Structure};
use verbatim_core::Error;
use verbatim_parser::{Parser, ParserOptions, DEFAULT_MAX_DEPTH};
use verbatim_scanner::{restore, tokenize};

use crate::diff::diff_lines;
use crate::report::SourceReport;

#[derive(ClapParser, Debug)]
#[command(name = "verbatim", about = "Check that a source file survives a lossless parse", version)]
struct Cli {
    /// Source file to check.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print every token as `line:column kind text`.
    #[arg(long)]
    tokens: bool,

    /// Print the structural form of each top-level declaration.
    #[arg(long)]
    ast: bool,

    /// Maximum nesting depth before the parser gives up.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Only report failures.
    #[arg(short, long)]
    quiet: bool,
}

const EXIT_OK: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_FAILED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            print_error(&e);
            return EXIT_IO;
        }
    };
    let name = cli.file.display().to_string();

    let tokens = tokenize(&source);
    if cli.tokens {
        for token in &tokens {
            println!("{}:{} {:?} {:?}", token.line, token.column, token.kind, token.text);
        }
    }

    let mut failed = !check_restored("token", &source, &restore(&tokens));

    let arena = Bump::new();
    let options = ParserOptions::default().with_max_depth(cli.max_depth);
    let mut parser = Parser::with_options(&arena, &source, options);
    let program = parser.parse_program();
    let diagnostics = parser.take_diagnostics();

    if cli.ast {
        for node in program.declarations {
            println!("{}", node.structure());
        }
    }

    failed |= !check_restored("AST", &source, &program.restore());

    for diagnostic in &diagnostics {
        if cli.quiet && !diagnostic.is_error() {
            continue;
        }
        let report = SourceReport::new(diagnostic, &name, &source);
        eprintln!("{:?}", miette::Report::new(report));
    }

    if diagnostics.has_errors() {
        let count = diagnostics.error_count();
        eprintln!("Found {} error{}.", count, if count == 1 { "" } else { "s" });
        failed = true;
    }

    if failed {
        return EXIT_FAILED;
    }
    if !cli.quiet {
        println!(
            "{}: restored {} tokens and {} declarations",
            name,
            tokens.len(),
            program.declarations.len()
        );
    }
    EXIT_OK
}

fn read_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Report a restoration mismatch. Returns whether `restored` matched.
fn check_restored(stage: &str, source: &str, restored: &str) -> bool {
    let diff = diff_lines(source, restored);
    if diff.is_identical() {
        return true;
    }
    eprintln!("restoration failed ({}): {}", stage, diff);
    false
}

fn print_error(error: &Error) {
    match std::error::Error::source(error) {
        Some(source) => eprintln!("error: {}: {}", error, source),
        None => eprintln!("error: {}", error),
    }
}
