//! # igbo
//!
//! The command-line front end for the interpreter: reads a source file,
//! tokenizes it, parses it, and runs it. Exit code is 0 on completion (even
//! if runtime diagnostics were reported along the way) and 1 if the source
//! file cannot be read.

mod cli;

use std::process::ExitCode;

use clap::Parser as _;
use log::{debug, info};

use cli::Cli;
use igbo_lang::diagnostics::Diagnostics;
use igbo_lang::interpreter::Interpreter;
use igbo_lang::lexer::tokenize;
use igbo_lang::parser::Parser;

fn main() -> ExitCode {
    if std::env::args().count() < 2 {
        eprintln!("Usage: igbo program.igbo");
        return ExitCode::FAILURE;
    }

    let args = Cli::parse();
    simple_logger::init_with_level(args.verbosity.into()).ok();

    let source = match std::fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(_) => {
            Diagnostics::new()
                .report(
                    format!("Could not read file: {}", args.file.display()),
                    None,
                )
                .ok();
            return ExitCode::FAILURE;
        }
    };

    debug!(
        "read {} bytes from '{}'",
        source.len(),
        args.file.display()
    );

    let diagnostics = Diagnostics::new();

    let tokens = tokenize(&source, &diagnostics).expect("the default sink never errors");
    debug!("produced {} tokens", tokens.len());

    let program = Parser::new(tokens, diagnostics)
        .parse_program()
        .expect("the default sink never errors");
    info!("parsed {} top-level statement(s)", program.len());

    Interpreter::new()
        .run(&program)
        .expect("the default sink never errors");

    ExitCode::SUCCESS
}
