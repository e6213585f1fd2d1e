//! Print the token stream for a JSON file (or stdin), one token per line.
//!
//! Usage: cargo run --example show_tokens [FILE]

use std::io::Read;
use std::process::ExitCode;

use jtree_core::{Lexer, TokenKind};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .try_init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    let input = match input {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for token in Lexer::new(&input) {
        match token {
            Ok(token) if token.kind == TokenKind::Whitespace => {}
            Ok(token) => {
                let kind = format!("{:?}", token.kind);
                println!("{:>6} {:>4}  {:<14} {}", token.position, token.line, kind, token.text);
            }
            Err(e) => {
                tracing::debug!(code = ?e.code, offset = e.offset(), "lexing stopped");
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
