//! Parse JSON from stdin and print the tree.
//!
//! Set `JTREE_TRACE=1` for parser trace output on stderr.

use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    if std::env::var_os("JTREE_TRACE").is_some() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .try_init();
    }

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    match jtree_core::parse(&input) {
        Ok(value) => {
            println!("{:#?}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
