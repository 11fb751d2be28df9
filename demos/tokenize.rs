//! Tokenize an S-expression and print the result
//!
//! ```text
//! cargo run --example tokenize                 # scans the built-in sample
//! echo '(x "y")' | cargo run --example tokenize -- -
//! cargo run --example tokenize -- --json       # dump tokens as JSON
//! ```

use anyhow::{Context, Result};
use parenlex::{scan, ScanOutput};

const SAMPLE: &str = r#"(a b 123 1.8e3 "a b")"#;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let from_stdin = args.iter().any(|a| a == "-");

    let output = if from_stdin {
        scan(std::io::stdin().lock())
    } else {
        scan(SAMPLE.as_bytes())
    };

    if json {
        print_json(&output)?;
    } else {
        print_plain(&output);
    }

    match output.error {
        Some(err) => Err(err).context("scan failed"),
        None => Ok(()),
    }
}

fn print_plain(output: &ScanOutput) {
    let tokens: Vec<String> = output.tokens.iter().map(|t| t.to_string()).collect();
    println!("[{}]", tokens.join(" "));
}

fn print_json(output: &ScanOutput) -> Result<()> {
    let text = serde_json::to_string_pretty(&output.tokens).context("serializing tokens")?;
    println!("{}", text);
    Ok(())
}
