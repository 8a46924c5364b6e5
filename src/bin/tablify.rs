//! Read whitespace-delimited rows from stdin and print them as a table.
//!
//! The first input line supplies the column names; the formatter is sized
//! to the longest header token, with auto-resize on and truncation off.
//! Tokens beyond the column count on a data line are folded back into the
//! final column. Any rejected line is reported on stderr with a non-zero
//! exit status.
//!
//! ```text
//! $ printf 'name price\nPen 1.5\nRuler 0.99\n' | tablify
//! ```

use std::io::{self, BufRead};
use std::sync::Arc;

use tablify::prelude::*;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let header_line = match input.next() {
        Some(Ok(line)) => line,
        Some(Err(err)) => {
            eprintln!("failed to read input: {err}");
            std::process::exit(1);
        }
        // Empty input: nothing to format.
        None => return,
    };
    let header: Vec<String> = header_line
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let widest = header.iter().map(|t| t.chars().count()).max().unwrap_or(1);

    let formatter = match Formatter::builder()
        .width(widest)
        .auto_resize(true)
        .truncate(false)
        .build()
    {
        Ok(fmt) => fmt,
        Err(err) => {
            eprintln!("invalid formatter configuration: {err}");
            std::process::exit(1);
        }
    };
    let columns = header.len();
    let mut table = match Table::with_formatter(header, Arc::new(formatter)) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("invalid header: {err}");
            std::process::exit(1);
        }
    };

    for line in input {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read input: {err}");
                std::process::exit(1);
            }
        };
        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let row = fold_overflow(tokens, columns);
        if let Err(err) = table.write_line(Line::Values(row)) {
            eprintln!("rejected line {line:?}: {err}");
            std::process::exit(1);
        }
    }

    print!("{}", table.render());
}

/// Re-join tokens beyond the column count into the final column.
fn fold_overflow(mut tokens: Vec<String>, columns: usize) -> Vec<String> {
    if columns > 0 && tokens.len() > columns {
        let tail = tokens.split_off(columns - 1);
        tokens.push(tail.join(" "));
    }
    tokens
}
