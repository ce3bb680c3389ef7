//! Reads a line count and that many lines from standard input, sorts them
//! case-insensitively in descending order, and prints the result.
//!
//! Before prompting, the example builds `"Hello, World!"` by chained appends
//! and prints a three-way comparison indicator against the differently-cased
//! `"hELLO, wORLD!"` — under case-insensitive collation the two are equal.
//!
//! Run with
//!
//! ```bash
//! cargo run -p cistr --example sort_lines
//! ```

use std::{
    cmp::Ordering,
    io::{self, BufReader, Write},
};

use cistr::{CiStr, Reader, Sink, Writer};

fn main() -> io::Result<()> {
    let mut hello = CiStr::from("Hello");
    hello.append(b", ").append(b"World!");
    let shouted = CiStr::from("hELLO, wORLD!");

    let sign = match hello.compare(&shouted) {
        Ordering::Less => " < ",
        Ordering::Equal => " = ",
        Ordering::Greater => " > ",
    };
    println!("{hello}{sign}{shouted}");
    println!();

    let stdin = io::stdin();
    let mut source = Reader::new(BufReader::new(stdin.lock()));

    print!("Number of lines: ");
    io::stdout().flush()?;

    let mut count_line = CiStr::new();
    count_line.read_line(&mut source)?;
    let count: usize = String::from_utf8_lossy(count_line.as_bytes())
        .trim()
        .parse()
        .unwrap_or(0);

    let mut lines: Vec<CiStr> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut line = CiStr::new();
        line.read_line(&mut source)?;
        lines.push(line);
    }

    lines.sort_by(|a, b| b.cmp(a));

    println!();
    println!("Descending order:");
    let mut sink = Writer::new(io::stdout().lock());
    for line in &lines {
        line.write_to(&mut sink)?;
        sink.write_run(b"\n")?;
    }

    Ok(())
}
