//! Basic split example.
//!
//! Run with:
//!     cargo run --example basic_split -- /path/to/input.csv /path/to/out [encoding]

use std::env;

use splitrs::{FnProgress, SplitConfig, Splitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.csv".to_string());
    let out_dir = args.next().unwrap_or_else(|| "out".to_string());
    let encoding = args.next().unwrap_or_else(|| "utf-8".to_string());

    println!("Splitting {} into {}\n", input, out_dir);

    let config = SplitConfig::default()
        .with_rows_per_file(1000)
        .with_encoding(encoding);
    let splitter = Splitter::new(config);

    let mut sink = FnProgress::new(|message: &str| println!("{message}"));
    let report = splitter.split_with_progress(input.as_ref(), out_dir.as_ref(), &mut sink)?;

    println!();
    for part in &report.parts {
        println!("part {:>3}: {:>8} lines -> {}", part.index, part.lines, part.file_name());
    }
    println!(
        "\nTotal: {} lines, {} parts",
        report.total_lines,
        report.parts_written()
    );

    Ok(())
}
