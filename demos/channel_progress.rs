//! Background-thread split with progress over a channel.
//!
//! The engine runs on a worker thread; the main thread plays the role of a
//! UI event loop draining one-way progress messages.
//!
//! Run with:
//!     cargo run --example channel_progress -- /path/to/input.csv /path/to/out

use std::env;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use splitrs::{ChannelProgress, SplitConfig, Splitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let input: PathBuf = args.next().unwrap_or_else(|| "input.csv".to_string()).into();
    let out_dir: PathBuf = args.next().unwrap_or_else(|| "out".to_string()).into();

    let (tx, rx) = mpsc::channel();
    let splitter = Splitter::new(
        SplitConfig::default()
            .with_encoding("utf-8")
            .with_progress_interval(500),
    );

    let worker = thread::spawn(move || {
        let mut sink = ChannelProgress::new(tx);
        splitter.split_with_progress(&input, &out_dir, &mut sink)
    });

    // The receiver drains until the worker drops its sender.
    for message in rx {
        println!("[worker] {message}");
    }

    let report = worker.join().expect("worker thread panicked")?;
    println!(
        "\nTotal: {} lines, {} parts",
        report.total_lines,
        report.parts_written()
    );

    Ok(())
}
