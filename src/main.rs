//! Command-line front end for the split engine.
//!
//! Two positional arguments, a handful of knobs, progress on stdout, errors
//! on stderr, exit code 0 on success.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use splitrs::{AnchorSet, FnProgress, SplitConfig, Splitter};

#[derive(Debug, Parser)]
#[command(
    name = "splitrs",
    version,
    about = "Split large delimited text files without cutting compound records"
)]
struct Cli {
    /// Input text file to split.
    input: PathBuf,

    /// Directory that receives the output parts (created if absent).
    output_dir: PathBuf,

    /// Maximum number of lines per output file.
    #[arg(short = 'n', long, default_value_t = splitrs::DEFAULT_ROWS_PER_FILE)]
    rows_per_file: usize,

    /// Text encoding of the input and the output parts.
    #[arg(long, default_value = splitrs::DEFAULT_ENCODING)]
    encoding: String,

    /// Comma-separated anchor identifiers marking safe split lines.
    #[arg(long, value_delimiter = ',')]
    anchors: Option<Vec<String>>,

    /// Report a running line count every N lines.
    #[arg(long, default_value_t = splitrs::DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Suppress progress output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SplitConfig::default()
        .with_rows_per_file(cli.rows_per_file)
        .with_encoding(&cli.encoding)
        .with_progress_interval(cli.progress_interval);
    if let Some(anchors) = cli.anchors {
        config = config.with_anchors(AnchorSet::new(anchors));
    }

    let splitter = Splitter::new(config);
    let result = if cli.quiet {
        splitter.split(&cli.input, &cli.output_dir)
    } else {
        let mut sink = FnProgress::new(|message: &str| println!("{message}"));
        splitter.split_with_progress(&cli.input, &cli.output_dir, &mut sink)
    };

    result
        .map(|_| ())
        .with_context(|| format!("failed to split {}", cli.input.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
