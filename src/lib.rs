//! splitrs
//!
//! Record-safe splitting of large delimited text files.
//!
//! `splitrs` cuts a big delimited export into bounded-size part files without
//! ever severing a compound record: a multi-line logical entry whose final
//! line is identified by an anchor value in its first field. When the pending
//! buffer reaches the configured threshold, the engine scans it backward for
//! the rightmost anchor line and cuts immediately after it; only a window
//! with no anchor at all flushes at the raw threshold.
//!
//! The crate intentionally:
//! - does NOT parse CSV beyond a line's first field
//! - does NOT validate record well-formedness
//! - does NOT manage concurrency (run it on a worker thread if you need to)
//! - does NOT resume partial runs
//!
//! It only does one thing: **Read lines → write parts**
//!
//! # Example
//!
//! ```no_run
//! use splitrs::{SplitConfig, Splitter};
//!
//! fn main() -> Result<(), splitrs::SplitError> {
//!     let config = SplitConfig::default().with_rows_per_file(1000);
//!     let splitter = Splitter::new(config);
//!
//!     let report = splitter.split("journal.csv".as_ref(), "out".as_ref())?;
//!     println!(
//!         "split {} lines into {} parts",
//!         report.total_lines,
//!         report.parts_written()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Progress
//!
//! ```no_run
//! use splitrs::{FnProgress, SplitConfig, Splitter};
//!
//! let splitter = Splitter::new(SplitConfig::default());
//! let mut sink = FnProgress::new(|message: &str| println!("{message}"));
//! splitter.split_with_progress("journal.csv".as_ref(), "out".as_ref(), &mut sink)?;
//! # Ok::<(), splitrs::SplitError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boundary;
mod config;
mod error;
mod part;
mod progress;
mod source;
mod splitter;

mod encoding; // internal label resolution
mod fs; // storage collaborator
mod writer; // internal part serialization

//
// Public surface (intentionally tiny)
//

pub use boundary::{find_split_point, AnchorSet};
pub use config::{
    SplitConfig, DEFAULT_ENCODING, DEFAULT_FILE_NAME_TEMPLATE, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_ROWS_PER_FILE,
};
pub use error::SplitError;
pub use fs::{FileSystem, OsFileSystem};
pub use part::{PartInfo, SplitReport};
pub use progress::{ChannelProgress, FnProgress, NullProgress, ProgressSink};
pub use source::LineReader;
pub use splitter::Splitter;
