//! Core split engine - Splitter orchestration loop.
//!
//! This module drives the whole run: lines are pulled lazily from the input,
//! accumulated in a buffer owned exclusively by the engine, and flushed to
//! numbered part files whenever the buffer reaches the configured threshold.
//! The cut index for each flush comes from the backward-scanning resolver in
//! [`crate::boundary`], so a part never ends inside a compound record unless
//! the whole window lacked an anchor line.

use std::path::Path;

use log::debug;

use crate::boundary::find_split_point;
use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::part::{PartInfo, SplitReport};
use crate::progress::{NullProgress, ProgressSink};
use crate::source::LineReader;
use crate::writer::PartWriter;

/// Splits a delimited text file into bounded-size parts without cutting a
/// compound record.
///
/// The engine is strictly sequential: one input stream, at most one output
/// stream at a time, no internal threads. Progress flows out through a
/// [`ProgressSink`]; storage flows through a [`FileSystem`]. The default
/// entry points wire in the real disk and a silent sink.
///
/// # Guarantees
///
/// - Concatenating all parts in index order reproduces the input exactly.
/// - Part indices are contiguous and start at 1.
/// - Every part boundary except the last lands immediately after an anchor
///   line, or at the threshold when the window held no anchor at all.
/// - The final part may be smaller than the threshold; an empty input yields
///   zero parts and a success report.
/// - A failed run leaves already-written parts on disk untouched; nothing is
///   rolled back or retried.
///
/// # Example
///
/// ```no_run
/// use splitrs::{SplitConfig, Splitter};
///
/// fn main() -> Result<(), splitrs::SplitError> {
///     let config = SplitConfig::default().with_encoding("utf-8");
///     let splitter = Splitter::new(config);
///
///     let report = splitter.split("journal.csv".as_ref(), "out".as_ref())?;
///     println!(
///         "{} lines across {} parts",
///         report.total_lines,
///         report.parts_written()
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Creates a splitter with the given configuration.
    ///
    /// The configuration is validated at the start of every run, not here,
    /// so an invalid value surfaces as an error from [`Splitter::split`].
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Splits `input` into parts under `out_dir`, silently.
    ///
    /// Equivalent to [`Splitter::split_with`] over the real file system with
    /// a sink that discards every message.
    pub fn split(&self, input: &Path, out_dir: &Path) -> Result<SplitReport, SplitError> {
        self.split_with(&OsFileSystem, input, out_dir, &mut NullProgress)
    }

    /// Splits `input` into parts under `out_dir`, reporting progress.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use splitrs::{FnProgress, SplitConfig, Splitter};
    ///
    /// let splitter = Splitter::new(SplitConfig::default());
    /// let mut sink = FnProgress::new(|message: &str| eprintln!("{message}"));
    /// splitter.split_with_progress("in.csv".as_ref(), "out".as_ref(), &mut sink)?;
    /// # Ok::<(), splitrs::SplitError>(())
    /// ```
    pub fn split_with_progress(
        &self,
        input: &Path,
        out_dir: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitReport, SplitError> {
        self.split_with(&OsFileSystem, input, out_dir, progress)
    }

    /// Splits with every collaborator injected.
    ///
    /// Validation happens before any output is produced: a blank path or an
    /// invalid configuration is [`SplitError::InvalidArgument`], a missing
    /// input is [`SplitError::InputNotFound`]. The output directory is
    /// created if absent. I/O failures mid-stream abort the run immediately;
    /// parts already written stay on disk.
    pub fn split_with(
        &self,
        fs: &dyn FileSystem,
        input: &Path,
        out_dir: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<SplitReport, SplitError> {
        self.config.validate()?;

        if input.as_os_str().is_empty() {
            return Err(SplitError::InvalidArgument {
                message: "input file path is blank".to_string(),
            });
        }
        if out_dir.as_os_str().is_empty() {
            return Err(SplitError::InvalidArgument {
                message: "output directory is blank".to_string(),
            });
        }
        if !fs.exists(input) {
            return Err(SplitError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let encoding = crate::encoding::resolve(self.config.encoding())?;

        if !fs.exists(out_dir) {
            fs.create_dir_all(out_dir)?;
            progress.report(&format!("created output directory: {}", out_dir.display()));
        }

        let base = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = input
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let writer = PartWriter::new(
            out_dir,
            &base,
            &ext,
            self.config.file_name_template(),
            encoding,
        );

        let rows_per_file = self.config.rows_per_file();
        let interval = self.config.progress_interval();
        let anchors = self.config.anchors();

        let mut buffer: Vec<String> = Vec::with_capacity(rows_per_file);
        let mut parts: Vec<PartInfo> = Vec::new();
        let mut total_lines: u64 = 0;
        let mut next_index: u32 = 1;

        for line in LineReader::new(fs.open_read(input)?, encoding) {
            buffer.push(line?);
            total_lines += 1;

            if total_lines % interval == 0 {
                progress.report(&format!("processed {} lines", total_lines));
            }

            if buffer.len() >= rows_per_file {
                let split = find_split_point(&buffer, anchors);
                debug!(
                    "flushing part {}: cut {} of {} buffered lines",
                    next_index,
                    split,
                    buffer.len()
                );

                // The committed prefix is moved out wholesale; the suffix
                // becomes the new buffer. The writer only ever sees lines the
                // engine no longer appends to.
                let carry = buffer.split_off(split);
                let committed = std::mem::replace(&mut buffer, carry);

                let info = writer.write_part(fs, next_index, &committed)?;
                progress.report(&format!(
                    "created {} ({} lines)",
                    info.file_name(),
                    info.lines
                ));
                parts.push(info);
                next_index += 1;
            }
        }

        if !buffer.is_empty() {
            debug!("final flush: {} lines", buffer.len());
            let info = writer.write_part(fs, next_index, &buffer)?;
            progress.report(&format!(
                "created {} ({} lines)",
                info.file_name(),
                info.lines
            ));
            parts.push(info);
        }

        progress.report(&format!(
            "done: split {} lines into {} files",
            total_lines,
            parts.len()
        ));

        Ok(SplitReport { total_lines, parts })
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}
