//! The PartInfo and SplitReport types.

use std::path::PathBuf;

/// Metadata for one written output part.
///
/// Parts are written once and never mutated; their indices are contiguous
/// 1-based integers in write order.
///
/// # Example
///
/// ```
/// use splitrs::PartInfo;
///
/// let part = PartInfo {
///     index: 1,
///     path: "out/data_part001.csv".into(),
///     lines: 987,
/// };
/// assert_eq!(part.file_name(), "data_part001.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartInfo {
    /// 1-based part index.
    pub index: u32,

    /// Full path of the written file.
    pub path: PathBuf,

    /// Number of lines in this part.
    pub lines: usize,
}

impl PartInfo {
    /// Returns the file name component of the part's path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Summary of a completed split run.
///
/// Returned by [`Splitter::split`] on success; failures are reported as
/// [`SplitError`] instead, so a `SplitReport` always describes a run that
/// processed the entire input.
///
/// [`Splitter::split`]: crate::Splitter::split
/// [`SplitError`]: crate::SplitError
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Total number of input lines processed.
    pub total_lines: u64,

    /// The written parts, in index order.
    pub parts: Vec<PartInfo>,
}

impl SplitReport {
    /// Returns the number of parts written.
    ///
    /// Zero for an empty input; an empty input is a success, not an error.
    pub fn parts_written(&self) -> usize {
        self.parts.len()
    }
}
