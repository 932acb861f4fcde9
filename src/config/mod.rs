//! Configuration for split behavior.
//!
//! This module provides the [`SplitConfig`] value passed to the orchestrator
//! at call time. It controls:
//!
//! - the per-file line threshold
//! - the text encoding used to read the input and write the parts
//! - the anchor identifiers that mark safe split boundaries
//! - progress-report cadence and output file naming
//!
//! # Example
//!
//! ```
//! use splitrs::{AnchorSet, SplitConfig};
//!
//! // Defaults
//! let config = SplitConfig::default();
//!
//! // Builder pattern
//! let config = SplitConfig::default()
//!     .with_rows_per_file(500)
//!     .with_encoding("utf-8")
//!     .with_anchors(AnchorSet::new(["HDR"]));
//!
//! # config.validate()?;
//! # Ok::<(), splitrs::SplitError>(())
//! ```

use crate::boundary::AnchorSet;
use crate::error::SplitError;

/// Default maximum number of lines per output part.
pub const DEFAULT_ROWS_PER_FILE: usize = 1000;

/// Default encoding label for the input and the output parts.
pub const DEFAULT_ENCODING: &str = "shift_jis";

/// Default number of lines between periodic progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Default output file-name template.
///
/// `{base}` is the input file stem, `{index}` the 1-based part index
/// rendered zero-padded to three digits, and `{ext}` the input extension
/// including its dot (empty when the input has none).
pub const DEFAULT_FILE_NAME_TEMPLATE: &str = "{base}_part{index}{ext}";

/// Configuration for a split run.
///
/// `SplitConfig` is an immutable value handed to [`Splitter::new`]; nothing
/// in the engine reads global state. Builder methods do not validate — call
/// [`SplitConfig::validate`] (the engine does so on every run) to check the
/// assembled value.
///
/// [`Splitter::new`]: crate::Splitter::new
///
/// # Example
///
/// ```
/// use splitrs::SplitConfig;
///
/// let config = SplitConfig::new(2000)?;
/// assert_eq!(config.rows_per_file(), 2000);
/// assert_eq!(config.encoding(), "shift_jis");
/// # Ok::<(), splitrs::SplitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Maximum number of lines per output part.
    rows_per_file: usize,

    /// Encoding label, resolved through the WHATWG registry.
    encoding: String,

    /// Identifiers marking safe split boundaries.
    anchors: AnchorSet,

    /// Lines between periodic progress reports.
    progress_interval: u64,

    /// Output file-name template.
    file_name_template: String,
}

impl SplitConfig {
    /// Creates a configuration with the given threshold and default
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidArgument`] if `rows_per_file` is zero.
    pub fn new(rows_per_file: usize) -> Result<Self, SplitError> {
        let config = Self::default().with_rows_per_file(rows_per_file);
        config.validate()?;
        Ok(config)
    }

    /// Sets the per-file line threshold.
    pub fn with_rows_per_file(mut self, rows_per_file: usize) -> Self {
        self.rows_per_file = rows_per_file;
        self
    }

    /// Sets the encoding label.
    ///
    /// The label is resolved when the configuration is validated, so a typo
    /// surfaces before any output is produced.
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    /// Sets the anchor identifiers.
    pub fn with_anchors(mut self, anchors: AnchorSet) -> Self {
        self.anchors = anchors;
        self
    }

    /// Sets the number of lines between periodic progress reports.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Sets the output file-name template.
    ///
    /// Must contain `{index}`; `{base}` and `{ext}` are optional.
    pub fn with_file_name_template(mut self, template: impl Into<String>) -> Self {
        self.file_name_template = template.into();
        self
    }

    /// Returns the per-file line threshold.
    pub fn rows_per_file(&self) -> usize {
        self.rows_per_file
    }

    /// Returns the encoding label.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Returns the anchor identifiers.
    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    /// Returns the number of lines between periodic progress reports.
    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }

    /// Returns the output file-name template.
    pub fn file_name_template(&self) -> &str {
        &self.file_name_template
    }

    /// Validates the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidArgument`] if:
    /// - `rows_per_file` is zero
    /// - `progress_interval` is zero
    /// - the encoding label does not name a known encoding
    /// - the file-name template lacks an `{index}` placeholder
    ///
    /// # Example
    ///
    /// ```
    /// use splitrs::SplitConfig;
    ///
    /// let config = SplitConfig::default().with_rows_per_file(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.rows_per_file == 0 {
            return Err(SplitError::InvalidArgument {
                message: "rows_per_file must be at least 1".to_string(),
            });
        }

        if self.progress_interval == 0 {
            return Err(SplitError::InvalidArgument {
                message: "progress_interval must be at least 1".to_string(),
            });
        }

        crate::encoding::resolve(&self.encoding)?;

        if !self.file_name_template.contains("{index}") {
            return Err(SplitError::InvalidArgument {
                message: "file_name_template must contain {index}".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            rows_per_file: DEFAULT_ROWS_PER_FILE,
            encoding: DEFAULT_ENCODING.to_string(),
            anchors: AnchorSet::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            file_name_template: DEFAULT_FILE_NAME_TEMPLATE.to_string(),
        }
    }
}
