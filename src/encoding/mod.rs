//! Text-encoding resolution.
//!
//! The input file and every output part use the same named encoding. Labels
//! are resolved through the WHATWG label registry that `encoding_rs` ships,
//! so `"shift_jis"`, `"Shift_JIS"`, `"sjis"` and friends all name the same
//! codec.

use encoding_rs::Encoding;

use crate::error::SplitError;

/// Resolves an encoding label to its codec.
///
/// Unknown labels are reported as [`SplitError::InvalidArgument`] so they
/// surface during validation, before any output is produced.
pub(crate) fn resolve(label: &str) -> Result<&'static Encoding, SplitError> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| SplitError::InvalidArgument {
        message: format!("unknown encoding label: {}", label),
    })
}
