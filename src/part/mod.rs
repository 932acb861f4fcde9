//! Part types.
//!
//! - [`PartInfo`] - One written output file: index, path, line count
//! - [`SplitReport`] - Totals for a completed run

mod data;

pub use data::{PartInfo, SplitReport};
