//! Split-boundary detection.
//!
//! This module contains the logic for deciding where a pending buffer of
//! lines may safely be cut so that no multi-line record is severed.
//!
//! - [`AnchorSet`] - The identifiers that mark a line as a safe cut point
//! - [`find_split_point`] - Backward scan for the rightmost safe cut

mod resolver;

pub use resolver::{find_split_point, AnchorSet};
