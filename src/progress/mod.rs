//! Progress reporting.
//!
//! The engine pushes human-readable status strings through a one-way sink:
//! directory creation, each written part with its line count, a periodic
//! running line count, and a final summary. There is no back-pressure and no
//! acknowledgment; a sink that drops messages cannot affect the run.

use std::sync::mpsc::Sender;

/// A one-way sink for human-readable progress messages.
pub trait ProgressSink {
    /// Accepts one status message.
    fn report(&mut self, message: &str);
}

/// A sink that discards every message.
///
/// Used by [`Splitter::split`] when the caller does not care about progress.
///
/// [`Splitter::split`]: crate::Splitter::split
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&mut self, _message: &str) {}
}

/// Adapts any `FnMut(&str)` closure into a sink.
///
/// # Example
///
/// ```
/// use splitrs::{FnProgress, ProgressSink};
///
/// let mut seen = Vec::new();
/// let mut sink = FnProgress::new(|message: &str| seen.push(message.to_string()));
/// sink.report("created output directory: out");
/// drop(sink);
/// assert_eq!(seen.len(), 1);
/// ```
#[derive(Debug)]
pub struct FnProgress<F>(F);

impl<F: FnMut(&str)> FnProgress<F> {
    /// Wraps `f` as a progress sink.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut(&str)> ProgressSink for FnProgress<F> {
    fn report(&mut self, message: &str) {
        (self.0)(message)
    }
}

/// A sink that forwards each message over a standard `mpsc` channel.
///
/// This is the boundary for embedding the engine in an interactive caller:
/// run the split on a worker thread with a `ChannelProgress`, and drain the
/// receiver from the caller's own loop. A closed receiver is ignored — the
/// run keeps going and the remaining messages are dropped.
///
/// # Example
///
/// ```
/// use std::sync::mpsc;
/// use splitrs::{ChannelProgress, ProgressSink};
///
/// let (tx, rx) = mpsc::channel();
/// let mut sink = ChannelProgress::new(tx);
/// sink.report("processed 1000 lines");
/// assert_eq!(rx.recv().unwrap(), "processed 1000 lines");
/// ```
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    tx: Sender<String>,
}

impl ChannelProgress {
    /// Wraps a channel sender as a progress sink.
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgress {
    fn report(&mut self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}
