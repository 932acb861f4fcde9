//! Streaming line reader with incremental decoding.

use std::io::Read;

use encoding_rs::{CoderResult, Decoder, Encoding};

use crate::error::SplitError;

const READ_BUF_SIZE: usize = 8192;

/// A lazy, forward-only iterator of decoded lines over a byte stream.
///
/// Bytes are decoded incrementally under the configured encoding, so a
/// multi-byte sequence split across read boundaries decodes correctly.
/// Malformed sequences decode to U+FFFD rather than failing the run. Line
/// terminators (`\n` or `\r\n`) are stripped, and a trailing terminator does
/// not produce an empty final line.
///
/// The reader is not restartable: once exhausted, a fresh run must reopen
/// the underlying source.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use splitrs::LineReader;
///
/// let reader = LineReader::with_label(Cursor::new("2000,a\r\ndetail\n"), "utf-8")?;
/// let lines: Vec<String> = reader.collect::<Result<_, _>>()?;
/// assert_eq!(lines, ["2000,a", "detail"]);
/// # Ok::<(), splitrs::SplitError>(())
/// ```
pub struct LineReader<R> {
    reader: R,
    decoder: Decoder,
    /// Decoded text not yet emitted; at most one partial line plus whatever
    /// the last read produced.
    text: String,
    eof: bool,
    done: bool,
}

impl<R: Read> LineReader<R> {
    /// Creates a line reader over `reader` decoding with `encoding`.
    pub fn new(reader: R, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            decoder: encoding.new_decoder(),
            text: String::new(),
            eof: false,
            done: false,
        }
    }

    /// Creates a line reader resolving `label` through the WHATWG registry.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidArgument`] for an unknown label.
    pub fn with_label(reader: R, label: &str) -> Result<Self, SplitError> {
        Ok(Self::new(reader, crate::encoding::resolve(label)?))
    }

    /// Decodes one read's worth of bytes onto the text carry.
    fn decode(&mut self, src: &[u8], last: bool) {
        let mut consumed = 0;
        loop {
            if let Some(needed) = self.decoder.max_utf8_buffer_length(src.len() - consumed) {
                self.text.reserve(needed);
            }
            let (result, read, _had_errors) =
                self.decoder
                    .decode_to_string(&src[consumed..], &mut self.text, last);
            consumed += read;
            if matches!(result, CoderResult::InputEmpty) {
                break;
            }
        }
    }

    /// Takes the next complete line off the front of the carry, if any.
    fn take_line(&mut self) -> Option<String> {
        let newline = self.text.find('\n')?;
        let rest = self.text.split_off(newline + 1);
        let mut line = std::mem::replace(&mut self.text, rest);
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
        Some(line)
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<String, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(line) = self.take_line() {
                return Some(Ok(line));
            }

            if self.eof {
                self.done = true;
                if self.text.is_empty() {
                    return None;
                }
                // Input ended without a terminator; the carry is the last line.
                return Some(Ok(std::mem::take(&mut self.text)));
            }

            let mut buf = [0u8; READ_BUF_SIZE];
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.eof = true;
                    self.decode(&[], true);
                }
                Ok(n) => self.decode(&buf[..n], false),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
