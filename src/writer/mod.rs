//! Part writer.
//!
//! Serializes a committed slice of lines into one output file under the
//! configured encoding and naming template. Each part is written once and
//! never touched again; an existing file at the same path is overwritten
//! without warning, which is safe in normal operation because part indices
//! are monotonic and newly generated.

use std::io::{BufWriter, Write};
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::SplitError;
use crate::fs::FileSystem;
use crate::part::PartInfo;

#[cfg(windows)]
const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_TERMINATOR: &str = "\n";

/// Writes committed line slices as numbered part files.
pub(crate) struct PartWriter<'a> {
    out_dir: &'a Path,
    base: &'a str,
    /// Input extension including its dot, or empty.
    ext: &'a str,
    template: &'a str,
    encoding: &'static Encoding,
    terminator: Vec<u8>,
}

impl<'a> PartWriter<'a> {
    pub(crate) fn new(
        out_dir: &'a Path,
        base: &'a str,
        ext: &'a str,
        template: &'a str,
        encoding: &'static Encoding,
    ) -> Self {
        let (terminator, _, _) = encoding.encode(LINE_TERMINATOR);
        Self {
            out_dir,
            base,
            ext,
            template,
            encoding,
            terminator: terminator.into_owned(),
        }
    }

    /// Renders the file name for a 1-based part index.
    ///
    /// `{index}` is zero-padded to three digits and keeps growing past 999.
    pub(crate) fn file_name(&self, index: u32) -> String {
        self.template
            .replace("{base}", self.base)
            .replace("{index}", &format!("{:03}", index))
            .replace("{ext}", self.ext)
    }

    /// Writes `lines` as the part with the given index.
    ///
    /// The output handle is scoped to this call and released on every exit
    /// path; a failure mid-write leaves the partial file on disk.
    pub(crate) fn write_part(
        &self,
        fs: &dyn FileSystem,
        index: u32,
        lines: &[String],
    ) -> Result<PartInfo, SplitError> {
        let path = self.out_dir.join(self.file_name(index));

        let mut out = BufWriter::new(fs.create_write(&path)?);
        for line in lines {
            let (bytes, _, _) = self.encoding.encode(line);
            out.write_all(&bytes)?;
            out.write_all(&self.terminator)?;
        }
        out.flush()?;

        Ok(PartInfo {
            index,
            path,
            lines: lines.len(),
        })
    }
}
