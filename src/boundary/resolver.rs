//! Backward-scanning split-point resolver.

use std::collections::HashSet;

/// The set of identifier values that mark a line as a safe split boundary.
///
/// A line "qualifies" when its leading field is a member of the set. The
/// leading field is the value before the first comma, or the quoted value at
/// the start of the line when the line opens with a double quote. Quoting in
/// any other field is not interpreted.
///
/// The default set holds the journal record-type codes `2000`, `2111` and
/// `2101`, each of which ends a compound entry in the export format this
/// tool was written for.
///
/// # Example
///
/// ```
/// use splitrs::AnchorSet;
///
/// let anchors = AnchorSet::default();
/// assert!(anchors.qualifies("2000,2024/04/01,100"));
/// assert!(anchors.qualifies("\"2111\",detail"));
/// assert!(!anchors.qualifies("5000,2024/04/01,100"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSet {
    values: HashSet<String>,
}

impl AnchorSet {
    /// Creates an anchor set from any collection of identifier values.
    ///
    /// An empty set is allowed; with no anchors every full window flushes at
    /// the threshold.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `value` is a member of the set.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Returns true if the line's leading field is a member of the set.
    pub fn qualifies(&self, line: &str) -> bool {
        self.contains(leading_field(line))
    }

    /// Returns the number of identifiers in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::new(["2000", "2111", "2101"])
    }
}

impl<S: Into<String>> FromIterator<S> for AnchorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Extracts the leading field of a line.
///
/// Rules, in order:
/// - a line opening with `"` yields the text between that quote and the next
///   one; with no closing quote the whole line (opening quote included) is
///   the field
/// - otherwise the text before the first comma; a line with no comma, or
///   with a comma as its very first character, is its own field
/// - an empty line yields the empty string
pub(crate) fn leading_field(line: &str) -> &str {
    if line.is_empty() {
        return line;
    }

    if let Some(rest) = line.strip_prefix('"') {
        return match rest.find('"') {
            Some(end) => &rest[..end],
            None => line,
        };
    }

    match line.find(',') {
        Some(0) | None => line,
        Some(comma) => &line[..comma],
    }
}

/// Finds the rightmost safe cut index for the given buffer of lines.
///
/// Scans from the last line down to the first; the first line whose leading
/// field is in `anchors` yields `index + 1`, i.e. the cut lands immediately
/// after the rightmost anchor line. When no line qualifies the full buffer
/// length is returned, which flushes the whole window at the threshold. That
/// fallback can sever a logical record longer than the window; it is the
/// documented trade-off for bounded memory, not an error.
///
/// The returned index is in `[1, lines.len()]` for a non-empty buffer.
///
/// # Example
///
/// ```
/// use splitrs::{find_split_point, AnchorSet};
///
/// let lines = ["2000,head", "detail-a", "2111,head", "detail-b"];
/// // Rightmost anchor is at index 2, so the cut lands after it.
/// assert_eq!(find_split_point(&lines, &AnchorSet::default()), 3);
/// ```
pub fn find_split_point<S: AsRef<str>>(lines: &[S], anchors: &AnchorSet) -> usize {
    for (index, line) in lines.iter().enumerate().rev() {
        if anchors.contains(leading_field(line.as_ref())) {
            return index + 1;
        }
    }
    lines.len()
}
