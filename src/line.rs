//! Row input normalization and field-separator escaping.
//!
//! Rows are stored inside a table as a single comma-joined string. A literal
//! `,` inside a value would split into two fields, so it is swapped for an
//! escape sentinel (a control character not expected in normal text) before
//! storage and restored during rendering.

use std::borrow::Cow;

use smallvec::SmallVec;

/// Separator between fields in a stored row string.
pub const FIELD_SEP: char = ',';

/// Stand-in for a literal [`FIELD_SEP`] inside a field value.
pub const ESCAPE_SENTINEL: char = '\x1b';

/// Inline capacity for per-row field buffers; rows rarely exceed this.
pub(crate) type Fields<'a> = SmallVec<[&'a str; 8]>;

/// A row of input, before normalization into the stored string form.
///
/// `Delimited` strings are stored verbatim: their commas are field
/// separators. `Values` are escaped individually and then joined, so a
/// comma inside a value stays inside its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A single comma-delimited string, e.g. `"Pen,1.5"`.
    Delimited(String),
    /// An ordered sequence of field values.
    Values(Vec<String>),
}

impl Line {
    /// Normalize into the stored row string.
    pub(crate) fn into_stored(self) -> String {
        match self {
            Self::Delimited(s) => s,
            Self::Values(values) => {
                let escaped: Vec<Cow<'_, str>> =
                    values.iter().map(|v| escape_field(v)).collect();
                escaped.join(",")
            }
        }
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::Delimited(s.to_string())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self::Delimited(s)
    }
}

impl From<Vec<String>> for Line {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values)
    }
}

impl From<Vec<&str>> for Line {
    fn from(values: Vec<&str>) -> Self {
        Self::Values(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Line {
    fn from(values: &[&str]) -> Self {
        Self::Values(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Line {
    fn from(values: [&str; N]) -> Self {
        Self::Values(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Replace literal separators in a value with the escape sentinel.
#[must_use]
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(FIELD_SEP) {
        Cow::Owned(value.replace(FIELD_SEP, &ESCAPE_SENTINEL.to_string()))
    } else {
        Cow::Borrowed(value)
    }
}

/// Restore escaped separators in a stored field.
#[must_use]
pub fn unescape_field(field: &str) -> Cow<'_, str> {
    if field.contains(ESCAPE_SENTINEL) {
        Cow::Owned(field.replace(ESCAPE_SENTINEL, &FIELD_SEP.to_string()))
    } else {
        Cow::Borrowed(field)
    }
}

/// Split a stored row string into its fields.
pub(crate) fn split_fields(stored: &str) -> Fields<'_> {
    stored.split(FIELD_SEP).collect()
}
