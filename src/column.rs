//! Column specifications - per-column layout overrides.
//!
//! A [`ColumnSpec`] carries the column's display name (`key`) and an
//! optional override for each layout property. An absent override defers
//! to the table's [`Formatter`] defaults; the `resolved_*` accessors apply
//! that two-step lookup uniformly so no caller hand-rolls its own
//! fallback chain.

use crate::formatter::{ConfigError, Formatter, PropValue, TextDirection};

/// Per-column formatting record.
///
/// Only `key` is always present. Every other field is an explicit
/// override; `None` means "use the formatter default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Display name shown in the header row.
    pub key: String,
    /// Explicit width in characters.
    pub width: Option<usize>,
    /// Explicit text direction.
    pub text_dir: Option<TextDirection>,
    /// Explicit rule string for this column's separator segment.
    pub row_delim: Option<String>,
    /// Explicit string printed before the cell.
    pub left_delim: Option<String>,
    /// Explicit string printed after the cell.
    pub right_delim: Option<String>,
    /// Explicit auto-resize policy.
    pub auto_resize: Option<bool>,
    /// Explicit truncation policy.
    pub truncate: Option<bool>,
}

impl ColumnSpec {
    /// Create a spec with only the display name set.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Override the column width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the text direction.
    #[must_use]
    pub fn text_dir(mut self, dir: TextDirection) -> Self {
        self.text_dir = Some(dir);
        self
    }

    /// Override the separator rule string.
    #[must_use]
    pub fn row_delim(mut self, delim: impl Into<String>) -> Self {
        self.row_delim = Some(delim.into());
        self
    }

    /// Override the left cell delimiter.
    #[must_use]
    pub fn left_delim(mut self, delim: impl Into<String>) -> Self {
        self.left_delim = Some(delim.into());
        self
    }

    /// Override the right cell delimiter.
    #[must_use]
    pub fn right_delim(mut self, delim: impl Into<String>) -> Self {
        self.right_delim = Some(delim.into());
        self
    }

    /// Override the auto-resize policy.
    #[must_use]
    pub fn auto_resize(mut self, enabled: bool) -> Self {
        self.auto_resize = Some(enabled);
        self
    }

    /// Override the truncation policy.
    #[must_use]
    pub fn truncate(mut self, enabled: bool) -> Self {
        self.truncate = Some(enabled);
        self
    }

    /// Effective width: explicit override, else the formatter default.
    #[must_use]
    pub fn resolved_width(&self, defaults: &Formatter) -> usize {
        self.width.unwrap_or_else(|| defaults.width())
    }

    /// Effective text direction.
    #[must_use]
    pub fn resolved_text_dir(&self, defaults: &Formatter) -> TextDirection {
        self.text_dir.unwrap_or_else(|| defaults.text_dir())
    }

    /// Effective separator rule string.
    #[must_use]
    pub fn resolved_row_delim<'a>(&'a self, defaults: &'a Formatter) -> &'a str {
        self.row_delim.as_deref().unwrap_or_else(|| defaults.row_delim())
    }

    /// Effective left cell delimiter.
    #[must_use]
    pub fn resolved_left_delim<'a>(&'a self, defaults: &'a Formatter) -> &'a str {
        self.left_delim.as_deref().unwrap_or_else(|| defaults.left_delim())
    }

    /// Effective right cell delimiter.
    #[must_use]
    pub fn resolved_right_delim<'a>(&'a self, defaults: &'a Formatter) -> &'a str {
        self.right_delim.as_deref().unwrap_or_else(|| defaults.right_delim())
    }

    /// Effective auto-resize policy.
    #[must_use]
    pub fn resolved_auto_resize(&self, defaults: &Formatter) -> bool {
        self.auto_resize.unwrap_or_else(|| defaults.auto_resize())
    }

    /// Effective truncation policy.
    #[must_use]
    pub fn resolved_truncate(&self, defaults: &Formatter) -> bool {
        self.truncate.unwrap_or_else(|| defaults.truncate())
    }

    /// Name-based resolved lookup, mirroring [`Formatter::get`].
    ///
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn get<'a>(&'a self, prop: &str, defaults: &'a Formatter) -> Option<PropValue<'a>> {
        match prop {
            "width" => Some(PropValue::Width(self.resolved_width(defaults))),
            "text_dir" => Some(PropValue::TextDir(self.resolved_text_dir(defaults))),
            "row_delimiter" => Some(PropValue::Delimiter(self.resolved_row_delim(defaults))),
            "left_delimiter" => Some(PropValue::Delimiter(self.resolved_left_delim(defaults))),
            "right_delimiter" => Some(PropValue::Delimiter(self.resolved_right_delim(defaults))),
            "auto_resize" => Some(PropValue::Flag(self.resolved_auto_resize(defaults))),
            "truncate" => Some(PropValue::Flag(self.resolved_truncate(defaults))),
            _ => None,
        }
    }
}

/// A table header, before normalization into column specs.
///
/// The three shapes the table accepts: a comma-delimited string of names,
/// an ordered sequence of names, or fully structured specs with per-column
/// overrides. Normalization happens once, at header assignment; nothing
/// downstream branches on the input shape again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Column names in one string, split on `,`.
    Delimited(String),
    /// Column names as an ordered sequence.
    Names(Vec<String>),
    /// Structured per-column specs.
    Specs(Vec<ColumnSpec>),
}

impl Default for Header {
    /// An empty header: a table with zero columns.
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

impl From<&str> for Header {
    fn from(s: &str) -> Self {
        Self::Delimited(s.to_string())
    }
}

impl From<String> for Header {
    fn from(s: String) -> Self {
        Self::Delimited(s)
    }
}

impl From<Vec<String>> for Header {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl From<Vec<&str>> for Header {
    fn from(names: Vec<&str>) -> Self {
        Self::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Header {
    fn from(names: &[&str]) -> Self {
        Self::Names(names.iter().map(|n| (*n).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Header {
    fn from(names: [&str; N]) -> Self {
        Self::Names(names.iter().map(|n| (*n).to_string()).collect())
    }
}

impl From<Vec<ColumnSpec>> for Header {
    fn from(specs: Vec<ColumnSpec>) -> Self {
        Self::Specs(specs)
    }
}

/// Normalize a header into its column specs.
///
/// Scalar names become specs whose only explicit value is `key`; structured
/// specs pass through. Explicit zero widths are rejected here so render
/// never sees one.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidWidth`] when a structured spec carries an
/// explicit width of zero.
pub fn derive_specs(header: Header) -> Result<Vec<ColumnSpec>, ConfigError> {
    let specs = match header {
        Header::Delimited(s) => s.split(',').map(ColumnSpec::new).collect(),
        Header::Names(names) => names.into_iter().map(ColumnSpec::new).collect(),
        Header::Specs(specs) => specs,
    };
    if specs.iter().any(|spec| spec.width == Some(0)) {
        return Err(ConfigError::InvalidWidth);
    }
    Ok(specs)
}
