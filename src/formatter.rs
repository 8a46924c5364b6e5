//! Formatter - shared default formatting options for tables.
//!
//! A [`Formatter`] is an immutable bag of column-layout defaults: width,
//! text direction, the rule character and cell delimiters, and the
//! auto-resize/truncate policies. One formatter may back any number of
//! tables; per-column overrides in a [`ColumnSpec`](crate::column::ColumnSpec)
//! take precedence over it at resolution time.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Built-in default column width.
pub const DEFAULT_WIDTH: usize = 10;
/// Built-in default rule character.
pub const DEFAULT_ROW_DELIM: &str = "-";
/// Built-in default left cell delimiter.
pub const DEFAULT_LEFT_DELIM: &str = "| ";
/// Built-in default right cell delimiter.
pub const DEFAULT_RIGHT_DELIM: &str = " ";

static DEFAULT_FORMATTER: Lazy<Arc<Formatter>> = Lazy::new(|| Arc::new(Formatter::default()));

/// The process-wide default formatter, shared between tables created
/// without an explicit one.
#[must_use]
pub fn default_formatter() -> Arc<Formatter> {
    Arc::clone(&DEFAULT_FORMATTER)
}

/// Horizontal text direction within a cell.
///
/// `Ltr` left-justifies (pads on the right); `Rtl` right-justifies
/// (pads on the left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    /// Left-to-right: field starts at the left edge of the cell.
    #[default]
    Ltr,
    /// Right-to-left: field ends at the right edge of the cell.
    Rtl,
}

impl TextDirection {
    /// The lowercase name used in property lookups.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            other => Err(ConfigError::UnknownTextDirection(other.to_string())),
        }
    }
}

/// A single resolved property value, as returned by name-based lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropValue<'a> {
    /// Column width in characters.
    Width(usize),
    /// Text direction.
    TextDir(TextDirection),
    /// One of the delimiter strings.
    Delimiter(&'a str),
    /// A boolean policy (`auto_resize` or `truncate`).
    Flag(bool),
}

/// Errors raised while constructing a [`Formatter`] or deriving column specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width must be a positive integer.
    InvalidWidth,
    /// Text direction string was neither `ltr` nor `rtl`.
    UnknownTextDirection(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth => write!(f, "width must be a positive integer"),
            Self::UnknownTextDirection(s) => write!(f, "unknown text direction: {s}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable defaults for every layout property a column can override.
///
/// Construct one with [`Formatter::builder`]; the zero-argument
/// [`Default`] carries the built-in values (width 10, ltr, `-` rule,
/// `"| "`/`" "` delimiters, auto-resize off, truncate on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    width: usize,
    text_dir: TextDirection,
    row_delim: String,
    left_delim: String,
    right_delim: String,
    auto_resize: bool,
    truncate: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            text_dir: TextDirection::Ltr,
            row_delim: DEFAULT_ROW_DELIM.to_string(),
            left_delim: DEFAULT_LEFT_DELIM.to_string(),
            right_delim: DEFAULT_RIGHT_DELIM.to_string(),
            auto_resize: false,
            truncate: true,
        }
    }
}

impl Formatter {
    /// Start building a formatter from the built-in defaults.
    #[must_use]
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    /// Default column width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Default text direction.
    #[must_use]
    pub fn text_dir(&self) -> TextDirection {
        self.text_dir
    }

    /// Default rule string repeated to form separator lines.
    #[must_use]
    pub fn row_delim(&self) -> &str {
        &self.row_delim
    }

    /// Default string printed before each cell.
    #[must_use]
    pub fn left_delim(&self) -> &str {
        &self.left_delim
    }

    /// Default string printed after each cell.
    #[must_use]
    pub fn right_delim(&self) -> &str {
        &self.right_delim
    }

    /// Whether columns grow to fit their longest value.
    #[must_use]
    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Whether overlong fields are clipped to the column width.
    #[must_use]
    pub fn truncate(&self) -> bool {
        self.truncate
    }

    /// Look up a property by name.
    ///
    /// Recognized names are `width`, `text_dir`, `row_delimiter`,
    /// `left_delimiter`, `right_delimiter`, `auto_resize` and `truncate`;
    /// anything else yields `None`.
    #[must_use]
    pub fn get(&self, prop: &str) -> Option<PropValue<'_>> {
        match prop {
            "width" => Some(PropValue::Width(self.width)),
            "text_dir" => Some(PropValue::TextDir(self.text_dir)),
            "row_delimiter" => Some(PropValue::Delimiter(&self.row_delim)),
            "left_delimiter" => Some(PropValue::Delimiter(&self.left_delim)),
            "right_delimiter" => Some(PropValue::Delimiter(&self.right_delim)),
            "auto_resize" => Some(PropValue::Flag(self.auto_resize)),
            "truncate" => Some(PropValue::Flag(self.truncate)),
            _ => None,
        }
    }
}

/// Builder for [`Formatter`].
#[derive(Debug, Clone)]
pub struct FormatterBuilder {
    inner: Formatter,
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterBuilder {
    /// Create a builder holding the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Formatter::default(),
        }
    }

    /// Set the default column width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.inner.width = width;
        self
    }

    /// Set the default text direction.
    #[must_use]
    pub fn text_dir(mut self, dir: TextDirection) -> Self {
        self.inner.text_dir = dir;
        self
    }

    /// Set the rule string for separator lines.
    #[must_use]
    pub fn row_delim(mut self, delim: impl Into<String>) -> Self {
        self.inner.row_delim = delim.into();
        self
    }

    /// Set the string printed before each cell.
    #[must_use]
    pub fn left_delim(mut self, delim: impl Into<String>) -> Self {
        self.inner.left_delim = delim.into();
        self
    }

    /// Set the string printed after each cell.
    #[must_use]
    pub fn right_delim(mut self, delim: impl Into<String>) -> Self {
        self.inner.right_delim = delim.into();
        self
    }

    /// Enable or disable column auto-resize.
    #[must_use]
    pub fn auto_resize(mut self, enabled: bool) -> Self {
        self.inner.auto_resize = enabled;
        self
    }

    /// Enable or disable field truncation.
    #[must_use]
    pub fn truncate(mut self, enabled: bool) -> Self {
        self.inner.truncate = enabled;
        self
    }

    /// Finish the build.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] when the width is zero.
    pub fn build(self) -> Result<Formatter, ConfigError> {
        if self.inner.width == 0 {
            return Err(ConfigError::InvalidWidth);
        }
        Ok(self.inner)
    }
}
