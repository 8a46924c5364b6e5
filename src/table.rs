//! Table - ingestion, layout and rendering of fixed-width text tables.
//!
//! A [`Table`] owns its column specs and row store and shares a
//! [`Formatter`] for defaults. Rows arrive through [`Table::write_line`]
//! (or the [`Table::write_cells`] convenience) and are stored as escaped,
//! comma-joined strings; [`Table::render`] turns the whole table into one
//! text block: a separator rule, the header, and each row framed by rules.
//!
//! # Examples
//!
//! ```
//! use tablify::table::Table;
//!
//! let mut table = Table::new("name,price").unwrap();
//! table.write_cells(["Pen", "1.5"]).unwrap();
//! table.write_cells(["Ruler", "0.99"]).unwrap();
//! println!("{}", table.render());
//! ```
//!
//! The row template and separator line are cached between renders. The
//! cache is dropped by any mutation that can change the layout (header
//! assignment, auto-resize widening) and rebuilt on the next render, so a
//! column widened mid-stream never renders against a stale separator.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::column::{ColumnSpec, Header, derive_specs};
use crate::formatter::{ConfigError, Formatter, TextDirection, default_formatter};
use crate::line::{Line, split_fields, unescape_field};

/// Errors raised while ingesting a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The row splits into more fields than the table has columns.
    TooManyFields {
        /// Fields found in the row.
        fields: usize,
        /// Columns declared by the header.
        columns: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyFields { fields, columns } => write!(
                f,
                "line contains more fields ({fields}) than table columns ({columns})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Internal invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// Column index outside the spec list.
    ColumnIndex {
        /// Requested index.
        index: usize,
        /// Number of columns.
        columns: usize,
    },
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnIndex { index, columns } => {
                write!(f, "column index {index} out of range for {columns} columns")
            }
        }
    }
}

impl std::error::Error for LogicError {}

/// Resolved per-column layout, frozen for one render pass.
#[derive(Debug, Clone)]
struct CellTemplate {
    width: usize,
    dir: TextDirection,
    left: String,
    right: String,
}

/// Cached render artifacts: one template per column plus the separator line.
#[derive(Debug, Clone)]
struct RenderCache {
    cells: Vec<CellTemplate>,
    separator: String,
}

/// A fixed-width text table.
#[derive(Debug, Clone)]
pub struct Table {
    formatter: Arc<Formatter>,
    specs: Vec<ColumnSpec>,
    rows: Vec<String>,
    /// `None` marks the template/separator stale; rebuilt on render.
    cache: Option<RenderCache>,
}

impl Table {
    /// Create a table over the process-wide default formatter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the header carries an invalid column
    /// spec (see [`Table::set_header`]).
    pub fn new(header: impl Into<Header>) -> Result<Self, ConfigError> {
        Self::with_formatter(header, default_formatter())
    }

    /// Create a table sharing the given formatter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the header carries an invalid column
    /// spec.
    pub fn with_formatter(
        header: impl Into<Header>,
        formatter: Arc<Formatter>,
    ) -> Result<Self, ConfigError> {
        let mut table = Self {
            formatter,
            specs: Vec::new(),
            rows: Vec::new(),
            cache: None,
        };
        table.set_header(header)?;
        Ok(table)
    }

    /// Replace the header, rebuilding all column specs.
    ///
    /// Existing rows are kept; the render cache is invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] when a structured spec
    /// carries an explicit width of zero.
    pub fn set_header(&mut self, header: impl Into<Header>) -> Result<(), ConfigError> {
        self.specs = derive_specs(header.into())?;
        self.cache = None;
        log::debug!("header set: {} columns", self.specs.len());
        Ok(())
    }

    /// The shared formatter supplying defaults.
    #[must_use]
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// The column specs, in header order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.specs
    }

    /// Bounds-checked access to one column spec.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::ColumnIndex`] when `index >= columns`.
    pub fn column(&self, index: usize) -> Result<&ColumnSpec, LogicError> {
        self.specs.get(index).ok_or(LogicError::ColumnIndex {
            index,
            columns: self.specs.len(),
        })
    }

    /// The stored rows, each in its escaped comma-joined form.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.rows
    }

    /// Number of declared columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.specs.len()
    }

    /// Number of stored rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Ingest one row.
    ///
    /// Accepts anything convertible to [`Line`]: a comma-delimited string
    /// (commas are separators) or a sequence of values (commas inside a
    /// value are escaped and survive as data). After the row is stored,
    /// columns with auto-resize grow to fit any longer field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyFields`] when the row splits into
    /// more fields than the table has columns; the row is not appended.
    pub fn write_line(&mut self, line: impl Into<Line>) -> Result<(), ValidationError> {
        let stored = line.into().into_stored();
        {
            let fields = split_fields(&stored);
            if fields.len() > self.specs.len() {
                return Err(ValidationError::TooManyFields {
                    fields: fields.len(),
                    columns: self.specs.len(),
                });
            }
            if widen_columns(&self.formatter, &mut self.specs, &fields) {
                self.cache = None;
            }
        }
        log::trace!("row appended: {stored:?}");
        self.rows.push(stored);
        Ok(())
    }

    /// Ingest one row from an iterator of displayable values.
    ///
    /// # Errors
    ///
    /// Same as [`Table::write_line`].
    pub fn write_cells<I>(&mut self, cells: I) -> Result<(), ValidationError>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let values: Vec<String> = cells.into_iter().map(|c| c.to_string()).collect();
        self.write_line(Line::Values(values))
    }

    /// Render the table into one text block.
    ///
    /// Layout: `separator`, header row, then each data row preceded by a
    /// separator, and a closing separator; every line ends with `\n`.
    /// Rendering is idempotent between mutations.
    pub fn render(&mut self) -> String {
        // Widening pass first, so the separator built below already
        // reflects rows that arrived without auto-resize tracking.
        let mut widened = false;
        for stored in &self.rows {
            let fields = split_fields(stored);
            widened |= widen_columns(&self.formatter, &mut self.specs, &fields);
        }
        if widened {
            self.cache = None;
        }
        if self.cache.is_none() {
            log::debug!("rebuilding row template and separator");
        }
        let cache = self
            .cache
            .get_or_insert_with(|| build_cache(&self.formatter, &self.specs));

        let mut out = String::new();
        out.push_str(&cache.separator);
        out.push('\n');
        for (cell, spec) in cache.cells.iter().zip(&self.specs) {
            push_cell(&mut out, cell, &spec.key);
        }
        out.push('\n');
        for stored in &self.rows {
            out.push_str(&cache.separator);
            out.push('\n');
            let fields = split_fields(stored);
            for (i, (cell, spec)) in cache.cells.iter().zip(&self.specs).enumerate() {
                let raw = fields.get(i).copied().unwrap_or("");
                let value = unescape_field(raw);
                let truncating = !spec.resolved_auto_resize(&self.formatter)
                    && spec.resolved_truncate(&self.formatter);
                if truncating {
                    push_cell(&mut out, cell, &truncate_chars(&value, cell.width));
                } else {
                    push_cell(&mut out, cell, &value);
                }
            }
            out.push('\n');
        }
        out.push_str(&cache.separator);
        out.push('\n');
        out
    }
}

/// Grow auto-resize columns to fit their fields. Returns whether any
/// column changed (widening only; a column never shrinks).
fn widen_columns(defaults: &Formatter, specs: &mut [ColumnSpec], fields: &[&str]) -> bool {
    let mut widened = false;
    for (spec, field) in specs.iter_mut().zip(fields) {
        if !spec.resolved_auto_resize(defaults) {
            continue;
        }
        let len = field.chars().count();
        if len > spec.resolved_width(defaults) {
            log::debug!("auto-resize: column {:?} widened to {len}", spec.key);
            spec.width = Some(len);
            widened = true;
        }
    }
    widened
}

fn build_cache(defaults: &Formatter, specs: &[ColumnSpec]) -> RenderCache {
    let cells: Vec<CellTemplate> = specs
        .iter()
        .map(|spec| CellTemplate {
            width: spec.resolved_width(defaults),
            dir: spec.resolved_text_dir(defaults),
            left: spec.resolved_left_delim(defaults).to_string(),
            right: spec.resolved_right_delim(defaults).to_string(),
        })
        .collect();
    let mut separator = String::new();
    for (cell, spec) in cells.iter().zip(specs) {
        let target = cell.width + cell.left.chars().count() + cell.right.chars().count();
        let rule = spec.resolved_row_delim(defaults);
        separator.extend(rule.chars().cycle().take(target));
    }
    RenderCache { cells, separator }
}

/// Place one field inside its cell: aligned within `width` characters and
/// wrapped with the column delimiters. Fields longer than the width (with
/// truncation off) overflow rather than clip.
fn push_cell(out: &mut String, cell: &CellTemplate, value: &str) {
    out.push_str(&cell.left);
    let pad = cell.width.saturating_sub(value.chars().count());
    match cell.dir {
        TextDirection::Ltr => {
            out.push_str(value);
            out.extend(std::iter::repeat_n(' ', pad));
        }
        TextDirection::Rtl => {
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(value);
        }
    }
    out.push_str(&cell.right);
}

/// Clip a value to `width` characters. No ellipsis marker.
fn truncate_chars<'a>(value: &'a str, width: usize) -> Cow<'a, str> {
    if value.chars().count() > width {
        Cow::Owned(value.chars().take(width).collect())
    } else {
        Cow::Borrowed(value)
    }
}
