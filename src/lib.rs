//! # tablify
//!
//! Render tabular data (a header plus data rows) into a fixed-width,
//! delimiter-framed text table for terminal display.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablify::prelude::*;
//!
//! let mut table = Table::new("product,price").unwrap();
//! table.write_cells(["Pen", "1.5"]).unwrap();
//! table.write_cells(["Ruler", "0.99"]).unwrap();
//! print!("{}", table.render());
//! ```
//!
//! ## Core Concepts
//!
//! - **Formatter**: shared, immutable layout defaults for a table
//! - **ColumnSpec**: per-column overrides; unset properties defer to the
//!   formatter
//! - **Table**: ingests rows, tracks auto-resize, renders the text block
//! - **Line / Header**: the accepted input shapes, normalized once at the
//!   ingestion boundary

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod column;
pub mod formatter;
pub mod line;
pub mod table;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::column::{ColumnSpec, Header};
    pub use crate::formatter::{
        ConfigError, Formatter, FormatterBuilder, PropValue, TextDirection, default_formatter,
    };
    pub use crate::line::Line;
    pub use crate::table::{LogicError, Table, ValidationError};
}

// Re-export key types at crate root
pub use column::{ColumnSpec, Header};
pub use formatter::{ConfigError, Formatter, TextDirection};
pub use line::Line;
pub use table::{LogicError, Table, ValidationError};
