//! End-to-end tests for table rendering.
//!
//! Each scenario drives the full pipeline: formatter construction, header
//! derivation, row ingestion, and rendering into the final text block.
//!
//! Run with: RUST_LOG=debug cargo test --test e2e_render -- --nocapture

mod common;

use std::sync::Arc;

use common::init_test_logging;
use tablify::prelude::*;

fn formatter(width: usize, auto_resize: bool, truncate: bool) -> Arc<Formatter> {
    Arc::new(
        Formatter::builder()
            .width(width)
            .auto_resize(auto_resize)
            .truncate(truncate)
            .build()
            .expect("valid formatter"),
    )
}

// =============================================================================
// Scenario 1: Header-only tables
// =============================================================================

#[test]
fn e2e_zero_rows_renders_rule_header_rule() {
    init_test_logging();
    tracing::info!("Starting E2E zero-row shape test");

    let mut table = Table::with_formatter("name,price", formatter(5, false, true))
        .expect("valid header");

    let output = table.render();
    tracing::debug!(output = %output, "Rendered empty table");

    let sep = "-".repeat(16);
    assert_eq!(output, format!("{sep}\n| name  | price \n{sep}\n"));
    assert_eq!(output.lines().count(), 3, "expected no row lines");
}

#[test]
fn e2e_header_from_names_matches_delimited() {
    init_test_logging();

    let mut from_names = Table::with_formatter(
        vec!["name", "price"],
        formatter(5, false, true),
    )
    .expect("valid header");
    let mut from_string =
        Table::with_formatter("name,price", formatter(5, false, true)).expect("valid header");

    assert_eq!(from_names.render(), from_string.render());
}

// =============================================================================
// Scenario 2: The name/price reference table
// =============================================================================

#[test]
fn e2e_name_price_reference_output() {
    init_test_logging();
    tracing::info!("Starting E2E name/price reference test");

    let mut table = Table::with_formatter("name,price", formatter(5, false, true))
        .expect("valid header");
    table.write_line("Pen,1.5").expect("row fits");
    table.write_line("Ruler,0.99").expect("row fits");

    let output = table.render();
    tracing::debug!(output = %output, "Rendered reference table");

    let sep = "-".repeat(16);
    let expected = format!(
        "{sep}\n| name  | price \n{sep}\n| Pen   | 1.5   \n{sep}\n| Ruler | 0.99  \n{sep}\n"
    );
    assert_eq!(output, expected);
    // "Ruler" is exactly the column width and survives untruncated.
    assert!(output.contains("Ruler"), "width-5 value must not be clipped");
}

// =============================================================================
// Scenario 3: Escaping
// =============================================================================

#[test]
fn e2e_comma_in_value_survives_round_trip() {
    init_test_logging();
    tracing::info!("Starting E2E comma round-trip test");

    let mut table =
        Table::with_formatter("amount,unit", formatter(10, false, false)).expect("valid header");
    table
        .write_line(Line::Values(vec!["1,500".to_string(), "pcs".to_string()]))
        .expect("two fields fit two columns");

    // Stored form carries the sentinel, never a bare separator.
    let stored = &table.lines()[0];
    tracing::debug!(stored = %stored, "Stored row");
    assert_eq!(stored, "1\u{1b}500,pcs");

    let output = table.render();
    let row_line = output.lines().nth(3).expect("row line present");
    assert!(
        row_line.contains("1,500"),
        "comma must reappear unescaped: {row_line}"
    );
    assert!(
        row_line.contains("| pcs"),
        "value must stay in its own column: {row_line}"
    );
}

// =============================================================================
// Scenario 4: Policies
// =============================================================================

#[test]
fn e2e_truncate_clips_to_width() {
    init_test_logging();

    let mut table = Table::with_formatter("h", formatter(3, false, true)).expect("valid header");
    table.write_line("hello").expect("one field");

    let output = table.render();
    tracing::debug!(output = %output, "Truncated output");
    assert!(output.contains("| hel "), "expected 'hel', got: {output}");
    assert!(!output.contains("hello"));
}

#[test]
fn e2e_auto_resize_widens_for_current_render() {
    init_test_logging();

    let mut table = Table::with_formatter("h", formatter(3, true, false)).expect("valid header");
    table.write_line("hello").expect("one field");

    assert_eq!(
        table.column(0).expect("in range").width,
        Some(5),
        "ingestion sweep must widen the column"
    );

    let output = table.render();
    let sep_line = output.lines().next().expect("separator first");
    assert_eq!(sep_line.len(), 5 + 3, "separator must match widened width");
    assert!(output.contains("| hello "));
}

#[test]
fn e2e_auto_resize_beats_truncate() {
    init_test_logging();

    // Both policies on: the adopted behavior is widen, never clip.
    let mut table = Table::with_formatter("h", formatter(3, true, true)).expect("valid header");
    table.write_line("hello").expect("one field");

    let output = table.render();
    assert!(output.contains("hello"), "auto-resize must win: {output}");
}

#[test]
fn e2e_short_row_pads_trailing_columns() {
    init_test_logging();

    let mut table =
        Table::with_formatter("a,b,c", formatter(4, false, true)).expect("valid header");
    table.write_line("x").expect("one field fits");

    let output = table.render();
    let row_line = output.lines().nth(3).expect("row line present");
    assert_eq!(row_line, "| x    |      |      ");
}

// =============================================================================
// Scenario 5: Rejection
// =============================================================================

#[test]
fn e2e_overflowing_row_rejected_and_not_stored() {
    init_test_logging();

    let mut table = Table::with_formatter("a,b", formatter(4, false, true)).expect("valid header");
    let err = table.write_line("1,2,3").expect_err("three fields, two columns");
    tracing::debug!(error = %err, "Rejection diagnostic");

    assert_eq!(
        err,
        ValidationError::TooManyFields {
            fields: 3,
            columns: 2
        }
    );
    assert!(table.lines().is_empty(), "rejected row must not be stored");

    // The table still renders, headers only.
    assert_eq!(table.render().lines().count(), 3);
}

// =============================================================================
// Scenario 6: Idempotence and shared formatters
// =============================================================================

#[test]
fn e2e_render_is_idempotent() {
    init_test_logging();

    let mut table =
        Table::with_formatter("k,v", formatter(4, true, false)).expect("valid header");
    table.write_cells(["stretchy", "1"]).expect("row fits");

    let first = table.render();
    let second = table.render();
    assert_eq!(first, second, "render must not mutate observable layout");
}

#[test]
fn e2e_formatter_shared_across_tables() {
    init_test_logging();

    let shared = formatter(6, false, true);
    let mut left = Table::with_formatter("a", Arc::clone(&shared)).expect("valid header");
    let mut right = Table::with_formatter("b", Arc::clone(&shared)).expect("valid header");

    left.write_line("first").expect("row fits");
    right.write_line("second").expect("row fits");

    assert!(left.render().contains("| first  "));
    assert!(right.render().contains("| second "));
    assert_eq!(shared.width(), 6, "shared formatter never mutates");
}

// =============================================================================
// Scenario 7: Per-column overrides
// =============================================================================

#[test]
fn e2e_column_overrides_shape_output() {
    init_test_logging();

    let header = vec![
        ColumnSpec::new("qty")
            .width(4)
            .text_dir(TextDirection::Rtl)
            .row_delim("="),
        ColumnSpec::new("item"),
    ];
    let mut table = Table::with_formatter(header, formatter(6, false, true))
        .expect("valid header");
    table.write_cells(["12", "pencil"]).expect("row fits");

    let output = table.render();
    tracing::debug!(output = %output, "Override-shaped table");

    let sep_line = output.lines().next().expect("separator first");
    assert_eq!(sep_line, format!("{}{}", "=".repeat(7), "-".repeat(9)));

    let row_line = output.lines().nth(3).expect("row line present");
    assert_eq!(row_line, "|   12 | pencil ");
}

#[test]
fn e2e_set_header_resets_columns() {
    init_test_logging();

    let mut table = Table::with_formatter("a,b", formatter(4, false, true)).expect("valid header");
    table.set_header("one,two,three").expect("valid header");
    assert_eq!(table.column_count(), 3);

    let output = table.render();
    assert!(output.contains("one") && output.contains("three"));
}
