mod common;

use common::{RecordingSurface, assert_close};
use report_pdf::model::TableRow;
use report_pdf::report::{
    Cursor, MIN_ROW_HEIGHT, TABLE_KEY_WIDTH, TABLE_VALUE_WIDTH, TABLE_VALUE_X, render_table,
    row_advance,
};

fn row(key: &str, value: &str) -> TableRow {
    TableRow {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn short_rows_use_minimum_height() {
    let mut surface = RecordingSurface::new();
    let end = render_table(
        &mut surface,
        &[row("Status", "Done"), row("Owner", "Ada")],
        Cursor::at(200.0),
    );

    let status = surface.find_text("Status:").unwrap();
    let owner = surface.find_text("Owner:").unwrap();
    assert_eq!((status.x, status.y), (50.0, 200.0));
    assert_eq!(status.width, Some(TABLE_KEY_WIDTH));
    assert_eq!(owner.y, 200.0 + MIN_ROW_HEIGHT);

    let done = surface.find_text("Done").unwrap();
    assert_eq!((done.x, done.y), (TABLE_VALUE_X, 200.0));
    assert_eq!(done.width, Some(TABLE_VALUE_WIDTH));

    // two rows plus the gap after the table
    assert_eq!(end.y(), 260.0);
}

#[test]
fn wrapped_value_grows_row() {
    // 15 ten-letter words at 5pt per glyph: six per 350pt line, three lines
    let long = vec!["abcdefghij"; 15].join(" ");
    let mut surface = RecordingSurface::new();
    let end = render_table(
        &mut surface,
        &[row("Description", &long), row("Next", "x")],
        Cursor::at(200.0),
    );

    let next = surface.find_text("Next:").unwrap();
    assert_close(next.y, 200.0 + 36.0 + 5.0);
    assert_close(end.y(), 241.0 + 20.0 + 20.0);
}

#[test]
fn rows_past_content_limit_are_dropped() {
    let rows: Vec<TableRow> = (0..10).map(|i| row(&format!("k{i}"), "v")).collect();
    let mut surface = RecordingSurface::new();
    let end = render_table(&mut surface, &rows, Cursor::at(600.0));

    // the row that starts at y=700 is still drawn, the rest are not
    let keys: Vec<&str> = surface
        .texts()
        .filter(|t| t.text.starts_with('k'))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(keys, ["k0:", "k1:", "k2:", "k3:", "k4:", "k5:"]);
    assert_eq!(surface.find_text("k5:").unwrap().y, 700.0);
    assert_eq!(end.y(), 740.0);
}

#[test]
fn empty_table_only_adds_gap() {
    let mut surface = RecordingSurface::new();
    let end = render_table(&mut surface, &[], Cursor::at(300.0));
    assert!(surface.ops.is_empty());
    assert_eq!(end.y(), 320.0);
}

#[test]
fn row_advance_has_floor_and_padding() {
    assert_eq!(row_advance(0.0), 20.0);
    assert_eq!(row_advance(12.0), 20.0);
    assert_eq!(row_advance(36.0), 41.0);
}
