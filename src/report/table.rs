use crate::model::TableRow;
use crate::surface::{Point, Surface, TextStyle};

use super::{BLOCK_GAP, BODY_SIZE, Cursor};

pub const TABLE_KEY_X: f32 = 50.0;
pub const TABLE_KEY_WIDTH: f32 = 150.0;
pub const TABLE_VALUE_X: f32 = 220.0;
pub const TABLE_VALUE_WIDTH: f32 = 350.0;
pub const MIN_ROW_HEIGHT: f32 = 20.0;
pub const ROW_PADDING: f32 = 5.0;
/// Rows stop once the cursor passes this y. Rows past it are not carried to
/// a new page.
pub const PAGE_CONTENT_LIMIT: f32 = 700.0;

/// Vertical advance of a row whose value measured `value_height`.
pub fn row_advance(value_height: f32) -> f32 {
    MIN_ROW_HEIGHT.max(value_height + ROW_PADDING)
}

/// Key/value rows; row height follows the wrapped value text.
pub fn render_table<S: Surface + ?Sized>(
    surface: &mut S,
    rows: &[TableRow],
    cursor: Cursor,
) -> Cursor {
    let key_style = TextStyle::sized(BODY_SIZE).with_width(TABLE_KEY_WIDTH);
    let value_style = TextStyle::sized(BODY_SIZE).with_width(TABLE_VALUE_WIDTH);

    let mut cursor = cursor;
    for (row_idx, row) in rows.iter().enumerate() {
        surface.draw_text(
            &format!("{}:", row.key),
            Point::new(TABLE_KEY_X, cursor.y()),
            &key_style,
        );

        let value_height = surface.measure_text_height(&row.value, &value_style);
        surface.draw_text(
            &row.value,
            Point::new(TABLE_VALUE_X, cursor.y()),
            &value_style,
        );

        cursor = cursor.advance(row_advance(value_height));

        if cursor.y() > PAGE_CONTENT_LIMIT {
            let dropped = rows.len() - row_idx - 1;
            if dropped > 0 {
                log::warn!(
                    "Table passed y={PAGE_CONTENT_LIMIT} after row {}; {dropped} row(s) not rendered",
                    row_idx + 1
                );
            }
            break;
        }
    }

    cursor.advance(BLOCK_GAP)
}
