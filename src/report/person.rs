use crate::model::{Person, PersonField};
use crate::surface::{Point, Surface, TextStyle};

use super::{BLOCK_GAP, BODY_SIZE, Cursor};

/// x of the left and right field columns.
pub const PERSON_COLUMNS: [f32; 2] = [50.0, 300.0];
/// Fixed advance per row of two fields.
pub const PERSON_ROW_STEP: f32 = 35.0;
/// Space between the "Person Details" heading and the first row.
pub const PERSON_BLOCK_GAP: f32 = 25.0;
const HEADING: &str = "Person Details";
const HEADING_SIZE: f32 = 12.0;
const VALUE_OFFSET: f32 = 12.0;
const MISSING: &str = "N/A";

/// Labeled two-column grid of person fields. The first page shows the short
/// field set, later pages the full one.
pub fn render_person<S: Surface + ?Sized>(
    surface: &mut S,
    person: &Person,
    is_first_page: bool,
    cursor: Cursor,
) -> Cursor {
    surface.draw_text(
        HEADING,
        Point::new(PERSON_COLUMNS[0], cursor.y()),
        &TextStyle::sized(HEADING_SIZE),
    );
    let mut cursor = cursor.advance(PERSON_BLOCK_GAP);

    let style = TextStyle::sized(BODY_SIZE);
    for pair in PersonField::for_page(is_first_page).chunks(2) {
        for (&field, &x) in pair.iter().zip(PERSON_COLUMNS.iter()) {
            surface.draw_text(
                &format!("{}:", field.key()),
                Point::new(x, cursor.y()),
                &style,
            );
            surface.draw_text(
                person.get(field).unwrap_or(MISSING),
                Point::new(x, cursor.y() + VALUE_OFFSET),
                &style,
            );
        }
        cursor = cursor.advance(PERSON_ROW_STEP);
    }

    cursor.advance(BLOCK_GAP)
}
