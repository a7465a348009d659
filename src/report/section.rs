use crate::model::{Section, SectionBody};
use crate::surface::{Point, Surface, TextStyle};

use super::{Cursor, MARGIN, render_chart, render_table};

pub const SECTION_TITLE_SIZE: f32 = 14.0;
pub const SECTION_TITLE_CLEARANCE: f32 = 25.0;

/// Section heading followed by its table or chart body.
pub fn render_section<S: Surface + ?Sized>(
    surface: &mut S,
    section: &Section,
    cursor: Cursor,
) -> Cursor {
    surface.draw_text(
        &section.title,
        Point::new(MARGIN, cursor.y()),
        &TextStyle::sized(SECTION_TITLE_SIZE),
    );
    let cursor = cursor.advance(SECTION_TITLE_CLEARANCE);

    match &section.body {
        SectionBody::Table(rows) => render_table(surface, rows, cursor),
        SectionBody::Chart(chart) => render_chart(surface, chart, cursor),
        SectionBody::Unsupported(kind) => {
            log::warn!("Skipping section {:?} of unknown kind {kind:?}", section.title);
            cursor
        }
    }
}
