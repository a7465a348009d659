use crate::surface::{Align, Point, Surface, TextStyle};

/// Distance of the footer line from the bottom page edge.
pub const FOOTER_OFFSET: f32 = 30.0;
pub const FOOTER_SIZE: f32 = 10.0;

pub fn footer_text(current_page: usize, total_pages: usize) -> String {
    format!("Page {current_page} of {total_pages}")
}

/// Centred page number on the currently selected page.
pub fn render_footer<S: Surface + ?Sized>(
    surface: &mut S,
    current_page: usize,
    total_pages: usize,
) {
    let page_width = surface.page_width();
    let y = surface.page_height() - FOOTER_OFFSET;
    surface.draw_text(
        &footer_text(current_page, total_pages),
        Point::new(0.0, y),
        &TextStyle::sized(FOOTER_SIZE)
            .with_width(page_width)
            .aligned(Align::Center),
    );
}
