use std::path::Path;

use crate::error::Error;
use crate::surface::{Align, BLACK, Paint, Point, Rect, Stroke, Surface, TextStyle};

use super::{MARGIN, Masthead};

pub const DEFAULT_TITLE: &str = "BrainWave Technologies";
pub const LOGO_TOP: f32 = 30.0;
pub const LOGO_WIDTH: f32 = 60.0;
pub const LOGO_HEIGHT: f32 = 40.0;
pub const TITLE_Y: f32 = 45.0;
pub const TITLE_SIZE: f32 = 16.0;
pub const RULE_Y: f32 = 90.0;
pub const PLACEHOLDER_CAPTION: &str = "LOGO";
const PLACEHOLDER_SIZE: f32 = 8.0;
const PLACEHOLDER_INSET: (f32, f32) = (15.0, 18.0);

/// Draw an image, or a boxed "LOGO" placeholder when it cannot be drawn.
fn draw_logo<S: Surface + ?Sized>(surface: &mut S, logo: Option<&Path>, slot: Rect) {
    let drawn = match logo {
        Some(path) => surface.draw_image(path, slot),
        None => Err(Error::Image("no logo configured".into())),
    };
    if let Err(e) = drawn {
        log::debug!("Logo placeholder at x={:.0}: {e}", slot.x);
        surface.draw_rect(slot, Paint::Stroke(Stroke::new(BLACK, 1.0)));
        surface.draw_text(
            PLACEHOLDER_CAPTION,
            Point::new(slot.x + PLACEHOLDER_INSET.0, slot.y + PLACEHOLDER_INSET.1),
            &TextStyle::sized(PLACEHOLDER_SIZE),
        );
    }
}

/// Two logo slots, the centred title between them and a rule underneath.
pub fn render_header<S: Surface + ?Sized>(surface: &mut S, masthead: &Masthead<'_>) {
    let page_width = surface.page_width();

    draw_logo(
        surface,
        masthead.logo,
        Rect::new(MARGIN, LOGO_TOP, LOGO_WIDTH, LOGO_HEIGHT),
    );

    surface.draw_text(
        masthead.title,
        Point::new(0.0, TITLE_Y),
        &TextStyle::sized(TITLE_SIZE)
            .with_width(page_width)
            .aligned(Align::Center),
    );

    draw_logo(
        surface,
        masthead.logo,
        Rect::new(
            page_width - MARGIN - LOGO_WIDTH,
            LOGO_TOP,
            LOGO_WIDTH,
            LOGO_HEIGHT,
        ),
    );

    surface.draw_line(
        Point::new(MARGIN, RULE_Y),
        Point::new(page_width - MARGIN, RULE_Y),
        Stroke::new(BLACK, 1.0),
    );
}
