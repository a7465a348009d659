//! Layout of a [`Document`] onto a [`Surface`].
//!
//! Every renderer takes the current [`Cursor`] and returns the advanced one;
//! nothing about the write position is kept between calls.

pub mod axis;
mod chart;
mod footer;
mod header;
mod person;
mod section;
mod table;

use std::path::Path;

use crate::error::Result;
use crate::model::Document;
use crate::surface::Surface;

pub use chart::{
    AXIS_LABEL_SIZE, CHART_FOOTPRINT, CHART_HEIGHT, CHART_TITLE_CLEARANCE, CHART_WIDTH, CHART_X,
    INLINE_LABEL_SIZE, LEGEND_OFFSET, LEGEND_ROW_HEIGHT, LEGEND_SWATCH, X_LABEL_TARGET,
    Y_LABEL_X, Y_TICK_INTERVALS, render_chart,
};
pub use footer::{FOOTER_OFFSET, FOOTER_SIZE, footer_text, render_footer};
pub use header::{
    DEFAULT_TITLE, LOGO_HEIGHT, LOGO_TOP, LOGO_WIDTH, PLACEHOLDER_CAPTION, RULE_Y, TITLE_Y,
    render_header,
};
pub use person::{PERSON_BLOCK_GAP, PERSON_COLUMNS, PERSON_ROW_STEP, render_person};
pub use section::{SECTION_TITLE_CLEARANCE, SECTION_TITLE_SIZE, render_section};
pub use table::{
    MIN_ROW_HEIGHT, PAGE_CONTENT_LIMIT, ROW_PADDING, TABLE_KEY_WIDTH, TABLE_KEY_X,
    TABLE_VALUE_WIDTH, TABLE_VALUE_X, render_table, row_advance,
};

/// Left page margin; also the x of every left-aligned block.
pub const MARGIN: f32 = 50.0;
/// Cursor position where content starts below the masthead.
pub const HEADER_CLEARANCE: f32 = 120.0;
/// Space left after a table or the person block.
pub const BLOCK_GAP: f32 = 20.0;
pub const BODY_SIZE: f32 = 10.0;

/// Vertical write position on the current page, measured from the top edge.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Cursor(f32);

impl Cursor {
    pub fn at(y: f32) -> Self {
        Cursor(y)
    }

    /// First content line below the masthead.
    pub fn below_header() -> Self {
        Cursor(HEADER_CLEARANCE)
    }

    pub fn y(self) -> f32 {
        self.0
    }

    /// Move down by `dy`. The cursor never moves up within a page.
    #[must_use]
    pub fn advance(self, dy: f32) -> Self {
        debug_assert!(dy >= 0.0, "cursor advanced by negative amount {dy}");
        Cursor(self.0 + dy.max(0.0))
    }
}

/// Masthead content repeated at the top of every page.
#[derive(Clone, Copy, Debug)]
pub struct Masthead<'a> {
    pub title: &'a str,
    pub logo: Option<&'a Path>,
}

impl Default for Masthead<'static> {
    fn default() -> Self {
        Masthead {
            title: DEFAULT_TITLE,
            logo: None,
        }
    }
}

/// Lay out every page of `document`, then stamp "Page i of N" footers once
/// the page count is final. An empty page list leaves the surface's initial
/// page blank.
pub fn compose<S: Surface + ?Sized>(
    surface: &mut S,
    document: &Document,
    masthead: &Masthead<'_>,
) -> Result<()> {
    for (page_idx, page) in document.pages.iter().enumerate() {
        if page_idx > 0 {
            surface.new_page();
        }

        render_header(surface, masthead);

        let mut cursor = Cursor::below_header();
        cursor = render_person(surface, &document.person, page_idx == 0, cursor);
        for section in &page.sections {
            cursor = render_section(surface, section, cursor);
        }

        log::debug!(
            "Page {}: {} section(s), cursor ended at {:.1}",
            page_idx + 1,
            page.sections.len(),
            cursor.y()
        );
    }

    let total_pages = document.pages.len();
    for page_idx in 0..total_pages {
        surface.select_page(page_idx + 1)?;
        render_footer(surface, page_idx + 1, total_pages);
    }

    Ok(())
}
