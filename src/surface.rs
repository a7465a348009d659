//! The drawing target the report layout engine writes to.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page and y growing downwards. Colours are opaque tokens (`"#3498db"`,
//! `"black"`) that only the surface implementation interprets.

use std::path::Path;

use crate::error::Result;

pub const BLACK: &str = "black";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a text block is set. `width` is the wrapping width; without one the
/// text wraps at the right page edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle<'a> {
    pub size: f32,
    pub color: &'a str,
    pub width: Option<f32>,
    pub align: Align,
}

impl TextStyle<'static> {
    pub fn sized(size: f32) -> Self {
        TextStyle {
            size,
            color: BLACK,
            width: None,
            align: Align::Left,
        }
    }
}

impl<'a> TextStyle<'a> {
    pub fn with_width(self, width: f32) -> Self {
        TextStyle {
            width: Some(width),
            ..self
        }
    }

    pub fn aligned(self, align: Align) -> Self {
        TextStyle { align, ..self }
    }

    pub fn colored<'b>(self, color: &'b str) -> TextStyle<'b> {
        TextStyle {
            size: self.size,
            color,
            width: self.width,
            align: self.align,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f32,
}

impl<'a> Stroke<'a> {
    pub fn new(color: &'a str, width: f32) -> Self {
        Stroke { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint<'a> {
    Stroke(Stroke<'a>),
    Fill(&'a str),
}

/// Primitive drawing operations plus page management.
///
/// A surface starts with one page. Pages are 1-based in [`Surface::select_page`]
/// and selecting a page appends to whatever was already drawn on it.
pub trait Surface {
    fn page_width(&self) -> f32;

    fn page_height(&self) -> f32;

    fn page_count(&self) -> usize;

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>);

    /// Height the text occupies once wrapped at `style.width`.
    fn measure_text_height(&self, text: &str, style: &TextStyle<'_>) -> f32;

    fn draw_rect(&mut self, rect: Rect, paint: Paint<'_>);

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke<'_>);

    fn fill_circle(&mut self, center: Point, radius: f32, color: &str);

    /// Draw an image file scaled into `rect`. Nothing is drawn on failure.
    fn draw_image(&mut self, source: &Path, rect: Rect) -> Result<()>;

    /// Append a page and make it current.
    fn new_page(&mut self);

    fn select_page(&mut self, page: usize) -> Result<()>;
}
