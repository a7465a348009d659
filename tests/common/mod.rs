#![allow(dead_code)]

use std::path::{Path, PathBuf};

use report_pdf::surface::{Align, Paint, Point, Rect, Stroke, Surface, TextStyle};
use report_pdf::{Error, Result};

/// Advance of every glyph, as a fraction of the font size.
pub const GLYPH_WIDTH: f32 = 0.5;
/// Line pitch, as a fraction of the font size.
pub const LINE_HEIGHT: f32 = 1.2;

pub const A4: (f32, f32) = (595.28, 841.89);

#[derive(Clone, Debug, PartialEq)]
pub struct TextOp {
    pub page: usize,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: String,
    pub width: Option<f32>,
    pub align: Align,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectOp {
    pub page: usize,
    pub rect: Rect,
    /// Fill colour, or `None` for a stroked outline.
    pub fill: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineOp {
    pub page: usize,
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleOp {
    pub page: usize,
    pub center: Point,
    pub radius: f32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageOp {
    pub page: usize,
    pub source: PathBuf,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Text(TextOp),
    Rect(RectOp),
    Line(LineOp),
    Circle(CircleOp),
    Image(ImageOp),
}

/// In-memory surface that records every drawing call. Text is measured with
/// a fixed glyph advance so wrapped heights are predictable.
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<Op>,
    /// Pages passed to `select_page`, in call order.
    pub selections: Vec<usize>,
    /// Make every `draw_image` call fail.
    pub fail_images: bool,
    pages: usize,
    current: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_size(A4.0, A4.1)
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        RecordingSurface {
            width,
            height,
            ops: Vec::new(),
            selections: Vec::new(),
            fail_images: false,
            pages: 1,
            current: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn texts_on(&self, page: usize) -> Vec<&TextOp> {
        self.texts().filter(|t| t.page == page).collect()
    }

    /// First text op with exactly this content.
    pub fn find_text(&self, text: &str) -> Option<&TextOp> {
        self.texts().find(|t| t.text == text)
    }

    pub fn count_text(&self, text: &str) -> usize {
        self.texts().filter(|t| t.text == text).count()
    }

    pub fn rects(&self) -> Vec<&RectOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<&LineOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<&CircleOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&ImageOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Image(i) => Some(i),
                _ => None,
            })
            .collect()
    }

    fn line_count(&self, text: &str, size: f32, max_width: f32) -> usize {
        let glyph = size * GLYPH_WIDTH;
        let mut count = 0;
        for paragraph in text.split('\n') {
            let mut current_w: Option<f32> = None;
            let mut lines = 1;
            for word in paragraph.split_whitespace() {
                let ww = word.chars().count() as f32 * glyph;
                current_w = Some(match current_w {
                    Some(w) if w + glyph + ww > max_width => {
                        lines += 1;
                        ww
                    }
                    Some(w) => w + glyph + ww,
                    None => ww,
                });
            }
            count += lines;
        }
        count
    }
}

impl Surface for RecordingSurface {
    fn page_width(&self) -> f32 {
        self.width
    }

    fn page_height(&self) -> f32 {
        self.height
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) {
        self.ops.push(Op::Text(TextOp {
            page: self.current,
            text: text.to_string(),
            x: at.x,
            y: at.y,
            size: style.size,
            color: style.color.to_string(),
            width: style.width,
            align: style.align,
        }));
    }

    fn measure_text_height(&self, text: &str, style: &TextStyle<'_>) -> f32 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let max_width = style.width.unwrap_or(self.width);
        self.line_count(text, style.size, max_width) as f32 * style.size * LINE_HEIGHT
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint<'_>) {
        let fill = match paint {
            Paint::Fill(color) => Some(color.to_string()),
            Paint::Stroke(_) => None,
        };
        self.ops.push(Op::Rect(RectOp {
            page: self.current,
            rect,
            fill,
        }));
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke<'_>) {
        self.ops.push(Op::Line(LineOp {
            page: self.current,
            from,
            to,
            color: stroke.color.to_string(),
            width: stroke.width,
        }));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: &str) {
        self.ops.push(Op::Circle(CircleOp {
            page: self.current,
            center,
            radius,
            color: color.to_string(),
        }));
    }

    fn draw_image(&mut self, source: &Path, rect: Rect) -> Result<()> {
        if self.fail_images {
            return Err(Error::Image(format!("{}: refused", source.display())));
        }
        self.ops.push(Op::Image(ImageOp {
            page: self.current,
            source: source.to_path_buf(),
            rect,
        }));
        Ok(())
    }

    fn new_page(&mut self) {
        self.pages += 1;
        self.current = self.pages;
    }

    fn select_page(&mut self, page: usize) -> Result<()> {
        if page == 0 || page > self.pages {
            return Err(Error::PageOutOfRange {
                page,
                count: self.pages,
            });
        }
        self.selections.push(page);
        self.current = page;
        Ok(())
    }
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
