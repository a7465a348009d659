mod color;
mod text;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pdf_writer::{Content, Filter, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::error::{Error, Result};
use crate::fonts::FontEntry;
use crate::options::RenderOptions;
use crate::surface::{Align, Paint, Point, Rect, Stroke, Surface, TextStyle};

use color::rgb_or_black;
use text::{text_height, wrap_text};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;
const PRODUCER: &str = concat!("report-pdf ", env!("CARGO_PKG_VERSION"));

struct ImageXObject {
    pdf_name: String,
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

/// Decode an image file into Flate-compressed RGB plus an optional alpha mask.
fn load_image(path: &Path, pdf_name: String) -> Result<ImageXObject> {
    let data = std::fs::read(path).map_err(|e| Error::Image(format!("{}: {e}", path.display())))?;
    let decoded = image::load_from_memory(&data)
        .map_err(|e| Error::Image(format!("{}: {e}", path.display())))?;

    let rgba: image::RgbaImage = decoded.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

    let rgb_data: Vec<u8> = rgba
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();
    let rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

    let alpha = has_alpha.then(|| {
        let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
        miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6)
    });

    Ok(ImageXObject {
        pdf_name,
        width,
        height,
        rgb,
        alpha,
    })
}

/// [`Surface`] that accumulates one content stream per page and writes a PDF
/// on [`PdfSurface::finish`].
pub struct PdfSurface {
    width: f32,
    height: f32,
    title: String,
    font: FontEntry,
    pages: Vec<Content>,
    current: usize,
    images: Vec<ImageXObject>,
    image_names: HashMap<PathBuf, usize>,
}

impl PdfSurface {
    pub fn new(options: &RenderOptions) -> Result<Self> {
        let font = match &options.font {
            Some(path) => FontEntry::load_truetype(path, "F1".to_string())?,
            None => FontEntry::helvetica("F1".to_string()),
        };
        let (width, height) = options.page_size.dimensions();
        Ok(PdfSurface {
            width,
            height,
            title: options.title.clone(),
            font,
            pages: vec![Content::new()],
            current: 0,
            images: Vec::new(),
            image_names: HashMap::new(),
        })
    }

    /// PDF y for a top-down y.
    fn flip(&self, y: f32) -> f32 {
        self.height - y
    }

    fn content(&mut self) -> &mut Content {
        &mut self.pages[self.current]
    }

    /// Index into `images`, decoding the file on first use.
    fn image_index(&mut self, source: &Path) -> Result<usize> {
        if let Some(&idx) = self.image_names.get(source) {
            return Ok(idx);
        }
        let pdf_name = format!("Im{}", self.images.len() + 1);
        let image = load_image(source, pdf_name)?;
        self.images.push(image);
        let idx = self.images.len() - 1;
        self.image_names.insert(source.to_path_buf(), idx);
        Ok(idx)
    }

    /// Assemble the document.
    pub fn finish(self) -> Result<Vec<u8>> {
        let t0 = std::time::Instant::now();
        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let font_ref = alloc();

        self.font.write(&mut pdf, font_ref, &mut alloc);

        let mut image_xobjects: Vec<(&str, Ref)> = Vec::with_capacity(self.images.len());
        for img in &self.images {
            let xobj_ref = alloc();
            let smask_ref = img.alpha.as_ref().map(|alpha| {
                let mask_ref = alloc();
                let mut mask = pdf.image_xobject(mask_ref, alpha);
                mask.filter(Filter::FlateDecode);
                mask.width(img.width as i32);
                mask.height(img.height as i32);
                mask.color_space().device_gray();
                mask.bits_per_component(8);
                mask_ref
            });

            let mut xobj = pdf.image_xobject(xobj_ref, &img.rgb);
            xobj.filter(Filter::FlateDecode);
            xobj.width(img.width as i32);
            xobj.height(img.height as i32);
            xobj.color_space().device_rgb();
            xobj.bits_per_component(8);
            if let Some(mask_ref) = smask_ref {
                xobj.s_mask(mask_ref);
            }
            image_xobjects.push((img.pdf_name.as_str(), xobj_ref));
        }

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (i, c) in self.pages.into_iter().enumerate() {
            let raw = c.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for i in 0..n {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(PdfRect::new(0.0, 0.0, self.width, self.height))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            resources
                .fonts()
                .pair(Name(self.font.pdf_name.as_bytes()), font_ref);
            if !image_xobjects.is_empty() {
                let mut xobjects = resources.x_objects();
                for &(name, xobj_ref) in &image_xobjects {
                    xobjects.pair(Name(name.as_bytes()), xobj_ref);
                }
            }
        }

        pdf.document_info(info_id)
            .title(TextStr(&self.title))
            .producer(TextStr(PRODUCER));

        log::debug!(
            "Assembled {n} page(s), {} image(s) in {:.1}ms",
            self.images.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );

        Ok(pdf.finish())
    }
}

impl Surface for PdfSurface {
    fn page_width(&self) -> f32 {
        self.width
    }

    fn page_height(&self) -> f32 {
        self.height
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle<'_>) {
        let box_width = style.width.unwrap_or((self.width - at.x).max(0.0));
        let lines = wrap_text(text, &self.font, style.size, box_width);
        let line_h = style.size * self.font.line_h_ratio;
        let first_baseline = at.y + style.size * self.font.ascender_ratio;
        let [r, g, b] = rgb_or_black(style.color);
        let page_h = self.height;
        let font = &mut self.font;

        let placed: Vec<(f32, f32, Vec<u8>)> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.text.is_empty())
            .map(|(i, line)| {
                let x = match style.align {
                    Align::Left => at.x,
                    Align::Center => at.x + (box_width - line.width) / 2.0,
                    Align::Right => at.x + box_width - line.width,
                };
                let y = page_h - (first_baseline + i as f32 * line_h);
                (x, y, font.encode(&line.text))
            })
            .collect();
        if placed.is_empty() {
            return;
        }

        let font_name = self.font.pdf_name.clone();
        let content = self.content();
        content.save_state();
        content.set_fill_rgb(r, g, b);
        for (x, y, bytes) in &placed {
            content.begin_text();
            content.set_font(Name(font_name.as_bytes()), style.size);
            content.next_line(*x, *y);
            content.show(Str(bytes));
            content.end_text();
        }
        content.restore_state();
    }

    fn measure_text_height(&self, text: &str, style: &TextStyle<'_>) -> f32 {
        let box_width = style.width.unwrap_or(self.width);
        text_height(text, &self.font, style.size, box_width)
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint<'_>) {
        let y = self.flip(rect.bottom());
        let content = self.content();
        content.save_state();
        match paint {
            Paint::Stroke(stroke) => {
                let [r, g, b] = rgb_or_black(stroke.color);
                content.set_stroke_rgb(r, g, b);
                content.set_line_width(stroke.width);
                content.rect(rect.x, y, rect.width, rect.height);
                content.stroke();
            }
            Paint::Fill(color) => {
                let [r, g, b] = rgb_or_black(color);
                content.set_fill_rgb(r, g, b);
                content.rect(rect.x, y, rect.width, rect.height);
                content.fill_nonzero();
            }
        }
        content.restore_state();
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke<'_>) {
        let (y1, y2) = (self.flip(from.y), self.flip(to.y));
        let [r, g, b] = rgb_or_black(stroke.color);
        let content = self.content();
        content.save_state();
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(stroke.width);
        content.move_to(from.x, y1);
        content.line_to(to.x, y2);
        content.stroke();
        content.restore_state();
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: &str) {
        let (cx, cy) = (center.x, self.flip(center.y));
        let k = radius * KAPPA;
        let [r, g, b] = rgb_or_black(color);
        let content = self.content();
        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.move_to(cx + radius, cy);
        content.cubic_to(cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius);
        content.cubic_to(cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy);
        content.cubic_to(cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius);
        content.cubic_to(cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy);
        content.close_path();
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_image(&mut self, source: &Path, rect: Rect) -> Result<()> {
        let idx = self.image_index(source)?;
        let name = self.images[idx].pdf_name.clone();
        let y = self.flip(rect.bottom());
        let content = self.content();
        content.save_state();
        content.transform([rect.width, 0.0, 0.0, rect.height, rect.x, y]);
        content.x_object(Name(name.as_bytes()));
        content.restore_state();
        Ok(())
    }

    fn new_page(&mut self) {
        self.pages.push(Content::new());
        self.current = self.pages.len() - 1;
    }

    fn select_page(&mut self, page: usize) -> Result<()> {
        let count = self.pages.len();
        if page == 0 || page > count {
            return Err(Error::PageOutOfRange { page, count });
        }
        self.current = page - 1;
        Ok(())
    }
}
