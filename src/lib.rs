mod error;
mod fonts;
pub mod model;
mod options;
mod pdf;
pub mod report;
mod sample;
pub mod surface;

pub use error::{Error, Result};
pub use model::Document;
pub use options::{FONT_ENV, LOGO_ENV, PageSize, RenderOptions};
pub use pdf::PdfSurface;
pub use sample::sample_document;

use std::path::Path;
use std::time::Instant;

/// Lay out `doc` and return the finished PDF bytes.
pub fn render_document(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = PdfSurface::new(options)?;
    report::compose(&mut surface, doc, &options.masthead())?;
    surface.finish()
}

/// Render a JSON payload. A payload without a `pages` array renders the
/// built-in sample document instead.
pub fn render_json(payload: &[u8], options: &RenderOptions) -> Result<Vec<u8>> {
    let doc = Document::from_json_slice(payload)?;
    render_document(&doc, options)
}

pub fn convert_json_to_pdf(input: &Path, output: &Path, options: &RenderOptions) -> Result<()> {
    let t0 = Instant::now();

    let payload = std::fs::read(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, input.display())),
        ),
        _ => Error::Io(e),
    })?;
    let doc = Document::from_json_slice(&payload)?;
    let t_parse = t0.elapsed();

    let bytes = render_document(&doc, options)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} pages)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
        doc.pages.len(),
    );

    Ok(())
}
