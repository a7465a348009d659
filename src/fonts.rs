use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use memmap2::Mmap;
use pdf_writer::{Name, Pdf, Rect, Ref, Str};
use subsetter::GlyphRemapper;
use ttf_parser::Face;

use crate::error::{Error, Result};

/// The single font a [`crate::PdfSurface`] sets all text in.
pub(crate) struct FontEntry {
    pub(crate) pdf_name: String,
    pub(crate) line_h_ratio: f32,
    pub(crate) ascender_ratio: f32,
    face: FaceKind,
}

enum FaceKind {
    Helvetica { widths_1000: Vec<f32> },
    TrueType(Box<TrueTypeFace>),
}

struct TrueTypeFace {
    data: Mmap,
    ps_name: String,
    /// char -> (original glyph id, advance in 1000-units)
    glyphs: HashMap<char, (u16, f32)>,
    remapper: GlyphRemapper,
    /// subset glyph id -> (char, advance) for every glyph shown so far
    used: BTreeMap<u16, (char, f32)>,
    bbox: Rect,
    ascent: f32,
    descent: f32,
    cap_height: f32,
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes, dropping chars
/// the encoding cannot express.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b != 0)
        .collect()
}

/// Approximate Helvetica widths at 1000 units/em for WinAnsi chars 32..=255.
fn helvetica_widths() -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32 => 278.0,                          // space
            33..=47 => 333.0,                     // punctuation
            48..=57 => 556.0,                     // digits
            58..=64 => 333.0,                     // more punctuation
            73 | 74 => 278.0,                     // I J (narrow uppercase)
            77 => 833.0,                          // M (wide)
            65..=90 => 667.0,                     // uppercase A-Z (average)
            91..=96 => 333.0,                     // brackets etc.
            102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
            109 | 119 => 833.0,                   // m w (wide)
            97..=122 => 556.0,                    // lowercase a-z (average)
            _ => 556.0,
        })
        .collect()
}

impl FontEntry {
    pub(crate) fn helvetica(pdf_name: String) -> Self {
        FontEntry {
            pdf_name,
            line_h_ratio: 1.2,
            ascender_ratio: 0.75,
            face: FaceKind::Helvetica {
                widths_1000: helvetica_widths(),
            },
        }
    }

    /// Load a TrueType/OpenType file for embedding as a subsetted CIDFont.
    pub(crate) fn load_truetype(path: &Path, pdf_name: String) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        // SAFETY: the mapping is read-only and the file is not expected to
        // change while a document is being rendered.
        let data = unsafe { Mmap::map(&file) }?;

        let face = Face::parse(&data, 0)
            .map_err(|e| Error::Font(format!("{}: {e}", path.display())))?;

        let units = f32::from(face.units_per_em());
        let to_1000 = |v: f32| v / units * 1000.0;

        let mut glyphs: HashMap<char, (u16, f32)> = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    if let Some(ch) = char::from_u32(cp)
                        && let Some(gid) = subtable.glyph_index(cp)
                    {
                        let advance = face
                            .glyph_hor_advance(gid)
                            .map(|adv| to_1000(f32::from(adv)))
                            .unwrap_or(0.0);
                        glyphs.entry(ch).or_insert((gid.0, advance));
                    }
                });
            }
        }
        if glyphs.is_empty() {
            return Err(Error::Font(format!(
                "{}: no Unicode cmap",
                path.display()
            )));
        }

        let bb = face.global_bounding_box();
        let bbox = Rect::new(
            to_1000(f32::from(bb.x_min)),
            to_1000(f32::from(bb.y_min)),
            to_1000(f32::from(bb.x_max)),
            to_1000(f32::from(bb.y_max)),
        );
        let ascent = to_1000(f32::from(face.ascender()));
        let descent = to_1000(f32::from(face.descender()));
        let cap_height = face
            .capital_height()
            .map(|h| to_1000(f32::from(h)))
            .unwrap_or(700.0);
        let line_gap = f32::from(face.line_gap());
        let line_h_ratio =
            (f32::from(face.ascender()) - f32::from(face.descender()) + line_gap) / units;
        let ascender_ratio = f32::from(face.ascender()) / units;

        let family = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Embedded");
        let mut ps_name: String = family
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if ps_name.is_empty() {
            ps_name.push_str("Embedded");
        }
        drop(face);

        log::debug!(
            "Loaded font {} ({} glyphs mapped)",
            path.display(),
            glyphs.len()
        );

        Ok(FontEntry {
            pdf_name,
            line_h_ratio,
            ascender_ratio,
            face: FaceKind::TrueType(Box::new(TrueTypeFace {
                data,
                ps_name,
                glyphs,
                remapper: GlyphRemapper::new(),
                used: BTreeMap::new(),
                bbox,
                ascent,
                descent,
                cap_height,
            })),
        })
    }

    /// Width of a single character in 1000-units.
    fn char_width_1000(&self, ch: char) -> f32 {
        match &self.face {
            FaceKind::Helvetica { widths_1000 } => {
                let byte = char_to_winansi(ch);
                if byte >= 32 {
                    widths_1000[(byte - 32) as usize]
                } else {
                    0.0
                }
            }
            FaceKind::TrueType(tt) => tt.glyphs.get(&ch).map_or(0.0, |&(_, w)| w),
        }
    }

    pub(crate) fn word_width(&self, word: &str, font_size: f32) -> f32 {
        word.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }

    pub(crate) fn space_width(&self, font_size: f32) -> f32 {
        self.char_width_1000(' ') * font_size / 1000.0
    }

    /// Bytes for a `Tj` operand. Embedded faces record every glyph they emit
    /// so the subset and width table cover it.
    pub(crate) fn encode(&mut self, text: &str) -> Vec<u8> {
        match &mut self.face {
            FaceKind::Helvetica { .. } => to_winansi_bytes(text),
            FaceKind::TrueType(tt) => {
                let mut out = Vec::with_capacity(text.len() * 2);
                for ch in text.chars() {
                    let (gid, width) = tt.glyphs.get(&ch).copied().unwrap_or((0, 0.0));
                    let new_gid = tt.remapper.remap(gid);
                    tt.used.entry(new_gid).or_insert((ch, width));
                    out.extend_from_slice(&new_gid.to_be_bytes());
                }
                out
            }
        }
    }

    /// Write the font dictionaries under `font_ref`.
    pub(crate) fn write(&self, pdf: &mut Pdf, font_ref: Ref, alloc: &mut impl FnMut() -> Ref) {
        match &self.face {
            FaceKind::Helvetica { .. } => {
                pdf.type1_font(font_ref)
                    .base_font(Name(b"Helvetica"))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            FaceKind::TrueType(tt) => embed_truetype(pdf, font_ref, tt, alloc),
        }
    }
}

/// Embed a TrueType/OpenType font as a CIDFont (Type0 composite) with Identity-H encoding.
/// The font data is subsetted to the glyphs the document showed.
fn embed_truetype(
    pdf: &mut Pdf,
    font_ref: Ref,
    tt: &TrueTypeFace,
    alloc: &mut impl FnMut() -> Ref,
) {
    let descriptor_ref = alloc();
    let data_ref = alloc();
    let cid_font_ref = alloc();
    let tounicode_ref = alloc();

    let subset_data = subsetter::subset(&tt.data, 0, &tt.remapper).unwrap_or_else(|e| {
        log::warn!("Font subsetting failed for {}: {e}, embedding full font", tt.ps_name);
        tt.data.to_vec()
    });
    let data_len = i32::try_from(subset_data.len()).unwrap_or(i32::MAX);
    pdf.stream(data_ref, &subset_data)
        .pair(Name(b"Length1"), data_len);

    pdf.font_descriptor(descriptor_ref)
        .name(Name(tt.ps_name.as_bytes()))
        .flags(pdf_writer::types::FontFlags::NON_SYMBOLIC)
        .bbox(tt.bbox)
        .italic_angle(0.0)
        .ascent(tt.ascent)
        .descent(tt.descent)
        .cap_height(tt.cap_height)
        .stem_v(80.0)
        .font_file2(data_ref);

    let system_info = || pdf_writer::types::SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    };
    {
        let mut cid = pdf.cid_font(cid_font_ref);
        cid.subtype(pdf_writer::types::CidFontType::Type2);
        cid.base_font(Name(tt.ps_name.as_bytes()));
        cid.system_info(system_info());
        cid.font_descriptor(descriptor_ref);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));
        if !tt.used.is_empty() {
            let mut w = cid.widths();
            for (&gid, &(_, width)) in &tt.used {
                w.consecutive(gid, [width]);
            }
        }
    }

    let cmap_name = format!("{}-UTF16", tt.ps_name);
    let mut cmap = pdf_writer::types::UnicodeCmap::new(Name(cmap_name.as_bytes()), system_info());
    for (&gid, &(ch, _)) in &tt.used {
        cmap.pair(gid, ch);
    }
    let cmap_data = cmap.finish();
    pdf.stream(tounicode_ref, cmap_data.as_slice());

    pdf.type0_font(font_ref)
        .base_font(Name(tt.ps_name.as_bytes()))
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_font_ref)
        .to_unicode(tounicode_ref);
}
