use crate::fonts::FontEntry;

pub(super) struct TextLine {
    pub(super) text: String,
    pub(super) width: f32,
}

/// Greedy word wrap. Explicit newlines always break; a word wider than
/// `max_width` gets a line of its own rather than being split.
pub(super) fn wrap_text(
    text: &str,
    font: &FontEntry,
    font_size: f32,
    max_width: f32,
) -> Vec<TextLine> {
    let space_w = font.space_width(font_size);
    let mut lines: Vec<TextLine> = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0.0f32;

        for word in paragraph.split_whitespace() {
            let ww = font.word_width(word, font_size);
            let proposed = if current.is_empty() {
                ww
            } else {
                current_w + space_w + ww
            };

            if !current.is_empty() && proposed > max_width {
                lines.push(TextLine {
                    text: std::mem::take(&mut current),
                    width: current_w,
                });
                current.push_str(word);
                current_w = ww;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_w = proposed;
            }
        }

        lines.push(TextLine {
            text: current,
            width: current_w,
        });
    }
    lines
}

/// Height of `text` set at `font_size` and wrapped at `max_width`.
pub(super) fn text_height(text: &str, font: &FontEntry, font_size: f32, max_width: f32) -> f32 {
    if text.trim().is_empty() {
        return 0.0;
    }
    let line_count = wrap_text(text, font, font_size, max_width).len();
    line_count as f32 * font_size * font.line_h_ratio
}
