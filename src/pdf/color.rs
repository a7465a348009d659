/// Resolve a colour token to RGB components in `0.0..=1.0`.
///
/// Accepts `#rgb`, `#rrggbb` and a handful of CSS names.
pub(super) fn parse_color(token: &str) -> Option<[f32; 3]> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let [r, g, b] = match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| channel(&format!("{c}{c}")));
                [it.next()??, it.next()??, it.next()??]
            }
            6 => [
                channel(hex.get(0..2)?)?,
                channel(hex.get(2..4)?)?,
                channel(hex.get(4..6)?)?,
            ],
            _ => return None,
        };
        return Some([r, g, b].map(|c| f32::from(c) / 255.0));
    }

    let rgb: [u8; 3] = match token.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "gray" | "grey" => [128, 128, 128],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "yellow" => [255, 255, 0],
        _ => return None,
    };
    Some(rgb.map(|c| f32::from(c) / 255.0))
}

/// Like [`parse_color`], falling back to black.
pub(super) fn rgb_or_black(token: &str) -> [f32; 3] {
    parse_color(token).unwrap_or_else(|| {
        log::warn!("Unrecognised colour {token:?}, using black");
        [0.0, 0.0, 0.0]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#ff0000"), Some([1.0, 0.0, 0.0]));
        assert_eq!(parse_color("#fff"), Some([1.0, 1.0, 1.0]));
        assert_eq!(parse_color("Black"), Some([0.0, 0.0, 0.0]));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(rgb_or_black("nope"), [0.0, 0.0, 0.0]);
    }
}
