//! Color name and hex string parsing.

use crate::draw::{Color, color::*};

/// Maps a color name or hex string to a [`Color`].
///
/// # Supported Names (case-insensitive)
/// red, green, blue, white, black, dodgerblue, royalblue, transparent
///
/// Hex strings may be `#rgb` or `#rrggbb`.
///
/// # Returns
/// `None` for unknown names or malformed hex strings.
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        return hex_to_color(hex);
    }

    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "dodgerblue" => Some(DODGER_BLUE),
        "royalblue" => Some(ROYAL_BLUE),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

fn hex_to_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            // #rgb expands each digit: #4bf == #44bbff
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                *slot = channel(&digit.to_string())? * 17;
            }
            Some(Color::from_rgb8(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(name_to_color("Red"), Some(RED));
        assert_eq!(name_to_color("ROYALBLUE"), Some(ROYAL_BLUE));
        assert_eq!(name_to_color("chartreuse"), None);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(
            name_to_color("#49b0f2"),
            Some(Color::from_rgb8(0x49, 0xb0, 0xf2))
        );
        assert_eq!(name_to_color("#fff"), Some(WHITE));
        assert_eq!(name_to_color("#12345"), None);
        assert_eq!(name_to_color("#zzzzzz"), None);
    }
}
