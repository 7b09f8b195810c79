//! Hex color parsing shared by the TUI widgets

use ratatui::style::Color;

/// Parse a `#RRGGBB` string; anything malformed falls back to white
pub fn parse_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::White;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FF8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#abc"), Color::White);
        assert_eq!(parse_color("#ééé"), Color::White);
    }
}
