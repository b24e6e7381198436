//! Palette and color blending
//!
//! Terminal cells have no alpha channel, so fades are drawn by blending the
//! foreground toward the background color.

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
pub const TEXT: Color = Color::Rgb(230, 230, 230);
pub const TEXT_MUTED: Color = Color::Rgb(119, 119, 119);
pub const TEXT_PLACEHOLDER: Color = Color::Rgb(136, 136, 136);
pub const COMPLETED_ROW: Color = Color::Rgb(200, 250, 204);
pub const COMPLETED_TEXT: Color = Color::Rgb(60, 90, 62);
pub const ACCENT: Color = Color::Rgb(0, 122, 255);
pub const CONFIRM: Color = Color::Rgb(0, 200, 83);
pub const CANCEL: Color = Color::Rgb(255, 82, 82);
pub const DELETE: Color = Color::Rgb(255, 23, 68);
pub const SELECTION: Color = Color::Rgb(48, 48, 64);

/// RGB components of a color; named colors map to approximate values
#[must_use]
pub fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 49, 49),
        Color::Green => (13, 188, 121),
        Color::Yellow => (229, 229, 16),
        Color::Blue => (36, 114, 200),
        Color::Magenta => (188, 63, 188),
        Color::Cyan => (17, 168, 205),
        Color::Gray => (204, 204, 204),
        Color::DarkGray => (102, 102, 102),
        Color::LightRed => (241, 76, 76),
        Color::LightGreen => (35, 209, 139),
        Color::LightYellow => (245, 245, 67),
        Color::LightBlue => (59, 142, 234),
        Color::LightMagenta => (214, 112, 214),
        Color::LightCyan => (41, 184, 219),
        Color::White => (255, 255, 255),
        _ => to_rgb(TEXT),
    }
}

/// Mix `from` toward `to`; `amount` 0.0 keeps `from`, 1.0 yields `to`
#[must_use]
pub fn blend(from: Color, to: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let (fr, fg, fb) = to_rgb(from);
    let (tr, tg, tb) = to_rgb(to);
    let mix = |a: u8, b: u8| -> u8 { (f64::from(a) + (f64::from(b) - f64::from(a)) * amount).round() as u8 };
    Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
}

/// `color` drawn at `opacity` over the app background
#[must_use]
pub fn fade(color: Color, opacity: f64) -> Color {
    blend(BACKGROUND, color, opacity)
}
