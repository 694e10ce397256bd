use ratatui::style::Color;

use crate::prefs::AccentColor;

pub const CARD_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TITLE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_MARKER: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const SWITCH_OFF: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const SAVED_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DIRTY_MARK: Color = Color::Rgb(0xf9, 0x73, 0x16);

/// Terminal color for a palette entry. Kept in lockstep with
/// `AccentColor::hex` so the swatch matches the submitted value.
pub fn accent_rgb(accent: AccentColor) -> Color {
    match accent {
        AccentColor::Orange => Color::Rgb(0xf9, 0x73, 0x16),
        AccentColor::Red => Color::Rgb(0xef, 0x44, 0x44),
        AccentColor::Green => Color::Rgb(0x22, 0xc5, 0x5e),
        AccentColor::Cyan => Color::Rgb(0x06, 0xb6, 0xd4),
        AccentColor::Violet => Color::Rgb(0xa8, 0x55, 0xf7),
        AccentColor::Pink => Color::Rgb(0xec, 0x48, 0x99),
    }
}
