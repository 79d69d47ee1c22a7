//! Colour palettes for the light and dark themes

use folio_core::ThemeMode;
use ratatui::style::Color;

/// Colours used by every widget, resolved once per frame from the theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_alt: Color,

    // --- Text ---
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

/// Pink on cream
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(253, 242, 248),
    surface: Color::Rgb(255, 255, 255),
    border: Color::Rgb(209, 213, 219),
    border_active: Color::Rgb(236, 72, 153),
    accent: Color::Rgb(236, 72, 153),
    accent_alt: Color::Rgb(147, 51, 234),
    text: Color::Rgb(17, 24, 39),
    text_secondary: Color::Rgb(55, 65, 81),
    text_muted: Color::Rgb(107, 114, 128),
};

/// Lavender on slate
pub const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    border: Color::Rgb(71, 85, 105),
    border_active: Color::Rgb(216, 180, 254),
    accent: Color::Rgb(216, 180, 254),
    accent_alt: Color::Rgb(253, 224, 71),
    text: Color::Rgb(241, 245, 249),
    text_secondary: Color::Rgb(203, 213, 225),
    text_muted: Color::Rgb(148, 163, 184),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), &LIGHT);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), &DARK);
    }

    #[test]
    fn test_palettes_differ_in_background_and_text() {
        assert_ne!(LIGHT.background, DARK.background);
        assert_ne!(LIGHT.text, DARK.text);
    }
}
