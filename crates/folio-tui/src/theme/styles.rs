//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Base ---
pub fn base(palette: &Palette) -> Style {
    Style::default().fg(palette.text).bg(palette.background)
}

// --- Text styles ---
pub fn text_primary(palette: &Palette) -> Style {
    Style::default().fg(palette.text)
}

pub fn text_secondary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary)
}

pub fn text_muted(palette: &Palette) -> Style {
    Style::default().fg(palette.text_muted)
}

// --- Accent styles ---
pub fn accent(palette: &Palette) -> Style {
    Style::default().fg(palette.accent)
}

pub fn accent_bold(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn heading(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD)
}

/// Navbar link; the active one is underlined in the accent colour
pub fn link(palette: &Palette, active: bool) -> Style {
    if active {
        accent_bold(palette).add_modifier(Modifier::UNDERLINED)
    } else {
        text_secondary(palette)
    }
}

// --- Keybinding hint style ---
pub fn keybinding(palette: &Palette) -> Style {
    Style::default().fg(palette.accent_alt)
}

// --- Containers ---
pub fn glass_block(palette: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette.border_active
        } else {
            palette.border
        }))
        .style(Style::default().bg(palette.surface))
}
