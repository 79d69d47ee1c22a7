//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use folio_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_mouse_capture();
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report wheel and click events (needed for section snapping)
pub fn enable_mouse_capture() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(format!("Failed to disable mouse capture: {}", e)))
}
