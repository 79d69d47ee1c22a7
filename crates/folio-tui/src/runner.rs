//! Main TUI runner - entry point and event loop

use folio_app::{AppState, Message};
use folio_core::prelude::*;

use crate::document::PageDocument;
use crate::event::{self, ClickTargets};
use crate::process::{animate, process_message};
use crate::{render, terminal};

/// Run the TUI until the user quits.
///
/// Owns the state for its whole lifetime and shuts the controller down on
/// exit, whether the loop ended normally or with an error.
pub fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}; wheel and click navigation unavailable", e);
    }

    let mut document = PageDocument::mount(
        state.scroller.sections(),
        state.settings.scroll.animation_speed,
    );
    info!(
        "Mounted {} of {} sections",
        document.pages().len(),
        state.scroller.sections().len()
    );

    let result = term
        .size()
        .map_err(Error::from)
        .and_then(|size| {
            process_message(
                &mut state,
                &mut document,
                Message::Resize {
                    width: size.width,
                    height: size.height,
                },
            );
            run_loop(&mut term, &mut state, &mut document)
        });

    state.shutdown();
    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    document: &mut PageDocument,
) -> Result<()> {
    let mut targets = ClickTargets::new();

    while !state.should_quit() {
        // Fire due timers (wheel gesture, suspension windows)
        if state
            .next_deadline()
            .is_some_and(|deadline| deadline <= state.now())
        {
            process_message(state, document, Message::Tick);
        }

        animate(state, document);

        // Render
        terminal.draw(|frame| targets = render::view(frame, state, document))?;

        // Handle terminal events
        if let Some(message) = event::poll(state.settings.scroll.wheel_step, &targets)? {
            process_message(state, document, message);
        }
    }

    info!("Leaving at section {}", state.current_section());
    Ok(())
}
