//! Event details screen: one scrollable view of a resolved CMS event record.
//!
//! Rendering is a pure function of [`EventDetailsState`]; the only outward
//! effect of the screen is invoking the caller-supplied back callback when
//! the user asks to leave.

mod keys;
mod render;
mod state;

pub use state::EventDetailsState;

use {
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    ratatui::{Terminal, backend::Backend},
    std::time::Duration,
};

/// Drive the event details screen until the user requests to go back.
/// `on_back` fires exactly once, right before the loop exits.
pub fn run_event_details<B: Backend>(
    terminal: &mut Terminal<B>,
    mut state: EventDetailsState,
    on_back: impl FnOnce(),
) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|f| render::render(f, &mut state))
            .map_err(|e| anyhow::anyhow!("Terminal draw error: {}", e))?;

        if event::poll(Duration::from_millis(100))
            .map_err(|e| anyhow::anyhow!("Event poll error: {}", e))?
            && let Event::Key(key) =
                event::read().map_err(|e| anyhow::anyhow!("Event read error: {}", e))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                    state.should_quit = true;
                },
                KeyCode::Up | KeyCode::Char('k') => state.scroll_up(1),
                KeyCode::Down | KeyCode::Char('j') => state.scroll_down(1),
                KeyCode::PageUp => state.scroll_up(state.page_size()),
                KeyCode::PageDown => state.scroll_down(state.page_size()),
                KeyCode::Home => state.scroll_to_top(),
                _ => {},
            }
        }

        if state.should_quit {
            on_back();
            break;
        }
    }

    Ok(())
}
