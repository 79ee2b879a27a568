//! Key bindings for the event details screen
//!
//! - **Esc / Backspace / q**: go back (invokes the back callback)
//! - **↑/↓ or k/j**: scroll one line
//! - **PgUp/PgDn**: scroll one page, **Home**: jump to the top

/// Short help string for the footer.
pub fn help_text() -> &'static str {
    "Esc/q: Back | ↑/↓: Scroll | PgUp/PgDn: Page | Home: Top"
}
