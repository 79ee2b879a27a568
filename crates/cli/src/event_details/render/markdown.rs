//! Minimal markdown mode for the description text: headings, bullet lists
//! and paragraphs. Anything fancier in the CMS copy falls through as plain
//! text.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
};

pub fn markdown_lines(text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let trimmed = raw.trim_end();
        if let Some(heading) = trimmed
            .strip_prefix("## ")
            .or_else(|| trimmed.strip_prefix("# "))
        {
            lines.push(Line::styled(
                heading.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            lines.push(Line::from(format!("  • {}", item)));
        } else if trimmed.is_empty() {
            lines.push(Line::default());
        } else {
            lines.push(Line::from(trimmed.to_string()));
        }
    }
    lines
}
