//! Rendering for the event details screen

mod markdown;
mod sections;
mod utils;

use {
    super::{keys, state::EventDetailsState},
    ratatui::{
        Frame,
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style, Stylize},
        text::Line,
        widgets::{
            Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        },
    },
    utils::truncate,
};

pub fn render(f: &mut Frame, state: &mut EventDetailsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Min(0),    // Event content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    // Header bar with the back affordance
    let header = Paragraph::new(vec![
        Line::styled("What's On", Style::default().fg(Color::Yellow).bold()),
        Line::styled("← Back (Esc)", Style::default().fg(Color::Gray)),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Left);
    f.render_widget(header, chunks[0]);

    render_event_content(f, state, chunks[1]);

    let footer = Paragraph::new(keys::help_text())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(footer, chunks[2]);
}

fn render_event_content(f: &mut Frame, state: &mut EventDetailsState, area: ratatui::layout::Rect) {
    let content_width = area.width.saturating_sub(2);
    let lines = sections::build_content_lines(&state.details, content_width);

    let visible_height = (area.height as usize).saturating_sub(2); // borders
    let total_lines = lines.len();
    state.clamp_scroll(total_lines, visible_height);
    let scroll = state.scroll;

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(scroll)
        .take(visible_height)
        .collect();

    // Event name in the panel title, truncated to fit
    let title_max_width = area.width.saturating_sub(12) as usize;
    let title = format!("Event: {}", truncate(&state.details.name, title_max_width));

    let paragraph = Paragraph::new(visible_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title),
    );
    f.render_widget(paragraph, area);

    if total_lines > visible_height {
        let mut scrollbar_state = ScrollbarState::new(total_lines)
            .position(scroll)
            .viewport_content_length(visible_height);
        f.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            area,
            &mut scrollbar_state,
        );
    }
}
