//! Pure line builders for the event details content.
//!
//! Everything here returns `Vec<Line>` so the conditional-section logic can
//! be tested without a terminal.

use {
    super::{markdown, utils::pad_to_width},
    ratatui::{
        style::{Color, Modifier, Style, Stylize},
        text::{Line, Span},
    },
    unicode_width::UnicodeWidthStr,
    whatson_cms::{event::Coordinates, text, EventDetails},
};

/// Build the full scrollable content for one resolved event.
pub fn build_content_lines(details: &EventDetails, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        details.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    lines.push(badges_line(&details.categories));
    lines.push(Line::default());

    lines.extend(icon_item(
        "🗓",
        details.date_display(),
        Some(details.time_display()),
    ));
    lines.extend(icon_item("📍", details.location_name.clone(), None));
    lines.extend(icon_item("💷", details.price_display(), None));
    if details.has_gender_neutral_toilets() {
        lines.extend(icon_item(
            "🚻",
            text::EVENT_DETAILS_GENDER_NEUTRAL_TOILETS.to_string(),
            None,
        ));
    }
    lines.extend(icon_item(
        "♿",
        text::EVENT_DETAILS_ACCESSIBILITY.to_string(),
        Some(details.accessibility_display()),
    ));

    lines.push(divider(width));
    lines.push(Line::default());
    lines.extend(markdown::markdown_lines(&details.description));
    lines.push(Line::default());
    lines.extend(map_lines(&details.location_name, details.location));

    if details.has_contact_details() {
        lines.push(Line::default());
        lines.push(divider(width));
        lines.push(Line::default());
        lines.extend(contact_lines(details));
    }

    lines
}

/// One badge per category, in record order.
fn badges_line(categories: &[String]) -> Line<'static> {
    let mut spans = Vec::new();
    for category in categories {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", category),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
    }
    Line::from(spans)
}

/// Icon row: glyph + bold title, optional dimmed subtitle, trailing spacing.
fn icon_item(icon: &str, title: String, subtitle: Option<String>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", icon)),
        Span::styled(title, Style::default().fg(Color::White).bold()),
    ])];
    if let Some(subtitle) = subtitle {
        lines.push(Line::styled(
            format!("   {}", subtitle),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::default());
    lines
}

fn heading(label: &str) -> Line<'static> {
    Line::styled(
        label.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn divider(width: u16) -> Line<'static> {
    Line::styled(
        "─".repeat(width as usize),
        Style::default().fg(Color::DarkGray),
    )
}

/// TUI stand-in for the map sub-view: a small box with the location marker
/// and coordinates.
fn map_lines(location_name: &str, location: Coordinates) -> Vec<Line<'static>> {
    let label = format!("📍 {}", location_name);
    let coords = format!("{:.4}, {:.4}", location.lat, location.lon);
    let inner_width = label.width().max(coords.width());

    let box_style = Style::default().fg(Color::DarkGray);
    let top = format!(
        "┌ Map {}┐",
        "─".repeat((inner_width + 2).saturating_sub(5))
    );
    let bottom = format!("└{}┘", "─".repeat(inner_width + 2));

    vec![
        Line::styled(top, box_style),
        Line::from(vec![
            Span::styled("│ ", box_style),
            Span::styled(
                pad_to_width(&label, inner_width),
                Style::default().fg(Color::White),
            ),
            Span::styled(" │", box_style),
        ]),
        Line::from(vec![
            Span::styled("│ ", box_style),
            Span::styled(
                pad_to_width(&coords, inner_width),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(" │", box_style),
        ]),
        Line::styled(bottom, box_style),
    ]
}

/// The contact/ticketing block. Callers gate on
/// [`EventDetails::has_contact_details`]; each sub-item is independently
/// conditional on its own field.
fn contact_lines(details: &EventDetails) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(accessibility_details) = &details.accessibility_details {
        lines.push(heading(text::EVENT_DETAILS_ACCESSIBILITY_DETAILS));
        lines.push(Line::from(accessibility_details.clone()));
        lines.push(Line::default());
    }

    if details.email.is_some() || details.phone.is_some() {
        lines.push(heading(text::EVENT_DETAILS_CONTACT));
        if let Some(email) = &details.email {
            lines.extend(icon_item("✉", email.clone(), None));
        }
        if let Some(phone) = &details.phone {
            lines.extend(icon_item("📞", phone.clone(), None));
        }
    }

    if let Some(url) = &details.ticketing_url {
        lines.push(Line::styled(
            format!("[ {} ]", text::EVENT_DETAILS_BUY_BUTTON),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            url.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::NaiveDate};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn content_text(details: &EventDetails) -> Vec<String> {
        build_content_lines(details, 60)
            .iter()
            .map(line_text)
            .collect()
    }

    fn sample_details() -> EventDetails {
        let day = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        EventDetails {
            id: "event-1".to_string(),
            name: "Pride Parade".to_string(),
            categories: vec![
                "Music".to_string(),
                "Community".to_string(),
                "Family".to_string(),
            ],
            start_time: day.and_hms_opt(18, 0, 0).unwrap(),
            end_time: day.and_hms_opt(21, 0, 0).unwrap(),
            location_name: "Trafalgar Square".to_string(),
            location: Coordinates {
                lat: 51.5074,
                lon: -0.1278,
            },
            price_low: "0".to_string(),
            venue_details: "Bar on site.".to_string(),
            accessibility_options: vec!["Wheelchair access".to_string()],
            description: "A day out.".to_string(),
            accessibility_details: None,
            email: None,
            phone: None,
            ticketing_url: None,
        }
    }

    #[test]
    fn badges_follow_category_order() {
        let details = sample_details();
        let badges = line_text(&badges_line(&details.categories));
        assert_eq!(badges, " Music   Community   Family ");
    }

    #[test]
    fn date_and_time_rows_present() {
        let text = content_text(&sample_details());
        assert!(text.iter().any(|l| l.contains("01 May 2023")));
        assert!(text.iter().any(|l| l.contains("18:00 - 21:00")));
    }

    #[test]
    fn toilets_row_only_with_marker() {
        let mut details = sample_details();
        let without: Vec<String> = content_text(&details);
        assert!(!without.iter().any(|l| l.contains("🚻")));

        details.venue_details = "Bar on site. Gender neutral toilets.".to_string();
        let with: Vec<String> = content_text(&details);
        assert!(with.iter().any(|l| l.contains("🚻")));
    }

    #[test]
    fn contact_block_absent_without_optional_fields() {
        let text = content_text(&sample_details());
        assert!(!text.iter().any(|l| l.contains(text::EVENT_DETAILS_CONTACT)));
        assert!(
            !text
                .iter()
                .any(|l| l.contains(text::EVENT_DETAILS_BUY_BUTTON))
        );
        assert!(
            !text
                .iter()
                .any(|l| l.contains(text::EVENT_DETAILS_ACCESSIBILITY_DETAILS))
        );
    }

    #[test]
    fn contact_sub_items_independently_conditional() {
        let mut details = sample_details();
        details.email = Some("info@example.com".to_string());

        let text = content_text(&details);
        assert!(text.iter().any(|l| l.contains(text::EVENT_DETAILS_CONTACT)));
        assert!(text.iter().any(|l| l.contains("info@example.com")));
        assert!(!text.iter().any(|l| l.contains("📞")));
        assert!(
            !text
                .iter()
                .any(|l| l.contains(text::EVENT_DETAILS_BUY_BUTTON))
        );

        details.phone = Some("020 7946 0000".to_string());
        details.ticketing_url = Some("https://tickets.example.com".to_string());
        let text = content_text(&details);
        assert!(text.iter().any(|l| l.contains("020 7946 0000")));
        assert!(
            text.iter()
                .any(|l| l.contains(text::EVENT_DETAILS_BUY_BUTTON))
        );
        assert!(
            text.iter()
                .any(|l| l.contains("https://tickets.example.com"))
        );
    }

    #[test]
    fn buy_button_absent_without_ticketing_url() {
        let mut details = sample_details();
        details.accessibility_details = Some("Ramp at the side entrance".to_string());

        let text = content_text(&details);
        // The block renders for accessibility details alone...
        assert!(
            text.iter()
                .any(|l| l.contains("Ramp at the side entrance"))
        );
        // ...but no buy button, and other sections are unaffected
        assert!(
            !text
                .iter()
                .any(|l| l.contains(text::EVENT_DETAILS_BUY_BUTTON))
        );
        assert!(text.iter().any(|l| l.contains("Trafalgar Square")));
    }

    #[test]
    fn map_box_shows_name_and_coordinates() {
        let text = content_text(&sample_details());
        assert!(text.iter().any(|l| l.contains("📍 Trafalgar Square")));
        assert!(text.iter().any(|l| l.contains("51.5074, -0.1278")));
    }
}
