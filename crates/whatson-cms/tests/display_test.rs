use {
    chrono::NaiveDate,
    whatson_cms::event::{Coordinates, EventDetails},
};

fn details_at(start: (u32, u32), end: (u32, u32), end_day: u32) -> EventDetails {
    let date = |day| NaiveDate::from_ymd_opt(2023, 5, day).unwrap();
    EventDetails {
        id: "event-1".to_string(),
        name: "Pride Parade".to_string(),
        categories: vec!["Music".to_string()],
        start_time: date(1).and_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: date(end_day).and_hms_opt(end.0, end.1, 0).unwrap(),
        location_name: "Trafalgar Square".to_string(),
        location: Coordinates {
            lat: 51.5074,
            lon: -0.1278,
        },
        price_low: "0".to_string(),
        venue_details: "Step-free access.".to_string(),
        accessibility_options: vec![],
        description: String::new(),
        accessibility_details: None,
        email: None,
        phone: None,
        ticketing_url: None,
    }
}

#[test]
fn test_date_display_same_day() {
    let details = details_at((18, 0), (21, 0), 1);
    assert_eq!(details.date_display(), "01 May 2023");
}

#[test]
fn test_date_display_spans_days() {
    let details = details_at((18, 0), (21, 0), 3);
    assert_eq!(details.date_display(), "01 May 2023 - 03 May 2023");
}

#[test]
fn test_time_display_always_shows_both_times() {
    let same_day = details_at((18, 0), (21, 0), 1);
    assert_eq!(same_day.time_display(), "18:00 - 21:00");

    let cross_day = details_at((18, 0), (21, 0), 3);
    assert_eq!(cross_day.time_display(), "18:00 - 21:00");
}

#[test]
fn test_price_display_prefix() {
    let mut details = details_at((18, 0), (21, 0), 1);
    details.price_low = "12.50".to_string();
    assert_eq!(details.price_display(), "From £12.50");
}

#[test]
fn test_gender_neutral_toilets_marker() {
    let mut details = details_at((18, 0), (21, 0), 1);
    assert!(!details.has_gender_neutral_toilets());

    details.venue_details = "Bar on site. Gender neutral toilets on floor 2.".to_string();
    assert!(details.has_gender_neutral_toilets());
}

#[test]
fn test_accessibility_display_joins_options() {
    let mut details = details_at((18, 0), (21, 0), 1);
    assert_eq!(details.accessibility_display(), "");

    details.accessibility_options = vec![
        "Wheelchair access".to_string(),
        "BSL interpreter".to_string(),
    ];
    assert_eq!(
        details.accessibility_display(),
        "Wheelchair access, BSL interpreter"
    );
}

#[test]
fn test_has_contact_details_any_of_four() {
    let mut details = details_at((18, 0), (21, 0), 1);
    assert!(!details.has_contact_details());

    details.phone = Some("020 7946 0000".to_string());
    assert!(details.has_contact_details());

    details.phone = None;
    details.accessibility_details = Some("Ramp at the side entrance".to_string());
    assert!(details.has_contact_details());

    details.accessibility_details = None;
    details.ticketing_url = Some("https://tickets.example.com".to_string());
    assert!(details.has_contact_details());
}
