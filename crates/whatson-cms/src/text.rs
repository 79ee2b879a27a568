//! Fixed UI strings and content markers for the event details screen

/// Marker substring searched for in `venueDetails`; its presence drives the
/// gender-neutral-toilets row.
pub const VENUE_DETAILS_GENDER_NEUTRAL_TOILETS: &str = "Gender neutral toilets";

pub const EVENT_DETAILS_PRICE: &str = "From £";
pub const EVENT_DETAILS_GENDER_NEUTRAL_TOILETS: &str = "Gender neutral toilets";
pub const EVENT_DETAILS_ACCESSIBILITY: &str = "Accessibility";
pub const EVENT_DETAILS_ACCESSIBILITY_DETAILS: &str = "Accessibility Details";
pub const EVENT_DETAILS_CONTACT: &str = "Contact Details";
pub const EVENT_DETAILS_BUY_BUTTON: &str = "Buy tickets";
