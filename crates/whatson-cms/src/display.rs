//! Derived display strings for the event details screen

use crate::{event::EventDetails, text};

const DATE_FORMAT: &str = "%d %B %Y";
const TIME_FORMAT: &str = "%H:%M";

impl EventDetails {
    /// Single date when the event starts and ends on the same calendar day,
    /// `"{start} - {end}"` otherwise.
    pub fn date_display(&self) -> String {
        let start = self.start_time.format(DATE_FORMAT);
        if self.start_time.date() == self.end_time.date() {
            start.to_string()
        } else {
            format!("{} - {}", start, self.end_time.format(DATE_FORMAT))
        }
    }

    /// Always shows both clock times, same-day or not.
    pub fn time_display(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format(TIME_FORMAT),
            self.end_time.format(TIME_FORMAT)
        )
    }

    pub fn price_display(&self) -> String {
        format!("{}{}", text::EVENT_DETAILS_PRICE, self.price_low)
    }

    /// The venue-details free text carries a fixed marker substring when the
    /// venue has gender-neutral toilets.
    pub fn has_gender_neutral_toilets(&self) -> bool {
        self.venue_details
            .contains(text::VENUE_DETAILS_GENDER_NEUTRAL_TOILETS)
    }

    pub fn accessibility_display(&self) -> String {
        self.accessibility_options.join(", ")
    }

    /// Whether the contact/ticketing block renders at all.
    pub fn has_contact_details(&self) -> bool {
        self.accessibility_details.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.ticketing_url.is_some()
    }
}
