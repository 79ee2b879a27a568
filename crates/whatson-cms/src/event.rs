use {
    crate::{
        error::{CmsError, Result},
        locale::LocaleField,
    },
    chrono::NaiveDateTime,
    serde::{Deserialize, Deserializer, Serialize},
};

/// Macro for conditional debug logging based on tracing feature
#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

// Helper to deserialize eventPriceLow, whose locale values arrive as either a
// JSON number or a string depending on how the entry was authored.
fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<LocaleField<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: std::collections::BTreeMap<String, serde_json::Value> =
        Deserialize::deserialize(deserializer)?;

    let mut map = std::collections::BTreeMap::new();
    for (locale, value) in raw {
        let price = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        map.insert(locale, price);
    }
    Ok(LocaleField(map))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub id: String,
}

/// One CMS event entry: system metadata plus locale-keyed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub sys: Sys,
    pub fields: EventFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    pub name: LocaleField<String>,
    pub event_categories: LocaleField<Vec<String>>,
    pub start_time: LocaleField<String>, // ISO 8601-ish date string
    pub end_time: LocaleField<String>,
    pub location_name: LocaleField<String>,
    pub location: LocaleField<Coordinates>,
    #[serde(deserialize_with = "deserialize_price")]
    pub event_price_low: LocaleField<String>,
    pub venue_details: LocaleField<String>,
    pub accessibility_options: LocaleField<Vec<String>>,
    pub event_description: LocaleField<String>, // markdown
    #[serde(default)]
    pub accessibility_details: Option<LocaleField<String>>,
    #[serde(default)]
    pub email: Option<LocaleField<String>>,
    #[serde(default)]
    pub phone: Option<LocaleField<String>>,
    #[serde(default)]
    pub ticketing_url: Option<LocaleField<String>>,
}

/// An event resolved for a single locale, with timestamps parsed. This is
/// what the details screen consumes; building one validates the record at the
/// boundary instead of letting a missing field surface mid-render.
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub id: String,
    pub name: String,
    pub categories: Vec<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub location_name: String,
    pub location: Coordinates,
    pub price_low: String,
    pub venue_details: String,
    pub accessibility_options: Vec<String>,
    pub description: String,
    pub accessibility_details: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub ticketing_url: Option<String>,
}

fn required<'a, T>(
    field: &'static str,
    locale: &str,
    value: &'a LocaleField<T>,
) -> Result<&'a T> {
    value.get(locale).ok_or_else(|| CmsError::MissingField {
        field,
        locale: locale.to_string(),
    })
}

fn optional(locale: &str, value: &Option<LocaleField<String>>) -> Option<String> {
    value.as_ref().and_then(|f| f.get(locale)).cloned()
}

/// Parse a CMS timestamp. Entries carry either full RFC 3339 strings or the
/// naive `YYYY-MM-DDTHH:MM[:SS]` form; offsets are dropped so times display
/// as the event's wall-clock time.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| CmsError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

impl Event {
    /// Load an event entry from its CMS JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every field for `locale`, validating presence of required
    /// fields and parsing timestamps.
    pub fn resolve(&self, locale: &str) -> Result<EventDetails> {
        let f = &self.fields;

        let name = required("name", locale, &f.name)?.clone();
        let start_raw = required("startTime", locale, &f.start_time)?;
        let end_raw = required("endTime", locale, &f.end_time)?;

        let details = EventDetails {
            id: self.sys.id.clone(),
            name,
            categories: required("eventCategories", locale, &f.event_categories)?.clone(),
            start_time: parse_timestamp("startTime", start_raw)?,
            end_time: parse_timestamp("endTime", end_raw)?,
            location_name: required("locationName", locale, &f.location_name)?.clone(),
            location: *required("location", locale, &f.location)?,
            price_low: required("eventPriceLow", locale, &f.event_price_low)?.clone(),
            venue_details: required("venueDetails", locale, &f.venue_details)?.clone(),
            accessibility_options: required(
                "accessibilityOptions",
                locale,
                &f.accessibility_options,
            )?
            .clone(),
            description: required("eventDescription", locale, &f.event_description)?.clone(),
            accessibility_details: optional(locale, &f.accessibility_details),
            email: optional(locale, &f.email),
            phone: optional(locale, &f.phone),
            ticketing_url: optional(locale, &f.ticketing_url),
        };

        log_debug!(
            "Resolved event '{}' ({} categories) for locale {}",
            details.name,
            details.categories.len(),
            locale
        );
        Ok(details)
    }
}
