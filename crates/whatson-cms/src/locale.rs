//! Locale-keyed field wrapper matching the CMS wire shape

use {
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// The one locale the app reads. The CMS delivers every textual field keyed
/// by locale; we never localize dynamically.
pub const DEFAULT_LOCALE: &str = "en-GB";

/// A CMS field value keyed by locale identifier, e.g.
/// `{"en-GB": "Pride Parade"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleField<T>(pub BTreeMap<String, T>);

impl<T> LocaleField<T> {
    /// Build a field with a single value under [`DEFAULT_LOCALE`].
    pub fn single(value: T) -> Self {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_LOCALE.to_string(), value);
        Self(map)
    }

    pub fn get(&self, locale: &str) -> Option<&T> {
        self.0.get(locale)
    }

    pub fn get_default_locale(&self) -> Option<&T> {
        self.get(DEFAULT_LOCALE)
    }
}
