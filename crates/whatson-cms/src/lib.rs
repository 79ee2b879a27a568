pub mod display;
pub mod error;
pub mod event;
pub mod locale;
pub mod text;

pub use {
    error::{CmsError, Result},
    event::{Coordinates, Event, EventDetails, EventFields},
    locale::{DEFAULT_LOCALE, LocaleField},
};
