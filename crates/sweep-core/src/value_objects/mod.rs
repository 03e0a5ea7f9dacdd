//! Value objects

mod locale;

pub use locale::{Locale, LocaleParseError};
