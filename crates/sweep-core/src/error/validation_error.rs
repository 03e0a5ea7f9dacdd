//! Filter validation errors - user input problems reported back as chat text

use thiserror::Error;

use crate::value_objects::Locale;

/// Reasons a filter request cannot be executed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Start date is missing or could not be parsed")]
    MissingStart,

    #[error("End date is missing or could not be parsed")]
    MissingEnd,

    #[error("Start date {from} is after end date {to}")]
    InvertedRange { from: i64, to: i64 },
}

impl ValidationError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingStart => "MISSING_START",
            Self::MissingEnd => "MISSING_END",
            Self::InvertedRange { .. } => "INVERTED_RANGE",
        }
    }

    /// User-facing message in the given locale
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::MissingStart, Locale::Ja) => {
                "削除対象期間の開始日時を指定してください (例: 2020/01/01)"
            }
            (Self::MissingStart, Locale::En) => {
                "Please give a valid start date (e.g. 2020/01/01)."
            }
            (Self::MissingEnd, Locale::Ja) => {
                "削除対象期間の終了日時を指定してください (例: 2020/02/01)"
            }
            (Self::MissingEnd, Locale::En) => "Please give a valid end date (e.g. 2020/02/01).",
            (Self::InvertedRange { .. }, Locale::Ja) => {
                "開始日時が終了日時より後になっています"
            }
            (Self::InvertedRange { .. }, Locale::En) => {
                "The start date must not be after the end date."
            }
        }
    }
}
