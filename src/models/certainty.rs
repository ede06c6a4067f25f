//! Certainty value types
//!
//! The source data encodes certainty as floating point columns where a
//! missing value stands for "unknown". These types make the third state
//! explicit so no rule ever has to reason about NaN.

use std::fmt;

/// Tri-state boolean used for every certainty flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flag {
    /// Recorded as 1
    True,
    /// Recorded as 0
    False,
    /// Absent from the source data
    #[default]
    Unknown,
}

impl Flag {
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !self.is_unknown()
    }

    /// Parse a trimmed cell. `None` input means the cell was empty.
    ///
    /// Returns `None` when the text is not a recognised flag encoding.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let Some(raw) = raw else {
            return Some(Self::Unknown);
        };
        if raw.eq_ignore_ascii_case("true") {
            return Some(Self::True);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Some(Self::False);
        }
        match numeric_code(raw) {
            Some(1) => Some(Self::True),
            Some(0) => Some(Self::False),
            _ => None,
        }
    }

    /// Cell text written on output
    #[must_use]
    pub const fn as_cell(self) -> Option<&'static str> {
        match self {
            Self::True => Some("1"),
            Self::False => Some("0"),
            Self::Unknown => None,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for Flag {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cell().unwrap_or(""))
    }
}

/// Time period of a diagnosis
///
/// Only the historical code (2) carries meaning for the correction rules;
/// every other recorded code is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimePeriod {
    /// Absent from the source data
    #[default]
    Unknown,
    /// Code 2: the diagnosis belongs to the subject's past
    Historical,
    /// Any other recorded code
    Other(String),
}

impl TimePeriod {
    pub const HISTORICAL_CODE: i64 = 2;

    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unknown,
            Some(text) if numeric_code(text) == Some(Self::HISTORICAL_CODE) => Self::Historical,
            Some(text) => Self::Other(text.to_string()),
        }
    }

    #[must_use]
    pub const fn is_historical(&self) -> bool {
        matches!(self, Self::Historical)
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn as_cell(&self) -> Option<&str> {
        match self {
            Self::Unknown => None,
            Self::Historical => Some("2"),
            Self::Other(text) => Some(text),
        }
    }
}

impl From<i64> for TimePeriod {
    fn from(code: i64) -> Self {
        if code == Self::HISTORICAL_CODE {
            Self::Historical
        } else {
            Self::Other(code.to_string())
        }
    }
}

/// How a past diagnosis was substantiated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PastDocumentation {
    /// Absent from the source data
    #[default]
    Unknown,
    /// Code 1: documented in prior records
    Documented,
    /// Code 3: reported through a structured interview instrument
    StructuredInstrument,
    /// Any other recorded code
    Other(String),
}

impl PastDocumentation {
    pub const DOCUMENTED_CODE: i64 = 1;
    pub const STRUCTURED_INSTRUMENT_CODE: i64 = 3;

    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return Self::Unknown;
        };
        match numeric_code(text) {
            Some(Self::DOCUMENTED_CODE) => Self::Documented,
            Some(Self::STRUCTURED_INSTRUMENT_CODE) => Self::StructuredInstrument,
            _ => Self::Other(text.to_string()),
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn as_cell(&self) -> Option<&str> {
        match self {
            Self::Unknown => None,
            Self::Documented => Some("1"),
            Self::StructuredInstrument => Some("3"),
            Self::Other(text) => Some(text),
        }
    }
}

impl From<i64> for PastDocumentation {
    fn from(code: i64) -> Self {
        match code {
            Self::DOCUMENTED_CODE => Self::Documented,
            Self::STRUCTURED_INSTRUMENT_CODE => Self::StructuredInstrument,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Integral value of a numeric cell, accepting float renderings like `2.0`
#[must_use]
pub fn numeric_code(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation)]
        Some(value as i64)
    } else {
        None
    }
}
