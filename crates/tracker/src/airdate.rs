use chrono::NaiveDate;
use serde;
use std::fmt;

pub const AIRDATE_FORMAT: &str = "%Y-%m-%d";
pub const NOT_AVAILABLE: &str = "n/a";

pub fn parse_airdate(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), AIRDATE_FORMAT)
}

/// Airdate of a stored episode. Anything that isn't a valid date decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Airdate {
    Known(NaiveDate),
    Unknown,
}

impl Airdate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Airdate::Known(date) => Some(*date),
            Airdate::Unknown => None,
        }
    }
}

impl From<NaiveDate> for Airdate {
    fn from(date: NaiveDate) -> Self {
        Airdate::Known(date)
    }
}

impl serde::Serialize for Airdate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Airdate::Known(date) => serializer.collect_str(&date.format(AIRDATE_FORMAT)),
            Airdate::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Airdate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
        let airdate = match value.as_deref().map(parse_airdate) {
            Some(Ok(date)) => Airdate::Known(date),
            _ => Airdate::Unknown,
        };
        Ok(airdate)
    }
}

/// Derived airdate of the next episode, persisted as `"n/a"` when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextAirdate {
    Date(NaiveDate),
    #[default]
    NotAvailable,
}

impl NextAirdate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            NextAirdate::Date(date) => Some(*date),
            NextAirdate::NotAvailable => None,
        }
    }
}

impl fmt::Display for NextAirdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextAirdate::Date(date) => write!(f, "{}", date.format(AIRDATE_FORMAT)),
            NextAirdate::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl serde::Serialize for NextAirdate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for NextAirdate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
        let next_airdate = match value.as_deref().map(parse_airdate) {
            Some(Ok(date)) => NextAirdate::Date(date),
            _ => NextAirdate::NotAvailable,
        };
        Ok(next_airdate)
    }
}
