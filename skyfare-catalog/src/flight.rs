use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabin a passenger books into. Decides which fare of a flight applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
}

impl SeatClass {
    /// Interprets a class selector from a booking form.
    ///
    /// `B` and `Business` (any case) select Business; every other value,
    /// including an empty one, falls back to Economy.
    pub fn from_selector(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.eq_ignore_ascii_case("b") || selector.eq_ignore_ascii_case("business") {
            SeatClass::Business
        } else {
            SeatClass::Economy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled flight offered for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightRecord {
    /// Airline code plus flight number, e.g. `AI-101`.
    pub id: String,
    pub airline: String,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub dep: NaiveTime,
    /// Display-only capacity. Bookings never decrement it.
    pub seats: u32,
    pub price_economy: u32,
    pub price_business: u32,
}

impl FlightRecord {
    pub fn price(&self, class: SeatClass) -> u32 {
        match class {
            SeatClass::Business => self.price_business,
            SeatClass::Economy => self.price_economy,
        }
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }

    pub fn departure(&self) -> String {
        self.dep.format(hhmm::FORMAT).to_string()
    }

    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
