use crate::catalog::Catalog;
use crate::flight::FlightRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Search criteria from the flight search bar. Every criterion is optional
/// and an absent one matches every flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    /// Case-insensitive substring of the origin city.
    pub origin: Option<String>,
    /// Case-insensitive substring of the destination city.
    pub destination: Option<String>,
    /// Exact departure date.
    pub date: Option<NaiveDate>,
}

impl FlightQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = non_empty(origin.into());
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = non_empty(destination.into());
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Builds a query from the raw text of the three search inputs. Empty
    /// inputs impose no constraint; a non-empty date must be `YYYY-MM-DD`.
    pub fn from_form(origin: &str, destination: &str, date: &str) -> Result<Self, chrono::ParseError> {
        let query = Self::new().origin(origin).destination(destination);
        if date.is_empty() {
            return Ok(query);
        }
        Ok(query.on(NaiveDate::parse_from_str(date, "%Y-%m-%d")?))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.origin.is_none() && self.destination.is_none() && self.date.is_none()
    }

    pub fn matches(&self, flight: &FlightRecord) -> bool {
        self.origin.as_deref().map_or(true, |o| contains_ignore_case(&flight.from, o))
            && self.destination.as_deref().map_or(true, |d| contains_ignore_case(&flight.to, d))
            && self.date.map_or(true, |date| flight.date == date)
    }
}

impl Catalog {
    /// Flights matching every provided criterion, in catalog order.
    pub fn search(&self, query: &FlightQuery) -> Vec<&FlightRecord> {
        let results: Vec<&FlightRecord> = self.flights().iter().filter(|f| query.matches(f)).collect();
        tracing::debug!(?query, matched = results.len(), "Flight search");
        results
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
