use crate::flight::FlightRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Flights offered by the desk, in display order.
const BUILTIN_FLIGHTS: &str = r#"[
    { "id": "AI-101", "airline": "Air India", "from": "Delhi",     "to": "Mumbai",    "date": "2025-01-28", "dep": "06:00", "seats": 175, "price_economy": 4500, "price_business": 12000 },
    { "id": "6E-205", "airline": "IndiGo",    "from": "Delhi",     "to": "Bangalore", "date": "2025-01-28", "dep": "09:30", "seats": 198, "price_economy": 5200, "price_business": 14000 },
    { "id": "UK-833", "airline": "Vistara",   "from": "Mumbai",    "to": "Kolkata",   "date": "2025-01-29", "dep": "14:00", "seats": 160, "price_economy": 4800, "price_business": 13000 },
    { "id": "SG-422", "airline": "SpiceJet",  "from": "Chennai",   "to": "Delhi",     "date": "2025-01-29", "dep": "07:45", "seats": 180, "price_economy": 3800, "price_business": 10000 },
    { "id": "AI-305", "airline": "Air India", "from": "Kolkata",   "to": "Hyderabad", "date": "2025-01-30", "dep": "11:00", "seats": 150, "price_economy": 4200, "price_business": 11500 },
    { "id": "6E-117", "airline": "IndiGo",    "from": "Bangalore", "to": "Delhi",     "date": "2025-01-30", "dep": "16:30", "seats": 200, "price_economy": 5500, "price_business": 15000 }
]"#;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// One entry of the flight picker on the booking form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightOption {
    pub id: String,
    pub label: String,
}

/// Immutable, ordered set of flights fixed at startup.
///
/// Every flight id is unique and every fare is positive; both are checked
/// once in [`Catalog::new`] and never change afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    flights: Vec<FlightRecord>,
    currency_symbol: String,
}

impl Catalog {
    pub fn new(flights: Vec<FlightRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for flight in &flights {
            if !seen.insert(flight.id.as_str()) {
                return Err(CatalogError::DuplicateId(flight.id.clone()));
            }
            if flight.price_economy == 0 || flight.price_business == 0 {
                return Err(CatalogError::InvalidPrice(flight.id.clone()));
            }
        }

        Ok(Self {
            flights,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        })
    }

    /// The sample schedule the desk ships with.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_FLIGHTS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let flights: Vec<FlightRecord> = serde_json::from_str(json)?;
        Self::new(flights)
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FlightRecord> {
        self.flights.iter().find(|f| f.id == id)
    }

    /// Resolve a flight id, failing with [`CatalogError::NotFound`].
    pub fn find(&self, id: &str) -> Result<&FlightRecord, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Picker entries, one per flight in catalog order.
    pub fn options(&self) -> Vec<FlightOption> {
        self.flights
            .iter()
            .map(|f| FlightOption {
                id: f.id.clone(),
                label: format!(
                    "{} | {} | {}{}",
                    f.id,
                    f.route(),
                    self.currency_symbol,
                    f.price_economy
                ),
            })
            .collect()
    }

    /// Sum of advertised seats across all flights.
    pub fn total_capacity(&self) -> u64 {
        self.flights.iter().map(|f| u64::from(f.seats)).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight not found: {0}")]
    NotFound(String),

    #[error("Duplicate flight id: {0}")]
    DuplicateId(String),

    #[error("Flight {0} has a zero fare")]
    InvalidPrice(String),

    #[error("Malformed flight data: {0}")]
    Malformed(#[from] serde_json::Error),
}
