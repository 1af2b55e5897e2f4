use crate::seating::SeatNumber;
use crate::BookingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skyfare_catalog::{FlightRecord, SeatClass};
use skyfare_shared::Masked;
use std::fmt;

/// Booking status shown on the boarding pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => f.write_str("CONFIRMED"),
        }
    }
}

/// Passenger fields from the booking form. Free-form text; only presence
/// is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: Masked<String>,
    pub email: Masked<String>,
    pub passport: Masked<String>,
}

impl PassengerDetails {
    /// Fails with the first blank field, in form order.
    pub fn validate(&self) -> Result<(), BookingError> {
        let fields = [
            ("name", self.name.trim().is_empty()),
            ("age", self.age.trim().is_empty()),
            ("gender", self.gender.trim().is_empty()),
            ("phone", self.phone.is_blank()),
            ("email", self.email.is_blank()),
            ("passport", self.passport.is_blank()),
        ];

        match fields.iter().find(|(_, blank)| *blank) {
            Some((field, _)) => Err(BookingError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// A submitted booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub passenger: PassengerDetails,
    pub flight_id: String,
    pub seat_class: SeatClass,
}

impl BookingRequest {
    /// `class_selector` is the raw value of the class picker, see
    /// [`SeatClass::from_selector`].
    pub fn new(passenger: PassengerDetails, flight_id: impl Into<String>, class_selector: &str) -> Self {
        Self {
            passenger,
            flight_id: flight_id.into(),
            seat_class: SeatClass::from_selector(class_selector),
        }
    }
}

/// A confirmed booking. Never modified once it is in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: u32,
    #[serde(flatten)]
    pub passenger: PassengerDetails,
    pub flight: FlightRecord,
    pub seat_class: SeatClass,
    pub seat_number: SeatNumber,
    pub price: u32,
    pub booking_date: NaiveDate,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger() -> PassengerDetails {
        PassengerDetails {
            name: "Asha Rao".to_string(),
            age: "34".to_string(),
            gender: "F".to_string(),
            phone: Masked::new("9876543210".to_string()),
            email: Masked::new("asha@example.com".to_string()),
            passport: Masked::new("Z1234567".to_string()),
        }
    }

    #[test]
    fn test_complete_passenger_is_valid() {
        assert_eq!(passenger().validate(), Ok(()));
    }

    #[test]
    fn test_first_blank_field_is_reported() {
        let mut p = passenger();
        p.gender = "  ".to_string();
        p.passport = Masked::new(String::new());
        assert_eq!(p.validate(), Err(BookingError::MissingField("gender")));
    }

    #[test]
    fn test_debug_masks_contact_details() {
        let debug = format!("{:?}", passenger());
        assert!(debug.contains("Asha Rao"));
        assert!(!debug.contains("asha@example.com"));
        assert!(!debug.contains("Z1234567"));
    }

    #[test]
    fn test_request_class_selector() {
        let business = BookingRequest::new(passenger(), "6E-205", "B");
        assert_eq!(business.seat_class, SeatClass::Business);

        let economy = BookingRequest::new(passenger(), "6E-205", "E");
        assert_eq!(economy.seat_class, SeatClass::Economy);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "CONFIRMED");
        assert_eq!(serde_json::to_string(&BookingStatus::Confirmed).unwrap(), "\"CONFIRMED\"");
    }
}
