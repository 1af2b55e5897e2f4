use serde::{Deserialize, Serialize};

/// Emitted once per confirmed booking. Carries no raw PII: the passenger
/// email is already masked when the event is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingConfirmedEvent {
    pub booking_id: u32,
    pub flight_id: String,
    pub seat_number: String,
    pub seat_class: String,
    pub price: u32,
    pub passenger_email: String,
    pub confirmed_at: i64,
}

impl BookingConfirmedEvent {
    pub const TOPIC: &'static str = "booking.confirmed";

    /// JSON payload as written to the log.
    pub fn payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"booking_id\":{}}}", self.booking_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_contains_booking_fields() {
        let event = BookingConfirmedEvent {
            booking_id: 9001,
            flight_id: "AI-101".to_string(),
            seat_number: "12C".to_string(),
            seat_class: "Economy".to_string(),
            price: 4500,
            passenger_email: "a***@example.com".to_string(),
            confirmed_at: chrono::Utc::now().timestamp(),
        };

        let payload: serde_json::Value = serde_json::from_str(&event.payload()).unwrap();
        assert_eq!(payload["booking_id"], 9001);
        assert_eq!(payload["flight_id"], "AI-101");
        assert_eq!(payload["passenger_email"], "a***@example.com");
    }
}
