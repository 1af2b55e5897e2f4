use crate::ledger::BookingLedger;
use crate::models::{BookingRecord, BookingRequest, BookingStatus};
use crate::seating::{parse_seat_map, RandomSeatAssigner, SeatAssigner, DEFAULT_SEAT_LETTERS, DEFAULT_SEAT_ROWS};
use crate::stats::LedgerSummary;
use crate::BookingError;
use chrono::{Local, NaiveDate, Utc};
use serde::Deserialize;
use skyfare_catalog::{Catalog, FlightOption, FlightQuery, FlightRecord};
use skyfare_shared::{mask_email, BookingConfirmedEvent};
use tracing::{info, warn};

pub const DEFAULT_FIRST_BOOKING_ID: u32 = 9001;

/// Source of the booking date.
pub trait BookingClock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
pub struct SystemClock;

impl BookingClock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl BookingClock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Tunables for a booking session.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookingRules {
    #[serde(default = "default_first_booking_id")]
    pub first_booking_id: u32,
    #[serde(default = "default_seat_rows")]
    pub seat_rows: u16,
    #[serde(default = "default_seat_letters")]
    pub seat_letters: String,
}

fn default_first_booking_id() -> u32 { DEFAULT_FIRST_BOOKING_ID }
fn default_seat_rows() -> u16 { DEFAULT_SEAT_ROWS }
fn default_seat_letters() -> String { DEFAULT_SEAT_LETTERS.to_string() }

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            first_booking_id: default_first_booking_id(),
            seat_rows: default_seat_rows(),
            seat_letters: default_seat_letters(),
        }
    }
}

impl BookingRules {
    /// Rejects a seat map the seat assigner could not draw from.
    pub fn validate(&self) -> Result<(), BookingError> {
        parse_seat_map(self.seat_rows, &self.seat_letters).map(|_| ())
    }
}

/// Everything one desk session works with: the catalog, the picker entries
/// derived from it, the ledger and the booking id counter.
///
/// Created at startup and dropped at exit. All mutation goes through
/// `&mut self`, so bookings are applied one at a time.
pub struct BookingSession {
    catalog: Catalog,
    options: Vec<FlightOption>,
    ledger: BookingLedger,
    next_booking_id: u32,
    seats: Box<dyn SeatAssigner>,
    clock: Box<dyn BookingClock>,
}

impl BookingSession {
    /// Session with default rules, random seats and the system clock.
    pub fn new(catalog: Catalog) -> Self {
        Self::assemble(catalog, DEFAULT_FIRST_BOOKING_ID, Box::new(RandomSeatAssigner::default()))
    }

    pub fn with_rules(catalog: Catalog, rules: &BookingRules) -> Result<Self, BookingError> {
        let seats = RandomSeatAssigner::new(rules.seat_rows, &rules.seat_letters)?;
        Ok(Self::assemble(catalog, rules.first_booking_id, Box::new(seats)))
    }

    fn assemble(catalog: Catalog, first_booking_id: u32, seats: Box<dyn SeatAssigner>) -> Self {
        let options = catalog.options();
        info!(flights = catalog.len(), first_booking_id, "Booking session started");
        Self {
            catalog,
            options,
            ledger: BookingLedger::new(),
            next_booking_id: first_booking_id,
            seats,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_seat_assigner(mut self, seats: impl SeatAssigner + 'static) -> Self {
        self.seats = Box::new(seats);
        self
    }

    pub fn with_clock(mut self, clock: impl BookingClock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Flight picker entries, computed once when the session was created.
    pub fn options(&self) -> &[FlightOption] {
        &self.options
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// Id the next successful booking will receive.
    pub fn next_booking_id(&self) -> u32 {
        self.next_booking_id
    }

    pub fn search(&self, query: &FlightQuery) -> Vec<&FlightRecord> {
        self.catalog.search(query)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::compute(&self.catalog, &self.ledger)
    }

    /// Confirm a booking and append it to the ledger.
    ///
    /// On any error the ledger and the id counter are left untouched.
    pub fn create_booking(&mut self, request: BookingRequest) -> Result<BookingRecord, BookingError> {
        if let Err(e) = request.passenger.validate() {
            warn!(flight_id = %request.flight_id, "Booking rejected: {}", e);
            return Err(e);
        }

        let flight = match self.catalog.find(&request.flight_id) {
            Ok(flight) => flight.clone(),
            Err(e) => {
                warn!("Booking rejected: {}", e);
                return Err(BookingError::FlightNotFound(request.flight_id));
            }
        };

        let booking_id = self.next_booking_id;
        let next_booking_id = booking_id.checked_add(1).ok_or(BookingError::IdsExhausted)?;

        let seat_number = self.seats.assign(&flight, request.seat_class);
        let record = BookingRecord {
            booking_id,
            price: flight.price(request.seat_class),
            flight,
            seat_class: request.seat_class,
            seat_number,
            passenger: request.passenger,
            booking_date: self.clock.today(),
            status: BookingStatus::Confirmed,
        };

        self.next_booking_id = next_booking_id;
        let record = self.ledger.append(record).clone();

        let event = BookingConfirmedEvent {
            booking_id,
            flight_id: record.flight.id.clone(),
            seat_number: record.seat_number.to_string(),
            seat_class: record.seat_class.to_string(),
            price: record.price,
            passenger_email: mask_email(record.passenger.email.expose()),
            confirmed_at: Utc::now().timestamp(),
        };
        info!(topic = BookingConfirmedEvent::TOPIC, payload = %event.payload(), "Booking confirmed: {}", booking_id);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PassengerDetails;
    use crate::SeatClass;
    use skyfare_shared::Masked;

    fn passenger(name: &str) -> PassengerDetails {
        PassengerDetails {
            name: name.to_string(),
            age: "29".to_string(),
            gender: "M".to_string(),
            phone: Masked::new("9000000000".to_string()),
            email: Masked::new(format!("{}@example.com", name.to_lowercase())),
            passport: Masked::new("P7654321".to_string()),
        }
    }

    fn session() -> BookingSession {
        BookingSession::new(Catalog::builtin().unwrap())
            .with_seat_assigner(RandomSeatAssigner::seeded(30, "ABCDEF", 9).unwrap())
            .with_clock(FixedClock(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()))
    }

    #[test]
    fn test_business_booking_on_fresh_session() {
        let mut session = session();

        let record = session
            .create_booking(BookingRequest::new(passenger("Kiran"), "6E-205", "B"))
            .unwrap();

        assert_eq!(record.booking_id, 9001);
        assert_eq!(record.price, 14000);
        assert_eq!(record.seat_class, SeatClass::Business);
        assert_eq!(record.seat_class.to_string(), "Business");
        assert_eq!(record.flight.id, "6E-205");
        assert_eq!(record.booking_date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.next_booking_id(), 9002);
    }

    #[test]
    fn test_second_booking_gets_next_id() {
        let mut session = session();
        session.create_booking(BookingRequest::new(passenger("Kiran"), "6E-205", "B")).unwrap();

        let second = session
            .create_booking(BookingRequest::new(passenger("Leela"), "AI-305", "E"))
            .unwrap();

        assert_eq!(second.booking_id, 9002);
        assert_eq!(second.price, 4200);
        assert_eq!(second.seat_class, SeatClass::Economy);
    }

    #[test]
    fn test_unknown_flight_is_rejected() {
        let mut session = session();

        let result = session.create_booking(BookingRequest::new(passenger("Kiran"), "ZZ-999", "B"));

        assert_eq!(result, Err(BookingError::FlightNotFound("ZZ-999".to_string())));
        assert!(session.ledger().is_empty());
        assert_eq!(session.next_booking_id(), 9001);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut session = session();
        let mut p = passenger("Kiran");
        p.email = Masked::new(String::new());

        let result = session.create_booking(BookingRequest::new(p, "AI-101", "E"));

        assert_eq!(result, Err(BookingError::MissingField("email")));
        assert!(session.ledger().is_empty());
        assert_eq!(session.next_booking_id(), 9001);
    }

    #[test]
    fn test_rejection_does_not_consume_an_id() {
        let mut session = session();
        let _ = session.create_booking(BookingRequest::new(passenger("Kiran"), "ZZ-999", "E"));

        let record = session
            .create_booking(BookingRequest::new(passenger("Kiran"), "SG-422", "E"))
            .unwrap();
        assert_eq!(record.booking_id, 9001);
    }

    #[test]
    fn test_rules_set_seed_and_seat_map() {
        let rules = BookingRules {
            first_booking_id: 100,
            seat_rows: 1,
            seat_letters: "A".to_string(),
        };
        let mut session = BookingSession::with_rules(Catalog::builtin().unwrap(), &rules).unwrap();

        let record = session
            .create_booking(BookingRequest::new(passenger("Kiran"), "UK-833", "E"))
            .unwrap();
        assert_eq!(record.booking_id, 100);
        assert_eq!(record.seat_number.to_string(), "1A");
    }

    #[test]
    fn test_invalid_rules_are_rejected() {
        let rules = BookingRules { seat_rows: 0, ..BookingRules::default() };
        assert!(matches!(
            BookingSession::with_rules(Catalog::builtin().unwrap(), &rules),
            Err(BookingError::InvalidSeatMap(_))
        ));
    }

    #[test]
    fn test_id_counter_exhaustion() {
        let rules = BookingRules { first_booking_id: u32::MAX, ..BookingRules::default() };
        let mut session = BookingSession::with_rules(Catalog::builtin().unwrap(), &rules).unwrap();

        let result = session.create_booking(BookingRequest::new(passenger("Kiran"), "AI-101", "E"));
        assert_eq!(result, Err(BookingError::IdsExhausted));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_last_issued_id_is_one_below_max() {
        let rules = BookingRules { first_booking_id: u32::MAX - 1, ..BookingRules::default() };
        let mut session = BookingSession::with_rules(Catalog::builtin().unwrap(), &rules).unwrap();

        let record = session.create_booking(BookingRequest::new(passenger("Kiran"), "AI-101", "E")).unwrap();
        assert_eq!(record.booking_id, u32::MAX - 1);
        assert_eq!(session.next_booking_id(), u32::MAX);

        let result = session.create_booking(BookingRequest::new(passenger("Kiran"), "AI-101", "E"));
        assert_eq!(result, Err(BookingError::IdsExhausted));
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_rules_validate_seat_map() {
        assert!(BookingRules::default().validate().is_ok());

        let rules = BookingRules { seat_letters: "abc".to_string(), ..BookingRules::default() };
        assert!(matches!(rules.validate(), Err(BookingError::InvalidSeatMap(_))));

        let rules = BookingRules { seat_rows: 0, ..BookingRules::default() };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_options_cached_from_catalog() {
        let session = session();
        assert_eq!(session.options(), session.catalog().options().as_slice());
    }
}
