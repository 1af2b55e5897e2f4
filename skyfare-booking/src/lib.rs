pub mod models;
pub mod seating;
pub mod ledger;
pub mod session;
pub mod boarding;
pub mod stats;

pub use models::{BookingRecord, BookingRequest, BookingStatus, PassengerDetails};
pub use seating::{parse_seat_map, RandomSeatAssigner, SeatAssigner, SeatNumber};
pub use ledger::BookingLedger;
pub use session::{BookingClock, BookingRules, BookingSession, FixedClock, SystemClock};
pub use boarding::{BoardingPass, BoardingPassView};
pub use stats::LedgerSummary;
pub use skyfare_catalog::SeatClass;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Required field is missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid seat map: {0}")]
    InvalidSeatMap(String),

    /// The counter has reached `u32::MAX`. That value is never issued, since
    /// the counter must advance past every id it hands out.
    #[error("Booking ids exhausted")]
    IdsExhausted,
}

pub type BookingResult<T> = Result<T, BookingError>;
