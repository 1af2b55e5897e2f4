use crate::BookingError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use skyfare_catalog::{FlightRecord, SeatClass};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SEAT_ROWS: u16 = 30;
pub const DEFAULT_SEAT_LETTERS: &str = "ABCDEF";

/// A seat such as `17C`: a row number followed by a seat letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeatNumber {
    pub row: u16,
    pub letter: char,
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl From<SeatNumber> for String {
    fn from(seat: SeatNumber) -> Self {
        seat.to_string()
    }
}

impl FromStr for SeatNumber {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::InvalidSeatMap(format!("not a seat number: {:?}", s));

        let letter = s.chars().last().filter(|c| c.is_ascii_uppercase()).ok_or_else(invalid)?;
        let row: u16 = s[..s.len() - letter.len_utf8()].parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }
        Ok(Self { row, letter })
    }
}

impl TryFrom<String> for SeatNumber {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Picks a seat for a new booking.
///
/// Implementations decide whether to track occupancy; the booking flow only
/// asks for a seat and records whatever comes back.
pub trait SeatAssigner {
    fn assign(&mut self, flight: &FlightRecord, class: SeatClass) -> SeatNumber;
}

/// Draws a uniformly random row and letter for every booking.
///
/// No capacity or occupancy is tracked, so two bookings on the same flight
/// can receive the same seat.
pub struct RandomSeatAssigner<R = StdRng> {
    rows: u16,
    letters: Vec<char>,
    rng: R,
}

impl RandomSeatAssigner<StdRng> {
    pub fn new(rows: u16, letters: &str) -> Result<Self, BookingError> {
        Self::with_rng(rows, letters, StdRng::from_entropy())
    }

    /// Deterministic assigner for reproducible seat sequences.
    pub fn seeded(rows: u16, letters: &str, seed: u64) -> Result<Self, BookingError> {
        Self::with_rng(rows, letters, StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomSeatAssigner<StdRng> {
    /// Rows 1-30, letters A-F.
    fn default() -> Self {
        Self {
            rows: DEFAULT_SEAT_ROWS,
            letters: DEFAULT_SEAT_LETTERS.chars().collect(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSeatAssigner<R> {
    pub fn with_rng(rows: u16, letters: &str, rng: R) -> Result<Self, BookingError> {
        let letters = parse_seat_map(rows, letters)?;
        Ok(Self { rows, letters, rng })
    }
}

/// Checks a seat map and returns its letters: at least one row, at least one
/// letter, and every letter in A-Z.
pub fn parse_seat_map(rows: u16, letters: &str) -> Result<Vec<char>, BookingError> {
    if rows == 0 {
        return Err(BookingError::InvalidSeatMap("seat map needs at least one row".to_string()));
    }

    let letters: Vec<char> = letters.trim().chars().collect();
    if letters.is_empty() {
        return Err(BookingError::InvalidSeatMap("seat map needs at least one letter".to_string()));
    }
    if let Some(bad) = letters.iter().find(|c| !c.is_ascii_uppercase()) {
        return Err(BookingError::InvalidSeatMap(format!("seat letter {:?} is not A-Z", bad)));
    }
    Ok(letters)
}

impl<R: Rng> SeatAssigner for RandomSeatAssigner<R> {
    fn assign(&mut self, _flight: &FlightRecord, _class: SeatClass) -> SeatNumber {
        let row = self.rng.gen_range(1..=self.rows);
        let letter = self.letters[self.rng.gen_range(0..self.letters.len())];
        SeatNumber { row, letter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyfare_catalog::Catalog;

    #[test]
    fn test_seats_stay_within_map() {
        let catalog = Catalog::builtin().unwrap();
        let flight = catalog.find("AI-101").unwrap();
        let mut assigner = RandomSeatAssigner::seeded(30, "ABCDEF", 7).unwrap();

        for _ in 0..500 {
            let seat = assigner.assign(flight, SeatClass::Economy);
            assert!((1..=30).contains(&seat.row));
            assert!(('A'..='F').contains(&seat.letter));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let catalog = Catalog::builtin().unwrap();
        let flight = catalog.find("UK-833").unwrap();
        let mut a = RandomSeatAssigner::seeded(30, "ABCDEF", 42).unwrap();
        let mut b = RandomSeatAssigner::seeded(30, "ABCDEF", 42).unwrap();

        for _ in 0..20 {
            assert_eq!(a.assign(flight, SeatClass::Business), b.assign(flight, SeatClass::Business));
        }
    }

    #[test]
    fn test_single_seat_map() {
        let catalog = Catalog::builtin().unwrap();
        let flight = catalog.find("SG-422").unwrap();
        let mut assigner = RandomSeatAssigner::seeded(1, "A", 1).unwrap();

        assert_eq!(assigner.assign(flight, SeatClass::Economy).to_string(), "1A");
    }

    #[test]
    fn test_invalid_seat_maps() {
        assert!(RandomSeatAssigner::seeded(0, "ABC", 1).is_err());
        assert!(RandomSeatAssigner::seeded(30, "  ", 1).is_err());
        assert!(RandomSeatAssigner::seeded(30, "AB1", 1).is_err());
    }

    #[test]
    fn test_seat_number_parse_and_display() {
        let seat: SeatNumber = "17C".parse().unwrap();
        assert_eq!(seat, SeatNumber { row: 17, letter: 'C' });
        assert_eq!(seat.to_string(), "17C");
        assert_eq!(serde_json::to_string(&seat).unwrap(), "\"17C\"");

        assert!("C".parse::<SeatNumber>().is_err());
        assert!("0A".parse::<SeatNumber>().is_err());
        assert!("12c".parse::<SeatNumber>().is_err());
        assert!("".parse::<SeatNumber>().is_err());
    }
}
