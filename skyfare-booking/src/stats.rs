use crate::ledger::BookingLedger;
use serde::Serialize;
use skyfare_catalog::{Catalog, SeatClass};
use std::fmt::Write;

/// Booking statistics over the current session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total_flights: usize,
    pub total_capacity: u64,
    pub total_bookings: usize,
    /// One seat per booking.
    pub booked_seats: u64,
    pub economy_bookings: usize,
    pub business_bookings: usize,
    pub total_revenue: u64,
    /// Bookings as a percentage of advertised seats.
    pub occupancy_percent: f64,
}

impl LedgerSummary {
    pub fn compute(catalog: &Catalog, ledger: &BookingLedger) -> Self {
        let total_capacity = catalog.total_capacity();
        let total_bookings = ledger.len();
        let business_bookings = ledger
            .entries()
            .iter()
            .filter(|b| b.seat_class == SeatClass::Business)
            .count();

        let occupancy_percent = if total_capacity == 0 {
            0.0
        } else {
            total_bookings as f64 * 100.0 / total_capacity as f64
        };

        Self {
            total_flights: catalog.len(),
            total_capacity,
            total_bookings,
            booked_seats: total_bookings as u64,
            economy_bookings: total_bookings - business_bookings,
            business_bookings,
            total_revenue: ledger.total_revenue(),
            occupancy_percent,
        }
    }

    pub fn render(&self, currency_symbol: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Flights offered    : {}", self.total_flights);
        let _ = writeln!(out, "Seats offered      : {}", self.total_capacity);
        let _ = writeln!(out, "Booked seats       : {}", self.booked_seats);
        let _ = writeln!(out, "Bookings           : {}", self.total_bookings);
        let _ = writeln!(out, "  Economy          : {}", self.economy_bookings);
        let _ = writeln!(out, "  Business         : {}", self.business_bookings);
        let _ = writeln!(out, "Occupancy          : {:.1}%", self.occupancy_percent);
        let _ = writeln!(out, "Revenue            : {}{}", currency_symbol, self.total_revenue);
        out
    }
}
