use crate::models::{BookingRecord, BookingStatus};
use chrono::NaiveDate;
use serde::Serialize;
use skyfare_catalog::SeatClass;
use std::fmt::Write;

const BORDER_WIDTH: usize = 50;

/// Printable summary of one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardingPass {
    pub booking_id: u32,
    pub passenger: String,
    pub flight_id: String,
    pub airline: String,
    pub route: String,
    pub date: NaiveDate,
    pub departure: String,
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub amount: u32,
    pub booked_on: NaiveDate,
    pub status: BookingStatus,
    pub barcode: String,
}

impl BoardingPass {
    pub fn from_record(record: &BookingRecord) -> Self {
        Self {
            booking_id: record.booking_id,
            passenger: record.passenger.name.clone(),
            flight_id: record.flight.id.clone(),
            airline: record.flight.airline.clone(),
            route: record.flight.route(),
            date: record.flight.date,
            departure: record.flight.departure(),
            seat_number: record.seat_number.to_string(),
            seat_class: record.seat_class,
            amount: record.price,
            booked_on: record.booking_date,
            status: record.status,
            // Format: SKY-{booking_id}-{flight_id}
            barcode: format!("SKY-{}-{}", record.booking_id, record.flight.id),
        }
    }

    /// Text rendering of the pass. `date_format` is a chrono strftime
    /// pattern applied to the booking date.
    pub fn render(&self, currency_symbol: &str, date_format: &str) -> String {
        let border = "*".repeat(BORDER_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{}", border);
        let _ = writeln!(out, "*{:^width$}*", "BOARDING PASS", width = BORDER_WIDTH - 2);
        let _ = writeln!(out, "{}", border);
        let _ = writeln!(out, "  Booking ID   : {}", self.booking_id);
        let _ = writeln!(out, "  Passenger    : {}", self.passenger);
        let _ = writeln!(out, "  Flight       : {} ({})", self.flight_id, self.airline);
        let _ = writeln!(out, "  Route        : {}", self.route);
        let _ = writeln!(out, "  Date         : {}", self.date.format("%Y-%m-%d"));
        let _ = writeln!(out, "  Departure    : {}", self.departure);
        let _ = writeln!(out, "  Seat         : {} ({})", self.seat_number, self.seat_class);
        let _ = writeln!(out, "  Amount       : {}{}", currency_symbol, self.amount);
        let _ = writeln!(out, "  Booked On    : {}", self.booked_on.format(date_format));
        let _ = writeln!(out, "  Status       : {}", self.status);
        let _ = writeln!(out, "  Barcode      : {}", self.barcode);
        let _ = writeln!(out, "{}", border);
        let _ = writeln!(out, "  ** Please arrive 2 hours before departure **");
        let _ = writeln!(out, "{}", border);
        out
    }

    /// QR code data for mobile boarding passes
    pub fn qr_payload(&self) -> String {
        serde_json::json!({
            "barcode": self.barcode,
            "booking_id": self.booking_id,
            "flight_id": self.flight_id,
            "seat": self.seat_number,
            "date": self.date,
        })
        .to_string()
    }
}

/// The boarding pass panel: hidden, or showing exactly one pass.
#[derive(Debug, Default)]
pub struct BoardingPassView {
    current: Option<BoardingPass>,
}

impl BoardingPassView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a pass, replacing whatever was shown before.
    pub fn show(&mut self, pass: BoardingPass) -> &BoardingPass {
        self.current.insert(pass)
    }

    /// Hide the panel. Returns whether a pass was showing.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&BoardingPass> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
