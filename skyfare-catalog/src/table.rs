use crate::flight::FlightRecord;
use std::fmt::Write;

const RULE_WIDTH: usize = 84;

/// Renders flights as a fixed-width text table, one row per flight, in the
/// order given.
pub fn render_flight_table(flights: &[&FlightRecord], currency_symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<10} {:<10} {:<10} {:<10} {:<5} {:>5}  {}",
        "Flight", "Airline", "From", "To", "Date", "Dep", "Seats", "Economy"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    if flights.is_empty() {
        let _ = writeln!(out, "No flights match your search.");
        return out;
    }

    for f in flights {
        let _ = writeln!(
            out,
            "{:<8} {:<10} {:<10} {:<10} {:<10} {:<5} {:>5}  {}{}",
            f.id,
            f.airline,
            f.from,
            f.to,
            f.iso_date(),
            f.departure(),
            f.seats,
            currency_symbol,
            f.price_economy
        );
    }
    out
}

/// Every field of one flight, both fares included.
pub fn render_flight_details(flight: &FlightRecord, currency_symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Flight         : {}", flight.id);
    let _ = writeln!(out, "  Airline        : {}", flight.airline);
    let _ = writeln!(out, "  Route          : {}", flight.route());
    let _ = writeln!(out, "  Date           : {}", flight.iso_date());
    let _ = writeln!(out, "  Departure      : {}", flight.departure());
    let _ = writeln!(out, "  Seats          : {}", flight.seats);
    let _ = writeln!(out, "  Economy fare   : {}{}", currency_symbol, flight.price_economy);
    let _ = writeln!(out, "  Business fare  : {}{}", currency_symbol, flight.price_business);
    out
}
