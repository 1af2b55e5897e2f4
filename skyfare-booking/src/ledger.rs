use crate::models::BookingRecord;

/// Append-only record of confirmed bookings, in creation order.
///
/// Only [`crate::BookingSession`] appends; nothing removes or edits an entry.
#[derive(Debug, Default)]
pub struct BookingLedger {
    entries: Vec<BookingRecord>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: BookingRecord) -> &BookingRecord {
        self.entries.push(record);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[BookingRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&BookingRecord> {
        self.entries.last()
    }

    /// Get a booking by its id
    pub fn get(&self, booking_id: u32) -> Option<&BookingRecord> {
        self.entries.iter().find(|b| b.booking_id == booking_id)
    }

    /// Bookings made with this contact email (case-insensitive), oldest first
    pub fn by_email(&self, email: &str) -> Vec<&BookingRecord> {
        let email = email.trim();
        self.entries
            .iter()
            .filter(|b| b.passenger.email.expose().trim().eq_ignore_ascii_case(email))
            .collect()
    }

    pub fn total_revenue(&self) -> u64 {
        self.entries.iter().map(|b| u64::from(b.price)).sum()
    }
}
