use skyfare_booking::BookingError;
use skyfare_catalog::CatalogError;

/// Anything a desk command can fail with. Every variant is shown to the
/// user as-is and the session carries on.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("No booking with id {0}")]
    BookingNotFound(u32),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl DeskError {
    /// Whether the error came from the booking core rather than from how the
    /// command was typed.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DeskError::Booking(_) | DeskError::BookingNotFound(_))
    }
}
