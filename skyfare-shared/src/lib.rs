pub mod pii;
pub mod models;

pub use pii::{mask_email, Masked};
pub use models::events::BookingConfirmedEvent;
