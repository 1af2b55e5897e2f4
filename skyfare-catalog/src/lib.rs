pub mod flight;
pub mod catalog;
pub mod search;
pub mod table;

pub use flight::{FlightRecord, SeatClass};
pub use catalog::{Catalog, CatalogError, FlightOption};
pub use search::FlightQuery;
pub use table::{render_flight_details, render_flight_table};
