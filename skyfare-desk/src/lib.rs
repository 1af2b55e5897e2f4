pub mod app_config;
pub mod command;
pub mod error;
pub mod form;

use app_config::{Config, DisplayConfig};
use command::{Command, HELP};
use error::DeskError;
use form::BookingForm;
use skyfare_booking::{BoardingPass, BoardingPassView, BookingRecord, BookingSession};
use skyfare_catalog::{render_flight_details, render_flight_table, Catalog, FlightQuery};
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "skyfare> ";

/// What the desk wants the terminal loop to do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// Collect a booking form, then hand it to [`Desk::submit`].
    OpenForm { flight_id: Option<String> },
    Quit,
}

/// The booking desk: one session plus the boarding pass panel.
pub struct Desk {
    session: BookingSession,
    boarding: BoardingPassView,
    display: DisplayConfig,
}

impl Desk {
    pub fn new(config: &Config) -> Result<Self, DeskError> {
        let catalog = Catalog::builtin()?.with_currency_symbol(config.display.currency_symbol.clone());
        let session = BookingSession::with_rules(catalog, &config.booking)?;
        Ok(Self::with_session(session, config.display.clone()))
    }

    pub fn with_session(session: BookingSession, display: DisplayConfig) -> Self {
        Self {
            session,
            boarding: BoardingPassView::new(),
            display,
        }
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    pub fn boarding(&self) -> &BoardingPassView {
        &self.boarding
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, DeskError> {
        debug!(?command, "Executing command");
        let text = match command {
            Command::Flights => self.flight_table(&FlightQuery::new()),
            Command::Search(query) => self.flight_table(&query),
            Command::Flight(flight_id) => {
                let flight = self.session.catalog().find(&flight_id)?;
                render_flight_details(flight, self.session.catalog().currency_symbol())
            }
            Command::Options => {
                let mut out = String::new();
                for (i, option) in self.session.options().iter().enumerate() {
                    let _ = writeln!(out, "{:>2}. {}", i + 1, option.label);
                }
                out
            }
            Command::Book(flight_id) => {
                if let Some(id) = &flight_id {
                    self.session.catalog().find(id)?;
                }
                return Ok(Reply::OpenForm { flight_id });
            }
            Command::Pass => match self.boarding.current() {
                Some(pass) => render_pass(pass, &self.display),
                None => "No boarding pass is showing.\n".to_string(),
            },
            Command::Close => {
                if self.boarding.close() {
                    "Boarding pass closed.\n".to_string()
                } else {
                    "No boarding pass is showing.\n".to_string()
                }
            }
            Command::Bookings => self.booking_list(self.session.ledger().entries().iter()),
            Command::Mine(email) => self.booking_list(self.session.ledger().by_email(&email).into_iter()),
            Command::Show(booking_id) => {
                let record = self
                    .session
                    .ledger()
                    .get(booking_id)
                    .ok_or(DeskError::BookingNotFound(booking_id))?;
                let pass = BoardingPass::from_record(record);
                let pass = self.boarding.show(pass);
                render_pass(pass, &self.display)
            }
            Command::Stats => self.session.summary().render(&self.display.currency_symbol),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    /// Book from a completed form and show the resulting boarding pass.
    pub fn submit(&mut self, form: BookingForm) -> Result<String, DeskError> {
        let record = self.session.create_booking(form.into_request())?;
        let pass = self.boarding.show(BoardingPass::from_record(&record));
        debug!(qr = %pass.qr_payload(), "Boarding pass issued");
        Ok(render_pass(pass, &self.display))
    }

    /// Reads commands until `quit` or end of input. Command errors are
    /// printed and the loop carries on; only I/O errors end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> anyhow::Result<()> {
        let mut lines = input.lines();
        writeln!(output, "Welcome to the SkyFare booking desk. Type 'help' for commands.")?;

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let reply = Command::parse(&line).and_then(|command| self.execute(command));
            match reply {
                Ok(Reply::Text(text)) => write!(output, "{}", text)?,
                Ok(Reply::OpenForm { flight_id }) => {
                    let form =
                        BookingForm::prompt(&mut lines, output, flight_id.as_deref(), self.session.options())?;
                    let Some(form) = form else {
                        break;
                    };
                    match self.submit(form) {
                        Ok(pass) => write!(output, "{}", pass)?,
                        Err(e) => report(output, &e)?,
                    }
                }
                Ok(Reply::Quit) => break,
                Err(e) => report(output, &e)?,
            }
        }

        info!(bookings = self.session.ledger().len(), "Desk closed");
        writeln!(output, "Goodbye.")?;
        Ok(())
    }

    fn flight_table(&self, query: &FlightQuery) -> String {
        let rows = self.session.search(query);
        render_flight_table(&rows, self.session.catalog().currency_symbol())
    }

    fn booking_list<'a>(&self, records: impl Iterator<Item = &'a BookingRecord>) -> String {
        let mut out = String::new();
        for record in records {
            let _ = writeln!(
                out,
                "{} | {} | {} | {} | {} | {} {} | {}{} | {}",
                record.booking_id,
                record.passenger.name,
                record.flight.id,
                record.flight.route(),
                record.flight.iso_date(),
                record.seat_number,
                record.seat_class,
                self.display.currency_symbol,
                record.price,
                record.status
            );
        }
        if out.is_empty() {
            out.push_str("No bookings yet.\n");
        }
        out
    }
}

fn render_pass(pass: &BoardingPass, display: &DisplayConfig) -> String {
    pass.render(&display.currency_symbol, &display.date_format)
}

fn report<W: Write>(output: &mut W, error: &DeskError) -> std::io::Result<()> {
    if error.is_rejection() {
        warn!("Booking rejected: {}", error);
    } else {
        warn!("Command failed: {}", error);
    }
    writeln!(output, "Error: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skyfare_booking::{FixedClock, RandomSeatAssigner};

    fn desk() -> Desk {
        let session = BookingSession::new(Catalog::builtin().unwrap())
            .with_seat_assigner(RandomSeatAssigner::seeded(30, "ABCDEF", 11).unwrap())
            .with_clock(FixedClock(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()));
        Desk::with_session(session, DisplayConfig::default())
    }

    fn form(flight_id: &str, class: &str) -> BookingForm {
        BookingForm {
            name: "Kabir Shah".into(),
            age: "38".into(),
            gender: "M".into(),
            phone: "9988776655".into(),
            email: "kabir@example.com".into(),
            flight_id: flight_id.into(),
            class: class.into(),
            passport: "J4455667".into(),
        }
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_book_with_unknown_flight_is_refused_before_form() {
        let mut desk = desk();
        let err = desk.execute(Command::Book(Some("ZZ-999".into()))).unwrap_err();
        assert_eq!(err.to_string(), "Flight not found: ZZ-999");

        let reply = desk.execute(Command::Book(Some("UK-833".into()))).unwrap();
        assert_eq!(reply, Reply::OpenForm { flight_id: Some("UK-833".into()) });
    }

    #[test]
    fn test_submit_shows_boarding_pass() {
        let mut desk = desk();
        let pass = desk.submit(form("UK-833", "B")).unwrap();

        assert!(pass.contains("Booking ID   : 9001"));
        assert!(pass.contains("Amount       : ₹13000"));
        assert!(pass.contains("Booked On    : 20/01/2025"));
        assert!(desk.boarding().is_visible());

        assert_eq!(text(desk.execute(Command::Close).unwrap()), "Boarding pass closed.\n");
        assert!(!desk.boarding().is_visible());
        assert_eq!(text(desk.execute(Command::Pass).unwrap()), "No boarding pass is showing.\n");
    }

    #[test]
    fn test_rejected_submission_leaves_panel_alone() {
        let mut desk = desk();
        desk.submit(form("AI-101", "E")).unwrap();

        let err = desk.submit(form("ZZ-999", "E")).unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(desk.boarding().current().unwrap().booking_id, 9001);
        assert_eq!(desk.session().next_booking_id(), 9002);
    }

    #[test]
    fn test_booking_lists() {
        let mut desk = desk();
        assert_eq!(text(desk.execute(Command::Bookings).unwrap()), "No bookings yet.\n");

        desk.submit(form("AI-101", "E")).unwrap();
        desk.submit(form("6E-117", "Business")).unwrap();

        let list = text(desk.execute(Command::Bookings).unwrap());
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("9001 | Kabir Shah | AI-101 | Delhi → Mumbai | 2025-01-28"));
        assert!(lines[1].contains("Business | ₹15000 | CONFIRMED"));

        let mine = text(desk.execute(Command::Mine("KABIR@example.com".into())).unwrap());
        assert_eq!(mine.lines().count(), 2);

        let err = desk.execute(Command::Show(9100)).unwrap_err();
        assert!(matches!(err, DeskError::BookingNotFound(9100)));
        let pass = text(desk.execute(Command::Show(9001)).unwrap());
        assert!(pass.contains("Barcode      : SKY-9001-AI-101"));
    }

    #[test]
    fn test_flight_details() {
        let mut desk = desk();
        let details = text(desk.execute(Command::Flight("6E-117".into())).unwrap());
        assert!(details.contains("Economy fare   : ₹5500"));
        assert!(details.contains("Business fare  : ₹15000"));

        let err = desk.execute(Command::Flight("ZZ-999".into())).unwrap_err();
        assert!(matches!(err, DeskError::Catalog(skyfare_catalog::CatalogError::NotFound(ref id)) if id == "ZZ-999"));
    }

    #[test]
    fn test_flight_listing() {
        let mut desk = desk();
        let all = text(desk.execute(Command::Flights).unwrap());
        assert_eq!(all.lines().count(), 8);

        let none = text(desk.execute(Command::Search(FlightQuery::new().origin("Paris"))).unwrap());
        assert!(none.contains("No flights match your search."));

        let options = text(desk.execute(Command::Options).unwrap());
        assert!(options.starts_with(" 1. AI-101 | Delhi → Mumbai | ₹4500"));
    }
}
