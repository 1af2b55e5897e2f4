use skyfare_booking::{BookingRequest, PassengerDetails};
use skyfare_catalog::FlightOption;
use skyfare_shared::Masked;
use std::io::{self, Write};

/// The booking form as filled in at the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub flight_id: String,
    /// `E` or `B`
    pub class: String,
    pub passport: String,
}

impl BookingForm {
    pub fn into_request(self) -> BookingRequest {
        let passenger = PassengerDetails {
            name: self.name,
            age: self.age,
            gender: self.gender,
            phone: Masked::new(self.phone),
            email: Masked::new(self.email),
            passport: Masked::new(self.passport),
        };
        BookingRequest::new(passenger, self.flight_id, &self.class)
    }

    /// Asks for each field in turn. Required fields are asked again until
    /// they are non-blank. Returns `None` if input ends before the form is
    /// complete.
    pub fn prompt<I, W>(
        lines: &mut I,
        out: &mut W,
        preselected: Option<&str>,
        options: &[FlightOption],
    ) -> io::Result<Option<Self>>
    where
        I: Iterator<Item = io::Result<String>>,
        W: Write,
    {
        let mut form = BookingForm::default();

        macro_rules! required {
            ($label:expr) => {
                match ask_required(lines, out, $label)? {
                    Some(value) => value,
                    None => return Ok(None),
                }
            };
        }

        form.name = required!("Full name");
        form.age = required!("Age");
        form.gender = required!("Gender");
        form.phone = required!("Phone");
        form.email = required!("Email");

        writeln!(out, "Flights:")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, option.label)?;
        }
        form.flight_id = loop {
            match preselected {
                Some(id) => write!(out, "Flight (number or id) [{}]: ", id)?,
                None => write!(out, "Flight (number or id): ")?,
            }
            out.flush()?;

            let Some(answer) = next_answer(lines)? else {
                return Ok(None);
            };
            match (answer.is_empty(), preselected) {
                (true, Some(id)) => break id.to_string(),
                (true, None) => writeln!(out, "This field is required.")?,
                (false, _) => break resolve_flight(&answer, options),
            }
        };

        write!(out, "Class (E = Economy, B = Business) [E]: ")?;
        out.flush()?;
        let Some(class) = next_answer(lines)? else {
            return Ok(None);
        };
        form.class = if class.is_empty() { "E".to_string() } else { class };

        form.passport = required!("Passport number");
        Ok(Some(form))
    }
}

/// A picker number (1-based) selects that option; anything else is taken as
/// a flight id.
fn resolve_flight(answer: &str, options: &[FlightOption]) -> String {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(|option| option.id.clone())
        .unwrap_or_else(|| answer.to_string())
}

fn next_answer<I>(lines: &mut I) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines.next().transpose().map(|line| line.map(|l| l.trim().to_string()))
}

fn ask_required<I, W>(lines: &mut I, out: &mut W, label: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    loop {
        write!(out, "{}: ", label)?;
        out.flush()?;
        match next_answer(lines)? {
            None => return Ok(None),
            Some(answer) if answer.is_empty() => writeln!(out, "This field is required.")?,
            Some(answer) => return Ok(Some(answer)),
        }
    }
}
