use crate::error::DeskError;
use skyfare_catalog::FlightQuery;

/// One line typed at the desk prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full flight table
    Flights,
    Search(FlightQuery),
    /// Every field of one flight
    Flight(String),
    /// Flight picker entries
    Options,
    /// Open the booking form, optionally with a flight preselected
    Book(Option<String>),
    Pass,
    Close,
    Bookings,
    Mine(String),
    Show(u32),
    Stats,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  flights                               list every flight
  search [from=..] [to=..] [date=..]    filter flights (date is YYYY-MM-DD)
  flight <flight-id>                    show one flight with both fares
  options                               list the flights you can book
  book [flight-id]                      fill in the booking form
  pass                                  show the current boarding pass
  close                                 hide the boarding pass
  bookings                              list every booking
  mine <email>                          list bookings made with an email
  show <booking-id>                     show the boarding pass of a booking
  stats                                 booking statistics
  help                                  this text
  quit                                  leave the desk
";

impl Command {
    pub fn parse(line: &str) -> Result<Self, DeskError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(DeskError::UnknownCommand(String::new()));
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "flights" => no_args(name, Command::Flights, &args)?,
            "search" => Command::Search(parse_search(&args)?),
            "flight" => match args.as_slice() {
                [flight_id] => Command::Flight(flight_id.to_string()),
                _ => return Err(DeskError::InvalidArgument("usage: flight <flight-id>".into())),
            },
            "options" => no_args(name, Command::Options, &args)?,
            "book" => match args.as_slice() {
                [] => Command::Book(None),
                [flight_id] => Command::Book(Some(flight_id.to_string())),
                _ => return Err(DeskError::InvalidArgument("usage: book [flight-id]".into())),
            },
            "pass" => no_args(name, Command::Pass, &args)?,
            "close" => no_args(name, Command::Close, &args)?,
            "bookings" => no_args(name, Command::Bookings, &args)?,
            "mine" => match args.as_slice() {
                [email] => Command::Mine(email.to_string()),
                _ => return Err(DeskError::InvalidArgument("usage: mine <email>".into())),
            },
            "show" => match args.as_slice() {
                [id] => Command::Show(
                    id.parse()
                        .map_err(|_| DeskError::InvalidArgument(format!("'{}' is not a booking id", id)))?,
                ),
                _ => return Err(DeskError::InvalidArgument("usage: show <booking-id>".into())),
            },
            "stats" => no_args(name, Command::Stats, &args)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(DeskError::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}

fn no_args(name: &str, command: Command, args: &[&str]) -> Result<Command, DeskError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(DeskError::InvalidArgument(format!("'{}' takes no arguments", name)))
    }
}

/// `key=value` pairs. A word without `=` continues the previous value, so
/// `from=new delhi` searches for "new delhi".
fn parse_search(args: &[&str]) -> Result<FlightQuery, DeskError> {
    const FROM: usize = 0;
    const TO: usize = 1;
    const DATE: usize = 2;

    let mut fields = [String::new(), String::new(), String::new()];
    let mut current: Option<usize> = None;

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                let index = match key.to_ascii_lowercase().as_str() {
                    "from" | "origin" => FROM,
                    "to" | "destination" => TO,
                    "date" => DATE,
                    other => {
                        return Err(DeskError::InvalidArgument(format!("unknown search field '{}'", other)))
                    }
                };
                fields[index] = value.to_string();
                current = Some(index);
            }
            None => match current {
                Some(index) => {
                    if !fields[index].is_empty() {
                        fields[index].push(' ');
                    }
                    fields[index].push_str(arg);
                }
                None => {
                    return Err(DeskError::InvalidArgument(format!(
                        "expected from=, to= or date=, got '{}'",
                        arg
                    )))
                }
            },
        }
    }

    let [from, to, date] = fields;
    FlightQuery::from_form(&from, &to, &date).map_err(|_| DeskError::InvalidDate(date.clone()))
}
