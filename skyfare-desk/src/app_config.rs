use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use skyfare_booking::BookingRules;
use std::env;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingRules,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// chrono strftime pattern for the booked-on date
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency_symbol() -> String { "₹".to_string() }
fn default_date_format() -> String { "%d/%m/%Y".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file is optional; missing keys fall back to built-in defaults
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYFARE__BOOKING__SEAT_ROWS=40`
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        Self::from_settings(s)
    }

    pub fn from_settings(settings: config::Config) -> Result<Self, config::ConfigError> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.booking
            .validate()
            .map_err(|e| config::ConfigError::Message(format!("booking: {}", e)))?;
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(config::ConfigError::Message(format!(
                "display.date_format {:?} is not a valid date pattern",
                self.display.date_format
            )));
        }
        Ok(())
    }
}
