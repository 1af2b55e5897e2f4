use anyhow::Context;
use skyfare_desk::{app_config::Config, Desk};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the desk output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyfare_desk=info,skyfare_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        first_booking_id = config.booking.first_booking_id,
        seat_rows = config.booking.seat_rows,
        "Starting SkyFare desk"
    );

    let mut desk = Desk::new(&config).context("Failed to set up booking session")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    desk.run(stdin.lock(), &mut stdout)
}
