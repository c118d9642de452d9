//! Reservation HTTP server entry point.
//!
//! # Responsibility
//! - Read runtime configuration from the environment.
//! - Initialize logging, open and migrate the database, seed the booking
//!   calendar, and serve the API.
//!
//! # Environment Variables
//! - `RESERVA_DB_PATH`: SQLite database path (default: reserva.db)
//! - `RESERVA_BIND_ADDR`: listen address (default: 0.0.0.0:8080)
//! - `RESERVA_LOG_LEVEL`: log level (default: info)
//! - `RESERVA_LOG_DIR`: log file directory (default: stderr only)
//! - `RESERVA_HORIZON_DAYS`: bookable days seeded from today (default: 365)

use std::env;
use std::error::Error;
use std::path::PathBuf;

use chrono::{Days, Local};
use log::info;
use tokio::net::TcpListener;

use reserva_core::db::open_db;
use reserva_core::{
    core_version, default_log_level, init_logging, CalendarRepository, DateRange,
    SqliteCalendarRepository,
};
use reserva_server::router::create_router;
use reserva_server::state::AppState;

/// Runtime configuration resolved from the environment.
struct Config {
    db_path: PathBuf,
    bind_addr: String,
    log_level: String,
    log_dir: Option<PathBuf>,
    horizon_days: u64,
}

impl Config {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        let horizon_days = match env::var("RESERVA_HORIZON_DAYS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| format!("invalid RESERVA_HORIZON_DAYS: {raw}"))?,
            Err(_) => 365,
        };
        if horizon_days == 0 {
            return Err("RESERVA_HORIZON_DAYS must be at least 1".into());
        }

        Ok(Self {
            db_path: env::var("RESERVA_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("reserva.db")),
            bind_addr: env::var("RESERVA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            log_level: env::var("RESERVA_LOG_LEVEL")
                .unwrap_or_else(|_| default_log_level().to_string()),
            log_dir: env::var("RESERVA_LOG_DIR").ok().map(PathBuf::from),
            horizon_days,
        })
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("reserva-server: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    init_logging(&config.log_level, config.log_dir.as_deref())?;
    info!(
        "event=startup module=server status=start version={} db_path={}",
        core_version(),
        config.db_path.display()
    );

    let conn = open_db(&config.db_path)?;
    seed_calendar(&conn, config.horizon_days)?;

    let state = AppState::new(conn);
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(
        "event=startup module=server status=listening addr={}",
        config.bind_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Seeds the booking calendar from today through the configured horizon.
///
/// Seeding is additive; dates already present keep their availability, so
/// restarting the server never resurrects booked dates.
fn seed_calendar(
    conn: &reserva_core::rusqlite::Connection,
    horizon_days: u64,
) -> Result<(), Box<dyn Error>> {
    let today = Local::now().date_naive();
    let last = today
        .checked_add_days(Days::new(horizon_days - 1))
        .ok_or("booking horizon overflows the calendar")?;
    let horizon = DateRange::new(today, last)?;

    let calendar = SqliteCalendarRepository::try_new(conn)?;
    let inserted = calendar.seed_range(&horizon)?;
    info!(
        "event=startup module=server status=seeded range={horizon} inserted={inserted}"
    );

    Ok(())
}
