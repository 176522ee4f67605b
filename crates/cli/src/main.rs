//! Barber Booking CLI - talk to the booking backend from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List barbers and services
//! bb-cli barbers
//! bb-cli services
//!
//! # Days with free slots, then the free slots of one day
//! bb-cli dates --barber 3
//! bb-cli slots --barber 3 --date 2024-06-01
//!
//! # Book through the same form flow the widget runs
//! bb-cli book --barber 3 --service 2 --date 2024-06-01 --hour 09:30 \
//!     --name "Joao Silva" --phone 555-0101 --notes "Beard too"
//! ```
//!
//! # Environment Variables
//!
//! - `BOOKING_API_BASE_URL` - Backend base URL (overridden by `--api-url`)
//! - `BOOKING_SLOT_PLACEHOLDER` - Label of the empty hour option
//! - `RUST_LOG` - Log filter

#![cfg_attr(not(test), forbid(unsafe_code))]

use barber_booking_widget::WidgetConfig;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

use commands::CommandError;
use commands::book::BookingArgs;

#[derive(Parser)]
#[command(name = "bb-cli")]
#[command(author, version, about = "Barber booking CLI")]
struct Cli {
    /// Backend base URL (defaults to `BOOKING_API_BASE_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List barbers
    Barbers,
    /// List services
    Services,
    /// List the days a barber still has free slots
    Dates {
        /// Barber ID
        #[arg(short, long)]
        barber: String,
    },
    /// List a barber's free slots on a date
    Slots {
        /// Barber ID
        #[arg(short, long)]
        barber: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
    },
    /// Book an appointment
    Book {
        /// Barber ID
        #[arg(short, long)]
        barber: String,

        /// Service ID
        #[arg(short, long)]
        service: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Time slot, exactly as listed by `slots`
        #[arg(long)]
        hour: String,

        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Customer phone
        #[arg(short, long)]
        phone: String,

        /// Free-text notes for the barber
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "barber_booking_cli=info,barber_booking_widget=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = WidgetConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_base_url(api_url)?;
    }

    match cli.command {
        Commands::Barbers => commands::directory::barbers(&config).await?,
        Commands::Services => commands::directory::services(&config).await?,
        Commands::Dates { barber } => commands::directory::dates(&config, &barber).await?,
        Commands::Slots { barber, date } => {
            commands::directory::slots(&config, &barber, date).await?;
        }
        Commands::Book {
            barber,
            service,
            date,
            hour,
            name,
            phone,
            notes,
        } => {
            let args = BookingArgs {
                barber,
                service,
                date,
                hour,
                name,
                phone,
                notes,
            };
            commands::book::book(&config, args).await?;
        }
    }
    Ok(())
}
