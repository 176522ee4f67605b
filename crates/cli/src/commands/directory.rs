//! Read-only directory commands.

use barber_booking_core::BarberId;
use barber_booking_widget::{DirectoryClient, HttpDirectoryClient, WidgetConfig};
use chrono::NaiveDate;
use tracing::info;

use super::CommandError;

/// List all barbers.
pub async fn barbers(config: &WidgetConfig) -> Result<(), CommandError> {
    let client = HttpDirectoryClient::new(config)?;
    let barbers = client.list_barbers().await?;

    info!(count = barbers.len(), "Barbers");
    for barber in &barbers {
        match &barber.specialty {
            Some(specialty) => info!("{}  {} ({specialty})", barber.id, barber.name),
            None => info!("{}  {}", barber.id, barber.name),
        }
    }
    Ok(())
}

/// List all services.
pub async fn services(config: &WidgetConfig) -> Result<(), CommandError> {
    let client = HttpDirectoryClient::new(config)?;
    let services = client.list_services().await?;

    info!(count = services.len(), "Services");
    for service in &services {
        let duration = service
            .duration_minutes
            .map(|minutes| format!(" {minutes} min"))
            .unwrap_or_default();
        let price = service
            .price
            .map(|price| format!(" {price:.2}"))
            .unwrap_or_default();
        info!("{}  {}{duration}{price}", service.id, service.name);
    }
    Ok(())
}

/// List the days a barber still has free slots.
pub async fn dates(config: &WidgetConfig, barber: &str) -> Result<(), CommandError> {
    let client = HttpDirectoryClient::new(config)?;
    let dates = client.list_available_dates(&BarberId::from(barber)).await?;

    info!(barber, count = dates.len(), "Available dates");
    for date in dates {
        info!("{}", date.format("%Y-%m-%d (%a)"));
    }
    Ok(())
}

/// List a barber's free slots on one date.
pub async fn slots(
    config: &WidgetConfig,
    barber: &str,
    date: NaiveDate,
) -> Result<(), CommandError> {
    let client = HttpDirectoryClient::new(config)?;
    let slots = client
        .list_available_time_slots(&BarberId::from(barber), date)
        .await?;

    info!(barber, %date, count = slots.len(), "Available time slots");
    for slot in &slots {
        info!("{slot}");
    }
    Ok(())
}
