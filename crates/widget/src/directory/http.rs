//! HTTP client for the booking backend.

use barber_booking_core::{Barber, BarberId, BookingRequest, Service, TimeSlot};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::{DirectoryClient, DirectoryError};
use crate::config::WidgetConfig;

/// Format of the `date` query parameter and of returned dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Booking backend client over JSON/HTTP.
///
/// No timeouts are configured: a request that never completes leaves the
/// caller waiting.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDirectoryClient {
    /// Create a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &WidgetConfig) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Create a client from an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Days on which a barber still has free slots, in backend order.
    ///
    /// The form does not use this (every date stays selectable), but it is
    /// handy for showing a barber's calendar.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    #[instrument(skip(self), fields(barber_id = %barber_id))]
    pub async fn list_available_dates(
        &self,
        barber_id: &BarberId,
    ) -> Result<Vec<NaiveDate>, DirectoryError> {
        let url = self.barber_endpoint(barber_id, "available_dates")?;
        let dates: Vec<String> = self.get_json(url).await?;

        dates
            .iter()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .map_err(|e| DirectoryError::Decode(format!("invalid date {raw:?}: {e}")))
            })
            .collect()
    }

    /// Resolve a path relative to the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, DirectoryError> {
        Ok(self.base_url.join(path)?)
    }

    /// Build `barbers/{id}/{leaf}/`, percent-encoding the id as one segment.
    fn barber_endpoint(&self, barber_id: &BarberId, leaf: &str) -> Result<Url, DirectoryError> {
        let mut url = self.endpoint("barbers/")?;
        url.path_segments_mut()
            .map_err(|()| {
                DirectoryError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .push(barber_id.as_str())
            .push(leaf)
            .push("");
        Ok(url)
    }

    /// GET a URL and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DirectoryError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Backend rejected directory request");
            return Err(DirectoryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| DirectoryError::Decode(e.to_string()))
    }
}

impl DirectoryClient for HttpDirectoryClient {
    #[instrument(skip(self))]
    async fn list_barbers(&self) -> Result<Vec<Barber>, DirectoryError> {
        let barbers: Vec<Barber> = self.get_json(self.endpoint("barbers/")?).await?;
        debug!(count = barbers.len(), "Fetched barbers");
        Ok(barbers)
    }

    #[instrument(skip(self))]
    async fn list_services(&self) -> Result<Vec<Service>, DirectoryError> {
        let services: Vec<Service> = self.get_json(self.endpoint("services/")?).await?;
        debug!(count = services.len(), "Fetched services");
        Ok(services)
    }

    #[instrument(skip(self), fields(barber_id = %barber_id, date = %date))]
    async fn list_available_time_slots(
        &self,
        barber_id: &BarberId,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, DirectoryError> {
        let mut url = self.barber_endpoint(barber_id, "available_time_slots")?;
        url.query_pairs_mut()
            .append_pair("date", &date.format(DATE_FORMAT).to_string());

        let slots: Vec<TimeSlot> = self.get_json(url).await?;
        debug!(count = slots.len(), "Fetched available time slots");
        Ok(slots)
    }

    #[instrument(
        skip(self, request),
        fields(barber_id = %request.barber_id, date_time = %request.date_time)
    )]
    async fn submit_booking(&self, request: &BookingRequest) -> Result<(), DirectoryError> {
        let response = self
            .client
            .post(self.endpoint("bookings/")?)
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Backend rejected booking");
            return Err(DirectoryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Booking accepted");
        Ok(())
    }
}
