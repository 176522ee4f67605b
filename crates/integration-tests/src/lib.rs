//! Integration tests for the barber booking widget.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p barber-booking-integration-tests
//! ```
//!
//! No external services are needed: each test starts a [`FakeBackend`], an
//! axum server on `127.0.0.1` with a random port that serves scripted
//! directory data and records every booking it receives.
//!
//! # Example
//!
//! ```rust,ignore
//! let backend = FakeBackend::builder()
//!     .barbers(json!([{"id": 3, "name": "Rui"}]))
//!     .start()
//!     .await;
//! let client = backend.client();
//! assert_eq!(client.list_barbers().await.unwrap().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use barber_booking_widget::{HttpDirectoryClient, WidgetConfig};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// Scripted responses and recorded requests.
#[derive(Debug)]
struct BackendState {
    barbers: Value,
    barbers_status: StatusCode,
    services: Value,
    slots: HashMap<(String, String), Value>,
    dates: HashMap<String, Value>,
    booking_status: StatusCode,
    bookings: Mutex<Vec<Value>>,
    slot_requests: Mutex<Vec<(String, String)>>,
}

/// Builder for a [`FakeBackend`].
#[derive(Debug)]
pub struct FakeBackendBuilder {
    state: BackendState,
}

impl FakeBackendBuilder {
    /// Body of `GET /barbers/`.
    #[must_use]
    pub fn barbers(mut self, body: Value) -> Self {
        self.state.barbers = body;
        self
    }

    /// Status of `GET /barbers/`.
    #[must_use]
    pub const fn barbers_status(mut self, status: StatusCode) -> Self {
        self.state.barbers_status = status;
        self
    }

    /// Body of `GET /services/`.
    #[must_use]
    pub fn services(mut self, body: Value) -> Self {
        self.state.services = body;
        self
    }

    /// Slots served for one barber and date; anything else gets `[]`.
    #[must_use]
    pub fn slots(mut self, barber_id: &str, date: &str, body: Value) -> Self {
        self.state
            .slots
            .insert((barber_id.to_owned(), date.to_owned()), body);
        self
    }

    /// Dates served for one barber; anything else gets `[]`.
    #[must_use]
    pub fn dates(mut self, barber_id: &str, body: Value) -> Self {
        self.state.dates.insert(barber_id.to_owned(), body);
        self
    }

    /// Status answered to `POST /bookings/`.
    #[must_use]
    pub const fn booking_status(mut self, status: StatusCode) -> Self {
        self.state.booking_status = status;
        self
    }

    /// Bind to a random local port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(self) -> FakeBackend {
        let state = Arc::new(self.state);
        let router = Router::new()
            .route("/barbers/", get(list_barbers))
            .route("/services/", get(list_services))
            .route("/barbers/{id}/available_time_slots/", get(list_time_slots))
            .route("/barbers/{id}/available_dates/", get(list_dates))
            .route("/bookings/", post(create_booking))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        FakeBackend {
            base_url: Url::parse(&format!("http://{addr}/")).expect("Invalid fake backend URL"),
            state,
            handle,
        }
    }
}

/// A running fake of the booking backend.
#[derive(Debug)]
pub struct FakeBackend {
    base_url: Url,
    state: Arc<BackendState>,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    /// A backend with no barbers, no services and accepting every booking.
    #[must_use]
    pub fn builder() -> FakeBackendBuilder {
        FakeBackendBuilder {
            state: BackendState {
                barbers: json!([]),
                barbers_status: StatusCode::OK,
                services: json!([]),
                slots: HashMap::new(),
                dates: HashMap::new(),
                booking_status: StatusCode::OK,
                bookings: Mutex::new(Vec::new()),
                slot_requests: Mutex::new(Vec::new()),
            },
        }
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Widget configuration pointed at this backend.
    #[must_use]
    pub fn config(&self) -> WidgetConfig {
        WidgetConfig::new(self.base_url.clone())
    }

    /// A directory client pointed at this backend.
    #[must_use]
    pub fn client(&self) -> HttpDirectoryClient {
        local_client(self.base_url.clone())
    }

    /// Booking bodies received so far, oldest first.
    #[must_use]
    pub fn bookings(&self) -> Vec<Value> {
        self.state
            .bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `(barber id, date)` of every slot request received so far.
    #[must_use]
    pub fn slot_requests(&self) -> Vec<(String, String)> {
        self.state
            .slot_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A directory client for a loopback URL.
///
/// Bypasses any proxy configured in the environment so requests reach the
/// local listener directly.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn local_client(base_url: Url) -> HttpDirectoryClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    HttpDirectoryClient::with_client(client, base_url)
}

/// A base URL where nothing is listening.
///
/// # Panics
///
/// Panics if a probe listener cannot be bound.
pub async fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("Invalid probe URL")
}

// =============================================================================
// Handlers
// =============================================================================

#[derive(Debug, Deserialize)]
struct SlotQuery {
    date: String,
}

async fn list_barbers(State(state): State<Arc<BackendState>>) -> (StatusCode, Json<Value>) {
    (state.barbers_status, Json(state.barbers.clone()))
}

async fn list_services(State(state): State<Arc<BackendState>>) -> Json<Value> {
    Json(state.services.clone())
}

async fn list_time_slots(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    Query(query): Query<SlotQuery>,
) -> Json<Value> {
    state
        .slot_requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push((id.clone(), query.date.clone()));
    Json(
        state
            .slots
            .get(&(id, query.date))
            .cloned()
            .unwrap_or_else(|| json!([])),
    )
}

async fn list_dates(State(state): State<Arc<BackendState>>, Path(id): Path<String>) -> Json<Value> {
    Json(state.dates.get(&id).cloned().unwrap_or_else(|| json!([])))
}

async fn create_booking(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .bookings
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(body.clone());
    let status = state.booking_status;
    if status.is_success() {
        (status, Json(body))
    } else {
        (status, Json(json!({"detail": "Booking refused"})))
    }
}
