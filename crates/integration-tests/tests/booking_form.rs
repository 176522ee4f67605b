//! Integration tests for the booking form flow.
//!
//! Drives `BookingFormController` over a `MemoryForm` with the real HTTP
//! client, the way a user fills the widget in.

#![allow(clippy::indexing_slicing)]

use axum::http::StatusCode;
use barber_booking_integration_tests::{FakeBackend, local_client, unreachable_base_url};
use barber_booking_widget::{
    BookingFormController, FormEvent, FormField, FormSurface, HttpDirectoryClient, MemoryForm,
    Notification, SelectField, SelectOption, SlotRefresh, SubmitOutcome,
};
use serde_json::json;

fn form_for(backend: &FakeBackend) -> BookingFormController<MemoryForm, HttpDirectoryClient> {
    BookingFormController::from_config(MemoryForm::new(), backend.client(), &backend.config())
}

async fn seeded_backend(booking_status: StatusCode) -> FakeBackend {
    FakeBackend::builder()
        .barbers(json!([{"id": 3, "name": "Rui"}, {"id": 4, "name": "Ana"}]))
        .services(json!([{"id": 2, "name": "Cut"}]))
        .slots("3", "2024-06-01", json!(["09:00", "09:30"]))
        .slots("4", "2024-06-01", json!(["17:00"]))
        .booking_status(booking_status)
        .start()
        .await
}

/// Load the form and pick barber 3 on 2024-06-01 at 09:30.
async fn fill_in(controller: &BookingFormController<MemoryForm, HttpDirectoryClient>) {
    let form = controller.surface();
    controller.initialize().await;

    form.set_value(FormField::Barber, "3");
    controller.handle(FormEvent::BarberChanged).await;
    form.set_value(FormField::Service, "2");
    form.set_value(FormField::Date, "2024-06-01");
    controller.handle(FormEvent::DateChanged).await;
    form.set_value(FormField::Hour, "09:30");
    form.set_value(FormField::CustomerName, "Joao");
    form.set_value(FormField::CustomerPhone, "555-0101");
    form.set_value(FormField::Notes, "First visit");
}

#[tokio::test]
async fn test_initialize_fills_selects() {
    let backend = seeded_backend(StatusCode::OK).await;
    let controller = form_for(&backend);

    controller.initialize().await;

    let form = controller.surface();
    assert_eq!(
        form.options(SelectField::Barber),
        vec![SelectOption::new("3", "Rui"), SelectOption::new("4", "Ana")]
    );
    assert_eq!(
        form.options(SelectField::Service),
        vec![SelectOption::new("2", "Cut")]
    );
}

#[tokio::test]
async fn test_initialize_with_unreachable_backend_stays_empty() {
    let controller = BookingFormController::new(
        MemoryForm::new(),
        local_client(unreachable_base_url().await),
    );

    controller.initialize().await;

    let form = controller.surface();
    assert!(form.options(SelectField::Barber).is_empty());
    assert!(form.options(SelectField::Service).is_empty());
    assert!(form.notifications().is_empty());
}

#[tokio::test]
async fn test_date_change_loads_slots_for_barber() {
    let backend = seeded_backend(StatusCode::OK).await;
    let controller = form_for(&backend);
    let form = controller.surface();

    form.set_value(FormField::Barber, "4");
    form.set_value(FormField::Date, "2024-06-01");
    let refresh = controller.on_date_changed().await.expect("slots");

    assert_eq!(refresh, SlotRefresh::Applied(1));
    assert_eq!(
        form.options(SelectField::Hour),
        vec![
            SelectOption::placeholder("Select"),
            SelectOption::new("17:00", "17:00"),
        ]
    );
    assert_eq!(
        backend.slot_requests(),
        vec![("4".to_string(), "2024-06-01".to_string())]
    );
}

#[tokio::test]
async fn test_barber_change_after_slots_loaded() {
    let backend = seeded_backend(StatusCode::OK).await;
    let controller = form_for(&backend);
    fill_in(&controller).await;
    let form = controller.surface();
    assert_eq!(form.options(SelectField::Hour).len(), 3);

    form.set_value(FormField::Barber, "4");
    controller.handle(FormEvent::BarberChanged).await;

    assert_eq!(form.value(FormField::Date), "");
    assert_eq!(
        form.options(SelectField::Hour),
        vec![SelectOption::placeholder("Select")]
    );
    assert_eq!(backend.slot_requests().len(), 1);
}

#[tokio::test]
async fn test_successful_booking_resets_form() {
    let backend = seeded_backend(StatusCode::CREATED).await;
    let controller = form_for(&backend);
    fill_in(&controller).await;

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Confirmed);
    let form = controller.surface();
    assert_eq!(form.notifications(), vec![Notification::BookingConfirmed]);
    for field in FormField::ALL {
        assert_eq!(form.value(field), "", "{field:?} not reset");
    }

    let bookings = backend.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["dateTime"], json!("2024-06-01T09:30"));
    assert_eq!(bookings[0]["barberId"], json!("3"));
    assert_eq!(bookings[0]["serviceId"], json!("2"));
    assert_eq!(bookings[0]["notes"], json!("First visit"));
    assert_eq!(bookings[0]["status"], json!("confirmed"));
}

#[tokio::test]
async fn test_rejected_booking_keeps_form() {
    let backend = seeded_backend(StatusCode::CONFLICT).await;
    let controller = form_for(&backend);
    fill_in(&controller).await;

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    let form = controller.surface();
    assert_eq!(form.notifications(), vec![Notification::BookingRejected]);
    assert_eq!(form.value(FormField::CustomerName), "Joao");
    assert_eq!(form.value(FormField::Hour), "09:30");
    assert_eq!(backend.bookings().len(), 1);
}

#[tokio::test]
async fn test_unreachable_backend_on_submit() {
    let controller = BookingFormController::new(
        MemoryForm::new(),
        local_client(unreachable_base_url().await),
    );
    let form = controller.surface();
    form.set_value(FormField::Barber, "3");
    form.set_value(FormField::Date, "2024-06-01");
    form.set_value(FormField::Hour, "09:30");

    controller.handle(FormEvent::Submitted).await;

    assert_eq!(form.notifications(), vec![Notification::ConnectionFailed]);
    assert_eq!(form.value(FormField::Barber), "3");
    assert_eq!(form.suppressed_submits(), 1);
}

#[tokio::test]
async fn test_unpadded_date_loads_no_slots() {
    let backend = seeded_backend(StatusCode::OK).await;
    let controller = form_for(&backend);
    let form = controller.surface();
    form.set_value(FormField::Barber, "3");
    form.set_value(FormField::Date, "2024-6-1");

    let refresh = controller.on_date_changed().await.expect("no request made");

    assert_eq!(refresh, SlotRefresh::Skipped);
    assert_eq!(
        form.options(SelectField::Hour),
        vec![SelectOption::placeholder("Select")]
    );
    assert!(backend.slot_requests().is_empty());
}
