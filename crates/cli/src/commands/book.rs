//! Booking through the form controller.
//!
//! Walks the same steps a user takes in the widget: the form loads, a
//! barber is picked, a date is picked (loading the hour select), an hour is
//! picked, contact details are typed, and the form is submitted. Choices
//! are checked against the options the form actually offers.

use barber_booking_widget::{
    BookingFormController, FormEvent, FormField, FormSurface, HttpDirectoryClient, MemoryForm,
    SelectField, SubmitOutcome, WidgetConfig,
};
use chrono::NaiveDate;
use tracing::{info, warn};

use super::CommandError;

/// Values typed into the booking form.
#[derive(Debug, Clone)]
pub struct BookingArgs {
    pub barber: String,
    pub service: String,
    pub date: NaiveDate,
    pub hour: String,
    pub name: String,
    pub phone: String,
    pub notes: String,
}

/// Fill and submit the booking form.
///
/// # Errors
///
/// Returns `CommandError::UnknownOption` if the barber, service or hour is
/// not offered, and `CommandError::NotConfirmed` unless the backend accepts
/// the booking.
pub async fn book(config: &WidgetConfig, args: BookingArgs) -> Result<(), CommandError> {
    let client = HttpDirectoryClient::new(config)?;
    let controller = BookingFormController::from_config(MemoryForm::new(), client, config);
    let form = controller.surface();

    controller.initialize().await;

    choose(form, SelectField::Barber, "barber", &args.barber)?;
    controller.handle(FormEvent::BarberChanged).await;
    choose(form, SelectField::Service, "service", &args.service)?;

    form.set_value(FormField::Date, &args.date.format("%Y-%m-%d").to_string());
    let refresh = controller.on_date_changed().await?;
    info!(?refresh, "Loaded time slots");
    choose(form, SelectField::Hour, "hour", &args.hour)?;

    form.set_value(FormField::CustomerName, &args.name);
    form.set_value(FormField::CustomerPhone, &args.phone);
    form.set_value(FormField::Notes, &args.notes);

    let outcome = controller.submit().await;
    report(form);

    match outcome {
        SubmitOutcome::Confirmed => {
            info!(barber = %args.barber, date = %args.date, hour = %args.hour, "Booked");
            Ok(())
        }
        outcome => Err(CommandError::NotConfirmed(outcome)),
    }
}

/// Show the message the form displayed after submitting.
fn report(form: &MemoryForm) {
    match form.last_notification() {
        Some(notification) if notification.is_failure() => warn!("{notification}"),
        Some(notification) => info!("{notification}"),
        None => {}
    }
}

/// Select an offered option, as a user clicking it would.
fn choose(
    form: &MemoryForm,
    field: SelectField,
    name: &'static str,
    value: &str,
) -> Result<(), CommandError> {
    if !form.has_option(field, value) {
        return Err(CommandError::UnknownOption {
            field: name,
            value: value.to_owned(),
        });
    }
    form.set_value(field.into(), value);
    Ok(())
}
