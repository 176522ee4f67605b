//! The form the controller drives.

/// A named field of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Barber,
    Service,
    Date,
    Hour,
    CustomerName,
    CustomerPhone,
    Notes,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [Self; 7] = [
        Self::Barber,
        Self::Service,
        Self::Date,
        Self::Hour,
        Self::CustomerName,
        Self::CustomerPhone,
        Self::Notes,
    ];
}

/// A field rendered as a list of selectable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    Barber,
    Service,
    Hour,
}

impl From<SelectField> for FormField {
    fn from(field: SelectField) -> Self {
        match field {
            SelectField::Barber => Self::Barber,
            SelectField::Service => Self::Service,
            SelectField::Hour => Self::Hour,
        }
    }
}

/// One entry of a select: the submitted value and the text shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// An option with an empty value, used as "nothing chosen yet".
    #[must_use]
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    /// Whether this option stands for "nothing chosen".
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Message shown to the user after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Backend accepted the booking.
    BookingConfirmed,
    /// Backend answered but refused the booking.
    BookingRejected,
    /// Backend could not be reached.
    ConnectionFailed,
}

impl Notification {
    /// User-facing text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BookingConfirmed => "Booking confirmed!",
            Self::BookingRejected => "Could not complete the booking. Please try again.",
            Self::ConnectionFailed => "Could not reach the booking server.",
        }
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::BookingConfirmed)
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// The booking form as seen by the controller.
///
/// Hosts implement this over whatever renders the form (a DOM form, a
/// terminal prompt, a test double). All methods take `&self`: a surface is
/// a handle onto state that lives elsewhere, and the controller may hold
/// it across several in-flight requests.
pub trait FormSurface: Send + Sync {
    /// Current value of a field. Empty when nothing is entered or chosen.
    fn value(&self, field: FormField) -> String;

    /// Overwrite a field's value.
    fn set_value(&self, field: FormField, value: &str);

    /// Append an option at the end of a select.
    fn append_option(&self, field: SelectField, option: SelectOption);

    /// Remove every option of a select.
    fn clear_options(&self, field: SelectField);

    /// Return every field to its empty default. Select options are kept.
    fn reset_fields(&self);

    /// Stop the host's native submit (page navigation, full reload).
    fn suppress_default_submit(&self);

    /// Show a message to the user.
    fn notify(&self, notification: Notification);
}
