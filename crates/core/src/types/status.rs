//! Status enums for bookings.

use serde::{Deserialize, Serialize};

/// Booking status as stored by the backend.
///
/// The widget only ever creates confirmed bookings; there is no pending
/// stage on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl BookingStatus {
    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }

    #[test]
    fn test_status_display_matches_wire() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "confirmed");
        assert_eq!(BookingStatus::default(), BookingStatus::Confirmed);
    }
}
