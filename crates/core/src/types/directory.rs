//! Directory entries served by the booking backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BarberId, ServiceId};

/// A barber who can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: BarberId,
    pub name: String,
    /// Free-text specialty, if the shop records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// A service offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Price in the shop's currency. The backend sends a JSON number.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_barber_minimal_payload() {
        let barber: Barber = serde_json::from_str(r#"{"id": 1, "name": "Rui"}"#).unwrap();
        assert_eq!(barber.id.as_str(), "1");
        assert_eq!(barber.name, "Rui");
        assert!(barber.specialty.is_none());
    }

    #[test]
    fn test_barber_with_specialty() {
        let barber: Barber =
            serde_json::from_str(r#"{"id": "b2", "name": "Ana", "specialty": "Fades"}"#).unwrap();
        assert_eq!(barber.specialty.as_deref(), Some("Fades"));
    }

    #[test]
    fn test_service_extra_fields() {
        let service: Service = serde_json::from_str(
            r#"{"id": 4, "name": "Beard trim", "durationMinutes": 30, "price": 25.5}"#,
        )
        .unwrap();
        assert_eq!(service.duration_minutes, Some(30));
        assert_eq!(service.price, Some(Decimal::new(255, 1)));
    }

    #[test]
    fn test_service_without_extras() {
        let service: Service = serde_json::from_str(r#"{"id": 4, "name": "Cut"}"#).unwrap();
        assert!(service.duration_minutes.is_none());
        assert!(service.price.is_none());
    }
}
