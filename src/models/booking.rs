//! Room and facility booking models

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::enums::BookingStatus;
use super::facility::Facility;
use super::room::Room;
use crate::error::{AppError, AppResult};

/// Room booking from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomBooking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub guest_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub number_of_guests: i32,
    /// Charge computed at creation, never recalculated
    pub final_price: Decimal,
    pub status: BookingStatus,
    #[serde(rename = "createdAt")]
    pub crea_date: Option<DateTime<Utc>>,
}

/// Room booking with its room embedded
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomBookingDetails {
    #[serde(flatten)]
    pub booking: RoomBooking,
    pub room: Room,
}

/// Facility booking from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityBooking {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub guest_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub final_price: Decimal,
    pub status: BookingStatus,
    #[serde(rename = "createdAt")]
    pub crea_date: Option<DateTime<Utc>>,
}

/// Facility booking with its facility embedded
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityBookingDetails {
    #[serde(flatten)]
    pub booking: FacilityBooking,
    pub facility: Facility,
}

/// Create room booking request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomBooking {
    pub room_id: Option<Uuid>,
    /// Required for administrator sessions, defaults to the session guest otherwise
    pub guest_id: Option<Uuid>,
    /// RFC 3339 instant or YYYY-MM-DD
    pub check_in: Option<String>,
    /// RFC 3339 instant or YYYY-MM-DD
    pub check_out: Option<String>,
    /// Number of guests
    pub guests: Option<i32>,
}

/// Create facility booking request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityBooking {
    pub facility_id: Option<Uuid>,
    /// Required for administrator sessions, defaults to the session guest otherwise
    pub guest_id: Option<Uuid>,
    /// RFC 3339 instant
    pub start_time: Option<String>,
    /// RFC 3339 instant
    pub end_time: Option<String>,
}

/// Query parameters for booking lists
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookingQuery {
    pub guest_id: Option<Uuid>,
}

/// Parse a booking instant.
///
/// Accepts RFC 3339 (`2024-01-01T14:00:00Z`), a local date-time without
/// offset (`2024-01-01T14:00`), or a bare date (`2024-01-01`, midnight).
/// Values without an offset are interpreted in the hotel timezone.
pub fn parse_instant(field: &str, value: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let local = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    local
        .and_then(|local| tz.from_local_datetime(&local).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::Validation(format!("Invalid {}: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_rfc3339() {
        let dt = parse_instant("checkIn", "2024-01-01T14:00:00+02:00", chrono_tz::UTC).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_date_in_hotel_timezone() {
        let dt = parse_instant("checkIn", "2024-01-01", chrono_tz::UTC).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let dt = parse_instant("checkIn", "2024-07-01", chrono_tz::Europe::Paris).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 30, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_local_datetime() {
        let dt = parse_instant("startTime", "2024-03-04T14:30", chrono_tz::UTC).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 4, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_instant_invalid() {
        let err = parse_instant("checkOut", "tomorrow", chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid checkOut: tomorrow"));
    }
}
