//! Facility and operating hours models

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::booking::FacilityBooking;
use super::enums::{DayOfWeek, FacilityType, ResourceStatus};
use crate::error::{AppError, AppResult};

/// Facility model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    /// Price per hour
    pub base_price: Decimal,
    /// VIP discount percentage (0-100)
    pub vip_discount: Option<Decimal>,
    /// Maximum number of simultaneous bookings
    pub capacity: i32,
    pub description: String,
    pub status: ResourceStatus,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Opening window of a facility for one day of the week
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub day_of_week: DayOfWeek,
    /// Opening time (HH:MM)
    pub open_time: String,
    /// Closing time (HH:MM)
    pub close_time: String,
}

/// Facility with its operating hours
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityWithHours {
    #[serde(flatten)]
    pub facility: Facility,
    pub operating_hours: Vec<OperatingHours>,
}

/// Facility with operating hours and bookings
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityDetails {
    #[serde(flatten)]
    pub facility: Facility,
    pub operating_hours: Vec<OperatingHours>,
    pub bookings: Vec<FacilityBooking>,
}

/// Operating hours as submitted by administrators
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHoursInput {
    pub day_of_week: DayOfWeek,
    /// Opening time (HH:MM)
    pub open_time: String,
    /// Closing time (HH:MM)
    pub close_time: String,
}

impl OperatingHoursInput {
    /// Check both times parse as HH:MM and that opening precedes closing
    pub fn validate_window(&self) -> AppResult<()> {
        let open = parse_hhmm(&self.open_time)?;
        let close = parse_hhmm(&self.close_time)?;
        if open >= close {
            return Err(AppError::Validation(format!(
                "Opening time must be before closing time on {}",
                self.day_of_week
            )));
        }
        Ok(())
    }
}

/// Validate a full operating-hours set: valid windows, one entry per day
pub fn validate_operating_hours(hours: &[OperatingHoursInput]) -> AppResult<()> {
    let mut seen = Vec::with_capacity(hours.len());
    for entry in hours {
        entry.validate_window()?;
        if seen.contains(&entry.day_of_week) {
            return Err(AppError::Validation(format!(
                "Operating hours defined twice for {}",
                entry.day_of_week
            )));
        }
        seen.push(entry.day_of_week);
    }
    Ok(())
}

/// Parse a time of day in HH:MM format
pub fn parse_hhmm(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time '{}' (use HH:MM)", value)))
}

/// Create facility request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacility {
    #[validate(length(min = 1, message = "Facility name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub facility_type: FacilityType,
    pub base_price: Decimal,
    pub vip_discount: Option<Decimal>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    pub description: Option<String>,
    pub status: Option<ResourceStatus>,
    #[serde(default)]
    pub operating_hours: Vec<OperatingHoursInput>,
}

/// Update facility request; `operatingHours`, when present, replaces the full set
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacility {
    #[validate(length(min = 1, message = "Facility name is required"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<FacilityType>,
    pub base_price: Option<Decimal>,
    /// Explicit `null` clears the discount
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub vip_discount: Option<Option<Decimal>>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub status: Option<ResourceStatus>,
    pub operating_hours: Option<Vec<OperatingHoursInput>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(day: DayOfWeek, open: &str, close: &str) -> OperatingHoursInput {
        OperatingHoursInput {
            day_of_week: day,
            open_time: open.to_string(),
            close_time: close.to_string(),
        }
    }

    #[test]
    fn test_update_vip_discount_null_clears() {
        let cleared: UpdateFacility = serde_json::from_str(r#"{"vipDiscount": null}"#).unwrap();
        assert_eq!(cleared.vip_discount, Some(None));
        assert!(cleared.operating_hours.is_none());

        let absent: UpdateFacility = serde_json::from_str(r#"{"name": "Spa"}"#).unwrap();
        assert_eq!(absent.vip_discount, None);
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert!(parse_hhmm("9h30").is_err());
        assert!(parse_hhmm("25:00").is_err());
    }

    #[test]
    fn test_validate_operating_hours() {
        assert!(validate_operating_hours(&[
            hours(DayOfWeek::Monday, "08:00", "20:00"),
            hours(DayOfWeek::Tuesday, "08:00", "12:00"),
        ])
        .is_ok());

        assert!(validate_operating_hours(&[hours(DayOfWeek::Monday, "20:00", "08:00")]).is_err());

        assert!(validate_operating_hours(&[
            hours(DayOfWeek::Friday, "08:00", "10:00"),
            hours(DayOfWeek::Friday, "12:00", "14:00"),
        ])
        .is_err());
    }
}
