//! Room model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::booking::RoomBooking;
use super::enums::{ResourceStatus, RoomType};

/// Room model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Price per night
    pub base_price: Decimal,
    /// VIP discount percentage (0-100)
    pub vip_discount: Option<Decimal>,
    /// Surface in square meters
    pub size: Option<i32>,
    /// Maximum number of guests
    pub capacity: i32,
    pub amenities: Vec<String>,
    pub status: ResourceStatus,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Room with its bookings
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    #[serde(flatten)]
    pub room: Room,
    pub bookings: Vec<RoomBooking>,
}

/// Create room request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    #[validate(length(min = 1, message = "Room number is required"))]
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub base_price: Decimal,
    pub vip_discount: Option<Decimal>,
    pub size: Option<i32>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub status: Option<ResourceStatus>,
}

/// Update room request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    #[validate(length(min = 1, message = "Room number is required"))]
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub base_price: Option<Decimal>,
    /// Explicit `null` clears the discount
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub vip_discount: Option<Option<Decimal>>,
    pub size: Option<i32>,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub status: Option<ResourceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_vip_discount_null_clears() {
        let absent: UpdateRoom = serde_json::from_str(r#"{"capacity": 2}"#).unwrap();
        assert_eq!(absent.vip_discount, None);

        let cleared: UpdateRoom = serde_json::from_str(r#"{"vipDiscount": null}"#).unwrap();
        assert_eq!(cleared.vip_discount, Some(None));

        let set: UpdateRoom = serde_json::from_str(r#"{"vipDiscount": 15}"#).unwrap();
        assert_eq!(set.vip_discount, Some(Some(Decimal::from(15))));
    }
}
