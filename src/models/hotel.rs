//! Hotel model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Hotel owning rooms and facilities
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Hotel created on first inventory insert when none exists
pub struct DefaultHotel;

impl DefaultHotel {
    pub const NAME: &'static str = "Default Hotel";
    pub const ADDRESS: &'static str = "123 Main Street";
    pub const DESCRIPTION: &'static str = "Default hotel created automatically";
}
