//! Guest, membership and administrator models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Guest model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: Uuid,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Guest membership; its presence enables VIP pricing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub tier: String,
    pub since: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Membership {
    /// Active when it never expires or expires after `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expires| expires > now)
    }
}

/// Guest with membership, as shown to administrators
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestProfile {
    #[serde(flatten)]
    pub guest: Guest,
    pub membership: Option<Membership>,
}

/// Administrator account
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Guest registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterGuest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub phone: Option<String>,
}

/// Registered guest, without credentials
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredGuest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<Guest> for RegisteredGuest {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            email: guest.email,
            phone: guest.phone,
        }
    }
}

/// Create or update a membership
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertMembership {
    /// Defaults to "VIP"
    pub tier: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}
