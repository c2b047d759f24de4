//! Authenticated session claims

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Who is acting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionRole {
    Guest,
    Admin,
}

/// JWT claims for guest and administrator sessions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Account email
    pub sub: String,
    pub role: SessionRole,
    /// Set for guest sessions
    pub guest_id: Option<Uuid>,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role == SessionRole::Admin
    }

    /// Require administrator privileges
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization("Administrator privileges required".to_string()))
        }
    }

    /// Resolve the guest an operation acts for.
    ///
    /// Guests always act for themselves; naming another guest is forbidden.
    /// Administrators must name the guest explicitly.
    pub fn acting_guest(&self, requested: Option<Uuid>) -> AppResult<Option<Uuid>> {
        match self.role {
            SessionRole::Admin => Ok(requested),
            SessionRole::Guest => {
                let own = self
                    .guest_id
                    .ok_or_else(|| AppError::Authentication("Invalid guest session".to_string()))?;
                match requested {
                    Some(id) if id != own => Err(AppError::Authorization(
                        "Guests can only act on their own bookings".to_string(),
                    )),
                    _ => Ok(Some(own)),
                }
            }
        }
    }
}
