//! Guest and administrator authentication

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        guest::{Admin, Guest, RegisterGuest},
        session::{SessionClaims, SessionRole},
    },
    repository::Repository,
};

fn invalid_credentials() -> AppError {
    AppError::Authentication("Invalid credentials".to_string())
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_password(&self, hash: &str, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn issue_token(&self, sub: &str, role: SessionRole, guest_id: Option<Uuid>) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = SessionClaims {
            sub: sub.to_string(),
            role,
            guest_id,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Register a new guest account
    pub async fn register(&self, request: RegisterGuest) -> AppResult<Guest> {
        request.validate()?;

        if self.repository.guests.email_exists(&request.email).await? {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let hash = self.hash_password(&request.password)?;
        let guest = self
            .repository
            .guests
            .create(&request.name, &request.email, &hash, request.phone.as_deref())
            .await?;

        tracing::info!("Guest {} registered", guest.email);
        Ok(guest)
    }

    /// Authenticate a guest and return a session token
    pub async fn guest_login(&self, email: &str, password: &str) -> AppResult<(String, Guest)> {
        let guest = self
            .repository
            .guests
            .get_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.verify_password(&guest.password, password)? {
            tracing::warn!("Failed guest login for {}", email);
            return Err(invalid_credentials());
        }

        let token = self.issue_token(&guest.email, SessionRole::Guest, Some(guest.id))?;
        Ok((token, guest))
    }

    /// Authenticate an administrator and return a session token
    pub async fn admin_login(&self, email: &str, password: &str) -> AppResult<(String, Admin)> {
        let admin = self
            .repository
            .admins
            .get_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.verify_password(&admin.password, password)? {
            tracing::warn!("Failed admin login for {}", email);
            return Err(invalid_credentials());
        }

        let token = self.issue_token(&admin.email, SessionRole::Admin, None)?;
        Ok((token, admin))
    }

    /// Create the configured administrator account if it does not exist
    pub async fn ensure_admin(&self) -> AppResult<()> {
        if self
            .repository
            .admins
            .get_by_email(&self.config.admin_email)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hash = self.hash_password(&self.config.admin_password)?;
        if self
            .repository
            .admins
            .create_if_missing(&self.config.admin_email, &hash)
            .await?
        {
            tracing::info!("Created administrator account {}", self.config.admin_email);
        }
        Ok(())
    }
}
