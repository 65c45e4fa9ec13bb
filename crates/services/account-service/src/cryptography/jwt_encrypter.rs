//! JWT access token adapter.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::SECONDS_PER_HOUR;

use crate::capabilities::{Encrypter, TokenClaims};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signs access tokens with HMAC-SHA256.
pub struct JwtEncrypter {
    config: JwtConfig,
}

impl JwtEncrypter {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Verify a token issued by this encrypter and extract its claims
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Expiry instant for a token issued at `now`.
    ///
    /// Lifetimes beyond the representable date range are a configuration error.
    fn expires_at(&self, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
        self.config
            .expiration_hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::config(format!(
                    "JWT expiration of {} hours is out of range",
                    self.config.expiration_hours
                ))
            })
    }
}

#[async_trait]
impl Encrypter for JwtEncrypter {
    async fn encrypt(&self, claims: &TokenClaims) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = self.expires_at(now)?;

        let claims = Claims {
            sub: claims.sub.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(token)
    }
}
