//! Session token issuing and verification

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Role, User},
};

/// Identity snapshot carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Role at the time the token was issued
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Freshly signed token plus its lifetime in seconds
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// HS256 token signer/verifier
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_hours: i64,
}

impl TokenService {
    /// Create a new token service from the shared secret
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry_hours,
        }
    }

    /// Sign a token for `user` valid from now
    pub fn issue(&self, user: &User) -> AppResult<IssuedToken> {
        self.issue_at(user, Utc::now())
    }

    /// Sign a token for `user` as if issued at `issued_at`
    pub fn issue_at(&self, user: &User, issued_at: DateTime<Utc>) -> AppResult<IssuedToken> {
        let expires_at = issued_at + Duration::hours(self.expiry_hours);

        let claims = Claims {
            sub: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.expires_in(),
        })
    }

    /// Verify signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Token lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.expiry_hours * 3600
    }
}
