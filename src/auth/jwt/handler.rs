//! Core JWT handler implementation

use super::types::{ACCESS_AUDIENCE, Claims, JwtHandler};
use crate::auth::AuthError;
use crate::config::AuthConfig;
use crate::utils::error::Result;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, warn};
use uuid::Uuid;

impl JwtHandler {
    /// Create a new JWT handler from the process-wide secret
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.secret_key.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.token_ttl_seconds(),
            issuer: config.token_issuer.clone(),
        }
    }

    /// Create an access token for a user with the configured lifetime
    pub fn create_access_token(&self, user_id: i32) -> Result<String> {
        self.create_access_token_with_ttl(user_id, chrono::Duration::seconds(self.expiration))
    }

    /// Create an access token for a user with an explicit lifetime
    pub fn create_access_token_with_ttl(
        &self,
        user_id: i32,
        ttl: chrono::Duration,
    ) -> Result<String> {
        let now = chrono::Utc::now();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: self.issuer.clone(),
            aud: ACCESS_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)?;

        debug!("Created access token for user: {}", user_id);
        Ok(token)
    }

    /// Verify signature, issuer, audience and expiry, returning the claims
    pub fn verify_token(&self, token: &str) -> std::result::Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[ACCESS_AUDIENCE]);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            }
        })?;

        debug!("Token verified for subject: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }

    /// Verify a token and return the user id it was issued for
    pub fn user_id_from_token(&self, token: &str) -> std::result::Result<i32, AuthError> {
        let claims = self.verify_token(token)?;
        claims.sub.parse::<i32>().map_err(|_| {
            warn!("Token subject is not a user id: {}", claims.sub);
            AuthError::InvalidToken
        })
    }
}
