use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::UserRole,
    ports::outgoing::{TokenClaims, TokenError, TokenProvider},
};

use super::jwt_config::JwtConfig;

const ACCESS: &str = "access";
const REFRESH: &str = "refresh";

/// Wire form of the claims: the domain claims plus the issuer.
#[derive(Debug, Serialize, Deserialize)]
struct SignedClaims {
    iss: String,
    #[serde(flatten)]
    claims: TokenClaims,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("access_token_expiry", &self.config.access_token_expiry)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        role: UserRole,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let signed = SignedClaims {
            iss: self.config.issuer.clone(),
            claims: TokenClaims {
                sub: user_id,
                exp: expiration.timestamp(),
                iat: now.timestamp(),
                nbf: now.timestamp(),
                token_type: token_type.to_string(),
                role,
            },
        };

        encode(&Header::new(Algorithm::HS256), &signed, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn decode_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded = decode::<SignedClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: Token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: Token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: Invalid token signature detected");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::error!("Security alert: Malformed or invalid algorithm token");
                    TokenError::MalformedToken
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Token verification failed: Foreign issuer");
                    TokenError::InvalidSignature
                }
                ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                    tracing::warn!("Token verification failed: Malformed token");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::warn!("Token verification failed: Unknown error");
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims.claims)
    }

    fn decode_typed(&self, token: &str, expected: &str) -> Result<TokenClaims, TokenError> {
        let claims = self.decode_claims(token)?;
        if claims.token_type != expected {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                expected,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(expected.to_string()));
        }
        Ok(claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError> {
        self.generate_token(user_id, role, ACCESS, self.config.access_token_expiry)
    }

    fn generate_refresh_token(&self, user_id: Uuid, role: UserRole) -> Result<String, TokenError> {
        self.generate_token(user_id, role, REFRESH, self.config.refresh_token_expiry)
    }

    /// Verifies an access token. Refresh tokens are rejected here.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.decode_typed(token, ACCESS)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.decode_typed(token, REFRESH)
    }

    fn access_token_ttl(&self) -> i64 {
        self.config.access_token_expiry
    }
}
