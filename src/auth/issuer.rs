//! Token issuing and verification

use super::types::{Claims, Credentials, IssuedToken};
use crate::config::AuthSettings;
use crate::error::{Error, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Case-insensitive scheme prefix stripped from the `Authorization` header
const BEARER_PREFIX: &str = "Bearer ";

/// Signs and verifies session tokens against one injected credential pair
#[derive(Clone)]
pub struct TokenIssuer {
    credentials: Credentials,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime_seconds: u64,
    validation: Validation,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("username", &self.credentials.username)
            .field("lifetime_seconds", &self.lifetime_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer from the auth settings
    pub fn new(settings: &AuthSettings) -> Self {
        let secret = settings.secret.as_bytes();

        // Expiry is checked by hand against a single clock reading
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            credentials: settings.credentials(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime_seconds: settings.token_lifetime_seconds,
            validation,
        }
    }

    /// Check credentials and issue a token valid from now
    pub fn issue(&self, username: &str, password: &str) -> Result<IssuedToken> {
        self.issue_at(username, password, Utc::now().timestamp())
    }

    /// Check credentials and issue a token as if the time were `now`
    pub fn issue_at(&self, username: &str, password: &str, now: i64) -> Result<IssuedToken> {
        if !self.credentials.matches(username, password) {
            tracing::debug!("login rejected");
            return Err(Error::unauthorized("bad credentials"));
        }
        self.sign(username, now)
    }

    /// Sign a token for `subject` without a credential check
    pub fn sign(&self, subject: &str, now: i64) -> Result<IssuedToken> {
        #[allow(clippy::cast_possible_wrap)]
        let exp = now.saturating_add(self.lifetime_seconds as i64);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::token(format!("Failed to encode JWT: {e}")))?;

        tracing::debug!(subject, exp, "issued token");
        Ok(IssuedToken { token, claims })
    }

    /// Verify an `Authorization` header value against the current time
    pub fn verify(&self, authorization: Option<&str>) -> Result<Claims> {
        let authorization =
            authorization.ok_or_else(|| Error::unauthorized("missing authorization header"))?;
        self.verify_at(authorization, Utc::now().timestamp())
    }

    /// Verify an `Authorization` header value as if the time were `now`.
    ///
    /// Accepts `Bearer <token>` (any case) or the bare token.
    pub fn verify_at(&self, authorization: &str, now: i64) -> Result<Claims> {
        let token = strip_bearer(authorization);
        if token.is_empty() {
            return Err(Error::unauthorized("empty token"));
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| Error::unauthorized(format!("invalid token: {e}")))?;

        if !data.claims.is_live_at(now) {
            return Err(Error::unauthorized("token expired"));
        }

        Ok(data.claims)
    }
}

/// Strip an optional, case-insensitive `Bearer ` prefix
pub fn strip_bearer(value: &str) -> &str {
    match value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => &value[BEARER_PREFIX.len()..],
        _ => value,
    }
}
