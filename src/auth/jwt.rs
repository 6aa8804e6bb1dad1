use axum::extract::FromRef;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::state::AppState;

/// JWT payload: the subject is the user's email.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Signs and verifies identity tokens. Stateless; pure apart from the clock.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let jwt = &state.config.jwt;
        Self::new(&jwt.secret, Duration::minutes(jwt.ttl_minutes))
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// No clock-skew allowance: a token is invalid the moment `exp` passes.
    fn validation() -> Validation {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation
    }

    /// Issue a token carrying `email` as its subject, valid for the
    /// configured window.
    pub fn issue(&self, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + self.ttl;
        let claims = Claims {
            sub: email.to_owned(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(subject = %email, "jwt signed");
        Ok(token)
    }

    /// True when the token has a valid signature and an unexpired `exp`.
    /// Failures are logged and swallowed; callers only ever see a boolean.
    pub fn validate(&self, token: &str) -> bool {
        match decode::<Claims>(token, &self.decoding, &Self::validation()) {
            Ok(_) => true,
            Err(e) => {
                match e.kind() {
                    ErrorKind::ExpiredSignature => warn!("jwt is expired"),
                    ErrorKind::InvalidSignature => warn!("invalid jwt signature"),
                    _ => warn!(error = %e, "invalid jwt"),
                }
                false
            }
        }
    }

    /// Re-verify the token and return its subject. Errors on any invalid
    /// token rather than returning garbage.
    pub fn subject(&self, token: &str) -> anyhow::Result<String> {
        let data = decode::<Claims>(token, &self.decoding, &Self::validation())?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::new("test-secret", Duration::minutes(5))
    }

    #[test]
    fn issue_then_validate_and_extract_subject() {
        let keys = make_keys();
        let token = keys.issue("yoga@studio.com").expect("issue");
        assert!(keys.validate(&token));
        assert_eq!(keys.subject(&token).expect("subject"), "yoga@studio.com");
    }

    #[tokio::test]
    async fn keys_built_from_state_config() {
        let state = crate::state::AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let token = keys.issue("yoga@studio.com").expect("issue");
        assert!(keys.validate(&token));
    }

    #[test]
    fn validate_rejects_tampered_token() {
        let keys = make_keys();
        let token = keys.issue("yoga@studio.com").expect("issue");
        // Flip a character in the payload segment
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'a' { b'b' } else { b'a' };
        let tampered = String::from_utf8(bytes).expect("utf8");
        assert!(!keys.validate(&tampered));
    }

    #[test]
    fn validate_rejects_token_signed_with_other_secret() {
        let keys = make_keys();
        let other = JwtKeys::new("other-secret", Duration::minutes(5));
        let token = other.issue("yoga@studio.com").expect("issue");
        assert!(!keys.validate(&token));
    }

    #[test]
    fn validate_rejects_token_expired_moments_ago() {
        // Expiry is strict; no leeway window after `exp`
        let keys = JwtKeys::new("test-secret", Duration::seconds(-30));
        let token = keys.issue("yoga@studio.com").expect("issue");
        assert!(!keys.validate(&token));
        assert!(keys.subject(&token).is_err());
    }

    #[test]
    fn validate_rejects_malformed_and_empty_tokens() {
        let keys = make_keys();
        assert!(!keys.validate("invalid.token.here"));
        assert!(!keys.validate(""));
    }

    #[test]
    fn subject_errors_on_invalid_token() {
        let keys = make_keys();
        assert!(keys.subject("invalid.token.here").is_err());

        let other = JwtKeys::new("other-secret", Duration::minutes(5));
        let token = other.issue("yoga@studio.com").expect("issue");
        assert!(keys.subject(&token).is_err());
    }
}
