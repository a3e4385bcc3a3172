use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::helpers::time::now_utc;
use crate::utils::constants::TOKEN_SAFETY_MARGIN_SECS;

/// Access token issued by the OAuth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Space-joined scopes actually granted.
    #[serde(default)]
    pub scope: String,
    /// Lifetime declared by the server at issuance, in seconds.
    pub expires_in: i64,

    #[serde(skip)]
    expires_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn new(access_token: impl Into<String>, token_type: impl Into<String>, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            scope: String::new(),
            expires_in,
            expires_at: None,
        }
    }

    /// Fix the expiry instant: issuance + `expires_in` - safety margin.
    ///
    /// Only called once, when the token is accepted into the cache. `None` when
    /// the declared lifetime puts the expiry outside the representable range.
    pub(crate) fn stamp(mut self, issued_at: DateTime<Utc>) -> Option<Self> {
        let lifetime = self.expires_in.checked_sub(TOKEN_SAFETY_MARGIN_SECS)?;
        let expires_at = issued_at.checked_add_signed(Duration::try_seconds(lifetime)?)?;
        self.expires_at = Some(expires_at);
        Some(self)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// A token that was never stamped is never valid.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now < expires_at)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now_utc())
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        let token_type = if self.token_type.is_empty() { "Bearer" } else { self.token_type.as_str() };
        format!("{} {}", token_type, self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_subtracted_from_declared_lifetime() {
        let issued_at = now_utc();
        let token = Token::new("abc", "Bearer", 200).stamp(issued_at).unwrap();

        assert_eq!(token.expires_at(), Some(issued_at + Duration::seconds(20)));
        assert!(token.is_valid_at(issued_at + Duration::seconds(19)));
        assert!(!token.is_valid_at(issued_at + Duration::seconds(20)));
        assert!(!token.is_valid_at(issued_at + Duration::seconds(25)));
    }

    #[test]
    fn short_lived_token_is_invalid_immediately() {
        let issued_at = now_utc();
        let token = Token::new("abc", "Bearer", 180).stamp(issued_at).unwrap();
        assert!(!token.is_valid_at(issued_at));
    }

    #[test]
    fn out_of_range_lifetime_cannot_be_stamped() {
        let issued_at = now_utc();
        assert!(Token::new("abc", "Bearer", i64::MIN).stamp(issued_at).is_none());
        assert!(Token::new("abc", "Bearer", i64::MAX).stamp(issued_at).is_none());
        assert!(Token::new("abc", "Bearer", 100_000_000_000_000_000).stamp(issued_at).is_none());
        // past chrono's year range but still a valid TimeDelta
        assert!(Token::new("abc", "Bearer", 9_000_000_000_000).stamp(issued_at).is_none());
        assert!(Token::new("abc", "Bearer", -3600).stamp(issued_at).is_some());
    }

    #[test]
    fn unstamped_token_is_not_valid() {
        let token: Token = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"Bearer","scope":"extrato.read","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(token.scope, "extrato.read");
        assert!(!token.is_valid());
    }

    #[test]
    fn authorization_uses_token_type() {
        assert_eq!(Token::new("abc", "Bearer", 3600).authorization(), "Bearer abc");
        assert_eq!(Token::new("abc", "", 3600).authorization(), "Bearer abc");
    }
}
