//! JWT 令牌签发与校验，HS256 签名

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthError, TokenIssuerPort};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// 用户 ID
    user_id: i64,
    /// 过期时间（Unix 秒）
    exp: i64,
}

/// JWT 令牌签发器
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        }
    }
}

impl TokenIssuerPort for JwtTokenIssuer {
    fn issue(&self, user_id: i64) -> Result<String, AuthError> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + self.validity).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<i64, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;
        Ok(data.claims.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::days(7));
        let token = issuer.issue(42).unwrap();
        assert_eq!(issuer.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::seconds(-120));
        let token = issuer.issue(42).unwrap();
        assert!(matches!(
            issuer.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::days(7));
        let other = JwtTokenIssuer::new("other-secret", Duration::days(7));
        let token = issuer.issue(42).unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::days(7));
        assert!(matches!(
            issuer.verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
    }
}
