//! Bcrypt 密码散列

use crate::application::ports::{AuthError, PasswordHasherPort};

/// Bcrypt 密码散列器
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasherPort for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.cost).map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试用最低 cost，避免拖慢测试
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let hash = hasher.hash("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(hasher.verify("secret123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let hash = hasher.hash("secret123").unwrap();
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        assert!(hasher.verify("secret123", "not-a-bcrypt-hash").is_err());
    }
}
