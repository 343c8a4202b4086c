use crate::errors::{AppError, AppResult};

/// One-way password hashing. Swappable so service tests don't pay for real
/// key stretching.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> AppResult<String>;
    fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool>;
}

pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        bcrypt::verify(plain, hashed)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = BcryptHasher::new(4);

        let hashed = hasher.hash("hunter2hunter2").unwrap();
        assert_ne!(hashed, "hunter2hunter2");
        assert!(hasher.verify("hunter2hunter2", &hashed).unwrap());
        assert!(!hasher.verify("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptHasher::new(4);

        let first = hasher.hash("same-password").unwrap();
        let second = hasher.hash("same-password").unwrap();
        assert_ne!(first, second);
    }
}
