// Password hashing utilities
// Stored user passwords are bcrypt hashes; plaintext never reaches a repository

use bcrypt::{hash, verify};

pub use bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
/// * `cost` - bcrypt work factor, `MIN_COST..=MAX_COST`
///
/// # Returns
/// * `Ok(String)` - The bcrypt hash
/// * `Err(String)` - If hashing fails
///
/// # Example
/// ```
/// use playlist_api::auth::password::{hash_password, verify_password, MIN_COST};
///
/// let hash = hash_password("my_password", MIN_COST).unwrap();
/// assert!(verify_password("my_password", &hash).unwrap());
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, String> {
    hash(password, cost).map_err(|e| e.to_string())
}

/// Hashes a password on the blocking thread pool
///
/// Request handlers use this so a hash at a production cost does not stall
/// the async worker it runs on.
pub async fn hash_password_async(password: String, cost: u32) -> Result<String, String> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| format!("Hashing task failed: {}", e))?
}

/// Verifies a password against a bcrypt hash
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(String)` - If the hash is malformed
#[allow(dead_code)]
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_encodes_requested_cost() {
        for cost in [MIN_COST, MIN_COST + 1] {
            let hash = hash_password("s3cret", cost).expect("valid hash");

            assert!(hash.starts_with(&format!("$2b${:02}$", cost)), "{}", hash);
            assert!(verify_password("s3cret", &hash).unwrap());
            assert!(!verify_password("S3cret", &hash).unwrap());
        }
    }

    #[test]
    fn same_password_salted_per_call() {
        let first = hash_password("repeat", MIN_COST).unwrap();
        let second = hash_password("repeat", MIN_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify_password("repeat", &second).unwrap());
    }

    #[test]
    fn empty_password_is_hashed() {
        let hash = hash_password("", MIN_COST).expect("valid hash");

        assert!(verify_password("", &hash).unwrap());
        assert!(!verify_password("x", &hash).unwrap());
    }

    #[test]
    fn cost_outside_range_fails() {
        assert!(hash_password("pw", MIN_COST - 1).is_err());
        assert!(hash_password("pw", MAX_COST + 1).is_err());
    }

    #[test]
    fn malformed_hash_fails() {
        assert!(verify_password("pw", "not-a-hash").is_err());
    }

    #[tokio::test]
    async fn async_hash_uses_configured_cost() {
        let hash = hash_password_async("pool".to_string(), MIN_COST + 1)
            .await
            .expect("valid hash");

        assert!(hash.starts_with("$2b$05$"));
        assert!(verify_password("pool", &hash).unwrap());
    }

    #[tokio::test]
    async fn async_hash_reports_invalid_cost() {
        assert!(hash_password_async("pw".to_string(), MAX_COST + 1)
            .await
            .is_err());
    }
}
