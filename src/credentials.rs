use crate::error::{Error, Result};
use tokio::task;

/// One-way bcrypt digest of a plaintext password.
///
/// bcrypt is deliberately slow, so the work runs on the blocking pool.
pub async fn hash(password: String) -> Result<String> {
    task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(Error::internal)?
        .map_err(Error::internal)
}

/// Checks a plaintext password against a stored digest.
///
/// A malformed digest counts as a mismatch, it never surfaces as an error.
pub async fn verify(password: String, digest: String) -> bool {
    task::spawn_blocking(move || bcrypt::verify(password, &digest).unwrap_or(false))
        .await
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    // lowest cost bcrypt allows, the tests only care about correctness
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn verify_accepts_matching_password() {
        let digest = bcrypt::hash("pw123", TEST_COST).unwrap();

        assert!(super::verify("pw123".to_owned(), digest).await);
    }

    #[tokio::test]
    async fn verify_rejects_wrong_password() {
        let digest = bcrypt::hash("pw123", TEST_COST).unwrap();

        assert!(!super::verify("pw124".to_owned(), digest).await);
    }

    #[tokio::test]
    async fn verify_rejects_malformed_digest() {
        assert!(!super::verify("pw123".to_owned(), "not a digest".to_owned()).await);
    }

    #[tokio::test]
    async fn hash_is_salted() {
        let first = super::hash("pw123".to_owned()).await.unwrap();
        let second = super::hash("pw123".to_owned()).await.unwrap();

        assert_ne!(first, second);
    }
}
