use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use anyhow::Context;
use rand::rngs::OsRng;
use tracing::error;

/// Argon2id PHC string for `plain`, salted from the OS RNG.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// `hash_password` on the blocking pool, off the async workers.
pub async fn hash_password_blocking(plain: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .context("hash_password task")?
}

/// Compare `plain` against a stored hash. Not routed; kept for callers that
/// need to verify credentials.
#[allow(dead_code)]
pub fn check_password(plain: &str, stored_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_check_roundtrip() {
        let hash = hash_password("1234").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(check_password("1234", &hash).expect("check should succeed"));
    }

    #[test]
    fn check_rejects_wrong_password() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!check_password("wrong-password", &hash).expect("check should not error"));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = hash_password("1234").unwrap();
        let b = hash_password("1234").unwrap();
        assert_ne!(a, b);
        assert!(check_password("1234", &a).unwrap());
        assert!(check_password("1234", &b).unwrap());
    }

    #[tokio::test]
    async fn blocking_hash_is_checkable() {
        let hash = hash_password_blocking("1234".into()).await.expect("hash on blocking pool");
        assert!(hash.starts_with("$argon2id$"));
        assert!(check_password("1234", &hash).unwrap());
        assert!(!check_password("4321", &hash).unwrap());
    }

    #[test]
    fn check_errors_on_malformed_hash() {
        let err = check_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
