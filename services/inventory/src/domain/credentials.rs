use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use rand::RngExt;

use crate::error::InventoryServiceError;

/// Random bytes in an account token (hex-encoded, so twice as many characters).
pub const TOKEN_BYTES: usize = 16;

/// Length of a generated reset password.
pub const RESET_PASSWORD_LEN: usize = 12;

/// Charset for generated reset passwords (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Hash a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, InventoryServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("failed to hash password: {e}").into())
}

/// Check a password against a stored PHC string. A stored value that does not
/// parse never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash is not a PHC string");
            false
        }
    }
}

/// Account token: `TOKEN_BYTES` from the thread-local CSPRNG as lowercase hex.
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

pub fn generate_password() -> String {
    let mut rng = rand::rng();
    (0..RESET_PASSWORD_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
