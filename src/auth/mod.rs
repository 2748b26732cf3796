//! Password hashing and verification.
//!
//! Hashes are PBKDF2-HMAC-SHA256 with a random 16-byte salt, stored as a
//! single string `pbkdf2$<iterations>$<salt-b64>$<hash-b64>` in the users
//! table.

pub mod session;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

const PBKDF2_ITERATIONS: u32 = 200_000;
const SCHEME: &str = "pbkdf2";
const KEY_LEN: usize = 32;
const SALT_LEN: usize = 16;

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations.max(1), &mut key);
    key
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);

    let key = derive_key(password, &salt, PBKDF2_ITERATIONS);
    format!(
        "{}${}${}${}",
        SCHEME,
        PBKDF2_ITERATIONS,
        B64.encode(salt),
        B64.encode(key)
    )
}

/// Check a password against a stored hash string. A malformed stored value
/// never verifies.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iter_str), Some(salt_b64), Some(hash_b64)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if scheme != SCHEME || parts.next().is_some() {
        return false;
    }
    let Ok(iterations) = iter_str.parse::<u32>() else {
        return false;
    };
    let Ok(salt) = B64.decode(salt_b64) else {
        return false;
    };

    let key = derive_key(password, &salt, iterations);
    B64.encode(key) == hash_b64
}
