//! Vault key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is deliberately high: deriving the vault key
//! blocks the calling thread for its full duration, and that cost is
//! what slows offline brute force against a captured vault file.  The
//! same passphrase + salt always produces the same key, so a vault's
//! salt must never change after creation.

use pbkdf2::pbkdf2_hmac_array;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroize;

/// Length of the per-vault salt in bytes.
const SALT_LEN: usize = 128;

/// Length of the derived key in bytes (256 bits, for AES-256).
const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
const PBKDF2_ROUNDS: u32 = 600_000;

/// Derive the 32-byte vault key from a passphrase and the vault's salt.
///
/// An empty passphrase is a valid input — vaults without a master
/// passphrase still run their `password` fields through the cipher.
pub fn derive_vault_key(passphrase: &[u8], salt: &[u8]) -> VaultKey {
    VaultKey::new(pbkdf2_hmac_array::<Sha256, KEY_LEN>(
        passphrase,
        salt,
        PBKDF2_ROUNDS,
    ))
}

/// Generate a cryptographically random 128-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .expect("OS RNG failure");
    salt
}

/// A wrapper around the 32-byte vault key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Create a new `VaultKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
