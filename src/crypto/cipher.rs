//! AES-256-CBC field encryption.
//!
//! Each call to `encrypt_field` generates a fresh random 16-byte IV and
//! prepends it to the PKCS#7-padded ciphertext.  `decrypt_field` splits
//! the IV back out before decrypting.
//!
//! Layout of the envelope (stored base64-encoded):
//!   [ 16-byte IV | ciphertext, padded to the 16-byte block size ]

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::TryRngCore;
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes.
const IV_LEN: usize = 16;

/// AES block size in bytes.
const BLOCK_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key` into a base64 envelope.
///
/// Returns the IV prepended to the ciphertext (IV || ciphertext),
/// base64-encoded so it can be stored as a JSON string.
pub fn encrypt_field(key: &[u8; 32], plaintext: &str) -> Result<String> {
    // Generate a random 16-byte IV.
    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut iv)
        .expect("OS RNG failure");

    // Build the cipher from the raw key bytes.
    let cipher = Aes256CbcEnc::new_from_slices(key, &iv)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Encrypt with PKCS#7 padding.
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    // Prepend the IV so the caller only needs to store one blob.
    let mut envelope = Vec::with_capacity(IV_LEN + ciphertext.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(envelope))
}

/// Decrypt an envelope that was produced by `encrypt_field`.
///
/// Expects base64 of a 16-byte IV followed by at least one full
/// ciphertext block.  Malformed base64, a truncated or misaligned
/// envelope, bad padding, and non-UTF-8 plaintext all fail with
/// `DecryptFailure`; garbled plaintext is never returned as success.
pub fn decrypt_field(key: &[u8; 32], envelope: &str) -> Result<String> {
    let raw = BASE64
        .decode(envelope)
        .map_err(|_| PassVaultError::DecryptFailure)?;

    // Make sure we have an IV plus at least one whole block.
    if raw.len() < IV_LEN + BLOCK_LEN || (raw.len() - IV_LEN) % BLOCK_LEN != 0 {
        return Err(PassVaultError::DecryptFailure);
    }

    // Split IV from ciphertext.
    let (iv, ciphertext) = raw.split_at(IV_LEN);

    let cipher =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| PassVaultError::DecryptFailure)?;

    // Decrypt and strip the PKCS#7 padding.  A wrong key shows up here
    // as a padding error with overwhelming probability.
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PassVaultError::DecryptFailure)?;

    // Convert to String via from_utf8 which takes ownership (no clone).
    // On error, zeroize the bytes inside the error before discarding.
    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        PassVaultError::DecryptFailure
    })
}
