//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-CBC field encryption and decryption (`cipher`)
//! - PBKDF2-based vault key derivation (`kdf`)
//! - Argon2id master-passphrase hashing and verification (`verifier`)
//! - Random password generation (`password`)

pub mod cipher;
pub mod kdf;
pub mod password;
pub mod verifier;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt_field, decrypt_field, derive_vault_key, ...};
pub use cipher::{decrypt_field, encrypt_field};
pub use kdf::{derive_vault_key, generate_salt, VaultKey};
pub use password::generate_password;
pub use verifier::{hash_passphrase, verify_passphrase};
