//! On-disk vault format.
//!
//! A vault is a single pretty-printed JSON document:
//!
//! ```text
//! {
//!   "salt": <base64 of 128 random bytes>,
//!   "master-key": "" | <Argon2id PHC hash string>,
//!   "records": [ { "site": ..., "login": ..., "password": <envelope>, ... } ]
//! }
//! ```
//!
//! Reads are all-or-nothing: a document that fails to parse is reported
//! as `VaultDamaged` and no partial state ever reaches a caller.  Writes
//! go through a temp file + rename so readers never see a half-written
//! file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::errors::{PassVaultError, Result};

/// The serialized form of one vault.
#[derive(Debug, Serialize, Deserialize)]
pub struct VaultDocument {
    /// Seed for all key derivation in this vault; generated once at
    /// creation and immutable thereafter (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// PHC hash of the master passphrase; the empty string means no
    /// passphrase is required to open the vault.
    #[serde(rename = "master-key")]
    pub master_key: String,

    /// The vault's records, in insertion order.
    pub records: Vec<Record>,
}

/// Read a vault document from disk.
///
/// Missing files are an `Io` error — callers decide whether a missing
/// vault means "create one".  Any parse failure is `VaultDamaged`.
pub fn read_vault(path: &Path) -> Result<VaultDocument> {
    let data = fs::read(path)?;
    serde_json::from_slice(&data).map_err(|_| PassVaultError::VaultDamaged(path.to_path_buf()))
}

/// Write a vault document to disk **atomically**, as indented JSON.
pub fn write_vault(path: &Path, document: &VaultDocument) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)
        .map_err(|e| PassVaultError::SerializationError(format!("vault: {e}")))?;
    write_atomic(path, &bytes)
}

/// Temp-file + rename commit, shared with the registry.
///
/// The temp file is in the same directory so the rename is guaranteed
/// to be atomic on the same filesystem.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
