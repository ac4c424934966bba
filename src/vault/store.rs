//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` wraps the format layer and the crypto layer so the rest
//! of the application can work with simple method calls like
//! `store.add_record(fields)`.
//!
//! State machine: a store value only exists once `open` has verified
//! the passphrase (or created a fresh vault).  Damaged files and wrong
//! passphrases are rejected inside `open`, so record operations are
//! unreachable on an invalid vault.

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use zeroize::Zeroizing;

use crate::crypto::kdf::VaultKey;
use crate::crypto::{cipher, kdf, verifier};
use crate::errors::{PassVaultError, Result};

use super::format::{self, VaultDocument};
use super::record::{FieldMap, Record};

/// Outcome of `add_record`, so callers can tell a fresh insert from a
/// merge into an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was appended.
    Created,
    /// Fields were merged into an existing `(site, login)` record.
    Merged,
}

/// The main vault handle.  Open one with `VaultStore::open`, then use
/// its methods to manage records.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Per-vault KDF salt; set once at creation, immutable thereafter.
    salt: Vec<u8>,

    /// PHC hash of the master passphrase; empty = no passphrase.
    master_key_hash: String,

    /// Records in insertion order.
    records: Vec<Record>,

    /// The verified passphrase (wiped from memory on drop).
    passphrase: Zeroizing<String>,

    /// Derived lazily; most operations never touch a `password` field
    /// and should not pay for the KDF.
    key: OnceCell<VaultKey>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault at `path`, creating it when the file is missing.
    ///
    /// - Missing file: generate a fresh 128-byte salt, hash the
    ///   passphrase (empty passphrase = no hash, no verification on
    ///   later opens), persist an empty vault, and return it.
    /// - Existing file: parse (failure is `VaultDamaged`) and, when a
    ///   hash is stored, verify the passphrase against it (mismatch is
    ///   `WrongPassphrase`).
    pub fn open(path: &Path, passphrase: &str) -> Result<Self> {
        if !path.exists() {
            return Self::create(path, passphrase);
        }

        let document = format::read_vault(path)?;

        if !document.master_key.is_empty()
            && !verifier::verify_passphrase(&document.master_key, passphrase)?
        {
            return Err(PassVaultError::WrongPassphrase(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            salt: document.salt,
            master_key_hash: document.master_key,
            records: document.records,
            passphrase: Zeroizing::new(passphrase.to_string()),
            key: OnceCell::new(),
        })
    }

    /// Create a brand-new vault file at `path` and persist it.
    fn create(path: &Path, passphrase: &str) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let master_key_hash = if passphrase.is_empty() {
            String::new()
        } else {
            verifier::hash_passphrase(passphrase)?
        };

        let store = Self {
            path: path.to_path_buf(),
            salt: kdf::generate_salt().to_vec(),
            master_key_hash,
            records: Vec::new(),
            passphrase: Zeroizing::new(passphrase.to_string()),
            key: OnceCell::new(),
        };

        store.save()?;
        Ok(store)
    }

    // ------------------------------------------------------------------
    // Field encryption
    // ------------------------------------------------------------------

    /// The vault key, derived on first use and cached for the lifetime
    /// of this store.
    fn vault_key(&self) -> &VaultKey {
        self.key
            .get_or_init(|| kdf::derive_vault_key(self.passphrase.as_bytes(), &self.salt))
    }

    /// Encrypt a plaintext password into this vault's envelope format.
    pub fn encrypt_field(&self, plaintext: &str) -> Result<String> {
        cipher::encrypt_field(self.vault_key().as_bytes(), plaintext)
    }

    /// Decrypt an envelope stored in this vault.
    pub fn decrypt_field(&self, envelope: &str) -> Result<String> {
        cipher::decrypt_field(self.vault_key().as_bytes(), envelope)
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Add a record, or merge fields into an existing one.
    ///
    /// `site` and `login` are required.  A `password` field is
    /// encrypted before the merge decision so plaintext never enters
    /// the record list.  When a `(site, login)` record already exists,
    /// only keys it does not yet carry are merged in (first write
    /// wins); re-adding the same record is therefore a no-op.
    pub fn add_record(&mut self, mut fields: FieldMap) -> Result<AddOutcome> {
        let site = required_string(&fields, "site")?;
        let login = required_string(&fields, "login")?;

        let plaintext = match fields.get("password") {
            Some(Value::String(s)) => Some(Zeroizing::new(s.clone())),
            Some(_) => return Err(PassVaultError::InvalidFieldValue("password".into())),
            None => None,
        };
        if let Some(plaintext) = plaintext {
            let envelope = self.encrypt_field(&plaintext)?;
            fields.insert("password".to_string(), Value::String(envelope));
        }

        match self.records.iter_mut().find(|r| r.matches(&site, &login)) {
            Some(record) => {
                for (key, value) in fields {
                    if !record.has_field(&key) {
                        record.set_field(&key, value)?;
                    }
                }
                Ok(AddOutcome::Merged)
            }
            None => {
                let mut record = Record {
                    site,
                    login,
                    password: None,
                    extra: FieldMap::new(),
                };
                for (key, value) in fields {
                    if key != "site" && key != "login" {
                        record.set_field(&key, value)?;
                    }
                }
                self.records.push(record);
                Ok(AddOutcome::Created)
            }
        }
    }

    /// Overwrite fields on the exact `(site, login)` record.
    ///
    /// A `password` value is decrypted and compared first; the envelope
    /// is only replaced when the plaintext actually changed, so an
    /// unchanged password does not churn the stored IV.  Other keys
    /// (including `site` and `login`, which re-identify the record) are
    /// written only when different.
    pub fn update_record(&mut self, site: &str, login: &str, fields: FieldMap) -> Result<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.matches(site, login))
            .ok_or_else(|| PassVaultError::RecordNotFound {
                site: site.to_string(),
                login: login.to_string(),
            })?;

        for (key, value) in fields {
            if key == "password" {
                let new_plain = match value {
                    Value::String(s) => Zeroizing::new(s),
                    _ => return Err(PassVaultError::InvalidFieldValue("password".into())),
                };

                let changed = match &self.records[index].password {
                    Some(envelope) => {
                        let current = Zeroizing::new(self.decrypt_field(envelope)?);
                        *current != *new_plain
                    }
                    None => true,
                };

                if changed {
                    let envelope = self.encrypt_field(&new_plain)?;
                    self.records[index].password = Some(envelope);
                }
            } else {
                let record = &mut self.records[index];
                let differs = match key.as_str() {
                    "site" => value.as_str() != Some(record.site.as_str()),
                    "login" => value.as_str() != Some(record.login.as_str()),
                    _ => record.extra.get(&key) != Some(&value),
                };
                if differs {
                    record.set_field(&key, value)?;
                }
            }
        }

        Ok(())
    }

    /// Rewrite the `site` field on every record currently equal to
    /// `old_site`.  Returns how many records changed.
    pub fn update_all_sites(&mut self, old_site: &str, new_site: &str) -> Result<usize> {
        let mut count = 0;
        for record in &mut self.records {
            if record.site == old_site {
                record.site = new_site.to_string();
                count += 1;
            }
        }

        if count == 0 {
            return Err(PassVaultError::SiteNotFound(old_site.to_string()));
        }
        Ok(count)
    }

    /// Remove every record matching `(site, login)` exactly.  Returns
    /// how many records were removed.
    pub fn delete_record(&mut self, site: &str, login: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| !r.matches(site, login));

        let removed = before - self.records.len();
        if removed == 0 {
            return Err(PassVaultError::RecordNotFound {
                site: site.to_string(),
                login: login.to_string(),
            });
        }
        Ok(removed)
    }

    /// Remove every record for `site`, regardless of login.  Returns
    /// how many records were removed.
    pub fn delete_all_for_site(&mut self, site: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.site != site);

        let removed = before - self.records.len();
        if removed == 0 {
            return Err(PassVaultError::SiteNotFound(site.to_string()));
        }
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Master-key rotation
    // ------------------------------------------------------------------

    /// Re-encrypt every `password` envelope under `new_passphrase` and
    /// replace the stored hash.  Returns how many envelopes were
    /// rotated.
    ///
    /// All-or-nothing: every envelope is decrypted and re-encrypted
    /// into a staging list first, and neither a record nor the hash is
    /// mutated unless the whole pass succeeds.  An empty new passphrase
    /// clears the hash (disabling verification), but only when no
    /// encrypted passwords remain in the vault.
    pub fn rotate_master_key(&mut self, new_passphrase: &str) -> Result<usize> {
        let encrypted: Vec<(usize, String)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| record.password.clone().map(|e| (index, e)))
            .collect();

        if new_passphrase.is_empty() && !encrypted.is_empty() {
            return Err(PassVaultError::PassphraseStillRequired(encrypted.len()));
        }

        let new_key = kdf::derive_vault_key(new_passphrase.as_bytes(), &self.salt);

        let mut staged = Vec::with_capacity(encrypted.len());
        for (index, envelope) in &encrypted {
            let plaintext = Zeroizing::new(self.decrypt_field(envelope)?);
            let reencrypted = cipher::encrypt_field(new_key.as_bytes(), &plaintext)?;
            staged.push((*index, reencrypted));
        }

        let new_hash = if new_passphrase.is_empty() {
            String::new()
        } else {
            verifier::hash_passphrase(new_passphrase)?
        };

        // Commit; nothing above mutated the store.
        for (index, envelope) in staged {
            self.records[index].password = Some(envelope);
        }
        self.master_key_hash = new_hash;
        self.passphrase = Zeroizing::new(new_passphrase.to_string());
        self.key = OnceCell::from(new_key);

        Ok(encrypted.len())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the full vault and overwrite the file atomically.
    pub fn save(&self) -> Result<()> {
        let document = VaultDocument {
            salt: self.salt.clone(),
            master_key: self.master_key_hash.clone(),
            records: self.records.clone(),
        };
        format::write_vault(&self.path, &document)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the vault's KDF salt.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Returns `true` when opening this vault requires a passphrase.
    pub fn has_passphrase(&self) -> bool {
        !self.master_key_hash.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The record matching `(site, login)` exactly, if any.
    pub fn record(&self, site: &str, login: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.matches(site, login))
    }

    /// Returns the number of records in the vault.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Pull a required, non-empty string field out of an input map.
fn required_string(fields: &FieldMap, key: &'static str) -> Result<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | None => Err(PassVaultError::MissingField(key)),
        Some(_) => Err(PassVaultError::InvalidFieldValue(key.to_string())),
    }
}
