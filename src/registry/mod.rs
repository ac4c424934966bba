//! Vault registry — maps vault names and aliases to file paths and
//! tracks the default vault.
//!
//! The registry is a single JSON file:
//!
//! ```text
//! { "configuration": { "default-vault": <string>,
//!     "vaults": [ { "names": [<string>, ...], "path": <string> }, ... ] } }
//! ```
//!
//! The first entry of `names` is the canonical name; the rest are
//! aliases.  A name is unique across the whole registry, never just
//! within one entry.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};
use crate::vault::format::write_atomic;

/// One registry entry: a vault's names (first = canonical) and the
/// path of its backing file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
    pub names: Vec<String>,
    pub path: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    configuration: Configuration,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Configuration {
    #[serde(rename = "default-vault")]
    default_vault: String,
    vaults: Vec<VaultEntry>,
}

/// Outcome of `add_alias`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasOutcome {
    /// The alias was appended to the vault's names.
    Added,
    /// The alias is already used somewhere in the registry.
    NameTaken,
    /// No vault entry contains the given name.
    UnknownVault,
}

/// The vault registry.  Load it with `Registry::load`, mutate it, and
/// persist with `save`.
pub struct Registry {
    path: PathBuf,
    default_vault: String,
    vaults: Vec<VaultEntry>,
}

impl Registry {
    /// Load the registry at `path`.
    ///
    /// On a missing file or a parse failure the registry is initialized
    /// empty and persisted immediately, so the file exists for
    /// subsequent reads.
    pub fn load(path: &Path) -> Result<Self> {
        let parsed = match fs::read(path) {
            Ok(bytes) => serde_json::from_slice::<RegistryFile>(&bytes).ok(),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        match parsed {
            Some(file) => Ok(Self {
                path: path.to_path_buf(),
                default_vault: file.configuration.default_vault,
                vaults: file.configuration.vaults,
            }),
            None => {
                let registry = Self {
                    path: path.to_path_buf(),
                    default_vault: String::new(),
                    vaults: Vec::new(),
                };
                registry.save()?;
                Ok(registry)
            }
        }
    }

    /// Overwrite the registry file with the full structure, as indented
    /// JSON, creating the parent directory when needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = RegistryFile {
            configuration: Configuration {
                default_vault: self.default_vault.clone(),
                vaults: self.vaults.clone(),
            },
        };
        let bytes = serde_json::to_vec_pretty(&file)
            .map_err(|e| PassVaultError::SerializationError(format!("registry: {e}")))?;

        write_atomic(&self.path, &bytes)
    }

    /// Index of the entry whose names contain `name`.
    fn entry_index(&self, name: &str) -> Option<usize> {
        self.vaults
            .iter()
            .position(|entry| entry.names.iter().any(|n| n == name))
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Register a vault and make it the default.
    ///
    /// Returns `false` (and changes nothing, not even the default) when
    /// `name` is already used anywhere in the registry.
    pub fn add_vault(&mut self, name: &str, path: &str) -> bool {
        if self.entry_index(name).is_some() {
            return false;
        }

        self.vaults.push(VaultEntry {
            names: vec![name.to_string()],
            path: path.to_string(),
        });
        self.default_vault = name.to_string();
        true
    }

    /// Append `alias` to the entry containing `name`.
    ///
    /// The alias must be unused across the *whole* registry, not just
    /// the target entry.
    pub fn add_alias(&mut self, name: &str, alias: &str) -> AliasOutcome {
        if self.entry_index(alias).is_some() {
            return AliasOutcome::NameTaken;
        }

        match self.entry_index(name) {
            Some(index) => {
                self.vaults[index].names.push(alias.to_string());
                AliasOutcome::Added
            }
            None => AliasOutcome::UnknownVault,
        }
    }

    /// Remove `old_name` from its entry and append `new_name`.
    ///
    /// The default-vault pointer follows the rename.  `new_name` must
    /// not be used anywhere in the registry.
    pub fn rename_vault(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let index = self
            .entry_index(old_name)
            .ok_or_else(|| PassVaultError::VaultNotFound(old_name.to_string()))?;

        if self.entry_index(new_name).is_some() {
            return Err(PassVaultError::NameInUse(new_name.to_string()));
        }

        let entry = &mut self.vaults[index];
        entry.names.retain(|n| n != old_name);
        entry.names.push(new_name.to_string());

        if self.default_vault == old_name {
            self.default_vault = new_name.to_string();
        }
        Ok(())
    }

    /// Remove the entry containing `name` and best-effort delete its
    /// backing vault file (a file that was never created, or is already
    /// gone, is not an error).  Clears the default pointer when it
    /// referred to the removed entry.  Returns the backing path.
    pub fn delete_vault(&mut self, name: &str) -> Result<PathBuf> {
        let index = self
            .entry_index(name)
            .ok_or_else(|| PassVaultError::VaultNotFound(name.to_string()))?;

        let entry = self.vaults.remove(index);
        if entry.names.iter().any(|n| n == &self.default_vault) {
            self.default_vault.clear();
        }

        let backing = PathBuf::from(&entry.path);
        match fs::remove_file(&backing) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(backing)
    }

    /// Point the default at an existing vault name or alias.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if self.entry_index(name).is_none() {
            return Err(PassVaultError::VaultNotFound(name.to_string()));
        }
        self.default_vault = name.to_string();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookups (never an error)
    // ------------------------------------------------------------------

    /// Path registered for `name` (canonical or alias), if any.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.entry_index(name)
            .map(|index| self.vaults[index].path.as_str())
    }

    /// The default vault name; `None` when unset.
    pub fn default_vault(&self) -> Option<&str> {
        if self.default_vault.is_empty() {
            None
        } else {
            Some(&self.default_vault)
        }
    }

    /// Canonical (first) name of every vault, in registry order.
    pub fn canonical_names(&self) -> Vec<&str> {
        self.vaults
            .iter()
            .filter_map(|entry| entry.names.first().map(String::as_str))
            .collect()
    }

    /// All entries, in registry order.
    pub fn entries(&self) -> &[VaultEntry] {
        &self.vaults
    }
}

// ── Tests ────────────────────────────────────────────────────────────
