//! `passvault rotate-key` — change the vault's master passphrase.
//!
//! Opens the vault with the current passphrase, re-encrypts every
//! password envelope under the new one (same salt), replaces the
//! stored hash, and writes the vault atomically.  The store guarantees
//! the rotation is all-or-nothing.

use crate::cli::output;
use crate::cli::{
    load_registry, prompt_new_passphrase, prompt_passphrase, resolve_vault_path, Cli,
};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `rotate-key` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;

    // 1. Open the vault with the current passphrase.
    output::info("Enter the current vault passphrase.");
    let current = prompt_passphrase()?;
    let mut store = VaultStore::open(&path, &current)?;

    // 2. Prompt for the new passphrase.
    output::info("Choose the new vault passphrase.");
    let new_passphrase = prompt_new_passphrase()?;

    // 3. Rotate in memory, then persist.
    let rotated = store.rotate_master_key(&new_passphrase)?;
    store.save()?;

    if new_passphrase.is_empty() {
        output::success("Passphrase removed — the vault no longer requires one.");
    } else {
        output::success(&format!(
            "Passphrase rotated ({rotated} password(s) re-encrypted)"
        ));
    }

    Ok(())
}
