//! `passvault vault new` — create a vault file and register it.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::{home_dir, load_registry, prompt_new_passphrase, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `vault new` command.
pub fn execute(cli: &Cli, name: &str, path: Option<&str>) -> Result<()> {
    let mut registry = load_registry(cli)?;

    if registry.path_for(name).is_some() {
        output::info(&format!("Vault '{name}' is already registered."));
        return Ok(());
    }

    let vault_path = match path {
        Some(p) => PathBuf::from(p),
        None => home_dir(cli)?.join(format!("vault.{name}.json")),
    };

    // Creates the file when missing; an existing file at the path is
    // opened instead, so its passphrase must match.
    let passphrase = prompt_new_passphrase()?;
    let store = VaultStore::open(&vault_path, &passphrase)?;

    registry.add_vault(name, &vault_path.to_string_lossy());
    registry.save()?;

    output::success(&format!(
        "Vault '{}' created at {}",
        name,
        store.path().display()
    ));
    output::tip(&format!("'{name}' is now the default vault."));
    output::tip("Run `passvault add <site> <login>` to store a credential.");

    Ok(())
}
