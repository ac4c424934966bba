//! `passvault show` — display one record with its password decrypted.

use zeroize::Zeroizing;

use crate::cli::{load_registry, prompt_passphrase, resolve_vault_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `show` command.
pub fn execute(cli: &Cli, site: &str, login: &str) -> Result<()> {
    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;

    let passphrase = prompt_passphrase()?;
    let store = VaultStore::open(&path, &passphrase)?;

    let record = store
        .record(site, login)
        .ok_or_else(|| PassVaultError::RecordNotFound {
            site: site.to_string(),
            login: login.to_string(),
        })?;

    // Decrypt exactly once, for display only.
    let password = match &record.password {
        Some(envelope) => Some(Zeroizing::new(store.decrypt_field(envelope)?)),
        None => None,
    };

    println!("site: {}", record.site);
    println!("login: {}", record.login);
    if let Some(password) = &password {
        println!("password: {}", password.as_str());
    }
    for (key, value) in &record.extra {
        match value.as_str() {
            Some(text) => println!("{key}: {text}"),
            None => println!("{key}: {value}"),
        }
    }

    Ok(())
}
