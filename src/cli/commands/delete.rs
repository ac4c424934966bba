//! `passvault delete` — remove one record, or a whole site.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_registry, prompt_passphrase, resolve_vault_path, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, site: &str, login: Option<&str>, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let what = match login {
            Some(login) => format!("the record for {login}@{site}"),
            None => format!("every record for site '{site}'"),
        };
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {what}?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;

    let passphrase = prompt_passphrase()?;
    let mut store = VaultStore::open(&path, &passphrase)?;

    let removed = match login {
        Some(login) => store.delete_record(site, login)?,
        None => store.delete_all_for_site(site)?,
    };
    store.save()?;

    output::success(&format!("Deleted {removed} record(s)"));
    Ok(())
}
