//! `passvault rename-site` — rename a site across every record.

use crate::cli::output;
use crate::cli::{load_registry, prompt_passphrase, resolve_vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `rename-site` command.
pub fn execute(cli: &Cli, site: &str, new_site: &str) -> Result<()> {
    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;

    let passphrase = prompt_passphrase()?;
    let mut store = VaultStore::open(&path, &passphrase)?;

    let changed = store.update_all_sites(site, new_site)?;
    store.save()?;

    output::success(&format!(
        "Renamed '{site}' to '{new_site}' on {changed} record(s)"
    ));
    Ok(())
}
