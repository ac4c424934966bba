//! `passvault update` — overwrite fields on an existing record.

use crate::cli::fields::parse_fields;
use crate::cli::output;
use crate::cli::{load_registry, prompt_passphrase, resolve_vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `update` command.
pub fn execute(cli: &Cli, site: &str, login: &str, field_args: &[String]) -> Result<()> {
    let fields = parse_fields(field_args)?;

    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;

    let passphrase = prompt_passphrase()?;
    let mut store = VaultStore::open(&path, &passphrase)?;

    store.update_record(site, login, fields)?;
    store.save()?;

    output::success(&format!("Record for {login}@{site} updated"));
    Ok(())
}
