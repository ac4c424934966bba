//! `passvault list` — display the vault's records in a table.

use crate::cli::output;
use crate::cli::{load_registry, prompt_passphrase, resolve_vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;

    let passphrase = prompt_passphrase()?;
    let store = VaultStore::open(&path, &passphrase)?;

    output::info(&format!("{} record(s)", store.record_count()));
    output::print_records_table(store.records());

    Ok(())
}
