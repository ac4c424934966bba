//! `passvault vault rename` — rename a vault, keeping its aliases.

use crate::cli::output;
use crate::cli::{load_registry, Cli};
use crate::errors::Result;

/// Execute the `vault rename` command.
pub fn execute(cli: &Cli, old_name: &str, new_name: &str) -> Result<()> {
    let mut registry = load_registry(cli)?;

    registry.rename_vault(old_name, new_name)?;
    registry.save()?;

    output::success(&format!("Vault '{old_name}' renamed to '{new_name}'"));
    Ok(())
}
