//! `passvault vault alias` — add an alias for an existing vault.

use crate::cli::output;
use crate::cli::{load_registry, Cli};
use crate::errors::Result;
use crate::registry::AliasOutcome;

/// Execute the `vault alias` command.
pub fn execute(cli: &Cli, name: &str, alias: &str) -> Result<()> {
    let mut registry = load_registry(cli)?;

    match registry.add_alias(name, alias) {
        AliasOutcome::Added => {
            registry.save()?;
            output::success(&format!("Alias '{alias}' added for vault '{name}'"));
        }
        AliasOutcome::NameTaken => {
            output::warning(&format!(
                "'{alias}' is already used by a vault — nothing changed."
            ));
        }
        AliasOutcome::UnknownVault => {
            output::warning(&format!("No vault named '{name}' — nothing changed."));
        }
    }

    Ok(())
}
