//! `passvault vault delete` — drop a vault from the registry and
//! delete its backing file.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_registry, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `vault delete` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete vault '{name}' and its file? Records are not recoverable."
            ))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut registry = load_registry(cli)?;
    let backing = registry.delete_vault(name)?;
    registry.save()?;

    output::success(&format!(
        "Vault '{}' removed ({})",
        name,
        backing.display()
    ));
    Ok(())
}
