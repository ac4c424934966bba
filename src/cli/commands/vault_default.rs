//! `passvault vault default` — show or set the default vault.

use crate::cli::output;
use crate::cli::{load_registry, Cli};
use crate::errors::Result;

/// Execute the `vault default` command.
pub fn execute(cli: &Cli, name: Option<&str>) -> Result<()> {
    let mut registry = load_registry(cli)?;

    match name {
        Some(name) => {
            registry.set_default(name)?;
            registry.save()?;
            output::success(&format!("Default vault set to '{name}'"));
        }
        None => match registry.default_vault() {
            Some(default) => println!("{default}"),
            None => {
                output::info("No default vault is set.");
                output::tip("Run `passvault vault default <name>` to set one.");
            }
        },
    }

    Ok(())
}
