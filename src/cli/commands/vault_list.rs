//! `passvault vault list` — list registered vaults.

use crate::cli::output;
use crate::cli::{load_registry, Cli};
use crate::errors::Result;

/// Execute the `vault list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let registry = load_registry(cli)?;
    output::print_vaults_table(&registry);
    Ok(())
}
