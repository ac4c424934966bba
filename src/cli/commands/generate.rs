//! `passvault generate` — print a random password.

use crate::crypto::generate_password;
use crate::errors::Result;

/// Execute the `generate` command.
pub fn execute(length: usize) -> Result<()> {
    println!("{}", generate_password(length));
    Ok(())
}
