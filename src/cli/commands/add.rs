//! `passvault add` — add a record, or merge new fields into an
//! existing one.

use serde_json::Value;
use zeroize::Zeroizing;

use crate::cli::fields::parse_fields;
use crate::cli::output;
use crate::cli::{load_registry, prompt_passphrase, resolve_vault_path, Cli};
use crate::crypto::generate_password;
use crate::errors::{PassVaultError, Result};
use crate::vault::{AddOutcome, FieldMap, VaultStore};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    site: &str,
    login: &str,
    password: Option<Option<&str>>,
    generate: Option<usize>,
    field_args: &[String],
) -> Result<()> {
    // Determine the password value, if any, from one of three sources.
    let password_value: Option<Zeroizing<String>> = if let Some(length) = generate {
        // Source 1: generated. Shown once so the user can keep a copy.
        let generated = Zeroizing::new(generate_password(length));
        output::info("Generated password (shown once):");
        println!("{}", generated.as_str());
        Some(generated)
    } else {
        match password {
            // Source 2: inline value on the command line.
            Some(Some(value)) => {
                output::warning(
                    "Password provided on command line — it may appear in shell history.",
                );
                Some(Zeroizing::new(value.to_string()))
            }
            // Source 3: interactive secure prompt.
            Some(None) => {
                let pw = dialoguer::Password::new()
                    .with_prompt(format!("Enter password for {login}@{site}"))
                    .interact()
                    .map_err(|e| {
                        PassVaultError::CommandFailed(format!("password prompt: {e}"))
                    })?;
                Some(Zeroizing::new(pw))
            }
            None => None,
        }
    };

    // Assemble the field map in display order: site, login, password,
    // then the extra fields in the order they were given.
    let mut fields = FieldMap::new();
    fields.insert("site".to_string(), Value::String(site.to_string()));
    fields.insert("login".to_string(), Value::String(login.to_string()));
    if let Some(pw) = &password_value {
        fields.insert("password".to_string(), Value::String(pw.to_string()));
    }
    for (key, value) in parse_fields(field_args)? {
        if key == "site" || key == "login" || key == "password" {
            return Err(PassVaultError::CommandFailed(format!(
                "field '{key}' is set by its own argument — it cannot be given as key=value"
            )));
        }
        fields.insert(key, value);
    }

    // Open the vault, add the record, and save.
    let registry = load_registry(cli)?;
    let path = resolve_vault_path(cli, &registry)?;
    let passphrase = prompt_passphrase()?;
    let mut store = VaultStore::open(&path, &passphrase)?;

    let outcome = store.add_record(fields)?;
    store.save()?;

    match outcome {
        AddOutcome::Created => output::success(&format!(
            "Record added for {login}@{site} ({} total)",
            store.record_count()
        )),
        AddOutcome::Merged => output::success(&format!(
            "Merged new fields into the existing record for {login}@{site}"
        )),
    }

    Ok(())
}
