//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod fields;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};
use crate::registry::Registry;

/// File name of the registry inside the PassVault home directory.
const REGISTRY_FILE_NAME: &str = "registry.json";

/// PassVault CLI: encrypted per-site credential manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Encrypted per-site password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault to operate on (default: the registry's default vault)
    #[arg(short, long, global = true, env = "PASSVAULT_VAULT")]
    pub vault: Option<String>,

    /// Data directory holding the registry and vault files
    /// (default: $PASSVAULT_HOME, then ~/.passvault)
    #[arg(long, global = true)]
    pub home: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Manage vaults and the registry
    Vault {
        #[command(subcommand)]
        action: VaultAction,
    },

    /// Add a record, or merge new fields into an existing one
    Add {
        /// Site the credential belongs to (e.g. example.com)
        site: String,
        /// Login on that site
        login: String,
        /// Set a password: `--password=VALUE` inline, bare `--password`
        /// to be prompted
        #[arg(short, long, num_args = 0..=1, require_equals = true)]
        password: Option<Option<String>>,
        /// Generate a random password of this length instead
        #[arg(short, long, value_name = "LENGTH", conflicts_with = "password")]
        generate: Option<usize>,
        /// Extra fields as key=value pairs
        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Show one record, with its password decrypted
    Show {
        site: String,
        login: String,
    },

    /// List the records in the vault (no decryption)
    List,

    /// Overwrite fields on an existing record
    Update {
        site: String,
        login: String,
        /// Fields to change, as key=value pairs (site, login, and
        /// password may be changed too)
        #[arg(required = true, value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Rename a site across every record that uses it
    RenameSite {
        site: String,
        new_site: String,
    },

    /// Delete one record, or a whole site when login is omitted
    Delete {
        site: String,
        login: Option<String>,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change the vault's master passphrase
    RotateKey,

    /// Generate a random password
    Generate {
        /// Password length
        #[arg(default_value_t = 20)]
        length: usize,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Vault subcommands for registry management.
#[derive(clap::Subcommand)]
pub enum VaultAction {
    /// Create a vault file and register it (becomes the default)
    New {
        /// Name for the new vault
        name: String,
        /// Vault file location (default: <home>/vault.<name>.json)
        #[arg(long)]
        path: Option<String>,
    },

    /// Add an alias for an existing vault
    Alias {
        name: String,
        alias: String,
    },

    /// Rename a vault (its aliases are kept)
    Rename {
        old_name: String,
        new_name: String,
    },

    /// Remove a vault from the registry and delete its file
    Delete {
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List registered vaults
    List,

    /// Show the default vault, or set it when a name is given
    Default {
        name: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the PassVault home directory: `--home` flag, then
/// `$PASSVAULT_HOME`, then `~/.passvault`.
pub fn home_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.home {
        return Ok(PathBuf::from(dir));
    }

    if let Some(dir) = std::env::var_os("PASSVAULT_HOME") {
        return Ok(PathBuf::from(dir));
    }

    match std::env::var_os("HOME") {
        Some(home) => Ok(Path::new(&home).join(".passvault")),
        None => Err(PassVaultError::CommandFailed(
            "cannot locate a home directory — pass --home or set PASSVAULT_HOME".into(),
        )),
    }
}

/// Path of the registry file inside the home directory.
pub fn registry_path(cli: &Cli) -> Result<PathBuf> {
    Ok(home_dir(cli)?.join(REGISTRY_FILE_NAME))
}

/// Load the registry for this invocation, creating it when missing.
pub fn load_registry(cli: &Cli) -> Result<Registry> {
    Registry::load(&registry_path(cli)?)
}

/// Resolve the vault named on the command line (or the default vault)
/// to its backing file path.
pub fn resolve_vault_path(cli: &Cli, registry: &Registry) -> Result<PathBuf> {
    let name = match &cli.vault {
        Some(name) => name.clone(),
        None => registry
            .default_vault()
            .ok_or(PassVaultError::NoDefaultVault)?
            .to_string(),
    };

    match registry.path_for(&name) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Err(PassVaultError::VaultNotFound(name)),
    }
}

/// Get the vault passphrase, trying in order:
/// 1. `PASSVAULT_PASSPHRASE` env var (CI/scripts)
/// 2. Interactive masked prompt
///
/// An empty passphrase is accepted; vaults without a master
/// passphrase are opened with one.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSPHRASE") {
        return Ok(Zeroizing::new(pw));
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault passphrase")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new passphrase with confirmation (vault creation and
/// key rotation).
///
/// Respects `PASSVAULT_NEW_PASSPHRASE`, then `PASSVAULT_PASSPHRASE`,
/// for scripted usage.  An empty passphrase disables verification for
/// the vault, so it is allowed but warned about rather than rejected.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    for var in ["PASSVAULT_NEW_PASSPHRASE", "PASSVAULT_PASSPHRASE"] {
        if let Ok(pw) = std::env::var(var) {
            return Ok(Zeroizing::new(pw));
        }
    }

    let passphrase = dialoguer::Password::new()
        .with_prompt("Choose vault passphrase (empty for none)")
        .with_confirmation(
            "Confirm vault passphrase",
            "Passphrases do not match, try again",
        )
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;

    if passphrase.is_empty() {
        output::warning("No passphrase set — anyone with the vault file can read it.");
    }

    Ok(Zeroizing::new(passphrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn home_flag_wins() {
        let cli = parse(&["passvault", "--home", "/tmp/pv-home", "list"]);
        assert_eq!(home_dir(&cli).unwrap(), PathBuf::from("/tmp/pv-home"));
    }

    #[test]
    fn registry_lives_inside_home() {
        let cli = parse(&["passvault", "--home", "/data", "list"]);
        assert_eq!(
            registry_path(&cli).unwrap(),
            PathBuf::from("/data/registry.json")
        );
    }

    #[test]
    fn vault_flag_is_global() {
        let cli = parse(&["passvault", "list", "--vault", "work"]);
        assert_eq!(cli.vault.as_deref(), Some("work"));
    }

    #[test]
    fn add_parses_bare_password_flag() {
        let cli = parse(&["passvault", "add", "ex.com", "bob", "--password"]);
        match cli.command {
            Commands::Add { password, .. } => assert_eq!(password, Some(None)),
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn add_parses_inline_password_value() {
        let cli = parse(&["passvault", "add", "ex.com", "bob", "--password=hunter2"]);
        match cli.command {
            Commands::Add { password, .. } => {
                assert_eq!(password, Some(Some("hunter2".to_string())));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn add_keeps_extra_fields_separate_from_password() {
        let cli = parse(&[
            "passvault",
            "add",
            "ex.com",
            "bob",
            "--password",
            "url=https://ex.com",
        ]);
        match cli.command {
            Commands::Add {
                password, fields, ..
            } => {
                assert_eq!(password, Some(None));
                assert_eq!(fields, vec!["url=https://ex.com".to_string()]);
            }
            _ => panic!("expected add command"),
        }
    }
}
