use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong passphrase or corrupted data")]
    DecryptFailure,

    #[error("Passphrase hashing failed: {0}")]
    HashingFailed(String),

    // --- Vault errors ---
    #[error("Vault file at {0} is damaged and cannot be parsed")]
    VaultDamaged(PathBuf),

    #[error("Wrong passphrase for vault at {0}")]
    WrongPassphrase(PathBuf),

    #[error("Record is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{0}' must be a plain string value")]
    InvalidFieldValue(String),

    #[error("No record found for site '{site}' and login '{login}'")]
    RecordNotFound { site: String, login: String },

    #[error("No records found for site '{0}'")]
    SiteNotFound(String),

    #[error("Cannot remove the master passphrase while {0} encrypted password(s) remain — rotate to a new passphrase instead")]
    PassphraseStillRequired(usize),

    // --- Registry errors ---
    #[error("Vault '{0}' is not in the registry")]
    VaultNotFound(String),

    #[error("Name '{0}' is already used by a vault in the registry")]
    NameInUse(String),

    #[error("No default vault is set — pass --vault or run `passvault vault default <name>`")]
    NoDefaultVault,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
