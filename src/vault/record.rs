//! Credential records stored inside a vault.
//!
//! A record is a loose field dictionary with two mandatory keys.  The
//! named fields get struct fields; everything else lands in `extra`,
//! which keeps insertion order (`serde_json` is built with
//! `preserve_order`) and is serialized inline next to the named fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{PassVaultError, Result};

/// Ordered field map used both for record input and for extra
/// attributes.
pub type FieldMap = Map<String, Value>;

/// A single credential record.
///
/// `(site, login)` identifies a record for single-record operations;
/// `site` alone keys bulk rename and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// The site this credential belongs to (e.g. "example.com").
    pub site: String,

    /// The login / account name on that site.
    pub login: String,

    /// Encrypted password envelope (base64 of IV || ciphertext), if set.
    /// Always ciphertext — plaintext passwords never enter a `Record`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Arbitrary additional plaintext attributes, in insertion order.
    #[serde(flatten)]
    pub extra: FieldMap,
}

impl Record {
    /// Returns `true` if this record is the `(site, login)` target.
    pub fn matches(&self, site: &str, login: &str) -> bool {
        self.site == site && self.login == login
    }

    /// Returns `true` if the record already carries `key`.
    pub fn has_field(&self, key: &str) -> bool {
        match key {
            "site" | "login" => true,
            "password" => self.password.is_some(),
            _ => self.extra.contains_key(key),
        }
    }

    /// Set `key` to `value`, dispatching between the named fields and
    /// the extra map.  The named fields only accept plain strings; for
    /// `password` the value must already be an envelope.
    pub fn set_field(&mut self, key: &str, value: Value) -> Result<()> {
        match key {
            "site" => self.site = expect_string(key, value)?,
            "login" => self.login = expect_string(key, value)?,
            "password" => self.password = Some(expect_string(key, value)?),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }
}

/// Unwrap a string value or report which field carried the wrong type.
fn expect_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(PassVaultError::InvalidFieldValue(key.to_string())),
    }
}
