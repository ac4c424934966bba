//! Shared `key=value` field-argument parsing.
//!
//! Used by the `add` and `update` commands.

use serde_json::Value;

use crate::errors::{PassVaultError, Result};
use crate::vault::FieldMap;

/// Parse one `key=value` argument.
///
/// The key is trimmed and must be non-empty; the value is kept verbatim
/// and may contain further `=` signs.
pub fn parse_field(argument: &str) -> Result<(String, String)> {
    let (key, value) = argument.split_once('=').ok_or_else(|| {
        PassVaultError::CommandFailed(format!(
            "field '{argument}' is not of the form key=value"
        ))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(PassVaultError::CommandFailed(format!(
            "field '{argument}' is not of the form key=value"
        )));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Parse a list of `key=value` arguments into an ordered field map.
///
/// A key given twice keeps its original position with the last value.
pub fn parse_fields(arguments: &[String]) -> Result<FieldMap> {
    let mut map = FieldMap::new();
    for argument in arguments {
        let (key, value) = parse_field(argument)?;
        map.insert(key, Value::String(value));
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_pair() {
        assert_eq!(
            parse_field("url=https://ex.com").unwrap(),
            ("url".to_string(), "https://ex.com".to_string())
        );
    }

    #[test]
    fn parse_value_with_equals() {
        assert_eq!(
            parse_field("note=a=b=c").unwrap(),
            ("note".to_string(), "a=b=c".to_string())
        );
    }

    #[test]
    fn parse_empty_value() {
        assert_eq!(
            parse_field("note=").unwrap(),
            ("note".to_string(), String::new())
        );
    }

    #[test]
    fn parse_rejects_missing_equals() {
        assert!(parse_field("noequals").is_err());
    }

    #[test]
    fn parse_rejects_empty_key() {
        assert!(parse_field("=value").is_err());
        assert!(parse_field("  =value").is_err());
    }

    #[test]
    fn parse_fields_preserves_order() {
        let args = vec![
            "zeta=1".to_string(),
            "alpha=2".to_string(),
            "mid=3".to_string(),
        ];
        let map = parse_fields(&args).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn parse_fields_last_value_wins() {
        let args = vec!["note=first".to_string(), "note=second".to_string()];
        let map = parse_fields(&args).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["note"], "second");
    }
}
