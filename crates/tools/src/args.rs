//! Argument extraction for tool calls.
//!
//! Only JSON types are checked here; a wrong type is a caller bug and comes
//! back as `ToolError::InvalidArguments` instead of a status payload.

use healthjournal_core::error::ToolError;
use serde_json::Value;

pub(crate) fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ToolError::InvalidArguments(format!("'{key}' must be a string"))),
        None => Err(ToolError::InvalidArguments(format!("Missing '{key}' argument"))),
    }
}

/// A string argument that may be absent or null; defaults to "".
pub(crate) fn optional_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Null) | None => Ok(""),
        Some(_) => Err(ToolError::InvalidArguments(format!("'{key}' must be a string"))),
    }
}

/// An integer argument. Integers past `i64::MAX` saturate so range checks
/// downstream still see them as too large rather than as a type error.
pub(crate) fn required_int(args: &Value, key: &str) -> Result<i64, ToolError> {
    match args.get(key) {
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
            Ok(n.as_i64().unwrap_or(i64::MAX))
        }
        Some(_) => Err(ToolError::InvalidArguments(format!("'{key}' must be an integer"))),
        None => Err(ToolError::InvalidArguments(format!("Missing '{key}' argument"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings() {
        let args = json!({"name": "aspirin", "n": 3, "empty": null});
        assert_eq!(required_str(&args, "name").unwrap(), "aspirin");
        assert!(required_str(&args, "n").is_err());
        assert!(required_str(&args, "missing").is_err());
        assert_eq!(optional_str(&args, "missing").unwrap(), "");
        assert_eq!(optional_str(&args, "empty").unwrap(), "");
        assert!(optional_str(&args, "n").is_err());
    }

    #[test]
    fn integers() {
        let args = json!({"a": 7, "b": "7", "c": 7.5, "d": -3});
        assert_eq!(required_int(&args, "a").unwrap(), 7);
        assert_eq!(required_int(&args, "d").unwrap(), -3);
        assert!(required_int(&args, "b").is_err());
        assert!(required_int(&args, "c").is_err());
        assert!(required_int(&args, "missing").is_err());
    }

    #[test]
    fn huge_integers_saturate() {
        let args = json!({"big": u64::MAX, "edge": i64::MAX});
        assert_eq!(required_int(&args, "big").unwrap(), i64::MAX);
        assert_eq!(required_int(&args, "edge").unwrap(), i64::MAX);
    }

    #[test]
    fn non_object_arguments() {
        assert!(required_str(&Value::Null, "name").is_err());
        assert_eq!(optional_str(&Value::Null, "notes").unwrap(), "");
    }
}
