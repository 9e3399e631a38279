//! Single-value command implementation

use super::CheckCommandError;
use crate::manifest::Value;
use crate::validate::Validator;

/// Decode a CLI argument: a JSON literal, or the raw text when `raw` is set
pub fn decode_value(input: &str, raw: bool) -> Result<Value, CheckCommandError> {
    if raw {
        return Ok(Value::from(input));
    }
    let json: serde_json::Value = serde_json::from_str(input)?;
    Ok(Value::from(json))
}

/// Run one validator on one value and print the verdict
pub fn check_value(validator: Validator, input: &str, raw: bool) -> Result<bool, CheckCommandError> {
    let value = decode_value(input, raw)?;
    let valid = validator.check(&value);
    println!("{}: {}", validator, if valid { "valid" } else { "invalid" });
    Ok(valid)
}
