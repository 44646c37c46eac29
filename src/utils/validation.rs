use crate::utils::error::{BindError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BindError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Tag keys follow the `key:"value"` annotation grammar, so they must be a
/// plain identifier without quotes, colons or spaces.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").map_err(|e| BindError::ConfigError {
        message: format!("identifier pattern: {}", e),
    })?;
    if !re.is_match(value) {
        return Err(BindError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be an identifier (letters, digits and underscores)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(BindError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
