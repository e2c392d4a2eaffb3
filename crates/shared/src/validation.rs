//! Common validation utilities.

use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value cannot be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a call-to-action link: an absolute http(s) URL or a site path.
pub fn validate_link(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let ok = if let Some(rest) = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    {
        !rest.is_empty() && !rest.starts_with('/') && !rest.contains(char::is_whitespace)
    } else {
        value.starts_with('/') && !value.starts_with("//") && !value.contains(char::is_whitespace)
    };

    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("link");
        err.message = Some("Link must be an http(s) URL or a path starting with '/'".into());
        Err(err)
    }
}

/// Validates that a display order is a positive position.
pub fn validate_order(order: i32) -> Result<(), ValidationError> {
    if order >= 1 {
        Ok(())
    } else {
        let mut err = ValidationError::new("order_range");
        err.message = Some("Order must be at least 1".into());
        Err(err)
    }
}
