//! Human-readable business identifiers.
//!
//! Every content record carries an immutable identifier of the form
//! `PREFIX-XXXXXXXX`, where the suffix is the first segment of a random
//! UUID v4 rendered as eight uppercase hex digits.

use uuid::Uuid;

/// Length of the hex suffix after the dash.
pub const SUFFIX_LEN: usize = 8;

/// Generates a new business identifier with the given prefix.
///
/// ```
/// use shared::business_id::generate;
///
/// let id = generate("ENQ");
/// assert!(id.starts_with("ENQ-"));
/// assert_eq!(id.len(), 12);
/// ```
pub fn generate(prefix: &str) -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, simple[..SUFFIX_LEN].to_uppercase())
}

/// Returns true when `value` is a well-formed identifier for `prefix`.
pub fn is_valid(prefix: &str, value: &str) -> bool {
    match split(value) {
        Some((p, _)) => p == prefix,
        None => false,
    }
}

/// Splits an identifier into its prefix and hex suffix.
///
/// Returns `None` unless the suffix is exactly eight uppercase hex digits
/// and the prefix is non-empty uppercase ASCII.
pub fn split(value: &str) -> Option<(&str, &str)> {
    let (prefix, suffix) = value.split_once('-')?;
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    if suffix.len() != SUFFIX_LEN
        || !suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    {
        return None;
    }
    Some((prefix, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_shape() {
        for prefix in ["ENQ", "ANN", "IMG", "SLD", "SYL"] {
            let id = generate(prefix);
            assert_eq!(id.len(), prefix.len() + 1 + SUFFIX_LEN);
            assert!(is_valid(prefix, &id), "{} should be valid", id);
        }
    }

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate("SLD")).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_split() {
        assert_eq!(split("ENQ-1A2B3C4D"), Some(("ENQ", "1A2B3C4D")));
        assert_eq!(split("ENQ-1a2b3c4d"), None);
        assert_eq!(split("ENQ-1A2B3C4"), None);
        assert_eq!(split("ENQ1A2B3C4D"), None);
        assert_eq!(split("-1A2B3C4D"), None);
        assert_eq!(split("enq-1A2B3C4D"), None);
    }

    #[test]
    fn test_is_valid_checks_prefix() {
        assert!(is_valid("ANN", "ANN-00FF00FF"));
        assert!(!is_valid("ANN", "IMG-00FF00FF"));
        assert!(!is_valid("ANN", "ANN-00GG00FF"));
    }

    #[test]
    fn test_uuid_is_not_a_business_id() {
        let uuid = Uuid::new_v4().to_string();
        assert!(split(&uuid).is_none());
    }
}
