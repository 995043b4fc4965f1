//! Explicit DTO validation.
//!
//! Each request DTO implements [`Validate`]; handlers call it before the
//! service is invoked. The helpers return the first violation found.

use crate::{errors::ModelError, ids};

pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ModelError> {
        match self {
            Some(v) => v.validate(),
            None => Ok(()),
        }
    }
}

/// Character count must lie in `min..=max`.
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ModelError> {
    let n = value.chars().count();
    if n < min || n > max {
        if min == max {
            return Err(ModelError::validation(format!("{field} must be exactly {min} characters")));
        }
        return Err(ModelError::validation(format!("{field} must be between {min} and {max} characters")));
    }
    Ok(())
}

pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn not_blank(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Pragmatic address check: `local@domain.tld`, no whitespace.
pub fn email(field: &str, value: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::validation(format!("{field} must be a valid email address"));
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-')) {
        return Err(invalid());
    }
    Ok(())
}

/// Well-formed id, optionally required to carry a given type prefix.
pub fn resource_id(field: &str, value: &str, prefix: Option<&str>) -> Result<(), ModelError> {
    let ok = match prefix {
        Some(p) => ids::has_prefix(value, p),
        None => ids::is_resource_id(value),
    };
    if !ok {
        return Err(ModelError::validation(format!("{field} must be a valid resource id")));
    }
    Ok(())
}

/// ISO 3166-1 alpha-2 shape, e.g. `CA`.
pub fn country_code(field: &str, value: &str) -> Result<(), ModelError> {
    if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(ModelError::validation(format!("{field} must be a two-letter country code")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds() {
        assert!(length("name", "ab", 2, 50).is_ok());
        assert!(length("name", "a", 2, 50).is_err());
        assert!(length("name", &"x".repeat(51), 2, 50).is_err());
        // counts characters, not bytes
        assert!(length("name", "éé", 2, 2).is_ok());
        let msg = length("company_id", "short", 25, 25).unwrap_err().to_string();
        assert!(msg.contains("exactly 25"));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last+tag@example.com", "x@sub.domain.org"] {
            assert!(email("email", ok).is_ok(), "{ok}");
        }
        for bad in ["", "plain", "@example.com", "a@", "a@b", "a@b..com", "a b@c.com", "a@b@c.com", "a@-b.com"] {
            assert!(email("email", bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn resource_id_prefix_check() {
        let id = ids::generate("com_");
        assert!(resource_id("id", &id, None).is_ok());
        assert!(resource_id("company_id", &id, Some("com_")).is_ok());
        assert!(resource_id("company_id", &id, Some("cus_")).is_err());
        assert!(resource_id("id", "nope", None).is_err());
    }

    #[test]
    fn country_codes() {
        assert!(country_code("country", "CA").is_ok());
        assert!(country_code("country", "ca").is_err());
        assert!(country_code("country", "CAN").is_err());
    }
}
