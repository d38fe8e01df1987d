//! Email address format rules.
//!
//! An address passes when it contains exactly one `@` separating a
//! non-empty local part from a domain that contains at least one `.`.
//! Each check reports the specific rule it enforces, so the caller can
//! tell a missing `@` apart from a bad domain.

/// Checks an address against the email format rules.
///
/// Returns the violated rule as a human-readable message.
pub fn check(address: &str) -> Result<(), String> {
    let Some((local, domain)) = address.split_once('@') else {
        return Err("not a valid email address: missing an @-sign".to_string());
    };

    if domain.contains('@') {
        return Err("not a valid email address: more than one @-sign".to_string());
    }

    if local.is_empty() {
        return Err("not a valid email address: empty name before the @-sign".to_string());
    }

    if domain.is_empty() {
        return Err("not a valid email address: empty domain after the @-sign".to_string());
    }

    if !domain.contains('.') {
        return Err(format!(
            "not a valid email address: domain '{domain}' must contain a '.'"
        ));
    }

    Ok(())
}
