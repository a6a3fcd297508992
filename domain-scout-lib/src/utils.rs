//! Input validation helpers.
//!
//! Validation here is deliberately shallow: the resolver handles malformed
//! names without crashing (a dotless input routes to the generic RDAP
//! endpoint), so we only reject input that is clearly not a name at all.

use crate::error::DomainScoutError;

/// Validate a domain name supplied to the resolver.
///
/// Accepts anything of the form `label(.label)+` plus bare labels; deeper
/// correctness checks happen implicitly during lookup.
pub fn validate_domain(domain: &str) -> Result<(), DomainScoutError> {
    let domain = domain.trim();

    if domain.is_empty() {
        return Err(DomainScoutError::invalid_input(
            domain,
            "domain name cannot be empty",
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(DomainScoutError::invalid_input(
            domain,
            "domain name cannot start or end with a dot",
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '.')
    {
        return Err(DomainScoutError::invalid_input(
            domain,
            "domain name may only contain letters, digits, hyphens and dots",
        ));
    }

    Ok(())
}

/// Validate a scan keyword (a base name without TLD).
pub fn validate_keyword(keyword: &str) -> Result<(), DomainScoutError> {
    let keyword = keyword.trim();

    if keyword.is_empty() {
        return Err(DomainScoutError::invalid_input(
            keyword,
            "keyword cannot be empty",
        ));
    }

    if keyword.contains('.') {
        return Err(DomainScoutError::invalid_input(
            keyword,
            "keyword must be a base name without TLD",
        ));
    }

    if keyword.starts_with('-') || keyword.ends_with('-') {
        return Err(DomainScoutError::invalid_input(
            keyword,
            "keyword cannot start or end with a hyphen",
        ));
    }

    if !keyword.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(DomainScoutError::invalid_input(
            keyword,
            "keyword may only contain letters, digits and hyphens",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain() {
        assert!(validate_domain("example.com").is_ok());
        assert!(validate_domain("sub.example.co.uk").is_ok());
        // Dotless input is accepted; it routes to the generic endpoint
        assert!(validate_domain("localhost").is_ok());

        assert!(validate_domain("").is_err());
        assert!(validate_domain(".com").is_err());
        assert!(validate_domain("example.").is_err());
        assert!(validate_domain("exa mple.com").is_err());
    }

    #[test]
    fn test_validate_keyword() {
        assert!(validate_keyword("mybrand").is_ok());
        assert!(validate_keyword("my-brand").is_ok());
        assert!(validate_keyword("brand42").is_ok());

        assert!(validate_keyword("").is_err());
        assert!(validate_keyword("my.brand").is_err());
        assert!(validate_keyword("-brand").is_err());
        assert!(validate_keyword("brand-").is_err());
        assert!(validate_keyword("my brand").is_err());
    }
}
