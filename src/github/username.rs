use crate::error::{Error, Result};

/// GitHub caps account names at 39 characters.
pub const MAX_USERNAME_LEN: usize = 39;

/// Validates a GitHub account name and returns the trimmed form.
///
/// Accepted: 1-39 ASCII alphanumerics with single interior hyphens, starting
/// and ending alphanumeric. Blank input is reported separately from a
/// malformed one so callers can surface distinct messages.
pub fn validate(raw: &str) -> Result<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::MissingUsername);
    }
    if name.len() > MAX_USERNAME_LEN || !has_valid_shape(name) {
        return Err(Error::InvalidUsername(name.to_string()));
    }
    Ok(name)
}

fn has_valid_shape(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut prev_hyphen = false;

    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii_alphanumeric() {
            prev_hyphen = false;
        } else if b == b'-' {
            // No leading, trailing, or doubled hyphens.
            if i == 0 || i == bytes.len() - 1 || prev_hyphen {
                return false;
            }
            prev_hyphen = true;
        } else {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_hyphenated_names() {
        assert_eq!(validate("octocat").unwrap(), "octocat");
        assert_eq!(validate("abc-d").unwrap(), "abc-d");
        assert_eq!(validate("a-b-c").unwrap(), "a-b-c");
        assert_eq!(validate("x").unwrap(), "x");
        assert_eq!(validate("User42").unwrap(), "User42");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate("  octocat  ").unwrap(), "octocat");
    }

    #[test]
    fn test_rejects_blank_input_separately() {
        assert!(matches!(validate(""), Err(Error::MissingUsername)));
        assert!(matches!(validate("   "), Err(Error::MissingUsername)));
    }

    #[test]
    fn test_rejects_doubled_hyphen() {
        assert!(matches!(
            validate("abc--d"),
            Err(Error::InvalidUsername(_))
        ));
    }

    #[test]
    fn test_rejects_hyphen_at_either_end() {
        assert!(validate("-abc").is_err());
        assert!(validate("abc-").is_err());
    }

    #[test]
    fn test_rejects_underscore_and_other_symbols() {
        assert!(validate("a_b").is_err());
        assert!(validate("a.b").is_err());
        assert!(validate("a b").is_err());
    }

    #[test]
    fn test_rejects_over_length_names() {
        let long = "a".repeat(MAX_USERNAME_LEN + 1);
        assert!(validate(&long).is_err());
        let at_limit = "a".repeat(MAX_USERNAME_LEN);
        assert!(validate(&at_limit).is_ok());
    }
}
