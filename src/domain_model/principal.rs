use super::Authority;
use std::collections::BTreeSet;
use std::fmt;

/// A password prefixed with the id of the encoder that produced it,
/// e.g. `{noop}secret`.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedPassword(String);

impl EncodedPassword {
    pub fn new(encoder_id: &str, encoded: &str) -> Self {
        EncodedPassword(format!("{{{}}}{}", encoder_id, encoded))
    }

    /// Wraps an already prefixed value without checking it.
    pub fn from_raw(value: impl Into<String>) -> Self {
        EncodedPassword(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits `{id}rest` into `("id", "rest")`.
    pub fn split(&self) -> Option<(&str, &str)> {
        let rest = self.0.strip_prefix('{')?;
        let (id, encoded) = rest.split_once('}')?;
        Some((id, encoded))
    }
}

impl fmt::Debug for EncodedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[PROTECTED]")
    }
}

/// The authenticated identity handed to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub password: EncodedPassword,
    pub authorities: BTreeSet<Authority>,
}

impl Principal {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_password_splits_on_first_closing_brace() {
        let password = EncodedPassword::new("noop", "se}cret");
        assert_eq!(password.as_str(), "{noop}se}cret");
        assert_eq!(password.split(), Some(("noop", "se}cret")));
    }

    #[test]
    fn encoded_password_without_prefix_does_not_split() {
        assert_eq!(EncodedPassword::from_raw("secret").split(), None);
        assert_eq!(EncodedPassword::from_raw("{noop").split(), None);
    }

    #[test]
    fn debug_hides_password() {
        let principal = Principal {
            username: "alice".to_string(),
            password: EncodedPassword::new("noop", "secret"),
            authorities: BTreeSet::from([Authority::from("READ")]),
        };
        let printed = format!("{:?}", principal);
        assert!(printed.contains("[PROTECTED]"));
        assert!(!printed.contains("secret"));
        assert!(principal.has_authority("READ"));
        assert!(!principal.has_authority("WRITE"));
    }
}
