//! Validated name of the record set a cursor is opened over.

use std::fmt;

use thiserror::Error;

/// Record set served by `GET /lazy-users` unless configured otherwise.
pub const DEFAULT_RECORD_SET: &str = "lazy_user_records";

/// PostgreSQL truncates identifiers beyond this many bytes.
const MAX_IDENTIFIER_LEN: usize = 63;

/// Validation errors returned by [`RecordSetName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordSetNameError {
    /// The name was empty.
    #[error("record set name must not be empty")]
    Empty,
    /// The name exceeds the identifier length limit.
    #[error("record set name must be at most {max} bytes")]
    TooLong { max: usize },
    /// The name contains characters outside `[A-Za-z0-9_]` or starts with a digit.
    #[error("record set name `{name}` must start with a letter or underscore and contain only letters, digits or underscores")]
    InvalidCharacters { name: String },
}

/// Name of a table that can be streamed through a cursor.
///
/// Only plain SQL identifiers are accepted, so the name can be quoted into a
/// query without escaping concerns.
///
/// # Examples
/// ```
/// use backend::domain::RecordSetName;
///
/// let name = RecordSetName::new("lazy_user_records").expect("valid identifier");
/// assert_eq!(name.as_ref(), "lazy_user_records");
/// assert!(RecordSetName::new("users; drop table users").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordSetName(String);

impl RecordSetName {
    /// Validate and construct a record set name.
    pub fn new(name: impl Into<String>) -> Result<Self, RecordSetNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecordSetNameError::Empty);
        }
        if name.len() > MAX_IDENTIFIER_LEN {
            return Err(RecordSetNameError::TooLong {
                max: MAX_IDENTIFIER_LEN,
            });
        }
        let mut chars = name.chars();
        let starts_well = chars
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
        let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !(starts_well && rest_ok) {
            return Err(RecordSetNameError::InvalidCharacters { name });
        }
        Ok(Self(name))
    }

    /// Double-quoted form suitable for interpolation into SQL.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Default for RecordSetName {
    fn default() -> Self {
        Self(DEFAULT_RECORD_SET.to_owned())
    }
}

impl AsRef<str> for RecordSetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lazy_user_records")]
    #[case("_staging")]
    #[case("Users2")]
    fn accepts_plain_identifiers(#[case] name: &str) {
        let parsed = RecordSetName::new(name).expect("valid identifier");
        assert_eq!(parsed.as_ref(), name);
        assert_eq!(parsed.quoted(), format!("\"{name}\""));
    }

    #[rstest]
    #[case("", RecordSetNameError::Empty)]
    #[case("2fast", RecordSetNameError::InvalidCharacters { name: "2fast".into() })]
    #[case("users\"--", RecordSetNameError::InvalidCharacters { name: "users\"--".into() })]
    #[case("public.users", RecordSetNameError::InvalidCharacters { name: "public.users".into() })]
    fn rejects_unsafe_names(#[case] name: &str, #[case] expected: RecordSetNameError) {
        assert_eq!(RecordSetName::new(name), Err(expected));
    }

    #[rstest]
    fn rejects_overlong_names() {
        let name = "a".repeat(MAX_IDENTIFIER_LEN + 1);
        assert_eq!(
            RecordSetName::new(name),
            Err(RecordSetNameError::TooLong {
                max: MAX_IDENTIFIER_LEN
            })
        );
    }

    #[rstest]
    fn default_is_lazy_user_records() {
        assert_eq!(RecordSetName::default().as_ref(), DEFAULT_RECORD_SET);
    }
}
