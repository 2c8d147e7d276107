//! TablePrefix value object - validated database table-name prefix

use std::str::FromStr;

use crate::error::InstallError;

/// Prefix prepended to every package table name (e.g. `voy_`)
///
/// Always non-empty and identifier-safe: ASCII letters, digits and
/// underscores, not starting with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TablePrefix(String);

impl TablePrefix {
    pub fn new(value: impl Into<String>) -> Result<Self, InstallError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InstallError::InvalidPrefix(value))
        }
    }

    /// Parse an optional CLI value; empty means "no prefix"
    pub fn from_option(value: Option<&str>) -> Result<Option<Self>, InstallError> {
        match value {
            None => Ok(None),
            Some(v) if v.is_empty() => Ok(None),
            Some(v) => Self::new(v).map(Some),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl FromStr for TablePrefix {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for TablePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TablePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
