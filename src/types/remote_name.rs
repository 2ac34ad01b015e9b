// ABOUTME: Validated git remote name newtype.
// ABOUTME: Remote names are a conservative alphanumeric-plus-separator set.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteNameError {
    #[error("remote name cannot be empty")]
    Empty,

    #[error("remote name cannot start with '-'")]
    StartsWithDash,

    #[error("invalid character in remote name: '{0}'")]
    InvalidChar(char),
}

/// A named git remote, e.g. `origin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteName(String);

impl RemoteName {
    pub fn new(value: &str) -> Result<Self, RemoteNameError> {
        if value.is_empty() {
            return Err(RemoteNameError::Empty);
        }

        if value.starts_with('-') {
            return Err(RemoteNameError::StartsWithDash);
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.') {
                return Err(RemoteNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
