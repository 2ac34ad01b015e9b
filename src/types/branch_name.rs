// ABOUTME: Validated git branch name newtype.
// ABOUTME: Enforces the subset of git ref-name rules relevant to branch names.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BranchNameError {
    #[error("branch name cannot be empty")]
    Empty,

    #[error("branch name cannot start with '-'")]
    StartsWithDash,

    #[error("branch name cannot start or end with '/'")]
    SlashAtEdge,

    #[error("branch name cannot end with '.lock'")]
    LockSuffix,

    #[error("branch name cannot contain '..'")]
    DoubleDot,

    #[error("branch name cannot contain '@{{'")]
    AtBrace,

    #[error("invalid character in branch name: '{0}'")]
    InvalidChar(char),
}

/// A git branch name that passed ref-name validation.
///
/// Validation covers the rules that matter for names we feed to worktree,
/// fetch, and push invocations; git itself remains the final authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    pub fn new(value: &str) -> Result<Self, BranchNameError> {
        if value.is_empty() {
            return Err(BranchNameError::Empty);
        }

        if value.starts_with('-') {
            return Err(BranchNameError::StartsWithDash);
        }

        if value.starts_with('/') || value.ends_with('/') {
            return Err(BranchNameError::SlashAtEdge);
        }

        if value.ends_with(".lock") {
            return Err(BranchNameError::LockSuffix);
        }

        if value.contains("..") {
            return Err(BranchNameError::DoubleDot);
        }

        if value.contains("@{") {
            return Err(BranchNameError::AtBrace);
        }

        for c in value.chars() {
            if c.is_ascii_control() || c == ' ' {
                return Err(BranchNameError::InvalidChar(c));
            }
            if matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\') {
                return Err(BranchNameError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
