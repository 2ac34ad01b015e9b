// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Handles branch/remote newtypes and the non-empty build command.

use nonempty::NonEmpty;
use serde::Deserialize;

use crate::types::{BranchName, RemoteName};

pub fn deserialize_branch_name<'de, D>(deserializer: D) -> Result<BranchName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BranchName::new(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_remote_name<'de, D>(deserializer: D) -> Result<RemoteName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    RemoteName::new(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_command<'de, D>(deserializer: D) -> Result<NonEmpty<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<String> = Vec::deserialize(deserializer)?;
    NonEmpty::from_vec(values)
        .ok_or_else(|| serde::de::Error::custom("build command cannot be empty"))
}
