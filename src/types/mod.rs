// ABOUTME: Validated domain types for git surfaces.
// ABOUTME: Newtypes keep unchecked strings out of command invocations.

mod branch_name;
mod remote_name;

pub use branch_name::{BranchName, BranchNameError};
pub use remote_name::{RemoteName, RemoteNameError};
