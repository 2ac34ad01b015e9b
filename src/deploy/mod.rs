// ABOUTME: Publish pipeline orchestration using the type state pattern.
// ABOUTME: Exports state markers and the Publication struct for compile-time safe runs.

mod error;
mod lock;
mod publication;
mod state;
mod sync;
mod transitions;
mod workspace;

pub use error::DeployError;
pub use lock::{LockInfo, PublishLock};
pub use publication::{Publication, default_message};
pub use state::{Built, Pending, Prepared, Published, Synced, Verified};
pub use sync::NOJEKYLL_MARKER;
pub use workspace::BranchOrigin;
