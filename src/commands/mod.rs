// ABOUTME: Command module aggregator for the waypost CLI.
// ABOUTME: Re-exports deploy, status, and submit command handlers.

mod deploy;
mod status;
mod submit;

pub use deploy::deploy;
pub use status::status;
pub use submit::submit;
