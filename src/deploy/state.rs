// ABOUTME: Publication state marker types for the type state pattern.
// ABOUTME: Zero-sized types enforce the phase ordering at compile time.

/// Initial state: nothing has run yet.
/// Available actions: `build()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Pending;

/// Build command finished successfully.
/// Available actions: `verify_artifacts()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Built;

/// Artifact directory confirmed to exist.
/// Available actions: `prepare_workspace()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Verified;

/// Publish workspace attached to the hosting branch.
/// Available actions: `sync_artifacts()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Prepared;

/// Artifacts copied into the workspace, marker file written.
/// Available actions: `publish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Synced;

/// Snapshot committed and pushed to the hosting branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Published;
