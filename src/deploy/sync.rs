// ABOUTME: Filesystem half of the publish pipeline.
// ABOUTME: Clears the workspace, copies the artifact tree, writes the marker.

use std::fs;
use std::io;
use std::path::Path;

/// Marker file that tells the hosting platform to serve files verbatim
/// instead of running them through its Jekyll preprocessor. Required for
/// correct asset paths and client-side routing.
pub const NOJEKYLL_MARKER: &str = ".nojekyll";

/// Git metadata entry that must survive workspace clearing.
const GIT_DIR: &str = ".git";

/// Remove every entry in `workspace` except the git metadata.
///
/// Keeping `.git` preserves the hosting branch's history across runs.
pub fn clear_workspace(workspace: &Path) -> io::Result<()> {
    for entry in fs::read_dir(workspace)? {
        let entry = entry?;
        if entry.file_name() == GIT_DIR {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Recursively copy the contents of `src` into `dst`.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Write the empty Jekyll-disabling marker at the workspace root.
pub fn write_nojekyll(workspace: &Path) -> io::Result<()> {
    fs::write(workspace.join(NOJEKYLL_MARKER), "")
}
