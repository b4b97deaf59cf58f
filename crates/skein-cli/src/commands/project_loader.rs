use std::path::Path;

use skein_planner::Project;

use crate::error::Result;
use crate::manifest::Manifest;

/// Load the manifest at `path` and register its declarations.
///
/// The output root is `root` if given, else the manifest's own `root`
/// resolved against the manifest's directory.
pub fn load_project(path: &Path, root: Option<&Path>) -> Result<Project> {
    let manifest = Manifest::load(path)?;
    let base = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let root = manifest.resolve_root(base, root);
    manifest.into_project(root)
}
