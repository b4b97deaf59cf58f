//! Path resolution and renderer binding pass.

use std::path::{Component, Path, PathBuf};

use super::planner::Planner;
use crate::project::Project;
use crate::render::{RenderContext, RenderMeta};
use crate::{Error, Result};

impl Planner {
    /// Give every project file its final name, extension and absolute
    /// path, then bind the first renderer that supports it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn resolve_file_paths(
        &mut self,
        project: &mut Project,
        meta: Option<&RenderMeta>,
    ) -> Result<()> {
        for id in project.files.registered_ids() {
            if project.files.file(id).is_external() {
                continue;
            }

            if let Some(transform) = &project.config.file_name {
                let name = transform(project.files.file(id).name());
                if !name.is_empty() {
                    project.files.file_mut(id).set_name(name);
                }
            }

            let extension = {
                let file = project.files.file(id);
                file.extension()
                    .map(str::to_string)
                    .or_else(|| project.config.extension_for(file.language()))
            };
            if let Some(extension) = &extension {
                project.files.file_mut(id).set_extension(extension.clone());
            }

            let relative = project.files.file(id).relative_path(extension.as_deref());
            let path = absolute(&project.config.root.join(relative))?;
            project.files.file_mut(id).set_final_path(path)?;

            let renderer = {
                let project: &Project = project;
                let ctx = RenderContext {
                    file: project.files.file(id),
                    project,
                    meta,
                };
                project
                    .config
                    .renderers
                    .iter()
                    .position(|renderer| renderer.supports(&ctx))
            };
            match renderer {
                Some(index) => project.files.file_mut(id).set_renderer(index),
                None => tracing::debug!(file = %project.files.file(id).display(), "no renderer supports file"),
            }
        }
        Ok(())
    }
}

/// Absolute form of `path` with `.` and `..` folded away.
fn absolute(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path).map_err(|source| Error::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Ok(out)
}
