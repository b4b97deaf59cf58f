use std::fs;
use std::path::PathBuf;

use skein_planner::Output;

use super::project_loader::load_project;
use crate::error::{Error, Result};

pub struct RenderArgs {
    pub manifest: PathBuf,
    pub root: Option<PathBuf>,
    pub write: bool,
}

pub fn run(args: RenderArgs) {
    match execute(&args) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Rendered files, or with `write` the list of paths written.
pub fn execute(args: &RenderArgs) -> Result<String> {
    let mut project = load_project(&args.manifest, args.root.as_deref())?;
    let outputs = project.render(None)?;

    if !args.write {
        return Ok(format_outputs(&outputs));
    }

    write_outputs(&outputs)?;
    Ok(outputs
        .iter()
        .map(|output| format!("wrote {}\n", output.path.display()))
        .collect())
}

/// Files separated by `==> path <==` headers.
pub fn format_outputs(outputs: &[Output]) -> String {
    let mut out = String::new();
    for (i, output) in outputs.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("==> {} <==\n", output.path.display()));
        out.push_str(&output.content);
    }
    out
}

pub fn write_outputs(outputs: &[Output]) -> Result<()> {
    for output in outputs {
        if let Some(dir) = output.path.parent() {
            fs::create_dir_all(dir).map_err(|source| Error::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(&output.path, &output.content).map_err(|source| Error::Write {
            path: output.path.clone(),
            source,
        })?;
        tracing::debug!(path = %output.path.display(), bytes = output.content.len(), "wrote file");
    }
    Ok(())
}
