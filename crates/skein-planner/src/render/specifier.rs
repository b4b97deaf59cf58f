//! Module specifiers between planned files.

use std::path::{Component, Path};

use crate::files::File;

/// How `from` refers to `to` in an import or export statement.
///
/// External files are referenced by module name. Project files get a
/// relative path from `from`'s directory with the extension dropped.
pub fn module_specifier(from: &File, to: &File) -> String {
    if to.is_external() {
        return to.logical_path().to_string();
    }
    match (from.final_path().and_then(Path::parent), to.final_path()) {
        (Some(dir), Some(target)) => relative_specifier(dir, target),
        _ => format!("./{}", to.logical_path()),
    }
}

/// `./x` or `../x` path from `from_dir` to `to`, extension dropped.
pub fn relative_specifier(from_dir: &Path, to: &Path) -> String {
    let target = to.with_extension("");
    let from: Vec<Component<'_>> = from_dir.components().collect();
    let to: Vec<Component<'_>> = target.components().collect();
    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}

/// Python module path for `from` importing `to`: dotted relative for
/// project files (`.models.pet`, `..shared`), the module name otherwise.
pub fn python_module(from: &File, to: &File) -> String {
    let specifier = module_specifier(from, to);
    if to.is_external() {
        return specifier;
    }

    let mut dots = 1;
    let mut rest = Vec::new();
    for segment in specifier.split('/') {
        match segment {
            "." => {}
            ".." => dots += 1,
            other => rest.push(other),
        }
    }
    format!("{}{}", ".".repeat(dots), rest.join("."))
}
