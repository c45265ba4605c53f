//! Location of the existing and generated NuGet.config files.

use std::path::{Component, Path, PathBuf};

/// File name NuGet looks for, matched case-insensitively on disk.
pub const NUGET_CONFIG_FILE: &str = "nuget.config";

/// Pick the existing config among directory entries.
///
/// Entries are compared in sorted order; falls back to [`NUGET_CONFIG_FILE`]
/// when nothing matches, which later reads as "no prior config".
pub fn existing_config_name(entries: &[String]) -> String {
    let mut candidates: Vec<&String> =
        entries.iter().filter(|name| name.to_lowercase() == NUGET_CONFIG_FILE).collect();
    candidates.sort();
    candidates.first().map(|name| name.to_string()).unwrap_or_else(|| NUGET_CONFIG_FILE.into())
}

/// Resolve the existing config path against `root`; absolute overrides stay absolute.
pub fn resolve_existing_config(root: &Path, location: &Path) -> PathBuf {
    normalize(&root.join(location))
}

/// The generated config always lands one directory above `root`.
pub fn output_config_path(root: &Path) -> PathBuf {
    normalize(&root.join("..").join(NUGET_CONFIG_FILE))
}

/// Lexically collapse `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
