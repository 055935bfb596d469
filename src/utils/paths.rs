//! Path helpers

use std::path::{Component, Path};

/// Render a path with `/` separators regardless of the host convention.
fn normalize_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::CurDir => None,
            Component::ParentDir => Some("..".into()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// `path` relative to `root`, `/`-separated. Falls back to the full path when
/// `path` is not under `root`.
pub fn relative_path_string(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => normalize_path(rel),
        Err(_) => normalize_path(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn normalizes_to_forward_slashes() {
        let path: PathBuf = ["src", "cli", "mod.rs"].iter().collect();
        assert_eq!(normalize_path(&path), "src/cli/mod.rs");
        assert_eq!(normalize_path(Path::new("./src/lib.rs")), "src/lib.rs");
    }

    #[test]
    fn strips_root_prefix() {
        let root = Path::new("/work/project");
        let file = root.join("src").join("main.rs");
        assert_eq!(relative_path_string(&file, root), "src/main.rs");
    }
}
