//! Project discovery
//!
//! Locates the manifest directly under the root and every source file below
//! it, producing a [`FileList`] in output order.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::{
    FileEntry, FileKind, FileList, ScanOptions, MANIFEST_FILE_NAME, SOURCE_FILE_SUFFIX,
};
use crate::error::{FlattenError, Result};
use crate::utils::relative_path_string;

/// Canonicalize `path` and check that it is an existing directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| FlattenError::InvalidRoot { path: path.to_path_buf() })
}

/// Discover the manifest and all source files under `root`.
///
/// Returns [`FlattenError::EmptyDiscovery`] when nothing qualifies, which
/// callers treat as a non-fatal outcome.
pub fn discover(root: &Path, options: &ScanOptions) -> Result<FileList> {
    if !root.is_dir() {
        return Err(FlattenError::InvalidRoot { path: root.to_path_buf() });
    }
    let excludes = build_globset(&options.exclude_globs)?;

    let manifest_path = root.join(MANIFEST_FILE_NAME);
    let manifest = manifest_path.is_file().then(|| {
        debug!(path = %manifest_path.display(), "found manifest");
        FileEntry::new(manifest_path, MANIFEST_FILE_NAME, FileKind::Manifest)
    });

    let mut sources = Vec::new();
    let walker = WalkDir::new(root).follow_links(options.follow_symlinks).into_iter();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable path: {err}");
                continue;
            }
        };
        if !is_source_file(&entry) {
            continue;
        }

        let relative_path = relative_path_string(entry.path(), root);
        if excludes.as_ref().is_some_and(|set| set.is_match(&relative_path)) {
            debug!(path = %relative_path, "excluded by glob");
            continue;
        }
        debug!(path = %relative_path, "found source");
        sources.push(FileEntry::new(entry.into_path(), relative_path, FileKind::Source));
    }

    let files = FileList::from_parts(manifest, sources);
    if files.is_empty() {
        return Err(FlattenError::EmptyDiscovery { root: root.to_path_buf() });
    }
    debug!(count = files.len(), "discovery complete");
    Ok(files)
}

/// Regular files, and symlinks resolving to regular files, named `*.rs`.
fn is_source_file(entry: &DirEntry) -> bool {
    let named_source = entry.file_name().to_string_lossy().ends_with(SOURCE_FILE_SUFFIX);
    if !named_source {
        return false;
    }
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| FlattenError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|source| FlattenError::InvalidGlob { pattern: patterns.join(","), source })?;
    Ok(Some(set))
}
