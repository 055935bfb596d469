//! Core domain types and models
//!
//! Defines the discovered file entries, the ordered file list, rendering
//! counters and the user-facing configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// File name of the project manifest looked up directly under the root.
pub const MANIFEST_FILE_NAME: &str = "Cargo.toml";

/// Suffix that marks a file as a source file.
pub const SOURCE_FILE_SUFFIX: &str = ".rs";

/// What a discovered file is, which decides its fence language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Manifest,
    Source,
}

impl FileKind {
    /// Language tag written after the opening fence.
    pub fn language(self) -> &'static str {
        match self {
            Self::Manifest => "toml",
            Self::Source => "rust",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Source => "source",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file selected for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Path relative to the scanned root, always `/`-separated
    pub relative_path: String,

    /// Manifest or source
    pub kind: FileKind,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative_path: impl Into<String>, kind: FileKind) -> Self {
        Self { path, relative_path: relative_path.into(), kind }
    }
}

/// Discovered files in output order: manifest first, then sources sorted by
/// relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    /// Builds the list from an optional manifest and an unordered set of
    /// sources. Sources are sorted by relative path, ties between names that
    /// render identically are broken on the raw path bytes, and the same
    /// file is kept only once.
    pub fn from_parts(manifest: Option<FileEntry>, mut sources: Vec<FileEntry>) -> Self {
        sources.sort_by(|a, b| {
            a.relative_path.cmp(&b.relative_path).then_with(|| {
                a.path.as_os_str().as_encoded_bytes().cmp(b.path.as_os_str().as_encoded_bytes())
            })
        });
        sources.dedup_by(|a, b| a.path == b.path);

        let mut entries = Vec::with_capacity(sources.len() + 1);
        entries.extend(manifest);
        entries.extend(sources);
        Self { entries }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn manifest(&self) -> Option<&FileEntry> {
        self.entries.first().filter(|e| e.kind == FileKind::Manifest)
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counters produced while rendering a file list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Entries written to the output
    pub written: usize,

    /// Entries skipped because they could not be read
    pub skipped: usize,

    /// Bytes written to the output
    pub bytes_written: u64,

    /// Rough token count of the written document
    pub tokens_estimated: usize,
}

/// Options that shape discovery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into symlinked directories
    pub follow_symlinks: bool,

    /// Globs matched against `/`-separated relative paths of source files
    pub exclude_globs: Vec<String>,
}

/// Main configuration for rs-flatten
///
/// Only shapes discovery. Where the document goes is decided by the
/// `--output` flag alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default, deserialize_with = "deserialize_globs")]
    pub exclude_globs: BTreeSet<String>,
}

impl Config {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_symlinks: self.follow_symlinks,
            exclude_globs: self.exclude_globs.iter().cloned().collect(),
        }
    }
}

/// Accepts either a list of globs or one comma-separated string, which is
/// what environment variables produce.
fn deserialize_globs<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{SeqAccess, Visitor};

    struct GlobsVisitor;

    impl<'de> Visitor<'de> for GlobsVisitor {
        type Value = BTreeSet<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a list of globs")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut result = BTreeSet::new();
            while let Some(glob) = seq.next_element::<String>()? {
                let trimmed = glob.trim();
                if !trimmed.is_empty() {
                    result.insert(trimmed.to_string());
                }
            }
            Ok(result)
        }
    }

    deserializer.deserialize_any(GlobsVisitor)
}
