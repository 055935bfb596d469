//! Markdown rendering of discovered files

use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::{FileEntry, FileList, RenderSummary};
use crate::error::{FlattenError, Result};
use crate::utils::{estimate_tokens, read_utf8};

const FENCE: &str = "```";

/// Render every entry of `files` into `out` as a fenced code block.
///
/// Entries that cannot be read are logged and skipped. Only failures writing
/// to `out` abort; `out_path` names the sink in that error.
pub fn render<W: Write>(
    files: &FileList,
    out: &mut W,
    out_path: &Path,
) -> Result<RenderSummary> {
    let mut summary = RenderSummary::default();

    for entry in files {
        let content = match read_utf8(&entry.path) {
            Ok(content) => content,
            Err(source) => {
                let err = FlattenError::FileRead { path: entry.path.clone(), source };
                warn!("skipping {}: {err}", entry.relative_path);
                summary.skipped += 1;
                continue;
            }
        };

        let block = format_block(entry, &content);
        let separator = if summary.written > 0 { "\n" } else { "" };
        write!(out, "{separator}{block}").map_err(|source| FlattenError::OutputWrite {
            path: out_path.to_path_buf(),
            source,
        })?;

        debug!(path = %entry.relative_path, kind = %entry.kind, "rendered entry");
        summary.written += 1;
        summary.bytes_written += (separator.len() + block.len()) as u64;
        summary.tokens_estimated += estimate_tokens(&block);
    }

    Ok(summary)
}

/// One entry: path line, opening fence with language, trimmed content, closing fence.
pub fn format_block(entry: &FileEntry, content: &str) -> String {
    format!(
        "{path}\n{FENCE}{lang}\n{body}\n{FENCE}\n",
        path = entry.relative_path,
        lang = entry.kind.language(),
        body = content.trim_end(),
    )
}
