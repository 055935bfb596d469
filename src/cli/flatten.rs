//! Flatten command implementation
//!
//! Validate root → discover → open sink → render → flush and confirm.

use anyhow::{Context, Result};
use clap::Args;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use super::utils::parse_csv;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{FileList, RenderSummary};
use crate::error::FlattenError;
use crate::render::render;
use crate::scan::{discover, resolve_root};
use crate::utils::format_with_commas;

#[derive(Args)]
pub struct FlattenArgs {
    /// Rust project root to scan
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (rs-flatten.toml or .rs-flatten.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip source paths matching these globs (comma-separated)
    #[arg(short = 'e', long, value_name = "GLOBS")]
    pub exclude_glob: Option<String>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
}

pub fn run(args: FlattenArgs) -> Result<()> {
    let start_time = Instant::now();

    let root = resolve_root(&args.directory)?;
    let file_config = load_config(&root, args.config.as_deref())?;
    let cli_overrides = CliOverrides {
        follow_symlinks: if args.follow_symlinks { Some(true) } else { None },
        exclude_globs: parse_csv(&args.exclude_glob).map(|v| v.into_iter().collect()),
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);

    let files = match discover(&root, &merged.scan_options()) {
        Ok(files) => files,
        Err(err @ FlattenError::EmptyDiscovery { .. }) => {
            eprintln!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    debug!(root = %root.display(), entries = files.len(), "discovered files");

    match args.output.as_deref() {
        Some(output) => {
            let summary = write_to_file(&files, output)?;
            eprintln!(
                "Wrote {} to {} (~{} tokens)",
                describe_counts(&summary),
                output.display(),
                format_with_commas(summary.tokens_estimated as u64)
            );
        }
        None => {
            let summary = write_to_stdout(&files)?;
            debug!(
                written = summary.written,
                skipped = summary.skipped,
                bytes = summary.bytes_written,
                "wrote document to stdout"
            );
        }
    }

    debug!("finished in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

/// Create missing parent directories, truncate `output` and render into it.
fn write_to_file(files: &FileList, output: &Path) -> Result<RenderSummary> {
    let output_error = |source: io::Error| FlattenError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_error)?;
    }
    let file = File::create(output).map_err(output_error)?;
    let mut writer = BufWriter::new(file);

    let summary = render(files, &mut writer, output)?;
    writer.flush().map_err(output_error)?;
    Ok(summary)
}

fn write_to_stdout(files: &FileList) -> Result<RenderSummary> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let sink = Path::new("<stdout>");

    let summary = render(files, &mut writer, sink)?;
    writer
        .flush()
        .map_err(|source| FlattenError::OutputWrite { path: sink.to_path_buf(), source })
        .context("failed to flush standard output")?;
    Ok(summary)
}

fn describe_counts(summary: &RenderSummary) -> String {
    let noun = if summary.written == 1 { "file" } else { "files" };
    if summary.skipped > 0 {
        format!("{} {noun} ({} skipped)", summary.written, summary.skipped)
    } else {
        format!("{} {noun}", summary.written)
    }
}
