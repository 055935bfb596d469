//! rs-flatten: Flatten a Rust project into a single markdown document
//!
//! This library discovers a project's manifest and source files and renders
//! them, in a deterministic order, as annotated markdown code blocks.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Config, FileEntry, FileKind, FileList, RenderSummary, ScanOptions};
pub use error::FlattenError;
pub use render::render;
pub use scan::discover;
