//! rs-flatten: Flatten a Rust project into a single markdown document
//!
//! Collects `Cargo.toml` and every `.rs` file under a directory and writes
//! them as fenced code blocks, ready to paste into a review or an LLM prompt.

use anyhow::Result;

fn main() -> Result<()> {
    rs_flatten::cli::run()
}
