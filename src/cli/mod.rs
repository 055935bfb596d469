//! Command-line interface for rs-flatten

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod flatten;
mod utils;

pub use flatten::FlattenArgs;

/// Flatten a Rust project's Cargo.toml and .rs sources into one markdown document
#[derive(Parser)]
#[command(name = "rs-flatten")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: FlattenArgs,

    /// Print shell completions for SHELL and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let ansi = std::io::stderr().is_terminal();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(ansi))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    flatten::run(cli.args)
}
