//! Configuration loading
//!
//! Layers, lowest precedence first: built-in defaults, a config file
//! (explicit `--config` or one discovered in the project root), then
//! `RS_FLATTEN_*` environment variables. CLI flags are applied on top by
//! [`merge_cli_with_config`].

use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::Config;
use crate::error::{FlattenError, Result};

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

/// Prefix of environment variables read into [`Config`].
pub const ENV_PREFIX: &str = "RS_FLATTEN_";

/// Config file names looked up in the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] =
    &["rs-flatten.toml", ".rs-flatten.toml", ".rs-flatten.yml", ".rs-flatten.yaml"];

/// Load configuration for a project rooted at `root`.
///
/// An explicit `config_path` must exist and parse. Otherwise the first file
/// of [`CONFIG_FILE_NAMES`] found in `root` is used, if any; such a file
/// belongs to the scanned project, so when it is malformed it is reported and
/// ignored instead of aborting the run.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(FlattenError::from(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }
        return Ok(layered(Some(path)).extract()?);
    }

    let Some(file) = find_config_file(root) else {
        return Ok(layered(None).extract()?);
    };
    match layered(Some(&file)).extract() {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!("ignoring config file {}: {err}", file.display());
            Ok(layered(None).extract()?)
        }
    }
}

/// Defaults, then the optional file, then `RS_FLATTEN_*` variables.
fn layered(file: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(file) = file {
        debug!(path = %file.display(), "loading config file");
        figment = if is_yaml(file) {
            figment.merge(Yaml::file(file))
        } else {
            figment.merge(Toml::file(file))
        };
    }
    figment.merge(Env::prefixed(ENV_PREFIX))
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| root.join(name)).find(|path| path.is_file())
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yml" | "yaml"))
}
