//! CLI argument merging with config

use crate::domain::Config;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub follow_symlinks: Option<bool>,
    pub exclude_globs: Option<BTreeSet<String>>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(follow_symlinks) = cli.follow_symlinks {
        base_config.follow_symlinks = follow_symlinks;
    }
    if let Some(exclude_globs) = cli.exclude_globs {
        base_config.exclude_globs = exclude_globs;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::Config;
    use std::collections::BTreeSet;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = Config {
            follow_symlinks: false,
            exclude_globs: BTreeSet::from(["target/**".to_string()]),
        };

        let cli = CliOverrides {
            follow_symlinks: Some(true),
            exclude_globs: Some(BTreeSet::from(["vendor/**".to_string()])),
        };

        let merged = merge_cli_with_config(base, cli);
        assert!(merged.follow_symlinks);
        assert!(merged.exclude_globs.contains("vendor/**"));
        assert!(!merged.exclude_globs.contains("target/**"));
    }

    #[test]
    fn empty_overrides_keep_config() {
        let base = Config { follow_symlinks: true, ..Config::default() };
        let merged = merge_cli_with_config(base.clone(), CliOverrides::default());
        assert_eq!(merged, base);
    }
}
