//! Runtime settings
//!
//! Settings come from the environment; user aliases come from
//! `svn-color.toml` in the Subversion configuration directory:
//!
//! ```toml
//! [aliases]
//! s = "status"
//! uv = "updateverbose"
//! ```

use crate::areas::pager::PagerChoice;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "svn-color.toml";
pub const DEFAULT_SVN_PROGRAM: &str = "svn";
pub const SVN_PROGRAM_ENV_VAR: &str = "SVN_COLOR_SVN";
pub const CONFIG_DIR_ENV_VAR: &str = "SVN_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Loads the file at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub svn_program: PathBuf,
    pub config_dir: Option<PathBuf>,
    /// `None` when paging is disabled
    pub pager: Option<PagerChoice>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let svn_program = non_empty(SVN_PROGRAM_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SVN_PROGRAM));

        let config_dir = non_empty(CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| home.map(|home| home.join(".subversion")));

        let pager = if lookup("NO_PAGER").is_some() {
            None
        } else {
            match lookup("SVN_PAGER").or_else(|| lookup("PAGER")) {
                Some(command) if command.trim().is_empty() => None,
                Some(command) => Some(PagerChoice::External(command)),
                None => Some(PagerChoice::Builtin),
            }
        };

        Self {
            svn_program,
            config_dir,
            pager,
        }
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    pub fn load_config(&self) -> anyhow::Result<ConfigFile> {
        match self.config_path() {
            Some(path) => ConfigFile::load_from(&path),
            None => Ok(ConfigFile::default()),
        }
    }
}
