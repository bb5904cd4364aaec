use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fs_err as fs;
use notelog_lib::error::{NotelogError, ResultExt};
use notelog_lib::Newline;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which line terminator rendered output should use.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NewlineStyle {
    #[default]
    Native,
    Lf,
    Crlf,
}

impl NewlineStyle {
    pub fn resolve(self) -> Newline {
        match self {
            NewlineStyle::Native => Newline::native(),
            NewlineStyle::Lf => Newline::Lf,
            NewlineStyle::Crlf => Newline::CrLf,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix applied to every note. Falls back to the input file stem when unset.
    pub prefix: Option<String>,
    pub newline: NewlineStyle,
    pub fail_on_error: bool,
}

impl Config {
    /// `config.json` inside the platform config directory.
    pub fn default_path() -> Result<PathBuf, NotelogError> {
        let project_dirs =
            ProjectDirs::from("", "", "notelog").ok_or(NotelogError::NoConfigDir)?;
        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Reads the config at `path`, returning defaults if the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NotelogError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let buf = fs::read(path)?;
        let config: Self = serde_json::from_slice(&buf)
            .with_generic(|e| format!("malformed config `{}`: {e}", path.display()))?;
        debug!(?config, "loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), NotelogError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}
