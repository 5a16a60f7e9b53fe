use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::models::{SortDir, SortSpec};

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<SortDir>,
}

impl Config {
    /// Load the config at `path`, or at the default location when `None`.
    /// Only the default location is created with the default content when missing.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(&path),
            None => Self::load_or_init(&get_config_path()?),
        }
    }

    fn load_or_init(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            write_default(config_path)?;
            return serde_yaml_ng::from_str(DEFAULT_CONFIG).context("Fail to parse default config");
        }
        Self::from_file(config_path)
    }

    fn from_file(config_path: &Path) -> Result<Self> {
        let file = fs::File::open(config_path)
            .with_context(|| format!("Fail to open file `{}`", config_path.display()))?;
        let cfg: Config = serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", config_path.display()))?;

        Ok(cfg)
    }

    /// Replace the configured initial sort with values given on the command line
    pub fn override_sort(&mut self, column: Option<String>, dir: Option<SortDir>) {
        if let Some(column) = column {
            self.sort_column = Some(column);
        }
        if let Some(dir) = dir {
            self.sort_direction = Some(dir);
        }
    }

    /// Sort state the table starts with
    pub fn initial_sort(&self) -> SortSpec {
        SortSpec {
            column: self.sort_column.clone(),
            dir: self.sort_direction.unwrap_or_default(),
        }
    }
}

fn write_default(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.is_dir()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Fail to write file `{}`", path.display()))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_project_dir()?.config_dir().join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or_else(|| anyhow!("Fail to get project directory"))
}
