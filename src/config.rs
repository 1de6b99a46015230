use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{ConvertError, ConvertResult};

/// Settings as they appear in a TOML config file. Every key is optional so
/// command line flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "in_dir")]
    pub input_dir: Option<PathBuf>,
    #[serde(alias = "out_dir")]
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn from_toml(content: &str) -> ConvertResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Relative directories are resolved against the directory of the config file.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConvertError::from(e).in_file(path))?;
        let mut config = Self::from_toml(&content).map_err(|e| e.in_file(path))?;

        let base = path.parent().unwrap_or(Path::new(""));
        for dir in [&mut config.input_dir, &mut config.output_dir].into_iter().flatten() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    /// Merge an optional config file with command line values, which take precedence.
    pub fn resolve(
        file: Option<ConfigFile>,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> ConvertResult<Self> {
        let file = file.unwrap_or_default();
        Ok(Config {
            input_dir: input_dir
                .or(file.input_dir)
                .ok_or(ConvertError::MissingSetting("input_dir"))?,
            output_dir: output_dir
                .or(file.output_dir)
                .ok_or(ConvertError::MissingSetting("output_dir"))?,
        })
    }
}
