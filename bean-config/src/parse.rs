//! Loading generation flags from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, GenerationFlags, Result};

/// File name used for error reporting when none is given.
pub const DEFAULT_FILENAME: &str = "beansmith.toml";

/// Root of beansmith.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    model: GenerationFlags,
}

impl FromStr for GenerationFlags {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl GenerationFlags {
    /// Load flags from a beansmith.toml at the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse flags from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_str_with_filename(content, filename)
    }
}

/// Parse flags from content with the given filename for error reporting.
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<GenerationFlags> {
    let config: ConfigFile =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    Ok(config.model)
}
