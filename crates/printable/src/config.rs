use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};
use toml::value::Table;

use crate::{
    error::{Error, Result},
    format::Format,
    item::Data,
};

pub const DEFAULT_CONFIG_FILE: &str = "printable.toml";

/// The contents of a `printable.toml` file.
///
/// The `[output]` table is typed; every other top-level table is kept as raw TOML so custom
/// renderers can read their own settings through [`Config::get`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// What to render and where to put it.
    #[serde(default)]
    pub output: OutputConfig,

    /// Any remaining configuration, for custom renderers.
    #[serde(flatten)]
    rest: Table,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| format!("Unable to open {}", path.display()))?
            .read_to_string(&mut buffer)
            .with_context(|| format!("Unable to read {}", path.display()))?;

        buffer
            .parse()
            .with_context(|| format!("Invalid printable settings in {}", path.display()))
    }

    /// Deserializes the top-level table named `key`, if present.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.rest
            .get(key)
            .cloned()
            .map(|value| {
                value
                    .try_into()
                    .with_context(|| format!("[{key}] does not have the expected shape"))
            })
            .transpose()
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(source)?)
    }
}

/// Values given on the command line, each taking precedence over the file when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOverrides {
    pub payload: Option<String>,
    pub declared: Option<Format>,
    pub format: Option<String>,
    pub path: Option<PathBuf>,
    pub redesigned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// The payload to render.
    pub payload: Option<String>,
    /// The format the item is declared with.
    pub declared: Format,
    /// The format to render as. Defaults to the declared format.
    pub format: Option<String>,
    /// Where to write the output. Defaults to `out.<extension>`.
    pub path: Option<PathBuf>,
    /// Render through the renderer registry instead of the classic item.
    pub redesigned: bool,
}

impl OutputConfig {
    /// The requested format identifier, falling back to the declared format.
    ///
    /// Names of built-in formats are normalized (`TXT` becomes `text`), anything else is
    /// returned as written so it can be looked up in a renderer registry.
    pub fn format(&self) -> &str {
        match self.format.as_deref() {
            Some(raw) => raw.parse::<Format>().map(Format::as_str).unwrap_or(raw),
            None => self.declared.as_str(),
        }
    }

    /// Applies command-line values on top of the ones read from the file.
    pub fn merge(&mut self, overrides: OutputOverrides) {
        let OutputOverrides {
            payload,
            declared,
            format,
            path,
            redesigned,
        } = overrides;

        if payload.is_some() {
            self.payload = payload;
        }
        if let Some(declared) = declared {
            self.declared = declared;
        }
        if format.is_some() {
            self.format = format;
        }
        if path.is_some() {
            self.path = path;
        }
        self.redesigned |= redesigned;
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            let extension = self
                .format()
                .parse::<Format>()
                .map(Format::extension)
                .unwrap_or_else(|_| self.format());

            PathBuf::from(format!("out.{extension}"))
        })
    }

    /// Builds the item described by this section.
    pub fn data(&self) -> Result<Data> {
        let Some(payload) = &self.payload else {
            anyhow::bail!("No payload was configured");
        };

        Ok(Data::new(payload.clone(), self.declared))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            payload: None,
            declared: Format::Text,
            format: None,
            path: None,
            redesigned: false,
        }
    }
}
