use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// The Markdown dialect to render.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Core syntax: headings, lists, quotes, code, tables, links, emphasis and raw HTML
    #[default]
    Base,
    /// Base plus footnotes, definition lists, abbreviations, attribute lists
    /// and `markdown="1"` HTML blocks
    Extended,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub dialect: Dialect,
    /// Sanitize attributes and URL schemes, and disable raw HTML.
    pub safe_mode: bool,
    /// Every newline inside a paragraph becomes `<br />`.
    pub breaks_enabled: bool,
    /// Disable raw HTML blocks and inlines even outside safe mode.
    pub markup_escaped: bool,
    /// Turn bare `http(s)://` URLs into links.
    pub urls_linked: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            safe_mode: true,
            breaks_enabled: true,
            markup_escaped: false,
            urls_linked: true,
        }
    }
}

impl Config {
    /// Whether raw HTML may pass through as blocks or inline tags.
    pub fn raw_markup_allowed(&self) -> bool {
        !self.safe_mode && !self.markup_escaped
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn safe_mode(mut self, enabled: bool) -> Self {
        self.config.safe_mode = enabled;
        self
    }

    pub fn breaks_enabled(mut self, enabled: bool) -> Self {
        self.config.breaks_enabled = enabled;
        self
    }

    pub fn markup_escaped(mut self, enabled: bool) -> Self {
        self.config.markup_escaped = enabled;
        self
    }

    pub fn urls_linked(mut self, enabled: bool) -> Self {
        self.config.urls_linked = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// File names searched for next to the input, nearest directory first.
const CANDIDATE_NAMES: &[&str] = &[".fastdown.toml", "fastdown.toml"];

impl Config {
    /// Parse a config document; `path` only labels the error.
    pub fn from_toml(source: &str, path: &Path) -> Result<Config> {
        toml::from_str(source).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the config file at `path`.
    pub fn read(path: &Path) -> Result<Config> {
        log::debug!("Reading config from: {}", path.display());
        let source = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_toml(&source, path)
    }
}

/// The nearest `.fastdown.toml` or `fastdown.toml` in `dir` or its ancestors.
fn discover(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .flat_map(|dir| CANDIDATE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Resolve the config for a conversion whose source lives in `source_dir`.
///
/// An explicit path wins; otherwise the nearest discovered file is used and
/// the defaults apply when there is none. A file that is found but cannot be
/// read or parsed is an error either way.
pub fn load(explicit: Option<&Path>, source_dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(|| discover(source_dir)) else {
        log::debug!("No config file found, using defaults");
        return Ok((Config::default(), None));
    };
    let config = Config::read(&path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok((config, Some(path)))
}
