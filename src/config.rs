//! Defines the [`Config`] type. Every field has a default reproducing the
//! conventional layout (`frases.txt`, `plantilla.html`, `frases/`), and any of
//! them can be overridden from an optional `frases.yaml` project file. Keys
//! the file does not recognise are ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The name of the optional project file looked up by [`Config::from_directory`].
pub const PROJECT_FILE: &str = "frases.yaml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Plain-text phrase source, one phrase per line.
    pub phrases_file: PathBuf,

    /// HTML template containing the placeholder tokens.
    pub template_file: PathBuf,

    /// Directory the pages are written into. Created if absent, never
    /// cleared.
    pub output_directory: PathBuf,

    /// Link used for the previous link of the first page and the next link
    /// of the last page.
    pub index_link: String,

    /// Prepended to the phrase to form the page title.
    pub title_prefix: String,

    /// Number of slug characters kept in each file name.
    pub max_slug_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            phrases_file: PathBuf::from("frases.txt"),
            template_file: PathBuf::from("plantilla.html"),
            output_directory: PathBuf::from("frases"),
            index_link: String::from("../index.html"),
            title_prefix: String::from("Yo Nunca Nunca: "),
            max_slug_length: 60,
        }
    }
}

impl Config {
    /// Loads the configuration for the project rooted at `dir`. If `dir`
    /// contains a [`PROJECT_FILE`], its fields override the defaults;
    /// otherwise the defaults are used. Relative paths are resolved against
    /// `dir` in both cases.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        let config = if path.exists() {
            Config::from_project_file(&path).context("Loading configuration")?
        } else {
            Config::default()
        };
        Ok(config.rooted_at(dir))
    }

    /// Parses a YAML project file. Missing fields take their defaults.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let file = File::open(path)
            .with_context(|| format!("Opening project file `{}`", path.display()))?;
        serde_yaml::from_reader(file)
            .with_context(|| format!("Parsing project file `{}`", path.display()))
    }

    /// Resolves the relative paths in `self` against `root`. Absolute paths
    /// are left untouched.
    pub fn rooted_at(self, root: &Path) -> Config {
        Config {
            phrases_file: root.join(self.phrases_file),
            template_file: root.join(self.template_file),
            output_directory: root.join(self.output_directory),
            ..self
        }
    }
}
