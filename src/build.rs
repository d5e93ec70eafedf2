//! Exports the [`build_site`] function which stitches together the steps of
//! generating the phrase pages: loading the phrases and the template, laying
//! out the pages ([`crate::page`]), rendering them ([`crate::template`]) and
//! writing them to the output directory.

use crate::config::Config;
use crate::page::{pages, Page};
use crate::template::Template;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a successful build produced.
#[derive(Debug, Default)]
pub struct Summary {
    /// The written files, in phrase order.
    pub pages: Vec<PathBuf>,
}

/// Builds the site from a [`Config`] object. Both inputs are read before
/// anything is written, so a missing or empty phrase file or a missing
/// template leaves the file system untouched.
///
/// The output directory is created if needed but never cleared: pages left
/// over from an earlier run with more phrases stay in place.
pub fn build_site(config: &Config) -> Result<Summary> {
    let phrases = load_phrases(&config.phrases_file)?;
    let template = load_template(&config.template_file)?;
    debug!(
        phrases = phrases.len(),
        template = %config.template_file.display(),
        "loaded inputs"
    );

    fs::create_dir_all(&config.output_directory).map_err(|err| Error::CreateOutputDirectory {
        path: config.output_directory.clone(),
        err,
    })?;

    let mut summary = Summary::default();
    for page in pages(phrases.as_slice(), &config.index_link, config.max_slug_length) {
        let path = config.output_directory.join(&page.file_name);
        write_page(&path, &template, &page, &config.title_prefix)?;
        info!(index = page.index, "Page created: {}", page.file_name);
        summary.pages.push(path);
    }

    info!(
        pages = summary.pages.len(),
        "Generated {} pages in {}",
        summary.pages.len(),
        config.output_directory.display()
    );
    Ok(summary)
}

/// Renders a single [`Page`] and writes it to `path`, replacing any existing
/// file. The handle is closed before returning.
fn write_page(path: &Path, template: &Template, page: &Page, title_prefix: &str) -> Result<()> {
    let contents = template.render(page, title_prefix);
    File::create(path)
        .and_then(|mut file| file.write_all(contents.as_bytes()))
        .map_err(|err| Error::WritePage {
            path: path.to_owned(),
            err,
        })
}

/// Reads the phrase file: one phrase per line, surrounding whitespace
/// stripped, blank lines dropped. `\n`, `\r\n` and a lone `\r` all end a
/// line.
pub fn load_phrases(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::MissingPhrases {
            path: path.to_owned(),
        },
        _ => Error::Read {
            path: path.to_owned(),
            err,
        },
    })?;

    let phrases: Vec<String> = contents
        .split(|c: char| c == '\n' || c == '\r')
        .map(trim_phrase)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    match phrases.is_empty() {
        true => Err(Error::EmptyPhrases {
            path: path.to_owned(),
        }),
        false => Ok(phrases),
    }
}

/// Strips whitespace from both ends of `line`, counting the ASCII
/// separators `\x1c`..=`\x1f` as whitespace too.
fn trim_phrase(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Reads the whole template file.
pub fn load_template(path: &Path) -> Result<Template> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(Template::new(source)),
        Err(err) => match err.kind() {
            io::ErrorKind::NotFound => Err(Error::MissingTemplate {
                path: path.to_owned(),
            }),
            _ => Err(Error::Read {
                path: path.to_owned(),
                err,
            }),
        },
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the pages.
#[derive(Debug)]
pub enum Error {
    /// Returned when the phrase file does not exist.
    MissingPhrases { path: PathBuf },

    /// Returned when the phrase file has no non-blank lines.
    EmptyPhrases { path: PathBuf },

    /// Returned when the template file does not exist.
    MissingTemplate { path: PathBuf },

    /// Returned for any other problem reading an input file.
    Read { path: PathBuf, err: io::Error },

    /// Returned when the output directory can't be created.
    CreateOutputDirectory { path: PathBuf, err: io::Error },

    /// Returned when a page can't be written. Pages written before it are
    /// left in place.
    WritePage { path: PathBuf, err: io::Error },
}

impl Error {
    /// Whether this is one of the expected aborts (missing or empty phrase
    /// file, missing template), as opposed to an unexpected I/O failure.
    /// Aborts happen before anything is written.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            Error::MissingPhrases { .. } | Error::EmptyPhrases { .. } | Error::MissingTemplate { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingPhrases { path } => write!(
                f,
                "Phrase file '{}' not found. Make sure it exists next to the template.",
                path.display()
            ),
            Error::EmptyPhrases { path } => write!(
                f,
                "Phrase file '{}' is empty. Add some phrases, one per line.",
                path.display()
            ),
            Error::MissingTemplate { path } => {
                write!(f, "Template file '{}' not found.", path.display())
            }
            Error::Read { path, err } => write!(f, "Reading '{}': {}", path.display(), err),
            Error::CreateOutputDirectory { path, err } => {
                write!(f, "Creating directory '{}': {}", path.display(), err)
            }
            Error::WritePage { path, err } => {
                write!(f, "Writing page '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingPhrases { .. }
            | Error::EmptyPhrases { .. }
            | Error::MissingTemplate { .. } => None,
            Error::Read { path: _, err } => Some(err),
            Error::CreateOutputDirectory { path: _, err } => Some(err),
            Error::WritePage { path: _, err } => Some(err),
        }
    }
}
