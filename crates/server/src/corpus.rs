//! Corpus suppliers
//!
//! The matcher never reads files itself: a [`CorpusSource`] hands it a
//! cleaned snapshot of candidate lines for every question.

use canonical::clean_lines;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus {path} unavailable: {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the candidate lines for one question
pub trait CorpusSource: Send + Sync + 'static {
    /// Cleaned, non-empty candidate lines in corpus order
    fn load(&self) -> Result<Vec<String>, CorpusError>;

    /// Human-readable origin, for logs and readiness output
    fn describe(&self) -> String;
}

/// Corpus file re-read on every call, so edits show up without a restart
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for FileCorpus {
    fn load(&self) -> Result<Vec<String>, CorpusError> {
        let bytes = std::fs::read(&self.path).map_err(|source| CorpusError::Unavailable {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(clean_lines(&String::from_utf8_lossy(&bytes)))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Fixed in-memory corpus
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
    lines: Vec<String>,
}

impl StaticCorpus {
    /// Cleans each given line the same way a corpus file is cleaned
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines
                .into_iter()
                .flat_map(|line| clean_lines(line.as_ref()))
                .collect(),
        }
    }

    /// Builds from raw corpus text, e.g. an embedded markdown table
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: clean_lines(text),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl CorpusSource for StaticCorpus {
    fn load(&self) -> Result<Vec<String>, CorpusError> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} lines", self.lines.len())
    }
}
