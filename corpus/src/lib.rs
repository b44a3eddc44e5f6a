use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing filename for path {0}")]
    MissingFileName(PathBuf),
}

/// A text corpus loaded fully into memory. Loading is a one-shot blocking
/// read; the search algorithms never see partial file contents.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub name: String,
    pub text: String,
}

impl Corpus {
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let name = filename_from_path(path)?;
        log::debug!("loaded corpus {} ({} chars)", name, text.len());

        Ok(Self { name, text })
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn load_all(paths: &[PathBuf]) -> Result<Vec<Corpus>, CorpusError> {
    paths.iter().map(|path| Corpus::load(path)).collect()
}

fn filename_from_path(path: &Path) -> Result<String, CorpusError> {
    path.file_name()
        .ok_or_else(|| CorpusError::MissingFileName(path.to_path_buf()))
        .map(|name| name.to_string_lossy().to_string())
}
