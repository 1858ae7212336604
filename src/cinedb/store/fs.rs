use super::DataStore;
use crate::error::{CinedbError, Result};
use crate::model::Dataset;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Keeps the dataset in a single JSON document on local disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> CinedbError {
        CinedbError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load_all(&self) -> Result<Dataset> {
        let content = fs::read(&self.path).map_err(|source| CinedbError::Read {
            path: self.path.clone(),
            source,
        })?;
        let dataset: Dataset =
            serde_json::from_slice(&content).map_err(|source| CinedbError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            projects = dataset.projects.len(),
            actors = dataset.actors.len(),
            directors = dataset.directors.len(),
            casting_directors = dataset.casting_directors.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    fn save_all(&mut self, dataset: &Dataset) -> Result<()> {
        let mut content = serde_json::to_string_pretty(dataset)?;
        content.push('\n');

        // Atomic write
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, content).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }

        info!(path = %self.path.display(), "dataset saved");
        Ok(())
    }
}
