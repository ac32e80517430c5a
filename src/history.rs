use crate::error::{NavError, NavResult};
use crate::model::NavigationFrame;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable LIFO of navigation frames backing "jump back".
///
/// Every public operation is load-mutate-persist against the YAML file;
/// nothing is cached across calls, so sequential invocations of the tool
/// observe each other's pushes and pops. A missing or empty file is an
/// empty history; an unreadable or unparsable file is a storage failure
/// reported verbatim, never silently reset.
pub struct HistoryStack {
    path: PathBuf,
}

impl HistoryStack {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a frame to the end of the log.
    pub fn push(&self, frame: NavigationFrame) -> NavResult<()> {
        let mut frames = self.load()?;
        frames.push(frame);
        self.persist(&frames)
    }

    /// Remove and return the most recently pushed frame.
    pub fn pop(&self) -> NavResult<NavigationFrame> {
        let mut frames = self.load()?;
        let frame = frames.pop().ok_or(NavError::HistoryEmpty)?;
        self.persist(&frames)?;
        Ok(frame)
    }

    pub fn len(&self) -> NavResult<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> NavResult<bool> {
        Ok(self.load()?.is_empty())
    }

    fn load(&self) -> NavResult<Vec<NavigationFrame>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|err| NavError::storage(&self.path, err))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_yaml_ng::from_str(&raw).map_err(|err| NavError::storage(&self.path, err))
    }

    fn persist(&self, frames: &[NavigationFrame]) -> NavResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| NavError::storage(&self.path, err))?;
        }
        let raw = serde_yaml_ng::to_string(frames)
            .map_err(|err| NavError::storage(&self.path, err))?;
        fs::write(&self.path, raw).map_err(|err| NavError::storage(&self.path, err))
    }
}
