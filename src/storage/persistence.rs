//! Recent-search persistence: load/save with atomic writes

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::utils::validate_file_size;

pub const RECENT_FILENAME: &str = "recent-searches.json";

/// Schema version for invalidation on format changes
const STORE_VERSION: u32 = 1;

/// Read/write seam for the recent-search list
pub trait RecentStore {
    /// Load persisted terms, most recent first. A missing store is an empty list.
    fn load(&mut self) -> Result<Vec<String>>;
    fn save(&mut self, terms: &[String]) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct RecentFile {
    version: u32,
    terms: Vec<String>,
}

/// JSON file store living in the data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(RECENT_FILENAME) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentStore for JsonFileStore {
    fn load(&mut self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        validate_file_size(&file, &self.path)?;

        let parsed: RecentFile = match serde_json::from_reader(BufReader::new(file)) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Next save or clear overwrites the damaged file
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "recent searches file is corrupt, starting empty"
                );
                return Ok(Vec::new());
            }
        };

        if parsed.version != STORE_VERSION {
            tracing::warn!(
                expected = STORE_VERSION,
                found = parsed.version,
                "recent searches version mismatch, starting empty"
            );
            return Ok(Vec::new());
        }

        Ok(parsed.terms)
    }

    fn save(&mut self, terms: &[String]) -> Result<()> {
        let dir = self.path.parent().context("Recent searches path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;

        let contents = RecentFile { version: STORE_VERSION, terms: terms.to_vec() };
        let json =
            serde_json::to_string_pretty(&contents).context("Failed to serialize recent searches")?;

        let temp = dir.join(format!("{}.tmp", RECENT_FILENAME));
        fs::write(&temp, json).context("Failed to write recent searches temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename recent searches temp file")?;

        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    terms: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored terms
    pub fn terms(&self) -> Vec<String> {
        self.terms.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl RecentStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<String>> {
        let terms = self.terms.lock().map_err(|_| anyhow!("Recent store lock poisoned"))?;
        Ok(terms.clone())
    }

    fn save(&mut self, terms: &[String]) -> Result<()> {
        let mut stored = self.terms.lock().map_err(|_| anyhow!("Recent store lock poisoned"))?;
        *stored = terms.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.save(&[])
    }
}
