//! Search telemetry behind an injectable sink.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};

use crate::models::SearchEvent;

/// Destination for analytics events supplied by the host
pub trait AnalyticsSink {
    fn record(&mut self, event: &SearchEvent) -> Result<()>;
}

/// Emits events as structured `tracing` records under the `analytics` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&mut self, event: &SearchEvent) -> Result<()> {
        match event {
            SearchEvent::Search { term, result_count, timestamp } => {
                tracing::info!(target: "analytics", %term, result_count, %timestamp, "search tracked");
            }
            SearchEvent::Click { term, result_id, position, timestamp } => {
                tracing::info!(
                    target: "analytics",
                    %term,
                    %result_id,
                    position,
                    %timestamp,
                    "search click tracked"
                );
            }
        }
        Ok(())
    }
}

/// Appends one JSON object per line to a file
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open analytics log: {}", path.display()))?;
        Ok(Self { path: path.to_path_buf(), writer: BufWriter::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalyticsSink for JsonlSink {
    fn record(&mut self, event: &SearchEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event).context("Failed to serialize event")?;
        self.writer.write_all(b"\n")?;
        self.writer.flush().context("Failed to flush analytics log")?;
        Ok(())
    }
}

/// Shared in-memory buffer; clones observe the same events
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<SearchEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SearchEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&mut self, event: &SearchEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| anyhow!("Analytics buffer lock poisoned"))?
            .push(event.clone());
        Ok(())
    }
}

/// Fire-and-forget tracker; sink failures are logged and swallowed
pub struct SearchAnalytics {
    sink: Box<dyn AnalyticsSink>,
}

impl SearchAnalytics {
    pub fn new(sink: Box<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    pub fn track_search(&mut self, term: &str, result_count: usize) {
        self.emit(SearchEvent::search(term, result_count));
    }

    pub fn track_search_click(&mut self, term: &str, result_id: &str, position: usize) {
        self.emit(SearchEvent::click(term, result_id, position));
    }

    fn emit(&mut self, event: SearchEvent) {
        if let Err(e) = self.sink.record(&event) {
            tracing::warn!(error = %e, term = event.term(), "analytics sink failed");
        }
    }
}

impl Default for SearchAnalytics {
    fn default() -> Self {
        Self::new(Box::new(TracingSink))
    }
}

impl std::fmt::Debug for SearchAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAnalytics").finish_non_exhaustive()
    }
}
