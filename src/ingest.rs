/*!
 * Ingestion coordinator: turns a mixed set of input handles into one
 * ordered snapshot
 */

use std::sync::Arc;

use indicatif::ProgressBar;

use crate::error::{Error, Result};
use crate::filter::PatternFilter;
use crate::input::InputHandle;
use crate::reader::{read_archives, read_loose};
use crate::types::CodebaseSnapshot;

/// Coordinates the readers over one set of handles.
///
/// Handles whose name ends in `.zip` go to the archive reader, everything
/// else to the loose reader. Loose records come first, archive records
/// after, and the snapshot sort puts the combined set in path order.
pub struct Ingestor {
    filter: PatternFilter,
    progress: Arc<ProgressBar>,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingestor {
    pub fn new() -> Self {
        Self {
            filter: PatternFilter::empty(),
            progress: Arc::new(ProgressBar::hidden()),
        }
    }

    /// Apply user glob patterns on top of the built-in rules
    pub fn with_filter(mut self, filter: PatternFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Report per-handle progress on the given bar
    pub fn with_progress(mut self, progress: Arc<ProgressBar>) -> Self {
        self.progress = progress;
        self
    }

    /// Run both readers and freeze the result into a snapshot.
    ///
    /// Fails with [`Error::EmptyInput`] when no record survives, and with
    /// [`Error::Archive`] when any archive cannot be processed. An archive
    /// failure discards the whole run, including records that were already
    /// read.
    pub fn ingest(&self, handles: &[InputHandle]) -> Result<CodebaseSnapshot> {
        let (archives, loose): (Vec<&InputHandle>, Vec<&InputHandle>) =
            handles.iter().partition(|h| h.is_archive());

        let mut records = read_loose(&loose, &self.filter, &self.progress);
        records.extend(read_archives(&archives, &self.filter, &self.progress)?);

        if records.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(CodebaseSnapshot::from_records(records))
    }
}

/// Ingest with default rules only, no user patterns and no progress
pub fn ingest(handles: &[InputHandle]) -> Result<CodebaseSnapshot> {
    Ingestor::new().ingest(handles)
}
