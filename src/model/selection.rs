//! Startup model selection
//!
//! The active model is chosen once, before the server accepts requests,
//! and never changes afterwards.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where the active model identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Supplied through configuration (`MODEL_ID`)
    Override,
    /// First subdirectory of the downloads root
    Discovered,
    /// Nothing supplied and nothing found
    Unconfigured,
}

/// The model this process serves
#[derive(Debug, Clone)]
pub struct ModelSelection {
    id: String,
    dir: Option<PathBuf>,
    source: SelectionSource,
}

impl ModelSelection {
    /// Resolve the active model.
    ///
    /// A non-empty `override_id` is taken verbatim without checking that
    /// its directory exists. Otherwise the downloads root is scanned with
    /// [`discover_first_model`]. Read failures never abort startup; they
    /// leave the selection unconfigured.
    pub fn resolve(downloads_dir: &Path, override_id: Option<&str>) -> Self {
        let selection = match override_id.filter(|id| !id.is_empty()) {
            Some(id) => Self::new(downloads_dir, id.to_string(), SelectionSource::Override),
            None => match discover_first_model(downloads_dir) {
                Some(id) => Self::new(downloads_dir, id, SelectionSource::Discovered),
                None => Self::unconfigured(),
            },
        };

        match selection.source {
            SelectionSource::Unconfigured => warn!(
                downloads_dir = %downloads_dir.display(),
                "No model found in downloads/. Set MODEL_ID env var."
            ),
            source => info!(model_id = %selection.id, ?source, "Serving model: {}", selection.id),
        }

        selection
    }

    fn new(downloads_dir: &Path, id: String, source: SelectionSource) -> Self {
        let dir = downloads_dir.join(&id);
        Self {
            id,
            dir: Some(dir),
            source,
        }
    }

    /// A selection with an empty identifier and no model directory
    pub fn unconfigured() -> Self {
        Self {
            id: String::new(),
            dir: None,
            source: SelectionSource::Unconfigured,
        }
    }

    /// Model identifier; empty when unconfigured
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `downloads/<model-id>`, present only when an identifier was selected
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn source(&self) -> SelectionSource {
        self.source
    }

    pub fn is_configured(&self) -> bool {
        !self.id.is_empty() && self.dir.is_some()
    }
}

/// Name of the first directory entry under `downloads_dir`, in listing order.
///
/// Symlinks are not followed and entries whose names are not UTF-8 are
/// skipped. Any I/O error is treated as "nothing found".
pub fn discover_first_model(downloads_dir: &Path) -> Option<String> {
    let entries = match fs::read_dir(downloads_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(
                downloads_dir = %downloads_dir.display(),
                error = %e,
                "Downloads directory not readable"
            );
            return None;
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .find_map(|entry| entry.file_name().into_string().ok())
}
