//! Model Bundle Gateway
//!
//! Serves a pre-downloaded model asset bundle over HTTP and stubs the few
//! graph/event endpoints the bundle calls, so it runs without its original
//! backend.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod response;

pub use error::{AppError, Result};

use std::path::PathBuf;

use crate::config::Settings;
use crate::model::ModelSelection;

/// Application state shared across all handlers.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub selection: ModelSelection,
    pub proxy_script: PathBuf,
}

impl AppState {
    pub fn new(settings: Settings, selection: ModelSelection) -> Self {
        let proxy_script = settings.proxy_script_path();
        Self {
            settings,
            selection,
            proxy_script,
        }
    }

    /// Resolve the model selection from `settings` and build the state
    pub fn from_settings(settings: Settings) -> Self {
        let selection =
            ModelSelection::resolve(&settings.downloads_path(), settings.model_override());
        Self::new(settings, selection)
    }
}
