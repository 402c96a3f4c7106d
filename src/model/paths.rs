//! File locations inside a model bundle

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Entry documents, most preferred first
pub const INDEX_FILES: [&str; 2] = ["index.modified.html", "index.html"];

/// Candidate entry documents for `model_dir` in preference order
pub fn index_candidates(model_dir: &Path) -> [PathBuf; 2] {
    INDEX_FILES.map(|name| model_dir.join(name))
}

/// First candidate entry document that currently exists as a regular file.
///
/// Evaluated against the filesystem on every call.
pub async fn resolve_index_file(model_dir: &Path) -> Option<PathBuf> {
    for candidate in index_candidates(model_dir) {
        if let Ok(meta) = tokio::fs::metadata(&candidate).await {
            if meta.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Directory of the captured graph responses
fn graph_dir(model_dir: &Path) -> PathBuf {
    model_dir.join("api").join("mp").join("models")
}

/// `<model_dir>/api/mp/models/graph_<operation>.json`, or `None` when the
/// operation name is empty or could escape the graph directory.
pub fn graph_operation_path(model_dir: &Path, operation: &str) -> Option<PathBuf> {
    let operation = safe_segment(operation)?;
    Some(graph_dir(model_dir).join(format!("graph_{}.json", operation)))
}

/// `<model_dir>/api/mp/models/graph`, served when no operation document matches
pub fn graph_fallback_path(model_dir: &Path) -> PathBuf {
    graph_dir(model_dir).join("graph")
}

/// Accept `segment` only if it names a single entry inside its parent
fn safe_segment(segment: &str) -> Option<&str> {
    if segment.is_empty() || segment.contains(&['/', '\\', '\0'][..]) {
        return None;
    }

    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == OsStr::new(segment) => Some(segment),
        _ => None,
    }
}
