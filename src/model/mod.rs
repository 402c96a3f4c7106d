//! Model bundle module - startup selection and file layout

pub mod paths;
pub mod selection;

pub use paths::{graph_fallback_path, graph_operation_path, index_candidates, resolve_index_file};
pub use selection::{discover_first_model, ModelSelection, SelectionSource};
