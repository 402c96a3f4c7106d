//! Response helpers

pub mod file;

pub use file::{not_found, serve_static, try_serve_file, try_serve_first};
