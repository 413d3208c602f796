//! Listening socket and startup preconditions.

pub mod listener;
pub mod root;

use crate::config::{Config, ResolveMode};
use root::DocumentRoot;

/// Read-only state shared by every connection for the life of the process.
#[derive(Debug, Clone)]
pub struct ServerContext {
    pub root: DocumentRoot,
    pub buffer_size: usize,
    pub resolve_mode: ResolveMode,
}

impl ServerContext {
    pub fn new(cfg: &Config, root: DocumentRoot) -> Self {
        Self {
            root,
            buffer_size: cfg.buffer_size,
            resolve_mode: cfg.resolve_mode,
        }
    }
}
