//! Import tracking for a single generation run
//!
//! A session remembers which module-owned types were already referenced so
//! the driver emits each import once per output file. Sessions are owned by
//! the caller and must not be shared between runs.

use crate::ir::TypeDescriptor;
use indexmap::IndexMap;
use tracing::debug;

/// Import state for one output file
#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    seen: IndexMap<String, TypeDescriptor>,
}

impl ImportSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference and report whether it is already visible
    ///
    /// Returns `false` exactly once per `module/SimpleName` key: the first
    /// time it is seen, when the caller must emit an import. Types without
    /// an owning module are always visible.
    pub fn mark_and_check(&mut self, ty: &TypeDescriptor) -> bool {
        let Some(module) = ty.module_name.as_deref() else {
            return true;
        };

        let key = format!("{}/{}", module, ty.simple_name);
        if self.seen.contains_key(&key) {
            return true;
        }

        debug!(key = %key, "import required");
        self.seen.insert(key, ty.clone());
        false
    }

    /// First-seen descriptor for each imported key, in insertion order
    pub fn imports(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.seen.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct imports recorded
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing was imported yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget everything, starting a fresh run
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
