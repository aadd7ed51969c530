//! Module metadata
//!
//! This module provides the ModuleInfo structure describing a host module
//! that declarations are being generated for.

use serde::{Deserialize, Serialize};

/// Metadata for a generated host module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name (e.g., "vertx-web-client")
    pub name: String,

    /// Package group the module belongs to (e.g., "io.vertx")
    pub group_package: String,
}

impl ModuleInfo {
    /// Create a new module
    pub fn new(name: impl Into<String>, group_package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_package: group_package.into(),
        }
    }
}
