//! Per-type signature overrides
//!
//! Some generated method signatures need hand-written TypeScript. For a host
//! type `a.b.Foo` the overrides live in `a.b.Foo.override.json` under the
//! configured base directory:
//!
//! ```json
//! {
//!   "send": "(address: string, message: any) => void",
//!   "request": { "args": "(address: string)", "return": "Promise<Message<any>>" }
//! }
//! ```
//!
//! A plain string replaces the argument list. An object may replace the
//! argument list, the return type, or both.
//!
//! Documents are loaded on first lookup and kept for the lifetime of the
//! registry; later changes on disk are not observed.

use crate::codegen::include_file_if_present;
use crate::error::{WeldError, WeldResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Override for a single method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    /// Full argument list replacement
    Args(String),
    /// Independent argument list and return type replacements
    Signature {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
        #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
        returns: Option<String>,
    },
}

impl OverrideEntry {
    /// Replacement argument list, if any
    pub fn args(&self) -> Option<&str> {
        match self {
            OverrideEntry::Args(args) => Some(args),
            OverrideEntry::Signature { args, .. } => args.as_deref(),
        }
    }

    /// Replacement return type, if any
    ///
    /// Bare string entries never override the return type.
    pub fn returns(&self) -> Option<&str> {
        match self {
            OverrideEntry::Args(_) => None,
            OverrideEntry::Signature { returns, .. } => returns.as_deref(),
        }
    }
}

/// Overrides of one host type, keyed by method
pub type OverrideTable = IndexMap<String, OverrideEntry>;

/// File name of the override document for a host type
pub fn override_document_name(type_name: &str) -> String {
    format!("{}.override.json", type_name)
}

/// Lazily loaded override tables, one per host type
#[derive(Debug)]
pub struct OverrideRegistry {
    base_dir: PathBuf,
    tables: HashMap<String, OverrideTable>,
}

impl OverrideRegistry {
    /// Create a registry reading documents from `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            tables: HashMap::new(),
        }
    }

    /// Directory override documents are read from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Check if the table for a type has been loaded
    pub fn is_loaded(&self, type_name: &str) -> bool {
        self.tables.contains_key(type_name)
    }

    /// Override table for a type, loading it on first request
    pub fn table(&mut self, type_name: &str) -> WeldResult<&OverrideTable> {
        if !self.tables.contains_key(type_name) {
            let table = load_table(&self.base_dir, type_name)?;
            self.tables.insert(type_name.to_string(), table);
        }
        Ok(&self.tables[type_name])
    }

    /// Override entry for a method of a type
    pub fn get_override(&mut self, type_name: &str, method: &str) -> WeldResult<Option<&OverrideEntry>> {
        Ok(self.table(type_name)?.get(method))
    }

    /// Replacement argument list for a method
    pub fn override_args(&mut self, type_name: &str, method: &str) -> WeldResult<Option<&str>> {
        Ok(self.get_override(type_name, method)?.and_then(OverrideEntry::args))
    }

    /// Replacement return type for a method
    pub fn override_return(&mut self, type_name: &str, method: &str) -> WeldResult<Option<&str>> {
        Ok(self.get_override(type_name, method)?.and_then(OverrideEntry::returns))
    }
}

fn load_table(base_dir: &Path, type_name: &str) -> WeldResult<OverrideTable> {
    let file = override_document_name(type_name);
    let raw = include_file_if_present(base_dir, &file)?;

    if raw.trim().is_empty() {
        debug!(type_name, "no override document");
        return Ok(OverrideTable::new());
    }

    let table: OverrideTable = serde_json::from_str(&raw).map_err(|source| WeldError::MalformedOverride {
        path: base_dir.join(&file),
        source,
    })?;
    debug!(type_name, entries = table.len(), "loaded override document");
    Ok(table)
}
