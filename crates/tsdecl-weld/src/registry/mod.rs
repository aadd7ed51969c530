//! Process-lifetime registries
//!
//! Both registries are read-mostly state owned by the long-lived generator.
//! Nothing here is global: callers own a [`RegistryState`] and pass it to
//! the code that needs it.

pub mod overrides;
pub mod scope;

pub use overrides::{override_document_name, OverrideEntry, OverrideRegistry, OverrideTable};
pub use scope::{PackageName, RegistryEntry, ScopeRegistry};

use crate::config::GeneratorConfig;
use crate::ir::ModuleInfo;

/// Registries shared by every generation run of one process
#[derive(Debug)]
pub struct RegistryState {
    /// Signature overrides, loaded on demand
    pub overrides: OverrideRegistry,
    /// npm scope registry
    pub scopes: ScopeRegistry,
}

impl RegistryState {
    /// Build the registries from startup configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            overrides: OverrideRegistry::new(config.base_dir.clone()),
            scopes: config.scope_registry.clone(),
        }
    }

    /// Resolve the npm package name for a module
    pub fn resolve_package_name(&self, module: &ModuleInfo) -> String {
        self.scopes.resolve_package_name(module)
    }
}
