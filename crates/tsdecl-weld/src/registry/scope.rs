//! npm package naming for generated modules
//!
//! The scope registry maps a host package group to an npm scope and
//! describes how module names become package names. Entries are scanned in
//! order and every entry whose group matches is applied, so later entries
//! overwrite earlier ones: the scope comes from the last matching entry and
//! the name from the last matching entry that derived a non-empty one.

use crate::ir::ModuleInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One row of the scope registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Host package group this entry applies to
    pub group: String,

    /// npm scope, with or without the leading `@` and trailing `/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Module name prefix selecting the modules this entry names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Whether to drop `prefix` from the module name
    #[serde(default)]
    pub strip_prefix: bool,

    /// Exact module name for an explicit `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Package name used when `module` matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RegistryEntry {
    /// Create an entry for a package group
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            ..Default::default()
        }
    }

    /// Set the npm scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Name modules starting with `prefix`, optionally stripping it
    pub fn with_prefix(mut self, prefix: impl Into<String>, strip: bool) -> Self {
        self.prefix = Some(prefix.into());
        self.strip_prefix = strip;
        self
    }

    /// Give an exact module an explicit package name
    pub fn with_module_name(mut self, module: impl Into<String>, name: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self.name = Some(name.into());
        self
    }

    /// Scope normalized to `@scope/`, empty when unset
    pub fn normalized_scope(&self) -> String {
        let scope = match self.scope.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => return String::new(),
        };

        let mut normalized = String::with_capacity(scope.len() + 2);
        if !scope.starts_with('@') {
            normalized.push('@');
        }
        normalized.push_str(scope);
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        normalized
    }

    /// Package name this entry derives for a module, if any
    ///
    /// An explicit module mapping wins over prefix matching.
    fn derive_name(&self, module_name: &str) -> Option<String> {
        if let (Some(module), Some(name)) = (&self.module, &self.name) {
            if module == module_name {
                return Some(name.clone());
            }
        }

        let prefix = self.prefix.as_deref()?;
        let rest = module_name.strip_prefix(prefix)?;
        if self.strip_prefix {
            Some(rest.to_string())
        } else {
            Some(module_name.to_string())
        }
    }
}

/// Resolved npm package name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName {
    /// Normalized scope (`@scope/`), empty when unscoped
    pub scope: String,
    /// Bare package name
    pub name: String,
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.scope, self.name)
    }
}

/// Ordered scope registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeRegistry {
    entries: Vec<RegistryEntry>,
}

impl ScopeRegistry {
    /// Create a registry from ordered entries
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// Registry entries in scan order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Resolve the package name for a module
    pub fn resolve(&self, module: &ModuleInfo) -> PackageName {
        let mut scope = String::new();
        let mut name = String::new();

        for entry in self.entries.iter().filter(|e| e.group == module.group_package) {
            scope = entry.normalized_scope();
            match entry.derive_name(&module.name) {
                Some(derived) if !derived.is_empty() => name = derived,
                _ => {}
            }
        }

        if name.is_empty() {
            name = module.name.clone();
        }

        debug!(module = %module.name, scope = %scope, name = %name, "resolved package name");
        PackageName { scope, name }
    }

    /// Resolve the full package name (`@scope/name`) for a module
    pub fn resolve_package_name(&self, module: &ModuleInfo) -> String {
        self.resolve(module).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> ModuleInfo {
        ModuleInfo::new(name, "io.vertx")
    }

    #[test]
    fn test_unregistered_group_uses_module_name() {
        let registry = ScopeRegistry::new(vec![RegistryEntry::new("io.reactiverse").with_scope("reactiverse")]);
        assert_eq!(registry.resolve_package_name(&module("vertx-web")), "vertx-web");
        assert_eq!(ScopeRegistry::default().resolve_package_name(&module("vertx-web")), "vertx-web");
    }

    #[test]
    fn test_scope_normalization() {
        assert_eq!(RegistryEntry::new("g").with_scope("vertx").normalized_scope(), "@vertx/");
        assert_eq!(RegistryEntry::new("g").with_scope("@vertx").normalized_scope(), "@vertx/");
        assert_eq!(RegistryEntry::new("g").with_scope("vertx/").normalized_scope(), "@vertx/");
        assert_eq!(RegistryEntry::new("g").with_scope("").normalized_scope(), "");
        assert_eq!(RegistryEntry::new("g").normalized_scope(), "");
    }

    #[test]
    fn test_prefix_rules() {
        let strip = ScopeRegistry::new(vec![RegistryEntry::new("io.vertx")
            .with_scope("vertx")
            .with_prefix("vertx-", true)]);
        assert_eq!(strip.resolve_package_name(&module("vertx-web")), "@vertx/web");
        assert_eq!(strip.resolve_package_name(&module("mod-web")), "@vertx/mod-web");

        let keep = ScopeRegistry::new(vec![RegistryEntry::new("io.vertx")
            .with_scope("vertx")
            .with_prefix("vertx-", false)]);
        assert_eq!(keep.resolve_package_name(&module("vertx-web")), "@vertx/vertx-web");
    }

    #[test]
    fn test_explicit_module_name_wins_over_prefix() {
        let registry = ScopeRegistry::new(vec![RegistryEntry::new("io.vertx")
            .with_scope("vertx")
            .with_prefix("vertx-", true)
            .with_module_name("vertx-core", "core-api")]);
        assert_eq!(registry.resolve_package_name(&module("vertx-core")), "@vertx/core-api");
        assert_eq!(registry.resolve_package_name(&module("vertx-web")), "@vertx/web");
    }

    #[test]
    fn test_prefix_equal_to_module_name_falls_back() {
        let registry = ScopeRegistry::new(vec![RegistryEntry::new("io.vertx")
            .with_scope("vertx")
            .with_prefix("vertx", true)]);
        assert_eq!(registry.resolve_package_name(&module("vertx")), "@vertx/vertx");
    }

    #[test]
    fn test_last_matching_entry_wins() {
        let registry = ScopeRegistry::new(vec![
            RegistryEntry::new("io.vertx")
                .with_scope("first")
                .with_module_name("vertx-web", "alpha"),
            RegistryEntry::new("io.vertx").with_scope("second"),
        ]);
        let resolved = registry.resolve(&module("vertx-web"));
        assert_eq!(resolved.name, "alpha");
        assert_eq!(resolved.scope, "@second/");
        assert_eq!(resolved.to_string(), "@second/alpha");

        let overwritten = ScopeRegistry::new(vec![
            RegistryEntry::new("io.vertx").with_module_name("vertx-web", "alpha"),
            RegistryEntry::new("io.vertx").with_module_name("vertx-web", "beta"),
        ]);
        assert_eq!(overwritten.resolve_package_name(&module("vertx-web")), "beta");
    }

    #[test]
    fn test_empty_derived_name_keeps_earlier_name() {
        let stripped = ScopeRegistry::new(vec![
            RegistryEntry::new("io.vertx").with_module_name("vertx", "alpha"),
            RegistryEntry::new("io.vertx")
                .with_scope("second")
                .with_prefix("vertx", true),
        ]);
        let resolved = stripped.resolve(&module("vertx"));
        assert_eq!(resolved.name, "alpha");
        assert_eq!(resolved.scope, "@second/");

        let blank = ScopeRegistry::new(vec![
            RegistryEntry::new("io.vertx").with_module_name("vertx-web", "alpha"),
            RegistryEntry::new("io.vertx").with_module_name("vertx-web", ""),
        ]);
        assert_eq!(blank.resolve_package_name(&module("vertx-web")), "alpha");
    }

    #[test]
    fn test_deserialize_registry() {
        let json = r#"[
            { "group": "io.vertx", "scope": "vertx", "prefix": "vertx-", "stripPrefix": true },
            { "group": "io.reactiverse", "module": "es4x", "name": "runtime" }
        ]"#;
        let registry: ScopeRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.entries().len(), 2);
        assert!(registry.entries()[0].strip_prefix);
        assert_eq!(
            registry.resolve_package_name(&ModuleInfo::new("es4x", "io.reactiverse")),
            "runtime"
        );
    }
}
