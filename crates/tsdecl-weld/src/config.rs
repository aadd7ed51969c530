//! Startup configuration
//!
//! Configuration is read once from the environment when the generator
//! starts and is read-only afterwards. List values are JSON arrays.
//!
//! | Variable | Value | Default |
//! |----------|-------|---------|
//! | `TSDECL_SCOPE_REGISTRY` | array of scope registry entries | `[]` |
//! | `TSDECL_OPTIONAL_DEPENDENCIES` | array of module names | `[]` |
//! | `TSDECL_CLASS_BLACKLIST` | array of qualified class names | `[]` |
//! | `TSDECL_BASEDIR` | directory holding override documents | current directory |

use crate::error::{WeldError, WeldResult};
use crate::registry::{RegistryEntry, ScopeRegistry};
use chrono::Datelike;
use serde::de::DeserializeOwned;
use std::env;
use std::path::PathBuf;

pub const SCOPE_REGISTRY_VAR: &str = "TSDECL_SCOPE_REGISTRY";
pub const OPTIONAL_DEPENDENCIES_VAR: &str = "TSDECL_OPTIONAL_DEPENDENCIES";
pub const CLASS_BLACKLIST_VAR: &str = "TSDECL_CLASS_BLACKLIST";
pub const BASEDIR_VAR: &str = "TSDECL_BASEDIR";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// npm scope registry
    pub scope_registry: ScopeRegistry,
    /// Modules emitted as optional dependencies
    pub optional_dependencies: Vec<String>,
    /// Classes skipped by the generator
    pub class_blacklist: Vec<String>,
    /// Directory override documents and includes are read from
    pub base_dir: PathBuf,
    /// Copyright year for license banners
    pub year: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scope_registry: ScopeRegistry::default(),
            optional_dependencies: Vec::new(),
            class_blacklist: Vec::new(),
            base_dir: PathBuf::from("."),
            year: chrono::Local::now().year(),
        }
    }
}

impl GeneratorConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> WeldResult<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> WeldResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SCOPE_REGISTRY_VAR) {
            config.scope_registry = ScopeRegistry::new(parse_json(SCOPE_REGISTRY_VAR, &raw)?);
        }
        if let Some(raw) = lookup(OPTIONAL_DEPENDENCIES_VAR) {
            config.optional_dependencies = parse_json(OPTIONAL_DEPENDENCIES_VAR, &raw)?;
        }
        if let Some(raw) = lookup(CLASS_BLACKLIST_VAR) {
            config.class_blacklist = parse_json(CLASS_BLACKLIST_VAR, &raw)?;
        }
        if let Some(dir) = lookup(BASEDIR_VAR) {
            config.base_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set the scope registry entries
    pub fn with_scope_registry(mut self, entries: Vec<RegistryEntry>) -> Self {
        self.scope_registry = ScopeRegistry::new(entries);
        self
    }

    /// Set the optional dependencies
    pub fn with_optional_dependencies(mut self, modules: &[&str]) -> Self {
        self.optional_dependencies = modules.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the class blacklist
    pub fn with_class_blacklist(mut self, classes: &[&str]) -> Self {
        self.class_blacklist = classes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the base directory
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Set the copyright year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Check if a module is an optional dependency
    pub fn is_optional_module(&self, name: &str) -> bool {
        self.optional_dependencies.iter().any(|m| m == name)
    }

    /// Check if a class is excluded from generation
    pub fn is_blacklisted_class(&self, name: &str) -> bool {
        self.class_blacklist.iter().any(|c| c == name)
    }
}

fn parse_json<T: DeserializeOwned>(var: &str, raw: &str) -> WeldResult<T> {
    serde_json::from_str(raw).map_err(|source| WeldError::Config {
        var: var.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ModuleInfo;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.scope_registry.entries().is_empty());
        assert!(config.optional_dependencies.is_empty());
        assert_eq!(config.base_dir, PathBuf::from("."));
        assert!(config.year >= 2024);
    }

    #[test]
    fn test_parse_variables() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            (
                SCOPE_REGISTRY_VAR,
                r#"[{ "group": "io.vertx", "scope": "vertx", "prefix": "vertx-", "stripPrefix": true }]"#,
            ),
            (OPTIONAL_DEPENDENCIES_VAR, r#"["vertx-rx"]"#),
            (CLASS_BLACKLIST_VAR, r#"["io.vertx.core.impl.Internal"]"#),
            (BASEDIR_VAR, "/tmp/overrides"),
        ]))
        .unwrap();

        assert_eq!(
            config
                .scope_registry
                .resolve_package_name(&ModuleInfo::new("vertx-web", "io.vertx")),
            "@vertx/web"
        );
        assert!(config.is_optional_module("vertx-rx"));
        assert!(!config.is_optional_module("vertx-web"));
        assert!(config.is_blacklisted_class("io.vertx.core.impl.Internal"));
        assert_eq!(config.base_dir, PathBuf::from("/tmp/overrides"));
    }

    #[test]
    fn test_malformed_value_is_fatal() {
        let err = GeneratorConfig::from_lookup(lookup(&[(OPTIONAL_DEPENDENCIES_VAR, "[vertx")])).unwrap_err();
        match err {
            WeldError::Config { var, .. } => assert_eq!(var, OPTIONAL_DEPENDENCIES_VAR),
            other => panic!("unexpected error: {}", other),
        }
    }
}
