//! Tsdecl-Weld: type mapping core for TypeScript declaration generation
//!
//! This crate turns host type descriptors into TypeScript type expressions
//! and provides the side tables a declaration generator consults while
//! emitting `.d.ts` files: signature overrides, import tracking, reserved
//! word escaping, npm scope resolution and doc link rendering.
//!
//! # Architecture
//!
//! - `ir`: Type descriptors, module metadata and doc tokens
//! - `codegen`: Type translation and text emission
//! - `registry`: Override documents and the npm scope registry
//! - `config`: Startup configuration
//!
//! # Usage
//!
//! ```rust
//! use tsdecl_weld::{ImportSession, PrimitiveKind, TypeDescriptor, TypeTranslator};
//!
//! let translator = TypeTranslator::new();
//! let mut session = ImportSession::new();
//!
//! let future = TypeDescriptor::api("io.vertx.core.Future", "vertx")
//!     .with_params(&["T"])
//!     .with_args(vec![TypeDescriptor::list(TypeDescriptor::primitive(PrimitiveKind::Int))]);
//!
//! assert_eq!(translator.translate(&future), "Future<number[]>");
//! assert!(!session.mark_and_check(&future));
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod ir;
pub mod registry;

// Re-export commonly used types
pub use codegen::{
    escape, flatten_doc, gen_generic, generate_doc, generate_license, include_file_if_present,
    is_reserved, render_link, translate, type_alias, ImportSession, TypeTranslator, ANY,
};
pub use config::GeneratorConfig;
pub use error::{WeldError, WeldResult};
pub use ir::{
    Doc, DocLink, DocToken, ElementKind, LinkElement, ModuleInfo, PrimitiveKind, TypeDescriptor,
    TypeKind,
};
pub use registry::{
    OverrideEntry, OverrideRegistry, OverrideTable, PackageName, RegistryEntry, RegistryState,
    ScopeRegistry,
};
