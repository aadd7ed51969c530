//! Code generation for TypeScript declarations
//!
//! This module provides:
//! - Type expression translation (typescript)
//! - Reserved identifier escaping (reserved)
//! - Per-file import tracking (imports)
//! - Doc comment and cross-reference rendering (doc)
//! - License banners and file inclusion (license)

pub mod doc;
pub mod imports;
pub mod license;
pub mod reserved;
pub mod typescript;

pub use doc::{flatten_doc, generate_doc, render_link};
pub use imports::ImportSession;
pub use license::{generate_license, include_file_if_present};
pub use reserved::{escape, is_reserved};
pub use typescript::{gen_generic, translate, type_alias, TypeTranslator, ANY};
