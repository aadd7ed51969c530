//! Intermediate Representation (IR) for Tsdecl-Weld
//!
//! This module provides the structures the generation driver hands to the
//! type mapping core: type descriptors, module metadata and doc tokens.

pub mod link;
pub mod module;
pub mod types;

pub use link::*;
pub use module::*;
pub use types::*;
