//! Type descriptors for Tsdecl-Weld
//!
//! This module provides the representation of a single type occurrence in
//! the host module metadata. Descriptors are produced by the generation
//! driver and only read by the translator.
//!
//! # Kind Overview
//!
//! | Kind | Host Construct | TypeScript |
//! |------|----------------|------------|
//! | `String` | string | `string` |
//! | `Primitive` / `BoxedPrimitive` | numeric, boolean, char | `number`, `boolean`, `string` |
//! | `Enum` | enumeration | enum name or `any` |
//! | `Object` | type variable or plain object | variable name or `any` |
//! | `JsonObject` / `JsonArray` | opaque JSON | `{ [key: string]: any }`, `any[]` |
//! | `Throwable` | exception | `Error` |
//! | `Void` | void | `void` |
//! | `List` / `Set` | collection | `T[]` |
//! | `Map` | map | `{ [key: K]: V; }` |
//! | `Api` | generated API type | `Name<A, B>` |
//! | `DataObject` | data object | `Name` |
//! | `Handler` | callback | `((res: T) => void) \| Handler<T>` |
//! | `Function` | function | `(arg: A) => B` |
//! | `AsyncResult` | deferred result | `AsyncResult<T>` |
//! | `ClassType` | class literal | `any /* name */` |
//! | `Other` | anything else | alias or `any /* name */` |
//!
//! See [`crate::codegen::TypeTranslator`] for the translation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive kinds of the host type system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl PrimitiveKind {
    /// Unboxed simple name
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
        }
    }

    /// Boxed simple name
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Char => "Character",
        }
    }

    /// Convert to TypeScript type string
    ///
    /// Characters become `string`; single-character semantics are not kept.
    pub fn to_typescript(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Char => "string",
            PrimitiveKind::Byte
            | PrimitiveKind::Short
            | PrimitiveKind::Int
            | PrimitiveKind::Long
            | PrimitiveKind::Float
            | PrimitiveKind::Double => "number",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_typescript())
    }
}

/// Kind tag of a type occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// String-like type
    String,
    /// Unboxed primitive
    Primitive(PrimitiveKind),
    /// Boxed primitive
    BoxedPrimitive(PrimitiveKind),
    /// Enumeration
    Enum,
    /// Type variable or plain object
    Object,
    /// Opaque JSON object
    JsonObject,
    /// Opaque JSON array
    JsonArray,
    /// Exception type
    Throwable,
    /// Void
    Void,
    /// List<T>
    List,
    /// Set<T>
    Set,
    /// Map<K, V>
    Map,
    /// Generated API type
    Api,
    /// Data object
    DataObject,
    /// Handler<T> callback shape
    Handler,
    /// Function<A, B>
    Function,
    /// AsyncResult<T>
    AsyncResult,
    /// Class literal reference
    ClassType,
    /// Anything else
    Other,
}

/// A single type occurrence from the host module metadata
///
/// `qualified_name` and `simple_name` always refer to the raw type, without
/// type arguments. Use [`TypeDescriptor::name`] for the full rendered name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Kind tag
    pub kind: TypeKind,
    /// Simple name (e.g., "Buffer")
    pub simple_name: String,
    /// Fully qualified name (e.g., "io.vertx.core.buffer.Buffer")
    pub qualified_name: String,
    /// Owning generated module, absent for library types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    /// Type arguments, non-empty only when parameterized
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_args: Vec<TypeDescriptor>,
    /// Declared type parameter names of the raw type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    /// Whether this is a generic type variable
    #[serde(default)]
    pub is_variable: bool,
}

impl TypeDescriptor {
    /// Create a new descriptor
    pub fn new(kind: TypeKind, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = simple_name_of(&qualified_name).to_string();
        Self {
            kind,
            simple_name,
            qualified_name,
            module_name: None,
            type_args: Vec::new(),
            type_params: Vec::new(),
            is_variable: false,
        }
    }

    /// Create a string type
    pub fn string() -> Self {
        Self::new(TypeKind::String, "java.lang.String")
    }

    /// Create an unboxed primitive type
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(TypeKind::Primitive(kind), kind.name())
    }

    /// Create a boxed primitive type
    pub fn boxed(kind: PrimitiveKind) -> Self {
        Self::new(
            TypeKind::BoxedPrimitive(kind),
            format!("java.lang.{}", kind.boxed_name()),
        )
    }

    /// Create a void type
    pub fn void() -> Self {
        Self::new(TypeKind::Void, "void")
    }

    /// Create a generic type variable
    pub fn variable(name: impl Into<String>) -> Self {
        let mut ty = Self::new(TypeKind::Object, name);
        ty.is_variable = true;
        ty
    }

    /// Create a List<T> type
    pub fn list(element: TypeDescriptor) -> Self {
        Self::new(TypeKind::List, "java.util.List")
            .with_params(&["T"])
            .with_args(vec![element])
    }

    /// Create a Set<T> type
    pub fn set(element: TypeDescriptor) -> Self {
        Self::new(TypeKind::Set, "java.util.Set")
            .with_params(&["T"])
            .with_args(vec![element])
    }

    /// Create a Map<K, V> type
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::new(TypeKind::Map, "java.util.Map")
            .with_params(&["K", "V"])
            .with_args(vec![key, value])
    }

    /// Create a Handler<T> type
    pub fn handler(arg: TypeDescriptor) -> Self {
        Self::new(TypeKind::Handler, "io.vertx.core.Handler")
            .with_params(&["E"])
            .with_args(vec![arg])
    }

    /// Create a Function<A, B> type
    pub fn function(arg: TypeDescriptor, ret: TypeDescriptor) -> Self {
        Self::new(TypeKind::Function, "java.util.function.Function")
            .with_params(&["T", "R"])
            .with_args(vec![arg, ret])
    }

    /// Create an AsyncResult<T> type
    pub fn async_result(arg: TypeDescriptor) -> Self {
        Self::new(TypeKind::AsyncResult, "io.vertx.core.AsyncResult")
            .with_params(&["T"])
            .with_args(vec![arg])
    }

    /// Create an API type owned by a generated module
    pub fn api(qualified_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::new(TypeKind::Api, qualified_name).in_module(module)
    }

    /// Create a data object type owned by a generated module
    pub fn data_object(qualified_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::new(TypeKind::DataObject, qualified_name).in_module(module)
    }

    /// Set the owning module
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module_name = Some(module.into());
        self
    }

    /// Set type arguments
    pub fn with_args(mut self, args: Vec<TypeDescriptor>) -> Self {
        self.type_args = args;
        self
    }

    /// Set declared type parameters
    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.type_params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Drop type arguments, keeping the declared parameters
    pub fn raw(mut self) -> Self {
        self.type_args.clear();
        self
    }

    /// Check if the type carries type arguments
    pub fn is_parameterized(&self) -> bool {
        !self.type_args.is_empty()
    }

    /// Check if the type belongs to a generated module
    pub fn is_generated(&self) -> bool {
        self.module_name.is_some()
    }

    /// Full host name including type arguments
    pub fn name(&self) -> String {
        if self.type_args.is_empty() {
            return self.qualified_name.clone();
        }
        let args: Vec<String> = self.type_args.iter().map(|t| t.name()).collect();
        format!("{}<{}>", self.qualified_name, args.join(", "))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Last segment of a dotted name
fn simple_name_of(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
