//! TypeScript type expression translator
//!
//! Maps host type descriptors to TypeScript type expressions. Translation is
//! total: host types without a TypeScript counterpart degrade to `any`,
//! annotated with the host name, and are reported as warnings.

use crate::ir::{TypeDescriptor, TypeKind};
use indexmap::IndexSet;
use lazy_static::lazy_static;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::warn;

/// Fallback type for host types with no TypeScript counterpart
pub const ANY: &str = "any";

lazy_static! {
    /// Known host types with fixed TypeScript text, keyed by full host name
    static ref TYPE_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            "io.vertx.core.Closeable",
            "(completionHandler: ((res: AsyncResult<void>) => void) | Handler<AsyncResult<void>>) => void",
        );
        m.insert("java.lang.CharSequence", "string");
        m.insert("java.lang.Iterable<java.lang.String>", "string[]");
        m.insert("java.lang.Iterable<java.lang.CharSequence>", "string[]");
        m.insert("java.lang.Boolean[]", "boolean[]");
        m.insert("java.lang.Double[]", "number[]");
        m.insert("java.lang.Float[]", "number[]");
        m.insert("java.lang.Integer[]", "number[]");
        m.insert("java.lang.Long[]", "number[]");
        m.insert("java.lang.Short[]", "number[]");
        m.insert("java.lang.String[]", "string[]");
        m.insert("java.time.Instant", "Date");
        m.insert("java.time.LocalDate", "Date");
        m.insert("java.time.LocalDateTime", "Date");
        m.insert("java.time.ZonedDateTime", "Date");
        m
    };
}

/// Look up the fixed TypeScript text for a host type name
pub fn type_alias(name: &str) -> Option<&'static str> {
    TYPE_ALIASES.get(name).copied()
}

/// Translate a descriptor with a throwaway translator
pub fn translate(ty: &TypeDescriptor) -> String {
    TypeTranslator::new().translate(ty)
}

/// Generate a TypeScript type parameter list (`<T, U>`), empty when there are none
pub fn gen_generic<S: AsRef<str>>(params: &[S]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = params.iter().map(|p| p.as_ref()).collect();
    format!("<{}>", names.join(", "))
}

/// Translator from host type descriptors to TypeScript type expressions
///
/// The translator has no state besides the record of unmapped host names,
/// which is kept for inspection after a generation run.
#[derive(Debug, Default)]
pub struct TypeTranslator {
    unmapped: RefCell<IndexSet<String>>,
}

impl TypeTranslator {
    /// Create a new translator
    pub fn new() -> Self {
        Self::default()
    }

    /// Host names that fell back to `any`, in first-seen order
    pub fn unmapped(&self) -> Vec<String> {
        self.unmapped.borrow().iter().cloned().collect()
    }

    /// Translate a descriptor to a TypeScript type expression
    pub fn translate(&self, ty: &TypeDescriptor) -> String {
        match ty.kind {
            TypeKind::String => "string".to_string(),

            TypeKind::Primitive(p) | TypeKind::BoxedPrimitive(p) => p.to_typescript().to_string(),

            TypeKind::Enum => {
                if ty.is_generated() {
                    ty.simple_name.clone()
                } else {
                    ANY.to_string()
                }
            }

            TypeKind::Object => {
                if ty.is_variable {
                    ty.simple_name.clone()
                } else {
                    ANY.to_string()
                }
            }

            TypeKind::JsonObject => "{ [key: string]: any }".to_string(),

            TypeKind::JsonArray => "any[]".to_string(),

            TypeKind::Throwable => "Error".to_string(),

            TypeKind::Void => "void".to_string(),

            TypeKind::List | TypeKind::Set => match ty.type_args.first() {
                Some(element) => format!("{}[]", self.translate(element)),
                None => "any[]".to_string(),
            },

            TypeKind::Map => match ty.type_args.as_slice() {
                [key, value] => format!(
                    "{{ [key: {}]: {}; }}",
                    self.translate(key),
                    self.translate(value)
                ),
                _ => "{ [key: string]: any }".to_string(),
            },

            TypeKind::Api => self.translate_api(ty),

            TypeKind::DataObject => ty.simple_name.clone(),

            TypeKind::Handler => {
                let arg = self.translate_first_arg(ty);
                format!("((res: {}) => void) | Handler<{}>", arg, arg)
            }

            TypeKind::Function => match ty.type_args.as_slice() {
                [arg, ret] => format!(
                    "(arg: {}) => {}",
                    self.translate(arg),
                    self.translate(ret)
                ),
                _ => "(arg: any) => any".to_string(),
            },

            TypeKind::AsyncResult => format!("AsyncResult<{}>", self.translate_first_arg(ty)),

            TypeKind::ClassType => annotated_any(&ty.name()),

            TypeKind::Other => {
                let name = ty.name();
                match type_alias(&name) {
                    Some(alias) => alias.to_string(),
                    None => self.unmappable(name),
                }
            }
        }
    }

    /// Generated API types keep their generic arity
    ///
    /// TypeScript rejects a generic type used without arguments, so a raw
    /// reference to a generic API type gets `any` for each parameter.
    fn translate_api(&self, ty: &TypeDescriptor) -> String {
        let base = type_alias(&ty.qualified_name).unwrap_or(ty.simple_name.as_str());

        let args: Vec<String> = if ty.is_parameterized() {
            ty.type_args.iter().map(|t| self.translate(t)).collect()
        } else {
            ty.type_params.iter().map(|_| ANY.to_string()).collect()
        };

        if args.is_empty() {
            base.to_string()
        } else {
            format!("{}<{}>", base, args.join(", "))
        }
    }

    fn translate_first_arg(&self, ty: &TypeDescriptor) -> String {
        match ty.type_args.first() {
            Some(arg) => self.translate(arg),
            None => ANY.to_string(),
        }
    }

    fn unmappable(&self, name: String) -> String {
        warn!(type_name = %name, "no TypeScript mapping for host type, using any");
        let text = annotated_any(&name);
        self.unmapped.borrow_mut().insert(name);
        text
    }
}

fn annotated_any(name: &str) -> String {
    format!("{} /* {} */", ANY, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::PrimitiveKind;
    use pretty_assertions::assert_eq;

    fn int() -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveKind::Int)
    }

    fn buffer() -> TypeDescriptor {
        TypeDescriptor::api("io.vertx.core.buffer.Buffer", "vertx")
    }

    #[test]
    fn test_scalars() {
        assert_eq!(translate(&TypeDescriptor::string()), "string");
        assert_eq!(translate(&int()), "number");
        assert_eq!(translate(&TypeDescriptor::boxed(PrimitiveKind::Double)), "number");
        assert_eq!(translate(&TypeDescriptor::boxed(PrimitiveKind::Boolean)), "boolean");
        assert_eq!(translate(&TypeDescriptor::primitive(PrimitiveKind::Char)), "string");
        assert_eq!(translate(&TypeDescriptor::void()), "void");
        assert_eq!(
            translate(&TypeDescriptor::new(TypeKind::Throwable, "java.lang.Throwable")),
            "Error"
        );
        assert_eq!(
            translate(&TypeDescriptor::new(TypeKind::JsonObject, "io.vertx.core.json.JsonObject")),
            "{ [key: string]: any }"
        );
        assert_eq!(
            translate(&TypeDescriptor::new(TypeKind::JsonArray, "io.vertx.core.json.JsonArray")),
            "any[]"
        );
    }

    #[test]
    fn test_enums_and_objects() {
        let gen_enum = TypeDescriptor::new(TypeKind::Enum, "io.vertx.core.http.HttpMethod").in_module("vertx");
        assert_eq!(translate(&gen_enum), "HttpMethod");

        let foreign_enum = TypeDescriptor::new(TypeKind::Enum, "java.util.concurrent.TimeUnit");
        assert_eq!(translate(&foreign_enum), "any");

        assert_eq!(translate(&TypeDescriptor::variable("T")), "T");
        assert_eq!(translate(&TypeDescriptor::new(TypeKind::Object, "java.lang.Object")), "any");
    }

    #[test]
    fn test_collections() {
        assert_eq!(translate(&TypeDescriptor::list(TypeDescriptor::string())), "string[]");
        assert_eq!(translate(&TypeDescriptor::set(buffer())), "Buffer[]");
        assert_eq!(
            translate(&TypeDescriptor::list(TypeDescriptor::list(int()))),
            "number[][]"
        );
        assert_eq!(translate(&TypeDescriptor::list(int()).raw()), "any[]");
        assert_eq!(translate(&TypeDescriptor::set(int()).raw()), "any[]");
    }

    #[test]
    fn test_maps() {
        let map = TypeDescriptor::map(TypeDescriptor::string(), TypeDescriptor::list(int()));
        assert_eq!(translate(&map), "{ [key: string]: number[]; }");
        assert_eq!(translate(&map.raw()), "{ [key: string]: any }");
    }

    #[test]
    fn test_generic_api_with_arguments() {
        let pair = TypeDescriptor::api("io.example.Pair", "example")
            .with_params(&["A", "B"])
            .with_args(vec![int(), TypeDescriptor::boxed(PrimitiveKind::Long)]);
        assert_eq!(translate(&pair), "Pair<number, number>");

        let nested = TypeDescriptor::api("io.vertx.core.Future", "vertx")
            .with_params(&["T"])
            .with_args(vec![TypeDescriptor::list(buffer())]);
        assert_eq!(translate(&nested), "Future<Buffer[]>");
    }

    #[test]
    fn test_raw_generic_api_gets_any_arguments() {
        let pair = TypeDescriptor::api("io.example.Pair", "example").with_params(&["A", "B"]);
        assert_eq!(translate(&pair), "Pair<any, any>");
        assert_eq!(translate(&buffer()), "Buffer");
    }

    #[test]
    fn test_api_alias_substitution() {
        let closeable = TypeDescriptor::api("io.vertx.core.Closeable", "vertx");
        assert_eq!(translate(&closeable), type_alias("io.vertx.core.Closeable").unwrap());
    }

    #[test]
    fn test_api_alias_is_generic_base() {
        let parameterized = TypeDescriptor::api("java.lang.CharSequence", "vertx")
            .with_params(&["A", "B"])
            .with_args(vec![int(), TypeDescriptor::boxed(PrimitiveKind::Short)]);
        assert_eq!(translate(&parameterized), "string<number, number>");

        let raw = parameterized.raw();
        assert_eq!(translate(&raw), "string<any, any>");

        let instant = TypeDescriptor::api("java.time.Instant", "vertx").with_params(&["T"]);
        assert_eq!(translate(&instant), "Date<any>");
    }

    #[test]
    fn test_data_object_erases_generics() {
        let options = TypeDescriptor::data_object("io.vertx.core.http.HttpServerOptions", "vertx")
            .with_params(&["T"])
            .with_args(vec![int()]);
        assert_eq!(translate(&options), "HttpServerOptions");
    }

    #[test]
    fn test_callback_shapes() {
        assert_eq!(
            translate(&TypeDescriptor::handler(TypeDescriptor::async_result(buffer()))),
            "((res: AsyncResult<Buffer>) => void) | Handler<AsyncResult<Buffer>>"
        );
        assert_eq!(
            translate(&TypeDescriptor::handler(int()).raw()),
            "((res: any) => void) | Handler<any>"
        );
        assert_eq!(
            translate(&TypeDescriptor::function(TypeDescriptor::string(), int())),
            "(arg: string) => number"
        );
        assert_eq!(
            translate(&TypeDescriptor::function(int(), int()).raw()),
            "(arg: any) => any"
        );
        assert_eq!(translate(&TypeDescriptor::async_result(int()).raw()), "AsyncResult<any>");
    }

    #[test]
    fn test_alias_table_for_other_kinds() {
        let strings = TypeDescriptor::new(TypeKind::Other, "java.lang.String[]");
        assert_eq!(translate(&strings), "string[]");

        let instant = TypeDescriptor::new(TypeKind::Other, "java.time.Instant");
        assert_eq!(translate(&instant), "Date");

        let iterable = TypeDescriptor::new(TypeKind::Other, "java.lang.Iterable")
            .with_params(&["T"])
            .with_args(vec![TypeDescriptor::string()]);
        assert_eq!(translate(&iterable), "string[]");
    }

    #[test]
    fn test_unmapped_types_degrade() {
        let translator = TypeTranslator::new();
        let uuid = TypeDescriptor::new(TypeKind::Other, "java.util.UUID");

        assert_eq!(translator.translate(&uuid), "any /* java.util.UUID */");
        assert_eq!(
            translator.translate(&TypeDescriptor::list(uuid.clone())),
            "any /* java.util.UUID */[]"
        );
        assert_eq!(translator.unmapped(), vec!["java.util.UUID".to_string()]);

        let class = TypeDescriptor::new(TypeKind::ClassType, "java.lang.Class");
        assert_eq!(translator.translate(&class), "any /* java.lang.Class */");
    }

    #[test]
    fn test_gen_generic() {
        assert_eq!(gen_generic::<&str>(&[]), "");
        assert_eq!(gen_generic(&["T"]), "<T>");
        assert_eq!(gen_generic(&["K".to_string(), "V".to_string()]), "<K, V>");
    }
}
