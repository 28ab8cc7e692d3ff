//! Passing categories and the per-mode rendering table.

use shim_ir::{BuiltinKind, ParamMode};

/// How a value of some type is being used.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeMode {
    In,
    Out,
    InOut,
    /// A stored field, or a local.
    Store,
    /// A function's return value.
    Return,
}

impl From<ParamMode> for TypeMode {
    fn from(mode: ParamMode) -> Self {
        match mode {
            ParamMode::In => TypeMode::In,
            ParamMode::Out => TypeMode::Out,
            ParamMode::InOut => TypeMode::InOut,
        }
    }
}

/// How values of a named type are passed in C.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeCategory {
    Void,
    /// Scalars, enums and plain aliases, spelled `c`.
    Value(String),
    /// `struct S` or `union U`. `by_value` marks `[passByValue]`.
    Aggregate { c: String, by_value: bool },
    /// A function-pointer typedef; the name is already a pointer type.
    Function(String),
    Mem,
    MemPtr,
    Str,
    CStr,
    Interface,
}

impl TypeCategory {
    pub fn from_builtin(kind: BuiltinKind, c: &str) -> Self {
        match kind {
            BuiltinKind::Void => TypeCategory::Void,
            BuiltinKind::Value => TypeCategory::Value(c.to_string()),
            BuiltinKind::Mem => TypeCategory::Mem,
            BuiltinKind::MemPtr => TypeCategory::MemPtr,
            BuiltinKind::Str => TypeCategory::Str,
            BuiltinKind::CStr => TypeCategory::CStr,
            BuiltinKind::Interface => TypeCategory::Interface,
        }
    }

    /// C spelling of this type used in `mode`.
    pub fn render(&self, mode: TypeMode) -> String {
        use TypeMode::{In, InOut, Out, Return, Store};
        match (self, mode) {
            (TypeCategory::Void, _) => "void".to_string(),

            (TypeCategory::Value(c), In | Store | Return) => c.clone(),
            (TypeCategory::Value(c), Out | InOut) => format!("{c}*"),

            (TypeCategory::Aggregate { c, by_value: false }, In) => format!("const {c}*"),
            (TypeCategory::Aggregate { c, by_value: true }, In)
            | (TypeCategory::Aggregate { c, .. }, Store | Return) => c.clone(),
            (TypeCategory::Aggregate { c, .. }, Out | InOut) => format!("{c}*"),

            (TypeCategory::Function(name), _) => name.clone(),

            (TypeCategory::Mem, In) => "const void*".to_string(),
            (TypeCategory::Mem, _) => "void*".to_string(),

            (TypeCategory::MemPtr, In) => "const void**".to_string(),
            (TypeCategory::MemPtr, _) => "void**".to_string(),

            (TypeCategory::Str, In | Return) => "const char*".to_string(),
            (TypeCategory::Str, Out | InOut | Store) => "char*".to_string(),

            (TypeCategory::CStr, Out | InOut) => "const char**".to_string(),
            (TypeCategory::CStr, _) => "const char*".to_string(),

            (TypeCategory::Interface, Out | InOut) => "const void**".to_string(),
            (TypeCategory::Interface, _) => "const void*".to_string(),
        }
    }

    /// C spelling of an array element type in `mode`. Arrays already decay
    /// to pointers, so only `in` adds a `const`.
    pub fn render_array(&self, mode: TypeMode) -> String {
        let store = self.render(TypeMode::Store);
        match mode {
            TypeMode::In => format!("const {store}"),
            _ => store,
        }
    }
}
