//! Builtin IDL type names.
//!
//! These names need no declaration in any IDL file. Each has a fixed C
//! spelling and a passing category that decides how parameter modes render.

/// How a builtin type is passed in C.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinKind {
    /// `void`, only meaningful as a return type.
    Void,
    /// Scalars: passed by value for `in`, by pointer for `out`/`inout`.
    Value,
    /// `mem_t` → `void*`.
    Mem,
    /// `mem_ptr_t` → `void**`.
    MemPtr,
    /// `str_t` → `char*`.
    Str,
    /// `cstr_t` → `const char*`.
    CStr,
    /// `interface_t` → `const void*`.
    Interface,
}

/// A builtin IDL type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Builtin {
    /// Name as written in IDL.
    pub idl: &'static str,
    /// C spelling of the stored type.
    pub c: &'static str,
    pub kind: BuiltinKind,
}

const fn builtin(idl: &'static str, c: &'static str, kind: BuiltinKind) -> Builtin {
    Builtin { idl, c, kind }
}

/// All builtin types.
pub const BUILTINS: &[Builtin] = &[
    builtin("void", "void", BuiltinKind::Void),
    builtin("char", "char", BuiltinKind::Value),
    builtin("int", "int", BuiltinKind::Value),
    builtin("int8_t", "int8_t", BuiltinKind::Value),
    builtin("uint8_t", "uint8_t", BuiltinKind::Value),
    builtin("int16_t", "int16_t", BuiltinKind::Value),
    builtin("uint16_t", "uint16_t", BuiltinKind::Value),
    builtin("int32_t", "int32_t", BuiltinKind::Value),
    builtin("uint32_t", "uint32_t", BuiltinKind::Value),
    builtin("int64_t", "int64_t", BuiltinKind::Value),
    builtin("uint64_t", "uint64_t", BuiltinKind::Value),
    builtin("size_t", "size_t", BuiltinKind::Value),
    builtin("float_t", "float", BuiltinKind::Value),
    builtin("double_t", "double", BuiltinKind::Value),
    builtin("handle_t", "int", BuiltinKind::Value),
    builtin("mem_t", "void*", BuiltinKind::Mem),
    builtin("mem_ptr_t", "void**", BuiltinKind::MemPtr),
    builtin("str_t", "char*", BuiltinKind::Str),
    builtin("cstr_t", "const char*", BuiltinKind::CStr),
    builtin("interface_t", "const void*", BuiltinKind::Interface),
];

/// Look up a builtin by its IDL name.
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.idl == name)
}
