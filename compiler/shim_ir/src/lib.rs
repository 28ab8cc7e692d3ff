//! Interface definition tree for the shim generator.
//!
//! Everything the generator knows about an IDL source set lives here:
//! files, release labels, interfaces, members, and the declared types they
//! reference. The tree is built once by `shim_parse` and is read-only from
//! then on.
//!
//! # Versioning model
//!
//! ```text
//! label Chrome { M13 = 0.5, M14 = 1.0 }     ReleaseTable
//!        │
//!        ▼
//! Release { name: "M14", version: 1.0 }
//!        │  compared against
//!        ▼
//! Availability { since, deprecated }          on interfaces, members, params
//! ```

mod ast;
mod builtin;
mod release;
mod span;
mod version;

pub use ast::{
    AggregateKind, ArrayDim, Ast, Directionality, EnumDef, EnumVariant, Field, Interface, Member,
    Param, ParamMode, SourceFile, StructDef, TypeDecl, Typedef, TypedefKind,
};
pub use builtin::{lookup_builtin, Builtin, BuiltinKind, BUILTINS};
pub use release::{Availability, Release, ReleaseTable};
pub use span::Span;
pub use version::Version;
