//! C prototype rendering.
//!
//! Maps IDL type names to C spellings according to how a value is used
//! (an `in` parameter, an `out` parameter, a stored field, a return value),
//! decomposes members into signature components, and composes those into
//! declarations and function-pointer types.

mod category;
mod render;

pub use category::{TypeCategory, TypeMode};
pub use render::{compose, Arg, CGen, Components, SignatureStyle};
