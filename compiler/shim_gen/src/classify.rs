//! Type classification.
//!
//! A type needs a shim when it is an aggregate passed by value: pointers
//! and arrays already travel as addresses under both calling conventions.

use bitflags::bitflags;
use shim_ir::ArrayDim;

bitflags! {
    /// Facts about one rendered C type, parsed once from its text.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFacts: u8 {
        /// Declared with the `struct` or `union` keyword.
        const AGGREGATE = 1 << 0;
        /// Contains a `*`.
        const POINTER = 1 << 1;
        /// Has at least one array dimension.
        const ARRAY = 1 << 2;
    }
}

impl TypeFacts {
    /// Classify C type text plus its array dimensions.
    pub fn of(ty: &str, dims: &[ArrayDim]) -> Self {
        let mut facts = TypeFacts::empty();
        if ty.starts_with("struct") || ty.starts_with("union") {
            facts |= TypeFacts::AGGREGATE;
        }
        if ty.contains('*') {
            facts |= TypeFacts::POINTER;
        }
        if !dims.is_empty() {
            facts |= TypeFacts::ARRAY;
        }
        facts
    }

    #[inline]
    pub fn is_reference(self) -> bool {
        self.intersects(TypeFacts::POINTER | TypeFacts::ARRAY)
    }

    #[inline]
    pub fn needs_wrapping(self) -> bool {
        self.contains(TypeFacts::AGGREGATE) && !self.is_reference()
    }
}

/// Whether passing `ty` with `dims` differs between the two ABIs.
pub fn type_needs_wrapping(ty: &str, dims: &[ArrayDim]) -> bool {
    TypeFacts::of(ty, dims).needs_wrapping()
}
