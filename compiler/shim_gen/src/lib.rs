//! PNaCl calling-convention shim generator.
//!
//! Restricted-ABI code cannot pass `struct`/`union` values by value to
//! conventional-ABI code or receive them back. For every interface version
//! where some member does so, this crate emits forwarding shims and a
//! wrapper table; every other version is handed out unchanged.
//!
//! # Pipeline
//!
//! ```text
//! Ast ──▶ WrapAnalyzer (classify) ──▶ ShimEmitter ──▶ ShimGenerator ──▶ .c file
//!          per member / version        per member     per release range
//! ```
//!
//! Verdicts are pure functions of the tree and the [`GenConfig`]; running
//! the generator twice produces identical text.

mod analysis;
mod classify;
mod config;
mod driver;
mod emit;
mod error;
mod names;
mod preamble;
mod writer;

pub use analysis::WrapAnalyzer;
pub use classify::{type_needs_wrapping, TypeFacts};
pub use config::GenConfig;
pub use driver::{
    generate_range, unknown_releases, GenSummary, InterfaceVersion, ShimGenerator,
    WrapperTableEntry,
};
pub use emit::{return_args, ShimEmitter, ShimTarget};
pub use error::GenError;
pub use names::ShimNames;
