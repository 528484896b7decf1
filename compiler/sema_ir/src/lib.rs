//! Sema IR - Binder and Operation Tree Types
//!
//! This crate holds the data on both sides of semantic lowering:
//! - [`bound`]: the resolver's fine-grained binder tree, flattened into an
//!   arena of `BoundId`-indexed nodes
//! - [`operation`]: the reduced, lazily materialized operation tree that
//!   analyzers consume
//! - Shared handles: spans and anchors, interned names, types, symbols,
//!   constants and the semantic session handle
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), Types → TypeId(u32),
//!   Declarations → SymbolId(u32)
//! - **Flatten the Input**: binder children are `BoundId`s and `BoundRange`s,
//!   never boxes
//! - **Share the Output**: operations are `Arc`s so identity can be compared
//!   and handed across threads
//!
//! Float constants are stored as u64 bits for Hash compatibility.

pub mod bound;
mod constant;
mod interner;
mod name;
pub mod operation;
mod semantic;
mod span;
mod symbol;
mod types;

pub use constant::ConstantValue;
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use semantic::SemanticModel;
pub use span::{Anchor, Span};
pub use symbol::{
    MethodSymbol, ParameterSymbol, PropertySymbol, RefKind, Symbol, SymbolId, SymbolKind,
    SymbolTable,
};
pub use types::{TypeId, TypeKind, TypePool};
