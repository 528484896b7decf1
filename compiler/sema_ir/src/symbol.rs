//! Resolved declarations.
//!
//! The binder tree and the operation tree both refer to declarations by
//! [`SymbolId`]. The table is filled by the resolver and read-only afterwards.

use std::fmt;

use crate::{ConstantValue, Name, TypeId};

/// Index into the [`SymbolTable`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        SymbolId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// How an argument is passed to its parameter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

/// A formal parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSymbol {
    /// Zero-based position in the owner's parameter list.
    pub ordinal: u32,
    pub ref_kind: RefKind,
    /// Declared default (`= 5`); `None` for required parameters.
    pub default: Option<ConstantValue>,
    /// Declared with `params`; always the last parameter.
    pub is_params: bool,
}

/// A method, constructor, accessor or local function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSymbol {
    pub parameters: Vec<SymbolId>,
    pub is_static: bool,
    /// Declared virtual, abstract or override.
    pub is_virtual: bool,
    /// Extension method: the receiver is passed as the first argument.
    pub is_extension: bool,
    /// Placeholder the resolver created for a member it could not find.
    pub is_error: bool,
}

/// A property or indexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySymbol {
    /// Indexer parameters; empty for ordinary properties.
    pub parameters: Vec<SymbolId>,
    pub is_static: bool,
    pub is_error: bool,
}

/// Declaration-specific payload of a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Local,
    Parameter(ParameterSymbol),
    Field { is_static: bool },
    Property(PropertySymbol),
    Event { is_static: bool },
    Method(MethodSymbol),
    Label,
    RangeVariable,
}

/// A resolved declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: Name,
    /// Declared type; return type for methods.
    pub ty: Option<TypeId>,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: Name, ty: Option<TypeId>, kind: SymbolKind) -> Self {
        Symbol { name, ty, kind }
    }

    /// Parameter list of a method, property or indexer.
    pub fn parameters(&self) -> &[SymbolId] {
        match &self.kind {
            SymbolKind::Method(m) => &m.parameters,
            SymbolKind::Property(p) => &p.parameters,
            _ => &[],
        }
    }

    /// Whether the resolver produced this symbol as an error placeholder.
    pub fn is_error(&self) -> bool {
        match &self.kind {
            SymbolKind::Method(m) => m.is_error,
            SymbolKind::Property(p) => p.is_error,
            _ => false,
        }
    }

    pub fn is_static(&self) -> bool {
        match &self.kind {
            SymbolKind::Method(m) => m.is_static,
            SymbolKind::Property(p) => p.is_static,
            SymbolKind::Field { is_static } | SymbolKind::Event { is_static } => *is_static,
            _ => false,
        }
    }

    pub fn as_method(&self) -> Option<&MethodSymbol> {
        match &self.kind {
            SymbolKind::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&ParameterSymbol> {
        match &self.kind {
            SymbolKind::Parameter(p) => Some(p),
            _ => None,
        }
    }
}

/// All declarations referenced from one binder tree.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: Symbol) -> SymbolId {
        let raw = u32::try_from(self.symbols.len())
            .unwrap_or_else(|_| panic!("symbol table exceeded u32::MAX entries"));
        self.symbols.push(symbol);
        SymbolId::new(raw)
    }

    /// Look up a symbol.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this table.
    #[inline]
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
