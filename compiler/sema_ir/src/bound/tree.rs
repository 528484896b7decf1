//! Binder tree arena.

use crate::{Anchor, SharedInterner, Symbol, SymbolId, SymbolTable, TypeId, TypePool};

use super::{ArgListId, ArgumentList, BoundId, BoundKind, BoundNode, BoundRange, SymbolRange};

fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("binder tree: too many {what}"))
}

/// Arena holding one fully bound program tree plus its side tables.
///
/// Built once by the resolver and read-only afterwards; the lowering pass
/// shares it behind an `Arc`.
#[derive(Clone)]
pub struct BoundTree {
    nodes: Vec<BoundNode>,
    /// Flattened child lists indexed by [`BoundRange`].
    lists: Vec<BoundId>,
    /// Flattened scope-local lists indexed by [`SymbolRange`].
    symbol_lists: Vec<SymbolId>,
    argument_lists: Vec<ArgumentList>,
    pub symbols: SymbolTable,
    pub types: TypePool,
    interner: SharedInterner,
}

impl BoundTree {
    pub fn new(interner: SharedInterner) -> Self {
        BoundTree {
            nodes: Vec::new(),
            lists: Vec::new(),
            symbol_lists: Vec::new(),
            argument_lists: Vec::new(),
            symbols: SymbolTable::new(),
            types: TypePool::new(),
            interner,
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    // Building

    pub fn alloc(&mut self, node: BoundNode) -> BoundId {
        let id = BoundId::new(to_u32(self.nodes.len(), "nodes"));
        self.nodes.push(node);
        id
    }

    pub fn alloc_list(&mut self, ids: &[BoundId]) -> BoundRange {
        if ids.is_empty() {
            return BoundRange::EMPTY;
        }
        let start = to_u32(self.lists.len(), "list entries");
        self.lists.extend_from_slice(ids);
        BoundRange::new(start, to_u32(ids.len(), "list entries"))
    }

    pub fn alloc_symbols(&mut self, ids: &[SymbolId]) -> SymbolRange {
        if ids.is_empty() {
            return SymbolRange::EMPTY;
        }
        let start = to_u32(self.symbol_lists.len(), "scope locals");
        self.symbol_lists.extend_from_slice(ids);
        SymbolRange {
            start,
            len: to_u32(ids.len(), "scope locals"),
        }
    }

    pub fn add_arguments(&mut self, arguments: ArgumentList) -> ArgListId {
        let id = ArgListId::new(to_u32(self.argument_lists.len(), "argument lists"));
        self.argument_lists.push(arguments);
        id
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.add(symbol)
    }

    // Reading

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` is invalid or was not issued by this tree.
    #[inline]
    pub fn node(&self, id: BoundId) -> &BoundNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: BoundId) -> BoundKind {
        self.nodes[id.index()].kind
    }

    #[inline]
    pub fn anchor(&self, id: BoundId) -> Anchor {
        self.nodes[id.index()].anchor
    }

    #[inline]
    pub fn ty(&self, id: BoundId) -> Option<TypeId> {
        self.nodes[id.index()].ty
    }

    pub fn list(&self, range: BoundRange) -> &[BoundId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    pub fn symbols_in(&self, range: SymbolRange) -> &[SymbolId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.symbol_lists[start..start + range.len as usize]
    }

    #[inline]
    pub fn arguments(&self, id: ArgListId) -> &ArgumentList {
        &self.argument_lists[id.index()]
    }

    #[inline]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        self.symbols.get(id)
    }

    /// Whether `id` names a node of this tree.
    pub fn contains(&self, id: BoundId) -> bool {
        id.is_valid() && id.index() < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::fmt::Debug for BoundTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundTree")
            .field("nodes", &self.nodes.len())
            .field("symbols", &self.symbols.len())
            .finish_non_exhaustive()
    }
}
