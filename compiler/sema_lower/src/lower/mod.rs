//! Binder tree → operation tree lowering.
//!
//! Maps every `BoundKind` tag to an `OperationKind` constructor:
//! - `dispatch`: the central match, one arm per tag
//! - `expressions`: references, operators, tuples, strings, queries
//! - `calls`: invocations, creations, indexers, late-bound operations and
//!   their argument records
//! - `conversions`: conversion vs. delegate creation, `as` and `is`
//! - `initializers`: object, collection, anonymous and array initializers
//! - `patterns`: pattern matching and switch expressions
//! - `statements`: blocks, loops, jumps, declarations
//! - `recovery`: invalid nodes and the generic `None` passthrough
//!
//! Constructors never build children directly. Each child is a
//! [`Deferred`] cell whose closure holds an `Arc` of this lowerer and the
//! child's `BoundId`, so forcing a child goes back through
//! [`Lowerer::create`] and the identity cache.

mod calls;
mod conversions;
mod dispatch;
mod expressions;
mod initializers;
mod patterns;
mod recovery;
mod statements;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sema_ir::bound::{BoundId, BoundRange, BoundTree, SymbolRange};
use sema_ir::operation::{
    Deferred, LazyOperation, LazyOperations, Operation, OperationKind, OperationNode,
};
use sema_ir::{Name, SemanticModel, SymbolId};

use crate::cache::IdentityCache;
use crate::constant::adapt_constant;

/// State shared by every operation produced for one binder tree.
///
/// Read-only apart from the cache and counters, so one lowerer serves any
/// number of threads.
pub(crate) struct Lowerer {
    /// Source binder tree (read-only).
    pub(crate) tree: Arc<BoundTree>,
    /// Stamped onto every operation.
    pub(crate) model: SemanticModel,
    pub(crate) cache: IdentityCache,
    /// Operations constructed so far, including shared-receiver clones.
    pub(crate) built: AtomicUsize,

    // Pre-interned member names for synthesized operations.
    pub(super) name_add: Name,
}

impl Lowerer {
    pub(crate) fn new(tree: Arc<BoundTree>, model: SemanticModel) -> Self {
        let name_add = tree.interner().intern("Add");
        Lowerer {
            tree,
            model,
            cache: IdentityCache::new(),
            built: AtomicUsize::new(0),
            name_add,
        }
    }

    /// The operation for `id`, or `None` for an absent child.
    ///
    /// Shared receivers are rebuilt on every request: the same binder node
    /// plays a different role under each parent, and consumers key per-node
    /// state on operation identity.
    pub(crate) fn create(self: &Arc<Self>, id: BoundId) -> Option<Operation> {
        if !id.is_valid() {
            return None;
        }
        if self.tree.kind(id).is_shared_receiver() {
            return self.build(id);
        }
        self.cache.get_or_build(id, || self.build(id))
    }

    /// Operations for a homogeneous child list; absent results are dropped.
    pub(crate) fn create_range(self: &Arc<Self>, range: BoundRange) -> Vec<Operation> {
        self.create_all(self.tree.list(range))
    }

    pub(crate) fn create_all(self: &Arc<Self>, ids: &[BoundId]) -> Vec<Operation> {
        ids.iter().filter_map(|&id| self.create(id)).collect()
    }

    fn build(self: &Arc<Self>, id: BoundId) -> Option<Operation> {
        self.built.fetch_add(1, Ordering::Relaxed);
        self.dispatch(id)
    }

    // Lazy children

    /// Deferred single child.
    pub(super) fn lazy(self: &Arc<Self>, id: BoundId) -> LazyOperation {
        if !id.is_valid() {
            return Deferred::ready(None);
        }
        let this = Arc::clone(self);
        Deferred::new(move || this.create(id))
    }

    /// Deferred child list.
    pub(super) fn lazy_range(self: &Arc<Self>, range: BoundRange) -> LazyOperations {
        if range.is_empty() {
            return Deferred::ready(Vec::new());
        }
        let this = Arc::clone(self);
        Deferred::new(move || this.create_range(range))
    }

    /// Deferred value computed by an arbitrary constructor.
    pub(super) fn lazy_with<T: Send + 'static>(
        self: &Arc<Self>,
        build: impl FnOnce(&Arc<Lowerer>) -> T + Send + 'static,
    ) -> Deferred<T> {
        let this = Arc::clone(self);
        Deferred::new(move || build(&this))
    }

    // Node shells

    /// Operation node carrying `id`'s anchor, type, constant and
    /// compiler-generated flag.
    pub(super) fn node(&self, id: BoundId, kind: OperationKind) -> OperationNode {
        let bound = self.tree.node(id);
        OperationNode::new(kind, bound.anchor, self.model.clone())
            .with_type(bound.ty)
            .with_constant(adapt_constant(bound.constant))
            .implicit(bound.compiler_generated)
    }

    pub(super) fn emit(&self, id: BoundId, kind: OperationKind) -> Option<Operation> {
        Some(self.node(id, kind).into_operation())
    }

    /// Statements carry neither a type nor a constant.
    pub(super) fn emit_statement(&self, id: BoundId, kind: OperationKind) -> Option<Operation> {
        Some(
            self.node(id, kind)
                .with_type(None)
                .with_constant(None)
                .into_operation(),
        )
    }

    /// Implicit operation sharing `id`'s anchor.
    pub(super) fn synthesized(&self, id: BoundId, kind: OperationKind) -> OperationNode {
        let bound = self.tree.node(id);
        OperationNode::new(kind, bound.anchor, self.model.clone()).implicit(true)
    }

    pub(super) fn locals(&self, range: SymbolRange) -> Vec<SymbolId> {
        self.tree.symbols_in(range).to_vec()
    }

    /// Whether the symbol is a static member (no instance operand).
    pub(super) fn is_static(&self, symbol: SymbolId) -> bool {
        self.tree.symbol(symbol).is_static()
    }
}

#[cfg(test)]
mod tests;
