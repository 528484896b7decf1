//! Public entry point.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use sema_ir::bound::{BoundId, BoundRange, BoundTree};
use sema_ir::operation::Operation;
use sema_ir::SemanticModel;

use crate::lower::Lowerer;

/// Cache counters for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactoryStats {
    /// Binder nodes whose operation is currently cached.
    pub live_entries: usize,
    /// Distinct binder nodes ever requested through the cache.
    pub requested: usize,
    /// Operations constructed, counting shared-receiver clones.
    pub built: usize,
}

/// Lowers one binder tree into operations on demand.
///
/// One factory per semantic session. Cheap to clone; clones share the
/// identity cache, so every clone answers with the same operations.
/// All methods take `&self` and may be called from several threads at once.
///
/// The cache holds every operation it hands out until the last clone is
/// dropped. Operations still held after that stay usable; children forced
/// from then on are built fresh instead of shared.
///
/// # Example
///
/// ```ignore
/// let factory = OperationFactory::new(Arc::new(tree), model);
/// let op = factory.create(root).unwrap_or_else(|| panic!("root is valid"));
/// for child in op.children() { /* built on demand */ }
/// ```
#[derive(Clone)]
pub struct OperationFactory {
    session: Arc<Session>,
}

/// Shared by every clone of one factory.
struct Session {
    lowerer: Arc<Lowerer>,
}

impl Drop for Session {
    fn drop(&mut self) {
        // Cached operations hold the lowerer through their child cells.
        self.lowerer.cache.close();
    }
}

impl OperationFactory {
    pub fn new(tree: Arc<BoundTree>, model: SemanticModel) -> Self {
        tracing::debug!(nodes = tree.len(), model = ?model, "operation factory created");
        OperationFactory {
            session: Arc::new(Session {
                lowerer: Arc::new(Lowerer::new(tree, model)),
            }),
        }
    }

    /// The operation for `id`.
    ///
    /// `None` only for [`BoundId::INVALID`] and for passthrough shapes over
    /// an absent child. Asking twice for the same node yields the same
    /// `Arc` for as long as the factory lives, except for shared receivers,
    /// which are rebuilt on every request.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this factory's tree.
    pub fn create(&self, id: BoundId) -> Option<Operation> {
        self.lowerer().create(id)
    }

    /// Operations for a child list, dropping absent results.
    pub fn create_list(&self, range: BoundRange) -> Vec<Operation> {
        self.lowerer().create_range(range)
    }

    /// Operations for the raw children of `id`, in source order, whatever
    /// shape `id` lowers to.
    pub fn create_children(&self, id: BoundId) -> Vec<Operation> {
        if !id.is_valid() {
            return Vec::new();
        }
        self.lowerer().create_all(&self.lowerer().tree.children(id))
    }

    pub fn tree(&self) -> &Arc<BoundTree> {
        &self.lowerer().tree
    }

    pub fn model(&self) -> &SemanticModel {
        &self.lowerer().model
    }

    /// Whether a live operation for `id` exists, without building one.
    pub fn is_cached(&self, id: BoundId) -> bool {
        id.is_valid() && self.lowerer().cache.get(id).is_some()
    }

    fn lowerer(&self) -> &Arc<Lowerer> {
        &self.session.lowerer
    }

    pub fn stats(&self) -> FactoryStats {
        FactoryStats {
            live_entries: self.lowerer().cache.live_entries(),
            requested: self.lowerer().cache.slot_count(),
            built: self.lowerer().built.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for OperationFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationFactory")
            .field("tree", &self.lowerer().tree)
            .field("model", &self.lowerer().model)
            .field("stats", &self.stats())
            .finish()
    }
}
