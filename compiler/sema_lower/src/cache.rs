//! Identity cache: `BoundId` → operation.
//!
//! Each binder node gets its own slot. The map lock is only held long
//! enough to find or insert the slot; construction runs under the slot's
//! lock, so two threads asking for the same node serialize on that node
//! alone and the loser observes the winner's result. Construction of a
//! node may recursively request other nodes (passthrough shapes do), which
//! only touches their slots.
//!
//! Slots own their operation. Operations reach back to the lowerer through
//! their child cells, so the owning factory closes the cache when its last
//! handle goes away: the slots are emptied and later requests build without
//! recording anything.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use sema_ir::bound::BoundId;
use sema_ir::operation::Operation;

type Slot = Mutex<Option<Operation>>;

#[derive(Default)]
struct Slots {
    map: FxHashMap<BoundId, Arc<Slot>>,
    closed: bool,
}

pub(crate) struct IdentityCache {
    slots: Mutex<Slots>,
}

impl IdentityCache {
    pub(crate) fn new() -> Self {
        IdentityCache {
            slots: Mutex::new(Slots::default()),
        }
    }

    /// Return the cached operation for `id`, building it with `build` if
    /// there is none.
    ///
    /// A `None` result is not recorded; it is cheap to recompute and there
    /// is no identity to preserve.
    pub(crate) fn get_or_build(
        &self,
        id: BoundId,
        build: impl FnOnce() -> Option<Operation>,
    ) -> Option<Operation> {
        let slot = {
            let mut slots = self.slots.lock();
            if slots.closed {
                drop(slots);
                return build();
            }
            Arc::clone(slots.map.entry(id).or_default())
        };
        let mut entry = slot.lock();
        if let Some(op) = entry.as_ref() {
            tracing::trace!(node = ?id, "operation cache hit");
            return Some(Arc::clone(op));
        }
        tracing::trace!(node = ?id, "operation cache miss");
        let op = build()?;
        *entry = Some(Arc::clone(&op));
        Some(op)
    }

    /// The cached operation for `id`, without building.
    pub(crate) fn get(&self, id: BoundId) -> Option<Operation> {
        let slot = self.slots.lock().map.get(&id).map(Arc::clone)?;
        let cached = slot.lock().clone();
        cached
    }

    /// Drop every entry and stop recording new ones.
    ///
    /// A build racing with this call may still fill its slot, but the slot
    /// is no longer reachable from the map and dies with that build.
    pub(crate) fn close(&self) {
        let released = {
            let mut slots = self.slots.lock();
            slots.closed = true;
            std::mem::take(&mut slots.map)
        };
        tracing::debug!(entries = released.len(), "operation cache closed");
        drop(released);
    }

    /// Number of nodes whose operation is currently held.
    pub(crate) fn live_entries(&self) -> usize {
        let slots: Vec<Arc<Slot>> = self.slots.lock().map.values().map(Arc::clone).collect();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }

    /// Number of nodes requested through the cache while it was open.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.lock().map.len()
    }
}
