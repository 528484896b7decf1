//! Invalid nodes and the generic passthrough.
//!
//! Erroneous code is the normal input while someone is typing, so failed
//! resolution never aborts lowering. It becomes an `Invalid` operation that
//! still exposes whatever receiver, argument and initializer subtrees the
//! resolver bound, so consumers can navigate into the valid parts.

use std::sync::Arc;

use sema_ir::bound::{ArgListId, BoundId, LookupResult};
use sema_ir::operation::{Operation, OperationKind};
use sema_ir::SymbolId;

use super::Lowerer;

impl Lowerer {
    /// The target of a call-like node, if resolution succeeded.
    ///
    /// Fails for a missing target, a non-viable lookup, or a target that is
    /// itself an error placeholder.
    pub(super) fn resolved(
        &self,
        target: Option<SymbolId>,
        result: LookupResult,
    ) -> Option<SymbolId> {
        let target = target?;
        (result.is_viable() && !self.tree.symbol(target).is_error()).then_some(target)
    }

    /// Salvageable children of a failed call-like node: receiver, then
    /// arguments in source order, then initializer. Absent ones are skipped.
    pub(super) fn salvage(
        &self,
        receiver: BoundId,
        arguments: Option<ArgListId>,
        initializer: BoundId,
    ) -> Vec<BoundId> {
        let mut children = Vec::new();
        if receiver.is_valid() {
            children.push(receiver);
        }
        if let Some(arguments) = arguments {
            children.extend_from_slice(self.tree.list(self.tree.arguments(arguments).arguments));
        }
        if initializer.is_valid() {
            children.push(initializer);
        }
        children
    }

    /// Invalid node over `children`.
    ///
    /// Implicit when compiler-generated, or when any child sits on the very
    /// same anchor (a recovery wrapper around its only real child). The type
    /// is dropped when the anchor is a parser placeholder.
    pub(super) fn lower_invalid(
        self: &Arc<Self>,
        id: BoundId,
        children: Vec<BoundId>,
    ) -> Option<Operation> {
        let bound = *self.tree.node(id);
        let wraps_child = children
            .iter()
            .any(|&child| child.is_valid() && self.tree.anchor(child) == bound.anchor);
        let ty = if bound.anchor.is_missing { None } else { bound.ty };
        tracing::debug!(
            node = ?id,
            anchor = ?bound.anchor,
            children = children.len(),
            "lowering failed binding as invalid operation"
        );

        Some(
            self.node(
                id,
                OperationKind::Invalid {
                    children: self.lazy_with(move |this| this.create_all(&children)),
                },
            )
            .with_type(ty)
            .implicit(bound.compiler_generated || wraps_child)
            .into_operation(),
        )
    }

    /// Generic `None` operation for a construct with no counterpart in the
    /// operation vocabulary. Keeps the constant and the raw children so the
    /// tree stays traversable.
    pub(super) fn lower_unmodeled(self: &Arc<Self>, id: BoundId) -> Option<Operation> {
        if self.model.claim_unmodeled_report() {
            tracing::warn!(
                node = ?id,
                kind = ?self.tree.kind(id),
                "construct has no operation counterpart; exposing raw children"
            );
        }
        self.emit(
            id,
            OperationKind::None {
                children: self.lazy_with(move |this| this.create_all(&this.tree.children(id))),
            },
        )
    }
}
