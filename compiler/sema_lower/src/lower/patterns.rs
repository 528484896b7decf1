//! Patterns, switch expressions and switch-statement labels.

use std::sync::Arc;

use sema_ir::bound::{BoundId, BoundRange, SymbolRange};
use sema_ir::operation::{CaseClauseKind, Deferred, Operation, OperationKind};
use sema_ir::{SymbolId, TypeId};

use super::Lowerer;

impl Lowerer {
    pub(super) fn lower_constant_pattern(
        self: &Arc<Self>,
        id: BoundId,
        value: BoundId,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::ConstantPattern {
                value: self.lazy(value),
            },
        )
    }

    /// `T x`, `var x` and `T _`. Only `var` matches everything, null
    /// included.
    pub(super) fn lower_declaration_pattern(
        &self,
        id: BoundId,
        variable: Option<SymbolId>,
        declared_type: TypeId,
        is_var: bool,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::DeclarationPattern {
                declared_symbol: variable,
                matched_type: declared_type,
                match_all: is_var,
            },
        )
    }

    pub(super) fn lower_discard_pattern(&self, id: BoundId) -> Option<Operation> {
        self.emit(id, OperationKind::DiscardPattern)
    }

    pub(super) fn lower_switch_expression(
        self: &Arc<Self>,
        id: BoundId,
        governing: BoundId,
        arms: BoundRange,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::SwitchExpression {
                value: self.lazy(governing),
                arms: self.lazy_range(arms),
            },
        )
    }

    pub(super) fn lower_switch_expression_arm(
        self: &Arc<Self>,
        id: BoundId,
        pattern: BoundId,
        guard: BoundId,
        value: BoundId,
        locals: SymbolRange,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::SwitchExpressionArm {
                pattern: self.lazy(pattern),
                guard: self.lazy(guard),
                value: self.lazy(value),
                locals: self.locals(locals),
            },
        )
    }

    /// `case value:`, or `default:` when the value is absent.
    pub(super) fn lower_switch_label(
        self: &Arc<Self>,
        id: BoundId,
        value: BoundId,
    ) -> Option<Operation> {
        let kind = if value.is_valid() {
            CaseClauseKind::SingleValue
        } else {
            CaseClauseKind::Default
        };
        self.emit_statement(
            id,
            OperationKind::CaseClause {
                kind,
                value: self.lazy(value),
                pattern: Deferred::ready(None),
                guard: Deferred::ready(None),
            },
        )
    }

    /// `case pattern when guard:`
    pub(super) fn lower_pattern_switch_label(
        self: &Arc<Self>,
        id: BoundId,
        pattern: BoundId,
        guard: BoundId,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::CaseClause {
                kind: CaseClauseKind::Pattern,
                value: Deferred::ready(None),
                pattern: self.lazy(pattern),
                guard: self.lazy(guard),
            },
        )
    }
}
