//! References, operators, tuples, strings and queries.

use std::sync::Arc;

use sema_ir::bound::{
    BinaryOp, BoundBinaryOp, BoundId, BoundKind, BoundRange, DeclarationSite, IncrementOp, UnaryOp,
};
use sema_ir::operation::{
    BinaryOperatorKind, Deferred, LazyOperation, Operation, OperationKind, UnaryOperatorKind,
};
use sema_ir::{SymbolId, TypeId};

use super::Lowerer;

/// Operator kind without the short-circuit distinction.
fn binary_operator(op: BinaryOp) -> BinaryOperatorKind {
    match op {
        BinaryOp::Add => BinaryOperatorKind::Add,
        BinaryOp::Sub => BinaryOperatorKind::Subtract,
        BinaryOp::Mul => BinaryOperatorKind::Multiply,
        BinaryOp::Div => BinaryOperatorKind::Divide,
        BinaryOp::Rem => BinaryOperatorKind::Remainder,
        BinaryOp::Shl => BinaryOperatorKind::LeftShift,
        BinaryOp::Shr => BinaryOperatorKind::RightShift,
        BinaryOp::And => BinaryOperatorKind::And,
        BinaryOp::Or => BinaryOperatorKind::Or,
        BinaryOp::Xor => BinaryOperatorKind::ExclusiveOr,
        BinaryOp::Eq => BinaryOperatorKind::Equals,
        BinaryOp::NotEq => BinaryOperatorKind::NotEquals,
        BinaryOp::Lt => BinaryOperatorKind::LessThan,
        BinaryOp::LtEq => BinaryOperatorKind::LessThanOrEqual,
        BinaryOp::Gt => BinaryOperatorKind::GreaterThan,
        BinaryOp::GtEq => BinaryOperatorKind::GreaterThanOrEqual,
    }
}

/// `&&`/`||` when the binder marked `And`/`Or` as short-circuiting.
fn operator_of(op: BoundBinaryOp) -> BinaryOperatorKind {
    match (op.op, op.logical) {
        (BinaryOp::And, true) => BinaryOperatorKind::ConditionalAnd,
        (BinaryOp::Or, true) => BinaryOperatorKind::ConditionalOr,
        (other, _) => binary_operator(other),
    }
}

fn unary_operator(op: UnaryOp) -> UnaryOperatorKind {
    match op {
        UnaryOp::Plus => UnaryOperatorKind::Plus,
        UnaryOp::Minus => UnaryOperatorKind::Minus,
        UnaryOp::BitwiseNegation => UnaryOperatorKind::BitwiseNegation,
        UnaryOp::LogicalNegation => UnaryOperatorKind::Not,
        UnaryOp::True => UnaryOperatorKind::True,
        UnaryOp::False => UnaryOperatorKind::False,
    }
}

impl Lowerer {
    /// Instance operand of a member access; static members have none.
    pub(super) fn instance(self: &Arc<Self>, receiver: BoundId, member: SymbolId) -> LazyOperation {
        if self.is_static(member) {
            Deferred::ready(None)
        } else {
            self.lazy(receiver)
        }
    }

    pub(super) fn lower_local(
        &self,
        id: BoundId,
        local: SymbolId,
        declaration: DeclarationSite,
    ) -> Option<Operation> {
        match declaration {
            DeclarationSite::None => self.emit(
                id,
                OperationKind::LocalReference {
                    local,
                    is_declaration: false,
                },
            ),
            DeclarationSite::Designation => self.emit(
                id,
                OperationKind::LocalReference {
                    local,
                    is_declaration: true,
                },
            ),
            DeclarationSite::DeclarationExpression => {
                let reference = self
                    .node(
                        id,
                        OperationKind::LocalReference {
                            local,
                            is_declaration: true,
                        },
                    )
                    .into_operation();
                self.emit(
                    id,
                    OperationKind::DeclarationExpression {
                        expression: Deferred::ready(Some(reference)),
                    },
                )
            }
        }
    }

    pub(super) fn lower_property_access(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        property: SymbolId,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::PropertyReference {
                property,
                instance: self.instance(receiver, property),
                arguments: Deferred::ready(Vec::new()),
            },
        )
    }

    pub(super) fn lower_unary(
        self: &Arc<Self>,
        id: BoundId,
        op: UnaryOp,
        operand: BoundId,
        method: Option<SymbolId>,
        lifted: bool,
        checked: bool,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::Unary {
                operator: unary_operator(op),
                operand: self.lazy(operand),
                is_lifted: lifted,
                is_checked: checked,
                operator_method: method,
            },
        )
    }

    /// `^i` is a unary operator in the operation tree.
    pub(super) fn lower_from_end(
        self: &Arc<Self>,
        id: BoundId,
        operand: BoundId,
        method: Option<SymbolId>,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::Unary {
                operator: UnaryOperatorKind::Hat,
                operand: self.lazy(operand),
                is_lifted: false,
                is_checked: false,
                operator_method: method,
            },
        )
    }

    pub(super) fn lower_increment(
        self: &Arc<Self>,
        id: BoundId,
        op: IncrementOp,
        operand: BoundId,
        method: Option<SymbolId>,
        lifted: bool,
        checked: bool,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::IncrementOrDecrement {
                is_decrement: op.is_decrement(),
                is_postfix: op.is_postfix(),
                target: self.lazy(operand),
                is_lifted: lifted,
                is_checked: checked,
                operator_method: method,
            },
        )
    }

    pub(super) fn lower_binary(
        self: &Arc<Self>,
        id: BoundId,
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
        method: Option<SymbolId>,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::Binary {
                operator: operator_of(op),
                left: self.lazy(left),
                right: self.lazy(right),
                is_lifted: op.lifted,
                is_checked: op.checked,
                operator_method: method,
            },
        )
    }

    /// `a && b` / `a || b` resolved to user-defined `operator &`/`|` plus
    /// `true`/`false`.
    pub(super) fn lower_user_defined_logical(
        self: &Arc<Self>,
        id: BoundId,
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
        method: SymbolId,
    ) -> Option<Operation> {
        let operator = match op.op {
            BinaryOp::And => BinaryOperatorKind::ConditionalAnd,
            BinaryOp::Or => BinaryOperatorKind::ConditionalOr,
            other => binary_operator(other),
        };
        self.emit(
            id,
            OperationKind::Binary {
                operator,
                left: self.lazy(left),
                right: self.lazy(right),
                is_lifted: op.lifted,
                is_checked: op.checked,
                operator_method: Some(method),
            },
        )
    }

    pub(super) fn lower_tuple_binary(
        self: &Arc<Self>,
        id: BoundId,
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::TupleBinary {
                operator: binary_operator(op.op),
                left: self.lazy(left),
                right: self.lazy(right),
            },
        )
    }

    pub(super) fn lower_compound_assignment(
        self: &Arc<Self>,
        id: BoundId,
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
        method: Option<SymbolId>,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::CompoundAssignment {
                operator: binary_operator(op.op),
                target: self.lazy(left),
                value: self.lazy(right),
                is_lifted: op.lifted,
                is_checked: op.checked,
                operator_method: method,
            },
        )
    }

    /// `e += handler`: the event reference has no node of its own in the
    /// binder tree, so it is synthesized on the assignment's anchor.
    pub(super) fn lower_event_assignment(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        event: SymbolId,
        handler: BoundId,
        is_addition: bool,
    ) -> Option<Operation> {
        let event_reference = self.lazy_with(move |this| {
            let ty = this.tree.symbol(event).ty;
            Some(
                this.synthesized(
                    id,
                    OperationKind::EventReference {
                        event,
                        instance: this.instance(receiver, event),
                    },
                )
                .with_type(ty)
                .into_operation(),
            )
        });
        self.emit(
            id,
            OperationKind::EventAssignment {
                event_reference,
                handler: self.lazy(handler),
                adds: is_addition,
            },
        )
    }

    /// Both tuple tags share this constructor. A tuple written as
    /// `var (x, y)` is wrapped in a declaration expression on the same
    /// anchor.
    pub(super) fn lower_tuple(
        self: &Arc<Self>,
        id: BoundId,
        elements: BoundRange,
        natural_type: Option<TypeId>,
        is_declaration: bool,
    ) -> Option<Operation> {
        let tuple = self.node(
            id,
            OperationKind::Tuple {
                elements: self.lazy_range(elements),
                natural_type,
            },
        );
        if !is_declaration {
            return Some(tuple.into_operation());
        }
        self.emit(
            id,
            OperationKind::DeclarationExpression {
                expression: Deferred::ready(Some(tuple.into_operation())),
            },
        )
    }

    pub(super) fn lower_interpolated_string(
        self: &Arc<Self>,
        id: BoundId,
        parts: BoundRange,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::InterpolatedString {
                parts: self.lazy_with(move |this| {
                    this.tree
                        .list(parts)
                        .iter()
                        .filter_map(|&part| this.interpolated_part(part))
                        .collect()
                }),
            },
        )
    }

    /// Literal runs become text parts; inserts lower through dispatch.
    fn interpolated_part(self: &Arc<Self>, part: BoundId) -> Option<Operation> {
        if !part.is_valid() || !matches!(self.tree.kind(part), BoundKind::Literal) {
            return self.create(part);
        }
        Some(
            self.node(
                part,
                OperationKind::InterpolatedStringText {
                    text: Deferred::ready(self.create(part)),
                },
            )
            .with_type(None)
            .with_constant(None)
            .into_operation(),
        )
    }

    /// Only the clause anchored at the whole query becomes a translated
    /// query; inner clauses are transparent.
    pub(super) fn lower_query_clause(
        self: &Arc<Self>,
        id: BoundId,
        value: BoundId,
        is_whole_query: bool,
    ) -> Option<Operation> {
        if !is_whole_query {
            return self.create(value);
        }
        self.emit(
            id,
            OperationKind::TranslatedQuery {
                operation: self.lazy(value),
            },
        )
    }

    /// A lambda with no target type lowers as the lambda the resolver bound
    /// for recovery, so there is one operation per lambda either way.
    pub(super) fn lower_unbound_lambda(
        self: &Arc<Self>,
        id: BoundId,
        recovered: BoundId,
    ) -> Option<Operation> {
        if recovered.is_valid() {
            self.create(recovered)
        } else {
            self.lower_invalid(id, Vec::new())
        }
    }
}
