//! Declarations, loops, exception handling and jumps.
//!
//! Statements take their anchor from the binder node but never a type or a
//! constant.

use std::sync::Arc;

use sema_ir::bound::{BoundId, BoundKind, BoundRange, SymbolRange};
use sema_ir::operation::{BranchKind, Deferred, Operation, OperationKind, ReturnKind};
use sema_ir::{SymbolId, TypeId};

use super::Lowerer;

impl Lowerer {
    /// A single `T x = init;`.
    pub(super) fn lower_local_declaration(self: &Arc<Self>, id: BoundId) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::VariableDeclarationGroup {
                declarators: self.lazy_with(move |this| this.declarator(id).into_iter().collect()),
            },
        )
    }

    /// `T x = 1, y = 2;`
    pub(super) fn lower_multiple_declarations(
        self: &Arc<Self>,
        id: BoundId,
        declarations: BoundRange,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::VariableDeclarationGroup {
                declarators: self.lazy_with(move |this| {
                    this.tree
                        .list(declarations)
                        .iter()
                        .filter_map(|&declaration| this.declarator(declaration))
                        .collect()
                }),
            },
        )
    }

    /// Declarator for one `LocalDeclaration`. Any other shape in a
    /// declaration list lowers as itself.
    fn declarator(self: &Arc<Self>, declaration: BoundId) -> Option<Operation> {
        if !declaration.is_valid() {
            return None;
        }
        let BoundKind::LocalDeclaration { local, initializer } = self.tree.kind(declaration) else {
            return self.create(declaration);
        };
        Some(
            self.node(
                declaration,
                OperationKind::VariableDeclarator {
                    symbol: local,
                    initializer: self.lazy(initializer),
                },
            )
            .with_type(None)
            .with_constant(None)
            .into_operation(),
        )
    }

    /// Declarator with no initializer and no syntax of its own, for
    /// `foreach` and `catch` variables.
    fn implicit_declarator(&self, anchor_of: BoundId, symbol: SymbolId) -> Operation {
        self.synthesized(
            anchor_of,
            OperationKind::VariableDeclarator {
                symbol,
                initializer: Deferred::ready(None),
            },
        )
        .into_operation()
    }

    /// `while` (condition on top) and `do` (condition at the bottom).
    pub(super) fn lower_while(
        self: &Arc<Self>,
        id: BoundId,
        condition: BoundId,
        body: BoundId,
        locals: SymbolRange,
        condition_is_top: bool,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::WhileLoop {
                condition: self.lazy(condition),
                body: self.lazy(body),
                condition_is_top,
                condition_is_until: false,
                locals: self.locals(locals),
            },
        )
    }

    pub(super) fn lower_for(
        self: &Arc<Self>,
        id: BoundId,
        initializer: BoundId,
        condition: BoundId,
        increment: BoundId,
        body: BoundId,
        locals: SymbolRange,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::ForLoop {
                before: self.lazy_with(move |this| this.flatten(initializer)),
                condition: self.lazy(condition),
                at_loop_bottom: self.lazy_with(move |this| this.flatten(increment)),
                body: self.lazy(body),
                locals: self.locals(locals),
            },
        )
    }

    /// The statements of a compiler-grouped list, or the single statement.
    fn flatten(self: &Arc<Self>, id: BoundId) -> Vec<Operation> {
        if !id.is_valid() {
            return Vec::new();
        }
        match self.tree.kind(id) {
            BoundKind::StatementList { statements } => self.create_range(statements),
            _ => self.create(id).into_iter().collect(),
        }
    }

    #[expect(clippy::too_many_arguments, reason = "mirrors the binder node's fields")]
    pub(super) fn lower_for_each(
        self: &Arc<Self>,
        id: BoundId,
        iteration_variable: Option<SymbolId>,
        deconstruction: BoundId,
        collection: BoundId,
        body: BoundId,
        is_async: bool,
        locals: SymbolRange,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::ForEachLoop {
                loop_control_variable: self.lazy_with(move |this| {
                    this.loop_control_variable(id, iteration_variable, deconstruction)
                }),
                collection: self.lazy(collection),
                body: self.lazy(body),
                is_asynchronous: is_async,
                locals: self.locals(locals),
            },
        )
    }

    /// `foreach (var (a, b) in xs)` exposes the deconstruction target;
    /// `foreach (var x in xs)` a declarator for `x`.
    fn loop_control_variable(
        self: &Arc<Self>,
        id: BoundId,
        iteration_variable: Option<SymbolId>,
        deconstruction: BoundId,
    ) -> Option<Operation> {
        if deconstruction.is_valid() {
            return match self.tree.kind(deconstruction) {
                BoundKind::DeconstructionAssignment { left, .. } => self.create(left),
                _ => self.create(deconstruction),
            };
        }
        iteration_variable.map(|variable| self.implicit_declarator(id, variable))
    }

    pub(super) fn lower_catch(
        self: &Arc<Self>,
        id: BoundId,
        exception_type: Option<TypeId>,
        local: Option<SymbolId>,
        filter: BoundId,
        body: BoundId,
        locals: SymbolRange,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::CatchClause {
                exception_declaration: self.lazy_with(move |this| {
                    local.map(|local| this.implicit_declarator(id, local))
                }),
                exception_type,
                filter: self.lazy(filter),
                handler: self.lazy(body),
                locals: self.locals(locals),
            },
        )
    }

    /// The resource is the declaration group when there is one, the
    /// expression otherwise.
    pub(super) fn lower_using(
        self: &Arc<Self>,
        id: BoundId,
        declarations: BoundId,
        expression: BoundId,
        body: BoundId,
        locals: SymbolRange,
    ) -> Option<Operation> {
        let resources = if declarations.is_valid() {
            declarations
        } else {
            expression
        };
        self.emit_statement(
            id,
            OperationKind::Using {
                resources: self.lazy(resources),
                body: self.lazy(body),
                locals: self.locals(locals),
            },
        )
    }

    /// `throw e;` is an expression statement around an implicit throw
    /// expression. A bare `throw;` has no exception operand.
    pub(super) fn lower_throw_statement(
        self: &Arc<Self>,
        id: BoundId,
        expression: BoundId,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::ExpressionStatement {
                operation: self.lazy_with(move |this| {
                    Some(
                        this.synthesized(
                            id,
                            OperationKind::Throw {
                                exception: this.lazy(expression),
                            },
                        )
                        .into_operation(),
                    )
                }),
            },
        )
    }

    pub(super) fn lower_return(
        self: &Arc<Self>,
        id: BoundId,
        kind: ReturnKind,
        expression: BoundId,
    ) -> Option<Operation> {
        self.emit_statement(
            id,
            OperationKind::Return {
                kind,
                value: self.lazy(expression),
            },
        )
    }

    pub(super) fn lower_branch(
        &self,
        id: BoundId,
        kind: BranchKind,
        label: SymbolId,
    ) -> Option<Operation> {
        self.emit_statement(id, OperationKind::Branch { kind, target: label })
    }
}
