//! Object, collection and anonymous-object initializers, and the
//! assignment shapes they produce.
//!
//! Members inside an initializer are accessed through the shared implicit
//! receiver. Each access reaches it through its own parent, so each gets its
//! own `InstanceReference` (see [`Lowerer::create`]).

use std::sync::Arc;

use sema_ir::bound::{ArgListId, BoundId, BoundKind, BoundRange, LookupResult};
use sema_ir::operation::{Deferred, InstanceReferenceKind, Operation, OperationKind};
use sema_ir::{SymbolId, SymbolKind, TypeId};

use super::Lowerer;

impl Lowerer {
    /// `left = right`, or `Member = { ... }` when the right side is a
    /// nested object or collection initializer.
    pub(super) fn lower_assignment(
        self: &Arc<Self>,
        id: BoundId,
        left: BoundId,
        right: BoundId,
        is_ref: bool,
    ) -> Option<Operation> {
        if right.is_valid() && self.tree.kind(right).is_initializer() {
            tracing::debug!(
                node = ?id,
                "assignment of nested initializer lowered as member initializer"
            );
            return self.emit(
                id,
                OperationKind::MemberInitializer {
                    initialized_member: self.lazy(left),
                    initializer: self.lazy(right),
                },
            );
        }
        self.emit(
            id,
            OperationKind::SimpleAssignment {
                target: self.lazy(left),
                value: self.lazy(right),
                is_ref,
            },
        )
    }

    /// Left side of `Member = value` inside an object initializer.
    pub(super) fn lower_initializer_member(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        member: Option<SymbolId>,
        arguments: Option<ArgListId>,
        result: LookupResult,
    ) -> Option<Operation> {
        let Some(member) = self.resolved(member, result) else {
            let children = self.salvage(BoundId::INVALID, arguments, BoundId::INVALID);
            return self.lower_invalid(id, children);
        };
        match self.tree.symbol(member).kind {
            SymbolKind::Field { .. } => self.emit(
                id,
                OperationKind::FieldReference {
                    field: member,
                    instance: self.instance(receiver, member),
                },
            ),
            SymbolKind::Property(_) => self.emit(
                id,
                OperationKind::PropertyReference {
                    property: member,
                    instance: self.instance(receiver, member),
                    arguments: match arguments {
                        Some(arguments) => self.lazy_arguments(id, member, arguments),
                        None => Deferred::ready(Vec::new()),
                    },
                },
            ),
            SymbolKind::Event { .. } => self.emit(
                id,
                OperationKind::EventReference {
                    event: member,
                    instance: self.instance(receiver, member),
                },
            ),
            _ => {
                let children = self.salvage(BoundId::INVALID, arguments, BoundId::INVALID);
                self.lower_invalid(id, children)
            }
        }
    }

    /// One element of a collection initializer: an implicit call to the
    /// resolved `Add`.
    pub(super) fn lower_collection_element(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        add_method: Option<SymbolId>,
        arguments: ArgListId,
    ) -> Option<Operation> {
        let Some(method) = self.resolved(add_method, LookupResult::Viable) else {
            let children = self.salvage(BoundId::INVALID, Some(arguments), BoundId::INVALID);
            return self.lower_invalid(id, children);
        };
        let (is_virtual, instance) = self.invocation_target(receiver, method, arguments);
        Some(
            self.node(
                id,
                OperationKind::Invocation {
                    method,
                    instance,
                    is_virtual,
                    arguments: self.lazy_arguments(id, method, arguments),
                },
            )
            .implicit(true)
            .into_operation(),
        )
    }

    /// Collection element on a `dynamic` receiver: a late-bound call of an
    /// implicit `Add` member.
    pub(super) fn lower_dynamic_collection_element(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        arguments: ArgListId,
    ) -> Option<Operation> {
        let list = self.tree.arguments(arguments);
        let add = self.name_add;
        self.emit(
            id,
            OperationKind::DynamicInvocation {
                operation: self.lazy_with(move |this| {
                    Some(
                        this.synthesized(
                            id,
                            OperationKind::DynamicMemberReference {
                                instance: this.lazy(receiver),
                                member: add,
                            },
                        )
                        .with_type(Some(TypeId::DYNAMIC))
                        .into_operation(),
                    )
                }),
                arguments: self.lazy_range(list.arguments),
                argument_info: self.dynamic_info(arguments),
            },
        )
    }

    /// `new { A = a, b }`: one implicit property assignment per argument,
    /// each targeting the new object through an implicit receiver.
    pub(super) fn lower_anonymous_object(
        self: &Arc<Self>,
        id: BoundId,
        arguments: BoundRange,
        declarations: BoundRange,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::AnonymousObjectCreation {
                initializers: self.lazy_with(move |this| {
                    let declarations = this.tree.list(declarations);
                    this.tree
                        .list(arguments)
                        .iter()
                        .enumerate()
                        .filter_map(|(i, &argument)| {
                            let declaration =
                                declarations.get(i).copied().unwrap_or(BoundId::INVALID);
                            this.anonymous_property(id, argument, declaration)
                        })
                        .collect()
                }),
            },
        )
    }

    fn anonymous_property(
        self: &Arc<Self>,
        creation: BoundId,
        argument: BoundId,
        declaration: BoundId,
    ) -> Option<Operation> {
        if !argument.is_valid() {
            return None;
        }
        let property = match declaration.is_valid().then(|| self.tree.kind(declaration)) {
            Some(BoundKind::AnonymousPropertyDeclaration { property }) => property,
            _ => return self.create(argument),
        };
        let receiver = self
            .synthesized(
                declaration,
                OperationKind::InstanceReference {
                    kind: InstanceReferenceKind::ImplicitReceiver,
                },
            )
            .with_type(self.tree.ty(creation))
            .into_operation();
        let target = self
            .synthesized(
                declaration,
                OperationKind::PropertyReference {
                    property,
                    instance: Deferred::ready(Some(receiver)),
                    arguments: Deferred::ready(Vec::new()),
                },
            )
            .with_type(self.tree.symbol(property).ty)
            .into_operation();
        Some(
            self.synthesized(
                argument,
                OperationKind::SimpleAssignment {
                    target: Deferred::ready(Some(target)),
                    value: self.lazy(argument),
                    is_ref: false,
                },
            )
            .with_type(self.tree.ty(argument))
            .into_operation(),
        )
    }
}
