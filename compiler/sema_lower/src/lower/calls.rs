//! Invocations, creations, indexers and late-bound operations.
//!
//! Call-like nodes go through [`Lowerer::resolved`] first: a failed
//! resolution becomes an invalid node over the salvageable children instead
//! of an invocation with a bogus target.

use std::sync::Arc;

use sema_ir::bound::{ArgListId, BoundId, BoundKind, LookupResult};
use sema_ir::operation::{
    ArgumentBinding, ArgumentKind, Deferred, DynamicArgumentInfo, LazyArguments, LazyOperation,
    Operation, OperationKind,
};
use sema_ir::{ConstantValue, RefKind, SymbolId, TypeId};

use super::Lowerer;
use crate::arguments::{plan_arguments, ArgumentSource, PlannedArgument};
use crate::constant::adapt_constant;

impl Lowerer {
    pub(super) fn lower_call(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        method: Option<SymbolId>,
        arguments: ArgListId,
        result: LookupResult,
    ) -> Option<Operation> {
        let Some(method) = self.resolved(method, result) else {
            let children = self.salvage(receiver, Some(arguments), BoundId::INVALID);
            return self.lower_invalid(id, children);
        };
        let (is_virtual, instance) = self.invocation_target(receiver, method, arguments);
        self.emit(
            id,
            OperationKind::Invocation {
                method,
                instance,
                is_virtual,
                arguments: self.lazy_arguments(id, method, arguments),
            },
        )
    }

    /// Virtual dispatch flag and instance operand of a resolved call.
    ///
    /// Static methods, and extension methods called with instance syntax,
    /// have no instance: the receiver of the latter is already the first
    /// argument.
    pub(super) fn invocation_target(
        self: &Arc<Self>,
        receiver: BoundId,
        method: SymbolId,
        arguments: ArgListId,
    ) -> (bool, LazyOperation) {
        let instance =
            if self.is_static(method) || self.tree.arguments(arguments).invoked_as_extension {
                Deferred::ready(None)
            } else {
                self.lazy(receiver)
            };
        (self.is_virtual_call(receiver, method), instance)
    }

    /// `base.M()` binds non-virtually even when `M` is virtual.
    fn is_virtual_call(&self, receiver: BoundId, method: SymbolId) -> bool {
        let through_base =
            receiver.is_valid() && matches!(self.tree.kind(receiver), BoundKind::BaseReference);
        let is_virtual = self
            .tree
            .symbol(method)
            .as_method()
            .is_some_and(|m| m.is_virtual);
        is_virtual && !through_base
    }

    pub(super) fn lower_object_creation(
        self: &Arc<Self>,
        id: BoundId,
        constructor: Option<SymbolId>,
        arguments: ArgListId,
        initializer: BoundId,
        result: LookupResult,
    ) -> Option<Operation> {
        let Some(constructor) = self.resolved(constructor, result) else {
            let children = self.salvage(BoundId::INVALID, Some(arguments), initializer);
            return self.lower_invalid(id, children);
        };
        self.emit(
            id,
            OperationKind::ObjectCreation {
                constructor,
                arguments: self.lazy_arguments(id, constructor, arguments),
                initializer: self.lazy(initializer),
            },
        )
    }

    pub(super) fn lower_indexer_access(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        indexer: Option<SymbolId>,
        arguments: ArgListId,
        result: LookupResult,
    ) -> Option<Operation> {
        let Some(indexer) = self.resolved(indexer, result) else {
            let children = self.salvage(receiver, Some(arguments), BoundId::INVALID);
            return self.lower_invalid(id, children);
        };
        self.emit(
            id,
            OperationKind::PropertyReference {
                property: indexer,
                instance: self.instance(receiver, indexer),
                arguments: self.lazy_arguments(id, indexer, arguments),
            },
        )
    }

    /// A method group outside a conversion. With a single resolved method
    /// it is a method reference; otherwise only the receiver survives.
    pub(super) fn lower_method_group(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        method: Option<SymbolId>,
    ) -> Option<Operation> {
        match method {
            Some(method) => Some(self.method_reference(id, receiver, method)),
            None => {
                let children = self.salvage(receiver, None, BoundId::INVALID);
                self.lower_invalid(id, children)
            }
        }
    }

    /// Method reference on `anchor_of`'s anchor, for method groups and the
    /// targets of delegate creations.
    pub(super) fn method_reference(
        self: &Arc<Self>,
        anchor_of: BoundId,
        receiver: BoundId,
        method: SymbolId,
    ) -> Operation {
        let is_virtual = self.is_virtual_call(receiver, method);
        self.node(
            anchor_of,
            OperationKind::MethodReference {
                method,
                instance: self.instance(receiver, method),
                is_virtual,
            },
        )
        .into_operation()
    }

    /// `new D(target)`. A method-group argument becomes a method reference
    /// to the method the resolver picked.
    pub(super) fn lower_delegate_creation(
        self: &Arc<Self>,
        id: BoundId,
        argument: BoundId,
        method: Option<SymbolId>,
    ) -> Option<Operation> {
        self.emit(
            id,
            OperationKind::DelegateCreation {
                target: self.lazy_with(move |this| this.delegate_target(argument, method)),
            },
        )
    }

    /// Target of a delegate creation: a method reference when `operand` is
    /// a method group and a method is known, the operand itself otherwise.
    pub(super) fn delegate_target(
        self: &Arc<Self>,
        operand: BoundId,
        method: Option<SymbolId>,
    ) -> Option<Operation> {
        if !operand.is_valid() {
            return None;
        }
        match (self.tree.kind(operand), method) {
            (BoundKind::MethodGroup { receiver, .. }, Some(method)) => {
                Some(self.method_reference(operand, receiver, method))
            }
            _ => self.create(operand),
        }
    }

    // Late-bound operations

    pub(super) fn lower_dynamic_invocation(
        self: &Arc<Self>,
        id: BoundId,
        expression: BoundId,
        arguments: ArgListId,
    ) -> Option<Operation> {
        let list = self.tree.arguments(arguments);
        self.emit(
            id,
            OperationKind::DynamicInvocation {
                operation: self.lazy(expression),
                arguments: self.lazy_range(list.arguments),
                argument_info: self.dynamic_info(arguments),
            },
        )
    }

    pub(super) fn lower_dynamic_indexer(
        self: &Arc<Self>,
        id: BoundId,
        receiver: BoundId,
        arguments: ArgListId,
    ) -> Option<Operation> {
        let list = self.tree.arguments(arguments);
        self.emit(
            id,
            OperationKind::DynamicIndexerAccess {
                operation: self.lazy(receiver),
                arguments: self.lazy_range(list.arguments),
                argument_info: self.dynamic_info(arguments),
            },
        )
    }

    pub(super) fn lower_dynamic_object_creation(
        self: &Arc<Self>,
        id: BoundId,
        arguments: ArgListId,
        initializer: BoundId,
    ) -> Option<Operation> {
        let list = self.tree.arguments(arguments);
        self.emit(
            id,
            OperationKind::DynamicObjectCreation {
                arguments: self.lazy_range(list.arguments),
                argument_info: self.dynamic_info(arguments),
                initializer: self.lazy(initializer),
            },
        )
    }

    /// Late-bound calls keep names and ref kinds as written; there is no
    /// target to match them against.
    pub(super) fn dynamic_info(&self, arguments: ArgListId) -> DynamicArgumentInfo {
        let list = self.tree.arguments(arguments);
        DynamicArgumentInfo {
            names: list.names.clone(),
            ref_kinds: list.ref_kinds.clone(),
        }
    }

    // Argument records

    /// Deferred per-parameter argument records of a resolved call to
    /// `target`.
    pub(super) fn lazy_arguments(
        self: &Arc<Self>,
        call: BoundId,
        target: SymbolId,
        arguments: ArgListId,
    ) -> LazyArguments {
        self.lazy_with(move |this| this.bind_arguments(call, target, arguments))
    }

    /// # Panics
    /// Panics when the resolver's record does not describe a complete
    /// binding against `target`'s parameters.
    fn bind_arguments(
        self: &Arc<Self>,
        call: BoundId,
        target: SymbolId,
        arguments: ArgListId,
    ) -> Vec<ArgumentBinding> {
        let parameters = self.tree.symbol(target).parameters();
        let planned = match plan_arguments(&self.tree, parameters, self.tree.arguments(arguments)) {
            Ok(planned) => planned,
            Err(mismatch) => panic!(
                "resolver committed an inconsistent argument binding for {call:?}: {mismatch}"
            ),
        };
        planned
            .into_iter()
            .map(|planned| self.bind_argument(call, planned))
            .collect()
    }

    fn bind_argument(self: &Arc<Self>, call: BoundId, planned: PlannedArgument) -> ArgumentBinding {
        let PlannedArgument { parameter, source } = planned;
        match source {
            ArgumentSource::Explicit {
                argument,
                is_named,
                ref_kind,
            } => ArgumentBinding {
                parameter,
                value: self.argument_value(argument),
                kind: ArgumentKind::Explicit,
                is_named,
                ref_kind,
            },
            ArgumentSource::ParamArray { elements } => ArgumentBinding {
                parameter,
                value: self.param_array(call, parameter, &elements),
                kind: ArgumentKind::ParamArray,
                is_named: false,
                ref_kind: RefKind::None,
            },
            ArgumentSource::Default(constant) => {
                let ty = self.tree.symbol(parameter).ty;
                ArgumentBinding {
                    parameter,
                    value: self
                        .synthesized(call, OperationKind::Literal)
                        .with_type(ty)
                        .with_constant(adapt_constant(Some(constant)))
                        .into_operation(),
                    kind: ArgumentKind::DefaultValue,
                    is_named: false,
                    ref_kind: RefKind::None,
                }
            }
        }
    }

    /// An argument whose own lowering vanished (a placeholder conversion
    /// over nothing) still needs a value; use an empty invalid node.
    fn argument_value(self: &Arc<Self>, argument: BoundId) -> Operation {
        self.create(argument)
            .or_else(|| self.lower_invalid(argument, Vec::new()))
            .unwrap_or_else(|| unreachable!("invalid nodes always lower"))
    }

    /// `new T[n] { elements }` synthesized for an expanded `params` call.
    fn param_array(
        self: &Arc<Self>,
        call: BoundId,
        parameter: SymbolId,
        elements: &[BoundId],
    ) -> Operation {
        let count = i64::try_from(elements.len()).unwrap_or(i64::MAX);
        let size = self
            .synthesized(call, OperationKind::Literal)
            .with_type(Some(TypeId::INT))
            .with_constant(Some(ConstantValue::Int(count)))
            .into_operation();
        let initializer = self
            .synthesized(
                call,
                OperationKind::ArrayInitializer {
                    element_values: Deferred::ready(self.create_all(elements)),
                },
            )
            .into_operation();
        self.synthesized(
            call,
            OperationKind::ArrayCreation {
                dimension_sizes: Deferred::ready(vec![size]),
                initializer: Deferred::ready(Some(initializer)),
            },
        )
        .with_type(self.tree.symbol(parameter).ty)
        .into_operation()
    }
}
