//! Conversions, delegate creation and `as`.

use std::sync::Arc;

use sema_ir::bound::{BoundId, ConversionKind};
use sema_ir::operation::{ConversionInfo, Operation, OperationKind};
use sema_ir::{SymbolId, TypeId};

use super::Lowerer;

fn conversion_info(kind: ConversionKind, method: Option<SymbolId>) -> ConversionInfo {
    ConversionInfo {
        exists: kind != ConversionKind::NoConversion,
        is_identity: kind == ConversionKind::Identity,
        is_numeric: kind.is_numeric(),
        is_implicit: kind.is_implicit(),
        is_user_defined: kind.is_user_defined(),
        method: method.filter(|_| kind.is_user_defined()),
    }
}

impl Lowerer {
    /// One binder conversion becomes one of:
    /// - the operand itself, when the conversion sits on parser-fabricated
    ///   syntax;
    /// - a delegate creation, for method-group conversions and for
    ///   lambda-like operands converted to a delegate type;
    /// - a plain conversion otherwise.
    pub(super) fn lower_conversion(
        self: &Arc<Self>,
        id: BoundId,
        operand: BoundId,
        conversion: ConversionKind,
        method: Option<SymbolId>,
        explicit_cast: bool,
        checked: bool,
    ) -> Option<Operation> {
        let bound = *self.tree.node(id);
        if bound.anchor.is_missing {
            tracing::debug!(node = ?id, "conversion on missing syntax; lowering operand instead");
            return self.create(operand);
        }

        if conversion == ConversionKind::MethodGroup || self.creates_delegate(operand, bound.ty) {
            tracing::debug!(node = ?id, ?conversion, "conversion lowered as delegate creation");
            return Some(
                self.node(
                    id,
                    OperationKind::DelegateCreation {
                        target: self.lazy_with(move |this| this.delegate_target(operand, method)),
                    },
                )
                .implicit(bound.compiler_generated || !explicit_cast)
                .into_operation(),
            );
        }

        Some(
            self.node(
                id,
                OperationKind::Conversion {
                    operand: self.lazy(operand),
                    conversion: conversion_info(conversion, method),
                    is_try_cast: false,
                    is_checked: checked && conversion.is_numeric(),
                },
            )
            .implicit(bound.compiler_generated || !explicit_cast)
            .into_operation(),
        )
    }

    /// A lambda, unbound lambda or method group converted to a delegate
    /// type.
    fn creates_delegate(&self, operand: BoundId, target: Option<TypeId>) -> bool {
        operand.is_valid()
            && self.tree.kind(operand).is_lambda_like()
            && target.is_some_and(|ty| self.tree.types.is_delegate(ty))
    }

    /// `operand as T`: a try-cast, never checked.
    pub(super) fn lower_as(
        self: &Arc<Self>,
        id: BoundId,
        operand: BoundId,
        target: TypeId,
    ) -> Option<Operation> {
        let kind = if operand.is_valid() && self.tree.ty(operand) == Some(target) {
            ConversionKind::Identity
        } else {
            ConversionKind::ExplicitReference
        };
        self.emit(
            id,
            OperationKind::Conversion {
                operand: self.lazy(operand),
                conversion: conversion_info(kind, None),
                is_try_cast: true,
                is_checked: false,
            },
        )
    }
}
