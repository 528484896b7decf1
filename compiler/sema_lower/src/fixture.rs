//! Binder-tree builder for unit tests.
//!
//! Every node gets its own non-overlapping anchor unless one is given
//! explicitly, so anchor equality in tests only happens on purpose.

use std::sync::Arc;

use sema_ir::bound::{
    ArgListId, ArgumentList, BoundId, BoundKind, BoundNode, BoundRange, BoundTree,
};
use sema_ir::{
    Anchor, ConstantValue, MethodSymbol, Name, ParameterSymbol, PropertySymbol, RefKind,
    SemanticModel, StringInterner, Symbol, SymbolId, SymbolKind, TypeId,
};

use crate::OperationFactory;

pub(crate) struct Fixture {
    pub(crate) tree: BoundTree,
    next_offset: u32,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Fixture {
            tree: BoundTree::new(Arc::new(StringInterner::new())),
            next_offset: 0,
        }
    }

    pub(crate) fn anchor(&mut self) -> Anchor {
        let start = self.next_offset;
        self.next_offset += 10;
        Anchor::new(start, start + 5)
    }

    pub(crate) fn name(&self, text: &str) -> Name {
        self.tree.interner().intern(text)
    }

    pub(crate) fn add(&mut self, kind: BoundKind) -> BoundId {
        let anchor = self.anchor();
        self.tree.alloc(BoundNode::new(kind, anchor))
    }

    pub(crate) fn add_typed(&mut self, kind: BoundKind, ty: TypeId) -> BoundId {
        let anchor = self.anchor();
        self.tree.alloc(BoundNode::new(kind, anchor).with_type(ty))
    }

    pub(crate) fn add_node(&mut self, node: BoundNode) -> BoundId {
        self.tree.alloc(node)
    }

    pub(crate) fn int(&mut self, value: i64) -> BoundId {
        let anchor = self.anchor();
        self.tree.alloc(
            BoundNode::new(BoundKind::Literal, anchor)
                .with_type(TypeId::INT)
                .with_constant(ConstantValue::Int(value)),
        )
    }

    pub(crate) fn list(&mut self, ids: &[BoundId]) -> BoundRange {
        self.tree.alloc_list(ids)
    }

    pub(crate) fn args(&mut self, ids: &[BoundId]) -> ArgListId {
        let range = self.tree.alloc_list(ids);
        self.tree.add_arguments(ArgumentList::positional(range))
    }

    pub(crate) fn args_with(
        &mut self,
        ids: &[BoundId],
        shape: impl FnOnce(ArgumentList) -> ArgumentList,
    ) -> ArgListId {
        let range = self.tree.alloc_list(ids);
        self.tree.add_arguments(shape(ArgumentList::positional(range)))
    }

    pub(crate) fn local(&mut self, name: &str) -> SymbolId {
        let name = self.name(name);
        self.tree.add_symbol(Symbol::new(name, Some(TypeId::INT), SymbolKind::Local))
    }

    pub(crate) fn parameter(
        &mut self,
        name: &str,
        ordinal: u32,
        default: Option<ConstantValue>,
        is_params: bool,
    ) -> SymbolId {
        let name = self.name(name);
        let ty = if is_params {
            self.tree.types.array_of(TypeId::INT)
        } else {
            TypeId::INT
        };
        self.tree.add_symbol(Symbol::new(
            name,
            Some(ty),
            SymbolKind::Parameter(ParameterSymbol {
                ordinal,
                ref_kind: RefKind::None,
                default,
                is_params,
            }),
        ))
    }

    pub(crate) fn method(&mut self, name: &str, parameters: Vec<SymbolId>) -> SymbolId {
        self.method_with(name, parameters, |_| {})
    }

    pub(crate) fn method_with(
        &mut self,
        name: &str,
        parameters: Vec<SymbolId>,
        shape: impl FnOnce(&mut MethodSymbol),
    ) -> SymbolId {
        let name = self.name(name);
        let mut method = MethodSymbol {
            parameters,
            is_static: false,
            is_virtual: false,
            is_extension: false,
            is_error: false,
        };
        shape(&mut method);
        self.tree.add_symbol(Symbol::new(name, Some(TypeId::VOID), SymbolKind::Method(method)))
    }

    pub(crate) fn property(&mut self, name: &str, parameters: Vec<SymbolId>) -> SymbolId {
        let name = self.name(name);
        self.tree.add_symbol(Symbol::new(
            name,
            Some(TypeId::INT),
            SymbolKind::Property(PropertySymbol {
                parameters,
                is_static: false,
                is_error: false,
            }),
        ))
    }

    pub(crate) fn field(&mut self, name: &str, is_static: bool) -> SymbolId {
        let name = self.name(name);
        self.tree.add_symbol(Symbol::new(
            name,
            Some(TypeId::INT),
            SymbolKind::Field { is_static },
        ))
    }

    pub(crate) fn label(&mut self, name: &str) -> SymbolId {
        let name = self.name(name);
        self.tree.add_symbol(Symbol::new(name, None, SymbolKind::Label))
    }

    pub(crate) fn factory(self) -> OperationFactory {
        OperationFactory::new(Arc::new(self.tree), SemanticModel::new())
    }
}
