use std::sync::Arc;

use pretty_assertions::assert_eq;
use sema_ir::bound::{
    BinaryOp, BoundBinaryOp, BoundId, BoundKind, BoundNode, BoundRange, ConversionKind,
    DeclarationSite, LookupResult, SymbolRange,
};
use sema_ir::operation::{
    ArgumentKind, BinaryOperatorKind, BranchKind, CaseClauseKind, ConversionInfo,
    DynamicArgumentInfo, InstanceReferenceKind, Operation, OperationKind, ReturnKind,
};
use sema_ir::{ConstantValue, RefKind, Symbol, SymbolKind, TypeId};

use crate::fixture::Fixture;
use crate::OperationFactory;

fn present(child: &Option<Operation>) -> &Operation {
    child
        .as_ref()
        .unwrap_or_else(|| panic!("expected a child operation"))
}

fn lowered(factory: &OperationFactory, id: BoundId) -> Operation {
    factory
        .create(id)
        .unwrap_or_else(|| panic!("{id:?} should lower to an operation"))
}

fn constants(ops: &[Operation]) -> Vec<Option<ConstantValue>> {
    ops.iter().map(|op| op.constant).collect()
}

fn boolean(fx: &mut Fixture) -> BoundId {
    fx.add_typed(BoundKind::Literal, TypeId::BOOL)
}

// Disambiguation

#[test]
fn nested_initializer_assignment_is_member_initializer() {
    let mut fx = Fixture::new();
    let receiver = fx.add(BoundKind::ImplicitReceiver);
    let inner = fx.property("Inner", Vec::new());
    let count = fx.property("Count", Vec::new());
    let inner_member = fx.add(BoundKind::ObjectInitializerMember {
        receiver,
        member: Some(inner),
        arguments: None,
        result: LookupResult::Viable,
    });
    let count_member = fx.add(BoundKind::ObjectInitializerMember {
        receiver,
        member: Some(count),
        arguments: None,
        result: LookupResult::Viable,
    });
    let nested = fx.add(BoundKind::CollectionInitializer {
        initializers: BoundRange::EMPTY,
    });
    let three = fx.int(3);
    let nested_assignment = fx.add(BoundKind::Assignment {
        left: inner_member,
        right: nested,
        is_ref: false,
    });
    let plain_assignment = fx.add_typed(
        BoundKind::Assignment {
            left: count_member,
            right: three,
            is_ref: false,
        },
        TypeId::INT,
    );
    let factory = fx.factory();

    let op = lowered(&factory, nested_assignment);
    let OperationKind::MemberInitializer {
        initialized_member,
        initializer,
    } = &op.kind
    else {
        panic!("expected member initializer, got {}", op.name());
    };
    assert!(matches!(
        present(initialized_member.get()).kind,
        OperationKind::PropertyReference { property, .. } if property == inner
    ));
    assert!(matches!(
        present(initializer.get()).kind,
        OperationKind::ObjectOrCollectionInitializer { .. }
    ));

    let op = lowered(&factory, plain_assignment);
    assert!(matches!(
        op.kind,
        OperationKind::SimpleAssignment { is_ref: false, .. }
    ));
    assert_eq!(op.ty, Some(TypeId::INT));
}

#[test]
fn method_group_conversion_is_delegate_creation() {
    let mut fx = Fixture::new();
    let this = fx.add(BoundKind::ThisReference);
    let handler = fx.method_with("OnClick", Vec::new(), |m| m.is_virtual = true);
    let invoke = fx.method("Invoke", Vec::new());
    let action = fx.name("Action");
    let delegate = fx.tree.types.delegate(action, invoke);
    let group = fx.add(BoundKind::MethodGroup {
        receiver: this,
        method: None,
    });
    let conversion = fx.add_typed(
        BoundKind::Conversion {
            operand: group,
            conversion: ConversionKind::MethodGroup,
            method: Some(handler),
            explicit_cast: false,
            checked: false,
        },
        delegate,
    );
    let factory = fx.factory();

    let op = lowered(&factory, conversion);
    assert!(op.is_implicit);
    assert_eq!(op.ty, Some(delegate));
    let OperationKind::DelegateCreation { target } = &op.kind else {
        panic!("expected delegate creation, got {}", op.name());
    };
    let target = present(target.get());
    assert_eq!(target.anchor, factory.tree().anchor(group));
    let OperationKind::MethodReference {
        method,
        instance,
        is_virtual,
    } = &target.kind
    else {
        panic!("expected method reference, got {}", target.name());
    };
    assert_eq!(*method, handler);
    assert!(*is_virtual);
    assert!(matches!(
        present(instance.get()).kind,
        OperationKind::InstanceReference {
            kind: InstanceReferenceKind::ContainingTypeInstance
        }
    ));
}

#[test]
fn lambda_becomes_delegate_creation_only_for_delegate_targets() {
    let mut fx = Fixture::new();
    let invoke = fx.method("Invoke", Vec::new());
    let func = fx.name("Func");
    let delegate = fx.tree.types.delegate(func, invoke);
    let lambda_symbol = fx.method("<lambda>", Vec::new());

    let lambda = |fx: &mut Fixture| {
        let body = fx.add(BoundKind::Block {
            statements: BoundRange::EMPTY,
            locals: SymbolRange::EMPTY,
        });
        fx.add(BoundKind::Lambda {
            symbol: lambda_symbol,
            body,
        })
    };
    let to_delegate_operand = lambda(&mut fx);
    let to_object_operand = lambda(&mut fx);
    let to_delegate = fx.add_typed(
        BoundKind::Conversion {
            operand: to_delegate_operand,
            conversion: ConversionKind::AnonymousFunction,
            method: None,
            explicit_cast: true,
            checked: false,
        },
        delegate,
    );
    let to_object = fx.add_typed(
        BoundKind::Conversion {
            operand: to_object_operand,
            conversion: ConversionKind::ImplicitReference,
            method: None,
            explicit_cast: false,
            checked: false,
        },
        TypeId::OBJECT,
    );
    let factory = fx.factory();

    let op = lowered(&factory, to_delegate);
    assert!(!op.is_implicit);
    let OperationKind::DelegateCreation { target } = &op.kind else {
        panic!("expected delegate creation, got {}", op.name());
    };
    let target = present(target.get());
    assert!(matches!(target.kind, OperationKind::AnonymousFunction { .. }));
    assert!(Arc::ptr_eq(target, &lowered(&factory, to_delegate_operand)));

    let op = lowered(&factory, to_object);
    assert!(op.is_implicit);
    assert!(matches!(op.kind, OperationKind::Conversion { .. }));
}

#[test]
fn checked_flag_survives_only_on_numeric_conversions() {
    let mut fx = Fixture::new();
    let one = fx.int(1);
    let value = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let operator = fx.method_with("op_Implicit", Vec::new(), |m| m.is_static = true);
    let two = fx.int(2);
    let numeric = fx.add_typed(
        BoundKind::Conversion {
            operand: one,
            conversion: ConversionKind::ExplicitNumeric,
            method: None,
            explicit_cast: true,
            checked: true,
        },
        TypeId::LONG,
    );
    let reference = fx.add_typed(
        BoundKind::Conversion {
            operand: value,
            conversion: ConversionKind::ExplicitReference,
            method: None,
            explicit_cast: true,
            checked: true,
        },
        TypeId::STRING,
    );
    let user_defined = fx.add_typed(
        BoundKind::Conversion {
            operand: two,
            conversion: ConversionKind::ImplicitUserDefined,
            method: Some(operator),
            explicit_cast: false,
            checked: false,
        },
        TypeId::DOUBLE,
    );
    let factory = fx.factory();

    let op = lowered(&factory, numeric);
    let OperationKind::Conversion {
        conversion,
        is_try_cast,
        is_checked,
        ..
    } = &op.kind
    else {
        panic!("expected conversion, got {}", op.name());
    };
    assert!(*is_checked);
    assert!(!*is_try_cast);
    assert!(!op.is_implicit);
    assert_eq!(
        *conversion,
        ConversionInfo {
            exists: true,
            is_identity: false,
            is_numeric: true,
            is_implicit: false,
            is_user_defined: false,
            method: None,
        }
    );

    let op = lowered(&factory, reference);
    assert!(matches!(
        op.kind,
        OperationKind::Conversion {
            is_checked: false,
            ..
        }
    ));

    let op = lowered(&factory, user_defined);
    let OperationKind::Conversion { conversion, .. } = &op.kind else {
        panic!("expected conversion, got {}", op.name());
    };
    assert!(conversion.is_user_defined);
    assert_eq!(conversion.method, Some(operator));
}

#[test]
fn as_operator_is_unchecked_try_cast() {
    let mut fx = Fixture::new();
    let value = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let cast = fx.add_typed(
        BoundKind::AsOperator {
            operand: value,
            target: TypeId::STRING,
        },
        TypeId::STRING,
    );
    let factory = fx.factory();

    let op = lowered(&factory, cast);
    let OperationKind::Conversion {
        conversion,
        is_try_cast,
        is_checked,
        ..
    } = &op.kind
    else {
        panic!("expected conversion, got {}", op.name());
    };
    assert!(*is_try_cast);
    assert!(!*is_checked);
    assert!(conversion.exists);
    assert!(!conversion.is_implicit);
}

#[test]
fn local_declaration_sites() {
    let mut fx = Fixture::new();
    let x = fx.local("x");
    let reference = |fx: &mut Fixture, declaration| {
        fx.add_typed(
            BoundKind::Local {
                local: x,
                declaration,
            },
            TypeId::INT,
        )
    };
    let plain = reference(&mut fx, DeclarationSite::None);
    let designation = reference(&mut fx, DeclarationSite::Designation);
    let out_var = reference(&mut fx, DeclarationSite::DeclarationExpression);
    let factory = fx.factory();

    assert!(matches!(
        lowered(&factory, plain).kind,
        OperationKind::LocalReference {
            is_declaration: false,
            ..
        }
    ));
    assert!(matches!(
        lowered(&factory, designation).kind,
        OperationKind::LocalReference {
            is_declaration: true,
            ..
        }
    ));

    let op = lowered(&factory, out_var);
    let OperationKind::DeclarationExpression { expression } = &op.kind else {
        panic!("expected declaration expression, got {}", op.name());
    };
    let inner = present(expression.get());
    assert!(matches!(
        inner.kind,
        OperationKind::LocalReference {
            is_declaration: true,
            ..
        }
    ));
    assert_eq!(inner.anchor, op.anchor);
}

#[test]
fn logical_flag_selects_short_circuit_operators() {
    let mut fx = Fixture::new();
    let binary = |fx: &mut Fixture, op| {
        let left = boolean(fx);
        let right = boolean(fx);
        fx.add_typed(
            BoundKind::Binary {
                op,
                left,
                right,
                method: None,
            },
            TypeId::BOOL,
        )
    };
    let short_circuit = binary(&mut fx, BoundBinaryOp::logical(BinaryOp::And));
    let bitwise = binary(&mut fx, BoundBinaryOp::new(BinaryOp::And));
    let left = boolean(&mut fx);
    let right = boolean(&mut fx);
    let operator_true = fx.method_with("op_BitwiseOr", Vec::new(), |m| m.is_static = true);
    let user_defined = fx.add_typed(
        BoundKind::UserDefinedConditionalLogical {
            op: BoundBinaryOp::logical(BinaryOp::Or),
            left,
            right,
            method: operator_true,
        },
        TypeId::BOOL,
    );
    let factory = fx.factory();

    let operator_of = |id| match lowered(&factory, id).kind {
        OperationKind::Binary {
            operator,
            operator_method,
            ..
        } => (operator, operator_method),
        ref other => panic!("expected binary, got {other:?}"),
    };
    assert_eq!(
        operator_of(short_circuit),
        (BinaryOperatorKind::ConditionalAnd, None)
    );
    assert_eq!(operator_of(bitwise), (BinaryOperatorKind::And, None));
    assert_eq!(
        operator_of(user_defined),
        (BinaryOperatorKind::ConditionalOr, Some(operator_true))
    );
}

// Calls and arguments

#[test]
fn call_arguments_follow_parameter_order() {
    let mut fx = Fixture::new();
    let a = fx.parameter("a", 0, None, false);
    let b = fx.parameter("b", 1, Some(ConstantValue::Int(5)), false);
    let c = fx.parameter("c", 2, None, true);
    let f = fx.method_with("F", vec![a, b, c], |m| m.is_static = true);
    let ten = fx.int(10);
    let twenty = fx.int(20);
    let thirty = fx.int(30);
    let a_name = fx.name("a");
    let arguments = fx.args_with(&[ten, twenty, thirty], |list| {
        list.with_names(vec![Some(a_name), None, None])
            .with_parameter_map(vec![0, 2, 2])
            .expanded()
    });
    let call = fx.add_typed(
        BoundKind::Call {
            receiver: BoundId::INVALID,
            method: Some(f),
            arguments,
            result: LookupResult::Viable,
        },
        TypeId::VOID,
    );
    let factory = fx.factory();

    let op = lowered(&factory, call);
    let OperationKind::Invocation {
        method,
        instance,
        arguments,
        ..
    } = &op.kind
    else {
        panic!("expected invocation, got {}", op.name());
    };
    assert_eq!(*method, f);
    assert!(instance.get().is_none());
    assert!(!arguments.is_forced());

    let bindings = arguments.get();
    let shape: Vec<_> = bindings
        .iter()
        .map(|binding| (binding.parameter, binding.kind, binding.is_named))
        .collect();
    assert_eq!(
        shape,
        vec![
            (a, ArgumentKind::Explicit, true),
            (b, ArgumentKind::DefaultValue, false),
            (c, ArgumentKind::ParamArray, false),
        ]
    );

    assert!(Arc::ptr_eq(&bindings[0].value, &lowered(&factory, ten)));

    let default = &bindings[1].value;
    assert!(default.is_implicit);
    assert_eq!(default.anchor, op.anchor);
    assert_eq!(default.constant, Some(ConstantValue::Int(5)));
    assert_eq!(default.ty, Some(TypeId::INT));

    let array = &bindings[2].value;
    assert!(array.is_implicit);
    let element = array.ty.and_then(|ty| factory.tree().types.element_type(ty));
    assert_eq!(element, Some(TypeId::INT));
    let OperationKind::ArrayCreation {
        dimension_sizes,
        initializer,
    } = &array.kind
    else {
        panic!("expected array creation, got {}", array.name());
    };
    assert_eq!(
        constants(dimension_sizes.get()),
        vec![Some(ConstantValue::Int(2))]
    );
    assert_eq!(
        constants(&present(initializer.get()).children()),
        vec![Some(ConstantValue::Int(20)), Some(ConstantValue::Int(30))]
    );
}

#[test]
fn empty_params_still_get_an_array() {
    let mut fx = Fixture::new();
    let rest = fx.parameter("rest", 0, None, true);
    let log = fx.method_with("Log", vec![rest], |m| m.is_static = true);
    let arguments = fx.args_with(&[], |list| list.expanded());
    let call = fx.add(BoundKind::Call {
        receiver: BoundId::INVALID,
        method: Some(log),
        arguments,
        result: LookupResult::Viable,
    });
    let factory = fx.factory();

    let op = lowered(&factory, call);
    let OperationKind::Invocation { arguments, .. } = &op.kind else {
        panic!("expected invocation, got {}", op.name());
    };
    let [binding] = arguments.get().as_slice() else {
        panic!("expected one binding");
    };
    assert_eq!(binding.kind, ArgumentKind::ParamArray);
    let OperationKind::ArrayCreation {
        dimension_sizes,
        initializer,
    } = &binding.value.kind
    else {
        panic!("expected array creation");
    };
    assert_eq!(
        constants(dimension_sizes.get()),
        vec![Some(ConstantValue::Int(0))]
    );
    assert!(present(initializer.get()).children().is_empty());
}

#[test]
fn ref_kinds_come_from_the_call_site() {
    let mut fx = Fixture::new();
    let target = fx.parameter("target", 0, None, false);
    let store = fx.method_with("Store", vec![target], |m| m.is_static = true);
    let x = fx.local("x");
    let argument = fx.add(BoundKind::Local {
        local: x,
        declaration: DeclarationSite::None,
    });
    let arguments = fx.args_with(&[argument], |list| list.with_ref_kinds(vec![RefKind::Ref]));
    let call = fx.add(BoundKind::Call {
        receiver: BoundId::INVALID,
        method: Some(store),
        arguments,
        result: LookupResult::Viable,
    });
    let factory = fx.factory();

    let op = lowered(&factory, call);
    let OperationKind::Invocation { arguments, .. } = &op.kind else {
        panic!("expected invocation, got {}", op.name());
    };
    assert_eq!(arguments.get()[0].ref_kind, RefKind::Ref);
}

#[test]
fn base_calls_are_not_virtual() {
    let mut fx = Fixture::new();
    let to_string = fx.method_with("ToString", Vec::new(), |m| m.is_virtual = true);
    let call = |fx: &mut Fixture, receiver_kind| {
        let receiver = fx.add(receiver_kind);
        let arguments = fx.args(&[]);
        fx.add_typed(
            BoundKind::Call {
                receiver,
                method: Some(to_string),
                arguments,
                result: LookupResult::Viable,
            },
            TypeId::STRING,
        )
    };
    let through_base = call(&mut fx, BoundKind::BaseReference);
    let through_this = call(&mut fx, BoundKind::ThisReference);
    let factory = fx.factory();

    let virtual_of = |id| match lowered(&factory, id).kind {
        OperationKind::Invocation {
            is_virtual,
            ref instance,
            ..
        } => {
            assert!(instance.get().is_some());
            is_virtual
        }
        ref other => panic!("expected invocation, got {other:?}"),
    };
    assert!(!virtual_of(through_base));
    assert!(virtual_of(through_this));
}

#[test]
fn extension_calls_have_no_instance() {
    let mut fx = Fixture::new();
    let source = fx.parameter("source", 0, None, false);
    let twice = fx.method_with("Twice", vec![source], |m| m.is_extension = true);
    let receiver = fx.int(4);
    let argument = fx.int(4);
    let arguments = fx.args_with(&[argument], |list| list.as_extension());
    let call = fx.add_typed(
        BoundKind::Call {
            receiver,
            method: Some(twice),
            arguments,
            result: LookupResult::Viable,
        },
        TypeId::INT,
    );
    let factory = fx.factory();

    let op = lowered(&factory, call);
    let OperationKind::Invocation { instance, .. } = &op.kind else {
        panic!("expected invocation, got {}", op.name());
    };
    assert!(instance.get().is_none());
    assert_eq!(
        constants(&op.children()),
        vec![Some(ConstantValue::Int(4))]
    );
}

#[test]
fn error_placeholder_target_is_invalid() {
    let mut fx = Fixture::new();
    let missing = fx.method_with("Missing", Vec::new(), |m| m.is_error = true);
    let receiver = fx.add(BoundKind::ThisReference);
    let argument = fx.int(1);
    let arguments = fx.args(&[argument]);
    let call = fx.add_typed(
        BoundKind::Call {
            receiver,
            method: Some(missing),
            arguments,
            result: LookupResult::Viable,
        },
        TypeId::ERROR,
    );
    let factory = fx.factory();

    let op = lowered(&factory, call);
    assert!(matches!(op.kind, OperationKind::Invalid { .. }));
    let children = op.children();
    assert_eq!(children.len(), 2);
    assert!(matches!(
        children[0].kind,
        OperationKind::InstanceReference { .. }
    ));
    assert_eq!(children[1].constant, Some(ConstantValue::Int(1)));
}

#[test]
fn recovery_wrapper_on_the_same_syntax_is_implicit() {
    let mut fx = Fixture::new();
    let anchor = fx.anchor();
    let only_child = fx.add_node(BoundNode::new(BoundKind::Literal, anchor).with_type(TypeId::INT));
    let children = fx.list(&[only_child]);
    let wrapper = fx.add_node(
        BoundNode::new(
            BoundKind::BadExpression {
                children,
                result: LookupResult::OverloadResolutionFailure,
            },
            anchor,
        )
        .with_type(TypeId::INT),
    );
    let factory = fx.factory();

    let op = lowered(&factory, wrapper);
    assert!(op.is_implicit);
    assert_eq!(op.ty, Some(TypeId::INT));
}

#[test]
fn indexer_access_binds_index_arguments() {
    let mut fx = Fixture::new();
    let index = fx.parameter("index", 0, None, false);
    let item = fx.property("Item", vec![index]);
    let items = fx.local("items");
    let receiver = fx.add(BoundKind::Local {
        local: items,
        declaration: DeclarationSite::None,
    });
    let zero = fx.int(0);
    let arguments = fx.args(&[zero]);
    let access = fx.add_typed(
        BoundKind::IndexerAccess {
            receiver,
            indexer: Some(item),
            arguments,
            result: LookupResult::Viable,
        },
        TypeId::INT,
    );
    let factory = fx.factory();

    let op = lowered(&factory, access);
    let OperationKind::PropertyReference {
        property,
        arguments,
        ..
    } = &op.kind
    else {
        panic!("expected property reference, got {}", op.name());
    };
    assert_eq!(*property, item);
    assert_eq!(arguments.get().len(), 1);
    let children = op.children();
    assert!(matches!(children[0].kind, OperationKind::LocalReference { .. }));
    assert_eq!(children[1].constant, Some(ConstantValue::Int(0)));
}

#[test]
fn object_creation_with_and_without_constructor() {
    let mut fx = Fixture::new();
    let constructor = fx.method(".ctor", Vec::new());
    let widget = fx.name("Widget");
    let widget_type = fx.tree.types.named(widget);
    let creation = |fx: &mut Fixture, constructor, result| {
        let argument = fx.int(7);
        let arguments = fx.args(&[argument]);
        let initializer = fx.add(BoundKind::ObjectInitializer {
            initializers: BoundRange::EMPTY,
        });
        fx.add_typed(
            BoundKind::ObjectCreation {
                constructor,
                arguments,
                initializer,
                result,
            },
            widget_type,
        )
    };
    let valid = creation(&mut fx, Some(constructor), LookupResult::Viable);
    let failed = creation(&mut fx, None, LookupResult::Empty);
    let factory = fx.factory();

    let op = lowered(&factory, valid);
    assert!(matches!(op.kind, OperationKind::ObjectCreation { .. }));

    let op = lowered(&factory, failed);
    assert!(matches!(op.kind, OperationKind::Invalid { .. }));
    let names: Vec<&str> = op.children().iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["Literal", "ObjectOrCollectionInitializer"]);
}

#[test]
fn explicit_delegate_creation_targets_the_chosen_method() {
    let mut fx = Fixture::new();
    let run = fx.method_with("Run", Vec::new(), |m| m.is_static = true);
    let group = fx.add(BoundKind::MethodGroup {
        receiver: BoundId::INVALID,
        method: None,
    });
    let creation = fx.add(BoundKind::DelegateCreation {
        argument: group,
        method: Some(run),
    });
    let lone_group = fx.add(BoundKind::MethodGroup {
        receiver: BoundId::INVALID,
        method: None,
    });
    let factory = fx.factory();

    let op = lowered(&factory, creation);
    let OperationKind::DelegateCreation { target } = &op.kind else {
        panic!("expected delegate creation, got {}", op.name());
    };
    assert!(matches!(
        present(target.get()).kind,
        OperationKind::MethodReference { method, is_virtual: false, .. } if method == run
    ));

    assert!(matches!(
        lowered(&factory, lone_group).kind,
        OperationKind::Invalid { .. }
    ));
}

// Initializers and late binding

#[test]
fn collection_element_is_implicit_add_call() {
    let mut fx = Fixture::new();
    let item = fx.parameter("item", 0, None, false);
    let add = fx.method("Add", vec![item]);
    let receiver = fx.add(BoundKind::ImplicitReceiver);
    let one = fx.int(1);
    let arguments = fx.args(&[one]);
    let element = fx.add(BoundKind::CollectionElementInitializer {
        receiver,
        add_method: Some(add),
        arguments,
    });
    let two = fx.int(2);
    let unresolved_arguments = fx.args(&[two]);
    let unresolved = fx.add(BoundKind::CollectionElementInitializer {
        receiver,
        add_method: None,
        arguments: unresolved_arguments,
    });
    let factory = fx.factory();

    let op = lowered(&factory, element);
    assert!(op.is_implicit);
    let OperationKind::Invocation { method, instance, .. } = &op.kind else {
        panic!("expected invocation, got {}", op.name());
    };
    assert_eq!(*method, add);
    assert!(matches!(
        present(instance.get()).kind,
        OperationKind::InstanceReference {
            kind: InstanceReferenceKind::ImplicitReceiver
        }
    ));

    let op = lowered(&factory, unresolved);
    assert!(matches!(op.kind, OperationKind::Invalid { .. }));
    assert_eq!(
        constants(&op.children()),
        vec![Some(ConstantValue::Int(2))]
    );
}

#[test]
fn collection_element_with_error_add_is_invalid() {
    let mut fx = Fixture::new();
    let add = fx.method_with("Add", Vec::new(), |m| m.is_error = true);
    let receiver = fx.add(BoundKind::ImplicitReceiver);
    let one = fx.int(1);
    let arguments = fx.args(&[one]);
    let element = fx.add(BoundKind::CollectionElementInitializer {
        receiver,
        add_method: Some(add),
        arguments,
    });
    let factory = fx.factory();

    let op = lowered(&factory, element);
    assert!(matches!(op.kind, OperationKind::Invalid { .. }));
    assert_eq!(
        constants(&op.children()),
        vec![Some(ConstantValue::Int(1))]
    );
}

#[test]
fn dynamic_collection_element_calls_add_by_name() {
    let mut fx = Fixture::new();
    let add_name = fx.name("Add");
    let receiver = fx.add_typed(BoundKind::ImplicitReceiver, TypeId::DYNAMIC);
    let one = fx.int(1);
    let arguments = fx.args(&[one]);
    let element = fx.add_typed(
        BoundKind::DynamicCollectionElementInitializer {
            receiver,
            arguments,
        },
        TypeId::DYNAMIC,
    );
    let factory = fx.factory();

    let op = lowered(&factory, element);
    let OperationKind::DynamicInvocation {
        operation,
        arguments,
        argument_info,
    } = &op.kind
    else {
        panic!("expected dynamic invocation, got {}", op.name());
    };
    assert_eq!(*argument_info, DynamicArgumentInfo::default());
    assert_eq!(arguments.get().len(), 1);
    let member = present(operation.get());
    assert!(member.is_implicit);
    assert_eq!(member.ty, Some(TypeId::DYNAMIC));
    let OperationKind::DynamicMemberReference {
        member: name,
        instance,
    } = &member.kind
    else {
        panic!("expected dynamic member reference, got {}", member.name());
    };
    assert_eq!(*name, add_name);
    assert!(present(instance.get()).is_implicit);
}

#[test]
fn dynamic_invocation_keeps_names_and_ref_kinds() {
    let mut fx = Fixture::new();
    let target = fx.add_typed(BoundKind::ThisReference, TypeId::DYNAMIC);
    let member_name = fx.name("Send");
    let access = fx.add_typed(
        BoundKind::DynamicMemberAccess {
            receiver: target,
            member: member_name,
        },
        TypeId::DYNAMIC,
    );
    let first = fx.int(1);
    let second = fx.int(2);
    let label = fx.name("retries");
    let arguments = fx.args_with(&[first, second], |list| {
        list.with_names(vec![None, Some(label)])
            .with_ref_kinds(vec![RefKind::None, RefKind::In])
    });
    let invocation = fx.add_typed(
        BoundKind::DynamicInvocation {
            expression: access,
            arguments,
        },
        TypeId::DYNAMIC,
    );
    let factory = fx.factory();

    let op = lowered(&factory, invocation);
    let OperationKind::DynamicInvocation { argument_info, .. } = &op.kind else {
        panic!("expected dynamic invocation, got {}", op.name());
    };
    assert_eq!(
        *argument_info,
        DynamicArgumentInfo {
            names: vec![None, Some(label)],
            ref_kinds: vec![RefKind::None, RefKind::In],
        }
    );
    let names: Vec<&str> = op.children().iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["DynamicMemberReference", "Literal", "Literal"]);
}

#[test]
fn anonymous_object_members_are_implicit_assignments() {
    let mut fx = Fixture::new();
    let a = fx.property("A", Vec::new());
    let declaration = fx.add(BoundKind::AnonymousPropertyDeclaration { property: a });
    let first = fx.int(1);
    let second = fx.int(2);
    let arguments = fx.list(&[first, second]);
    let declarations = fx.list(&[declaration]);
    let shape = fx.name("<anonymous>");
    let anonymous_type = fx.tree.types.named(shape);
    let creation = fx.add_typed(
        BoundKind::AnonymousObjectCreation {
            arguments,
            declarations,
        },
        anonymous_type,
    );
    let factory = fx.factory();

    let op = lowered(&factory, creation);
    let OperationKind::AnonymousObjectCreation { initializers } = &op.kind else {
        panic!("expected anonymous object creation, got {}", op.name());
    };
    let initializers = initializers.get();
    assert_eq!(initializers.len(), 2);

    let assignment = &initializers[0];
    assert!(assignment.is_implicit);
    let OperationKind::SimpleAssignment { target, value, .. } = &assignment.kind else {
        panic!("expected assignment, got {}", assignment.name());
    };
    assert!(Arc::ptr_eq(present(value.get()), &lowered(&factory, first)));
    let target = present(target.get());
    assert!(target.is_implicit);
    assert_eq!(target.anchor, factory.tree().anchor(declaration));
    let OperationKind::PropertyReference { property, instance, .. } = &target.kind else {
        panic!("expected property reference, got {}", target.name());
    };
    assert_eq!(*property, a);
    let receiver = present(instance.get());
    assert!(receiver.is_implicit);
    assert_eq!(receiver.ty, Some(anonymous_type));

    // No declaration: the value stands alone.
    assert!(Arc::ptr_eq(&initializers[1], &lowered(&factory, second)));
}

#[test]
fn event_assignment_synthesizes_the_event_reference() {
    let mut fx = Fixture::new();
    let name = fx.name("Changed");
    let changed = fx.tree.add_symbol(Symbol::new(
        name,
        Some(TypeId::OBJECT),
        SymbolKind::Event { is_static: false },
    ));
    let this = fx.add(BoundKind::ThisReference);
    let handler = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let subscribe = fx.add_typed(
        BoundKind::EventAssignment {
            receiver: this,
            event: changed,
            handler,
            is_addition: true,
        },
        TypeId::VOID,
    );
    let factory = fx.factory();

    let op = lowered(&factory, subscribe);
    let OperationKind::EventAssignment {
        event_reference,
        adds,
        ..
    } = &op.kind
    else {
        panic!("expected event assignment, got {}", op.name());
    };
    assert!(*adds);
    let reference = present(event_reference.get());
    assert!(reference.is_implicit);
    assert_eq!(reference.ty, Some(TypeId::OBJECT));
    assert_eq!(reference.anchor, op.anchor);
}

// Tuples, strings, queries, lambdas

#[test]
fn declared_tuples_are_wrapped_in_declaration_expressions() {
    let mut fx = Fixture::new();
    let pair = fx.tree.types.tuple(vec![TypeId::INT, TypeId::INT]);
    let one = fx.int(1);
    let two = fx.int(2);
    let elements = fx.list(&[one, two]);
    let declared = fx.add_typed(
        BoundKind::TupleLiteral {
            elements,
            is_declaration: true,
        },
        pair,
    );
    let three = fx.int(3);
    let converted_elements = fx.list(&[three]);
    let converted = fx.add_typed(
        BoundKind::ConvertedTupleLiteral {
            elements: converted_elements,
            natural_type: Some(TypeId::OBJECT),
            is_declaration: false,
        },
        pair,
    );
    let factory = fx.factory();

    let op = lowered(&factory, declared);
    let OperationKind::DeclarationExpression { expression } = &op.kind else {
        panic!("expected declaration expression, got {}", op.name());
    };
    let tuple = present(expression.get());
    assert!(matches!(
        tuple.kind,
        OperationKind::Tuple { natural_type: Some(ty), .. } if ty == pair
    ));
    assert_eq!(tuple.children().len(), 2);

    assert!(matches!(
        lowered(&factory, converted).kind,
        OperationKind::Tuple {
            natural_type: Some(TypeId::OBJECT),
            ..
        }
    ));
}

#[test]
fn interpolated_string_parts() {
    let mut fx = Fixture::new();
    let text = fx.add_typed(BoundKind::Literal, TypeId::STRING);
    let x = fx.local("x");
    let value = fx.add_typed(
        BoundKind::Local {
            local: x,
            declaration: DeclarationSite::None,
        },
        TypeId::INT,
    );
    let insert = fx.add(BoundKind::StringInsert {
        value,
        alignment: BoundId::INVALID,
        format: BoundId::INVALID,
    });
    let parts = fx.list(&[text, insert]);
    let string = fx.add_typed(BoundKind::InterpolatedString { parts }, TypeId::STRING);
    let factory = fx.factory();

    let op = lowered(&factory, string);
    let names: Vec<&str> = op.children().iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["InterpolatedStringText", "Interpolation"]);

    let children = op.children();
    let OperationKind::InterpolatedStringText { text: inner } = &children[0].kind else {
        panic!("expected text part");
    };
    assert!(Arc::ptr_eq(present(inner.get()), &lowered(&factory, text)));
    assert_eq!(children[0].ty, None);
}

#[test]
fn only_the_whole_query_is_translated() {
    let mut fx = Fixture::new();
    let source = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let clause = fx.add(BoundKind::QueryClause {
        value: source,
        is_whole_query: false,
    });
    let query = fx.add_typed(
        BoundKind::QueryClause {
            value: clause,
            is_whole_query: true,
        },
        TypeId::OBJECT,
    );
    let factory = fx.factory();

    assert!(Arc::ptr_eq(
        &lowered(&factory, clause),
        &lowered(&factory, source)
    ));
    let op = lowered(&factory, query);
    let OperationKind::TranslatedQuery { operation } = &op.kind else {
        panic!("expected translated query, got {}", op.name());
    };
    assert!(Arc::ptr_eq(present(operation.get()), &lowered(&factory, source)));
}

#[test]
fn unbound_lambda_lowers_as_its_recovery_binding() {
    let mut fx = Fixture::new();
    let symbol = fx.method("<lambda>", Vec::new());
    let body = fx.add(BoundKind::NoOp);
    let lambda = fx.add(BoundKind::Lambda { symbol, body });
    let recovered = fx.add(BoundKind::UnboundLambda { recovered: lambda });
    let abandoned = fx.add(BoundKind::UnboundLambda {
        recovered: BoundId::INVALID,
    });
    let factory = fx.factory();

    assert!(Arc::ptr_eq(
        &lowered(&factory, recovered),
        &lowered(&factory, lambda)
    ));
    let op = lowered(&factory, abandoned);
    assert!(matches!(op.kind, OperationKind::Invalid { .. }));
    assert!(op.children().is_empty());
}

#[test]
fn range_variables_are_transparent() {
    let mut fx = Fixture::new();
    let r = fx.local("r");
    let value = fx.int(9);
    let variable = fx.add(BoundKind::RangeVariable { variable: r, value });
    let factory = fx.factory();

    assert!(Arc::ptr_eq(
        &lowered(&factory, variable),
        &lowered(&factory, value)
    ));
}

// Patterns

#[test]
fn pattern_shapes() {
    let mut fx = Fixture::new();
    let x = fx.local("x");
    let subject = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let typed = fx.add(BoundKind::DeclarationPattern {
        variable: Some(x),
        declared_type: TypeId::INT,
        is_var: false,
    });
    let is_pattern = fx.add_typed(
        BoundKind::IsPattern {
            operand: subject,
            pattern: typed,
        },
        TypeId::BOOL,
    );
    let var_pattern = fx.add(BoundKind::DeclarationPattern {
        variable: Some(x),
        declared_type: TypeId::OBJECT,
        is_var: true,
    });
    let discard = fx.add(BoundKind::DiscardPattern);
    let factory = fx.factory();

    let op = lowered(&factory, is_pattern);
    let OperationKind::IsPattern { pattern, .. } = &op.kind else {
        panic!("expected is-pattern, got {}", op.name());
    };
    assert!(matches!(
        present(pattern.get()).kind,
        OperationKind::DeclarationPattern {
            declared_symbol: Some(symbol),
            matched_type: TypeId::INT,
            match_all: false,
        } if symbol == x
    ));
    assert!(matches!(
        lowered(&factory, var_pattern).kind,
        OperationKind::DeclarationPattern {
            match_all: true,
            ..
        }
    ));
    assert!(matches!(
        lowered(&factory, discard).kind,
        OperationKind::DiscardPattern
    ));
}

#[test]
fn switch_expression_arms_keep_their_locals() {
    let mut fx = Fixture::new();
    let governing = fx.add_typed(BoundKind::Literal, TypeId::INT);
    let zero = fx.int(0);
    let constant = fx.add(BoundKind::ConstantPattern { value: zero });
    let guard = boolean(&mut fx);
    let result = fx.int(1);
    let n = fx.local("n");
    let locals = fx.tree.alloc_symbols(&[n]);
    let arm = fx.add_typed(
        BoundKind::SwitchExpressionArm {
            pattern: constant,
            guard,
            value: result,
            locals,
        },
        TypeId::INT,
    );
    let arms = fx.list(&[arm]);
    let switch = fx.add_typed(BoundKind::SwitchExpression { governing, arms }, TypeId::INT);
    let factory = fx.factory();

    let op = lowered(&factory, switch);
    assert_eq!(op.ty, Some(TypeId::INT));
    let children = op.children();
    assert_eq!(children.len(), 2);
    let arm = &children[1];
    assert_eq!(arm.ty, None);
    let OperationKind::SwitchExpressionArm { locals, .. } = &arm.kind else {
        panic!("expected switch arm, got {}", arm.name());
    };
    assert_eq!(locals, &vec![n]);
    let names: Vec<&str> = arm.children().iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["ConstantPattern", "Literal", "Literal"]);
}

#[test]
fn switch_labels() {
    let mut fx = Fixture::new();
    let default = fx.add(BoundKind::SwitchLabel {
        value: BoundId::INVALID,
    });
    let one = fx.int(1);
    let single = fx.add(BoundKind::SwitchLabel { value: one });
    let pattern = fx.add(BoundKind::DiscardPattern);
    let guard = boolean(&mut fx);
    let guarded = fx.add(BoundKind::PatternSwitchLabel { pattern, guard });
    let factory = fx.factory();

    let clause_kind = |id| match lowered(&factory, id).kind {
        OperationKind::CaseClause { kind, .. } => kind,
        ref other => panic!("expected case clause, got {other:?}"),
    };
    assert_eq!(clause_kind(default), CaseClauseKind::Default);
    assert_eq!(clause_kind(single), CaseClauseKind::SingleValue);
    assert_eq!(clause_kind(guarded), CaseClauseKind::Pattern);

    let op = lowered(&factory, guarded);
    assert_eq!(op.children().len(), 2);
}

// Statements

#[test]
fn declarations_produce_declarator_groups() {
    let mut fx = Fixture::new();
    let x = fx.local("x");
    let y = fx.local("y");
    let one = fx.int(1);
    let single = fx.add(BoundKind::LocalDeclaration {
        local: x,
        initializer: one,
    });
    let two = fx.int(2);
    let first = fx.add(BoundKind::LocalDeclaration {
        local: x,
        initializer: two,
    });
    let second = fx.add(BoundKind::LocalDeclaration {
        local: y,
        initializer: BoundId::INVALID,
    });
    let declarations = fx.list(&[first, second]);
    let multiple = fx.add(BoundKind::MultipleLocalDeclarations { declarations });
    let factory = fx.factory();

    let op = lowered(&factory, single);
    assert_eq!(op.ty, None);
    let declarators = op.children();
    let [declarator] = declarators.as_slice() else {
        panic!("expected one declarator");
    };
    let OperationKind::VariableDeclarator {
        symbol,
        initializer,
    } = &declarator.kind
    else {
        panic!("expected declarator, got {}", declarator.name());
    };
    assert_eq!(*symbol, x);
    assert_eq!(
        present(initializer.get()).constant,
        Some(ConstantValue::Int(1))
    );

    let symbols: Vec<_> = lowered(&factory, multiple)
        .children()
        .iter()
        .map(|declarator| match declarator.kind {
            OperationKind::VariableDeclarator { symbol, .. } => symbol,
            ref other => panic!("expected declarator, got {other:?}"),
        })
        .collect();
    assert_eq!(symbols, vec![x, y]);
}

#[test]
fn for_loop_flattens_statement_lists() {
    let mut fx = Fixture::new();
    let statement = |fx: &mut Fixture| {
        let expression = fx.int(0);
        fx.add(BoundKind::ExpressionStatement { expression })
    };
    let init_a = statement(&mut fx);
    let init_b = statement(&mut fx);
    let step = statement(&mut fx);
    let statements = fx.list(&[init_a, init_b]);
    let initializer = fx.add(BoundKind::StatementList { statements });
    let condition = boolean(&mut fx);
    let body = fx.add(BoundKind::NoOp);
    let i = fx.local("i");
    let locals = fx.tree.alloc_symbols(&[i]);
    let for_loop = fx.add(BoundKind::For {
        initializer,
        condition,
        increment: step,
        body,
        locals,
    });
    let factory = fx.factory();

    let op = lowered(&factory, for_loop);
    let OperationKind::ForLoop {
        before,
        at_loop_bottom,
        locals,
        ..
    } = &op.kind
    else {
        panic!("expected for loop, got {}", op.name());
    };
    assert_eq!(before.get().len(), 2);
    assert!(Arc::ptr_eq(&before.get()[0], &lowered(&factory, init_a)));
    assert!(Arc::ptr_eq(&at_loop_bottom.get()[0], &lowered(&factory, step)));
    assert_eq!(locals, &vec![i]);
    let names: Vec<&str> = op.children().iter().map(|child| child.name()).collect();
    assert_eq!(
        names,
        vec![
            "ExpressionStatement",
            "ExpressionStatement",
            "Literal",
            "Empty",
            "ExpressionStatement",
        ]
    );
}

#[test]
fn while_and_do_differ_in_condition_position() {
    let mut fx = Fixture::new();
    let loop_of = |fx: &mut Fixture, is_do: bool| {
        let condition = boolean(fx);
        let body = fx.add(BoundKind::NoOp);
        let locals = SymbolRange::EMPTY;
        if is_do {
            fx.add(BoundKind::Do {
                condition,
                body,
                locals,
            })
        } else {
            fx.add(BoundKind::While {
                condition,
                body,
                locals,
            })
        }
    };
    let while_loop = loop_of(&mut fx, false);
    let do_loop = loop_of(&mut fx, true);
    let factory = fx.factory();

    let first_child = |id| lowered(&factory, id).children()[0].name();
    assert_eq!(first_child(while_loop), "Literal");
    assert_eq!(first_child(do_loop), "Empty");
}

#[test]
fn foreach_control_variables() {
    let mut fx = Fixture::new();
    let item = fx.local("item");
    let collection = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let body = fx.add(BoundKind::NoOp);
    let simple = fx.add(BoundKind::ForEach {
        iteration_variable: Some(item),
        deconstruction: BoundId::INVALID,
        collection,
        body,
        is_async: true,
        locals: SymbolRange::EMPTY,
    });

    let a = fx.local("a");
    let b = fx.local("b");
    let designation = |fx: &mut Fixture, local| {
        fx.add(BoundKind::Local {
            local,
            declaration: DeclarationSite::Designation,
        })
    };
    let first = designation(&mut fx, a);
    let second = designation(&mut fx, b);
    let elements = fx.list(&[first, second]);
    let pair = fx.add(BoundKind::TupleLiteral {
        elements,
        is_declaration: true,
    });
    let element = fx.add(BoundKind::Literal);
    let deconstruction = fx.add(BoundKind::DeconstructionAssignment {
        left: pair,
        right: element,
    });
    let pairs = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let pairs_body = fx.add(BoundKind::NoOp);
    let deconstructing = fx.add(BoundKind::ForEach {
        iteration_variable: None,
        deconstruction,
        collection: pairs,
        body: pairs_body,
        is_async: false,
        locals: SymbolRange::EMPTY,
    });
    let factory = fx.factory();

    let op = lowered(&factory, simple);
    let OperationKind::ForEachLoop {
        loop_control_variable,
        is_asynchronous,
        ..
    } = &op.kind
    else {
        panic!("expected foreach, got {}", op.name());
    };
    assert!(*is_asynchronous);
    let variable = present(loop_control_variable.get());
    assert!(variable.is_implicit);
    assert!(matches!(
        variable.kind,
        OperationKind::VariableDeclarator { symbol, .. } if symbol == item
    ));

    let op = lowered(&factory, deconstructing);
    let OperationKind::ForEachLoop {
        loop_control_variable,
        ..
    } = &op.kind
    else {
        panic!("expected foreach, got {}", op.name());
    };
    assert!(Arc::ptr_eq(
        present(loop_control_variable.get()),
        &lowered(&factory, pair)
    ));
}

#[test]
fn catch_clause_declares_its_exception() {
    let mut fx = Fixture::new();
    let e = fx.local("e");
    let exception = fx.name("Exception");
    let exception_type = fx.tree.types.named(exception);
    let body = fx.add(BoundKind::Block {
        statements: BoundRange::EMPTY,
        locals: SymbolRange::EMPTY,
    });
    let catch = fx.add(BoundKind::CatchBlock {
        exception_type: Some(exception_type),
        local: Some(e),
        filter: BoundId::INVALID,
        body,
        locals: SymbolRange::EMPTY,
    });
    let catches = fx.list(&[catch]);
    let try_body = fx.add(BoundKind::NoOp);
    let statement = fx.add(BoundKind::Try {
        body: try_body,
        catches,
        finally: BoundId::INVALID,
    });
    let factory = fx.factory();

    let op = lowered(&factory, statement);
    let names: Vec<&str> = op.children().iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["Empty", "CatchClause"]);

    let clause = lowered(&factory, catch);
    let OperationKind::CatchClause {
        exception_declaration,
        exception_type: declared,
        ..
    } = &clause.kind
    else {
        panic!("expected catch clause, got {}", clause.name());
    };
    assert_eq!(*declared, Some(exception_type));
    assert!(matches!(
        present(exception_declaration.get()).kind,
        OperationKind::VariableDeclarator { symbol, .. } if symbol == e
    ));
}

#[test]
fn using_prefers_declarations_over_expression() {
    let mut fx = Fixture::new();
    let handle = fx.local("handle");
    let resource = fx.add(BoundKind::Local {
        local: handle,
        declaration: DeclarationSite::None,
    });
    let body = fx.add(BoundKind::NoOp);
    let by_expression = fx.add(BoundKind::Using {
        declarations: BoundId::INVALID,
        expression: resource,
        body,
        locals: SymbolRange::EMPTY,
    });
    let opened = fx.int(0);
    let declaration = fx.add(BoundKind::LocalDeclaration {
        local: handle,
        initializer: opened,
    });
    let declared_body = fx.add(BoundKind::NoOp);
    let by_declaration = fx.add(BoundKind::Using {
        declarations: declaration,
        expression: BoundId::INVALID,
        body: declared_body,
        locals: SymbolRange::EMPTY,
    });
    let factory = fx.factory();

    let resource_of = |id| lowered(&factory, id).children()[0].name();
    assert_eq!(resource_of(by_expression), "LocalReference");
    assert_eq!(resource_of(by_declaration), "VariableDeclarationGroup");
}

#[test]
fn jumps_and_throws() {
    let mut fx = Fixture::new();
    let done = fx.label("done");
    let goto = fx.add(BoundKind::Goto { label: done });
    let label = fx.add(BoundKind::Label { label: done });
    let yield_break = fx.add(BoundKind::YieldBreak);
    let error = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let throw = fx.add(BoundKind::Throw { expression: error });
    let condition = boolean(&mut fx);
    let then = fx.add(BoundKind::NoOp);
    let branch = fx.add_typed(
        BoundKind::If {
            condition,
            consequence: then,
            alternative: BoundId::INVALID,
        },
        TypeId::VOID,
    );
    let factory = fx.factory();

    assert!(matches!(
        lowered(&factory, goto).kind,
        OperationKind::Branch { kind: BranchKind::GoTo, target } if target == done
    ));
    assert!(lowered(&factory, label).children().is_empty());
    assert!(matches!(
        lowered(&factory, yield_break).kind,
        OperationKind::Return {
            kind: ReturnKind::YieldBreak,
            ..
        }
    ));

    let op = lowered(&factory, throw);
    let OperationKind::ExpressionStatement { operation } = &op.kind else {
        panic!("expected expression statement, got {}", op.name());
    };
    let inner = present(operation.get());
    assert!(inner.is_implicit);
    assert_eq!(inner.ty, None);
    assert!(Arc::ptr_eq(&inner.children()[0], &lowered(&factory, error)));

    let op = lowered(&factory, branch);
    assert_eq!(op.ty, None);
    assert!(matches!(op.kind, OperationKind::Conditional { .. }));
}

// Passthrough

#[test]
fn unmodeled_constructs_expose_children_and_warn_once() {
    let mut fx = Fixture::new();
    let pointer = fx.add_typed(BoundKind::Literal, TypeId::OBJECT);
    let dereference = fx.add_typed(BoundKind::PointerIndirection { operand: pointer }, TypeId::INT);
    let type_expression = fx.add(BoundKind::TypeExpression);
    let factory = fx.factory();

    let op = lowered(&factory, dereference);
    assert!(matches!(op.kind, OperationKind::None { .. }));
    assert_eq!(op.ty, Some(TypeId::INT));
    assert!(Arc::ptr_eq(&op.children()[0], &lowered(&factory, pointer)));
    assert!(!factory.model().claim_unmodeled_report());

    factory.model().reset_reports();
    let op = lowered(&factory, type_expression);
    assert!(op.children().is_empty());
    assert!(!factory.model().claim_unmodeled_report());
}
