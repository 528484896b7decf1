//! Central dispatch: one arm per binder tag.
//!
//! `BoundKind` is `Copy`, so the tag is copied out of the tree before
//! matching. Every arm either builds its operation here (leaves and
//! one-to-one shapes) or delegates to the constructor in the sibling module
//! that owns the construct family.

use std::sync::Arc;

use sema_ir::bound::{BoundId, BoundKind};
use sema_ir::operation::{
    BranchKind, Deferred, InstanceReferenceKind, Operation, OperationKind, ReturnKind,
};

use super::Lowerer;

impl Lowerer {
    pub(super) fn dispatch(self: &Arc<Self>, id: BoundId) -> Option<Operation> {
        let kind = self.tree.kind(id);
        tracing::trace!(node = ?id, ?kind, "lowering");

        match kind {
            // References and leaves
            BoundKind::Literal => self.emit(id, OperationKind::Literal),
            BoundKind::Local { local, declaration } => self.lower_local(id, local, declaration),
            BoundKind::Parameter { parameter } => {
                self.emit(id, OperationKind::ParameterReference { parameter })
            }
            BoundKind::ThisReference | BoundKind::BaseReference => self.emit(
                id,
                OperationKind::InstanceReference {
                    kind: InstanceReferenceKind::ContainingTypeInstance,
                },
            ),
            BoundKind::ImplicitReceiver | BoundKind::ElementReceiverPlaceholder => Some(
                self.node(
                    id,
                    OperationKind::InstanceReference {
                        kind: InstanceReferenceKind::ImplicitReceiver,
                    },
                )
                .implicit(true)
                .into_operation(),
            ),
            BoundKind::ConditionalReceiver => Some(
                self.node(id, OperationKind::ConditionalAccessInstance)
                    .implicit(true)
                    .into_operation(),
            ),
            BoundKind::RangeVariable { value, .. } => self.create(value),
            BoundKind::Discard => self.emit(id, OperationKind::Discard),
            BoundKind::DefaultExpression => self.emit(id, OperationKind::DefaultValue),
            BoundKind::TypeOf { source_type } => self.emit(
                id,
                OperationKind::TypeOf {
                    type_operand: source_type,
                },
            ),
            BoundKind::SizeOf { source_type } => self.emit(
                id,
                OperationKind::SizeOf {
                    type_operand: source_type,
                },
            ),
            BoundKind::NameOf { argument } => self.emit(
                id,
                OperationKind::NameOf {
                    argument: self.lazy(argument),
                },
            ),

            // Member access
            BoundKind::FieldAccess { receiver, field } => self.emit(
                id,
                OperationKind::FieldReference {
                    field,
                    instance: self.instance(receiver, field),
                },
            ),
            BoundKind::PropertyAccess { receiver, property } => {
                self.lower_property_access(id, receiver, property)
            }
            BoundKind::EventAccess { receiver, event } => self.emit(
                id,
                OperationKind::EventReference {
                    event,
                    instance: self.instance(receiver, event),
                },
            ),
            BoundKind::IndexerAccess {
                receiver,
                indexer,
                arguments,
                result,
            } => self.lower_indexer_access(id, receiver, indexer, arguments, result),
            BoundKind::ArrayAccess { array, indices } => self.emit(
                id,
                OperationKind::ArrayElementReference {
                    array: self.lazy(array),
                    indices: self.lazy_range(indices),
                },
            ),
            BoundKind::MethodGroup { receiver, method } => {
                self.lower_method_group(id, receiver, method)
            }
            BoundKind::ConditionalAccess { receiver, access } => self.emit(
                id,
                OperationKind::ConditionalAccess {
                    operation: self.lazy(receiver),
                    when_not_null: self.lazy(access),
                },
            ),

            // Calls and creation
            BoundKind::Call {
                receiver,
                method,
                arguments,
                result,
            } => self.lower_call(id, receiver, method, arguments, result),
            BoundKind::ObjectCreation {
                constructor,
                arguments,
                initializer,
                result,
            } => self.lower_object_creation(id, constructor, arguments, initializer, result),
            BoundKind::TypeParameterObjectCreation { initializer } => self.emit(
                id,
                OperationKind::TypeParameterObjectCreation {
                    initializer: self.lazy(initializer),
                },
            ),
            BoundKind::DelegateCreation { argument, method } => {
                self.lower_delegate_creation(id, argument, method)
            }
            BoundKind::AnonymousObjectCreation {
                arguments,
                declarations,
            } => self.lower_anonymous_object(id, arguments, declarations),

            // Late-bound operations
            BoundKind::DynamicInvocation {
                expression,
                arguments,
            } => self.lower_dynamic_invocation(id, expression, arguments),
            BoundKind::DynamicIndexerAccess {
                receiver,
                arguments,
            } => self.lower_dynamic_indexer(id, receiver, arguments),
            BoundKind::DynamicObjectCreation {
                arguments,
                initializer,
            } => self.lower_dynamic_object_creation(id, arguments, initializer),
            BoundKind::DynamicMemberAccess { receiver, member }
            | BoundKind::DynamicObjectInitializerMember { receiver, member } => self.emit(
                id,
                OperationKind::DynamicMemberReference {
                    instance: self.lazy(receiver),
                    member,
                },
            ),

            // Initializers
            BoundKind::ObjectInitializer { initializers }
            | BoundKind::CollectionInitializer { initializers } => self.emit(
                id,
                OperationKind::ObjectOrCollectionInitializer {
                    initializers: self.lazy_range(initializers),
                },
            ),
            BoundKind::ObjectInitializerMember {
                receiver,
                member,
                arguments,
                result,
            } => self.lower_initializer_member(id, receiver, member, arguments, result),
            BoundKind::CollectionElementInitializer {
                receiver,
                add_method,
                arguments,
            } => self.lower_collection_element(id, receiver, add_method, arguments),
            BoundKind::DynamicCollectionElementInitializer {
                receiver,
                arguments,
            } => self.lower_dynamic_collection_element(id, receiver, arguments),
            BoundKind::ArrayCreation {
                bounds,
                initializer,
            } => self.emit(
                id,
                OperationKind::ArrayCreation {
                    dimension_sizes: self.lazy_range(bounds),
                    initializer: self.lazy(initializer),
                },
            ),
            BoundKind::ArrayInitialization { elements } => self.emit(
                id,
                OperationKind::ArrayInitializer {
                    element_values: self.lazy_range(elements),
                },
            ),
            BoundKind::FieldEqualsValue { field, value } => self.emit(
                id,
                OperationKind::FieldInitializer {
                    field,
                    value: self.lazy(value),
                },
            ),
            BoundKind::PropertyEqualsValue { property, value } => self.emit(
                id,
                OperationKind::PropertyInitializer {
                    property,
                    value: self.lazy(value),
                },
            ),
            BoundKind::ParameterEqualsValue { parameter, value } => self.emit(
                id,
                OperationKind::ParameterInitializer {
                    parameter,
                    value: self.lazy(value),
                },
            ),

            // Functions
            BoundKind::Lambda { symbol, body } => self.emit(
                id,
                OperationKind::AnonymousFunction {
                    symbol,
                    body: self.lazy(body),
                },
            ),
            BoundKind::UnboundLambda { recovered } => self.lower_unbound_lambda(id, recovered),
            BoundKind::LocalFunction { symbol, body } => self.emit_statement(
                id,
                OperationKind::LocalFunction {
                    symbol,
                    body: self.lazy(body),
                },
            ),

            // Conversions and type tests
            BoundKind::Conversion {
                operand,
                conversion,
                method,
                explicit_cast,
                checked,
            } => self.lower_conversion(id, operand, conversion, method, explicit_cast, checked),
            BoundKind::AsOperator { operand, target } => self.lower_as(id, operand, target),
            BoundKind::IsOperator { operand, target } => self.emit(
                id,
                OperationKind::IsType {
                    value_operand: self.lazy(operand),
                    type_operand: target,
                    is_negated: false,
                },
            ),

            // Operators
            BoundKind::Unary {
                op,
                operand,
                method,
                lifted,
                checked,
            } => self.lower_unary(id, op, operand, method, lifted, checked),
            BoundKind::FromEndIndex { operand, method } => self.lower_from_end(id, operand, method),
            BoundKind::Increment {
                op,
                operand,
                method,
                lifted,
                checked,
            } => self.lower_increment(id, op, operand, method, lifted, checked),
            BoundKind::Binary {
                op,
                left,
                right,
                method,
            } => self.lower_binary(id, op, left, right, method),
            BoundKind::UserDefinedConditionalLogical {
                op,
                left,
                right,
                method,
            } => self.lower_user_defined_logical(id, op, left, right, method),
            BoundKind::TupleBinary { op, left, right } => {
                self.lower_tuple_binary(id, op, left, right)
            }
            BoundKind::CompoundAssignment {
                op,
                left,
                right,
                method,
            } => self.lower_compound_assignment(id, op, left, right, method),
            BoundKind::Assignment {
                left,
                right,
                is_ref,
            } => self.lower_assignment(id, left, right, is_ref),
            BoundKind::DeconstructionAssignment { left, right } => self.emit(
                id,
                OperationKind::DeconstructionAssignment {
                    target: self.lazy(left),
                    value: self.lazy(right),
                },
            ),
            BoundKind::EventAssignment {
                receiver,
                event,
                handler,
                is_addition,
            } => self.lower_event_assignment(id, receiver, event, handler, is_addition),
            BoundKind::NullCoalescing { left, right } => self.emit(
                id,
                OperationKind::Coalesce {
                    value: self.lazy(left),
                    when_null: self.lazy(right),
                },
            ),
            BoundKind::NullCoalescingAssignment { left, right } => self.emit(
                id,
                OperationKind::CoalesceAssignment {
                    target: self.lazy(left),
                    value: self.lazy(right),
                },
            ),
            BoundKind::Conditional {
                condition,
                consequence,
                alternative,
                is_ref,
            } => self.emit(
                id,
                OperationKind::Conditional {
                    condition: self.lazy(condition),
                    when_true: self.lazy(consequence),
                    when_false: self.lazy(alternative),
                    is_ref,
                },
            ),
            BoundKind::Await { operand } => self.emit(
                id,
                OperationKind::Await {
                    operation: self.lazy(operand),
                },
            ),
            BoundKind::AddressOf { operand } => self.emit(
                id,
                OperationKind::AddressOf {
                    reference: self.lazy(operand),
                },
            ),
            BoundKind::ThrowExpression { operand } => self.emit(
                id,
                OperationKind::Throw {
                    exception: self.lazy(operand),
                },
            ),
            BoundKind::Range {
                left,
                right,
                method,
            } => self.emit(
                id,
                OperationKind::Range {
                    left: self.lazy(left),
                    right: self.lazy(right),
                    method,
                },
            ),

            // Tuples, strings, queries
            BoundKind::TupleLiteral {
                elements,
                is_declaration,
            } => self.lower_tuple(id, elements, self.tree.ty(id), is_declaration),
            BoundKind::ConvertedTupleLiteral {
                elements,
                natural_type,
                is_declaration,
            } => self.lower_tuple(id, elements, natural_type, is_declaration),
            BoundKind::InterpolatedString { parts } => self.lower_interpolated_string(id, parts),
            BoundKind::StringInsert {
                value,
                alignment,
                format,
            } => self.emit_statement(
                id,
                OperationKind::Interpolation {
                    expression: self.lazy(value),
                    alignment: self.lazy(alignment),
                    format_string: self.lazy(format),
                },
            ),
            BoundKind::QueryClause {
                value,
                is_whole_query,
            } => self.lower_query_clause(id, value, is_whole_query),

            // Patterns
            BoundKind::IsPattern { operand, pattern } => self.emit(
                id,
                OperationKind::IsPattern {
                    value: self.lazy(operand),
                    pattern: self.lazy(pattern),
                },
            ),
            BoundKind::ConstantPattern { value } => self.lower_constant_pattern(id, value),
            BoundKind::DeclarationPattern {
                variable,
                declared_type,
                is_var,
            } => self.lower_declaration_pattern(id, variable, declared_type, is_var),
            BoundKind::DiscardPattern => self.lower_discard_pattern(id),
            BoundKind::SwitchExpression { governing, arms } => {
                self.lower_switch_expression(id, governing, arms)
            }
            BoundKind::SwitchExpressionArm {
                pattern,
                guard,
                value,
                locals,
            } => self.lower_switch_expression_arm(id, pattern, guard, value, locals),

            // Statements
            BoundKind::Block { statements, locals } => self.emit_statement(
                id,
                OperationKind::Block {
                    operations: self.lazy_range(statements),
                    locals: self.locals(locals),
                },
            ),
            BoundKind::StatementList { statements } => Some(
                self.node(
                    id,
                    OperationKind::Block {
                        operations: self.lazy_range(statements),
                        locals: Vec::new(),
                    },
                )
                .with_type(None)
                .implicit(true)
                .into_operation(),
            ),
            BoundKind::ExpressionStatement { expression } => self.emit_statement(
                id,
                OperationKind::ExpressionStatement {
                    operation: self.lazy(expression),
                },
            ),
            BoundKind::LocalDeclaration { .. } => self.lower_local_declaration(id),
            BoundKind::MultipleLocalDeclarations { declarations } => {
                self.lower_multiple_declarations(id, declarations)
            }
            BoundKind::If {
                condition,
                consequence,
                alternative,
            } => self.emit_statement(
                id,
                OperationKind::Conditional {
                    condition: self.lazy(condition),
                    when_true: self.lazy(consequence),
                    when_false: self.lazy(alternative),
                    is_ref: false,
                },
            ),
            BoundKind::While {
                condition,
                body,
                locals,
            } => self.lower_while(id, condition, body, locals, true),
            BoundKind::Do {
                condition,
                body,
                locals,
            } => self.lower_while(id, condition, body, locals, false),
            BoundKind::For {
                initializer,
                condition,
                increment,
                body,
                locals,
            } => self.lower_for(id, initializer, condition, increment, body, locals),
            BoundKind::ForEach {
                iteration_variable,
                deconstruction,
                collection,
                body,
                is_async,
                locals,
            } => self.lower_for_each(
                id,
                iteration_variable,
                deconstruction,
                collection,
                body,
                is_async,
                locals,
            ),
            BoundKind::Switch {
                expression,
                sections,
                locals,
            } => self.emit_statement(
                id,
                OperationKind::Switch {
                    value: self.lazy(expression),
                    cases: self.lazy_range(sections),
                    locals: self.locals(locals),
                },
            ),
            BoundKind::SwitchSection {
                labels,
                statements,
                locals,
            } => self.emit_statement(
                id,
                OperationKind::SwitchCase {
                    clauses: self.lazy_range(labels),
                    body: self.lazy_range(statements),
                    locals: self.locals(locals),
                },
            ),
            BoundKind::SwitchLabel { value } => self.lower_switch_label(id, value),
            BoundKind::PatternSwitchLabel { pattern, guard } => {
                self.lower_pattern_switch_label(id, pattern, guard)
            }
            BoundKind::Try {
                body,
                catches,
                finally,
            } => self.emit_statement(
                id,
                OperationKind::Try {
                    body: self.lazy(body),
                    catches: self.lazy_range(catches),
                    finally: self.lazy(finally),
                },
            ),
            BoundKind::CatchBlock {
                exception_type,
                local,
                filter,
                body,
                locals,
            } => self.lower_catch(id, exception_type, local, filter, body, locals),
            BoundKind::Fixed {
                declarations,
                body,
                locals,
            } => self.emit_statement(
                id,
                OperationKind::Fixed {
                    variables: self.lazy(declarations),
                    body: self.lazy(body),
                    locals: self.locals(locals),
                },
            ),
            BoundKind::Using {
                declarations,
                expression,
                body,
                locals,
            } => self.lower_using(id, declarations, expression, body, locals),
            BoundKind::Lock { argument, body } => self.emit_statement(
                id,
                OperationKind::Lock {
                    lock_target: self.lazy(argument),
                    body: self.lazy(body),
                },
            ),
            BoundKind::Throw { expression } => self.lower_throw_statement(id, expression),
            BoundKind::Return { expression } => {
                self.lower_return(id, ReturnKind::Return, expression)
            }
            BoundKind::YieldReturn { expression } => {
                self.lower_return(id, ReturnKind::YieldReturn, expression)
            }
            BoundKind::YieldBreak => {
                self.lower_return(id, ReturnKind::YieldBreak, BoundId::INVALID)
            }
            BoundKind::Break { label } => self.lower_branch(id, BranchKind::Break, label),
            BoundKind::Continue { label } => self.lower_branch(id, BranchKind::Continue, label),
            BoundKind::Goto { label } => self.lower_branch(id, BranchKind::GoTo, label),
            BoundKind::Labeled { label, body } => self.emit_statement(
                id,
                OperationKind::Labeled {
                    label,
                    operation: self.lazy(body),
                },
            ),
            BoundKind::Label { label } => self.emit_statement(
                id,
                OperationKind::Labeled {
                    label,
                    operation: Deferred::ready(None),
                },
            ),
            BoundKind::NoOp => self.emit_statement(id, OperationKind::Empty),

            // Error shapes
            BoundKind::BadStatement { children } | BoundKind::BadExpression { children, .. } => {
                self.lower_invalid(id, self.tree.list(children).to_vec())
            }

            // Compiler-internal forms and declarations with no operation of
            // their own
            BoundKind::NoPiaObjectCreation { .. }
            | BoundKind::AnonymousPropertyDeclaration { .. }
            | BoundKind::Sequence { .. }
            | BoundKind::PointerIndirection { .. }
            | BoundKind::PointerElementAccess { .. }
            | BoundKind::StackAllocArrayCreation { .. }
            | BoundKind::MakeRefOperator { .. }
            | BoundKind::RefValueOperator { .. }
            | BoundKind::ArgListOperator { .. }
            | BoundKind::TypeExpression
            | BoundKind::NamespaceExpression { .. } => self.lower_unmodeled(id),
        }
    }
}
