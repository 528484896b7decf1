//! Uniform child access over every operation variant.

use std::sync::Arc;

use super::{LazyArguments, LazyOperation, LazyOperations, Operation, OperationKind, OperationNode};

struct Collector(Vec<Operation>);

impl Collector {
    fn one(&mut self, child: &LazyOperation) -> &mut Self {
        if let Some(op) = child.get() {
            self.0.push(Arc::clone(op));
        }
        self
    }

    fn many(&mut self, children: &LazyOperations) -> &mut Self {
        self.0.extend(children.get().iter().cloned());
        self
    }

    fn args(&mut self, arguments: &LazyArguments) -> &mut Self {
        self.0
            .extend(arguments.get().iter().map(|arg| Arc::clone(&arg.value)));
        self
    }
}

impl OperationNode {
    /// Child operations in evaluation order.
    ///
    /// Forces every child cell of this node, but nothing deeper.
    pub fn children(&self) -> Vec<Operation> {
        let mut c = Collector(Vec::new());
        match &self.kind {
            OperationKind::Literal
            | OperationKind::LocalReference { .. }
            | OperationKind::ParameterReference { .. }
            | OperationKind::InstanceReference { .. }
            | OperationKind::ConditionalAccessInstance
            | OperationKind::Discard
            | OperationKind::DefaultValue
            | OperationKind::TypeOf { .. }
            | OperationKind::SizeOf { .. }
            | OperationKind::DeclarationPattern { .. }
            | OperationKind::DiscardPattern
            | OperationKind::Branch { .. }
            | OperationKind::Empty => {}

            OperationKind::None { children } | OperationKind::Invalid { children } => {
                c.many(children);
            }
            OperationKind::FieldReference { instance, .. }
            | OperationKind::EventReference { instance, .. }
            | OperationKind::MethodReference { instance, .. }
            | OperationKind::DynamicMemberReference { instance, .. } => {
                c.one(instance);
            }
            OperationKind::PropertyReference {
                instance,
                arguments,
                ..
            }
            | OperationKind::Invocation {
                instance,
                arguments,
                ..
            } => {
                c.one(instance).args(arguments);
            }
            OperationKind::ArrayElementReference { array, indices } => {
                c.one(array).many(indices);
            }
            OperationKind::NameOf { argument } => {
                c.one(argument);
            }
            OperationKind::ObjectCreation {
                arguments,
                initializer,
                ..
            } => {
                c.args(arguments).one(initializer);
            }
            OperationKind::TypeParameterObjectCreation { initializer } => {
                c.one(initializer);
            }
            OperationKind::DynamicObjectCreation {
                arguments,
                initializer,
                ..
            } => {
                c.many(arguments).one(initializer);
            }
            OperationKind::DynamicInvocation {
                operation,
                arguments,
                ..
            }
            | OperationKind::DynamicIndexerAccess {
                operation,
                arguments,
                ..
            } => {
                c.one(operation).many(arguments);
            }
            OperationKind::DelegateCreation { target } => {
                c.one(target);
            }
            OperationKind::AnonymousFunction { body, .. }
            | OperationKind::LocalFunction { body, .. } => {
                c.one(body);
            }
            OperationKind::AnonymousObjectCreation { initializers }
            | OperationKind::ObjectOrCollectionInitializer { initializers } => {
                c.many(initializers);
            }
            OperationKind::MemberInitializer {
                initialized_member,
                initializer,
            } => {
                c.one(initialized_member).one(initializer);
            }
            OperationKind::ArrayCreation {
                dimension_sizes,
                initializer,
            } => {
                c.many(dimension_sizes).one(initializer);
            }
            OperationKind::ArrayInitializer { element_values } => {
                c.many(element_values);
            }
            OperationKind::FieldInitializer { value, .. }
            | OperationKind::PropertyInitializer { value, .. }
            | OperationKind::ParameterInitializer { value, .. } => {
                c.one(value);
            }
            OperationKind::Tuple { elements, .. } => {
                c.many(elements);
            }
            OperationKind::InterpolatedString { parts } => {
                c.many(parts);
            }
            OperationKind::InterpolatedStringText { text } => {
                c.one(text);
            }
            OperationKind::Interpolation {
                expression,
                alignment,
                format_string,
            } => {
                c.one(expression).one(alignment).one(format_string);
            }
            OperationKind::TranslatedQuery { operation }
            | OperationKind::Await { operation }
            | OperationKind::ExpressionStatement { operation } => {
                c.one(operation);
            }
            OperationKind::Conversion { operand, .. } => {
                c.one(operand);
            }
            OperationKind::IsType { value_operand, .. } => {
                c.one(value_operand);
            }
            OperationKind::IsPattern { value, pattern } => {
                c.one(value).one(pattern);
            }
            OperationKind::ConstantPattern { value } => {
                c.one(value);
            }
            OperationKind::SwitchExpression { value, arms } => {
                c.one(value).many(arms);
            }
            OperationKind::SwitchExpressionArm {
                pattern,
                guard,
                value,
                ..
            } => {
                c.one(pattern).one(guard).one(value);
            }
            OperationKind::Unary { operand, .. } => {
                c.one(operand);
            }
            OperationKind::Binary { left, right, .. }
            | OperationKind::TupleBinary { left, right, .. }
            | OperationKind::Range { left, right, .. } => {
                c.one(left).one(right);
            }
            OperationKind::IncrementOrDecrement { target, .. } => {
                c.one(target);
            }
            OperationKind::SimpleAssignment { target, value, .. }
            | OperationKind::CompoundAssignment { target, value, .. }
            | OperationKind::DeconstructionAssignment { target, value }
            | OperationKind::CoalesceAssignment { target, value } => {
                c.one(target).one(value);
            }
            OperationKind::DeclarationExpression { expression } => {
                c.one(expression);
            }
            OperationKind::EventAssignment {
                event_reference,
                handler,
                ..
            } => {
                c.one(event_reference).one(handler);
            }
            OperationKind::Coalesce { value, when_null } => {
                c.one(value).one(when_null);
            }
            OperationKind::Conditional {
                condition,
                when_true,
                when_false,
                ..
            } => {
                c.one(condition).one(when_true).one(when_false);
            }
            OperationKind::ConditionalAccess {
                operation,
                when_not_null,
            } => {
                c.one(operation).one(when_not_null);
            }
            OperationKind::AddressOf { reference } => {
                c.one(reference);
            }
            OperationKind::Throw { exception } => {
                c.one(exception);
            }
            OperationKind::Block { operations, .. } => {
                c.many(operations);
            }
            OperationKind::VariableDeclarationGroup { declarators } => {
                c.many(declarators);
            }
            OperationKind::VariableDeclarator { initializer, .. } => {
                c.one(initializer);
            }
            OperationKind::WhileLoop {
                condition,
                body,
                condition_is_top,
                ..
            } => {
                if *condition_is_top {
                    c.one(condition).one(body);
                } else {
                    c.one(body).one(condition);
                }
            }
            OperationKind::ForLoop {
                before,
                condition,
                at_loop_bottom,
                body,
                ..
            } => {
                c.many(before).one(condition).one(body).many(at_loop_bottom);
            }
            OperationKind::ForEachLoop {
                loop_control_variable,
                collection,
                body,
                ..
            } => {
                c.one(collection).one(loop_control_variable).one(body);
            }
            OperationKind::Switch { value, cases, .. } => {
                c.one(value).many(cases);
            }
            OperationKind::SwitchCase { clauses, body, .. } => {
                c.many(clauses).many(body);
            }
            OperationKind::CaseClause {
                value,
                pattern,
                guard,
                ..
            } => {
                c.one(value).one(pattern).one(guard);
            }
            OperationKind::Try {
                body,
                catches,
                finally,
            } => {
                c.one(body).many(catches).one(finally);
            }
            OperationKind::CatchClause {
                exception_declaration,
                filter,
                handler,
                ..
            } => {
                c.one(exception_declaration).one(filter).one(handler);
            }
            OperationKind::Using {
                resources, body, ..
            } => {
                c.one(resources).one(body);
            }
            OperationKind::Fixed {
                variables, body, ..
            } => {
                c.one(variables).one(body);
            }
            OperationKind::Lock { lock_target, body } => {
                c.one(lock_target).one(body);
            }
            OperationKind::Return { value, .. } => {
                c.one(value);
            }
            OperationKind::Labeled { operation, .. } => {
                c.one(operation);
            }
        }
        c.0
    }

    /// Depth-first, pre-order walk over everything below this node.
    pub fn descendants(&self) -> Descendants {
        let mut stack = self.children();
        stack.reverse();
        Descendants { stack }
    }

    /// Stable variant name, for logs and test output.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            OperationKind::None { .. } => "None",
            OperationKind::Invalid { .. } => "Invalid",
            OperationKind::Literal => "Literal",
            OperationKind::LocalReference { .. } => "LocalReference",
            OperationKind::ParameterReference { .. } => "ParameterReference",
            OperationKind::FieldReference { .. } => "FieldReference",
            OperationKind::PropertyReference { .. } => "PropertyReference",
            OperationKind::EventReference { .. } => "EventReference",
            OperationKind::MethodReference { .. } => "MethodReference",
            OperationKind::InstanceReference { .. } => "InstanceReference",
            OperationKind::ArrayElementReference { .. } => "ArrayElementReference",
            OperationKind::ConditionalAccessInstance => "ConditionalAccessInstance",
            OperationKind::DynamicMemberReference { .. } => "DynamicMemberReference",
            OperationKind::Discard => "Discard",
            OperationKind::DefaultValue => "DefaultValue",
            OperationKind::TypeOf { .. } => "TypeOf",
            OperationKind::SizeOf { .. } => "SizeOf",
            OperationKind::NameOf { .. } => "NameOf",
            OperationKind::Invocation { .. } => "Invocation",
            OperationKind::ObjectCreation { .. } => "ObjectCreation",
            OperationKind::TypeParameterObjectCreation { .. } => "TypeParameterObjectCreation",
            OperationKind::DynamicObjectCreation { .. } => "DynamicObjectCreation",
            OperationKind::DynamicInvocation { .. } => "DynamicInvocation",
            OperationKind::DynamicIndexerAccess { .. } => "DynamicIndexerAccess",
            OperationKind::DelegateCreation { .. } => "DelegateCreation",
            OperationKind::AnonymousFunction { .. } => "AnonymousFunction",
            OperationKind::LocalFunction { .. } => "LocalFunction",
            OperationKind::AnonymousObjectCreation { .. } => "AnonymousObjectCreation",
            OperationKind::ObjectOrCollectionInitializer { .. } => "ObjectOrCollectionInitializer",
            OperationKind::MemberInitializer { .. } => "MemberInitializer",
            OperationKind::ArrayCreation { .. } => "ArrayCreation",
            OperationKind::ArrayInitializer { .. } => "ArrayInitializer",
            OperationKind::FieldInitializer { .. } => "FieldInitializer",
            OperationKind::PropertyInitializer { .. } => "PropertyInitializer",
            OperationKind::ParameterInitializer { .. } => "ParameterInitializer",
            OperationKind::Tuple { .. } => "Tuple",
            OperationKind::InterpolatedString { .. } => "InterpolatedString",
            OperationKind::InterpolatedStringText { .. } => "InterpolatedStringText",
            OperationKind::Interpolation { .. } => "Interpolation",
            OperationKind::TranslatedQuery { .. } => "TranslatedQuery",
            OperationKind::Conversion { .. } => "Conversion",
            OperationKind::IsType { .. } => "IsType",
            OperationKind::IsPattern { .. } => "IsPattern",
            OperationKind::ConstantPattern { .. } => "ConstantPattern",
            OperationKind::DeclarationPattern { .. } => "DeclarationPattern",
            OperationKind::DiscardPattern => "DiscardPattern",
            OperationKind::SwitchExpression { .. } => "SwitchExpression",
            OperationKind::SwitchExpressionArm { .. } => "SwitchExpressionArm",
            OperationKind::Unary { .. } => "Unary",
            OperationKind::Binary { .. } => "Binary",
            OperationKind::TupleBinary { .. } => "TupleBinary",
            OperationKind::IncrementOrDecrement { .. } => "IncrementOrDecrement",
            OperationKind::SimpleAssignment { .. } => "SimpleAssignment",
            OperationKind::CompoundAssignment { .. } => "CompoundAssignment",
            OperationKind::DeconstructionAssignment { .. } => "DeconstructionAssignment",
            OperationKind::DeclarationExpression { .. } => "DeclarationExpression",
            OperationKind::EventAssignment { .. } => "EventAssignment",
            OperationKind::Coalesce { .. } => "Coalesce",
            OperationKind::CoalesceAssignment { .. } => "CoalesceAssignment",
            OperationKind::Conditional { .. } => "Conditional",
            OperationKind::ConditionalAccess { .. } => "ConditionalAccess",
            OperationKind::Await { .. } => "Await",
            OperationKind::AddressOf { .. } => "AddressOf",
            OperationKind::Throw { .. } => "Throw",
            OperationKind::Range { .. } => "Range",
            OperationKind::Block { .. } => "Block",
            OperationKind::ExpressionStatement { .. } => "ExpressionStatement",
            OperationKind::VariableDeclarationGroup { .. } => "VariableDeclarationGroup",
            OperationKind::VariableDeclarator { .. } => "VariableDeclarator",
            OperationKind::WhileLoop { .. } => "WhileLoop",
            OperationKind::ForLoop { .. } => "ForLoop",
            OperationKind::ForEachLoop { .. } => "ForEachLoop",
            OperationKind::Switch { .. } => "Switch",
            OperationKind::SwitchCase { .. } => "SwitchCase",
            OperationKind::CaseClause { .. } => "CaseClause",
            OperationKind::Try { .. } => "Try",
            OperationKind::CatchClause { .. } => "CatchClause",
            OperationKind::Using { .. } => "Using",
            OperationKind::Fixed { .. } => "Fixed",
            OperationKind::Lock { .. } => "Lock",
            OperationKind::Return { .. } => "Return",
            OperationKind::Branch { .. } => "Branch",
            OperationKind::Labeled { .. } => "Labeled",
            OperationKind::Empty => "Empty",
        }
    }
}

/// Iterator returned by [`OperationNode::descendants`].
pub struct Descendants {
    stack: Vec<Operation>,
}

impl Iterator for Descendants {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        let next = self.stack.pop()?;
        let mut children = next.children();
        children.reverse();
        self.stack.extend(children);
        Some(next)
    }
}
