//! Raw child enumeration for every binder tag.
//!
//! Order is source order. Absent optional children are skipped. Argument
//! lists contribute their argument expressions.

use super::{ArgListId, BoundId, BoundKind, BoundRange, BoundTree};

struct ChildCollector<'t> {
    tree: &'t BoundTree,
    out: Vec<BoundId>,
}

impl ChildCollector<'_> {
    fn one(&mut self, id: BoundId) -> &mut Self {
        if id.is_valid() {
            self.out.push(id);
        }
        self
    }

    fn range(&mut self, range: BoundRange) -> &mut Self {
        self.out.extend_from_slice(self.tree.list(range));
        self
    }

    fn args(&mut self, args: ArgListId) -> &mut Self {
        let range = self.tree.arguments(args).arguments;
        self.range(range)
    }
}

impl BoundTree {
    /// Direct children of a node, in source order.
    pub fn children(&self, id: BoundId) -> Vec<BoundId> {
        let mut c = ChildCollector {
            tree: self,
            out: Vec::new(),
        };
        match self.kind(id) {
            BoundKind::Literal
            | BoundKind::Local { .. }
            | BoundKind::Parameter { .. }
            | BoundKind::ThisReference
            | BoundKind::BaseReference
            | BoundKind::ImplicitReceiver
            | BoundKind::ElementReceiverPlaceholder
            | BoundKind::ConditionalReceiver
            | BoundKind::Discard
            | BoundKind::DefaultExpression
            | BoundKind::TypeOf { .. }
            | BoundKind::SizeOf { .. }
            | BoundKind::AnonymousPropertyDeclaration { .. }
            | BoundKind::DeclarationPattern { .. }
            | BoundKind::DiscardPattern
            | BoundKind::YieldBreak
            | BoundKind::Break { .. }
            | BoundKind::Continue { .. }
            | BoundKind::Goto { .. }
            | BoundKind::Label { .. }
            | BoundKind::NoOp
            | BoundKind::TypeExpression
            | BoundKind::NamespaceExpression { .. } => {}

            BoundKind::RangeVariable { value, .. } => {
                c.one(value);
            }
            BoundKind::NameOf { argument } => {
                c.one(argument);
            }
            BoundKind::FieldAccess { receiver, .. }
            | BoundKind::PropertyAccess { receiver, .. }
            | BoundKind::EventAccess { receiver, .. }
            | BoundKind::MethodGroup { receiver, .. }
            | BoundKind::DynamicMemberAccess { receiver, .. }
            | BoundKind::DynamicObjectInitializerMember { receiver, .. } => {
                c.one(receiver);
            }
            BoundKind::IndexerAccess {
                receiver,
                arguments,
                ..
            }
            | BoundKind::Call {
                receiver,
                arguments,
                ..
            }
            | BoundKind::DynamicIndexerAccess {
                receiver,
                arguments,
            }
            | BoundKind::CollectionElementInitializer {
                receiver,
                arguments,
                ..
            }
            | BoundKind::DynamicCollectionElementInitializer {
                receiver,
                arguments,
            } => {
                c.one(receiver).args(arguments);
            }
            BoundKind::DynamicInvocation {
                expression,
                arguments,
            } => {
                c.one(expression).args(arguments);
            }
            BoundKind::ObjectInitializerMember {
                receiver,
                arguments,
                ..
            } => {
                c.one(receiver);
                if let Some(arguments) = arguments {
                    c.args(arguments);
                }
            }
            BoundKind::ArrayAccess { array, indices } => {
                c.one(array).range(indices);
            }
            BoundKind::ConditionalAccess { receiver, access } => {
                c.one(receiver).one(access);
            }
            BoundKind::ObjectCreation {
                arguments,
                initializer,
                ..
            }
            | BoundKind::DynamicObjectCreation {
                arguments,
                initializer,
            } => {
                c.args(arguments).one(initializer);
            }
            BoundKind::TypeParameterObjectCreation { initializer }
            | BoundKind::NoPiaObjectCreation { initializer } => {
                c.one(initializer);
            }
            BoundKind::DelegateCreation { argument, .. } => {
                c.one(argument);
            }
            BoundKind::AnonymousObjectCreation {
                arguments,
                declarations,
            } => {
                c.range(arguments).range(declarations);
            }
            BoundKind::ObjectInitializer { initializers }
            | BoundKind::CollectionInitializer { initializers } => {
                c.range(initializers);
            }
            BoundKind::ArrayCreation {
                bounds,
                initializer,
            } => {
                c.range(bounds).one(initializer);
            }
            BoundKind::ArrayInitialization { elements } => {
                c.range(elements);
            }
            BoundKind::FieldEqualsValue { value, .. }
            | BoundKind::PropertyEqualsValue { value, .. }
            | BoundKind::ParameterEqualsValue { value, .. } => {
                c.one(value);
            }
            BoundKind::Lambda { body, .. } | BoundKind::LocalFunction { body, .. } => {
                c.one(body);
            }
            BoundKind::UnboundLambda { recovered } => {
                c.one(recovered);
            }
            BoundKind::Conversion { operand, .. }
            | BoundKind::AsOperator { operand, .. }
            | BoundKind::IsOperator { operand, .. }
            | BoundKind::Unary { operand, .. }
            | BoundKind::Increment { operand, .. }
            | BoundKind::Await { operand }
            | BoundKind::AddressOf { operand }
            | BoundKind::ThrowExpression { operand }
            | BoundKind::FromEndIndex { operand, .. }
            | BoundKind::PointerIndirection { operand }
            | BoundKind::MakeRefOperator { operand }
            | BoundKind::RefValueOperator { operand } => {
                c.one(operand);
            }
            BoundKind::Binary { left, right, .. }
            | BoundKind::UserDefinedConditionalLogical { left, right, .. }
            | BoundKind::TupleBinary { left, right, .. }
            | BoundKind::CompoundAssignment { left, right, .. }
            | BoundKind::Assignment { left, right, .. }
            | BoundKind::DeconstructionAssignment { left, right }
            | BoundKind::NullCoalescing { left, right }
            | BoundKind::NullCoalescingAssignment { left, right }
            | BoundKind::Range { left, right, .. } => {
                c.one(left).one(right);
            }
            BoundKind::EventAssignment {
                receiver, handler, ..
            } => {
                c.one(receiver).one(handler);
            }
            BoundKind::Conditional {
                condition,
                consequence,
                alternative,
                ..
            }
            | BoundKind::If {
                condition,
                consequence,
                alternative,
            } => {
                c.one(condition).one(consequence).one(alternative);
            }
            BoundKind::TupleLiteral { elements, .. }
            | BoundKind::ConvertedTupleLiteral { elements, .. } => {
                c.range(elements);
            }
            BoundKind::InterpolatedString { parts } => {
                c.range(parts);
            }
            BoundKind::StringInsert {
                value,
                alignment,
                format,
            } => {
                c.one(value).one(alignment).one(format);
            }
            BoundKind::QueryClause { value, .. } => {
                c.one(value);
            }
            BoundKind::IsPattern { operand, pattern } => {
                c.one(operand).one(pattern);
            }
            BoundKind::ConstantPattern { value } => {
                c.one(value);
            }
            BoundKind::SwitchExpression { governing, arms } => {
                c.one(governing).range(arms);
            }
            BoundKind::SwitchExpressionArm {
                pattern,
                guard,
                value,
                ..
            } => {
                c.one(pattern).one(guard).one(value);
            }
            BoundKind::Block { statements, .. } | BoundKind::StatementList { statements } => {
                c.range(statements);
            }
            BoundKind::ExpressionStatement { expression }
            | BoundKind::Throw { expression }
            | BoundKind::Return { expression }
            | BoundKind::YieldReturn { expression } => {
                c.one(expression);
            }
            BoundKind::LocalDeclaration { initializer, .. } => {
                c.one(initializer);
            }
            BoundKind::MultipleLocalDeclarations { declarations } => {
                c.range(declarations);
            }
            BoundKind::While {
                condition, body, ..
            } => {
                c.one(condition).one(body);
            }
            BoundKind::Do {
                condition, body, ..
            } => {
                c.one(body).one(condition);
            }
            BoundKind::For {
                initializer,
                condition,
                increment,
                body,
                ..
            } => {
                c.one(initializer).one(condition).one(increment).one(body);
            }
            BoundKind::ForEach {
                deconstruction,
                collection,
                body,
                ..
            } => {
                c.one(deconstruction).one(collection).one(body);
            }
            BoundKind::Switch {
                expression,
                sections,
                ..
            } => {
                c.one(expression).range(sections);
            }
            BoundKind::SwitchSection {
                labels, statements, ..
            } => {
                c.range(labels).range(statements);
            }
            BoundKind::SwitchLabel { value } => {
                c.one(value);
            }
            BoundKind::PatternSwitchLabel { pattern, guard } => {
                c.one(pattern).one(guard);
            }
            BoundKind::Try {
                body,
                catches,
                finally,
            } => {
                c.one(body).range(catches).one(finally);
            }
            BoundKind::CatchBlock { filter, body, .. } => {
                c.one(filter).one(body);
            }
            BoundKind::Fixed {
                declarations, body, ..
            } => {
                c.one(declarations).one(body);
            }
            BoundKind::Using {
                declarations,
                expression,
                body,
                ..
            } => {
                c.one(declarations).one(expression).one(body);
            }
            BoundKind::Lock { argument, body } => {
                c.one(argument).one(body);
            }
            BoundKind::Labeled { body, .. } => {
                c.one(body);
            }
            BoundKind::BadStatement { children } | BoundKind::BadExpression { children, .. } => {
                c.range(children);
            }
            BoundKind::Sequence {
                side_effects,
                value,
            } => {
                c.range(side_effects).one(value);
            }
            BoundKind::PointerElementAccess { expression, index } => {
                c.one(expression).one(index);
            }
            BoundKind::StackAllocArrayCreation { count, initializer } => {
                c.one(count).one(initializer);
            }
            BoundKind::ArgListOperator { arguments } => {
                c.range(arguments);
            }
        }
        c.out
    }
}

#[cfg(test)]
mod tests;
