//! Semantic operation tree: the reduced, language-independent vocabulary
//! exposed to analyzers and IDE features.
//!
//! # Shape
//!
//! - [`Operation`] is an `Arc<OperationNode>`; identity is pointer identity.
//! - Every child is a [`Deferred`] cell, so a node can be inspected (kind,
//!   type, constant, implicitness) without building anything beneath it.
//! - Nodes are immutable once returned. Forcing a child twice yields the
//!   same `Arc`.
//!
//! Nodes are produced by `sema_lower`; this module only defines the shapes.

mod children;
mod deferred;
mod kinds;

use std::sync::Arc;

pub use children::Descendants;
pub use deferred::Deferred;
pub use kinds::{
    ArgumentKind, BinaryOperatorKind, BranchKind, CaseClauseKind, ConversionInfo,
    DynamicArgumentInfo, InstanceReferenceKind, ReturnKind, UnaryOperatorKind,
};

use crate::{Anchor, ConstantValue, Name, RefKind, SemanticModel, SymbolId, TypeId};

/// Shared handle to an operation node.
pub type Operation = Arc<OperationNode>;
/// Optional child, built on first access.
pub type LazyOperation = Deferred<Option<Operation>>;
/// Ordered child list, built on first access.
pub type LazyOperations = Deferred<Vec<Operation>>;
/// Call arguments matched to parameters, built on first access.
pub type LazyArguments = Deferred<Vec<ArgumentBinding>>;

/// One formal parameter of a call target and the value it receives.
#[derive(Debug)]
pub struct ArgumentBinding {
    pub parameter: SymbolId,
    pub value: Operation,
    pub kind: ArgumentKind,
    /// Supplied as `name: value`.
    pub is_named: bool,
    pub ref_kind: RefKind,
}

/// An operation-tree node.
#[derive(Debug)]
pub struct OperationNode {
    pub kind: OperationKind,
    pub anchor: Anchor,
    /// Resolved type; `None` for statements and unresolvable expressions.
    pub ty: Option<TypeId>,
    pub constant: Option<ConstantValue>,
    /// No direct surface-syntax counterpart.
    pub is_implicit: bool,
    pub model: SemanticModel,
}

impl OperationNode {
    pub fn new(kind: OperationKind, anchor: Anchor, model: SemanticModel) -> Self {
        OperationNode {
            kind,
            anchor,
            ty: None,
            constant: None,
            is_implicit: false,
            model,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: Option<TypeId>) -> Self {
        self.ty = ty;
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: Option<ConstantValue>) -> Self {
        self.constant = constant;
        self
    }

    #[must_use]
    pub fn implicit(mut self, is_implicit: bool) -> Self {
        self.is_implicit = is_implicit;
        self
    }

    pub fn into_operation(self) -> Operation {
        Arc::new(self)
    }
}

/// Operation variant with its children.
#[derive(Debug)]
pub enum OperationKind {
    /// A construct this vocabulary does not model. Keeps the tree
    /// traversable through its raw children.
    None {
        children: LazyOperations,
    },
    /// A construct whose binding failed, with whatever could be salvaged.
    Invalid {
        children: LazyOperations,
    },

    // Leaves and references
    Literal,
    LocalReference {
        local: SymbolId,
        is_declaration: bool,
    },
    ParameterReference {
        parameter: SymbolId,
    },
    FieldReference {
        field: SymbolId,
        instance: LazyOperation,
    },
    /// Property or indexer access; `arguments` is empty for properties.
    PropertyReference {
        property: SymbolId,
        instance: LazyOperation,
        arguments: LazyArguments,
    },
    EventReference {
        event: SymbolId,
        instance: LazyOperation,
    },
    MethodReference {
        method: SymbolId,
        instance: LazyOperation,
        is_virtual: bool,
    },
    InstanceReference {
        kind: InstanceReferenceKind,
    },
    ArrayElementReference {
        array: LazyOperation,
        indices: LazyOperations,
    },
    ConditionalAccessInstance,
    DynamicMemberReference {
        instance: LazyOperation,
        member: Name,
    },
    Discard,
    DefaultValue,
    TypeOf {
        type_operand: TypeId,
    },
    SizeOf {
        type_operand: TypeId,
    },
    NameOf {
        argument: LazyOperation,
    },

    // Calls and creation
    Invocation {
        method: SymbolId,
        instance: LazyOperation,
        is_virtual: bool,
        arguments: LazyArguments,
    },
    ObjectCreation {
        constructor: SymbolId,
        arguments: LazyArguments,
        initializer: LazyOperation,
    },
    TypeParameterObjectCreation {
        initializer: LazyOperation,
    },
    DynamicObjectCreation {
        arguments: LazyOperations,
        argument_info: DynamicArgumentInfo,
        initializer: LazyOperation,
    },
    DynamicInvocation {
        operation: LazyOperation,
        arguments: LazyOperations,
        argument_info: DynamicArgumentInfo,
    },
    DynamicIndexerAccess {
        operation: LazyOperation,
        arguments: LazyOperations,
        argument_info: DynamicArgumentInfo,
    },
    DelegateCreation {
        target: LazyOperation,
    },
    AnonymousFunction {
        symbol: SymbolId,
        body: LazyOperation,
    },
    LocalFunction {
        symbol: SymbolId,
        body: LazyOperation,
    },
    AnonymousObjectCreation {
        initializers: LazyOperations,
    },
    ObjectOrCollectionInitializer {
        initializers: LazyOperations,
    },
    /// `Member = { ... }` inside an initializer.
    MemberInitializer {
        initialized_member: LazyOperation,
        initializer: LazyOperation,
    },
    ArrayCreation {
        dimension_sizes: LazyOperations,
        initializer: LazyOperation,
    },
    ArrayInitializer {
        element_values: LazyOperations,
    },
    FieldInitializer {
        field: SymbolId,
        value: LazyOperation,
    },
    PropertyInitializer {
        property: SymbolId,
        value: LazyOperation,
    },
    ParameterInitializer {
        parameter: SymbolId,
        value: LazyOperation,
    },
    Tuple {
        elements: LazyOperations,
        natural_type: Option<TypeId>,
    },
    InterpolatedString {
        parts: LazyOperations,
    },
    InterpolatedStringText {
        text: LazyOperation,
    },
    Interpolation {
        expression: LazyOperation,
        alignment: LazyOperation,
        format_string: LazyOperation,
    },
    TranslatedQuery {
        operation: LazyOperation,
    },

    // Conversions, type tests, patterns
    Conversion {
        operand: LazyOperation,
        conversion: ConversionInfo,
        is_try_cast: bool,
        is_checked: bool,
    },
    IsType {
        value_operand: LazyOperation,
        type_operand: TypeId,
        is_negated: bool,
    },
    IsPattern {
        value: LazyOperation,
        pattern: LazyOperation,
    },
    ConstantPattern {
        value: LazyOperation,
    },
    DeclarationPattern {
        declared_symbol: Option<SymbolId>,
        matched_type: TypeId,
        match_all: bool,
    },
    DiscardPattern,
    SwitchExpression {
        value: LazyOperation,
        arms: LazyOperations,
    },
    SwitchExpressionArm {
        pattern: LazyOperation,
        guard: LazyOperation,
        value: LazyOperation,
        locals: Vec<SymbolId>,
    },

    // Operators and assignments
    Unary {
        operator: UnaryOperatorKind,
        operand: LazyOperation,
        is_lifted: bool,
        is_checked: bool,
        operator_method: Option<SymbolId>,
    },
    Binary {
        operator: BinaryOperatorKind,
        left: LazyOperation,
        right: LazyOperation,
        is_lifted: bool,
        is_checked: bool,
        operator_method: Option<SymbolId>,
    },
    TupleBinary {
        operator: BinaryOperatorKind,
        left: LazyOperation,
        right: LazyOperation,
    },
    IncrementOrDecrement {
        is_decrement: bool,
        is_postfix: bool,
        target: LazyOperation,
        is_lifted: bool,
        is_checked: bool,
        operator_method: Option<SymbolId>,
    },
    SimpleAssignment {
        target: LazyOperation,
        value: LazyOperation,
        is_ref: bool,
    },
    CompoundAssignment {
        operator: BinaryOperatorKind,
        target: LazyOperation,
        value: LazyOperation,
        is_lifted: bool,
        is_checked: bool,
        operator_method: Option<SymbolId>,
    },
    DeconstructionAssignment {
        target: LazyOperation,
        value: LazyOperation,
    },
    DeclarationExpression {
        expression: LazyOperation,
    },
    EventAssignment {
        event_reference: LazyOperation,
        handler: LazyOperation,
        adds: bool,
    },
    Coalesce {
        value: LazyOperation,
        when_null: LazyOperation,
    },
    CoalesceAssignment {
        target: LazyOperation,
        value: LazyOperation,
    },
    /// Conditional expression or `if` statement.
    Conditional {
        condition: LazyOperation,
        when_true: LazyOperation,
        when_false: LazyOperation,
        is_ref: bool,
    },
    ConditionalAccess {
        operation: LazyOperation,
        when_not_null: LazyOperation,
    },
    Await {
        operation: LazyOperation,
    },
    AddressOf {
        reference: LazyOperation,
    },
    Throw {
        exception: LazyOperation,
    },
    Range {
        left: LazyOperation,
        right: LazyOperation,
        method: Option<SymbolId>,
    },

    // Statements
    Block {
        operations: LazyOperations,
        locals: Vec<SymbolId>,
    },
    ExpressionStatement {
        operation: LazyOperation,
    },
    VariableDeclarationGroup {
        declarators: LazyOperations,
    },
    VariableDeclarator {
        symbol: SymbolId,
        initializer: LazyOperation,
    },
    WhileLoop {
        condition: LazyOperation,
        body: LazyOperation,
        condition_is_top: bool,
        condition_is_until: bool,
        locals: Vec<SymbolId>,
    },
    ForLoop {
        before: LazyOperations,
        condition: LazyOperation,
        at_loop_bottom: LazyOperations,
        body: LazyOperation,
        locals: Vec<SymbolId>,
    },
    ForEachLoop {
        loop_control_variable: LazyOperation,
        collection: LazyOperation,
        body: LazyOperation,
        is_asynchronous: bool,
        locals: Vec<SymbolId>,
    },
    Switch {
        value: LazyOperation,
        cases: LazyOperations,
        locals: Vec<SymbolId>,
    },
    SwitchCase {
        clauses: LazyOperations,
        body: LazyOperations,
        locals: Vec<SymbolId>,
    },
    CaseClause {
        kind: CaseClauseKind,
        value: LazyOperation,
        pattern: LazyOperation,
        guard: LazyOperation,
    },
    Try {
        body: LazyOperation,
        catches: LazyOperations,
        finally: LazyOperation,
    },
    CatchClause {
        exception_declaration: LazyOperation,
        exception_type: Option<TypeId>,
        filter: LazyOperation,
        handler: LazyOperation,
        locals: Vec<SymbolId>,
    },
    Using {
        resources: LazyOperation,
        body: LazyOperation,
        locals: Vec<SymbolId>,
    },
    Fixed {
        variables: LazyOperation,
        body: LazyOperation,
        locals: Vec<SymbolId>,
    },
    Lock {
        lock_target: LazyOperation,
        body: LazyOperation,
    },
    Return {
        kind: ReturnKind,
        value: LazyOperation,
    },
    Branch {
        kind: BranchKind,
        target: SymbolId,
    },
    Labeled {
        label: SymbolId,
        operation: LazyOperation,
    },
    Empty,
}
