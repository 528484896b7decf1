//! Binder tree: the resolver's fully bound, fine-grained program tree.
//!
//! One tag per language construct, including compiler-internal forms the
//! operation tree never exposes. Child references are [`BoundId`]s into a
//! flat [`BoundTree`] arena; absent children use [`BoundId::INVALID`].
//!
//! # Sharing
//!
//! The resolver reuses a single receiver node for every member access inside
//! one object or collection initializer ([`BoundKind::ImplicitReceiver`]),
//! and a single element receiver for nested element initializers
//! ([`BoundKind::ElementReceiverPlaceholder`]). Every other node has exactly
//! one parent.

mod children;
mod ids;
mod operators;
mod tree;

pub use ids::{ArgListId, BoundId, BoundRange, SymbolRange};
pub use operators::{
    BinaryOp, BoundBinaryOp, ConversionKind, DeclarationSite, IncrementOp, LookupResult, UnaryOp,
};
pub use tree::BoundTree;

use crate::{Anchor, ConstantValue, Name, RefKind, SymbolId, TypeId};

/// A binder node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundNode {
    pub kind: BoundKind,
    pub anchor: Anchor,
    /// Resolved type; `None` for statements and some error shapes.
    pub ty: Option<TypeId>,
    pub constant: Option<ConstantValue>,
    /// Synthesized by the compiler rather than written by the user.
    pub compiler_generated: bool,
}

impl BoundNode {
    pub fn new(kind: BoundKind, anchor: Anchor) -> Self {
        BoundNode {
            kind,
            anchor,
            ty: None,
            constant: None,
            compiler_generated: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeId) -> Self {
        self.ty = Some(ty);
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: ConstantValue) -> Self {
        self.constant = Some(constant);
        self
    }

    #[must_use]
    pub fn generated(mut self) -> Self {
        self.compiler_generated = true;
        self
    }
}

/// Call-site arguments of a call, constructor, indexer or dynamic operation,
/// as committed by overload resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentList {
    /// Argument expressions in source order.
    pub arguments: BoundRange,
    /// Per-argument name (`b: 1`); empty when no argument was named.
    pub names: Vec<Option<Name>>,
    /// Argument position to parameter position; empty means identity.
    pub arguments_to_parameters: Vec<u32>,
    /// Per-argument `ref`/`out`/`in`; empty means all by value.
    pub ref_kinds: Vec<RefKind>,
    /// The call used the expanded form of a `params` parameter.
    pub expanded: bool,
    /// Extension method called with instance syntax; the receiver is
    /// already the first argument.
    pub invoked_as_extension: bool,
}

impl ArgumentList {
    pub fn positional(arguments: BoundRange) -> Self {
        ArgumentList {
            arguments,
            names: Vec::new(),
            arguments_to_parameters: Vec::new(),
            ref_kinds: Vec::new(),
            expanded: false,
            invoked_as_extension: false,
        }
    }

    #[must_use]
    pub fn with_names(mut self, names: Vec<Option<Name>>) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn with_parameter_map(mut self, map: Vec<u32>) -> Self {
        self.arguments_to_parameters = map;
        self
    }

    #[must_use]
    pub fn with_ref_kinds(mut self, ref_kinds: Vec<RefKind>) -> Self {
        self.ref_kinds = ref_kinds;
        self
    }

    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    #[must_use]
    pub fn as_extension(mut self) -> Self {
        self.invoked_as_extension = true;
        self
    }
}

/// Construct tag with construct-specific fields.
///
/// `BoundId` fields documented as optional hold [`BoundId::INVALID`] when
/// absent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundKind {
    // References and leaves
    Literal,
    Local {
        local: SymbolId,
        declaration: DeclarationSite,
    },
    Parameter {
        parameter: SymbolId,
    },
    ThisReference,
    BaseReference,
    /// Receiver of member accesses inside an initializer. Shared.
    ImplicitReceiver,
    /// Receiver of nested element initializers. Shared.
    ElementReceiverPlaceholder,
    /// The already-evaluated receiver of `a?.b`, as seen from `b`.
    ConditionalReceiver,
    RangeVariable {
        variable: SymbolId,
        value: BoundId,
    },
    Discard,
    DefaultExpression,
    TypeOf {
        source_type: TypeId,
    },
    SizeOf {
        source_type: TypeId,
    },
    NameOf {
        argument: BoundId,
    },

    // Member access; `receiver` is optional (static members)
    FieldAccess {
        receiver: BoundId,
        field: SymbolId,
    },
    PropertyAccess {
        receiver: BoundId,
        property: SymbolId,
    },
    EventAccess {
        receiver: BoundId,
        event: SymbolId,
    },
    IndexerAccess {
        receiver: BoundId,
        indexer: Option<SymbolId>,
        arguments: ArgListId,
        result: LookupResult,
    },
    ArrayAccess {
        array: BoundId,
        indices: BoundRange,
    },
    MethodGroup {
        receiver: BoundId,
        method: Option<SymbolId>,
    },
    ConditionalAccess {
        receiver: BoundId,
        access: BoundId,
    },

    // Calls and creation
    Call {
        receiver: BoundId,
        method: Option<SymbolId>,
        arguments: ArgListId,
        result: LookupResult,
    },
    ObjectCreation {
        constructor: Option<SymbolId>,
        arguments: ArgListId,
        initializer: BoundId,
        result: LookupResult,
    },
    TypeParameterObjectCreation {
        initializer: BoundId,
    },
    NoPiaObjectCreation {
        initializer: BoundId,
    },
    /// `new D(target)` written explicitly.
    DelegateCreation {
        argument: BoundId,
        method: Option<SymbolId>,
    },
    AnonymousObjectCreation {
        arguments: BoundRange,
        /// One `AnonymousPropertyDeclaration` per argument.
        declarations: BoundRange,
    },
    AnonymousPropertyDeclaration {
        property: SymbolId,
    },

    // Late-bound operations
    DynamicInvocation {
        expression: BoundId,
        arguments: ArgListId,
    },
    DynamicIndexerAccess {
        receiver: BoundId,
        arguments: ArgListId,
    },
    DynamicObjectCreation {
        arguments: ArgListId,
        initializer: BoundId,
    },
    DynamicMemberAccess {
        receiver: BoundId,
        member: Name,
    },

    // Initializers
    ObjectInitializer {
        initializers: BoundRange,
    },
    CollectionInitializer {
        initializers: BoundRange,
    },
    /// Left-hand side of `Member = value` inside an object initializer.
    ObjectInitializerMember {
        receiver: BoundId,
        member: Option<SymbolId>,
        /// Indexer arguments for `[i] = value` members.
        arguments: Option<ArgListId>,
        result: LookupResult,
    },
    DynamicObjectInitializerMember {
        receiver: BoundId,
        member: Name,
    },
    CollectionElementInitializer {
        receiver: BoundId,
        add_method: Option<SymbolId>,
        arguments: ArgListId,
    },
    DynamicCollectionElementInitializer {
        receiver: BoundId,
        arguments: ArgListId,
    },
    ArrayCreation {
        bounds: BoundRange,
        initializer: BoundId,
    },
    ArrayInitialization {
        elements: BoundRange,
    },
    FieldEqualsValue {
        field: SymbolId,
        value: BoundId,
    },
    PropertyEqualsValue {
        property: SymbolId,
        value: BoundId,
    },
    ParameterEqualsValue {
        parameter: SymbolId,
        value: BoundId,
    },

    // Functions
    Lambda {
        symbol: SymbolId,
        body: BoundId,
    },
    /// Lambda whose target type was never inferred. `recovered` is the
    /// `Lambda` the resolver bound for error recovery, or absent.
    UnboundLambda {
        recovered: BoundId,
    },
    LocalFunction {
        symbol: SymbolId,
        body: BoundId,
    },

    // Conversions and type tests
    Conversion {
        operand: BoundId,
        conversion: ConversionKind,
        /// User-defined operator or the method of a method-group conversion.
        method: Option<SymbolId>,
        explicit_cast: bool,
        checked: bool,
    },
    AsOperator {
        operand: BoundId,
        target: TypeId,
    },
    IsOperator {
        operand: BoundId,
        target: TypeId,
    },

    // Operators
    Unary {
        op: UnaryOp,
        operand: BoundId,
        method: Option<SymbolId>,
        lifted: bool,
        checked: bool,
    },
    Increment {
        op: IncrementOp,
        operand: BoundId,
        method: Option<SymbolId>,
        lifted: bool,
        checked: bool,
    },
    Binary {
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
        method: Option<SymbolId>,
    },
    UserDefinedConditionalLogical {
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
        method: SymbolId,
    },
    TupleBinary {
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
    },
    CompoundAssignment {
        op: BoundBinaryOp,
        left: BoundId,
        right: BoundId,
        method: Option<SymbolId>,
    },
    Assignment {
        left: BoundId,
        right: BoundId,
        is_ref: bool,
    },
    DeconstructionAssignment {
        left: BoundId,
        right: BoundId,
    },
    EventAssignment {
        receiver: BoundId,
        event: SymbolId,
        handler: BoundId,
        is_addition: bool,
    },
    NullCoalescing {
        left: BoundId,
        right: BoundId,
    },
    NullCoalescingAssignment {
        left: BoundId,
        right: BoundId,
    },
    Conditional {
        condition: BoundId,
        consequence: BoundId,
        alternative: BoundId,
        is_ref: bool,
    },
    Await {
        operand: BoundId,
    },
    AddressOf {
        operand: BoundId,
    },
    ThrowExpression {
        operand: BoundId,
    },
    /// `^operand`
    FromEndIndex {
        operand: BoundId,
        method: Option<SymbolId>,
    },
    /// `left..right`; both ends optional.
    Range {
        left: BoundId,
        right: BoundId,
        method: Option<SymbolId>,
    },

    // Tuples, strings, queries
    TupleLiteral {
        elements: BoundRange,
        /// Written as `var (x, y)`.
        is_declaration: bool,
    },
    /// Tuple literal after target-typing.
    ConvertedTupleLiteral {
        elements: BoundRange,
        natural_type: Option<TypeId>,
        is_declaration: bool,
    },
    /// Parts are string `Literal`s and `StringInsert`s.
    InterpolatedString {
        parts: BoundRange,
    },
    StringInsert {
        value: BoundId,
        alignment: BoundId,
        format: BoundId,
    },
    QueryClause {
        value: BoundId,
        /// Anchored at the whole query rather than one clause.
        is_whole_query: bool,
    },

    // Patterns
    IsPattern {
        operand: BoundId,
        pattern: BoundId,
    },
    ConstantPattern {
        value: BoundId,
    },
    DeclarationPattern {
        /// `None` for a discard designation.
        variable: Option<SymbolId>,
        declared_type: TypeId,
        is_var: bool,
    },
    DiscardPattern,
    SwitchExpression {
        governing: BoundId,
        arms: BoundRange,
    },
    SwitchExpressionArm {
        pattern: BoundId,
        guard: BoundId,
        value: BoundId,
        locals: SymbolRange,
    },

    // Statements
    Block {
        statements: BoundRange,
        locals: SymbolRange,
    },
    /// Statements grouped by the compiler with no braces in source.
    StatementList {
        statements: BoundRange,
    },
    ExpressionStatement {
        expression: BoundId,
    },
    LocalDeclaration {
        local: SymbolId,
        initializer: BoundId,
    },
    MultipleLocalDeclarations {
        declarations: BoundRange,
    },
    If {
        condition: BoundId,
        consequence: BoundId,
        alternative: BoundId,
    },
    While {
        condition: BoundId,
        body: BoundId,
        locals: SymbolRange,
    },
    Do {
        condition: BoundId,
        body: BoundId,
        locals: SymbolRange,
    },
    For {
        initializer: BoundId,
        condition: BoundId,
        increment: BoundId,
        body: BoundId,
        locals: SymbolRange,
    },
    ForEach {
        iteration_variable: Option<SymbolId>,
        /// `foreach (var (a, b) in ...)`: a `DeconstructionAssignment`.
        deconstruction: BoundId,
        collection: BoundId,
        body: BoundId,
        is_async: bool,
        locals: SymbolRange,
    },
    Switch {
        expression: BoundId,
        sections: BoundRange,
        locals: SymbolRange,
    },
    SwitchSection {
        labels: BoundRange,
        statements: BoundRange,
        locals: SymbolRange,
    },
    /// `case value:`; absent value means `default:`.
    SwitchLabel {
        value: BoundId,
    },
    PatternSwitchLabel {
        pattern: BoundId,
        guard: BoundId,
    },
    Try {
        body: BoundId,
        catches: BoundRange,
        finally: BoundId,
    },
    CatchBlock {
        exception_type: Option<TypeId>,
        local: Option<SymbolId>,
        filter: BoundId,
        body: BoundId,
        locals: SymbolRange,
    },
    Fixed {
        declarations: BoundId,
        body: BoundId,
        locals: SymbolRange,
    },
    /// `using (declarations) body` or `using (expression) body`.
    Using {
        declarations: BoundId,
        expression: BoundId,
        body: BoundId,
        locals: SymbolRange,
    },
    Lock {
        argument: BoundId,
        body: BoundId,
    },
    Throw {
        expression: BoundId,
    },
    Return {
        expression: BoundId,
    },
    YieldReturn {
        expression: BoundId,
    },
    YieldBreak,
    Break {
        label: SymbolId,
    },
    Continue {
        label: SymbolId,
    },
    Goto {
        label: SymbolId,
    },
    Labeled {
        label: SymbolId,
        body: BoundId,
    },
    Label {
        label: SymbolId,
    },
    NoOp,
    BadStatement {
        children: BoundRange,
    },
    BadExpression {
        children: BoundRange,
        result: LookupResult,
    },

    // Compiler-internal forms
    Sequence {
        side_effects: BoundRange,
        value: BoundId,
    },
    PointerIndirection {
        operand: BoundId,
    },
    PointerElementAccess {
        expression: BoundId,
        index: BoundId,
    },
    StackAllocArrayCreation {
        count: BoundId,
        initializer: BoundId,
    },
    MakeRefOperator {
        operand: BoundId,
    },
    RefValueOperator {
        operand: BoundId,
    },
    ArgListOperator {
        arguments: BoundRange,
    },
    TypeExpression,
    NamespaceExpression {
        name: Name,
    },
}

impl BoundKind {
    /// Tags whose nodes the resolver reuses across parents.
    pub const fn is_shared_receiver(&self) -> bool {
        matches!(
            self,
            BoundKind::ImplicitReceiver | BoundKind::ElementReceiverPlaceholder
        )
    }

    pub const fn is_initializer(&self) -> bool {
        matches!(
            self,
            BoundKind::ObjectInitializer { .. } | BoundKind::CollectionInitializer { .. }
        )
    }

    pub const fn is_lambda_like(&self) -> bool {
        matches!(
            self,
            BoundKind::Lambda { .. }
                | BoundKind::UnboundLambda { .. }
                | BoundKind::MethodGroup { .. }
        )
    }
}
