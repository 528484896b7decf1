//! Language-independent operator and statement classifications.

use crate::{RefKind, SymbolId};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    LeftShift,
    RightShift,
    And,
    Or,
    ExclusiveOr,
    ConditionalAnd,
    ConditionalOr,
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperatorKind {
    Plus,
    Minus,
    BitwiseNegation,
    Not,
    True,
    False,
    /// `^i`, index from end.
    Hat,
}

/// How a parameter received its value at a call site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Supplied by the caller.
    Explicit,
    /// Trailing arguments collected into an implicit array for a `params`
    /// parameter.
    ParamArray,
    /// Omitted; the parameter's declared default is used.
    DefaultValue,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InstanceReferenceKind {
    /// `this` or `base`.
    ContainingTypeInstance,
    /// The object being initialized in an initializer.
    ImplicitReceiver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BranchKind {
    Break,
    Continue,
    GoTo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    Return,
    YieldReturn,
    YieldBreak,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaseClauseKind {
    Default,
    SingleValue,
    Pattern,
}

/// Conversion classification as seen by consumers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConversionInfo {
    pub exists: bool,
    pub is_identity: bool,
    pub is_numeric: bool,
    pub is_implicit: bool,
    pub is_user_defined: bool,
    /// User-defined conversion operator, if any.
    pub method: Option<SymbolId>,
}

/// Dynamic operation argument metadata; empty vectors when unused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicArgumentInfo {
    pub names: Vec<Option<crate::Name>>,
    pub ref_kinds: Vec<RefKind>,
}
