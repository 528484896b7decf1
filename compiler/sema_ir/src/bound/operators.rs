//! Operator, conversion and resolution metadata carried by binder nodes.

/// Binary operator as resolved by the binder.
///
/// The binder does not distinguish `&&` from `&` by operator; it records
/// `And` plus the `logical` flag. The operation tree does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundBinaryOp {
    pub op: BinaryOp,
    /// Short-circuiting form of `And`/`Or`.
    pub logical: bool,
    /// Operands were lifted to nullable.
    pub lifted: bool,
    /// Evaluated in a `checked` arithmetic context.
    pub checked: bool,
}

impl BoundBinaryOp {
    pub const fn new(op: BinaryOp) -> Self {
        BoundBinaryOp {
            op,
            logical: false,
            lifted: false,
            checked: false,
        }
    }

    pub const fn logical(op: BinaryOp) -> Self {
        BoundBinaryOp {
            op,
            logical: true,
            lifted: false,
            checked: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    Or,
    Xor,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    BitwiseNegation,
    LogicalNegation,
    True,
    False,
}

/// Which of `++x`, `x++`, `--x`, `x--`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IncrementOp {
    PrefixIncrement,
    PostfixIncrement,
    PrefixDecrement,
    PostfixDecrement,
}

impl IncrementOp {
    pub const fn is_postfix(self) -> bool {
        matches!(
            self,
            IncrementOp::PostfixIncrement | IncrementOp::PostfixDecrement
        )
    }

    pub const fn is_decrement(self) -> bool {
        matches!(
            self,
            IncrementOp::PrefixDecrement | IncrementOp::PostfixDecrement
        )
    }
}

/// Classification of a conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    Identity,
    ImplicitNumeric,
    ExplicitNumeric,
    ImplicitReference,
    ExplicitReference,
    Boxing,
    Unboxing,
    ImplicitNullable,
    ExplicitNullable,
    ImplicitConstant,
    ImplicitDynamic,
    ExplicitDynamic,
    ImplicitTuple,
    ExplicitTuple,
    ImplicitUserDefined,
    ExplicitUserDefined,
    /// Lambda or anonymous method converted to a delegate.
    AnonymousFunction,
    /// Method group converted to a delegate.
    MethodGroup,
    NullLiteral,
    InterpolatedString,
    NoConversion,
}

impl ConversionKind {
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ConversionKind::ImplicitNumeric | ConversionKind::ExplicitNumeric
        )
    }

    pub const fn is_implicit(self) -> bool {
        !matches!(
            self,
            ConversionKind::ExplicitNumeric
                | ConversionKind::ExplicitReference
                | ConversionKind::Unboxing
                | ConversionKind::ExplicitNullable
                | ConversionKind::ExplicitDynamic
                | ConversionKind::ExplicitTuple
                | ConversionKind::ExplicitUserDefined
                | ConversionKind::NoConversion
        )
    }

    pub const fn is_user_defined(self) -> bool {
        matches!(
            self,
            ConversionKind::ImplicitUserDefined | ConversionKind::ExplicitUserDefined
        )
    }
}

/// Outcome of member lookup and overload resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LookupResult {
    #[default]
    Viable,
    /// Several candidates, none better.
    Ambiguous,
    /// Candidates found, none applicable to the arguments.
    OverloadResolutionFailure,
    Inaccessible,
    /// Nothing of that name.
    Empty,
}

impl LookupResult {
    pub const fn is_viable(self) -> bool {
        matches!(self, LookupResult::Viable)
    }
}

/// Where a local reference appears relative to its declaration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeclarationSite {
    /// An ordinary use of an already-declared local.
    #[default]
    None,
    /// The declaring designation inside a larger declaration, such as
    /// `x` in `var (x, y) = ...`.
    Designation,
    /// A standalone declaration expression such as `out var x`.
    DeclarationExpression,
}
