//! Compile-time constant values.

use crate::Name;

/// A constant value attached to a binder node by the resolver.
///
/// `Bad` marks an expression the resolver tried to fold but could not
/// (overflow in a constant context, division by zero, a constant of error
/// type). It is a resolver-internal state: the operation tree never carries
/// it, see `sema_lower`'s constant adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    /// IEEE 754 bits, stored as `u64` so the type stays `Eq + Hash`.
    Float(u64),
    Char(char),
    Str(Name),
    Bad,
}

impl ConstantValue {
    #[inline]
    pub fn float(value: f64) -> Self {
        ConstantValue::Float(value.to_bits())
    }

    #[inline]
    pub const fn is_bad(&self) -> bool {
        matches!(self, ConstantValue::Bad)
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            ConstantValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}
