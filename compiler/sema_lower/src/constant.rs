//! Constant adapter.

use sema_ir::ConstantValue;

/// Normalize a binder constant for the operation tree.
///
/// The binder distinguishes "not a constant" (`None`) from "tried to fold
/// and failed" (`Some(Bad)`). Consumers only care whether a usable value
/// exists, so both become `None`.
#[inline]
pub fn adapt_constant(constant: Option<ConstantValue>) -> Option<ConstantValue> {
    constant.filter(|value| !value.is_bad())
}
