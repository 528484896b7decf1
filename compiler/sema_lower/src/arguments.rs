//! Argument binder.
//!
//! Overload resolution records its verdict as an [`ArgumentList`]: source
//! order arguments plus optional names, an optional argument → parameter
//! map, optional ref kinds and the expanded-`params` flag. This module turns
//! that record back into one entry per formal parameter, in parameter order.
//!
//! The binder does not resolve anything. When the record does not describe
//! a complete binding it returns an [`ArgumentMismatch`] naming the
//! inconsistency, and the factory treats that as a resolver defect.

use smallvec::SmallVec;
use thiserror::Error;

use sema_ir::bound::{ArgumentList, BoundId, BoundTree};
use sema_ir::{ConstantValue, RefKind, SymbolId};

/// A resolver record that does not describe a complete binding.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentMismatch {
    #[error("{what} has {actual} entries for {expected} arguments")]
    LengthMismatch {
        what: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("argument {argument} maps to parameter {parameter} of a {count}-parameter target")]
    ParameterOutOfRange {
        argument: usize,
        parameter: usize,
        count: usize,
    },

    #[error("parameter {parameter} receives more than one argument")]
    DuplicateArgument { parameter: usize },

    #[error("parameter {parameter} has no argument and no default value")]
    MissingArgument { parameter: usize },

    #[error("expanded form used, but the last parameter is not `params`")]
    NotExpandable,

    #[error("symbol {symbol:?} in a parameter list is not a parameter")]
    NotAParameter { symbol: SymbolId },
}

/// Where one parameter's value comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentSource {
    /// An argument written at the call site.
    Explicit {
        argument: BoundId,
        is_named: bool,
        ref_kind: RefKind,
    },
    /// Trailing arguments collected for a `params` parameter in expanded
    /// form, in source order. May be empty.
    ParamArray { elements: Vec<BoundId> },
    /// The parameter's declared default.
    Default(ConstantValue),
}

/// One formal parameter and its value source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedArgument {
    pub parameter: SymbolId,
    pub source: ArgumentSource,
}

/// Per-parameter assignment while scanning the arguments.
#[derive(Copy, Clone)]
enum Pending {
    Empty,
    Argument(usize),
}

/// Re-derive the per-parameter binding committed in `list` against
/// `parameters`.
///
/// The output has exactly one entry per parameter, in parameter order.
pub fn plan_arguments(
    tree: &BoundTree,
    parameters: &[SymbolId],
    list: &ArgumentList,
) -> Result<Vec<PlannedArgument>, ArgumentMismatch> {
    let arguments = tree.list(list.arguments);
    check_len("name list", list.names.len(), arguments.len())?;
    check_len("ref kind list", list.ref_kinds.len(), arguments.len())?;
    check_len(
        "parameter map",
        list.arguments_to_parameters.len(),
        arguments.len(),
    )?;

    let mut declared = Vec::with_capacity(parameters.len());
    for &symbol in parameters {
        let parameter = tree
            .symbol(symbol)
            .as_parameter()
            .ok_or(ArgumentMismatch::NotAParameter { symbol })?;
        declared.push(parameter);
    }

    let params_ordinal = if list.expanded {
        match declared.last() {
            Some(last) if last.is_params => Some(parameters.len() - 1),
            _ => return Err(ArgumentMismatch::NotExpandable),
        }
    } else {
        None
    };

    let mut slots: SmallVec<[Pending; 8]> = SmallVec::from_elem(Pending::Empty, parameters.len());
    let mut collected = Vec::new();
    for (index, &argument) in arguments.iter().enumerate() {
        let parameter = match list.arguments_to_parameters.get(index) {
            Some(&mapped) => mapped as usize,
            None => match params_ordinal {
                Some(ordinal) if index >= ordinal => ordinal,
                _ => index,
            },
        };
        if parameter >= parameters.len() {
            return Err(ArgumentMismatch::ParameterOutOfRange {
                argument: index,
                parameter,
                count: parameters.len(),
            });
        }
        if params_ordinal == Some(parameter) {
            collected.push(argument);
            continue;
        }
        match slots[parameter] {
            Pending::Empty => slots[parameter] = Pending::Argument(index),
            Pending::Argument(_) => return Err(ArgumentMismatch::DuplicateArgument { parameter }),
        }
    }

    let mut planned = Vec::with_capacity(parameters.len());
    let mut collected = Some(collected);
    for (ordinal, (&symbol, slot)) in parameters.iter().zip(slots).enumerate() {
        let source = if params_ordinal == Some(ordinal) {
            ArgumentSource::ParamArray {
                elements: collected.take().unwrap_or_default(),
            }
        } else if let Pending::Argument(index) = slot {
            ArgumentSource::Explicit {
                argument: arguments[index],
                is_named: list.names.get(index).is_some_and(Option::is_some),
                ref_kind: list.ref_kinds.get(index).copied().unwrap_or_default(),
            }
        } else if let Some(default) = declared[ordinal].default {
            ArgumentSource::Default(default)
        } else {
            return Err(ArgumentMismatch::MissingArgument { parameter: ordinal });
        };
        planned.push(PlannedArgument {
            parameter: symbol,
            source,
        });
    }

    Ok(planned)
}

/// Optional per-argument arrays are either empty or one entry per argument.
fn check_len(what: &'static str, actual: usize, expected: usize) -> Result<(), ArgumentMismatch> {
    if actual == 0 || actual == expected {
        Ok(())
    } else {
        Err(ArgumentMismatch::LengthMismatch {
            what,
            actual,
            expected,
        })
    }
}
