//! Sema Lower - Binder Tree to Operation Tree
//!
//! Converts the resolver's fine-grained binder tree into the reduced
//! operation vocabulary of [`sema_ir::operation`], one node at a time and
//! only as deep as a consumer walks.
//!
//! # Architecture
//!
//! - [`OperationFactory`]: public entry point, one per semantic session
//! - Identity cache: `BoundId` → operation, held until the last factory
//!   clone drops, so asking twice yields the same `Arc` (shared receivers are
//!   the exception and are rebuilt per parent)
//! - Dispatcher: one constructor per binder tag, with a generic `None`
//!   passthrough for compiler-internal forms
//! - Argument binder: re-derives per-parameter argument records from the
//!   binding overload resolution already committed to
//! - Recovery: failed resolution becomes an `Invalid` node that still
//!   exposes its salvageable children
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=sema_lower=debug` (recovery and disambiguation) or
//! `RUST_LOG=sema_lower=trace` (cache traffic), after calling
//! [`init_tracing`].

mod arguments;
mod cache;
mod constant;
mod factory;
mod lower;

#[cfg(test)]
mod fixture;

use std::sync::Once;

pub use arguments::{plan_arguments, ArgumentMismatch, ArgumentSource, PlannedArgument};
pub use constant::adapt_constant;
pub use factory::{FactoryStats, OperationFactory};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call installs a subscriber,
/// and only if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
