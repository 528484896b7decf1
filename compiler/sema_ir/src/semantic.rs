//! Semantic session handle stamped onto every operation.
//!
//! The lowering pass never queries the model; it only stores it so
//! consumers holding an operation can get back to the session that produced
//! it. The model also carries the session's one-shot diagnostic flags.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_MODEL_ID: AtomicU64 = AtomicU64::new(1);

struct ModelData {
    id: u64,
    /// Set once the first unmodeled construct of this session was logged.
    unmodeled_reported: AtomicBool,
}

/// Opaque, cheaply cloneable reference to one semantic analysis session.
#[derive(Clone)]
pub struct SemanticModel(Arc<ModelData>);

impl SemanticModel {
    pub fn new() -> Self {
        SemanticModel(Arc::new(ModelData {
            id: NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed),
            unmodeled_reported: AtomicBool::new(false),
        }))
    }

    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Returns `true` exactly once per session (until reset): the caller
    /// that wins should emit the unmodeled-construct diagnostic.
    pub fn claim_unmodeled_report(&self) -> bool {
        !self.0.unmodeled_reported.swap(true, Ordering::AcqRel)
    }

    /// Re-arm the one-shot diagnostics.
    pub fn reset_reports(&self) {
        self.0.unmodeled_reported.store(false, Ordering::Release);
    }
}

impl Default for SemanticModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SemanticModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemanticModel(#{})", self.0.id)
    }
}
