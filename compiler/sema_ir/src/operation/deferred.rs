//! Compute-once cells for operation children.
//!
//! Every child of an operation is a [`Deferred`]: construction is captured
//! in a closure and runs on first access. Concurrent first accesses block on
//! one another and observe the same value; later accesses are a plain load.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

type Init<T> = Box<dyn FnOnce() -> T + Send>;

/// A value computed on first access and cached afterwards.
pub struct Deferred<T> {
    value: OnceLock<T>,
    init: Mutex<Option<Init<T>>>,
}

impl<T> Deferred<T> {
    /// Defer `init` until the first [`get`](Self::get).
    pub fn new(init: impl FnOnce() -> T + Send + 'static) -> Self {
        Deferred {
            value: OnceLock::new(),
            init: Mutex::new(Some(Box::new(init))),
        }
    }

    /// A cell that is already populated.
    pub fn ready(value: T) -> Self {
        let cell = OnceLock::new();
        // A fresh OnceLock always accepts its first value.
        let _ = cell.set(value);
        Deferred {
            value: cell,
            init: Mutex::new(None),
        }
    }

    /// Force the cell and return the cached value.
    ///
    /// # Panics
    /// Panics if a previous initialization panicked; the cell cannot be
    /// recovered after that.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| {
            let init = self.init.lock().take();
            match init {
                Some(init) => init(),
                None => panic!("deferred operation child lost its initializer to an earlier panic"),
            }
        })
    }

    /// Whether the value has been computed.
    pub fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    /// The value if it has been computed, without forcing it.
    pub fn peek(&self) -> Option<&T> {
        self.value.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => value.fmt(f),
            None => f.write_str("<deferred>"),
        }
    }
}
