//! Ambient logger resolution
//!
//! Resolves "the current logger" without explicit parameter threading. A
//! logger bound with [`scope`] is visible to every continuation of the scoped
//! future; synchronous callers can bind with [`scope_sync`]. When nothing is
//! bound, [`current`] hands out a process-wide default logger, so resolution
//! never fails.
//!
//! Bindings are scope-local task storage, not global mutable state: they are
//! written only at scope entry and die with the scope. Nested scopes resolve
//! innermost-first. A future handed to `tokio::spawn` starts a fresh task and
//! must be wrapped in its own [`scope`] call to carry the binding across.

use super::logger::Logger;
use std::cell::RefCell;
use std::future::Future;
use std::sync::{Arc, OnceLock};

tokio::task_local! {
    static TASK_LOGGER: Arc<Logger>;
}

thread_local! {
    static THREAD_LOGGERS: RefCell<Vec<Arc<Logger>>> = const { RefCell::new(Vec::new()) };
}

static DEFAULT_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// Resolve the ambient logger for the active execution scope.
///
/// Order: the innermost task-local binding, then the innermost synchronous
/// binding on this thread, then the shared default logger.
pub fn current() -> Arc<Logger> {
    if let Ok(logger) = TASK_LOGGER.try_with(Arc::clone) {
        return logger;
    }
    if let Some(logger) = THREAD_LOGGERS.with(|stack| stack.borrow().last().cloned()) {
        return logger;
    }
    Arc::clone(DEFAULT_LOGGER.get_or_init(|| Arc::new(Logger::new())))
}

/// Run a future with `logger` bound as the ambient logger for its whole
/// continuation chain.
pub async fn scope<F>(logger: Arc<Logger>, future: F) -> F::Output
where
    F: Future,
{
    TASK_LOGGER.scope(logger, future).await
}

/// Run a closure with `logger` bound as the ambient logger on this thread.
/// The binding is popped when the closure returns or unwinds.
pub fn scope_sync<T>(logger: Arc<Logger>, f: impl FnOnce() -> T) -> T {
    struct PopGuard;
    impl Drop for PopGuard {
        fn drop(&mut self) {
            THREAD_LOGGERS.with(|stack| {
                stack.borrow_mut().pop();
            });
        }
    }

    THREAD_LOGGERS.with(|stack| stack.borrow_mut().push(logger));
    let _guard = PopGuard;
    f()
}
