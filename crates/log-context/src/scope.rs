//! Task-local current context

use crate::{Context, get, logger};
use proven_logger::{Fields, Logger};
use std::future::Future;
use std::sync::Arc;
use tokio::task::futures::TaskLocalFuture;

tokio::task_local! {
    static CURRENT: Context;
}

impl Context {
    /// Run `future` with this context as the task's current context
    ///
    /// Nested scopes shadow outer ones for their duration.
    pub fn scope<F: Future>(self, future: F) -> TaskLocalFuture<Context, F> {
        CURRENT.scope(self, future)
    }

    /// Run `f` with this context as the current context
    pub fn sync_scope<R>(self, f: impl FnOnce() -> R) -> R {
        CURRENT.sync_scope(self, f)
    }

    /// The current context, or [`Context::background`] outside any scope
    pub fn current() -> Self {
        CURRENT.try_with(Self::clone).unwrap_or_default()
    }
}

/// Attach a context to a future
pub trait ContextFutureExt: Future + Sized {
    /// Make `ctx` current while this future runs
    fn in_context(self, ctx: Context) -> TaskLocalFuture<Context, Self> {
        ctx.scope(self)
    }
}

impl<F: Future> ContextFutureExt for F {}

/// Fields visible from the current context
pub fn current_fields() -> Fields {
    get(&Context::current())
}

/// Logger bound in the current context, or the process-wide default
pub fn current_logger() -> Arc<dyn Logger> {
    logger(&Context::current())
}
