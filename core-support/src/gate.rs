//! Capability-gated functions.
//!
//! [`SupportGated`] pairs a callable with a support predicate. The predicate
//! is exposed through [`SupportGated::is_supported`] and enforced by
//! [`SupportGated::invoke`], which refuses to run the callable with
//! [`Error::NotSupported`] when the predicate fails.
//!
//! ## Usage
//!
//! ```ignore
//! use core_support::{SupportContext, SupportGated};
//!
//! let expand = SupportGated::with_method(
//!     move || transport.post_event("web_app_expand", None),
//!     &context,
//!     "web_app_expand",
//! );
//!
//! if expand.is_supported() {
//!     expand.invoke(())??;
//! }
//! ```
//!
//! Arguments are passed as a tuple: `()`, `(a,)`, `(a, b)` or `(a, b, c)`.

use std::fmt;
use std::sync::Arc;

use bridge_traits::{DynPredicate, PlatformSendSync};
use tracing::debug;

use crate::context::SupportContext;
use crate::error::{Error, GateTag, Result};

/// Shared support predicate.
pub type Predicate = Arc<DynPredicate>;

/// How a gated function decides whether it may run.
#[derive(Clone)]
pub enum GateSpec {
    /// Caller-provided predicate.
    Predicate(Predicate),
    /// Version requirement of a bridge method, optionally narrowed by an
    /// extra predicate that must also hold.
    Method {
        context: SupportContext,
        method: String,
        extra: Option<Predicate>,
    },
}

impl GateSpec {
    pub fn predicate<P>(predicate: P) -> Self
    where
        P: Fn() -> bool + PlatformSendSync + 'static,
    {
        GateSpec::Predicate(Arc::new(predicate))
    }

    pub fn method(context: &SupportContext, method: impl Into<String>) -> Self {
        GateSpec::Method {
            context: context.clone(),
            method: method.into(),
            extra: None,
        }
    }

    /// Adds an extra predicate to a method gate. Predicate gates are
    /// combined so both must hold.
    pub fn and<P>(self, extra: P) -> Self
    where
        P: Fn() -> bool + PlatformSendSync + 'static,
    {
        let extra: Predicate = Arc::new(extra);
        match self {
            GateSpec::Method {
                context,
                method,
                extra: None,
            } => GateSpec::Method {
                context,
                method,
                extra: Some(extra),
            },
            GateSpec::Method {
                context,
                method,
                extra: Some(existing),
            } => GateSpec::Method {
                context,
                method,
                extra: Some(Arc::new(move || existing() && extra())),
            },
            GateSpec::Predicate(existing) => {
                GateSpec::Predicate(Arc::new(move || existing() && extra()))
            }
        }
    }

    /// Collapses the gate into a single predicate and its diagnostic tag.
    fn resolve(self) -> (Predicate, GateTag) {
        match self {
            GateSpec::Predicate(predicate) => (predicate, GateTag::Predicate),
            GateSpec::Method {
                context,
                method,
                extra,
            } => {
                let tag = GateTag::Method(method.clone());
                let check: Predicate = match extra {
                    Some(extra) => Arc::new(move || context.supports(&method) && extra()),
                    None => Arc::new(move || context.supports(&method)),
                };
                (check, tag)
            }
        }
    }
}

impl fmt::Debug for GateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateSpec::Predicate(_) => f.write_str("GateSpec::Predicate"),
            GateSpec::Method { method, extra, .. } => f
                .debug_struct("GateSpec::Method")
                .field("method", method)
                .field("extra", &extra.is_some())
                .finish(),
        }
    }
}

/// Callable that accepts its arguments as a tuple.
pub trait Callable<Args> {
    type Output;

    fn call_with(&self, args: Args) -> Self::Output;
}

impl<F, R> Callable<()> for F
where
    F: Fn() -> R,
{
    type Output = R;

    fn call_with(&self, _args: ()) -> R {
        self()
    }
}

impl<F, R, A> Callable<(A,)> for F
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn call_with(&self, (a,): (A,)) -> R {
        self(a)
    }
}

impl<F, R, A, B> Callable<(A, B)> for F
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    fn call_with(&self, (a, b): (A, B)) -> R {
        self(a, b)
    }
}

impl<F, R, A, B, C> Callable<(A, B, C)> for F
where
    F: Fn(A, B, C) -> R,
{
    type Output = R;

    fn call_with(&self, (a, b, c): (A, B, C)) -> R {
        self(a, b, c)
    }
}

/// A function that only runs while its support predicate holds.
pub struct SupportGated<F> {
    inner: F,
    check: Predicate,
    tag: GateTag,
}

impl<F> SupportGated<F> {
    pub fn new(inner: F, spec: GateSpec) -> Self {
        let (check, tag) = spec.resolve();
        Self { inner, check, tag }
    }

    /// Gate `inner` behind a caller-provided predicate.
    pub fn with_predicate<P>(inner: F, predicate: P) -> Self
    where
        P: Fn() -> bool + PlatformSendSync + 'static,
    {
        Self::new(inner, GateSpec::predicate(predicate))
    }

    /// Gate `inner` behind the version requirement of `method`.
    pub fn with_method(inner: F, context: &SupportContext, method: impl Into<String>) -> Self {
        Self::new(inner, GateSpec::method(context, method))
    }

    /// Gate `inner` behind the version requirement of `method` and `extra`.
    pub fn with_method_and<P>(
        inner: F,
        context: &SupportContext,
        method: impl Into<String>,
        extra: P,
    ) -> Self
    where
        P: Fn() -> bool + PlatformSendSync + 'static,
    {
        Self::new(inner, GateSpec::method(context, method).and(extra))
    }

    /// Evaluates the support predicate. Safe to call repeatedly.
    pub fn is_supported(&self) -> bool {
        (self.check)()
    }

    pub fn tag(&self) -> &GateTag {
        &self.tag
    }

    /// Runs the inner function with `args` if supported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] without calling the inner function
    /// when the predicate fails.
    pub fn invoke<Args>(&self, args: Args) -> Result<<F as Callable<Args>>::Output>
    where
        F: Callable<Args>,
    {
        if !self.is_supported() {
            debug!(gate = %self.tag, "refusing unsupported call");
            return Err(Error::NotSupported(self.tag.clone()));
        }
        Ok(self.inner.call_with(args))
    }
}

impl<F> fmt::Debug for SupportGated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportGated")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Wraps `inner` so that it only runs while `spec` holds.
pub fn with_is_supported<F>(inner: F, spec: GateSpec) -> SupportGated<F> {
    SupportGated::new(inner, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[test]
    fn test_predicate_gate_refuses_without_calling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let gated = SupportGated::with_predicate(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            || false,
        );

        let err = gated.invoke(()).unwrap_err();
        assert_eq!(err, Error::NotSupported(GateTag::Predicate));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_predicate_reevaluated_each_call() {
        let enabled = Arc::new(AtomicBool::new(false));
        let flag = enabled.clone();
        let gated =
            SupportGated::with_predicate(|x: u32| x * 2, move || flag.load(Ordering::SeqCst));

        assert!(!gated.is_supported());
        assert!(gated.invoke((4,)).is_err());

        enabled.store(true, Ordering::SeqCst);
        assert!(gated.is_supported());
        assert_eq!(gated.invoke((4,)).unwrap(), 8);
    }

    #[test]
    fn test_spec_and_combines_predicates() {
        let spec = GateSpec::predicate(|| true).and(|| false);
        let gated = with_is_supported(|| 1, spec);
        assert!(!gated.is_supported());
        assert_eq!(gated.tag(), &GateTag::Predicate);
    }

    #[test]
    fn test_multi_argument_delegation() {
        let gated = SupportGated::with_predicate(
            |a: &str, b: usize, c: char| format!("{a}{b}{c}"),
            || true,
        );
        assert_eq!(gated.invoke(("v", 6, '!')).unwrap(), "v6!");

        let pair = SupportGated::with_predicate(|a: i32, b: i32| a - b, || true);
        assert_eq!(pair.invoke((10, 3)).unwrap(), 7);
    }
}
