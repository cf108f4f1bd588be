//! Re-render trigger.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use bridge_traits::{Listener, PlatformSendSync};

/// The revision counter wraps to zero at this value.
pub const REVISION_MODULUS: u32 = 1_000_000;

/// Stable listener that asks the host UI to re-render.
///
/// The listener is created once; [`ForceUpdate::listener`] always hands out
/// the same allocation, so it can be registered with `on` and later removed
/// with `off`. Every call advances the revision counter and runs the render
/// callback.
pub struct ForceUpdate {
    listener: Listener,
    revision: Arc<AtomicU32>,
}

impl ForceUpdate {
    pub fn new<R>(render: R) -> Self
    where
        R: Fn() + PlatformSendSync + 'static,
    {
        let revision = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&revision);
        let listener: Listener = Arc::new(move || {
            counter
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |rev| {
                    Some((rev + 1) % REVISION_MODULUS)
                })
                .ok();
            render();
        });
        Self { listener, revision }
    }

    /// The re-render listener. Referentially stable across calls.
    pub fn listener(&self) -> Listener {
        Arc::clone(&self.listener)
    }

    /// Number of re-renders requested so far, modulo [`REVISION_MODULUS`].
    pub fn revision(&self) -> u32 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Request a re-render directly.
    pub fn trigger(&self) {
        (self.listener)();
    }
}

impl fmt::Debug for ForceUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForceUpdate")
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}
