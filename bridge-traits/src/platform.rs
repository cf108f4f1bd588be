//! Platform-specific helper abstractions used to keep trait bounds aligned with
//! the threading guarantees of each target.
//!
//! Native targets require `Send + Sync` so bridge implementations, predicates
//! and listeners can be shared freely between threads. WebAssembly builds run
//! entirely on a single thread and cannot satisfy those bounds because
//! browser-provided objects (e.g., `web_sys` types) are not thread-safe. The
//! helpers below make the required bounds conditional without duplicating
//! every trait definition.

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Zero-argument support predicate that enforces `Send + Sync` when available.
#[cfg(not(target_arch = "wasm32"))]
pub type DynPredicate = dyn Fn() -> bool + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynPredicate = dyn Fn() -> bool;

/// Event listener callback that enforces `Send + Sync` when available.
#[cfg(not(target_arch = "wasm32"))]
pub type DynListener = dyn Fn() + Send + Sync;

#[cfg(target_arch = "wasm32")]
pub type DynListener = dyn Fn();
