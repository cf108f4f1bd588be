//! Umbrella crate for the Mini Apps SDK.
//!
//! Re-exports the workspace crates so host applications can depend on
//! `mini-apps-sdk` alone and pick a platform with a feature flag:
//!
//! - `desktop-shims` (default): native development defaults from
//!   `bridge-desktop`
//! - `wasm`: browser bridges from `bridge-wasm`
//!
//! ```
//! # #[cfg(feature = "desktop-shims")]
//! # fn example() -> mini_apps_sdk::service::Result<()> {
//! use mini_apps_sdk::components::NotificationType;
//! use mini_apps_sdk::Sdk;
//!
//! let sdk = Sdk::with_defaults()?;
//! match sdk.haptic_feedback().notification_occurred(NotificationType::Success) {
//!     Err(err) if err.is_not_supported() => {}
//!     other => other?,
//! }
//! # Ok(())
//! # }
//! ```

pub use bridge_traits as bridge;
pub use core_components as components;
pub use core_reactive as reactive;
pub use core_runtime as runtime;
pub use core_service as service;
pub use core_support as support;

pub use core_runtime::SdkConfig;
pub use core_service::{CoreError, Sdk};
pub use core_support::{with_is_supported, GateSpec, SupportContext, SupportGated};
