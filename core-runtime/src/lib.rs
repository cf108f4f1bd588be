//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the Mini Apps SDK:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Named-event emitter for observable components
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the component crates depend
//! on. It establishes the configuration, logging conventions and event
//! broadcasting mechanism used throughout the SDK.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use config::{SdkConfig, SdkConfigBuilder};
pub use error::{Error, Result};
pub use events::EventEmitter;
