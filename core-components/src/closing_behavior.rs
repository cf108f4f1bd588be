//! # Closing Behavior
//!
//! Controls whether the host asks the user to confirm before closing the
//! mini app.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use bridge_traits::{error::Result as BridgeResult, Listener, PostEvent, Trackable};
use core_runtime::EventEmitter;
use core_support::{SupportContext, SupportGated};
use serde_json::json;
use tracing::debug;

use crate::error::Result;

/// Bridge method that updates the closing confirmation flag.
pub const SETUP_METHOD: &str = "web_app_setup_closing_behavior";

/// Events emitted by [`ClosingBehavior`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClosingBehaviorEvent {
    /// Any state change.
    Change,
    /// `is_confirmation_needed` changed.
    ConfirmationNeededChanged,
}

type SetupFn = fn(&Arc<dyn PostEvent>, bool) -> BridgeResult<()>;

fn setup(transport: &Arc<dyn PostEvent>, need_confirmation: bool) -> BridgeResult<()> {
    transport.post_event(
        SETUP_METHOD,
        Some(json!({ "need_confirmation": need_confirmation })),
    )
}

/// Closing confirmation component.
///
/// The host is only notified when the flag actually changes; listeners run
/// after the host was notified. Concurrent updates are serialized, so one
/// change posts once and emits once.
pub struct ClosingBehavior {
    transport: Arc<dyn PostEvent>,
    setup: SupportGated<SetupFn>,
    confirmation_needed: Mutex<bool>,
    events: EventEmitter<ClosingBehaviorEvent>,
}

impl ClosingBehavior {
    pub fn new(
        transport: Arc<dyn PostEvent>,
        context: &SupportContext,
        is_confirmation_needed: bool,
    ) -> Self {
        Self {
            transport,
            setup: SupportGated::with_method(setup as SetupFn, context, SETUP_METHOD),
            confirmation_needed: Mutex::new(is_confirmation_needed),
            events: EventEmitter::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, bool> {
        self.confirmation_needed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_confirmation_needed(&self) -> bool {
        *self.state()
    }

    /// Ask the user for confirmation before the mini app closes.
    pub fn enable_confirmation(&self) -> Result<()> {
        self.set_confirmation_needed(true)
    }

    /// Close the mini app without asking.
    pub fn disable_confirmation(&self) -> Result<()> {
        self.set_confirmation_needed(false)
    }

    fn set_confirmation_needed(&self, value: bool) -> Result<()> {
        {
            // Held across compare, post and store; released before emitting so
            // listeners may call back into the component.
            let mut state = self.state();
            if *state == value {
                return Ok(());
            }

            self.setup.invoke((&self.transport, value))??;
            *state = value;
        }
        debug!(need_confirmation = value, "Closing behavior updated");

        self.events
            .emit(&ClosingBehaviorEvent::ConfirmationNeededChanged);
        self.events.emit(&ClosingBehaviorEvent::Change);
        Ok(())
    }
}

impl Trackable for ClosingBehavior {
    type Event = ClosingBehaviorEvent;

    fn on(&self, event: ClosingBehaviorEvent, listener: Listener) {
        self.events.on(event, listener);
    }

    fn off(&self, event: ClosingBehaviorEvent, listener: &Listener) {
        self.events.off(&event, listener);
    }
}

impl fmt::Debug for ClosingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosingBehavior")
            .field("is_confirmation_needed", &self.is_confirmation_needed())
            .field("events", &self.events)
            .finish()
    }
}
