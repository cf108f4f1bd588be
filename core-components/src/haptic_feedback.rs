//! # Haptic Feedback
//!
//! Triggers device vibration patterns through the host.
//!
//! Every call posts `web_app_trigger_haptic_feedback`, which hosts implement
//! from bridge version 6.1. On older hosts the calls are refused with a
//! not-supported error and nothing is sent.
//!
//! ## Usage
//!
//! ```ignore
//! use core_components::{HapticFeedback, ImpactStyle};
//!
//! let haptic = HapticFeedback::new(transport, &context);
//! if haptic.is_supported() {
//!     haptic.impact_occurred(ImpactStyle::Medium)?;
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use bridge_traits::{error::Result as BridgeResult, PostEvent};
use core_support::{SupportContext, SupportGated};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Bridge method used by every haptic call.
pub const TRIGGER_METHOD: &str = "web_app_trigger_haptic_feedback";

/// Strength of an impact pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Collision between small, light UI elements
    Light,
    /// Collision between moderately sized elements
    Medium,
    /// Collision between large, heavy elements
    Heavy,
    /// Collision between hard or inflexible elements
    Rigid,
    /// Collision between soft or flexible elements
    Soft,
}

/// Outcome reported by a notification pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Error,
    Success,
    Warning,
}

/// Public operations of [`HapticFeedback`], for support queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticMethod {
    ImpactOccurred,
    NotificationOccurred,
    SelectionChanged,
}

impl HapticMethod {
    /// Bridge method the operation posts.
    pub fn bridge_method(self) -> &'static str {
        match self {
            HapticMethod::ImpactOccurred
            | HapticMethod::NotificationOccurred
            | HapticMethod::SelectionChanged => TRIGGER_METHOD,
        }
    }
}

/// Payload of `web_app_trigger_haptic_feedback`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum HapticPayload {
    Impact { impact_style: ImpactStyle },
    Notification { notification_type: NotificationType },
    SelectionChange,
}

type TriggerFn = fn(&Arc<dyn PostEvent>, HapticPayload) -> BridgeResult<()>;

fn trigger(transport: &Arc<dyn PostEvent>, payload: HapticPayload) -> BridgeResult<()> {
    let params = serde_json::to_value(payload)?;
    transport.post_event(TRIGGER_METHOD, Some(params))
}

/// Haptic feedback component.
pub struct HapticFeedback {
    transport: Arc<dyn PostEvent>,
    context: SupportContext,
    trigger: SupportGated<TriggerFn>,
}

impl HapticFeedback {
    pub fn new(transport: Arc<dyn PostEvent>, context: &SupportContext) -> Self {
        Self {
            transport,
            context: context.clone(),
            trigger: SupportGated::with_method(trigger as TriggerFn, context, TRIGGER_METHOD),
        }
    }

    /// True if the host currently supports `method`.
    pub fn supports(&self, method: HapticMethod) -> bool {
        self.context.supports(method.bridge_method())
    }

    /// True if the host currently supports haptic feedback at all.
    pub fn is_supported(&self) -> bool {
        self.trigger.is_supported()
    }

    /// A collision between UI elements occurred.
    pub fn impact_occurred(&self, style: ImpactStyle) -> Result<()> {
        debug!(?style, "Impact occurred");
        self.fire(HapticPayload::Impact {
            impact_style: style,
        })
    }

    /// A task or action succeeded, failed, or produced a warning.
    pub fn notification_occurred(&self, kind: NotificationType) -> Result<()> {
        debug!(?kind, "Notification occurred");
        self.fire(HapticPayload::Notification {
            notification_type: kind,
        })
    }

    /// The user changed a selection.
    ///
    /// Use for selection changes only, not for confirming a choice.
    pub fn selection_changed(&self) -> Result<()> {
        debug!("Selection changed");
        self.fire(HapticPayload::SelectionChange)
    }

    fn fire(&self, payload: HapticPayload) -> Result<()> {
        self.trigger.invoke((&self.transport, payload))??;
        Ok(())
    }
}

impl fmt::Debug for HapticFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticFeedback")
            .field("supported", &self.is_supported())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;
    use bridge_traits::BridgeError;
    use core_support::{GateTag, StaticVersion};
    use mockall::mock;
    use serde_json::{json, Value};

    mock! {
        pub Transport {}

        impl PostEvent for Transport {
            fn post_event(&self, method: &str, params: Option<Value>) -> BridgeResult<()>;
        }
    }

    fn context(version: &str) -> SupportContext {
        SupportContext::with_default_table(Arc::new(StaticVersion::new(version)))
    }

    fn expect_payload(mock: &mut MockTransport, payload: Value) {
        mock.expect_post_event()
            .withf(move |method, params| {
                method == TRIGGER_METHOD && *params == Some(payload.clone())
            })
            .times(1)
            .returning(|_, _| Ok(()));
    }

    #[test]
    fn test_impact_payload() {
        let mut mock = MockTransport::new();
        expect_payload(&mut mock, json!({ "type": "impact", "impact_style": "heavy" }));

        let haptic = HapticFeedback::new(Arc::new(mock), &context("6.1"));
        haptic.impact_occurred(ImpactStyle::Heavy).unwrap();
    }

    #[test]
    fn test_notification_payload() {
        let mut mock = MockTransport::new();
        expect_payload(
            &mut mock,
            json!({ "type": "notification", "notification_type": "warning" }),
        );

        let haptic = HapticFeedback::new(Arc::new(mock), &context("7.0"));
        haptic
            .notification_occurred(NotificationType::Warning)
            .unwrap();
    }

    #[test]
    fn test_selection_payload() {
        let mut mock = MockTransport::new();
        expect_payload(&mut mock, json!({ "type": "selection_change" }));

        let haptic = HapticFeedback::new(Arc::new(mock), &context("6.2"));
        haptic.selection_changed().unwrap();
    }

    #[test]
    fn test_refused_below_6_1() {
        let mut mock = MockTransport::new();
        mock.expect_post_event().times(0);

        let haptic = HapticFeedback::new(Arc::new(mock), &context("6.0"));
        assert!(!haptic.is_supported());
        assert!(!haptic.supports(HapticMethod::SelectionChanged));

        let err = haptic.impact_occurred(ImpactStyle::Light).unwrap_err();
        assert!(err.is_not_supported());
        match err {
            ComponentError::Support(core_support::Error::NotSupported(tag)) => {
                assert_eq!(tag, GateTag::Method(TRIGGER_METHOD.to_string()))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_supports_each_method() {
        let haptic = HapticFeedback::new(Arc::new(MockTransport::new()), &context("6.1"));
        for method in [
            HapticMethod::ImpactOccurred,
            HapticMethod::NotificationOccurred,
            HapticMethod::SelectionChanged,
        ] {
            assert!(haptic.supports(method));
        }
    }

    #[test]
    fn test_impact_support_by_version() {
        for (version, expected) in [("6.0", false), ("6.1", true), ("6.2", true)] {
            let haptic = HapticFeedback::new(Arc::new(MockTransport::new()), &context(version));
            assert_eq!(
                haptic.supports(HapticMethod::ImpactOccurred),
                expected,
                "version {version}"
            );
        }
    }

    #[test]
    fn test_transport_failure_surfaces() {
        let mut mock = MockTransport::new();
        mock.expect_post_event()
            .times(1)
            .returning(|_, _| Err(BridgeError::NotAvailable("no parent window".into())));

        let haptic = HapticFeedback::new(Arc::new(mock), &context("6.1"));
        let err = haptic.selection_changed().unwrap_err();
        assert!(matches!(err, ComponentError::Bridge(_)));
        assert!(!err.is_not_supported());
    }

    #[test]
    fn test_style_serialization() {
        assert_eq!(serde_json::to_value(ImpactStyle::Rigid).unwrap(), json!("rigid"));
        assert_eq!(
            serde_json::to_value(NotificationType::Success).unwrap(),
            json!("success")
        );
    }
}
