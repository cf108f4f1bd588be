//! Integration tests for the SDK façade

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bridge_desktop::DesktopTransport;
use bridge_traits::{error::Result as BridgeResult, PostEvent};
use core_components::{ClosingBehaviorEvent, ImpactStyle};
use core_reactive::{use_events_tracking, ForceUpdate};
use core_runtime::SdkConfig;
use core_service::{CoreError, Sdk};
use core_support::{GateTag, SharedVersion};
use mockall::mock;
use serde_json::{json, Value};

mock! {
    pub Transport {}

    impl PostEvent for Transport {
        fn post_event(&self, method: &str, params: Option<Value>) -> BridgeResult<()>;
    }
}

fn desktop_sdk(version: &str) -> (Arc<DesktopTransport>, Arc<SharedVersion>, Sdk) {
    let transport = Arc::new(DesktopTransport::new());
    let source = Arc::new(SharedVersion::new(Some(version.to_string())));
    let config = SdkConfig::builder()
        .transport(transport.clone())
        .version_source(source.clone())
        .build()
        .unwrap();
    (transport, source, Sdk::new(config).unwrap())
}

#[test]
fn test_checked_post_event_refuses_unsupported_method() {
    let mut mock = MockTransport::new();
    mock.expect_post_event().times(0);

    let config = SdkConfig::builder()
        .transport(Arc::new(mock))
        .version("6.0")
        .build()
        .unwrap();
    let sdk = Sdk::new(config).unwrap();

    let err = sdk
        .post_event("web_app_open_popup", Some(json!({ "message": "hi" })))
        .unwrap_err();
    assert!(err.is_not_supported());
    match err {
        CoreError::Support(core_support::Error::NotSupported(tag)) => {
            assert_eq!(tag, GateTag::Method("web_app_open_popup".to_string()))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_checked_post_event_forwards_supported_method() {
    let mut mock = MockTransport::new();
    mock.expect_post_event()
        .withf(|method, params| {
            method == "web_app_open_popup" && *params == Some(json!({ "message": "hi" }))
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let config = SdkConfig::builder()
        .transport(Arc::new(mock))
        .version("6.2")
        .build()
        .unwrap();
    let sdk = Sdk::new(config).unwrap();

    sdk.post_event("web_app_open_popup", Some(json!({ "message": "hi" })))
        .unwrap();
}

#[test]
fn test_unchecked_post_event_skips_gate() {
    let mut mock = MockTransport::new();
    mock.expect_post_event()
        .withf(|method, _| method == "web_app_custom_event")
        .times(1)
        .returning(|_, _| Ok(()));

    let config = SdkConfig::builder()
        .transport(Arc::new(mock))
        .version("6.0")
        .checked_post_event(false)
        .build()
        .unwrap();
    let sdk = Sdk::new(config).unwrap();

    sdk.post_event("web_app_custom_event", None).unwrap();
}

#[test]
fn test_support_queries_follow_version() {
    let (_transport, source, sdk) = desktop_sdk("6.0");

    assert!(!sdk.supports("web_app_trigger_haptic_feedback"));
    assert!(!sdk.haptic_feedback().is_supported());

    source.set(Some("6.1".to_string()));
    assert!(sdk.supports("web_app_trigger_haptic_feedback"));
    assert!(sdk.haptic_feedback().is_supported());
    assert_eq!(sdk.version().map(|v| v.to_string()), Some("6.1".to_string()));
}

#[test]
fn test_param_support() {
    let (_transport, _source, sdk) = desktop_sdk("6.2");
    assert!(sdk.supports("web_app_open_link"));
    assert!(!sdk.supports_param("web_app_open_link", "try_instant_view"));
}

#[test]
fn test_haptic_through_facade() {
    let (transport, _source, sdk) = desktop_sdk("7.0");

    sdk.haptic_feedback()
        .impact_occurred(ImpactStyle::Medium)
        .unwrap();

    assert_eq!(
        transport.events()[0].params,
        Some(json!({ "type": "impact", "impact_style": "medium" }))
    );
}

#[test]
fn test_closing_behavior_observed_by_ui_binding() {
    let (transport, _source, sdk) = desktop_sdk("7.0");
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    let update = ForceUpdate::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let tracking = use_events_tracking(
        sdk.closing_behavior(),
        [ClosingBehaviorEvent::Change],
        &update,
    );
    sdk.closing_behavior().enable_confirmation().unwrap();
    drop(tracking);
    sdk.closing_behavior().disable_confirmation().unwrap();

    assert_eq!(renders.load(Ordering::SeqCst), 1);
    assert_eq!(transport.events_for("web_app_setup_closing_behavior").len(), 2);
}

#[test]
fn test_runtime_errors_convert() {
    let err = SdkConfig::builder()
        .transport(Arc::new(DesktopTransport::new()))
        .version("7.0")
        .support_override("web_app_expand", "x.y")
        .build()
        .map_err(CoreError::from)
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Support(core_support::Error::InvalidVersion { .. })
    ));
}
