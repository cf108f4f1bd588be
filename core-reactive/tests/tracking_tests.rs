//! Integration tests for the observation adapter

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bridge_desktop::DesktopTransport;
use bridge_traits::{same_listener, Listener, PostEvent, Trackable};
use core_components::{ClosingBehavior, ClosingBehaviorEvent};
use core_reactive::{use_events_tracking, EventsTracking, ForceUpdate};
use core_runtime::EventEmitter;
use core_support::{StaticVersion, SupportContext};

fn counting_update() -> (Arc<AtomicUsize>, ForceUpdate) {
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    let update = ForceUpdate::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (renders, update)
}

#[test]
fn test_rerender_per_event_until_teardown() {
    let emitter = EventEmitter::new();
    let (renders, update) = counting_update();

    let tracking = use_events_tracking(&emitter, ["a", "b"], &update);
    emitter.emit(&"a");
    emitter.emit(&"b");
    emitter.emit(&"b");
    emitter.emit(&"c");
    assert_eq!(renders.load(Ordering::SeqCst), 3);

    drop(tracking);
    emitter.emit(&"a");
    emitter.emit(&"b");
    assert_eq!(renders.load(Ordering::SeqCst), 3);
    assert_eq!(emitter.listener_count(&"a"), 0);
    assert_eq!(emitter.listener_count(&"b"), 0);
}

#[derive(Default)]
struct IdentityLog {
    registered: Mutex<Vec<(u8, Listener)>>,
    removed: Mutex<Vec<(u8, Listener)>>,
}

impl Trackable for IdentityLog {
    type Event = u8;

    fn on(&self, event: u8, listener: Listener) {
        self.registered.lock().unwrap().push((event, listener));
    }

    fn off(&self, event: u8, listener: &Listener) {
        self.removed.lock().unwrap().push((event, listener.clone()));
    }
}

#[test]
fn test_teardown_uses_registered_listener_identity() {
    let log = IdentityLog::default();
    let (_, update) = counting_update();

    let tracking = use_events_tracking(&log, [1, 2, 3], &update);
    assert_eq!(tracking.events(), &[1, 2, 3]);
    tracking.unsubscribe();

    let registered = log.registered.lock().unwrap();
    let removed = log.removed.lock().unwrap();
    assert_eq!(registered.len(), 3);
    assert_eq!(removed.len(), 3);
    for ((on_event, on_listener), (off_event, off_listener)) in
        registered.iter().zip(removed.iter())
    {
        assert_eq!(on_event, off_event);
        assert!(same_listener(on_listener, off_listener));
        assert!(same_listener(on_listener, &update.listener()));
    }
}

#[test]
fn test_new_event_set_needs_new_guard() {
    let emitter = EventEmitter::new();
    let (renders, update) = counting_update();

    let first = EventsTracking::subscribe(&emitter, ["a"], update.listener());
    drop(first);
    let _second = EventsTracking::subscribe(&emitter, ["b"], update.listener());

    emitter.emit(&"a");
    emitter.emit(&"b");
    assert_eq!(renders.load(Ordering::SeqCst), 1);
}

#[test]
fn test_component_changes_trigger_rerender() {
    let transport: Arc<dyn PostEvent> = Arc::new(DesktopTransport::new());
    let context = SupportContext::with_default_table(Arc::new(StaticVersion::new("7.0")));
    let closing = ClosingBehavior::new(transport, &context, false);
    let (renders, update) = counting_update();

    {
        let _tracking =
            use_events_tracking(&closing, [ClosingBehaviorEvent::Change], &update);
        closing.enable_confirmation().unwrap();
        closing.enable_confirmation().unwrap();
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    closing.disable_confirmation().unwrap();
    assert_eq!(renders.load(Ordering::SeqCst), 1);
    assert_eq!(update.revision(), 1);
}
