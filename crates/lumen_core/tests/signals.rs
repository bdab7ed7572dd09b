use lumen_core::{AppearanceSignal, MemoryStore, PreferenceStore, SystemAppearance, Viewport, ViewportSignal};
use std::sync::{Arc, Mutex};

#[test]
fn viewport_signal_delivers_sanitized_sizes_in_order() {
    let viewport = ViewportSignal::new(Viewport::new(390.0, 844.0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = viewport.subscribe(move |v| sink.lock().unwrap().push(*v));

    viewport.set(Viewport::new(844.0, 390.0));
    viewport.set(Viewport::new(-1.0, 390.0));
    viewport.set(Viewport::new(0.0, 390.0));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Viewport::new(844.0, 390.0), Viewport::new(0.0, 390.0)]
    );
}

#[test]
fn appearance_signal_defaults_to_unknown() {
    let appearance = AppearanceSignal::default();
    assert_eq!(appearance.get(), SystemAppearance::Unknown);
    assert!(!appearance.get().is_dark());

    appearance.set(SystemAppearance::Dark);
    assert!(appearance.get().is_dark());
}

#[test]
fn memory_store_is_usable_as_trait_object() {
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
    assert_eq!(store.load("theme_mode").unwrap(), None);
    store.save("theme_mode", "system").unwrap();
    assert_eq!(store.load("theme_mode").unwrap().as_deref(), Some("system"));
}

#[test]
fn replace_returns_previous_and_notifies_on_change() {
    let viewport = ViewportSignal::new(Viewport::new(390.0, 844.0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = viewport.subscribe(move |v| sink.lock().unwrap().push(v.width));

    assert_eq!(viewport.replace(Viewport::new(800.0, 600.0)), Viewport::new(390.0, 844.0));
    assert_eq!(viewport.replace(Viewport::new(800.0, 600.0)), Viewport::new(800.0, 600.0));
    assert_eq!(*seen.lock().unwrap(), vec![800.0]);
}
