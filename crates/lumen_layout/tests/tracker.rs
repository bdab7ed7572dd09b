use lumen_core::{Viewport, ViewportSignal};
use lumen_layout::{
    BreakpointTracker, Breakpoints, LayoutConfig, Orientation, ScaleMultipliers, SizeCategory,
    WidthRatios,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

fn signal(width: f32, height: f32) -> ViewportSignal {
    ViewportSignal::new(Viewport::new(width, height))
}

#[test]
fn test_initial_classification() {
    let viewport = signal(1068.0, 700.0);
    let bp = BreakpointTracker::new(&viewport).breakpoints();

    assert_eq!(bp.category, SizeCategory::Medium);
    assert_eq!(bp.orientation, Orientation::Landscape);
    assert_eq!((bp.width, bp.height), (1068.0, 700.0));
}

#[test]
fn test_reclassifies_on_viewport_change() {
    let viewport = signal(390.0, 844.0);
    let tracker = BreakpointTracker::new(&viewport);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _subscription = tracker.subscribe(move |bp: &Breakpoints| {
        sink.lock().unwrap().push(bp.category);
    });

    viewport.set(Viewport::new(735.0, 1000.0));
    viewport.set(Viewport::new(1069.0, 1000.0));
    viewport.set(Viewport::new(1200.0, 1000.0));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![SizeCategory::Medium, SizeCategory::Large, SizeCategory::Large]
    );
    assert_eq!(tracker.breakpoints().width, 1200.0);
}

#[test]
fn test_transition_callback_only_on_category_change() {
    let viewport = signal(390.0, 844.0);
    let tracker = BreakpointTracker::new(&viewport);

    let transitions = Arc::new(Mutex::new(Vec::new()));
    let sink = transitions.clone();
    let observer = tracker.clone();
    tracker.set_transition_callback(move |from, to| {
        // The new snapshot is already stored when the callback runs
        assert_eq!(observer.breakpoints().category, to);
        sink.lock().unwrap().push((from, to));
    });

    viewport.set(Viewport::new(400.0, 844.0));
    viewport.set(Viewport::new(900.0, 844.0));
    viewport.set(Viewport::new(950.0, 844.0));
    viewport.set(Viewport::new(300.0, 844.0));

    assert_eq!(
        *transitions.lock().unwrap(),
        vec![
            (SizeCategory::Small, SizeCategory::Medium),
            (SizeCategory::Medium, SizeCategory::Small),
        ]
    );
}

#[test]
fn test_transition_callback_disabled_by_config() {
    let config = LayoutConfig {
        animate_transitions: false,
        ..LayoutConfig::default()
    };
    let viewport = signal(390.0, 844.0);
    let tracker = BreakpointTracker::with_config(config, &viewport);

    let fired = Arc::new(Mutex::new(0));
    let sink = fired.clone();
    tracker.set_transition_callback(move |_, _| *sink.lock().unwrap() += 1);

    viewport.set(Viewport::new(1400.0, 844.0));
    assert_eq!(*fired.lock().unwrap(), 0);
    assert!(tracker.breakpoints().is_large());
}

#[test]
fn test_configured_scale() {
    let config = LayoutConfig::from_toml_str("[scale]\nlarge = 2.0\n").unwrap();
    assert_eq!(config.scale.medium, ScaleMultipliers::DEFAULT.medium);

    let viewport = signal(1440.0, 900.0);
    let bp = BreakpointTracker::with_config(config, &viewport).breakpoints();
    assert_eq!(bp.scale(17.0), 34.0);
    assert_eq!(bp.scale_with(17.0, &ScaleMultipliers::DEFAULT), 22.0);
}

#[test]
fn test_get_width_through_snapshot() {
    let portrait = Breakpoints::new(Viewport::new(700.0, 1000.0));
    assert_eq!(portrait.get_width(&WidthRatios::default()), 630.0);

    // Small landscape: 734 * 0.9 * 0.8
    let landscape = Breakpoints::new(Viewport::new(734.0, 400.0));
    assert_eq!(landscape.get_width(&WidthRatios::default()), 528.0);
}

#[test]
fn test_dropping_tracker_releases_viewport() {
    let viewport = signal(390.0, 844.0);
    let tracker = BreakpointTracker::new(&viewport);
    assert_eq!(viewport.listener_count(), 1);

    let clone = tracker.clone();
    drop(tracker);
    assert_eq!(viewport.listener_count(), 1);

    drop(clone);
    assert_eq!(viewport.listener_count(), 0);
    viewport.set(Viewport::new(1200.0, 800.0));
}

#[test]
fn test_same_viewport_keeps_classification() {
    let viewport = signal(734.0, 734.0);
    let tracker = BreakpointTracker::new(&viewport);
    let first = tracker.breakpoints();

    let updates = Arc::new(Mutex::new(0));
    let sink = updates.clone();
    let _subscription = tracker.subscribe(move |_| *sink.lock().unwrap() += 1);

    for (width, height) in [(734.0, 734.0), (1069.0, 1069.0), (1069.0, 1069.0)] {
        viewport.set(Viewport::new(width, height));
        let once = tracker.breakpoints();
        viewport.set(Viewport::new(width, height));
        assert_eq!(tracker.breakpoints(), once);
    }

    assert_eq!(first.category, SizeCategory::Small);
    assert_eq!(first.orientation, Orientation::Portrait);
    assert_eq!(*updates.lock().unwrap(), 1);
}

#[test]
fn test_concurrent_resizes_report_consistent_transitions() {
    let viewport = signal(390.0, 844.0);
    let tracker = BreakpointTracker::new(&viewport);

    let transitions = Arc::new(Mutex::new(Vec::new()));
    let sink = transitions.clone();
    tracker.set_transition_callback(move |from, to| sink.lock().unwrap().push((from, to)));

    let workers: Vec<_> = [390.0, 1200.0]
        .into_iter()
        .map(|width| {
            let viewport = viewport.clone();
            std::thread::spawn(move || {
                for step in 0..200 {
                    viewport.set(Viewport::new(width + step as f32 % 2.0, 844.0));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    for (from, to) in transitions.lock().unwrap().iter() {
        assert_ne!(from, to);
    }
}
