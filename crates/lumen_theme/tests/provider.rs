use lumen_core::{AppearanceSignal, MemoryStore, PreferenceStore, StoreError, SystemAppearance};
use lumen_theme::{
    resolve_active_theme, use_theme, ActiveTheme, ThemeConfig, ThemeMode, ThemeProvider,
    ThemeSnapshot,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Store whose every operation fails
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("disk detached".into()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".into()))
    }
}

/// Store that takes a long time for every operation
struct SlowStore {
    delay: Duration,
    inner: MemoryStore,
}

impl SlowStore {
    fn new(delay: Duration, inner: MemoryStore) -> Self {
        Self { delay, inner }
    }
}

impl PreferenceStore for SlowStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        thread::sleep(self.delay);
        self.inner.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        thread::sleep(self.delay);
        self.inner.save(key, value)
    }
}

fn provider_with(store: MemoryStore, appearance: &AppearanceSignal) -> (ThemeProvider, Arc<MemoryStore>) {
    let store = Arc::new(store);
    let provider = ThemeProvider::new(store.clone(), appearance);
    (provider, store)
}

#[test]
fn stored_dark_mode_wins_over_system_signal() {
    let appearance = AppearanceSignal::new(SystemAppearance::Light);
    let (provider, _) = provider_with(MemoryStore::new().with_entry("theme_mode", "dark"), &appearance);
    provider.flush();

    assert_eq!(provider.mode(), ThemeMode::Dark);
    assert_eq!(provider.active_theme(), ActiveTheme::Dark);
}

#[test]
fn corrupt_stored_value_keeps_system_default() {
    let appearance = AppearanceSignal::new(SystemAppearance::Dark);
    let (provider, _) = provider_with(MemoryStore::new().with_entry("theme_mode", "purple"), &appearance);
    provider.flush();

    assert_eq!(provider.mode(), ThemeMode::System);
    assert_eq!(provider.active_theme(), ActiveTheme::Dark);
}

#[test]
fn custom_storage_key_and_default_mode() {
    let appearance = AppearanceSignal::default();
    let config = ThemeConfig {
        storage_key: "@prefs/theme".into(),
        default_mode: ThemeMode::Light,
    };
    let store = Arc::new(MemoryStore::new().with_entry("theme_mode", "dark"));
    let provider = ThemeProvider::with_config(config, store.clone(), &appearance);
    provider.flush();

    assert_eq!(provider.mode(), ThemeMode::Light);
    provider.set_theme(ThemeMode::System);
    provider.flush();
    assert_eq!(store.get("@prefs/theme").as_deref(), Some("system"));
}

#[test]
fn failing_store_never_rolls_back_or_raises() {
    let appearance = AppearanceSignal::default();
    let provider = ThemeProvider::new(Arc::new(BrokenStore), &appearance);
    provider.flush();
    assert_eq!(provider.mode(), ThemeMode::System);
    assert_eq!(provider.active_theme(), ActiveTheme::Light);

    provider.set_theme(ThemeMode::Dark);
    provider.flush();
    assert_eq!(provider.mode(), ThemeMode::Dark);
    assert!(provider.is_dark());
}

#[test]
fn set_theme_persists_and_notifies() {
    let appearance = AppearanceSignal::default();
    let (provider, store) = provider_with(MemoryStore::new(), &appearance);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = provider.subscribe(move |snapshot| sink.lock().unwrap().push(*snapshot));

    provider.set_theme(ThemeMode::Dark);
    provider.flush();
    assert_eq!(store.get("theme_mode").as_deref(), Some("dark"));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![ThemeSnapshot {
            mode: ThemeMode::Dark,
            active: ActiveTheme::Dark,
        }]
    );
}

#[test]
fn system_mode_tracks_appearance_changes() {
    let appearance = AppearanceSignal::new(SystemAppearance::Light);
    let (provider, _) = provider_with(MemoryStore::new(), &appearance);

    let flips = Arc::new(Mutex::new(Vec::new()));
    let sink = flips.clone();
    let _sub = provider.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.active));

    appearance.set(SystemAppearance::Dark);
    assert_eq!(provider.active_theme(), ActiveTheme::Dark);
    assert_eq!(provider.colors().colors.text, "#FFFFFF");

    provider.set_theme(ThemeMode::Light);
    appearance.set(SystemAppearance::Light);
    appearance.set(SystemAppearance::Dark);
    assert_eq!(provider.active_theme(), ActiveTheme::Light);
    assert_eq!(provider.system_appearance(), SystemAppearance::Dark);

    assert_eq!(*flips.lock().unwrap(), vec![ActiveTheme::Dark, ActiveTheme::Light]);
}

#[test]
fn dropping_provider_releases_appearance_subscription() {
    let appearance = AppearanceSignal::default();
    let provider = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);
    let handle = provider.clone();
    assert_eq!(appearance.listener_count(), 1);

    drop(provider);
    assert_eq!(appearance.listener_count(), 1);

    drop(handle);
    assert_eq!(appearance.listener_count(), 0);
    appearance.set(SystemAppearance::Dark);
}

#[test]
fn toggle_sets_explicit_opposite_mode() {
    let appearance = AppearanceSignal::new(SystemAppearance::Dark);
    let (provider, store) = provider_with(MemoryStore::new(), &appearance);

    provider.toggle();
    assert_eq!(provider.mode(), ThemeMode::Light);
    provider.toggle();
    assert_eq!(provider.mode(), ThemeMode::Dark);
    provider.flush();
    assert_eq!(store.get("theme_mode").as_deref(), Some("dark"));
}

#[test]
fn resolution_table() {
    use SystemAppearance::*;
    let cases = [
        (ThemeMode::System, Dark, ActiveTheme::Dark),
        (ThemeMode::System, Light, ActiveTheme::Light),
        (ThemeMode::System, Unknown, ActiveTheme::Light),
        (ThemeMode::Light, Dark, ActiveTheme::Light),
        (ThemeMode::Dark, Light, ActiveTheme::Dark),
    ];
    for (mode, appearance, expected) in cases {
        assert_eq!(resolve_active_theme(mode, appearance), expected, "{mode} / {appearance:?}");
    }
}

#[test]
#[should_panic(expected = "outside a ThemeProvider scope")]
fn use_theme_outside_scope_panics() {
    let _ = use_theme();
}

#[test]
fn scope_guard_restores_previous_state() {
    let appearance = AppearanceSignal::default();
    let (provider, _) = provider_with(MemoryStore::new(), &appearance);

    {
        let _scope = provider.enter();
        use_theme().set_theme(ThemeMode::Dark);
    }
    assert!(lumen_theme::try_use_theme().is_none());
    assert_eq!(provider.mode(), ThemeMode::Dark);
}

#[test]
fn slow_store_never_blocks_the_caller() {
    let delay = Duration::from_millis(300);
    let store = Arc::new(SlowStore::new(delay, MemoryStore::new().with_entry("theme_mode", "dark")));
    let appearance = AppearanceSignal::new(SystemAppearance::Light);

    let started = Instant::now();
    let provider = ThemeProvider::new(store.clone(), &appearance);
    assert!(started.elapsed() < delay / 2, "construction waited {:?}", started.elapsed());
    assert_eq!(provider.mode(), ThemeMode::System);

    let started = Instant::now();
    provider.set_theme(ThemeMode::Light);
    assert!(started.elapsed() < delay / 2, "set_theme waited {:?}", started.elapsed());
    assert_eq!(provider.active_theme(), ActiveTheme::Light);

    provider.flush();
    assert_eq!(store.inner.get("theme_mode").as_deref(), Some("light"));
}

#[test]
fn selection_made_before_load_completes_is_kept() {
    let store = SlowStore::new(
        Duration::from_millis(100),
        MemoryStore::new().with_entry("theme_mode", "dark"),
    );
    let appearance = AppearanceSignal::default();
    let provider = ThemeProvider::new(Arc::new(store), &appearance);

    provider.set_theme(ThemeMode::Light);
    provider.flush();
    assert_eq!(provider.mode(), ThemeMode::Light);
}

#[test]
fn adopted_stored_mode_is_published() {
    let store = SlowStore::new(
        Duration::from_millis(100),
        MemoryStore::new().with_entry("theme_mode", "dark"),
    );
    let appearance = AppearanceSignal::new(SystemAppearance::Light);
    let provider = ThemeProvider::new(Arc::new(store), &appearance);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = provider.subscribe(move |snapshot| sink.lock().unwrap().push(*snapshot));

    provider.flush();
    assert_eq!(
        *seen.lock().unwrap(),
        vec![ThemeSnapshot {
            mode: ThemeMode::Dark,
            active: ActiveTheme::Dark,
        }]
    );
}

#[test]
fn scopes_dropped_out_of_order_keep_the_live_provider() {
    let appearance = AppearanceSignal::default();
    let (system, _) = provider_with(MemoryStore::new(), &appearance);
    let (dark, _) = provider_with(MemoryStore::new(), &appearance);
    dark.set_theme(ThemeMode::Dark);

    let outer = system.enter();
    let inner = dark.enter();
    drop(outer);
    assert_eq!(use_theme().mode(), ThemeMode::Dark);

    let again = system.enter();
    drop(inner);
    assert_eq!(use_theme().mode(), ThemeMode::System);

    drop(again);
    assert!(lumen_theme::try_use_theme().is_none());
}

#[test]
fn racing_selections_leave_snapshot_matching_state() {
    let appearance = AppearanceSignal::default();
    let (provider, _) = provider_with(MemoryStore::new(), &appearance);

    let workers: Vec<_> = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
        .into_iter()
        .map(|mode| {
            let provider = provider.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    provider.set_theme(mode);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let last = Arc::new(Mutex::new(None));
    let sink = last.clone();
    let _sub = provider.subscribe(move |snapshot| *sink.lock().unwrap() = Some(*snapshot));
    provider.set_theme(provider.mode());
    assert_eq!(*last.lock().unwrap(), None, "snapshot signal already matched the state");
}
