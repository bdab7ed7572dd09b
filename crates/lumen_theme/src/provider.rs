//! Theme provider
//!
//! A [`ThemeProvider`] owns the selected [`ThemeMode`] and the last system
//! appearance it observed, and derives the [`ActiveTheme`] from the two. It is
//! constructed once at startup and shared by cloning the handle.
//!
//! All mutation goes through [`ThemeProvider::set_theme`]. The in-memory
//! change and subscriber notification happen on the caller's thread. Loading
//! the stored mode and saving new ones run on a background writer thread, so
//! a slow [`PreferenceStore`] never blocks construction or a mode change.
//! Store failures are only logged.
//!
//! Style hooks find the provider through a scope entered with
//! [`ThemeProvider::enter`]:
//!
//! ```rust
//! use lumen_core::{AppearanceSignal, MemoryStore};
//! use lumen_theme::{use_theme, ActiveTheme, ThemeMode, ThemeProvider};
//! use std::sync::Arc;
//!
//! let appearance = AppearanceSignal::default();
//! let provider = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);
//!
//! let _scope = provider.enter();
//! use_theme().set_theme(ThemeMode::Dark);
//! assert_eq!(provider.active_theme(), ActiveTheme::Dark);
//! ```

use crate::config::ThemeConfig;
use crate::styles::ThemedStyles;
use crate::theme::{resolve_active_theme, ActiveTheme, ThemeMode};
use crate::themes::ColorTable;
use crate::tokens::ColorToken;
use lumen_core::{AppearanceSignal, PreferenceStore, Signal, Subscription, SystemAppearance};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::thread;

/// Mode and resolved theme at one point in time
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub active: ActiveTheme,
}

struct ProviderState {
    mode: ThemeMode,
    system: SystemAppearance,
    /// Set once `set_theme` runs; a stored mode loaded later is then ignored
    selected: bool,
}

impl ProviderState {
    fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            mode: self.mode,
            active: resolve_active_theme(self.mode, self.system),
        }
    }
}

enum StoreJob {
    Save(ThemeMode),
    Flush(Sender<()>),
}

struct ProviderInner {
    state: RwLock<ProviderState>,
    storage_key: String,
    snapshot: Signal<ThemeSnapshot>,
    jobs: Sender<StoreJob>,
    /// Held for the provider's lifetime; dropping it detaches from the OS signal
    appearance_subscription: Mutex<Option<Subscription>>,
}

impl ProviderInner {
    /// Publish a snapshot taken under the state lock
    ///
    /// A racing writer can publish its older snapshot after ours, so this
    /// republishes until the signal agrees with the state.
    fn publish(&self, mut snapshot: ThemeSnapshot) {
        loop {
            self.snapshot.set(snapshot);
            let current = self.state.read().unwrap().snapshot();
            if current == snapshot {
                return;
            }
            snapshot = current;
        }
    }

    fn set_system_appearance(&self, appearance: SystemAppearance) {
        let (previous, snapshot) = {
            let mut state = self.state.write().unwrap();
            let previous = std::mem::replace(&mut state.system, appearance);
            (previous, state.snapshot())
        };
        if previous != appearance {
            tracing::debug!(?previous, ?appearance, "system appearance changed");
        }
        self.publish(snapshot);
    }

    fn adopt_stored_mode(&self, mode: ThemeMode) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            if state.selected {
                tracing::debug!(%mode, "stored theme mode superseded by a newer selection");
                return;
            }
            state.mode = mode;
            state.snapshot()
        };
        tracing::debug!(%mode, "adopted stored theme mode");
        self.publish(snapshot);
    }

    fn persist(&self, mode: ThemeMode) {
        if self.jobs.send(StoreJob::Save(mode)).is_err() {
            tracing::warn!(%mode, key = %self.storage_key, "theme store writer is gone, mode not persisted");
        }
    }
}

/// Shared handle to the theme state
#[derive(Clone)]
pub struct ThemeProvider {
    inner: Arc<ProviderInner>,
}

impl ThemeProvider {
    /// Create a provider with the default configuration
    pub fn new(store: Arc<dyn PreferenceStore>, appearance: &AppearanceSignal) -> Self {
        Self::with_config(ThemeConfig::default(), store, appearance)
    }

    /// Create a provider
    ///
    /// Starts from `config.default_mode` and returns without touching the
    /// store. The stored mode is loaded in the background and adopted once
    /// the load completes, unless [`set_theme`](Self::set_theme) ran first.
    /// Load failures and invalid values leave the current mode in place.
    pub fn with_config(
        config: ThemeConfig,
        store: Arc<dyn PreferenceStore>,
        appearance: &AppearanceSignal,
    ) -> Self {
        let mode = config.default_mode;
        let state = ProviderState {
            mode,
            system: appearance.get(),
            selected: false,
        };

        let (jobs, receiver) = mpsc::channel();
        let inner = Arc::new(ProviderInner {
            snapshot: Signal::new(state.snapshot()),
            state: RwLock::new(state),
            storage_key: config.storage_key,
            jobs,
            appearance_subscription: Mutex::new(None),
        });

        let weak: Weak<ProviderInner> = Arc::downgrade(&inner);
        let subscription = appearance.subscribe(move |appearance| {
            if let Some(inner) = weak.upgrade() {
                inner.set_system_appearance(*appearance);
            }
        });
        *inner.appearance_subscription.lock().unwrap() = Some(subscription);

        let writer = StoreWriter {
            provider: Arc::downgrade(&inner),
            store,
            key: inner.storage_key.clone(),
        };
        let spawned = thread::Builder::new()
            .name("lumen-theme-store".into())
            .spawn(move || writer.run(receiver));
        if let Err(error) = spawned {
            tracing::warn!(%error, "failed to start theme store writer, preference will not persist");
        }

        tracing::debug!(%mode, "theme provider created");
        Self { inner }
    }

    pub fn mode(&self) -> ThemeMode {
        self.inner.state.read().unwrap().mode
    }

    pub fn system_appearance(&self) -> SystemAppearance {
        self.inner.state.read().unwrap().system
    }

    pub fn active_theme(&self) -> ActiveTheme {
        self.snapshot().active
    }

    pub fn is_dark(&self) -> bool {
        self.active_theme().is_dark()
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.state.read().unwrap().snapshot()
    }

    /// Color table of the active theme
    pub fn colors(&self) -> &'static ColorTable {
        ColorTable::for_theme(self.active_theme())
    }

    /// Style builders bound to the active theme
    pub fn styles(&self) -> ThemedStyles {
        ThemedStyles::new(self.active_theme())
    }

    /// Pick a per-theme override if one is given, else the token's color
    pub fn theme_color<'a>(
        &self,
        light: Option<&'a str>,
        dark: Option<&'a str>,
        token: ColorToken,
    ) -> &'a str {
        let active = self.active_theme();
        let override_color = match active {
            ActiveTheme::Light => light,
            ActiveTheme::Dark => dark,
        };
        override_color.unwrap_or_else(|| ColorTable::for_theme(active).color(token))
    }

    /// Select a theme mode
    ///
    /// Subscribers see the change before this returns. The save is queued
    /// for the background writer; a failed save is logged and the in-memory
    /// mode is kept.
    pub fn set_theme(&self, mode: ThemeMode) {
        let (previous, snapshot) = {
            let mut state = self.inner.state.write().unwrap();
            state.selected = true;
            let previous = std::mem::replace(&mut state.mode, mode);
            (previous, state.snapshot())
        };
        if previous != mode {
            tracing::debug!(from = %previous, to = %mode, "theme mode changed");
        }
        self.inner.publish(snapshot);
        self.inner.persist(mode);
    }

    /// Switch to the explicit mode opposite the active theme
    pub fn toggle(&self) {
        self.set_theme(self.active_theme().toggle().into());
    }

    /// Block until the initial load and every save queued so far have run
    ///
    /// Mode changes never need this; it exists for shutdown paths and tests
    /// that inspect the store.
    pub fn flush(&self) {
        let (done, finished) = mpsc::channel();
        if self.inner.jobs.send(StoreJob::Flush(done)).is_ok() {
            // An error means the writer stopped, which also ends the wait
            let _ = finished.recv();
        }
    }

    /// Observe mode and active-theme changes
    ///
    /// Also fires when a system appearance change flips the active theme
    /// under [`ThemeMode::System`], and when a stored mode is adopted. The
    /// adoption notice arrives on the store writer thread; listeners must not
    /// call [`flush`](Self::flush).
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&ThemeSnapshot) + Send + Sync + 'static) -> Subscription {
        self.inner.snapshot.subscribe(listener)
    }

    /// Make this provider the current one for the calling thread
    ///
    /// Scopes nest; the most recently entered live scope wins. Dropping a
    /// guard removes only its own entry, in any order.
    #[must_use = "the provider is only current while the scope guard is alive"]
    pub fn enter(&self) -> ProviderScope {
        let id = NEXT_SCOPE_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        SCOPES.with(|scopes| scopes.borrow_mut().push((id, self.clone())));
        ProviderScope {
            id,
            _not_send: PhantomData,
        }
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read().unwrap();
        f.debug_struct("ThemeProvider")
            .field("mode", &state.mode)
            .field("system", &state.system)
            .field("storage_key", &self.inner.storage_key)
            .finish()
    }
}

/// Owns the store on the background thread
struct StoreWriter {
    provider: Weak<ProviderInner>,
    store: Arc<dyn PreferenceStore>,
    key: String,
}

impl StoreWriter {
    /// Load once, then serve jobs until every provider handle is dropped
    fn run(self, jobs: Receiver<StoreJob>) {
        if let Some(mode) = load_stored_mode(self.store.as_ref(), &self.key) {
            if let Some(provider) = self.provider.upgrade() {
                provider.adopt_stored_mode(mode);
            }
        }

        for job in jobs {
            match job {
                StoreJob::Save(mode) => {
                    if let Err(error) = self.store.save(&self.key, mode.as_str()) {
                        tracing::warn!(%error, key = %self.key, "failed to persist theme mode");
                    }
                }
                StoreJob::Flush(done) => {
                    let _ = done.send(());
                }
            }
        }
        tracing::trace!(key = %self.key, "theme store writer stopped");
    }
}

fn load_stored_mode(store: &dyn PreferenceStore, key: &str) -> Option<ThemeMode> {
    match store.load(key) {
        Ok(Some(value)) => match value.parse() {
            Ok(mode) => Some(mode),
            Err(error) => {
                tracing::debug!(%error, "ignoring stored theme mode");
                None
            }
        },
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(%error, key, "failed to load theme mode");
            None
        }
    }
}

thread_local! {
    static SCOPES: RefCell<Vec<(u64, ThemeProvider)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Guard returned by [`ThemeProvider::enter`]
pub struct ProviderScope {
    id: u64,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        let removed = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            let index = scopes.iter().rposition(|(id, _)| *id == self.id)?;
            Some(scopes.remove(index))
        });
        // Released outside the borrow; the last handle may drop the provider
        drop(removed);
    }
}

/// The current provider, if a scope is active on this thread
pub fn try_use_theme() -> Option<ThemeProvider> {
    SCOPES.with(|scopes| scopes.borrow().last().map(|(_, provider)| provider.clone()))
}

/// The current provider
///
/// # Panics
///
/// Panics when called outside [`ThemeProvider::enter`]; that is a wiring
/// error, not a runtime condition.
pub fn use_theme() -> ThemeProvider {
    try_use_theme().expect("use_theme() called outside a ThemeProvider scope. Call ThemeProvider::enter() first.")
}

/// Active theme of the current provider
pub fn use_color_scheme() -> ActiveTheme {
    use_theme().active_theme()
}

/// Override-or-token color from the current provider
pub fn use_theme_color<'a>(light: Option<&'a str>, dark: Option<&'a str>, token: ColorToken) -> &'a str {
    use_theme().theme_color(light, dark, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::MemoryStore;

    #[test]
    fn test_scopes_nest() {
        let appearance = AppearanceSignal::default();
        let outer = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);
        let inner = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);
        inner.set_theme(ThemeMode::Dark);

        assert!(try_use_theme().is_none());
        let _outer_scope = outer.enter();
        {
            let _inner_scope = inner.enter();
            assert_eq!(use_color_scheme(), ActiveTheme::Dark);
        }
        assert_eq!(use_color_scheme(), ActiveTheme::Light);
    }

    #[test]
    fn test_theme_color_prefers_override() {
        let appearance = AppearanceSignal::default();
        let provider = ThemeProvider::new(Arc::new(MemoryStore::new()), &appearance);

        assert_eq!(provider.theme_color(Some("#123456"), None, ColorToken::Text), "#123456");
        provider.set_theme(ThemeMode::Dark);
        assert_eq!(provider.theme_color(Some("#123456"), None, ColorToken::Text), "#FFFFFF");
    }
}
