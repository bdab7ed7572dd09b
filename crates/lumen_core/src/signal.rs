//! Observable values with guard-based subscriptions
//!
//! A [`Signal`] owns a value and a set of listeners. Writing a different value
//! notifies every listener synchronously. Subscribing returns a
//! [`Subscription`] guard; dropping the guard removes the listener, so a
//! subscriber can never outlive its own teardown.
//!
//! ```rust
//! use lumen_core::Signal;
//! use std::sync::{Arc, Mutex};
//!
//! let width = Signal::new(320.0f32);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let subscription = width.subscribe(move |w| sink.lock().unwrap().push(*w));
//! width.set(800.0);
//! drop(subscription);
//! width.set(1200.0);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![800.0]);
//! ```

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

new_key_type! {
    /// Identifier for a listener registered on a signal
    pub struct ListenerId;
}

/// A listener callback
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SignalInner<T> {
    value: T,
    listeners: SlotMap<ListenerId, Listener<T>>,
}

/// A shared observable value
///
/// Cloning a signal yields another handle to the same value.
pub struct Signal<T> {
    inner: Arc<Mutex<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq + Send + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + Send + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SignalInner {
                value,
                listeners: SlotMap::with_key(),
            })),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.lock().unwrap().value.clone()
    }

    /// Store a new value and notify listeners if it differs from the current one.
    ///
    /// Returns `true` when the value changed.
    pub fn set(&self, value: T) -> bool {
        let listeners = {
            let mut inner = self.inner.lock().unwrap();
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            inner.listeners.values().cloned().collect::<Vec<_>>()
        };

        // Listeners run outside the lock so they may read or write the signal.
        for listener in listeners {
            listener(&value);
        }
        true
    }

    /// Store a new value and return the one it replaced
    ///
    /// The swap happens under one lock, so concurrent callers each see the
    /// value that was current right before their own write. Listeners are
    /// notified as in [`Signal::set`].
    pub fn replace(&self, value: T) -> T {
        let (previous, listeners) = {
            let mut inner = self.inner.lock().unwrap();
            let previous = std::mem::replace(&mut inner.value, value.clone());
            if previous == value {
                return previous;
            }
            let listeners = inner.listeners.values().cloned().collect::<Vec<_>>();
            (previous, listeners)
        };

        for listener in listeners {
            listener(&value);
        }
        previous
    }

    /// Modify the value in place, notifying listeners on change
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut value = self.get();
        f(&mut value);
        self.set(value)
    }

    /// Register a listener called with every new value
    ///
    /// The listener stays registered until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription immediately unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self
            .inner
            .lock()
            .unwrap()
            .listeners
            .insert(Arc::new(listener));

        let weak: Weak<Mutex<SignalInner<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().unwrap().listeners.remove(id);
            }
        })
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }
}

/// Guard for a registered listener
///
/// The listener is removed when the guard is dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Create a guard that runs `release` exactly once on drop
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Remove the listener now
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_set_notifies_only_on_change() {
        let signal = Signal::new(1);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _sub = signal.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!signal.set(1));
        assert!(signal.set(2));
        assert!(signal.set(3));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(signal.get(), 3);
    }

    #[test]
    fn test_drop_subscription_removes_listener() {
        let signal = Signal::new(0u32);
        let sub = signal.subscribe(|_| {});
        let other = signal.subscribe(|_| {});
        assert_eq!(signal.listener_count(), 2);

        drop(sub);
        assert_eq!(signal.listener_count(), 1);

        other.unsubscribe();
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_signal() {
        let signal = Signal::new(String::from("a"));
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }

    #[test]
    fn test_listener_can_read_signal() {
        let signal = Signal::new(10);
        let observed = Arc::new(Mutex::new(None));
        let sink = observed.clone();
        let handle = signal.clone();
        let _sub = signal.subscribe(move |value| {
            *sink.lock().unwrap() = Some((*value, handle.get()));
        });

        signal.update(|v| *v += 5);
        assert_eq!(*observed.lock().unwrap(), Some((15, 15)));
    }
}
