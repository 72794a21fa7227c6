//! Theme ownership and subscriber broadcast.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::adaptive::ColorMode;
use super::preference::{ThemeError, ThemePreference};

type SubscriberFn = Rc<RefCell<dyn FnMut(ThemePreference)>>;

/// Identifier returned by [`ThemeHandle::subscribe`] for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct ProviderState {
    current: ThemePreference,
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    next_id: u64,
}

/// Owner of the active theme preference.
///
/// The provider is created by the root shell and holds exactly one active
/// [`ThemePreference`] at a time. Descendants interact with it through
/// [`ThemeHandle`] clones obtained from [`ThemeProvider::handle`]; every
/// handle observes the same value at all times.
///
/// Changing the preference synchronously notifies all subscribers in
/// registration order. Dropping the provider (and every handle cloned from
/// it) releases all theme state; a fresh provider starts from its own
/// initial value.
///
/// # Example
///
/// ```rust
/// use sightsignal_shell::{ThemePreference, ThemeProvider};
///
/// let provider = ThemeProvider::new(ThemePreference::Light);
/// let handle = provider.handle();
///
/// provider.set(ThemePreference::Dark);
/// assert_eq!(handle.current(), ThemePreference::Dark);
/// ```
pub struct ThemeProvider {
    handle: ThemeHandle,
}

impl ThemeProvider {
    /// Creates a provider with the given initial preference.
    pub fn new(initial: ThemePreference) -> Self {
        debug!(theme = initial.as_str(), "theme provider created");
        Self {
            handle: ThemeHandle {
                state: Rc::new(RefCell::new(ProviderState {
                    current: initial,
                    subscribers: Vec::new(),
                    next_id: 0,
                })),
            },
        }
    }

    /// Returns a cheaply cloneable handle for descendant consumers.
    pub fn handle(&self) -> ThemeHandle {
        self.handle.clone()
    }

    /// The active preference.
    pub fn current(&self) -> ThemePreference {
        self.handle.current()
    }

    /// The active preference resolved to a concrete color mode.
    pub fn resolved(&self) -> ColorMode {
        self.handle.resolved()
    }

    /// Sets the active preference and notifies all subscribers.
    pub fn set(&self, preference: ThemePreference) {
        self.handle.set(preference);
    }

    /// Parses and sets a preference by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] for names outside the accepted
    /// set. On error the active preference is unchanged and no subscriber
    /// is notified.
    pub fn set_by_name(&self, name: &str) -> Result<(), ThemeError> {
        self.handle.set_by_name(name)
    }

    /// Registers a subscriber invoked on every preference change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: FnMut(ThemePreference) + 'static,
    {
        self.handle.subscribe(callback)
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.handle.unsubscribe(id);
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("current", &self.current())
            .finish()
    }
}

/// Shared read/mutate access to a [`ThemeProvider`].
///
/// Handles are single-threaded (`Rc` interior) and cheap to clone. A handle
/// keeps the provider state alive, so descendants holding one continue to
/// read a consistent value even while the shell is being torn down.
///
/// Subscriber callbacks must not call [`set`](ThemeHandle::set) from within
/// the notification; changing the theme in response to a change should be
/// deferred to the next turn of the event loop.
pub struct ThemeHandle {
    state: Rc<RefCell<ProviderState>>,
}

impl ThemeHandle {
    /// The active preference.
    pub fn current(&self) -> ThemePreference {
        self.state.borrow().current
    }

    /// The active preference resolved to a concrete color mode.
    pub fn resolved(&self) -> ColorMode {
        self.current().resolve()
    }

    /// Sets the active preference and notifies all subscribers.
    pub fn set(&self, preference: ThemePreference) {
        {
            let mut state = self.state.borrow_mut();
            state.current = preference;
        }
        debug!(theme = preference.as_str(), "theme preference changed");
        self.notify(preference);
    }

    /// Parses and sets a preference by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] for names outside the accepted
    /// set; the active preference is left unchanged.
    pub fn set_by_name(&self, name: &str) -> Result<(), ThemeError> {
        let preference = name.parse::<ThemePreference>()?;
        self.set(preference);
        Ok(())
    }

    /// Registers a subscriber invoked on every preference change.
    ///
    /// Subscribers are called synchronously, in registration order, with
    /// the new preference. A subscriber registered during a notification
    /// first fires on the following change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: FnMut(ThemePreference) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = SubscriberId(state.next_id);
        state.next_id += 1;
        state
            .subscribers
            .push((id, Rc::new(RefCell::new(callback))));
        id
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.state.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&self, preference: ThemePreference) {
        // Snapshot the callbacks so subscribers may subscribe/unsubscribe
        // from within a notification; such changes apply to the next one.
        let snapshot: Vec<SubscriberFn> = self
            .state
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            (callback.borrow_mut())(preference);
        }
    }
}

impl Clone for ThemeHandle {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("current", &self.current())
            .finish()
    }
}
