//! Observable container around [`DesktopState`].
//!
//! Views never mutate state. They send [`DesktopAction`]s to [`DesktopStore::dispatch`] and
//! re-render from the snapshots delivered to their subscription.

use crate::{
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&DesktopState)>;

pub struct DesktopStore {
    state: DesktopState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for DesktopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DesktopStore {
    pub fn new(state: DesktopState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn snapshot(&self) -> DesktopState {
        self.state.clone()
    }

    /// Applies `action`. Listeners run in subscription order, and only when the state changed.
    ///
    /// # Errors
    ///
    /// Propagates [`ReducerError`]; the state is left exactly as it was.
    pub fn dispatch(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        let mut next = self.state.clone();
        let effects = reduce_desktop(&mut next, action)?;
        if next != self.state {
            debug_assert!(next.windows.invariants_hold(), "window store invariant broken");
            self.state = next;
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        Ok(effects)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DesktopState) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppId, ShellMode},
        window_manager::WindowStore,
    };

    fn store() -> DesktopStore {
        let mut state = DesktopState::new(WindowStore::default());
        state.mode = ShellMode::Desktop;
        DesktopStore::new(state)
    }

    #[test]
    fn listeners_see_every_change_in_order() {
        let mut store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = seen.clone();
        store.subscribe(move |state| first.borrow_mut().push(("a", state.windows.max_z())));
        let second = seen.clone();
        store.subscribe(move |state| second.borrow_mut().push(("b", state.windows.max_z())));

        store
            .dispatch(DesktopAction::AppClicked {
                app_id: AppId::Terminal,
            })
            .unwrap();

        assert_eq!(*seen.borrow(), vec![("a", 11), ("b", 11)]);
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let mut store = store();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store
            .dispatch(DesktopAction::FocusWindow {
                app_id: AppId::Chess,
            })
            .unwrap();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn failed_dispatch_leaves_state_and_listeners_alone() {
        let mut store = store();
        store.dispatch(DesktopAction::Lock).unwrap();
        let before = store.snapshot();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store
            .dispatch(DesktopAction::AppClicked {
                app_id: AppId::Files
            })
            .is_err());
        assert_eq!(store.state(), &before);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut store = store();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store
            .dispatch(DesktopAction::AppClicked {
                app_id: AppId::Files,
            })
            .unwrap();
        assert_eq!(*calls.borrow(), 0);
    }
}
