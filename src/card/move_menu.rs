//! The folder-reassignment dropdown state machine.
//!
//! A menu is either `Closed` or `Open`; while `Open` it holds exactly one
//! subscription on the shared document-level pointer listener so it can
//! dismiss itself on a pointer-down outside its own subtree. The
//! subscription token lives inside the `Open` state, so acquisition and
//! release are paired with the transitions themselves, and `Drop` covers
//! teardown while open.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Opaque token for one document-level pointer-down subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of document-level pointer-down subscriptions.
///
/// Stands in for `document.addEventListener` in the webview: the UI shell
/// forwards every pointer-down to the app, which fans it out to whichever
/// menus hold a live subscription.
pub struct PointerListenerRegistry {
    inner: Mutex<RegistryInner>,
}

struct RegistryInner {
    active: HashSet<u64>,
    next_id: u64,
}

impl PointerListenerRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                active: HashSet::new(),
                next_id: 0,
            }),
        }
    }

    /// Registers a subscription and returns its token.
    pub fn subscribe(&self) -> ListenerId {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        inner.active.insert(id);
        ListenerId(id)
    }

    /// Releases a subscription. Releasing an already-released token is a no-op,
    /// and this never panics even when called from a destructor.
    pub fn unsubscribe(&self, id: ListenerId) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.active.remove(&id.0);
    }

    /// Number of currently registered subscriptions.
    pub fn active_count(&self) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.active.len()
    }
}

impl Default for PointerListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

enum MenuState {
    Closed,
    Open { listener: ListenerId },
}

/// Dropdown state machine scoped to one card instance.
pub struct MoveMenu {
    state: MenuState,
    listeners: Arc<PointerListenerRegistry>,
}

impl MoveMenu {
    pub fn new(listeners: Arc<PointerListenerRegistry>) -> Self {
        Self {
            state: MenuState::Closed,
            listeners,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    /// Explicit trigger activation: `Closed → Open` (subscribing) or
    /// `Open → Closed` (releasing).
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            let listener = self.listeners.subscribe();
            self.state = MenuState::Open { listener };
        }
    }

    /// `Open → Closed`, releasing the subscription. No-op while `Closed`.
    pub fn close(&mut self) {
        if let MenuState::Open { listener } = self.state {
            self.listeners.unsubscribe(listener);
            self.state = MenuState::Closed;
        }
    }

    /// A document-level pointer-down was observed. Closes the menu when the
    /// event originated outside this menu's rendered subtree; a pointer-down
    /// inside the subtree leaves the menu open (the entry's own activation
    /// handles selection). No-op while `Closed`.
    pub fn pointer_down(&mut self, inside_menu: bool) {
        if self.is_open() && !inside_menu {
            self.close();
        }
    }
}

impl Drop for MoveMenu {
    fn drop(&mut self) {
        self.close();
    }
}
