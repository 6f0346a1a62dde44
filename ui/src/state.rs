//! Observable holder for the displayed date.
//!
//! The store moves from `Unloaded` to `Loaded` at most once and notifies its
//! subscribers after the move so the rendering layer can refresh.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::types::Phase;

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Inner {
    phase: Phase,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

#[derive(Clone, Default)]
pub struct DateStore {
    inner: Rc<RefCell<Inner>>,
}

impl DateStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase.clone()
    }

    pub fn current_date(&self) -> String {
        self.inner.borrow().phase.current_date().to_string()
    }

    /// Record the fetched date. Returns `false` if a date was already loaded,
    /// in which case nothing changes and nobody is notified.
    pub fn load(&self, date: impl Into<String>) -> bool {
        let date = date.into();
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase.is_loaded() {
                return false;
            }
            inner.phase = Phase::Loaded(date.clone());
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        // Borrow released: listeners may read the store
        for listener in listeners {
            listener(&date);
        }
        true
    }

    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl PartialEq for DateStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for DateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("DateStore")
            .field("phase", &inner.phase)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

/// Unregisters its listener when dropped.
pub struct Subscription {
    store: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
