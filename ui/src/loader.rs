//! One-shot date load tied to a component mount.

use futures::future::LocalBoxFuture;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::DateSource;
use crate::error::FetchFailure;
use crate::state::DateStore;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(String),
    /// Logged and swallowed; the store stays unloaded.
    Failed(FetchFailure),
    /// The fetch resolved after unmount and was dropped on the floor.
    Discarded,
}

pub struct DateLoader {
    source: Rc<dyn DateSource>,
    store: DateStore,
    alive: Rc<Cell<bool>>,
    started: Cell<bool>,
}

impl DateLoader {
    pub fn new(source: Rc<dyn DateSource>, store: DateStore) -> Self {
        Self {
            source,
            store,
            alive: Rc::new(Cell::new(true)),
            started: Cell::new(false),
        }
    }

    /// Returns the fetch for this mount the first time it is called and
    /// `None` afterwards.
    pub fn start(&self) -> Option<LocalBoxFuture<'static, LoadOutcome>> {
        if self.started.replace(true) {
            log::debug!("Date fetch already issued for this mount");
            return None;
        }

        let source = self.source.clone();
        let store = self.store.clone();
        let alive = self.alive.clone();
        Some(Box::pin(load(source, store, alive)))
    }

    pub fn unmount(&self) {
        self.alive.set(false);
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for DateLoader {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn load(source: Rc<dyn DateSource>, store: DateStore, alive: Rc<Cell<bool>>) -> LoadOutcome {
    let result = source.fetch_date().await;

    if !alive.get() {
        log::debug!("Component unmounted before date arrived, discarding result");
        return LoadOutcome::Discarded;
    }

    match result {
        Ok(date) => {
            store.load(date.clone());
            LoadOutcome::Loaded(date)
        }
        Err(e) => {
            log::error!("Failed to fetch date: {}", e);
            LoadOutcome::Failed(e)
        }
    }
}
