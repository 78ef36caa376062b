//! Host-registered observer callbacks.

use super::events::{EditorEvent, EditorRequests};
use std::fmt;

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Callback = Box<dyn FnMut(&EditorEvent, &mut EditorRequests)>;

/// Arena of observer callbacks. Freed slots are reused.
#[derive(Default)]
pub struct Observers {
    slots: Vec<Option<Callback>>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("observers", &format!("<{} observers>", self.len()))
            .finish()
    }
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback to receive every editor event.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&EditorEvent, &mut EditorRequests) + 'static,
    {
        let callback: Callback = Box::new(callback);
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(callback);
                ObserverId(index)
            }
            None => {
                self.slots.push(Some(callback));
                ObserverId(self.slots.len() - 1)
            }
        }
    }

    /// Removes a callback. Returns `false` for an unknown or stale id.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.slots
            .get_mut(id.0)
            .and_then(Option::take)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `event` to every observer in registration order.
    pub fn notify(&mut self, event: &EditorEvent, requests: &mut EditorRequests) {
        for callback in self.slots.iter_mut().flatten() {
            callback(event, requests);
        }
    }
}
