//! Event Listeners
//!
//! Listener registration on elements and synchronous dispatch with
//! bubbling through the ancestor chain.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::{Document, DomError, DomResult, NodeId};

/// Listener callback. Receives the document so handlers can mutate the tree.
pub type EventCallback = Rc<dyn Fn(&mut Document, &Event)>;

/// Handle returned by `add_event_listener`, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Listener stored on an element
#[derive(Clone)]
pub(crate) struct RegisteredListener {
    pub(crate) id: ListenerId,
    pub(crate) event_type: String,
    pub(crate) callback: EventCallback,
}

impl fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("id", &self.id)
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}

/// Dispatched event
#[derive(Debug)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
    pub bubbles: bool,
    current_target: Cell<NodeId>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    pub fn new(event_type: &str, target: NodeId, bubbles: bool) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            bubbles,
            current_target: Cell::new(target),
            propagation_stopped: Cell::new(false),
        }
    }

    /// Node whose listener is currently running
    pub fn current_target(&self) -> NodeId {
        self.current_target.get()
    }

    /// Stop the event from reaching further ancestors
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

impl Document {
    /// Register a listener for `event_type` on an element
    pub fn add_event_listener(
        &mut self,
        node: NodeId,
        event_type: &str,
        callback: EventCallback,
    ) -> DomResult<ListenerId> {
        let id = ListenerId(self.next_listener_id);
        let elem = self.element_mut(node)?;
        elem.listeners.push(RegisteredListener {
            id,
            event_type: event_type.to_string(),
            callback,
        });
        self.next_listener_id += 1;
        tracing::trace!("listener {:?} for '{}' on node {}", id, event_type, node);
        Ok(id)
    }

    /// Remove a listener, returning whether it was registered
    pub fn remove_event_listener(&mut self, node: NodeId, id: ListenerId) -> DomResult<bool> {
        let elem = self.element_mut(node)?;
        let before = elem.listeners.len();
        elem.listeners.retain(|l| l.id != id);
        Ok(elem.listeners.len() < before)
    }

    /// Dispatch an event at `target`, returning how many listeners ran
    pub fn dispatch_event(&mut self, target: NodeId, event_type: &str, bubbles: bool) -> DomResult<usize> {
        self.tree.node(target)?;
        let event = Event::new(event_type, target, bubbles);

        let mut path = vec![target];
        if bubbles {
            let mut current = self.tree.node(target)?.parent;
            while current.is_valid() {
                path.push(current);
                current = self.tree.node(current)?.parent;
            }
        }

        let mut invoked = 0;
        for node in path {
            let callbacks: Vec<EventCallback> = match self.tree.get(node).and_then(|n| n.as_element()) {
                Some(elem) => elem
                    .listeners
                    .iter()
                    .filter(|l| l.event_type == event_type)
                    .map(|l| Rc::clone(&l.callback))
                    .collect(),
                None => continue,
            };
            event.current_target.set(node);
            for callback in callbacks {
                callback(self, &event);
                invoked += 1;
            }
            if event.propagation_stopped() {
                break;
            }
        }
        Ok(invoked)
    }

    /// Fire a bubbling `click` at an element
    pub fn click(&mut self, target: NodeId) -> DomResult<usize> {
        if !self.tree.node(target)?.is_element() {
            return Err(DomError::NotAnElement(target));
        }
        self.dispatch_event(target, "click", true)
    }
}
