//! Event dispatch
//!
//! Pointer and lifecycle events delivered by the host windowing layer, plus a
//! dispatcher that fans them out to per-surface handlers.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::error::{CoreError, Result};

/// Event type identifier
pub type EventType = u32;

/// Event types understood by the effects engine
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const RESIZE: EventType = 40;

    /// The surface is being torn down; its effects must stop
    pub const UNMOUNT: EventType = 61;
}

/// A surface event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Target surface ID
    pub target: u64,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    /// Surface-local pointer coordinates
    Pointer { x: f32, y: f32 },
    Resize {
        width: f32,
        height: f32,
    },
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            propagation_stopped: false,
        }
    }

    pub fn pointer_down(target: u64, x: f32, y: f32) -> Self {
        Self::new(
            event_types::POINTER_DOWN,
            target,
            EventData::Pointer { x, y },
        )
    }

    pub fn pointer_up(target: u64, x: f32, y: f32) -> Self {
        Self::new(
            event_types::POINTER_UP,
            target,
            EventData::Pointer { x, y },
        )
    }

    pub fn unmount(target: u64) -> Self {
        Self::new(event_types::UNMOUNT, target, EventData::None)
    }

    /// Pointer position, if this event carries one
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y } => Some((x, y)),
            _ => None,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

new_key_type! {
    /// Subscription handle for a registered event handler
    pub struct HandlerId;
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

struct Registration {
    key: (u64, EventType),
    handler: EventHandler,
}

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: SlotMap<HandlerId, Registration>,
    routes: FxHashMap<(u64, EventType), SmallVec<[HandlerId; 4]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            routes: FxHashMap::default(),
        }
    }

    /// Register an event handler for a surface and event type
    pub fn register<F>(&mut self, surface_id: u64, event_type: EventType, handler: F) -> HandlerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let key = (surface_id, event_type);
        let id = self.handlers.insert(Registration {
            key,
            handler: Box::new(handler),
        });
        self.routes.entry(key).or_default().push(id);
        tracing::debug!(surface = surface_id, event_type, ?id, "handler registered");
        id
    }

    /// Remove a handler. Each handle can be closed exactly once.
    pub fn unregister(&mut self, id: HandlerId) -> Result<()> {
        let registration = self.handlers.remove(id).ok_or(CoreError::StaleHandle)?;
        if let Some(route) = self.routes.get_mut(&registration.key) {
            route.retain(|h| *h != id);
            if route.is_empty() {
                self.routes.remove(&registration.key);
            }
        }
        tracing::debug!(surface = registration.key.0, ?id, "handler unregistered");
        Ok(())
    }

    /// Remove every handler registered for a surface
    pub fn unregister_surface(&mut self, surface_id: u64) -> usize {
        let before = self.handlers.len();
        self.handlers.retain(|_, r| r.key.0 != surface_id);
        self.routes.retain(|key, _| key.0 != surface_id);
        let removed = before - self.handlers.len();
        tracing::debug!(surface = surface_id, removed, "surface handlers unregistered");
        removed
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        let Some(route) = self.routes.get(&(event.target, event.event_type)) else {
            return;
        };
        for id in route {
            if event.propagation_stopped {
                break;
            }
            if let Some(registration) = self.handlers.get(*id) {
                (registration.handler)(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
