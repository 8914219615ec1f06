//! Subscriber registry for events published by the draw tools.

use crate::geometry::Geometry;
use std::collections::HashMap;
use std::fmt;

/// Names of the events the draw tools publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawEventKind {
    /// A gesture finished or was cancelled
    DrawComplete,
}

impl DrawEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            DrawEventKind::DrawComplete => "draw-complete",
        }
    }
}

/// Payload delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// `geometry` is `None` when the user cancelled with Escape.
    DrawComplete { geometry: Option<Geometry> },
}

impl DrawEvent {
    pub fn kind(&self) -> DrawEventKind {
        match self {
            DrawEvent::DrawComplete { .. } => DrawEventKind::DrawComplete,
        }
    }
}

/// Handle returned by [`Emitter::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Callback = Box<dyn FnMut(&DrawEvent)>;

/// Maps each event kind to its subscribers, called in subscription order.
#[derive(Default)]
pub struct Emitter {
    subscribers: HashMap<DrawEventKind, Vec<(ListenerId, Callback)>>,
    next_id: u64,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field(
                "subscribers",
                &self
                    .subscribers
                    .iter()
                    .map(|(kind, subs)| (kind.name(), subs.len()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, kind: DrawEventKind, callback: F) -> ListenerId
    where
        F: FnMut(&DrawEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscribers
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns false if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for subs in self.subscribers.values_mut() {
            if let Some(index) = subs.iter().position(|(sid, _)| *sid == id) {
                subs.remove(index);
                return true;
            }
        }
        false
    }

    pub fn emit(&mut self, event: &DrawEvent) {
        if let Some(subs) = self.subscribers.get_mut(&event.kind()) {
            for (_, callback) in subs.iter_mut() {
                callback(event);
            }
        }
    }

    pub fn subscriber_count(&self, kind: DrawEventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}
