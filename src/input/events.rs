//! Input events delivered by the host view.

use crate::geometry::ScreenPoint;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Generic key representation.
///
/// Hosts map their native key codes to these values. Only Escape has a
/// meaning for the draw tools; the rest are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key (cancels the active draw session)
    Escape,
    /// Return/Enter key
    Return,
    /// Unmapped or unrecognized key
    Unknown,
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Parses key names as written in replay scripts ("Escape", "Return", "a").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Escape" | "Esc" => Key::Escape,
            "Return" | "Enter" => Key::Return,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        };
        Ok(key)
    }
}

/// Phase of a pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragAction {
    /// Pointer pressed and started moving
    Start,
    /// Pointer moved while pressed
    Update,
    /// Pointer released
    End,
}

/// A drag event with its fixed origin and the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEvent {
    pub action: DragAction,
    /// Where the pointer was pressed
    pub origin: ScreenPoint,
    /// Current pointer position
    pub x: i32,
    pub y: i32,
}

impl DragEvent {
    pub fn new(action: DragAction, origin: ScreenPoint, x: i32, y: i32) -> Self {
        Self {
            action,
            origin,
            x,
            y,
        }
    }

    pub fn position(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// Everything a view can deliver to the draw tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Primary button clicked without dragging
    Click { x: i32, y: i32 },
    /// Drag gesture phase
    Drag(DragEvent),
    /// Key pressed anywhere in the window
    KeyDown(Key),
    /// Pointer moved over the view container
    PointerMove { x: i32, y: i32 },
    /// Pointer entered the view container
    PointerOver { x: i32, y: i32 },
    /// Pointer left the view container
    PointerOut,
}

/// Event stream a listener is registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Click,
    Drag,
    KeyDown,
    PointerMove,
    PointerOver,
    PointerOut,
}

impl ViewEvent {
    /// The listener an event is routed to.
    pub fn listener(&self) -> Listener {
        match self {
            ViewEvent::Click { .. } => Listener::Click,
            ViewEvent::Drag(_) => Listener::Drag,
            ViewEvent::KeyDown(_) => Listener::KeyDown,
            ViewEvent::PointerMove { .. } => Listener::PointerMove,
            ViewEvent::PointerOver { .. } => Listener::PointerOver,
            ViewEvent::PointerOut => Listener::PointerOut,
        }
    }
}
