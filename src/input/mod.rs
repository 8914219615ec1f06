//! Draw tool input handling and state machine.
//!
//! This module translates view pointer and keyboard events into
//! `draw-complete` notifications. It owns the listener registrations, the
//! drag state machine, the preview graphic and the optional tooltip.

pub mod emitter;
pub mod error;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use emitter::{DrawEvent, DrawEventKind, ListenerId};
pub use error::DrawError;
pub use events::{DragAction, DragEvent, Key, Listener, ViewEvent};
pub use state::{DrawTools, DrawToolsBuilder, DrawToolsOptions, DrawingState, Tooltip, TooltipStyle};
pub use tool::GeometryKind;
