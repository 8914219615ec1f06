//! Point and extent draw tools for map views.
//!
//! Attach [`DrawTools`] to anything implementing [`view::MapView`], forward
//! the view's pointer and keyboard events to it, and subscribe to
//! `draw-complete` to receive the drawn point or extent in map coordinates.
//! Configuration, symbols and a scripted replay driver are exposed alongside
//! so the CLI and external hosts share the same code.

pub mod config;
pub mod draw;
pub mod filter;
pub mod geometry;
pub mod input;
pub mod replay;
pub mod util;
pub mod view;

pub use config::Config;
pub use input::DrawTools;
