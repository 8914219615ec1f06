//! Symbols and overlay graphics.
//!
//! This module defines the visual types the draw tools place on a view:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`FillSymbol`]: fill and outline styling for extents
//! - [`Graphic`]: a symbolized geometry on the view's graphics overlay

pub mod color;
pub mod symbol;

// Re-export commonly used types at module level
pub use color::Color;
pub use symbol::{FillStyle, FillSymbol, Graphic, LineSymbol};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, DODGER_BLUE, GREEN, RED, ROYAL_BLUE, TRANSPARENT, WHITE};
