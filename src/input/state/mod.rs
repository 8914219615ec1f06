mod core;
mod keyboard;
mod mouse;
mod tooltip;
#[cfg(test)]
mod tests;

pub use self::core::{DrawTools, DrawToolsBuilder, DrawToolsOptions, DrawingState};
pub use tooltip::{Tooltip, TooltipStyle};
