//! Geometry kinds the draw tools can produce.

use super::error::DrawError;
use super::events::Listener;
use std::fmt;
use std::str::FromStr;

/// What a draw session produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// Single click yields a map point
    Point,
    /// Click and drag yields a rectangular extent
    Extent,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "point",
            GeometryKind::Extent => "extent",
        }
    }

    /// Tooltip text shown while this kind is active.
    pub fn hint(&self) -> &'static str {
        match self {
            GeometryKind::Point => "click to draw point",
            GeometryKind::Extent => "click and drag to draw extent",
        }
    }

    /// The pointer stream that drives a session of this kind.
    pub(crate) fn pointer_listener(&self) -> Listener {
        match self {
            GeometryKind::Point => Listener::Click,
            GeometryKind::Extent => Listener::Drag,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(GeometryKind::Point),
            "extent" => Ok(GeometryKind::Extent),
            other => Err(DrawError::UnsupportedGeometry(other.to_string())),
        }
    }
}
