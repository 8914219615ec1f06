//! Fill and outline symbols for overlay graphics.

use super::color::{Color, DODGER_BLUE, RED, ROYAL_BLUE, TRANSPARENT};
use crate::geometry::Geometry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the interior of a fill symbol is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    /// Interior painted with the fill color
    Solid,
    /// Interior left empty; only the outline is drawn
    None,
}

/// Outline of a fill symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSymbol {
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
}

/// Symbol used to paint polygon-like geometries (extents).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSymbol {
    pub color: Color,
    pub style: FillStyle,
    pub outline: LineSymbol,
}

impl FillSymbol {
    /// Translucent blue rectangle shown while an extent is being dragged.
    pub fn extent_preview() -> Self {
        Self {
            color: DODGER_BLUE.with_alpha(0.4),
            style: FillStyle::Solid,
            outline: LineSymbol {
                color: ROYAL_BLUE,
                width: 1.0,
            },
        }
    }

    /// Hollow red box marking an active spatial filter.
    pub fn filter_bbox() -> Self {
        Self {
            color: TRANSPARENT,
            style: FillStyle::None,
            outline: LineSymbol {
                color: RED,
                width: 1.0,
            },
        }
    }

    /// Color actually painted inside the geometry.
    pub fn effective_fill(&self) -> Color {
        match self.style {
            FillStyle::Solid => self.color,
            FillStyle::None => TRANSPARENT,
        }
    }
}

impl Default for FillSymbol {
    fn default() -> Self {
        Self::extent_preview()
    }
}

/// A symbolized geometry placed on a view's graphics overlay.
///
/// The geometry may be absent: an empty graphic is added when a drag starts
/// and replaced once the first rectangle is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub symbol: FillSymbol,
    pub geometry: Option<Geometry>,
}

impl Graphic {
    pub fn empty(symbol: FillSymbol) -> Self {
        Self {
            symbol,
            geometry: None,
        }
    }

    pub fn with_geometry(symbol: FillSymbol, geometry: Geometry) -> Self {
        Self {
            symbol,
            geometry: Some(geometry),
        }
    }
}
