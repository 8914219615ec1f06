//! The map view the draw tools attach to.
//!
//! Real map toolkits own projection, rendering and the graphics overlay; the
//! draw tools only need the small surface captured by [`MapView`].
//! [`LinearView`] is a north-up reference implementation with a constant
//! resolution, used by the replay driver and tests.

use crate::draw::Graphic;
use crate::geometry::{MapPoint, ScreenPoint, SpatialReference};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Handle to a graphic on a [`GraphicsLayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphicId(u64);

/// Ordered collection of graphics drawn over the map.
#[derive(Debug, Default)]
pub struct GraphicsLayer {
    graphics: Vec<(GraphicId, Graphic)>,
    next_id: u64,
}

impl GraphicsLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a graphic on top of the overlay and returns its handle.
    pub fn add(&mut self, graphic: Graphic) -> GraphicId {
        let id = GraphicId(self.next_id);
        self.next_id += 1;
        self.graphics.push((id, graphic));
        id
    }

    /// Removes a graphic, returning it if it was still present.
    pub fn remove(&mut self, id: GraphicId) -> Option<Graphic> {
        let index = self.graphics.iter().position(|(gid, _)| *gid == id)?;
        Some(self.graphics.remove(index).1)
    }

    pub fn remove_all(&mut self) {
        self.graphics.clear();
    }

    pub fn get(&self, id: GraphicId) -> Option<&Graphic> {
        self.graphics
            .iter()
            .find(|(gid, _)| *gid == id)
            .map(|(_, graphic)| graphic)
    }

    pub fn len(&self) -> usize {
        self.graphics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphics.is_empty()
    }

    /// Iterates graphics bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Graphic> {
        self.graphics.iter().map(|(_, graphic)| graphic)
    }
}

/// Capabilities the draw tools consume from a map view.
pub trait MapView {
    /// Projects a viewport pixel into map coordinates.
    fn to_map(&self, point: ScreenPoint) -> MapPoint;

    /// Spatial reference of the map.
    fn spatial_reference(&self) -> SpatialReference;

    fn graphics(&self) -> &GraphicsLayer;

    fn graphics_mut(&mut self) -> &mut GraphicsLayer;
}

/// Errors raised when constructing a [`LinearView`].
#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("resolution must be a positive finite number, got {0}")]
    InvalidResolution(f64),

    #[error("viewport must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Placement of a [`LinearView`], as written in replay scripts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Map x of the viewport's left edge
    pub xmin: f64,
    /// Map y of the viewport's top edge
    pub ymax: f64,
    /// Map units per pixel
    pub resolution: f64,
    /// Well-known id of the map projection
    #[serde(default = "default_wkid")]
    pub wkid: u32,
}

fn default_wkid() -> u32 {
    SpatialReference::WGS84.wkid
}

impl Default for ViewSpec {
    /// Whole world in WGS84 on an 800x400 viewport.
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            xmin: -180.0,
            ymax: 90.0,
            resolution: 0.45,
            wkid: default_wkid(),
        }
    }
}

/// A north-up view with a constant map resolution.
#[derive(Debug)]
pub struct LinearView {
    spec: ViewSpec,
    spatial_reference: SpatialReference,
    graphics: GraphicsLayer,
}

impl LinearView {
    pub fn new(spec: ViewSpec) -> Result<Self, ViewError> {
        if !(spec.resolution.is_finite() && spec.resolution > 0.0) {
            return Err(ViewError::InvalidResolution(spec.resolution));
        }
        if spec.width == 0 || spec.height == 0 {
            return Err(ViewError::EmptyViewport {
                width: spec.width,
                height: spec.height,
            });
        }

        Ok(Self {
            spec,
            spatial_reference: SpatialReference { wkid: spec.wkid },
            graphics: GraphicsLayer::new(),
        })
    }

    pub fn spec(&self) -> &ViewSpec {
        &self.spec
    }
}

impl MapView for LinearView {
    fn to_map(&self, point: ScreenPoint) -> MapPoint {
        MapPoint {
            x: self.spec.xmin + point.x as f64 * self.spec.resolution,
            y: self.spec.ymax - point.y as f64 * self.spec.resolution,
            spatial_reference: self.spatial_reference,
        }
    }

    fn spatial_reference(&self) -> SpatialReference {
        self.spatial_reference
    }

    fn graphics(&self) -> &GraphicsLayer {
        &self.graphics
    }

    fn graphics_mut(&mut self) -> &mut GraphicsLayer {
        &mut self.graphics
    }
}
