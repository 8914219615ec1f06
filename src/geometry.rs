//! Screen and map geometry primitives.
//!
//! Screen coordinates are integer pixels relative to the viewport with the
//! origin in the top-left corner, so larger `y` values are further *down*.
//! Map coordinates are whatever the view's spatial reference says they are.

use serde::{Deserialize, Serialize};

/// A pixel position inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Well-known id of a map projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    /// Geographic WGS84 (longitude/latitude degrees).
    pub const WGS84: SpatialReference = SpatialReference { wkid: 4326 };
    /// Web Mercator (meters).
    pub const WEB_MERCATOR: SpatialReference = SpatialReference { wkid: 3857 };
}

/// A position in map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
    pub spatial_reference: SpatialReference,
}

/// An axis-aligned rectangle in map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub spatial_reference: SpatialReference,
}

impl Extent {
    /// Builds an extent from its lower-left and upper-right map corners.
    ///
    /// The extent takes the spatial reference of the lower-left corner.
    pub fn from_corners(lower_left: MapPoint, upper_right: MapPoint) -> Self {
        Self {
            xmin: lower_left.x,
            ymin: lower_left.y,
            xmax: upper_right.x,
            ymax: upper_right.y,
            spatial_reference: lower_left.spatial_reference,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns true if `point` lies inside or on the border of the extent.
    ///
    /// Points in a different spatial reference never match.
    pub fn contains(&self, point: &MapPoint) -> bool {
        point.spatial_reference == self.spatial_reference
            && (self.xmin..=self.xmax).contains(&point.x)
            && (self.ymin..=self.ymax).contains(&point.y)
    }
}

/// Geometry produced by a completed draw gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Geometry {
    Point(MapPoint),
    Extent(Extent),
}

/// Which corner of the final rectangle the drag started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartCorner {
    #[serde(rename = "ul")]
    UpperLeft,
    #[serde(rename = "ur")]
    UpperRight,
    #[serde(rename = "ll")]
    LowerLeft,
    #[serde(rename = "lr")]
    LowerRight,
}

/// A drag rectangle normalized to lower-left/upper-right screen corners.
///
/// Always satisfies `lower_left.x < upper_right.x` and
/// `lower_left.y > upper_right.y` (screen y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub lower_left: ScreenPoint,
    pub upper_right: ScreenPoint,
    pub start_corner: StartCorner,
}

impl ScreenRect {
    /// Normalizes a drag from `origin` to `current` into a screen rectangle.
    ///
    /// Returns `None` when the two points share an x or y coordinate, since
    /// such a drag has no area.
    pub fn from_drag(origin: ScreenPoint, current: ScreenPoint) -> Option<Self> {
        let (sx, sy) = (origin.x, origin.y);
        let (ex, ey) = (current.x, current.y);

        let (start_corner, lower_left, upper_right) = if sx < ex && sy < ey {
            (
                StartCorner::UpperLeft,
                ScreenPoint::new(sx, ey),
                ScreenPoint::new(ex, sy),
            )
        } else if sx > ex && sy > ey {
            (
                StartCorner::LowerRight,
                ScreenPoint::new(ex, sy),
                ScreenPoint::new(sx, ey),
            )
        } else if sx > ex && sy < ey {
            (
                StartCorner::UpperRight,
                ScreenPoint::new(ex, ey),
                ScreenPoint::new(sx, sy),
            )
        } else if sx < ex && sy > ey {
            (
                StartCorner::LowerLeft,
                ScreenPoint::new(sx, sy),
                ScreenPoint::new(ex, ey),
            )
        } else {
            return None;
        };

        Some(Self {
            lower_left,
            upper_right,
            start_corner,
        })
    }
}
