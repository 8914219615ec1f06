//! Spatial and attribute filter for a streamed feature layer.
//!
//! The stream service evaluates the attribute clause; locally we only keep
//! the filter state and test points against the spatial extent.

use crate::geometry::{Extent, MapPoint};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureFilter {
    /// Only features inside this extent are kept
    pub geometry: Option<Extent>,
    /// SQL-like where clause passed to the stream service
    #[serde(rename = "where")]
    pub where_clause: Option<String>,
}

impl FeatureFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the spatial filter; `None` removes it.
    pub fn set_geometry(&mut self, extent: Option<Extent>) {
        self.geometry = extent;
    }

    /// Replaces the attribute filter. Blank clauses remove it.
    pub fn set_where(&mut self, clause: Option<&str>) {
        self.where_clause = clause
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
    }

    pub fn clear(&mut self) {
        self.geometry = None;
        self.where_clause = None;
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_none() && self.where_clause.is_none()
    }

    /// Spatial test only. Points pass when no spatial filter is set.
    pub fn contains(&self, point: &MapPoint) -> bool {
        self.geometry
            .as_ref()
            .is_none_or(|extent| extent.contains(point))
    }
}
