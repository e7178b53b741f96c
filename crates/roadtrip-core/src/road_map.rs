//! Road map payload types.

use roadtrip_digraph::{Digraph, VertexId};
use serde::Serialize;
use std::str::FromStr;

/// A one-way stretch of road between two locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadSegment {
    pub miles: f64,
    pub miles_per_hour: f64,
}

impl RoadSegment {
    pub fn new(miles: f64, miles_per_hour: f64) -> Self {
        Self {
            miles,
            miles_per_hour,
        }
    }

    /// Time needed to drive the segment at its speed limit.
    pub fn travel_seconds(&self) -> f64 {
        self.miles / self.miles_per_hour * 3600.0
    }
}

/// Locations are named vertices; road segments are edges.
pub type RoadMap = Digraph<String, RoadSegment>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripMetric {
    Distance,
    Time,
}

impl TripMetric {
    /// Edge weight optimized for this metric: miles, or seconds of driving.
    pub fn weight(self, segment: &RoadSegment) -> f64 {
        match self {
            TripMetric::Distance => segment.miles,
            TripMetric::Time => segment.travel_seconds(),
        }
    }
}

impl FromStr for TripMetric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "D" | "d" => Ok(Self::Distance),
            "T" | "t" => Ok(Self::Time),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub start: VertexId,
    pub end: VertexId,
    pub metric: TripMetric,
}
