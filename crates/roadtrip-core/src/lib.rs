#![forbid(unsafe_code)]

//! Road map loading and trip planning.
//!
//! A road map is a [`roadtrip_digraph::Digraph`] with location names on the vertices and
//! [`RoadSegment`]s on the edges. Trips are planned with the graph's shortest-path search,
//! weighting segments by distance or by driving time.

pub mod error;
pub mod input;
pub mod plan;
pub mod reader;
pub mod report;
pub mod road_map;

pub use error::{Error, Result};
pub use input::InputReader;
pub use plan::{Leg, TripReport, plan_trip, plan_trips};
pub use reader::{read_road_map, read_trips};
pub use report::format_duration;
pub use road_map::{RoadMap, RoadSegment, Trip, TripMetric};

use std::io::BufRead;

/// A road map together with the trips requested against it.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub map: RoadMap,
    pub trips: Vec<Trip>,
}

/// Reads the road map section followed by the trip section.
pub fn read_request<R: BufRead>(reader: R) -> Result<TripRequest> {
    let mut input = InputReader::new(reader);
    let map = read_road_map(&mut input)?;
    let trips = read_trips(&mut input)?;
    Ok(TripRequest { map, trips })
}
