//! Trip planning: shortest routes over a [`RoadMap`].

use crate::error::{Error, Result};
use crate::road_map::{RoadMap, Trip, TripMetric};
use roadtrip_digraph::VertexId;
use serde::Serialize;

/// One road segment driven along a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: VertexId,
    pub to: VertexId,
    pub to_name: String,
    pub miles: f64,
    pub miles_per_hour: f64,
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub metric: TripMetric,
    pub start: VertexId,
    pub end: VertexId,
    pub start_name: String,
    pub end_name: String,
    pub legs: Vec<Leg>,
    pub total_miles: f64,
    pub total_seconds: f64,
}

/// Plans every trip, refusing to do so on a map that is not strongly connected.
pub fn plan_trips(map: &RoadMap, trips: &[Trip]) -> Result<Vec<TripReport>> {
    if !map.is_strongly_connected() {
        return Err(Error::DisconnectedMap);
    }
    trips.iter().map(|trip| plan_trip(map, trip)).collect()
}

/// Finds the route for a single trip, optimizing the trip's metric.
pub fn plan_trip(map: &RoadMap, trip: &Trip) -> Result<TripReport> {
    let start_name = map.vertex_info(trip.start)?.clone();
    let end_name = map.vertex_info(trip.end)?.clone();

    let metric = trip.metric;
    let paths = map.find_shortest_paths(trip.start, |segment| metric.weight(segment))?;
    let route = paths.path_to(trip.end).ok_or(Error::Unreachable {
        from: trip.start,
        to: trip.end,
    })?;

    let mut legs = Vec::with_capacity(route.len().saturating_sub(1));
    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let segment = map.edge_info(from, to)?;
        legs.push(Leg {
            from,
            to,
            to_name: map.vertex_info(to)?.clone(),
            miles: segment.miles,
            miles_per_hour: segment.miles_per_hour,
            seconds: segment.travel_seconds(),
        });
    }

    let total_miles = legs.iter().map(|leg| leg.miles).sum();
    let total_seconds = legs.iter().map(|leg| leg.seconds).sum();
    tracing::debug!(
        start = trip.start,
        end = trip.end,
        ?metric,
        legs = legs.len(),
        "trip planned"
    );

    Ok(TripReport {
        metric,
        start: trip.start,
        end: trip.end,
        start_name,
        end_name,
        legs,
        total_miles,
        total_seconds,
    })
}
