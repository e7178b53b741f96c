//! Readers for the road map and trip sections of an input file.
//!
//! The road map is a location count followed by `<id> <name>` lines, then a road segment
//! count followed by `<from> <to> <miles> <mph>` lines. Trips are a count followed by
//! `<start> <end> <D|T>` lines.

use crate::error::{Error, Result};
use crate::input::InputReader;
use crate::road_map::{RoadMap, RoadSegment, Trip, TripMetric};
use roadtrip_digraph::VertexId;
use std::io::BufRead;
use std::str::{FromStr, SplitWhitespace};

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_field<T: FromStr>(
    fields: &mut SplitWhitespace<'_>,
    line: usize,
    what: &'static str,
) -> Result<T> {
    let Some(raw) = fields.next() else {
        return Err(parse_error(line, format!("missing {what}")));
    };
    raw.parse::<T>()
        .map_err(|_| parse_error(line, format!("invalid {what}: {raw:?}")))
}

fn finish_fields(fields: &mut SplitWhitespace<'_>, line: usize) -> Result<()> {
    match fields.next() {
        None => Ok(()),
        Some(extra) => Err(parse_error(line, format!("unexpected field {extra:?}"))),
    }
}

pub fn read_road_map<R: BufRead>(input: &mut InputReader<R>) -> Result<RoadMap> {
    let location_count = input.read_count("location count")?;
    let mut map = RoadMap::with_capacity(location_count);

    for _ in 0..location_count {
        let text = input.expect_line("location")?;
        let (id, name) = match text.split_once(char::is_whitespace) {
            Some((id, name)) => (id, name.trim()),
            None => (text, ""),
        };
        let id = id.to_string();
        let name = name.to_string();
        let line = input.line_number();

        let id: VertexId = id
            .parse()
            .map_err(|_| parse_error(line, format!("invalid location id: {id:?}")))?;
        if name.is_empty() {
            return Err(parse_error(line, format!("location {id} has no name")));
        }
        map.add_vertex(id, name)
            .map_err(|source| Error::Graph { line, source })?;
    }

    let segment_count = input.read_count("road segment count")?;
    for _ in 0..segment_count {
        let text = input.expect_line("road segment")?.to_string();
        let line = input.line_number();
        let mut fields = text.split_whitespace();

        let from: VertexId = parse_field(&mut fields, line, "origin location")?;
        let to: VertexId = parse_field(&mut fields, line, "destination location")?;
        let miles: f64 = parse_field(&mut fields, line, "miles")?;
        let miles_per_hour: f64 = parse_field(&mut fields, line, "speed")?;
        finish_fields(&mut fields, line)?;

        if !(miles.is_finite() && miles >= 0.0) {
            return Err(parse_error(line, format!("distance must be non-negative, got {miles}")));
        }
        if !(miles_per_hour.is_finite() && miles_per_hour > 0.0) {
            return Err(parse_error(
                line,
                format!("speed must be positive, got {miles_per_hour}"),
            ));
        }

        let segment = RoadSegment::new(miles, miles_per_hour);
        if !segment.travel_seconds().is_finite() {
            return Err(parse_error(
                line,
                format!("travel time overflows for {miles} miles at {miles_per_hour} mph"),
            ));
        }

        map.add_edge(from, to, segment)
            .map_err(|source| Error::Graph { line, source })?;
    }

    tracing::debug!(
        locations = map.vertex_count(),
        segments = map.edge_count(),
        "road map loaded"
    );
    Ok(map)
}

pub fn read_trips<R: BufRead>(input: &mut InputReader<R>) -> Result<Vec<Trip>> {
    let trip_count = input.read_count("trip count")?;
    let mut trips = Vec::with_capacity(trip_count);

    for _ in 0..trip_count {
        let text = input.expect_line("trip")?.to_string();
        let line = input.line_number();
        let mut fields = text.split_whitespace();

        let start: VertexId = parse_field(&mut fields, line, "start location")?;
        let end: VertexId = parse_field(&mut fields, line, "end location")?;
        let Some(raw_metric) = fields.next() else {
            return Err(parse_error(line, "missing trip metric"));
        };
        let metric = raw_metric
            .parse::<TripMetric>()
            .map_err(|_| Error::UnknownMetric {
                line,
                metric: raw_metric.to_string(),
            })?;
        finish_fields(&mut fields, line)?;

        trips.push(Trip { start, end, metric });
    }

    tracing::debug!(trips = trips.len(), "trips loaded");
    Ok(trips)
}
