//! Plain-text rendering of [`TripReport`]s.

use crate::plan::TripReport;
use crate::road_map::TripMetric;
use std::fmt::{self, Write as _};

/// Formats a duration as `[H hr ][M min ]S.s sec`, omitting leading zero units.
pub fn format_duration(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let hours = tenths / 36_000;
    let minutes = tenths % 36_000 / 600;
    let rest = tenths % 600;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours} hr ");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes} min ");
    }
    let _ = write!(out, "{}.{} sec", rest / 10, rest % 10);
    out
}

impl fmt::Display for TripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.metric {
            TripMetric::Distance => "Shortest distance",
            TripMetric::Time => "Shortest driving time",
        };
        writeln!(f, "{heading} from {} to {}:", self.start_name, self.end_name)?;
        writeln!(f, "  Begin at {}", self.start_name)?;

        for leg in &self.legs {
            match self.metric {
                TripMetric::Distance => {
                    writeln!(f, "  Continue to {} ({:.1} miles)", leg.to_name, leg.miles)?
                }
                TripMetric::Time => writeln!(
                    f,
                    "  Continue to {} ({:.1} miles @ {:.1}mph = {})",
                    leg.to_name,
                    leg.miles,
                    leg.miles_per_hour,
                    format_duration(leg.seconds)
                )?,
            }
        }

        match self.metric {
            TripMetric::Distance => writeln!(f, "Total distance: {:.1} miles", self.total_miles),
            TripMetric::Time => writeln!(f, "Total time: {}", format_duration(self.total_seconds)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_drop_leading_zero_units() {
        assert_eq!(format_duration(0.0), "0.0 sec");
        assert_eq!(format_duration(42.25), "42.3 sec");
        assert_eq!(format_duration(138.5), "2 min 18.5 sec");
        assert_eq!(format_duration(3600.0), "1 hr 0 min 0.0 sec");
        assert_eq!(format_duration(3843.2), "1 hr 4 min 3.2 sec");
    }

    #[test]
    fn rounding_carries_into_minutes() {
        assert_eq!(format_duration(59.96), "1 min 0.0 sec");
    }
}
