//! Read-only lookups over a route container
use std::io::Write;

use itertools::Itertools;

use crate::{container::Container, model::Route, utils::eq_ignore_case};

/// Routes on given days that leave a given station at or after a given time.
#[derive(Clone, Debug)]
pub struct EveningQuery {
    pub station: String,
    /// Zero-padded `HH:MM`. Compared as a string, so unpadded times misorder.
    pub after: String,
    /// A route runs on a day if its descriptor contains the day verbatim.
    pub days: Vec<String>,
}

impl Default for EveningQuery {
    fn default() -> Self {
        EveningQuery {
            station: "Харків'".to_string(),
            after: "18:00".to_string(),
            days: vec!["Monday".to_string(), "Friday".to_string()],
        }
    }
}

impl EveningQuery {
    fn runs_on_day(&self, route: &Route) -> bool {
        self.days
            .iter()
            .any(|day| route.days_of_week().contains(day.as_str()))
    }

    pub fn matches(&self, route: &Route) -> bool {
        self.runs_on_day(route)
            && route.stations().iter().any(|station| {
                eq_ignore_case(station.station_name(), &self.station)
                    && station.departure_time() >= self.after.as_str()
            })
    }
}

/// Matching routes in container order.
pub fn find_evening_routes<'a>(
    container: &'a Container<Route>,
    query: &EveningQuery,
) -> Vec<&'a Route> {
    container.iter().filter(|r| query.matches(r)).collect_vec()
}

/// Prints the header line and then every matching route.
pub fn print_evening_routes(
    container: &Container<Route>,
    query: &EveningQuery,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Evening routes through {} on {}:",
        query.station.trim_end_matches('\''),
        query.days.iter().map(|d| format!("{d}s")).join(" and ")
    )?;

    for route in find_evening_routes(container, query) {
        writeln!(out, "{route}")?;
    }

    Ok(())
}
