use serde::{Deserialize, Serialize};
use std::fmt;

use super::route_station::RouteStation;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    route_number: i32,
    /// Free-form day descriptor like "Monday" or "Monday, Friday"
    days_of_week: String,
    total_seats: u32,
    /// Ordered the way the stops are driven
    stations: Vec<RouteStation>,
}

impl Route {
    pub fn new(route_number: i32, days_of_week: impl Into<String>, total_seats: u32) -> Self {
        Route {
            route_number,
            days_of_week: days_of_week.into(),
            total_seats,
            stations: vec![],
        }
    }

    /// Appends the station as the last stop.
    /// Seat counts are not checked against `total_seats`.
    pub fn add_station(&mut self, station: RouteStation) {
        self.stations.push(station);
    }

    pub fn route_number(&self) -> i32 {
        self.route_number
    }

    pub fn days_of_week(&self) -> &str {
        &self.days_of_week
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    pub fn stations(&self) -> &[RouteStation] {
        &self.stations
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route: {} (Days: {}, Total Seats: {})",
            self.route_number, self.days_of_week, self.total_seats
        )
    }
}

/// The two routes the program has always been shipped with.
pub fn demo_routes() -> Vec<Route> {
    let mut route1 = Route::new(1, "Monday", 50);
    route1.add_station(RouteStation::new("Station A", "08:00", "08:30", 30));
    route1.add_station(RouteStation::new("Харків'", "18:00", "18:30", 20));

    let mut route2 = Route::new(2, "Tuesday", 40);
    route2.add_station(RouteStation::new("Station X", "10:00", "10:30", 15));
    route2.add_station(RouteStation::new("Station Y", "11:00", "11:30", 25));

    vec![route1, route2]
}
