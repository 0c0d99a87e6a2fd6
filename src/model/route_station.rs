use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stop on a route. Times are zero-padded 24 hour `HH:MM` strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteStation {
    station_name: String,
    arrival_time: String,
    departure_time: String,
    available_seats: u32,
}

impl RouteStation {
    pub fn new(
        station_name: impl Into<String>,
        arrival_time: impl Into<String>,
        departure_time: impl Into<String>,
        available_seats: u32,
    ) -> Self {
        RouteStation {
            station_name: station_name.into(),
            arrival_time: arrival_time.into(),
            departure_time: departure_time.into(),
            available_seats,
        }
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    pub fn arrival_time(&self) -> &str {
        &self.arrival_time
    }

    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }
}

impl fmt::Display for RouteStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Station: {} (Arrival: {}, Departure: {}, Available Seats: {})",
            self.station_name, self.arrival_time, self.departure_time, self.available_seats
        )
    }
}
