pub mod route;
pub mod route_station;

pub use route::*;
pub use route_station::*;
