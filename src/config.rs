use std::path::PathBuf;

use clap::Parser;

use crate::queries::EveningQuery;

/// Builds a route container, snapshots it to disk, restores it and looks up evening routes.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Config {
    /// Snapshot file, overwritten on every run
    #[arg(long, env = "ROUTES_FILE", default_value = "routes.ser")]
    pub file: PathBuf,

    /// Station the evening lookup searches for, compared case-insensitively
    #[arg(long, env = "EVENING_STATION", default_value = "Харків'")]
    pub station: String,

    /// Earliest departure, zero-padded HH:MM
    #[arg(long, env = "EVENING_AFTER", default_value = "18:00")]
    pub after: String,
}

impl Config {
    pub fn evening_query(&self) -> EveningQuery {
        EveningQuery {
            station: self.station.clone(),
            after: self.after.clone(),
            ..EveningQuery::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["route_container"]);

        // env vars can override the defaults, only check what they can't touch
        let query = config.evening_query();
        assert_eq!(query.days, ["Monday", "Friday"]);
        assert_eq!(query.station, config.station);
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from([
            "route_container",
            "--file",
            "/tmp/other.ser",
            "--station",
            "Київ",
            "--after",
            "20:30",
        ]);

        assert_eq!(config.file.to_str(), Some("/tmp/other.ser"));

        let query = config.evening_query();
        assert_eq!(query.station, "Київ");
        assert_eq!(query.after, "20:30");
    }
}
