use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use route_container::config::Config;
use route_container::container::{Container, process_container};
use route_container::model::{Route, demo_routes};
use route_container::persistence::{load_container, save_container};
use route_container::queries::print_evening_routes;
use std::io::{Write, stdout};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> Result<()> {
    _ = dotenv();
    let config = Config::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let appender = tracing_appender::rolling::daily("./logs", "route_container.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);

    // A layer that logs events to rolling files.
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .pretty();

    Registry::default().with(file_log).with(env_filter).init();

    info!("{config:?}");

    let mut out = stdout().lock();

    let route_container: Container<Route> = demo_routes().into_iter().collect();
    process_container(&route_container, &mut out)?;

    save_container(&config.file, &route_container)
        .with_context(|| format!("saving routes to {}", config.file.display()))?;
    writeln!(out, "Route data saved to {}", config.file.display())?;

    let restored_container = load_container(&config.file)
        .with_context(|| format!("restoring routes from {}", config.file.display()))?;
    writeln!(out, "Route data restored from {}", config.file.display())?;
    process_container(&restored_container, &mut out)?;

    if restored_container != route_container {
        warn!("restored routes differ from the saved ones");
    }

    print_evening_routes(&route_container, &config.evening_query(), &mut out)?;

    Ok(())
}
