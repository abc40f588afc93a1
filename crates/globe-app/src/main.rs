mod app_state;
mod cli;

use globe_config::GlobeAppConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

/// Fold command-line overrides into the loaded config.
fn apply_overrides(config: &mut GlobeAppConfig, args: &cli::Args) {
    if let Some(ref room) = args.room {
        config.presence.room = room.clone();
    }
    if let Some(ref host) = args.host {
        config.presence.host = host.clone();
    }
    if args.headless {
        config.render.headless = true;
    }
}

/// `RUST_LOG` wins, then `--log-level`, then the config's level.
fn log_directive<'a>(
    rust_log: Option<&'a str>,
    cli_level: Option<&'a str>,
    config_level: Option<&'a str>,
) -> &'a str {
    rust_log
        .or(cli_level)
        .or(config_level)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("info")
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() {
    let args = cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok().filter(|v| !v.trim().is_empty());
    let (filter, filter_handle) = reload::Layer::new(build_filter(log_directive(
        rust_log.as_deref(),
        args.log_level.as_deref(),
        None,
    )));
    // Logs go to stderr; stdout belongs to the globe.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Visitor globe v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = globe_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GlobeAppConfig::default()
    });

    if rust_log.is_none() && args.log_level.is_none() {
        let directive = config.logging.level.as_filter();
        if let Err(e) = filter_handle.reload(build_filter(directive)) {
            tracing::warn!("Failed to apply config log level: {e}");
        }
    }

    apply_overrides(&mut config, &args);
    tracing::info!(
        host = %config.presence.host,
        room = %config.presence.room,
        headless = config.render.headless,
        "Config loaded"
    );

    if args.print_config {
        println!("{}", globe_config::config_to_json(&config));
        return;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(app_state::run(config)) {
        tracing::error!("Globe stopped: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn overrides_replace_config_values() {
        let args = cli::Args::parse_from([
            "visitor-globe",
            "--room",
            "landing",
            "--host",
            "relay.local:8080",
            "--headless",
        ]);
        let mut config = GlobeAppConfig::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.presence.room, "landing");
        assert_eq!(config.presence.host, "relay.local:8080");
        assert!(config.render.headless);
    }

    #[test]
    fn rust_log_beats_cli_and_config() {
        assert_eq!(log_directive(Some("debug"), Some("warn"), Some("error")), "debug");
        assert_eq!(log_directive(None, Some("warn"), Some("error")), "warn");
        assert_eq!(log_directive(None, None, Some("error")), "error");
        assert_eq!(log_directive(None, None, None), "info");
    }

    #[test]
    fn env_directive_keeps_its_level() {
        let filter = build_filter(log_directive(Some("debug"), None, Some("info")));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn bad_directive_falls_back_to_info() {
        assert_eq!(build_filter("globe=loud").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn missing_overrides_keep_config() {
        let args = cli::Args::parse_from(["visitor-globe"]);
        let mut config = GlobeAppConfig::default();
        config.presence.room = "custom".into();
        apply_overrides(&mut config, &args);
        assert_eq!(config.presence.room, "custom");
        assert!(!config.render.headless);
    }
}
