use std::path::PathBuf;

use clap::Parser;

/// Visitor globe: a spinning globe with a marker for everyone online.
#[derive(Parser, Debug)]
#[command(name = "visitor-globe", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Presence room to join.
    #[arg(long)]
    pub room: Option<String>,

    /// Presence relay host, e.g. `globe.example.com` or `localhost:1999`.
    #[arg(long)]
    pub host: Option<String>,

    /// Draw nothing; only track visitors.
    #[arg(long)]
    pub headless: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "visitor-globe",
            "--room",
            "landing",
            "--host",
            "globe.example.com",
            "--headless",
        ]);
        assert_eq!(args.room.as_deref(), Some("landing"));
        assert_eq!(args.host.as_deref(), Some("globe.example.com"));
        assert!(args.headless);
        assert!(args.config.is_none());
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::parse_from(["visitor-globe"]);
        assert!(args.room.is_none());
        assert!(!args.headless);
        assert!(!args.print_config);
    }
}
