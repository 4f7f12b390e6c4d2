use clap::Parser;

/// Command-line interface definition for hourbank
#[derive(Parser)]
#[command(
    name = "hourbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Overtime-hours tracker: log work sessions, withdraw banked minutes, serve the balance over REST",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db")]
    pub db: Option<String>,

    /// Override listen address (host:port)
    #[arg(long = "listen")]
    pub listen: Option<String>,
}
