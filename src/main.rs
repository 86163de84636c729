use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use geocell::{
    sdk::config::{GeocoderArgs, GeocoderConfig},
    sdk::http::{build_router, AppState},
    sdk::resolver::{AddressQuery, CellQuery, CoordinateQuery},
    sdk::spatial::CellResolution,
    sdk::util::log::init_logging,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Resolve coordinates or addresses to H3 cell ids
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "GEOCELL_LOG", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Resolve a single query and print the result as JSON
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "GEOCELL_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen_addr: SocketAddr,

    #[command(flatten)]
    geocoder: GeocoderArgs,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["lat", "address"])))]
struct ResolveArgs {
    /// Latitude in degrees (requires --lng)
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in degrees (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,

    /// Free-text address to geocode
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    address: Option<String>,

    /// H3 resolution (0-15)
    #[arg(long, default_value_t = CellResolution::DEFAULT)]
    resolution: CellResolution,

    #[command(flatten)]
    geocoder: GeocoderArgs,
}

impl ResolveArgs {
    fn query(&self) -> Result<CellQuery> {
        let query: CellQuery = match (self.lat, self.lng, self.address.as_deref()) {
            (Some(lat), Some(lng), _) => CoordinateQuery::new(lat, lng, self.resolution)?.into(),
            (_, _, Some(address)) => AddressQuery::new(address, self.resolution)?.into(),
            _ => anyhow::bail!("either --address or both --lat and --lng are required"),
        };
        Ok(query)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env has to be loaded before clap reads the environment
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Resolve(args) => resolve(args).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let config = GeocoderConfig::try_from(args.geocoder)?;
    if config.api_key.is_none() {
        log::warn!("No geocoding API key configured; address queries will fail");
    }
    let resolver = config
        .build_resolver()
        .context("Failed to initialise geocoding client")?;
    let app = build_router(AppState::new(resolver));

    let listener = TcpListener::bind(args.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen_addr))?;
    log::info!(
        "Listening on {} (geocoder: {}, country: {:?})",
        args.listen_addr,
        config.base_url,
        config.country_filter
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn resolve(args: ResolveArgs) -> Result<()> {
    let query = args.query()?;
    let config = GeocoderConfig::try_from(args.geocoder)?;
    let resolver = config.build_resolver()?;

    let result = resolver.resolve(&query).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
