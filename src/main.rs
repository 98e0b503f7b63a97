use anyhow::Result;
use clap::Parser;
use storefront_cli::{
    cli::{args::Args, commands::CliApp},
    utils::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?.with_catalog_override(args.catalog.clone())?;

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let mut app = CliApp::new(config).map_err(|e| {
        tracing::error!("Failed to start storefront: {:#}", e);
        e
    })?;
    app.run(args.command)
}
