use clap::Parser;
use p20_pvw::utils::logger;
use p20_pvw::{CliConfig, FixtureClient, LoggingHost, P20Instance};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting p20-pvw standalone runner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                p20_pvw::utils::error::ErrorSeverity::Low => 0,
                p20_pvw::utils::error::ErrorSeverity::Medium => 2,
                p20_pvw::utils::error::ErrorSeverity::High => 1,
                p20_pvw::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    tracing::info!(
        "Device {}:{}, poll interval {}ms",
        config.host,
        config.port,
        config.poll_interval_ms
    );

    let instance = P20Instance::new(FixtureClient::new(), LoggingHost::new());
    instance.init(config).await?;

    let screens = instance.screens().await;
    let inputs = instance.inputs().await;
    let layers = instance.pvw_layers().await;
    tracing::info!(
        "✅ Module up: {} screen(s), {} input(s), {} PVW layer(s)",
        screens.len(),
        inputs.len(),
        layers.len()
    );
    tracing::info!("Press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;

    instance.destroy().await?;
    tracing::info!("👋 Stopped");
    Ok(())
}
