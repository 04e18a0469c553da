use anyhow::Result;
use powerplant_dispatch::{api, config, optimizer::ProductionPlanner, state::AppState, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cfg = Config::load()?;
    init_tracing(&cfg.telemetry);

    let app_state = AppState::new(ProductionPlanner::default());

    let app = api::router(app_state, &cfg);

    #[cfg(feature = "swagger")]
    let app = api::with_swagger(app);

    #[cfg(feature = "metrics")]
    let app = api::with_metrics(app);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            Bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    info!(%addr, "starting powerplant dispatch API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
