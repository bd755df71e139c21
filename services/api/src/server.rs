use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryApplicationLog, InMemoryProfileRepository, InMemoryRepaymentLedger,
};
use crate::routes::with_lending_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use creditrust::config::AppConfig;
use creditrust::engine::risk::RiskAnalyzer;
use creditrust::engine::scoring::ScoringModel;
use creditrust::error::AppError;
use creditrust::lending::LendingService;
use creditrust::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profiles = Arc::new(InMemoryProfileRepository::default());
    let applications = Arc::new(InMemoryApplicationLog::default());
    let ledger = Arc::new(InMemoryRepaymentLedger::default());
    let lending_service = Arc::new(LendingService::new(
        profiles,
        applications,
        ledger,
        ScoringModel::standard(),
        RiskAnalyzer::default(),
    ));

    let app = with_lending_routes(lending_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credit scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
