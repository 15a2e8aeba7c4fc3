use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use citizen_services::auth::SessionAuthenticator;
use citizen_services::config::AppConfig;
use citizen_services::eligibility::EligibilityService;
use citizen_services::error::AppError;
use citizen_services::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(&config.catalog)?);
    let eligibility_service = Arc::new(EligibilityService::new(catalog.clone(), catalog.clone()));
    let authenticator = Arc::new(SessionAuthenticator::new(&config.auth));

    let app = with_eligibility_routes(eligibility_service, authenticator)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        citizens = catalog.users().len(),
        schemes = catalog.schemes().len(),
        "citizen services api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
