use citizen_services::catalog::InMemoryCatalog;
use citizen_services::config::CatalogConfig;
use citizen_services::error::AppError;
use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Which verdicts a ranking command prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum VerdictFilter {
    #[default]
    All,
    Eligible,
    Ineligible,
}

/// Seeded catalog, with its schemes replaced when a JSON catalog is configured.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<InMemoryCatalog, AppError> {
    let catalog = InMemoryCatalog::seeded();
    let Some(path) = config.schemes_path.as_ref() else {
        return Ok(catalog);
    };

    let catalog = catalog.with_schemes_from_path(path)?;
    info!(
        path = %path.display(),
        schemes = catalog.schemes().len(),
        "scheme catalog loaded"
    );
    Ok(catalog)
}
