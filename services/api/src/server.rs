use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryJobRepository};
use crate::routes::with_job_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_board::config::AppConfig;
use job_board::error::AppError;
use job_board::jobs::{import, JobDirectoryService, JobRepository};
use job_board::telemetry;
use std::path::Path;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryJobRepository::default());
    let service = Arc::new(JobDirectoryService::new(repository));

    // The --seed flag wins over APP_SEED_FIXTURE.
    if let Some(path) = args.seed.take().or_else(|| config.seed_fixture.take()) {
        let loaded = preload(&service, &path)?;
        info!(%loaded, fixture = %path.display(), "preloaded postings from fixture");
    }

    let app = with_job_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job posting directory ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Run every fixture row through the service so each posting gets a
/// freshly derived status rather than whatever the file claims.
fn preload<R>(service: &JobDirectoryService<R>, path: &Path) -> Result<usize, AppError>
where
    R: JobRepository + 'static,
{
    let drafts = import::drafts_from_path(path)?;
    let count = drafts.len();
    for draft in drafts {
        service.create(draft)?;
    }
    Ok(count)
}
