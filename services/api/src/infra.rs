use fitment::config::AppConfig;
use fitment::CompatibilityEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_engine(config: &AppConfig) -> Arc<CompatibilityEngine> {
    Arc::new(CompatibilityEngine::new(config.engine.clone()))
}
