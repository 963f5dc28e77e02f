//! Health checks
//!
//! Liveness is unconditional. Readiness exercises the document store and
//! reports per-component status. Reports are cached briefly so aggressive
//! probes cannot stampede the store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use nestor_core::Document;
use nestor_models::Project;
use nestor_store::DocumentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub name: &'static str,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Overall health report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Cache duration for health results
    pub cache_duration: Duration,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            cache_duration: Duration::from_secs(10),
        }
    }
}

struct CachedHealth {
    report: HealthReport,
    cached_at: Instant,
}

/// Health checker over the mounted store and report engine
pub struct HealthChecker {
    config: HealthConfig,
    start_time: Instant,
    cache: RwLock<Option<CachedHealth>>,
    store: Arc<dyn DocumentStore>,
    engine_name: &'static str,
}

impl HealthChecker {
    pub fn new(
        config: HealthConfig,
        store: Arc<dyn DocumentStore>,
        engine_name: &'static str,
    ) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            cache: RwLock::new(None),
            store,
            engine_name,
        }
    }

    /// Get cached health or perform checks
    pub async fn check(&self) -> HealthReport {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.cached_at.elapsed() < self.config.cache_duration {
                    debug!("returning cached health report");
                    return cached.report.clone();
                }
            }
        }

        let report = self.perform_checks().await;

        {
            let mut cache = self.cache.write().await;
            *cache = Some(CachedHealth {
                report: report.clone(),
                cached_at: Instant::now(),
            });
        }

        report
    }

    async fn perform_checks(&self) -> HealthReport {
        let store_health = self.check_store().await;
        let status = store_health.status;

        let engine_health = ComponentHealth {
            name: "reportEngine",
            status: HealthStatus::Healthy,
            message: Some(format!("{} mounted", self.engine_name)),
            response_time_ms: 0,
        };

        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![store_health, engine_health],
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();

        match self.store.list(Project::COLLECTION).await {
            Ok(documents) => ComponentHealth {
                name: "store",
                status: HealthStatus::Healthy,
                message: Some(format!("{} projects", documents.len())),
                response_time_ms: start.elapsed().as_millis() as u64,
            },
            Err(err) => ComponentHealth {
                name: "store",
                status: HealthStatus::Unhealthy,
                message: Some(err.to_string()),
                response_time_ms: start.elapsed().as_millis() as u64,
            },
        }
    }
}

/// State for the operational endpoints
pub struct ServerState {
    pub health: Arc<HealthChecker>,
}

/// Simple liveness check
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness check, gated on the store
pub async fn readiness(State(state): State<Arc<ServerState>>) -> (StatusCode, Json<HealthReport>) {
    let report = state.health.check().await;
    let status = report.http_status();
    (status, Json(report))
}

/// Full health report
pub async fn full_report(
    State(state): State<Arc<ServerState>>,
) -> (StatusCode, Json<HealthReport>) {
    let report = state.health.check().await;
    let status = report.http_status();
    (status, Json(report))
}

/// Plain OK for load balancers
pub async fn default_health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_store::MemoryStore;

    fn checker() -> HealthChecker {
        HealthChecker::new(
            HealthConfig::default(),
            Arc::new(MemoryStore::new()),
            "template",
        )
    }

    #[tokio::test]
    async fn test_empty_store_is_healthy() {
        let report = checker().check().await;

        assert!(report.status.is_healthy());
        assert_eq!(report.components.len(), 2);
        assert_eq!(report.components[0].name, "store");
        assert_eq!(report.components[1].name, "reportEngine");
    }

    #[tokio::test]
    async fn test_health_cache() {
        let checker = HealthChecker::new(
            HealthConfig {
                cache_duration: Duration::from_secs(60),
            },
            Arc::new(MemoryStore::new()),
            "template",
        );

        let report1 = checker.check().await;
        let report2 = checker.check().await;

        assert_eq!(report1.timestamp, report2.timestamp);
    }

    #[test]
    fn test_health_status_http() {
        let report = HealthReport {
            status: HealthStatus::Unhealthy,
            version: "1.0",
            uptime_seconds: 100,
            components: vec![],
            timestamp: chrono::Utc::now(),
        };
        assert_eq!(report.http_status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
