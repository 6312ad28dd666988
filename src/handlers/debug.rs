use axum::{extract::State, Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

use crate::{db, middleware::RequestId, AppState};

#[derive(Serialize)]
pub struct DebugInfo {
    pub version: String,
    pub git_sha: String,
    pub environment: String,
    pub request_id: String,
    pub uptime_seconds: u64,
    pub database_status: String,
    pub database_connections: u32,
    pub timestamp: u64,
}

/// Handler for the /debug endpoint. Echoes the request id so header
/// propagation can be checked from a browser.
pub async fn debug_handler(
    State(state): State<Arc<AppState>>,
    Extension(RequestId(request_id)): Extension<RequestId>,
) -> Json<DebugInfo> {
    let database_status = if db::check_connection(&state.db).await {
        "connected".to_string()
    } else {
        "unreachable".to_string()
    };

    let info = DebugInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_sha: option_env!("GIT_SHA").unwrap_or("unknown").to_string(),
        environment: std::env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string()),
        request_id,
        uptime_seconds: state.started_at.elapsed().as_secs(),
        database_status,
        database_connections: state.db.size(),
        timestamp: SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_secs(),
    };

    Json(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppConfig, MetricsState};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use sqlx::postgres::PgPoolOptions;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn debug_payload_echoes_the_request_id() {
        // Port 1 never hosts Postgres; the short acquire timeout keeps the
        // connectivity check quick.
        let db = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(2))
            .connect_lazy("postgres://127.0.0.1:1/unused")
            .unwrap();

        let state = Arc::new(AppState {
            db,
            config: AppConfig {
                database_url: "postgres://127.0.0.1:1/unused".to_string(),
                port: 8080,
                cors_origin: "http://localhost:3000".to_string(),
            },
            metrics: Arc::new(MetricsState {
                handle: PrometheusBuilder::new().build_recorder().handle(),
            }),
            started_at: Instant::now(),
        });

        let id = "client-supplied-id".to_string();
        let Json(info) = debug_handler(State(state), Extension(RequestId(id.clone()))).await;

        assert_eq!(info.request_id, id);
        assert_eq!(info.database_status, "unreachable");
    }
}
