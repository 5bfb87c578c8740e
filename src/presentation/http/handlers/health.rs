//! Health Check Handlers
//!
//! - `GET /health` - static status and version
//! - `GET /health/live` - the process is serving requests
//! - `GET /health/ready` - PostgreSQL answers; 503 otherwise

use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use sqlx::PgPool;

use crate::infrastructure::database;
use crate::startup::AppState;

static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Queries slower than this mark the database as degraded.
const SLOW_PING: Duration = Duration::from_millis(100);

/// Pin the uptime clock to process start.
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn http_status(self) -> StatusCode {
        match self {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Readiness report
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub database: DatabaseHealth,
}

/// Database probe result
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    pub pool_size: u32,
    pub idle_connections: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let database = probe_database(&state.db).await;
    database::record_pool_stats(&state.db, state.settings.database.max_connections);

    let response = ReadinessResponse {
        status: database.status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        started_at: SERVER_START_TIME.to_rfc3339(),
        checks: ReadinessChecks { database },
    };

    (response.status.http_status(), Json(response))
}

async fn probe_database(pool: &PgPool) -> DatabaseHealth {
    let start = Instant::now();
    let outcome = sqlx::query("SELECT 1").execute(pool).await;
    let elapsed = start.elapsed();

    let (status, latency_ms, message) = match outcome {
        Ok(_) => (ping_status(elapsed), Some(elapsed.as_millis() as u64), None),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe could not reach the database");
            (
                HealthStatus::Unhealthy,
                None,
                Some(format!("Database connection failed: {}", e)),
            )
        }
    };

    DatabaseHealth {
        status,
        latency_ms,
        pool_size: pool.size(),
        idle_connections: pool.num_idle(),
        message,
    }
}

fn ping_status(elapsed: Duration) -> HealthStatus {
    if elapsed < SLOW_PING {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    }
}
