use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use idsmoe_redirector::LookupError;
use jiff::Timestamp;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::model::HeartbeatResponse;
use crate::state::AppState;

pub async fn heartbeat_handler(State(state): State<AppState>) -> Result<Json<HeartbeatResponse>> {
    let requested_at = Timestamp::now();
    let started = Instant::now();

    let check_started = Instant::now();
    if let Err(e) = state.lookup().check_integrity().await {
        warn!(error = %e, "heartbeat integrity check failed");
        let message = match e {
            LookupError::DataCorruption(_) => "Data integrity check failed",
            LookupError::NotFound(_) | LookupError::Storage(_) => {
                "Redis data is corrupted or unavailable"
            }
        };
        return Err(AppError::internal(message));
    }
    let response_time = check_started.elapsed();

    Ok(Json(HeartbeatResponse {
        status: "OK".to_string(),
        code: StatusCode::OK.as_u16(),
        request_time: format!("{:.3}s", started.elapsed().as_secs_f64()),
        response_time: format!("{:.3}s", response_time.as_secs_f64()),
        request_epoch: requested_at.as_millisecond() as f64 / 1000.0,
    }))
}
