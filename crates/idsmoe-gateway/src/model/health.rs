use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HeartbeatResponse {
    pub status: String,
    pub code: u16,
    /// Seconds spent handling the request, e.g. `0.003s`.
    pub request_time: String,
    /// Seconds spent on the integrity check.
    pub response_time: String,
    /// Unix time the request arrived, with fractional seconds.
    pub request_epoch: f64,
}
