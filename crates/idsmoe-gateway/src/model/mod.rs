mod error;
mod health;

pub use error::ErrorResponse;
pub use health::HeartbeatResponse;
