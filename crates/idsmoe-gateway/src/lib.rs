//! HTTP surface of the ids.moe anime ID mapper.
//!
//! [`App::router`] wires the lookup and redirect services into an axum
//! [`Router`](axum::Router). The `gateway` binary configures a store and
//! serves it.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use state::{AppState, Settings};
