//! # nestor-api
//!
//! The HTTP surface: REST routes over the service layer, camelCase JSON
//! on the wire, errors mapped onto conventional status codes. The router
//! is state-generic so the binary decides which store and report engine
//! to mount.

pub mod avatar;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
