//! Thin HTTP layer for the mind-map front end
//!
//! One POST endpoint runs the build pipeline, one GET endpoint reports
//! process status, and the embedded index page exercises both. All
//! engine-level failure handling happens below this layer; the only error
//! that surfaces here is an empty word list, as HTTP 400.

pub mod handler;
pub mod server;

pub use server::{AppState, HttpServer, ServerConfig};
