//! HTTP gateway for the tinylink URL shortener.
//!
//! Exposes `POST /create-short-url` and `GET /{short_code}` on top of any
//! [`Shortener`](tinylink_core::Shortener) implementation.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
