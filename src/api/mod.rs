//! HTTP client module for the Square API.
//!
//! `ApiClient` wraps every outbound call in a single pipeline: session-token
//! decoration, transport-status classification, and response-envelope
//! classification, with a single-flight recovery sequence for expired
//! sessions. Endpoint wrappers live in `square` and `user`.

pub mod client;
pub mod error;
pub mod hooks;
pub mod square;
pub mod user;

pub use client::{ApiClient, ClientContext};
pub use error::{ApiError, FALLBACK_MESSAGE, SESSION_EXPIRED_MESSAGE};
pub use hooks::{LogNavigator, LogNotifier, Navigator, Notifier};
