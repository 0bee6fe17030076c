//! Client library for the Square social API.
//!
//! The crate has two core pieces plus supporting glue:
//!
//! - [`auth::Session`]: the persisted session store - auth token and user
//!   profile, written to disk on every mutation and loaded at startup.
//! - [`api::ApiClient`]: the shared HTTP client - attaches the session
//!   token to every request, classifies response envelopes into
//!   success/failure, and runs the single-flight session-expiry recovery
//!   sequence (one notification, one token clear, one login redirect per
//!   expiry episode, however many requests fail concurrently).
//!
//! Endpoint wrappers for the square feature (posts, comments, likes) and
//! the user-info endpoint live in [`api::square`] and [`api::user`];
//! display formatting lives in [`utils`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use square_client::{ApiClient, ClientContext, Config, Session};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let mut session = Session::new(config.data_dir()?);
//! session.load()?;
//!
//! let ctx = Arc::new(ClientContext::with_defaults(session));
//! let client = ApiClient::from_config(&config, ctx)?;
//!
//! let page = client.get_post_list(1, 10).await?;
//! for post in &page.list {
//!     println!("{} ({})", post.title, post.display_pub_date());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError, ClientContext, Navigator, Notifier};
pub use auth::Session;
pub use config::Config;
pub use models::{Comment, NewComment, NewPost, Post, PostPage, UserProfile};
