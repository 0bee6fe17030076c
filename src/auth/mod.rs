//! Authentication module for the persisted user session.
//!
//! `Session` holds the auth token and the cached user profile, persists
//! both to disk on every mutation, and loads them back at startup so a
//! session survives a client restart.

pub mod session;

pub use session::{Session, SessionData};
