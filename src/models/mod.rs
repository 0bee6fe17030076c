//! Data models for square entities.
//!
//! This module contains the data structures exchanged with the Square API:
//!
//! - `Post`, `PostPage`, `NewPost`: feed posts and pagination
//! - `Comment`, `NewComment`: post comments and replies
//! - `UserProfile`: the signed-in user's profile

pub mod comment;
pub mod post;
pub mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post, PostPage};
pub use user::{UserProfile, ADMIN_ROLE, DEFAULT_ROLE};
