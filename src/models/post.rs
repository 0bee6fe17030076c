//! Post models for the square feed.

use serde::{Deserialize, Serialize};

use crate::utils::format::format_relative_time;

/// A published post as returned by the list and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub cover_img: Option<String>,
    pub pub_date: Option<String>,
    /// Author display name; the list endpoint joins it in.
    pub nickname: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    /// Whether the requesting user has liked this post.
    #[serde(default)]
    pub is_liked: bool,
}

impl Post {
    /// Publication time rendered relative to now ("3 hours ago").
    pub fn display_pub_date(&self) -> String {
        match self.pub_date {
            Some(ref date) => format_relative_time(date),
            None => String::new(),
        }
    }
}

/// One page of the post list.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PostPage {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub list: Vec<Post>,
}

/// Body for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    /// Cover image URL; the backend expects the field even when empty.
    pub cover_img: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            cover_img: String::new(),
        }
    }

    pub fn with_cover(mut self, cover_img: impl Into<String>) -> Self {
        self.cover_img = cover_img.into();
        self
    }
}
