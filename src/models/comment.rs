//! Comment models for posts on the square.

use serde::{Deserialize, Serialize};

/// A comment on a post, possibly a reply to another comment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub content: String,
    pub nickname: Option<String>,
    pub created_at: Option<String>,
}

impl Comment {
    /// True when this comment replies to another comment rather than the post.
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Body for adding a comment.
///
/// `parent_id` is left out of the serialized body entirely for top-level
/// comments; the backend treats a missing field and a present one
/// differently, so it is never sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub post_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl NewComment {
    pub fn new(post_id: i64, content: impl Into<String>) -> Self {
        Self {
            post_id,
            content: content.into(),
            parent_id: None,
        }
    }

    pub fn reply_to(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_comment_omits_parent_id() {
        let body = serde_json::to_value(NewComment::new(5, "nice post")).unwrap();
        assert!(body.get("parent_id").is_none());
        assert_eq!(body["post_id"], 5);
    }

    #[test]
    fn test_reply_carries_parent_id_as_number() {
        let body = serde_json::to_value(NewComment::new(5, "agreed").reply_to(12)).unwrap();
        assert_eq!(body["parent_id"], 12);
    }

    #[test]
    fn test_is_reply() {
        let comment: Comment =
            serde_json::from_str(r#"{"id": 1, "post_id": 5, "parent_id": 3, "content": "hi"}"#)
                .unwrap();
        assert!(comment.is_reply());

        let top: Comment =
            serde_json::from_str(r#"{"id": 2, "post_id": 5, "parent_id": null, "content": "yo"}"#)
                .unwrap();
        assert!(!top.is_reply());
    }
}
