//! Endpoint wrappers for the square feature: posts, comments, likes.
//!
//! These are thin parameter-shaping methods; all classification and error
//! handling happens in the shared client pipeline.

use anyhow::Result;
use serde_json::json;

use crate::models::{Comment, NewComment, NewPost, Post, PostPage};

use super::ApiClient;

impl ApiClient {
    /// Publish a new post.
    pub async fn create_post(&self, post: &NewPost) -> Result<()> {
        self.post_unit("/my/square/post", post).await
    }

    /// Fetch one page of the post feed.
    pub async fn get_post_list(&self, page: u32, page_size: u32) -> Result<PostPage> {
        self.get_with_query(
            "/my/square/posts",
            &[("page", page), ("pageSize", page_size)],
        )
        .await
    }

    /// Fetch a single post with its full content.
    pub async fn get_post_detail(&self, id: i64) -> Result<Post> {
        self.get(&format!("/my/square/post/{}", id)).await
    }

    /// Delete one of the caller's posts.
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        self.post_unit("/my/square/post/delete", &json!({ "id": id })).await
    }

    /// Like a post.
    pub async fn like_post(&self, post_id: i64) -> Result<()> {
        self.post_unit("/my/square/like", &json!({ "post_id": post_id })).await
    }

    /// Remove a previous like.
    pub async fn unlike_post(&self, post_id: i64) -> Result<()> {
        self.post_unit("/my/square/unlike", &json!({ "post_id": post_id })).await
    }

    /// Add a comment. Replies set `parent_id` via [`NewComment::reply_to`];
    /// top-level comments send no `parent_id` field at all.
    pub async fn add_comment(&self, comment: &NewComment) -> Result<()> {
        self.post_unit("/my/square/comment", comment).await
    }

    /// Fetch all comments for a post.
    pub async fn get_comment_list(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get(&format!("/my/square/comments/{}", post_id)).await
    }

    /// Delete one of the caller's comments.
    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        self.post_unit("/my/square/comment/delete", &json!({ "id": id })).await
    }
}
