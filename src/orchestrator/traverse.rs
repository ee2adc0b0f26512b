//! Relation traversal and aggregate snapshots
//!
//! `query_all_relations` walks the relation tree starting from the first
//! blog; `query_all_independent` lists all five record kinds flat. A
//! missing link during traversal (no blogs yet, blog vanished between
//! list and get) halts the walk and returns the partial report: an empty
//! backend is a legitimate state, not an error.

use crate::error::AppError;
use crate::graphql::types::{
    Blog, BlogWithPosts, Comment, Post, PostTag, PostWithRelations, Tag, TagWithPosts,
};
use futures_util::future::join_all;
use serde::Serialize;

use super::Orchestrator;

/// Result of one relation traversal
#[derive(Debug, Default, Serialize)]
pub struct RelationsReport {
    /// First blog with its nested posts, when any blog exists
    pub blog: Option<BlogWithPosts>,
    /// Each of the blog's posts with nested comments and tags
    pub posts: Vec<PostWithRelations>,
    /// Inverse lookup: first tag with its nested posts, when any tag exists
    pub tag: Option<TagWithPosts>,
}

/// Flat listing of every record of every kind
#[derive(Debug, Default, Serialize)]
pub struct RecordSnapshot {
    /// All blogs
    pub blogs: Vec<Blog>,
    /// All posts
    pub posts: Vec<Post>,
    /// All comments
    pub comments: Vec<Comment>,
    /// All tags
    pub tags: Vec<Tag>,
    /// All join records
    pub post_tags: Vec<PostTag>,
}

impl RecordSnapshot {
    /// True when no record of any kind exists
    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
            && self.posts.is_empty()
            && self.comments.is_empty()
            && self.tags.is_empty()
            && self.post_tags.is_empty()
    }
}

impl Orchestrator {
    /// Query all related records connected to the first blog
    ///
    /// Lists blogs, fetches the first one with its nested posts, fetches
    /// every nested post with its comments and tags, then demonstrates the
    /// inverse lookup by fetching the first tag with its nested posts. The
    /// per-post fetches are dispatched together and joined before the
    /// traversal continues.
    pub async fn query_all_relations(&self) -> Result<RelationsReport, AppError> {
        let blogs = self.list_blogs().await?;
        let Some(first) = blogs.into_iter().next() else {
            tracing::info!("No blogs exist; nothing to traverse");
            return Ok(RelationsReport::default());
        };

        let Some(blog) = self.get_blog(&first.id).await? else {
            tracing::warn!(blog_id = %first.id, "Listed blog is no longer present");
            return Ok(RelationsReport::default());
        };

        let post_ids: Vec<String> = blog
            .posts
            .items
            .iter()
            .flatten()
            .map(|post| post.id.clone())
            .collect();

        let fetches = post_ids.iter().map(|id| self.get_post(id));
        let posts: Vec<PostWithRelations> = join_all(fetches)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();

        // Inverse post/tag retrieval
        let tags = self.list_tags().await?;
        let tag = match tags.first() {
            Some(first_tag) => self.get_tag(&first_tag.id).await?,
            None => None,
        };

        tracing::info!(
            blog_id = %blog.id,
            posts = posts.len(),
            inverse_tag = tag.is_some(),
            "Relation traversal complete"
        );

        Ok(RelationsReport {
            blog: Some(blog),
            posts,
            tag,
        })
    }

    /// List all five record kinds independent of their relations
    ///
    /// The five lists run serially; the snapshot is the union of their
    /// results at the time each list call completed.
    pub async fn query_all_independent(&self) -> Result<RecordSnapshot, AppError> {
        let blogs = self.list_blogs().await?;
        let posts = self.list_posts().await?;
        let comments = self.list_comments().await?;
        let tags = self.list_tags().await?;
        let post_tags = self.list_post_tags().await?;

        let snapshot = RecordSnapshot {
            blogs,
            posts,
            comments,
            tags,
            post_tags,
        };

        tracing::info!(
            blogs = snapshot.blogs.len(),
            posts = snapshot.posts.len(),
            comments = snapshot.comments.len(),
            tags = snapshot.tags.len(),
            post_tags = snapshot.post_tags.len(),
            "Collected record snapshot"
        );

        Ok(snapshot)
    }
}
