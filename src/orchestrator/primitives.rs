//! Orchestrator primitives
//!
//! One typed wrapper per remote operation. Each wrapper builds the
//! operation variables, executes the round trip through the injected
//! client, deserializes the response envelope, and logs the step result.
//! The higher-level sequences in `seed`, `traverse`, and `teardown` are
//! composed entirely from these building blocks.

use crate::error::AppError;
use crate::graphql::operations::{self, Operation};
use crate::graphql::types::{
    Blog, BlogWithPosts, Comment, CreateBlogData, CreateBlogInput, CreateCommentData,
    CreateCommentInput, CreatePostData, CreatePostInput, CreatePostTagsData, CreatePostTagsInput,
    CreateTagData, CreateTagInput, DeleteRecordInput, GetBlogData, GetPostData, GetTagData,
    ListBlogsData, ListCommentsData, ListPostTagsData, ListPostsData, ListTagsData, Post, PostTag,
    PostWithRelations, RecordKind, Tag, TagWithPosts,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::Orchestrator;

impl Orchestrator {
    /// Execute an operation and deserialize its `data` object
    async fn execute_as<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: serde_json::Value,
    ) -> Result<T, AppError> {
        let data = self.api.execute(operation, variables).await?;
        serde_json::from_value(data).map_err(|e| AppError::MalformedResponse {
            operation: operation.name,
            detail: format!("unexpected data shape: {}", e),
        })
    }

    pub(crate) async fn create_blog(&self, name: &str) -> Result<Blog, AppError> {
        let data: CreateBlogData = self
            .execute_as(
                &operations::CREATE_BLOG,
                json!({ "input": CreateBlogInput { name } }),
            )
            .await?;
        let blog = data.create_blog.ok_or(AppError::MissingIdentifier {
            kind: RecordKind::Blog,
            operation: operations::CREATE_BLOG.name,
        })?;
        tracing::info!(blog_id = %blog.id, name = %blog.name, "Created blog");
        Ok(blog)
    }

    pub(crate) async fn create_post(&self, blog_id: &str, title: &str) -> Result<Post, AppError> {
        let data: CreatePostData = self
            .execute_as(
                &operations::CREATE_POST,
                json!({ "input": CreatePostInput { title, blog_id } }),
            )
            .await?;
        let post = data.create_post.ok_or(AppError::MissingIdentifier {
            kind: RecordKind::Post,
            operation: operations::CREATE_POST.name,
        })?;
        tracing::info!(post_id = %post.id, blog_id = %blog_id, "Created post");
        Ok(post)
    }

    pub(crate) async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<Comment, AppError> {
        let data: CreateCommentData = self
            .execute_as(
                &operations::CREATE_COMMENT,
                json!({ "input": CreateCommentInput { content, post_id } }),
            )
            .await?;
        let comment = data.create_comment.ok_or(AppError::MissingIdentifier {
            kind: RecordKind::Comment,
            operation: operations::CREATE_COMMENT.name,
        })?;
        tracing::info!(comment_id = %comment.id, post_id = %post_id, "Created comment");
        Ok(comment)
    }

    pub(crate) async fn create_tag(&self, label: &str) -> Result<Tag, AppError> {
        let data: CreateTagData = self
            .execute_as(
                &operations::CREATE_TAG,
                json!({ "input": CreateTagInput { label } }),
            )
            .await?;
        let tag = data.create_tag.ok_or(AppError::MissingIdentifier {
            kind: RecordKind::Tag,
            operation: operations::CREATE_TAG.name,
        })?;
        tracing::info!(tag_id = %tag.id, label = %tag.label, "Created tag");
        Ok(tag)
    }

    pub(crate) async fn create_post_tag(
        &self,
        post_id: &str,
        tag_id: &str,
    ) -> Result<PostTag, AppError> {
        let data: CreatePostTagsData = self
            .execute_as(
                &operations::CREATE_POST_TAGS,
                json!({ "input": CreatePostTagsInput { post_id, tag_id } }),
            )
            .await?;
        let post_tag = data.create_post_tags.ok_or(AppError::MissingIdentifier {
            kind: RecordKind::PostTag,
            operation: operations::CREATE_POST_TAGS.name,
        })?;
        tracing::info!(
            post_tag_id = %post_tag.id,
            post_id = %post_id,
            tag_id = %tag_id,
            "Connected post and tag"
        );
        Ok(post_tag)
    }

    /// Get a blog with its nested posts; `None` when the blog no longer exists
    pub(crate) async fn get_blog(&self, id: &str) -> Result<Option<BlogWithPosts>, AppError> {
        let data: GetBlogData = self
            .execute_as(&operations::GET_BLOG, json!({ "id": id }))
            .await?;
        if let Some(blog) = &data.get_blog {
            tracing::info!(
                blog_id = %blog.id,
                posts = blog.posts.present_len(),
                "Fetched blog with nested posts"
            );
        }
        Ok(data.get_blog)
    }

    /// Get a post with its nested comments and tags
    pub(crate) async fn get_post(&self, id: &str) -> Result<Option<PostWithRelations>, AppError> {
        let data: GetPostData = self
            .execute_as(&operations::GET_POST, json!({ "id": id }))
            .await?;
        if let Some(post) = &data.get_post {
            tracing::info!(
                post_id = %post.id,
                comments = post.comments.present_len(),
                tags = post.tags.present_len(),
                "Fetched post with nested comments and tags"
            );
        }
        Ok(data.get_post)
    }

    /// Get a tag with its nested posts (inverse lookup through the join)
    pub(crate) async fn get_tag(&self, id: &str) -> Result<Option<TagWithPosts>, AppError> {
        let data: GetTagData = self
            .execute_as(&operations::GET_TAG, json!({ "id": id }))
            .await?;
        if let Some(tag) = &data.get_tag {
            tracing::info!(
                tag_id = %tag.id,
                posts = tag.posts.present_len(),
                "Fetched tag with nested posts"
            );
        }
        Ok(data.get_tag)
    }

    pub(crate) async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        let data: ListBlogsData = self
            .execute_as(&operations::LIST_BLOGS, json!({}))
            .await?;
        Ok(data.list_blogs.unwrap_or_default().into_present())
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let data: ListPostsData = self
            .execute_as(&operations::LIST_POSTS, json!({}))
            .await?;
        Ok(data.list_posts.unwrap_or_default().into_present())
    }

    pub(crate) async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        let data: ListCommentsData = self
            .execute_as(&operations::LIST_COMMENTS, json!({}))
            .await?;
        Ok(data.list_comments.unwrap_or_default().into_present())
    }

    pub(crate) async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        let data: ListTagsData = self.execute_as(&operations::LIST_TAGS, json!({})).await?;
        Ok(data.list_tags.unwrap_or_default().into_present())
    }

    pub(crate) async fn list_post_tags(&self) -> Result<Vec<PostTag>, AppError> {
        let data: ListPostTagsData = self
            .execute_as(&operations::LIST_POST_TAGS, json!({}))
            .await?;
        Ok(data.list_post_tags.unwrap_or_default().into_present())
    }

    /// Delete one record by id through the given delete operation
    ///
    /// The response payload is not inspected: the backend echoes the deleted
    /// record, but nothing downstream depends on it.
    pub(crate) async fn delete_record(
        &self,
        operation: &Operation,
        id: &str,
    ) -> Result<(), AppError> {
        self.api
            .execute(operation, json!({ "input": DeleteRecordInput { id } }))
            .await?;
        tracing::info!(operation = operation.name, record_id = %id, "Deleted record");
        Ok(())
    }
}
