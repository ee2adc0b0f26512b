//! GraphQL wire types
//!
//! Structs that mirror the managed backend's JSON request and response
//! shapes. Used to serialize operation variables and deserialize the
//! per-operation response envelopes into typed Rust structs.
//!
//! List and nested-collection results arrive as `{ "items": [...] }`
//! connections whose entries may individually be `null`; null entries are
//! skipped, never treated as errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One of the five record kinds the backend manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    /// A blog, the root of the relation tree
    Blog,
    /// A post belonging to a blog
    Post,
    /// A comment belonging to a post
    Comment,
    /// A tag, related to posts through the join record
    Tag,
    /// The many-to-many join record between posts and tags
    PostTag,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Blog => "Blog",
            RecordKind::Post => "Post",
            RecordKind::Comment => "Comment",
            RecordKind::Tag => "Tag",
            RecordKind::PostTag => "PostTag",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Transport envelope
// ---------------------------------------------------------------------------

/// Request body for one GraphQL round trip
#[derive(Serialize, Debug)]
pub struct GraphQlRequest<'a> {
    /// The GraphQL document source
    pub query: &'a str,
    /// Operation variables
    pub variables: Value,
}

/// Top-level GraphQL response envelope
#[derive(Deserialize, Debug)]
pub struct GraphQlResponse {
    /// Operation result keyed by operation name, absent on total failure
    #[serde(default)]
    pub data: Option<Value>,
    /// Errors reported by the endpoint, if any
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

/// One entry of a GraphQL `errors` payload
#[derive(Deserialize, Debug)]
pub struct GraphQlErrorEntry {
    /// Human-readable error message
    pub message: String,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A Blog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Unique identifier
    pub id: String,
    /// Blog name
    pub name: String,
}

/// A Post record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier
    pub id: String,
    /// Post title
    pub title: String,
    /// Identifier of the owning Blog
    #[serde(default)]
    pub blog_id: Option<String>,
}

/// A Comment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier
    pub id: String,
    /// Comment body
    pub content: String,
    /// Identifier of the owning Post
    #[serde(default)]
    pub post_id: Option<String>,
}

/// A Tag record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: String,
    /// Tag label
    pub label: String,
}

/// A PostTag join record connecting one Post and one Tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTag {
    /// Unique identifier of the join record itself
    pub id: String,
    /// Identifier of the joined Post
    #[serde(default)]
    pub post_id: Option<String>,
    /// Identifier of the joined Tag
    #[serde(default)]
    pub tag_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Connections and nested query shapes
// ---------------------------------------------------------------------------

/// A collection of records as returned by list queries and nested relations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConnection<T> {
    /// The items of the collection; individual entries may be null
    #[serde(default = "Vec::new")]
    pub items: Vec<Option<T>>,
}

impl<T> Default for ItemConnection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ItemConnection<T> {
    /// Consume the connection, dropping null entries
    pub fn into_present(self) -> Vec<T> {
        self.items.into_iter().flatten().collect()
    }

    /// Number of non-null entries
    pub fn present_len(&self) -> usize {
        self.items.iter().flatten().count()
    }
}

/// A Post as it appears inside a nested collection (id and title only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// Unique identifier
    pub id: String,
    /// Post title
    pub title: String,
}

/// A Blog together with its nested Posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogWithPosts {
    /// Unique identifier
    pub id: String,
    /// Blog name
    pub name: String,
    /// Posts belonging to this blog
    #[serde(default)]
    pub posts: ItemConnection<PostSummary>,
}

/// A join entry on a Post's `tags` collection, carrying the joined Tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachedTag {
    /// Identifier of the join record
    pub id: String,
    /// The joined Tag, if still present
    #[serde(default)]
    pub tag: Option<Tag>,
}

/// A join entry on a Tag's `posts` collection, carrying the joined Post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachedPost {
    /// Identifier of the join record
    pub id: String,
    /// The joined Post, if still present
    #[serde(default)]
    pub post: Option<PostSummary>,
}

/// A Post together with its nested Comments and Tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithRelations {
    /// Unique identifier
    pub id: String,
    /// Post title
    pub title: String,
    /// Comments belonging to this post
    #[serde(default)]
    pub comments: ItemConnection<Comment>,
    /// Tags joined to this post
    #[serde(default)]
    pub tags: ItemConnection<AttachedTag>,
}

/// A Tag together with its nested Posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagWithPosts {
    /// Unique identifier
    pub id: String,
    /// Tag label
    pub label: String,
    /// Posts joined to this tag
    #[serde(default)]
    pub posts: ItemConnection<AttachedPost>,
}

// ---------------------------------------------------------------------------
// Mutation inputs
// ---------------------------------------------------------------------------

/// Input for creating a Blog
#[derive(Serialize, Debug)]
pub struct CreateBlogInput<'a> {
    /// Blog name
    pub name: &'a str,
}

/// Input for creating a Post under a Blog
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput<'a> {
    /// Post title
    pub title: &'a str,
    /// Identifier of the owning Blog
    pub blog_id: &'a str,
}

/// Input for creating a Comment under a Post
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput<'a> {
    /// Comment body
    pub content: &'a str,
    /// Identifier of the owning Post
    pub post_id: &'a str,
}

/// Input for creating a Tag
#[derive(Serialize, Debug)]
pub struct CreateTagInput<'a> {
    /// Tag label
    pub label: &'a str,
}

/// Input for creating a PostTag join record
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostTagsInput<'a> {
    /// Identifier of the Post to join
    pub post_id: &'a str,
    /// Identifier of the Tag to join
    pub tag_id: &'a str,
}

/// Input for deleting any record by id (all delete inputs share this shape)
#[derive(Serialize, Debug)]
pub struct DeleteRecordInput<'a> {
    /// Identifier of the record to delete
    pub id: &'a str,
}

// ---------------------------------------------------------------------------
// Response envelopes (one per operation, keyed by operation name)
// ---------------------------------------------------------------------------

/// Response data for `createBlog`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogData {
    /// The created Blog, absent when the mutation returned nothing
    #[serde(default)]
    pub create_blog: Option<Blog>,
}

/// Response data for `createPost`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostData {
    /// The created Post, absent when the mutation returned nothing
    #[serde(default)]
    pub create_post: Option<Post>,
}

/// Response data for `createComment`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentData {
    /// The created Comment, absent when the mutation returned nothing
    #[serde(default)]
    pub create_comment: Option<Comment>,
}

/// Response data for `createTag`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagData {
    /// The created Tag, absent when the mutation returned nothing
    #[serde(default)]
    pub create_tag: Option<Tag>,
}

/// Response data for `createPostTags`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostTagsData {
    /// The created join record, absent when the mutation returned nothing
    #[serde(default)]
    pub create_post_tags: Option<PostTag>,
}

/// Response data for `getBlog`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetBlogData {
    /// The requested Blog with nested Posts, absent when not found
    #[serde(default)]
    pub get_blog: Option<BlogWithPosts>,
}

/// Response data for `getPost`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetPostData {
    /// The requested Post with nested Comments and Tags, absent when not found
    #[serde(default)]
    pub get_post: Option<PostWithRelations>,
}

/// Response data for `getTag`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetTagData {
    /// The requested Tag with nested Posts, absent when not found
    #[serde(default)]
    pub get_tag: Option<TagWithPosts>,
}

/// Response data for `listBlogs`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListBlogsData {
    /// All Blogs
    #[serde(default)]
    pub list_blogs: Option<ItemConnection<Blog>>,
}

/// Response data for `listPosts`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsData {
    /// All Posts
    #[serde(default)]
    pub list_posts: Option<ItemConnection<Post>>,
}

/// Response data for `listComments`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsData {
    /// All Comments
    #[serde(default)]
    pub list_comments: Option<ItemConnection<Comment>>,
}

/// Response data for `listTags`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsData {
    /// All Tags
    #[serde(default)]
    pub list_tags: Option<ItemConnection<Tag>>,
}

/// Response data for `listPostTags`
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListPostTagsData {
    /// All PostTag join records
    #[serde(default)]
    pub list_post_tags: Option<ItemConnection<PostTag>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn connection_skips_null_entries() {
        let data: ListBlogsData = serde_json::from_value(json!({
            "listBlogs": {
                "items": [
                    {"id": "b1", "name": "First"},
                    null,
                    {"id": "b2", "name": "Second"},
                ]
            }
        }))
        .unwrap();

        let blogs = data.list_blogs.unwrap_or_default().into_present();
        assert_eq!(blogs.len(), 2);
        assert_eq!(blogs[0].id, "b1");
        assert_eq!(blogs[1].id, "b2");
    }

    #[test]
    fn nested_post_tolerates_missing_collections() {
        let data: GetPostData = serde_json::from_value(json!({
            "getPost": {"id": "p1", "title": "Post 1"}
        }))
        .unwrap();

        let post = data.get_post.unwrap();
        assert_eq!(post.comments.present_len(), 0);
        assert_eq!(post.tags.present_len(), 0);
    }

    #[test]
    fn create_inputs_serialize_camel_case() {
        let input = CreatePostInput {
            title: "Post 1",
            blog_id: "b1",
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"title": "Post 1", "blogId": "b1"}));

        let join = CreatePostTagsInput {
            post_id: "p1",
            tag_id: "t1",
        };
        let value = serde_json::to_value(&join).unwrap();
        assert_eq!(value, json!({"postId": "p1", "tagId": "t1"}));
    }
}
