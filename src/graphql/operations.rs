//! GraphQL operation documents
//!
//! The named query/mutation documents for the five record kinds, mirroring
//! the managed backend's schema. Every mutation takes a single `input`
//! variable; every get takes an `id`. The get documents select the nested
//! child collections; the list documents are flat.

/// A named GraphQL document ready to be executed
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Field name of the operation in the schema (e.g., "createBlog").
    /// Also the key under which the result appears in the response `data`.
    pub name: &'static str,
    /// The full GraphQL document source
    pub document: &'static str,
}

/// Create a Blog
pub const CREATE_BLOG: Operation = Operation {
    name: "createBlog",
    document: r#"
        mutation CreateBlog($input: CreateBlogInput!) {
            createBlog(input: $input) {
                id
                name
            }
        }
    "#,
};

/// Create a Post under a Blog
pub const CREATE_POST: Operation = Operation {
    name: "createPost",
    document: r#"
        mutation CreatePost($input: CreatePostInput!) {
            createPost(input: $input) {
                id
                title
                blogId
            }
        }
    "#,
};

/// Create a Comment under a Post
pub const CREATE_COMMENT: Operation = Operation {
    name: "createComment",
    document: r#"
        mutation CreateComment($input: CreateCommentInput!) {
            createComment(input: $input) {
                id
                content
                postId
            }
        }
    "#,
};

/// Create a Tag
pub const CREATE_TAG: Operation = Operation {
    name: "createTag",
    document: r#"
        mutation CreateTag($input: CreateTagInput!) {
            createTag(input: $input) {
                id
                label
            }
        }
    "#,
};

/// Create a PostTag join record connecting a Post and a Tag
pub const CREATE_POST_TAGS: Operation = Operation {
    name: "createPostTags",
    document: r#"
        mutation CreatePostTags($input: CreatePostTagsInput!) {
            createPostTags(input: $input) {
                id
                postId
                tagId
            }
        }
    "#,
};

/// Get a Blog together with its nested Posts
pub const GET_BLOG: Operation = Operation {
    name: "getBlog",
    document: r#"
        query GetBlog($id: ID!) {
            getBlog(id: $id) {
                id
                name
                posts {
                    items {
                        id
                        title
                    }
                }
            }
        }
    "#,
};

/// Get a Post together with its nested Comments and Tags
pub const GET_POST: Operation = Operation {
    name: "getPost",
    document: r#"
        query GetPost($id: ID!) {
            getPost(id: $id) {
                id
                title
                comments {
                    items {
                        id
                        content
                        postId
                    }
                }
                tags {
                    items {
                        id
                        tag {
                            id
                            label
                        }
                    }
                }
            }
        }
    "#,
};

/// Get a Tag together with its nested Posts (inverse lookup through the join)
pub const GET_TAG: Operation = Operation {
    name: "getTag",
    document: r#"
        query GetTag($id: ID!) {
            getTag(id: $id) {
                id
                label
                posts {
                    items {
                        id
                        post {
                            id
                            title
                        }
                    }
                }
            }
        }
    "#,
};

/// List all Blogs (flat, no nested relations)
pub const LIST_BLOGS: Operation = Operation {
    name: "listBlogs",
    document: r#"
        query ListBlogs {
            listBlogs {
                items {
                    id
                    name
                }
            }
        }
    "#,
};

/// List all Posts (flat)
pub const LIST_POSTS: Operation = Operation {
    name: "listPosts",
    document: r#"
        query ListPosts {
            listPosts {
                items {
                    id
                    title
                    blogId
                }
            }
        }
    "#,
};

/// List all Comments (flat)
pub const LIST_COMMENTS: Operation = Operation {
    name: "listComments",
    document: r#"
        query ListComments {
            listComments {
                items {
                    id
                    content
                    postId
                }
            }
        }
    "#,
};

/// List all Tags (flat)
pub const LIST_TAGS: Operation = Operation {
    name: "listTags",
    document: r#"
        query ListTags {
            listTags {
                items {
                    id
                    label
                }
            }
        }
    "#,
};

/// List all PostTag join records (flat)
pub const LIST_POST_TAGS: Operation = Operation {
    name: "listPostTags",
    document: r#"
        query ListPostTags {
            listPostTags {
                items {
                    id
                    postId
                    tagId
                }
            }
        }
    "#,
};

/// Delete a Blog by id
pub const DELETE_BLOG: Operation = Operation {
    name: "deleteBlog",
    document: r#"
        mutation DeleteBlog($input: DeleteBlogInput!) {
            deleteBlog(input: $input) {
                id
            }
        }
    "#,
};

/// Delete a Post by id
pub const DELETE_POST: Operation = Operation {
    name: "deletePost",
    document: r#"
        mutation DeletePost($input: DeletePostInput!) {
            deletePost(input: $input) {
                id
            }
        }
    "#,
};

/// Delete a Comment by id
pub const DELETE_COMMENT: Operation = Operation {
    name: "deleteComment",
    document: r#"
        mutation DeleteComment($input: DeleteCommentInput!) {
            deleteComment(input: $input) {
                id
            }
        }
    "#,
};

/// Delete a Tag by id
pub const DELETE_TAG: Operation = Operation {
    name: "deleteTag",
    document: r#"
        mutation DeleteTag($input: DeleteTagInput!) {
            deleteTag(input: $input) {
                id
            }
        }
    "#,
};

/// Delete a PostTag join record by id
pub const DELETE_POST_TAGS: Operation = Operation {
    name: "deletePostTags",
    document: r#"
        mutation DeletePostTags($input: DeletePostTagsInput!) {
            deletePostTags(input: $input) {
                id
            }
        }
    "#,
};
