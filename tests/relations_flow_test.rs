//! Integration tests for the relation orchestrator
//!
//! These tests drive the four top-level operations against a scripted stub
//! client and verify the exact sequence and argument shape of the remote
//! calls each operation issues:
//! 1. Seeding creates the full relation tree in dependency order
//! 2. A create result without a record aborts the sequence with a typed error
//! 3. Delete-all fans out one delete per record, children before parents
//! 4. Per-item delete failures never stop sibling or later deletions

use async_trait::async_trait;
use relations_demo::error::AppError;
use relations_demo::graphql::operations::Operation;
use relations_demo::graphql::types::RecordKind;
use relations_demo::graphql::GraphQlApi;
use relations_demo::orchestrator::Orchestrator;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Stub client with scripted per-operation responses
///
/// Records every call in order. Responses are queued per operation name;
/// when the queue for an operation is exhausted, the stub answers with
/// `{"<operation>": null}`, which reads as "nothing there" for every
/// operation kind.
#[derive(Default)]
struct ScriptedApi {
    calls: Mutex<Vec<(String, Value)>>,
    responses: Mutex<HashMap<&'static str, VecDeque<Result<Value, String>>>>,
}

impl ScriptedApi {
    fn new() -> Self {
        Self::default()
    }

    /// Queue a successful `data` payload for the named operation
    fn respond(&self, operation: &'static str, data: Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push_back(Ok(data));
    }

    /// Queue a failure for the named operation
    fn fail(&self, operation: &'static str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push_back(Err(message.to_string()));
    }

    fn call_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn call_variables(&self, index: usize) -> Value {
        self.calls.lock().unwrap()[index].1.clone()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphQlApi for ScriptedApi {
    async fn execute(&self, operation: &Operation, variables: Value) -> Result<Value, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.name.to_string(), variables));

        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get_mut(operation.name)
            .and_then(|queue| queue.pop_front());

        match scripted {
            Some(Ok(data)) => Ok(data),
            Some(Err(message)) => Err(AppError::Api {
                operation: operation.name,
                messages: vec![message],
            }),
            None => {
                let mut data = serde_json::Map::new();
                data.insert(operation.name.to_string(), Value::Null);
                Ok(Value::Object(data))
            }
        }
    }
}

fn orchestrator_with(api: &Arc<ScriptedApi>) -> Orchestrator {
    Orchestrator::new(api.clone())
}

/// Script responses for every create in the seeding sequence, using the
/// canonical ids b1 / p1,p2 / c1..c3 / t1..t3 / pt1..pt3
fn script_seed_creates(api: &ScriptedApi) {
    api.respond("createBlog", json!({"createBlog": {"id": "b1", "name": "Blog"}}));
    api.respond(
        "createPost",
        json!({"createPost": {"id": "p1", "title": "Post 1", "blogId": "b1"}}),
    );
    api.respond(
        "createPost",
        json!({"createPost": {"id": "p2", "title": "Post 2", "blogId": "b1"}}),
    );
    for id in ["c1", "c2", "c3"] {
        api.respond(
            "createComment",
            json!({"createComment": {"id": id, "content": "Comment", "postId": "p"}}),
        );
    }
    for id in ["t1", "t2", "t3"] {
        api.respond("createTag", json!({"createTag": {"id": id, "label": "Tag"}}));
    }
    for id in ["pt1", "pt2", "pt3"] {
        api.respond(
            "createPostTags",
            json!({"createPostTags": {"id": id, "postId": "p", "tagId": "t"}}),
        );
    }
}

/// Script the traversal that follows seeding
fn script_traversal(api: &ScriptedApi) {
    api.respond(
        "listBlogs",
        json!({"listBlogs": {"items": [{"id": "b1", "name": "Blog"}]}}),
    );
    api.respond(
        "getBlog",
        json!({"getBlog": {
            "id": "b1",
            "name": "Blog",
            "posts": {"items": [
                {"id": "p1", "title": "Post 1"},
                {"id": "p2", "title": "Post 2"},
            ]}
        }}),
    );
    api.respond(
        "getPost",
        json!({"getPost": {
            "id": "p1",
            "title": "Post 1",
            "comments": {"items": [{"id": "c1", "content": "Comment", "postId": "p1"}]},
            "tags": {"items": [{"id": "pt1", "tag": {"id": "t1", "label": "Tag"}}]}
        }}),
    );
    api.respond(
        "getPost",
        json!({"getPost": {
            "id": "p2",
            "title": "Post 2",
            "comments": {"items": [
                {"id": "c2", "content": "Comment", "postId": "p2"},
                {"id": "c3", "content": "Comment", "postId": "p2"},
            ]},
            "tags": {"items": [
                {"id": "pt2", "tag": {"id": "t2", "label": "Tag"}},
                {"id": "pt3", "tag": {"id": "t3", "label": "Tag"}},
            ]}
        }}),
    );
    api.respond(
        "listTags",
        json!({"listTags": {"items": [
            {"id": "t1", "label": "Tag"},
            {"id": "t2", "label": "Tag"},
            {"id": "t3", "label": "Tag"},
        ]}}),
    );
    api.respond(
        "getTag",
        json!({"getTag": {
            "id": "t1",
            "label": "Tag",
            "posts": {"items": [{"id": "pt1", "post": {"id": "p1", "title": "Post 1"}}]}
        }}),
    );
}

/// Test 1: seeding issues exactly the dependency-ordered call sequence
///
/// 1 Blog create, 2 Post creates (both under b1), 3 Comment creates (one for
/// p1, two for p2), 3 Tag creates, 3 PostTag creates pairing p1-t1, p2-t2,
/// p2-t3, followed by the full traversal sequence.
#[tokio::test]
async fn test_seed_creates_full_tree_in_dependency_order() {
    let api = Arc::new(ScriptedApi::new());
    script_seed_creates(&api);
    script_traversal(&api);

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.create_relations_and_query().await.unwrap();

    assert_eq!(report.blog_id, "b1");
    assert_eq!(report.post_ids, vec!["p1", "p2"]);
    assert_eq!(report.comment_ids, vec!["c1", "c2", "c3"]);
    assert_eq!(report.tag_ids, vec!["t1", "t2", "t3"]);
    assert_eq!(report.post_tag_ids, vec!["pt1", "pt2", "pt3"]);
    assert_eq!(report.relations.posts.len(), 2);
    assert!(report.relations.tag.is_some());

    let expected = vec![
        "createBlog",
        "createPost",
        "createComment",
        "createTag",
        "createPostTags",
        "createPost",
        "createComment",
        "createComment",
        "createTag",
        "createTag",
        "createPostTags",
        "createPostTags",
        "listBlogs",
        "getBlog",
        "getPost",
        "getPost",
        "listTags",
        "getTag",
    ];
    assert_eq!(api.call_names(), expected);

    // Both posts were created under the blog
    assert_eq!(api.call_variables(1)["input"]["blogId"], "b1");
    assert_eq!(api.call_variables(5)["input"]["blogId"], "b1");

    // One comment on post 1, two on post 2
    assert_eq!(api.call_variables(2)["input"]["postId"], "p1");
    assert_eq!(api.call_variables(6)["input"]["postId"], "p2");
    assert_eq!(api.call_variables(7)["input"]["postId"], "p2");

    // Join records pair p1-t1, p2-t2, p2-t3
    assert_eq!(api.call_variables(4)["input"]["postId"], "p1");
    assert_eq!(api.call_variables(4)["input"]["tagId"], "t1");
    assert_eq!(api.call_variables(10)["input"]["postId"], "p2");
    assert_eq!(api.call_variables(10)["input"]["tagId"], "t2");
    assert_eq!(api.call_variables(11)["input"]["postId"], "p2");
    assert_eq!(api.call_variables(11)["input"]["tagId"], "t3");
}

/// Test 2: a blog create that returns no record aborts the whole sequence
/// with a typed error and issues no further calls
#[tokio::test]
async fn test_seed_aborts_when_blog_create_returns_nothing() {
    let api = Arc::new(ScriptedApi::new());
    api.respond("createBlog", json!({"createBlog": null}));

    let orchestrator = orchestrator_with(&api);
    let result = orchestrator.create_relations_and_query().await;

    match result {
        Err(AppError::MissingIdentifier { kind, operation }) => {
            assert_eq!(kind, RecordKind::Blog);
            assert_eq!(operation, "createBlog");
        }
        other => panic!("expected MissingIdentifier error, got: {:?}", other.map(|_| ())),
    }

    assert_eq!(api.call_count(), 1, "no calls may follow the failed create");
}

/// Test 3: a post create without a record aborts mid-sequence; the earlier
/// creates stay issued, nothing after the failure runs
#[tokio::test]
async fn test_seed_aborts_midway_on_missing_post() {
    let api = Arc::new(ScriptedApi::new());
    api.respond("createBlog", json!({"createBlog": {"id": "b1", "name": "Blog"}}));
    api.respond("createPost", json!({"createPost": null}));

    let orchestrator = orchestrator_with(&api);
    let result = orchestrator.create_relations_and_query().await;

    match result {
        Err(AppError::MissingIdentifier { kind, .. }) => assert_eq!(kind, RecordKind::Post),
        other => panic!("expected MissingIdentifier error, got: {:?}", other.map(|_| ())),
    }
    assert_eq!(api.call_names(), vec!["createBlog", "createPost"]);
}

fn script_populated_snapshot(api: &ScriptedApi) {
    api.respond(
        "listBlogs",
        json!({"listBlogs": {"items": [{"id": "b1", "name": "Blog"}]}}),
    );
    api.respond(
        "listPosts",
        json!({"listPosts": {"items": [
            {"id": "p1", "title": "Post 1", "blogId": "b1"},
            {"id": "p2", "title": "Post 2", "blogId": "b1"},
        ]}}),
    );
    api.respond(
        "listComments",
        json!({"listComments": {"items": [
            {"id": "c1", "content": "Comment", "postId": "p1"},
            {"id": "c2", "content": "Comment", "postId": "p2"},
            {"id": "c3", "content": "Comment", "postId": "p2"},
        ]}}),
    );
    api.respond(
        "listTags",
        json!({"listTags": {"items": [
            {"id": "t1", "label": "Tag"},
            {"id": "t2", "label": "Tag"},
            {"id": "t3", "label": "Tag"},
        ]}}),
    );
    api.respond(
        "listPostTags",
        json!({"listPostTags": {"items": [
            {"id": "pt1", "postId": "p1", "tagId": "t1"},
            {"id": "pt2", "postId": "p2", "tagId": "t2"},
            {"id": "pt3", "postId": "p2", "tagId": "t3"},
        ]}}),
    );
}

/// Test 4: delete-all issues exactly one delete per record, children before
/// parents, then re-queries to verify emptiness
#[tokio::test]
async fn test_delete_all_deletes_each_record_once_children_first() {
    let api = Arc::new(ScriptedApi::new());
    script_populated_snapshot(&api);
    // Second snapshot falls through to the stub default: everything empty.

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.delete_all().await.unwrap();

    let expected = vec![
        "listBlogs",
        "listPosts",
        "listComments",
        "listTags",
        "listPostTags",
        "deletePostTags",
        "deletePostTags",
        "deletePostTags",
        "deleteComment",
        "deleteComment",
        "deleteComment",
        "deletePost",
        "deletePost",
        "deleteBlog",
        "deleteTag",
        "deleteTag",
        "deleteTag",
        "listBlogs",
        "listPosts",
        "listComments",
        "listTags",
        "listPostTags",
    ];
    assert_eq!(api.call_names(), expected);

    // One delete per snapshot item, addressed by id
    assert_eq!(api.call_variables(5)["input"]["id"], "pt1");
    assert_eq!(api.call_variables(11)["input"]["id"], "p1");
    assert_eq!(api.call_variables(13)["input"]["id"], "b1");

    assert_eq!(report.deleted.blogs, 1);
    assert_eq!(report.deleted.posts, 2);
    assert_eq!(report.deleted.comments, 3);
    assert_eq!(report.deleted.tags, 3);
    assert_eq!(report.deleted.post_tags, 3);
    assert_eq!(report.failed.posts, 0);
    assert!(report.remaining.is_empty());
}

/// Test 5: record kinds with an empty snapshot issue zero delete calls
#[tokio::test]
async fn test_delete_all_skips_empty_kinds() {
    let api = Arc::new(ScriptedApi::new());
    api.respond(
        "listPosts",
        json!({"listPosts": {"items": [{"id": "p1", "title": "Post 1", "blogId": "b1"}]}}),
    );
    // All other kinds fall through to the stub default (empty).

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.delete_all().await.unwrap();

    let deletes: Vec<String> = api
        .call_names()
        .into_iter()
        .filter(|name| name.starts_with("delete"))
        .collect();
    assert_eq!(deletes, vec!["deletePost"]);
    assert_eq!(report.deleted.posts, 1);
    assert_eq!(report.deleted.blogs, 0);
}

/// Test 6: a failing delete is counted but stops neither its siblings nor
/// the batches that follow
#[tokio::test]
async fn test_delete_failure_does_not_stop_siblings() {
    let api = Arc::new(ScriptedApi::new());
    script_populated_snapshot(&api);
    api.respond("deletePost", json!({"deletePost": {"id": "p1"}}));
    api.fail("deletePost", "ConditionalCheckFailedException");

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.delete_all().await.unwrap();

    let delete_posts = api
        .call_names()
        .iter()
        .filter(|name| *name == "deletePost")
        .count();
    assert_eq!(delete_posts, 2, "the failed delete must not suppress siblings");

    // Later batches (blogs, tags) still ran in full
    assert_eq!(report.deleted.posts, 1);
    assert_eq!(report.failed.posts, 1);
    assert_eq!(report.deleted.blogs, 1);
    assert_eq!(report.deleted.tags, 3);
}

/// Test 7: traversal with no blogs issues zero get calls and stops before
/// the inverse tag lookup
#[tokio::test]
async fn test_query_relations_with_no_blogs_issues_no_gets() {
    let api = Arc::new(ScriptedApi::new());

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.query_all_relations().await.unwrap();

    assert!(report.blog.is_none());
    assert!(report.posts.is_empty());
    assert!(report.tag.is_none());
    assert_eq!(api.call_names(), vec!["listBlogs"]);
}

/// Test 8: traversal halts without error when the listed blog is gone by
/// the time it is fetched
#[tokio::test]
async fn test_query_relations_halts_when_blog_vanishes() {
    let api = Arc::new(ScriptedApi::new());
    api.respond(
        "listBlogs",
        json!({"listBlogs": {"items": [{"id": "b1", "name": "Blog"}]}}),
    );
    api.respond("getBlog", json!({"getBlog": null}));

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.query_all_relations().await.unwrap();

    assert!(report.blog.is_none());
    assert_eq!(api.call_names(), vec!["listBlogs", "getBlog"]);
}

/// Test 9: a blog with no posts still performs the inverse tag lookup
#[tokio::test]
async fn test_query_relations_empty_blog_still_checks_tags() {
    let api = Arc::new(ScriptedApi::new());
    api.respond(
        "listBlogs",
        json!({"listBlogs": {"items": [{"id": "b1", "name": "Blog"}]}}),
    );
    api.respond(
        "getBlog",
        json!({"getBlog": {"id": "b1", "name": "Blog", "posts": {"items": []}}}),
    );

    let orchestrator = orchestrator_with(&api);
    let report = orchestrator.query_all_relations().await.unwrap();

    assert!(report.blog.is_some());
    assert!(report.posts.is_empty());
    assert!(report.tag.is_none());
    assert_eq!(api.call_names(), vec!["listBlogs", "getBlog", "listTags"]);
}

/// Test 10: the independent snapshot lists all five kinds serially and
/// carries every record through
#[tokio::test]
async fn test_query_all_independent_collects_every_kind() {
    let api = Arc::new(ScriptedApi::new());
    script_populated_snapshot(&api);

    let orchestrator = orchestrator_with(&api);
    let snapshot = orchestrator.query_all_independent().await.unwrap();

    assert_eq!(
        api.call_names(),
        vec!["listBlogs", "listPosts", "listComments", "listTags", "listPostTags"]
    );
    assert_eq!(snapshot.blogs.len(), 1);
    assert_eq!(snapshot.posts.len(), 2);
    assert_eq!(snapshot.comments.len(), 3);
    assert_eq!(snapshot.tags.len(), 3);
    assert_eq!(snapshot.post_tags.len(), 3);
    assert!(!snapshot.is_empty());
}

/// Test 11: remote failures outside delete fan-out propagate to the caller
#[tokio::test]
async fn test_seed_propagates_remote_failure() {
    let api = Arc::new(ScriptedApi::new());
    api.fail("createBlog", "Not Authorized to access createBlog");

    let orchestrator = orchestrator_with(&api);
    let result = orchestrator.create_relations_and_query().await;

    match result {
        Err(AppError::Api { operation, .. }) => assert_eq!(operation, "createBlog"),
        other => panic!("expected Api error, got: {:?}", other.map(|_| ())),
    }
    assert_eq!(api.call_count(), 1);
}
