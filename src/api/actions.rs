//! Action handlers
//!
//! Contains HTTP request handlers for the four triggerable actions. Each
//! handler invokes one orchestrator operation, logs the structured result,
//! and returns it as JSON.

use crate::error::AppError;
use crate::orchestrator::{
    Orchestrator, RecordSnapshot, RelationsReport, SeedReport, TeardownReport,
};
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// POST /api/relations - Create the full relation tree, then query it
pub async fn create_relations(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Result<Json<SeedReport>, AppError> {
    let report = orchestrator.create_relations_and_query().await?;

    tracing::info!(
        blog_id = %report.blog_id,
        posts = report.post_ids.len(),
        comments = report.comment_ids.len(),
        tags = report.tag_ids.len(),
        post_tags = report.post_tag_ids.len(),
        "Created relation tree and queried it back"
    );

    Ok(Json(report))
}

/// GET /api/relations - Query all related records connected to the first blog
pub async fn query_relations(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Result<Json<RelationsReport>, AppError> {
    let report = orchestrator.query_all_relations().await?;

    tracing::info!(
        traversed_blog = report.blog.as_ref().map(|b| b.id.as_str()),
        posts = report.posts.len(),
        "Queried all relations"
    );

    Ok(Json(report))
}

/// GET /api/records - Query all record kinds independent of relations
pub async fn query_records(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Result<Json<RecordSnapshot>, AppError> {
    let snapshot = orchestrator.query_all_independent().await?;
    Ok(Json(snapshot))
}

/// DELETE /api/records - Delete every record and verify emptiness
pub async fn delete_records(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> Result<Json<TeardownReport>, AppError> {
    let report = orchestrator.delete_all().await?;

    tracing::info!(
        deleted_blogs = report.deleted.blogs,
        deleted_posts = report.deleted.posts,
        deleted_comments = report.deleted.comments,
        deleted_tags = report.deleted.tags,
        deleted_post_tags = report.deleted.post_tags,
        backend_empty = report.remaining.is_empty(),
        "Delete-all complete"
    );

    Ok(Json(report))
}
