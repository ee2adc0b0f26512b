//! Bulk deletion
//!
//! Snapshots every record, deletes batch by batch in children-before-parents
//! order, then re-snapshots so the caller can verify emptiness. Deletion
//! order is PostTags, Comments, Posts, Blogs, Tags: a record is never
//! deleted while this code still knows about children referencing it.

use crate::error::AppError;
use crate::graphql::operations::{self, Operation};
use crate::graphql::types::RecordKind;
use crate::orchestrator::traverse::RecordSnapshot;
use futures_util::future::join_all;
use serde::Serialize;

use super::Orchestrator;

/// Per-record-kind counts
#[derive(Debug, Default, Serialize)]
pub struct KindCounts {
    /// Blog count
    pub blogs: usize,
    /// Post count
    pub posts: usize,
    /// Comment count
    pub comments: usize,
    /// Tag count
    pub tags: usize,
    /// Join record count
    pub post_tags: usize,
}

/// Result of one delete-all run
#[derive(Debug, Serialize)]
pub struct TeardownReport {
    /// Records successfully deleted, per kind
    pub deleted: KindCounts,
    /// Delete attempts that failed, per kind
    pub failed: KindCounts,
    /// Snapshot taken after deletion, for verifying emptiness
    pub remaining: RecordSnapshot,
}

#[derive(Debug, Default)]
struct BatchOutcome {
    deleted: usize,
    failed: usize,
}

impl Orchestrator {
    /// Delete every record of every kind
    ///
    /// Batches run serially in children-before-parents order; within a batch
    /// every per-item delete is dispatched and the pending deletes are joined.
    /// A failed delete is logged and counted but never stops sibling
    /// deletions or later batches. Kinds with no records issue no calls.
    pub async fn delete_all(&self) -> Result<TeardownReport, AppError> {
        let snapshot = self.query_all_independent().await?;

        let post_tags = self
            .delete_batch(
                RecordKind::PostTag,
                &operations::DELETE_POST_TAGS,
                ids_of(&snapshot.post_tags, |r| &r.id),
            )
            .await;
        let comments = self
            .delete_batch(
                RecordKind::Comment,
                &operations::DELETE_COMMENT,
                ids_of(&snapshot.comments, |r| &r.id),
            )
            .await;
        let posts = self
            .delete_batch(
                RecordKind::Post,
                &operations::DELETE_POST,
                ids_of(&snapshot.posts, |r| &r.id),
            )
            .await;
        let blogs = self
            .delete_batch(
                RecordKind::Blog,
                &operations::DELETE_BLOG,
                ids_of(&snapshot.blogs, |r| &r.id),
            )
            .await;
        let tags = self
            .delete_batch(
                RecordKind::Tag,
                &operations::DELETE_TAG,
                ids_of(&snapshot.tags, |r| &r.id),
            )
            .await;

        // Validate that all records are gone
        let remaining = self.query_all_independent().await?;
        if remaining.is_empty() {
            tracing::info!("All records deleted");
        } else {
            tracing::warn!(
                blogs = remaining.blogs.len(),
                posts = remaining.posts.len(),
                comments = remaining.comments.len(),
                tags = remaining.tags.len(),
                post_tags = remaining.post_tags.len(),
                "Records remain after delete-all"
            );
        }

        Ok(TeardownReport {
            deleted: KindCounts {
                blogs: blogs.deleted,
                posts: posts.deleted,
                comments: comments.deleted,
                tags: tags.deleted,
                post_tags: post_tags.deleted,
            },
            failed: KindCounts {
                blogs: blogs.failed,
                posts: posts.failed,
                comments: comments.failed,
                tags: tags.failed,
                post_tags: post_tags.failed,
            },
            remaining,
        })
    }

    /// Delete one batch of records of a single kind as a joined fan-out
    async fn delete_batch(
        &self,
        kind: RecordKind,
        operation: &'static Operation,
        ids: Vec<String>,
    ) -> BatchOutcome {
        if ids.is_empty() {
            return BatchOutcome::default();
        }

        let attempts = ids.iter().map(|id| async move {
            match self.delete_record(operation, id).await {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(
                        kind = %kind,
                        record_id = %id,
                        error = %err,
                        "Delete failed; continuing with remaining records"
                    );
                    false
                }
            }
        });

        let results = join_all(attempts).await;
        let deleted = results.iter().filter(|ok| **ok).count();
        let outcome = BatchOutcome {
            deleted,
            failed: results.len() - deleted,
        };

        tracing::info!(
            kind = %kind,
            deleted = outcome.deleted,
            failed = outcome.failed,
            "Delete batch complete"
        );

        outcome
    }
}

fn ids_of<T>(records: &[T], id: impl Fn(&T) -> &String) -> Vec<String> {
    records.iter().map(|r| id(r).clone()).collect()
}
