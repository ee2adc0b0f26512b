//! Seeding sequence
//!
//! Creates one connected Blog/Post/Comment/Tag tree, then queries it back.
//! The sequence is strictly serial: every step needs the identifier
//! returned by the previous create, so nothing here can run concurrently.

use crate::error::AppError;
use crate::orchestrator::traverse::RelationsReport;
use chrono::Utc;
use serde::Serialize;

use super::Orchestrator;

/// Identifiers of every record created by one seeding run, plus the
/// relation traversal that followed
#[derive(Debug, Serialize)]
pub struct SeedReport {
    /// The created blog
    pub blog_id: String,
    /// The two created posts, in creation order
    pub post_ids: Vec<String>,
    /// The three created comments, in creation order
    pub comment_ids: Vec<String>,
    /// The three created tags, in creation order
    pub tag_ids: Vec<String>,
    /// The three created join records, in creation order
    pub post_tag_ids: Vec<String>,
    /// Result of the traversal run after seeding
    pub relations: RelationsReport,
}

impl Orchestrator {
    /// Create a connected Blog, two Posts, three Comments, and three Tags,
    /// then query all relations back
    ///
    /// Post 1 receives one comment and one tag; post 2 receives two comments
    /// and two tags, each tag connected through its own join record. Record
    /// names derive from the current timestamp, so repeated runs produce
    /// independent trees.
    ///
    /// # Errors
    /// A create step whose result lacks the expected record fails the whole
    /// sequence with `AppError::MissingIdentifier`; remote failures propagate
    /// as-is. Records created before the failure are not rolled back.
    pub async fn create_relations_and_query(&self) -> Result<SeedReport, AppError> {
        let stamp = Utc::now().timestamp_millis();
        let blog = self.create_blog(&format!("Blog {}", stamp)).await?;

        // Post 1 and related records
        let post1 = self
            .create_post(&blog.id, &format!("Post {}-1", stamp))
            .await?;
        let comment1 = self
            .create_comment(&post1.id, &format!("Comment {}-1", stamp))
            .await?;
        let tag1 = self.create_tag(&format!("Tag {}-1", stamp)).await?;
        let join1 = self.create_post_tag(&post1.id, &tag1.id).await?;

        // Post 2 and related records
        let post2 = self
            .create_post(&blog.id, &format!("Post {}-2", stamp))
            .await?;
        let comment2 = self
            .create_comment(&post2.id, &format!("Comment {}-2", stamp))
            .await?;
        let comment3 = self
            .create_comment(&post2.id, &format!("Comment {}-3", stamp))
            .await?;
        let tag2 = self.create_tag(&format!("Tag {}-2", stamp)).await?;
        let tag3 = self.create_tag(&format!("Tag {}-3", stamp)).await?;
        let join2 = self.create_post_tag(&post2.id, &tag2.id).await?;
        let join3 = self.create_post_tag(&post2.id, &tag3.id).await?;

        tracing::info!(blog_id = %blog.id, "Seeded relation tree; querying it back");

        let relations = self.query_all_relations().await?;

        Ok(SeedReport {
            blog_id: blog.id,
            post_ids: vec![post1.id, post2.id],
            comment_ids: vec![comment1.id, comment2.id, comment3.id],
            tag_ids: vec![tag1.id, tag2.id, tag3.id],
            post_tag_ids: vec![join1.id, join2.id, join3.id],
            relations,
        })
    }
}
