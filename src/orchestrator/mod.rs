//! Relation orchestrator
//!
//! Drives multi-step, dependent sequences of remote operations against the
//! GraphQL backend and fans out bulk deletion. The orchestrator owns no
//! state beyond the injected client handle: each operation is a one-shot
//! linear sequence of remote calls with no retry, no checkpoint, and no
//! resumption after partial failure.

pub mod primitives;
pub mod seed;
pub mod teardown;
pub mod traverse;

pub use seed::SeedReport;
pub use teardown::{KindCounts, TeardownReport};
pub use traverse::{RecordSnapshot, RelationsReport};

use crate::graphql::GraphQlApi;
use std::sync::Arc;

/// Sequences the relational CRUD operations against one injected client
pub struct Orchestrator {
    api: Arc<dyn GraphQlApi>,
}

impl Orchestrator {
    /// Create an orchestrator around the given client
    pub fn new(api: Arc<dyn GraphQlApi>) -> Self {
        Self { api }
    }
}
