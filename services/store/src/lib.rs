//! In-Memory Store Service
//!
//! Owned CRUD collections for the dashboard entities (projects, reports,
//! stakeholders, documents). One generic collection covers all of them;
//! the entities share identical write semantics: add inserts under the
//! record's id, update replaces in full when the id exists and is a no-op
//! otherwise, remove is idempotent.
//!
//! Durable storage remains an external collaborator that accepts and
//! returns whole entities; nothing here touches disk or network.

pub mod collection;

pub use collection::{Collection, Entity};

use types::document::Document;
use types::project::Project;
use types::report::Report;
use types::stakeholder::Stakeholder;

/// Project collection
pub type ProjectStore = Collection<Project>;
/// Report collection
pub type ReportStore = Collection<Report>;
/// Stakeholder collection
pub type StakeholderStore = Collection<Stakeholder>;
/// Document metadata collection
pub type DocumentStore = Collection<Document>;
