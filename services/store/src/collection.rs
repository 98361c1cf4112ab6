//! Generic keyed collection
//!
//! The dashboard entities all mutate the same way: copy-and-replace by id.
//! One generic collection keeps those semantics in a single place instead
//! of repeating them per entity. Single-owner: each collection belongs to
//! exactly one caller, so no locking discipline is required.

use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

use types::document::Document;
use types::ids::{DocumentId, ProjectId, ReportId, StakeholderId};
use types::project::Project;
use types::report::Report;
use types::stakeholder::Stakeholder;

/// An entity with a copyable identifier
pub trait Entity {
    type Id: Eq + Hash + Copy;

    fn id(&self) -> Self::Id;
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }
}

impl Entity for Report {
    type Id = ReportId;

    fn id(&self) -> ReportId {
        self.id
    }
}

impl Entity for Stakeholder {
    type Id = StakeholderId;

    fn id(&self) -> StakeholderId {
        self.id
    }
}

impl Entity for Document {
    type Id = DocumentId;

    fn id(&self) -> DocumentId {
        self.id
    }
}

/// Owned id → entity mapping with replace-by-id update semantics.
///
/// No iteration order is guaranteed; display ordering belongs to the
/// consumer.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: HashMap<T::Id, T>,
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an entity by id
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    /// Iterate entities (no ordering guarantee)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Add an entity under its own id, returning that id
    pub fn add(&mut self, entity: T) -> T::Id {
        let id = entity.id();
        self.items.insert(id, entity);
        id
    }

    /// Replace the stored entity with the same id, in full.
    ///
    /// A no-op returning `false` when the id is unknown; no partial-field
    /// merge ever happens.
    pub fn update(&mut self, entity: T) -> bool {
        let id = entity.id();
        if let Some(slot) = self.items.get_mut(&id) {
            *slot = entity;
            true
        } else {
            debug!("update skipped: id not present");
            false
        }
    }

    /// Remove an entity by id. Idempotent.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        self.items.remove(id).is_some()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
