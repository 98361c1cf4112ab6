//! Document metadata types
//!
//! Only the metadata lives here; file content and storage belong to an
//! external collaborator.

use crate::ids::DocumentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata for a stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub category: String,
    pub upload_date: NaiveDate,
    pub size_bytes: u64,
}

impl Document {
    /// Create new document metadata with a fresh id
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        upload_date: NaiveDate,
        size_bytes: u64,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            category: category.into(),
            upload_date,
            size_bytes,
        }
    }
}
