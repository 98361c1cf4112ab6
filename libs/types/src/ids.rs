//! Unique identifier types for platform entities
//!
//! All IDs use UUID v7 for time-sortable ordering, enabling efficient
//! chronological queries. Each entity gets its own newtype so a RiskId
//! can never be passed where a ProjectId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new identifier with the current timestamp
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Create from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Unique identifier for a risk record
    RiskId
}

entity_id! {
    /// Unique identifier for a CSR project
    ProjectId
}

entity_id! {
    /// Unique identifier for a sustainability report
    ReportId
}

entity_id! {
    /// Unique identifier for a stakeholder
    StakeholderId
}

entity_id! {
    /// Unique identifier for a stored document
    DocumentId
}
