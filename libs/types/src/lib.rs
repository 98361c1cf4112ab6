//! Types library for the CSR/ESG management platform
//!
//! This library provides all core type definitions shared across the
//! platform services, ensuring type safety and a single source of truth
//! for domain invariants.
//!
//! # Modules
//! - `ids`: Unique identifiers (RiskId, ProjectId, ReportId, ...)
//! - `risk`: Risk record types and the bounded rating scale
//! - `validation`: Field-level validation results
//! - `standards`: Fixed reporting/compliance standard catalogs
//! - `project`: CSR project types
//! - `report`: Sustainability report types
//! - `stakeholder`: Stakeholder engagement types
//! - `document`: Document metadata types
//! - `errors`: Error taxonomy

// Public modules
pub mod document;
pub mod errors;
pub mod ids;
pub mod project;
pub mod report;
pub mod risk;
pub mod stakeholder;
pub mod standards;
pub mod validation;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::document::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::project::*;
    pub use crate::report::*;
    pub use crate::risk::*;
    pub use crate::stakeholder::*;
    pub use crate::standards::*;
    pub use crate::validation::*;
}
