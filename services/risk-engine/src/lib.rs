//! Risk Engine Service
//!
//! Deterministic ESG risk assessment: scoring and classification of
//! likelihood/impact ratings, field-level candidate validation, and the
//! in-memory risk registry with validated upsert semantics.
//!
//! Everything here is synchronous and side-effect free apart from registry
//! mutation; the risk level is recomputed on every read and never cached.

pub mod engine;
pub mod registry;
pub mod scoring;
pub mod validator;
