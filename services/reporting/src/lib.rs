//! Reporting Wizard Service
//!
//! The multi-step reporting-configuration workflow: an ordered, validated
//! collection of reporting standards, period, and company information that
//! materializes an immutable `ReportConfiguration` on submit.
//!
//! Validation happens only at step boundaries (`next`/`submit`), never on
//! field writes, so partial entry is never blocked. All failures are
//! structured results; the wizard is fully recoverable by re-prompting the
//! same step.

pub mod config;
pub mod generator;
pub mod steps;
pub mod wizard;
