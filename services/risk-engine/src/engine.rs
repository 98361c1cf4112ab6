//! Risk Engine — orchestrator
//!
//! Ties together validation, the registry, and scoring behind one facade
//! the presentation layer can hold. Levels are always recomputed from the
//! stored ratings at read time.

use serde::{Deserialize, Serialize};
use types::errors::RiskError;
use types::ids::RiskId;
use types::risk::{Risk, RiskDraft, RiskLevel};
use types::validation::ValidationResult;

use crate::registry::RiskRegistry;
use crate::scoring;
use crate::validator;

/// Record counts per risk level, for dashboard consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskProfile {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Risk engine service
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    registry: RiskRegistry,
}

impl RiskEngine {
    /// Create an engine with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the registry
    pub fn registry(&self) -> &RiskRegistry {
        &self.registry
    }

    /// Validate a candidate without writing anything
    pub fn validate(&self, draft: &RiskDraft) -> ValidationResult {
        validator::validate(draft)
    }

    /// Insert or replace a record (see `RiskRegistry::upsert`)
    pub fn upsert(&mut self, draft: RiskDraft) -> Result<RiskId, RiskError> {
        self.registry.upsert(draft)
    }

    /// Remove a record by id; idempotent
    pub fn remove(&mut self, id: &RiskId) -> bool {
        self.registry.remove(id)
    }

    /// Current level of a stored record, recomputed from its ratings
    pub fn level_of(&self, id: &RiskId) -> Option<RiskLevel> {
        self.registry
            .get(id)
            .map(|risk| scoring::classify(risk.likelihood, risk.impact))
    }

    /// Current score of a stored record
    pub fn score_of(&self, id: &RiskId) -> Option<u8> {
        self.registry
            .get(id)
            .map(|risk| scoring::risk_score(risk.likelihood, risk.impact))
    }

    /// Summarize the registry as counts per level
    pub fn profile(&self) -> RiskProfile {
        let mut profile = RiskProfile::default();
        for risk in self.registry.iter() {
            profile.total += 1;
            match scoring::classify(risk.likelihood, risk.impact) {
                RiskLevel::High => profile.high += 1,
                RiskLevel::Medium => profile.medium += 1,
                RiskLevel::Low => profile.low += 1,
            }
        }
        profile
    }

    /// Records currently at the given level (no ordering guarantee)
    pub fn at_level(&self, level: RiskLevel) -> Vec<&Risk> {
        self.registry
            .iter()
            .filter(|risk| scoring::classify(risk.likelihood, risk.impact) == level)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, likelihood: i64, impact: i64) -> RiskDraft {
        RiskDraft {
            id: None,
            name: name.to_string(),
            category: "Governance".to_string(),
            likelihood,
            impact,
            mitigation_strategy: "Monitor and review quarterly".to_string(),
        }
    }

    #[test]
    fn test_level_recomputed_after_edit() {
        let mut engine = RiskEngine::new();
        let id = engine.upsert(draft("Data Privacy Breach", 2, 3)).unwrap();
        assert_eq!(engine.level_of(&id), Some(RiskLevel::Low));

        // Edit ratings; the level must follow immediately, no staleness.
        let mut update = draft("Data Privacy Breach", 4, 5);
        update.id = Some(id);
        engine.upsert(update).unwrap();
        assert_eq!(engine.level_of(&id), Some(RiskLevel::High));
        assert_eq!(engine.score_of(&id), Some(20));
    }

    #[test]
    fn test_level_of_unknown_id_is_none() {
        let engine = RiskEngine::new();
        assert_eq!(engine.level_of(&RiskId::new()), None);
    }

    #[test]
    fn test_profile_counts() {
        let mut engine = RiskEngine::new();
        engine.upsert(draft("High risk", 4, 5)).unwrap(); // 20 → High
        engine.upsert(draft("Medium risk", 3, 3)).unwrap(); // 9 → Medium
        engine.upsert(draft("Low risk", 1, 2)).unwrap(); // 2 → Low
        engine.upsert(draft("Another low", 2, 3)).unwrap(); // 6 → Low

        let profile = engine.profile();
        assert_eq!(profile.total, 4);
        assert_eq!(profile.high, 1);
        assert_eq!(profile.medium, 1);
        assert_eq!(profile.low, 2);
    }

    #[test]
    fn test_at_level_filters() {
        let mut engine = RiskEngine::new();
        engine.upsert(draft("A", 5, 5)).unwrap();
        engine.upsert(draft("B", 3, 5)).unwrap();
        engine.upsert(draft("C", 1, 1)).unwrap();

        let high = engine.at_level(RiskLevel::High);
        assert_eq!(high.len(), 2);

        let medium = engine.at_level(RiskLevel::Medium);
        assert!(medium.is_empty());
    }

    #[test]
    fn test_rejected_write_reported_through_engine() {
        let mut engine = RiskEngine::new();
        let err = engine.upsert(draft("", 3, 3)).unwrap_err();
        assert!(matches!(err, RiskError::Rejected(_)));
        assert_eq!(engine.profile().total, 0);
    }
}
