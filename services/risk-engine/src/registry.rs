//! In-memory risk registry
//!
//! An owned id → record mapping with validated upsert semantics. A write
//! that fails validation is refused and leaves the mapping untouched; the
//! caller keeps the prior state. No iteration order is guaranteed; display
//! ordering is the consumer's concern.

use std::collections::HashMap;
use tracing::{debug, warn};
use types::errors::RiskError;
use types::ids::RiskId;
use types::risk::{Risk, RiskDraft};

use crate::validator;

/// Owned mapping from risk id to record.
///
/// Single-owner: no locking discipline is required because each registry
/// belongs to exactly one caller.
#[derive(Debug, Clone, Default)]
pub struct RiskRegistry {
    risks: HashMap<RiskId, Risk>,
}

impl RiskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.risks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &RiskId) -> Option<&Risk> {
        self.risks.get(id)
    }

    /// Iterate stored records (no ordering guarantee)
    pub fn iter(&self) -> impl Iterator<Item = &Risk> {
        self.risks.values()
    }

    /// Insert or replace a record.
    ///
    /// The candidate is validated first; any violation refuses the write
    /// and returns `RiskError::Rejected` with the field errors, leaving the
    /// mapping unchanged. A draft whose id matches a stored record replaces
    /// that entry in full (no partial-field merge); otherwise a fresh id is
    /// assigned and the record inserted.
    pub fn upsert(&mut self, draft: RiskDraft) -> Result<RiskId, RiskError> {
        let result = validator::validate(&draft);
        if !result.is_valid() {
            warn!(
                violations = result.errors().len(),
                "risk write rejected by validation"
            );
            return Err(RiskError::Rejected(result.into_errors()));
        }

        let id = match draft.id {
            Some(id) if self.risks.contains_key(&id) => id,
            _ => RiskId::new(),
        };

        let risk = draft.into_risk(id)?;
        self.risks.insert(id, risk);
        debug!(%id, "risk upserted");
        Ok(id)
    }

    /// Remove a record by id. Idempotent: removing an absent id is a no-op.
    ///
    /// Returns whether a record was actually removed.
    pub fn remove(&mut self, id: &RiskId) -> bool {
        let removed = self.risks.remove(id).is_some();
        if removed {
            debug!(%id, "risk removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, likelihood: i64, impact: i64) -> RiskDraft {
        RiskDraft {
            id: None,
            name: name.to_string(),
            category: "Environmental".to_string(),
            likelihood,
            impact,
            mitigation_strategy: "Mitigate".to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_id() {
        let mut registry = RiskRegistry::new();
        let id = registry.upsert(draft("Climate Change Impact", 4, 5)).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().name, "Climate Change Impact");
    }

    #[test]
    fn test_update_replaces_single_entry() {
        let mut registry = RiskRegistry::new();
        let id_a = registry.upsert(draft("Risk A", 2, 2)).unwrap();
        let id_b = registry.upsert(draft("Risk B", 3, 3)).unwrap();

        let mut update = draft("Risk A (revised)", 5, 5);
        update.id = Some(id_a);
        let id = registry.upsert(update).unwrap();

        // Same key, full overwrite, other entries untouched.
        assert_eq!(id, id_a);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&id_a).unwrap().name, "Risk A (revised)");
        assert_eq!(registry.get(&id_a).unwrap().likelihood.get(), 5);
        assert_eq!(registry.get(&id_b).unwrap().name, "Risk B");
        assert_eq!(registry.get(&id_b).unwrap().likelihood.get(), 3);
    }

    #[test]
    fn test_unknown_id_inserts_under_fresh_id() {
        let mut registry = RiskRegistry::new();
        let mut candidate = draft("Orphan", 1, 1);
        let stale = RiskId::new();
        candidate.id = Some(stale);

        let id = registry.upsert(candidate).unwrap();
        assert_ne!(id, stale);
        assert!(registry.get(&stale).is_none());
        assert!(registry.get(&id).is_some());
    }

    #[test]
    fn test_invalid_draft_leaves_mapping_untouched() {
        let mut registry = RiskRegistry::new();
        let id = registry.upsert(draft("Existing", 2, 4)).unwrap();

        let mut bad = draft("", 0, 4);
        bad.id = Some(id);
        let err = registry.upsert(bad).unwrap_err();

        match err {
            RiskError::Rejected(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "likelihood"]);
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        // Prior record survives the rejected write.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&id).unwrap().name, "Existing");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = RiskRegistry::new();
        let id = registry.upsert(draft("Removable", 1, 2)).unwrap();

        assert!(registry.remove(&id));
        assert!(!registry.remove(&id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_iter_covers_all_records() {
        let mut registry = RiskRegistry::new();
        registry.upsert(draft("A", 1, 1)).unwrap();
        registry.upsert(draft("B", 2, 2)).unwrap();
        registry.upsert(draft("C", 3, 3)).unwrap();

        let mut names: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
