//! Risk scoring and classification
//!
//! Deterministic computation of the risk score and its level
//! classification. Pure functions over validated `Rating` inputs, so the
//! whole 1-5 x 1-5 domain is total and no error path exists here;
//! out-of-range input is rejected earlier, at `Rating` construction.

use types::risk::{Rating, RiskLevel};

/// Scores at or above this classify as High
pub const HIGH_SCORE_THRESHOLD: u8 = 15;
/// Scores at or above this (and below the High threshold) classify as Medium
pub const MEDIUM_SCORE_THRESHOLD: u8 = 8;

/// Calculate the risk score.
///
/// `score = likelihood × impact`, domain 1..=25.
pub fn risk_score(likelihood: Rating, impact: Rating) -> u8 {
    likelihood.get() * impact.get()
}

/// Classify a likelihood/impact pair.
///
/// | Score     | Level  |
/// |-----------|--------|
/// | >= 15     | High   |
/// | 8 – 14    | Medium |
/// | < 8       | Low    |
pub fn classify(likelihood: Rating, impact: Rating) -> RiskLevel {
    classify_score(risk_score(likelihood, impact))
}

/// Classify an already-computed risk score.
///
/// Shared by every consumer so the level thresholds live in exactly one
/// place.
pub fn classify_score(score: u8) -> RiskLevel {
    if score >= HIGH_SCORE_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_SCORE_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
