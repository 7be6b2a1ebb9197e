//! Match scoring — maps found/required skill sets to a heuristic fit score.
//!
//! Two branches: when the job names required skills, the score is a coverage
//! ratio with a floor and a cap; when it names none, a small per-skill bonus
//! on top of a neutral base. Presentation values (rounded score, percentage
//! string, relevance tier) all derive from the raw float, in that order, so
//! they stay mutually consistent.

/// Tunable constants for the match-score formula.
#[derive(Debug, Clone)]
pub struct ScoringParams {
    /// Floor added to the coverage ratio when the job names required skills.
    pub required_base: f64,
    /// Ceiling for the required-skills branch.
    pub required_cap: f64,
    /// Base score when the job names no recognizable skills.
    pub fallback_base: f64,
    /// Bonus per found skill in the fallback branch.
    pub fallback_per_skill: f64,
    /// Ceiling for the fallback branch.
    pub fallback_cap: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        ScoringParams {
            required_base: 0.3,
            required_cap: 0.95,
            fallback_base: 0.5,
            fallback_per_skill: 0.05,
            fallback_cap: 0.85,
        }
    }
}

/// Number of found skills the job actually asked for.
pub fn matched_count(found: &[&'static str], required: &[&'static str]) -> usize {
    found
        .iter()
        .filter(|skill| required.contains(*skill))
        .count()
}

/// Raw (unrounded) match score.
///
/// Callers round separately for the response body; the raw value feeds the
/// percentage string and the relevance tier so those agree with the actual
/// float, not with its two-decimal presentation.
pub fn compute_match_score(
    required: &[&'static str],
    found: &[&'static str],
    params: &ScoringParams,
) -> f64 {
    if !required.is_empty() {
        let ratio = matched_count(found, required) as f64 / required.len() as f64;
        (params.required_base + ratio).min(params.required_cap)
    } else {
        (params.fallback_base + found.len() as f64 * params.fallback_per_skill)
            .min(params.fallback_cap)
    }
}

/// Rounds a score to two decimals for the response body.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Whole-percent rendering of the raw score, truncated toward zero.
pub fn match_percentage(score: f64) -> String {
    format!("{}%", (score * 100.0) as u32)
}

/// Relevance tier from the raw score.
pub fn relevance_tier(score: f64) -> &'static str {
    if score > 0.7 {
        "High"
    } else if score > 0.5 {
        "Medium"
    } else {
        "Low"
    }
}

/// Seniority read from extracted years of experience.
pub fn experience_level(years: u32) -> &'static str {
    if years > 5 {
        "Senior"
    } else if years > 2 {
        "Mid-level"
    } else {
        "Junior"
    }
}
