//! Match Prediction — pluggable, trait-based predictor mapping a request to a report.
//!
//! Default: `HeuristicPredictor` (pure-Rust keyword matching, fast, deterministic,
//! fully testable). Future: a PhoBERT-backed scorer behind the same trait once the
//! model service ships.
//!
//! `AppState` holds an `Arc<dyn MatchPredictor>`, swapped at startup.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::matcher::job_title::analyze_job_title;
use crate::matcher::report::{MatchAnalysis, MatchReport, ParsedResume};
use crate::matcher::resume_parser::{
    detect_certifications, detect_education, extract_experience_years, has_github_link,
    has_linkedin_link, LANGUAGES,
};
use crate::matcher::salary::predict_salary_band;
use crate::matcher::scoring::{
    compute_match_score, experience_level, match_percentage, matched_count, relevance_tier,
    round_score, ScoringParams,
};
use crate::matcher::vocabulary::{
    missing_skills, required_skills, scan_skills, MAX_FOUND_SKILLS,
};

/// Disclaimer attached to every report while the heuristic stands in.
pub const DISCLAIMER_NOTE: &str = "This is an enhanced mock prediction with intelligent \
     parsing. The actual PhoBERT model will provide more accurate analysis.";

// ────────────────────────────────────────────────────────────────────────────
// Request type
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /predict`.
///
/// The three core fields must be non-empty; the handler validates that before
/// calling the predictor. `requirements` and `benefits` default to empty when
/// omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    /// Accepted for API compatibility; nothing reads it yet.
    #[serde(default)]
    #[allow(dead_code)]
    pub benefits: String,
}

/// Names of required fields that are empty or absent, in reporting order.
pub fn missing_required_fields(request: &MatchRequest) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if request.resume_text.is_empty() {
        missing.push("resume_text");
    }
    if request.job_title.is_empty() {
        missing.push("job_title");
    }
    if request.description.is_empty() {
        missing.push("description");
    }
    missing
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The predictor trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn MatchPredictor>`.
#[async_trait]
pub trait MatchPredictor: Send + Sync {
    async fn predict(&self, request: &MatchRequest) -> Result<MatchReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicPredictor — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust keyword predictor. No model call, no I/O, identical output for
/// identical input.
pub struct HeuristicPredictor;

#[async_trait]
impl MatchPredictor for HeuristicPredictor {
    async fn predict(&self, request: &MatchRequest) -> Result<MatchReport, AppError> {
        Ok(run_match(request))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core matching pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the four matching stages in order: skill extraction, scoring,
/// classification, response assembly.
pub fn run_match(request: &MatchRequest) -> MatchReport {
    let params = ScoringParams::default();

    // Stage 1: skill extraction.
    let found = scan_skills(&request.resume_text);
    let required = required_skills(&request.requirements, &request.description);

    // Stage 2: scoring. The raw score feeds percentage and relevance;
    // matched/missing counts use the full found list, not the display cap.
    let matched = matched_count(&found, &required);
    let score = compute_match_score(&required, &found, &params);
    let missing = missing_skills(&required, &found);

    // Stage 3: classification.
    let salary = predict_salary_band(&request.job_title, &found);
    let years = extract_experience_years(&request.resume_text);
    let education = detect_education(&request.resume_text);
    let certifications = detect_certifications(&request.resume_text);

    // Stage 4: response assembly.
    let top_skills: Vec<String> = found
        .iter()
        .take(MAX_FOUND_SKILLS)
        .map(|skill| skill.to_string())
        .collect();

    let parsed_resume = ParsedResume {
        experience_years: years,
        education: education.to_string(),
        skills: top_skills.clone(),
        skill_count: found.len(),
        resume_length: request.resume_text.chars().count(),
        certifications: certifications.iter().map(|c| c.to_string()).collect(),
        languages: LANGUAGES.iter().map(|l| l.to_string()).collect(),
        has_github: has_github_link(&request.resume_text),
        has_linkedin: has_linkedin_link(&request.resume_text),
    };

    MatchReport {
        predicted_salary: salary.to_string(),
        match_score: round_score(score),
        match_percentage: match_percentage(score),
        missing_skills: missing.iter().map(|skill| skill.to_string()).collect(),
        found_skills: top_skills,
        parsed_resume,
        analysis: MatchAnalysis {
            total_required_skills: required.len(),
            matched_skills: matched,
            relevance: relevance_tier(score).to_string(),
            experience_level: experience_level(years).to_string(),
        },
        job_analysis: analyze_job_title(&request.job_title),
        note: DISCLAIMER_NOTE.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
