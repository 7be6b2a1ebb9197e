//! Response shapes for the prediction endpoint. Field order mirrors the
//! JSON the frontend already consumes, so keep declaration order stable.

use serde::{Deserialize, Serialize};

/// Resume-parsing metadata included in every match report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub experience_years: u32,
    pub education: String,
    /// Found skills, capped for display.
    pub skills: Vec<String>,
    /// Total found skills before the display cap.
    pub skill_count: usize,
    /// Character count of the raw resume text.
    pub resume_length: usize,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub has_github: bool,
    pub has_linkedin: bool,
}

/// Skill-coverage summary: how much of the job's ask the resume covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub total_required_skills: usize,
    pub matched_skills: usize,
    pub relevance: String,
    pub experience_level: String,
}

/// Signals derived from the job title alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub is_tech_role: bool,
    pub is_management: bool,
    pub estimated_level: String,
}

/// Full prediction returned to callers of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub predicted_salary: String,
    /// Rounded to two decimals; never exceeds 0.95.
    pub match_score: f64,
    /// Whole-percent rendering of the raw score, e.g. "80%".
    pub match_percentage: String,
    pub missing_skills: Vec<String>,
    pub found_skills: Vec<String>,
    pub parsed_resume: ParsedResume,
    pub analysis: MatchAnalysis,
    pub job_analysis: JobAnalysis,
    /// Fixed disclaimer while the heuristic stands in for the real model.
    pub note: String,
}
