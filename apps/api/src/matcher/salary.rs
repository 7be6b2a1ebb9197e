//! Salary banding — ordered substring rules over the job title.
//!
//! The table is evaluated top to bottom and the first rule whose trigger
//! appears in the lowercased title wins, so order is load-bearing: "mid"
//! must come before "senior" ("Mid-Senior level" is a mid band) and "lead"
//! before "manager" ("Lead Engineering Manager" is a lead band). Titles
//! that trigger nothing fall back to a skill-based default.

/// (title triggers, band) rules in evaluation order.
const TITLE_BANDS: &[(&[&str], &str)] = &[
    (&["intern", "fresher", "entry level"], "5-8 million VND"),
    (&["junior", "entry"], "10-15 million VND"),
    (&["mid", "2-3", "3-5", "associate"], "15-25 million VND"),
    (&["senior", "5+", "sr"], "25-35 million VND"),
    (&["lead", "principal", "staff"], "30-45 million VND"),
    (&["manager", "head", "director"], "40-60 million VND"),
    (&["vp", "vice president"], "70-100 million VND"),
    (&["cto", "c-level"], "100-150 million VND"),
];

/// Skills that bump the no-title-match fallback into the ML band.
const ML_SKILLS: &[&str] = &["python", "machine learning", "tensorflow", "pytorch"];

const ML_FALLBACK_BAND: &str = "20-30 million VND";
const DEFAULT_BAND: &str = "15-25 million VND";

/// Picks the salary band for a job title, consulting found skills only when
/// no title rule fires.
pub fn predict_salary_band(job_title: &str, found_skills: &[&'static str]) -> &'static str {
    let title = job_title.to_lowercase();

    for &(triggers, band) in TITLE_BANDS {
        if triggers.iter().any(|trigger| title.contains(trigger)) {
            return band;
        }
    }

    if ML_SKILLS.iter().any(|skill| found_skills.contains(skill)) {
        ML_FALLBACK_BAND
    } else {
        DEFAULT_BAND
    }
}
