//! Resume parsing — years of experience, education tier, certifications,
//! languages, and profile-link flags pulled out of free-form resume text.
//!
//! All matching runs on the lowercased text. Experience patterns are tried
//! in order and the first capture wins; education tiers are checked highest
//! first so a resume listing both a bachelor's and a PhD reports the PhD.

use once_cell::sync::Lazy;
use regex::Regex;

/// Experience extraction patterns, in priority order. The first pattern with
/// a match anywhere in the text supplies the answer, so "3-5 years experience"
/// reads as 5 (pattern one matches "5 years experience") while a bare
/// "3-5 years" reads as 3 (only the range pattern matches).
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)").unwrap(),
        Regex::new(r"experience\s*:?\s*(\d+)").unwrap(),
        Regex::new(r"(\d+)\s*-\s*\d+\s*(?:years?|yrs?)").unwrap(),
    ]
});

/// Education tiers, highest first; the first matching tier wins. Short
/// abbreviations ("bs", "ms") sit behind word boundaries so they stop
/// matching inside words like "jobs" or "systems"; the longer keywords
/// stay plain substrings.
static EDUCATION_TIERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"phd|ph\.d|doctorate").unwrap(), "PhD"),
        (
            Regex::new(r"master|meng|\bm\.?s\.?\b").unwrap(),
            "Master's Degree",
        ),
        (
            Regex::new(r"bachelor|beng|\bb\.?s\.?\b").unwrap(),
            "Bachelor's Degree",
        ),
    ]
});

pub const EDUCATION_NOT_SPECIFIED: &str = "Not specified";

/// (keyword, certification label) rules; every matching rule appends.
const CERTIFICATION_RULES: &[(&str, &str)] = &[
    ("aws", "AWS Certified"),
    ("azure", "Azure Certified"),
    ("gcp", "Google Cloud Certified"),
];

/// Languages reported for every resume until real language detection ships.
pub const LANGUAGES: &[&str] = &["Vietnamese", "English"];

/// Extracts years of experience; 0 when no pattern matches.
pub fn extract_experience_years(resume_text: &str) -> u32 {
    let text = resume_text.to_lowercase();
    for pattern in EXPERIENCE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&text) {
            return caps[1].parse().unwrap_or(0);
        }
    }
    0
}

/// Highest education tier mentioned in the resume.
pub fn detect_education(resume_text: &str) -> &'static str {
    let text = resume_text.to_lowercase();
    EDUCATION_TIERS
        .iter()
        .find(|(pattern, _)| pattern.is_match(&text))
        .map(|(_, label)| *label)
        .unwrap_or(EDUCATION_NOT_SPECIFIED)
}

/// Certification labels inferred from cloud-provider mentions.
pub fn detect_certifications(resume_text: &str) -> Vec<&'static str> {
    let text = resume_text.to_lowercase();
    CERTIFICATION_RULES
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, label)| *label)
        .collect()
}

pub fn has_github_link(resume_text: &str) -> bool {
    resume_text.to_lowercase().contains("github.com")
}

pub fn has_linkedin_link(resume_text: &str) -> bool {
    resume_text.to_lowercase().contains("linkedin.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_with_experience_suffix() {
        assert_eq!(extract_experience_years("5 years of experience in Java"), 5);
        assert_eq!(extract_experience_years("10+ years experience"), 10);
        assert_eq!(extract_experience_years("3 yrs exp"), 3);
    }

    #[test]
    fn test_years_after_experience_label() {
        assert_eq!(extract_experience_years("Experience: 7"), 7);
        assert_eq!(extract_experience_years("experience 4 companies"), 4);
    }

    #[test]
    fn test_years_from_bare_range() {
        // Only the range pattern matches, and it captures the lower bound.
        assert_eq!(extract_experience_years("worked 3-5 years at BigCo"), 3);
    }

    #[test]
    fn test_range_with_experience_suffix_prefers_first_pattern() {
        // Pattern one finds "5 years experience" inside the range text.
        assert_eq!(extract_experience_years("3-5 years experience"), 5);
    }

    #[test]
    fn test_years_default_zero() {
        assert_eq!(extract_experience_years("fresh graduate, eager to learn"), 0);
        assert_eq!(extract_experience_years(""), 0);
    }

    #[test]
    fn test_extraction_is_case_insensitive() {
        assert_eq!(extract_experience_years("8 YEARS OF EXPERIENCE"), 8);
    }

    #[test]
    fn test_education_tiers() {
        assert_eq!(detect_education("Bachelor of Science in CS"), "Bachelor's Degree");
        assert_eq!(detect_education("B.S. Computer Science"), "Bachelor's Degree");
        assert_eq!(detect_education("BEng Mechanical"), "Bachelor's Degree");
        assert_eq!(detect_education("Master of Engineering"), "Master's Degree");
        assert_eq!(detect_education("M.S. in Data Science"), "Master's Degree");
        assert_eq!(detect_education("PhD in NLP"), "PhD");
        assert_eq!(detect_education("Ph.D. candidate"), "PhD");
        assert_eq!(detect_education("Doctorate in Physics"), "PhD");
    }

    #[test]
    fn test_highest_tier_wins() {
        let text = "Bachelor in CS, later a PhD in machine learning";
        assert_eq!(detect_education(text), "PhD");

        let text = "bachelor's degree followed by a master's degree";
        assert_eq!(detect_education(text), "Master's Degree");
    }

    #[test]
    fn test_education_not_specified() {
        assert_eq!(detect_education("self-taught programmer"), "Not specified");
    }

    #[test]
    fn test_short_abbreviations_need_word_boundaries() {
        // "bs" must not fire inside "jobs", nor "ms" inside "systems".
        assert_eq!(detect_education("held many jobs building systems"), "Not specified");
        assert_eq!(detect_education("BS in Mathematics"), "Bachelor's Degree");
        assert_eq!(detect_education("MS, Stanford"), "Master's Degree");
    }

    #[test]
    fn test_certifications_stack() {
        let certs = detect_certifications("AWS and GCP deployments");
        assert_eq!(certs, vec!["AWS Certified", "Google Cloud Certified"]);
    }

    #[test]
    fn test_certifications_empty_without_cloud_mentions() {
        assert!(detect_certifications("Python and SQL").is_empty());
    }

    #[test]
    fn test_profile_links() {
        assert!(has_github_link("see github.com/someone"));
        assert!(has_github_link("GITHUB.COM/SOMEONE"));
        assert!(!has_github_link("gitlab.com/someone"));
        assert!(has_linkedin_link("linkedin.com/in/someone"));
        assert!(!has_linkedin_link("no links here"));
    }
}
