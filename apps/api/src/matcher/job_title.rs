//! Job-title signals — role type and seniority read from title keywords.

use crate::matcher::report::JobAnalysis;

const TECH_ROLE_KEYWORDS: &[&str] = &["engineer", "developer", "programmer", "architect"];
const MANAGEMENT_KEYWORDS: &[&str] = &["manager", "lead", "head", "director"];
const SENIOR_KEYWORDS: &[&str] = &["senior", "sr", "principal", "staff"];
const JUNIOR_KEYWORDS: &[&str] = &["junior", "jr", "entry"];

/// Derives role flags and an estimated level from the job title alone.
/// Senior keywords are checked before junior ones, so a title carrying both
/// ("Senior Engineer, entry into platform team") reads as Senior.
pub fn analyze_job_title(job_title: &str) -> JobAnalysis {
    let title = job_title.to_lowercase();
    let contains_any =
        |keywords: &[&str]| keywords.iter().any(|keyword| title.contains(keyword));

    let estimated_level = if contains_any(SENIOR_KEYWORDS) {
        "Senior"
    } else if contains_any(JUNIOR_KEYWORDS) {
        "Junior"
    } else {
        "Mid"
    };

    JobAnalysis {
        is_tech_role: contains_any(TECH_ROLE_KEYWORDS),
        is_management: contains_any(MANAGEMENT_KEYWORDS),
        estimated_level: estimated_level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_role_detection() {
        assert!(analyze_job_title("Backend Engineer").is_tech_role);
        assert!(analyze_job_title("Software Developer").is_tech_role);
        assert!(analyze_job_title("Solutions Architect").is_tech_role);
        assert!(!analyze_job_title("Product Designer").is_tech_role);
    }

    #[test]
    fn test_management_detection() {
        assert!(analyze_job_title("Engineering Manager").is_management);
        assert!(analyze_job_title("Tech Lead").is_management);
        assert!(analyze_job_title("Head of Platform").is_management);
        assert!(!analyze_job_title("Backend Engineer").is_management);
    }

    #[test]
    fn test_estimated_level() {
        assert_eq!(analyze_job_title("Senior Engineer").estimated_level, "Senior");
        assert_eq!(analyze_job_title("Staff Engineer").estimated_level, "Senior");
        assert_eq!(analyze_job_title("Junior Developer").estimated_level, "Junior");
        assert_eq!(analyze_job_title("Entry Developer").estimated_level, "Junior");
        assert_eq!(analyze_job_title("Backend Engineer").estimated_level, "Mid");
    }

    #[test]
    fn test_senior_wins_over_junior() {
        let analysis = analyze_job_title("Senior Engineer (entry into platform team)");
        assert_eq!(analysis.estimated_level, "Senior");
    }

    #[test]
    fn test_title_flags_are_independent() {
        let analysis = analyze_job_title("Senior Engineering Manager");
        assert!(analysis.is_tech_role); // "engineer" inside "engineering"
        assert!(analysis.is_management);
        assert_eq!(analysis.estimated_level, "Senior");
    }

    #[test]
    fn test_case_insensitive() {
        let analysis = analyze_job_title("SENIOR DEVELOPER");
        assert!(analysis.is_tech_role);
        assert_eq!(analysis.estimated_level, "Senior");
    }
}
