//! Skill vocabulary — the fixed keyword list every matching stage scans against.
//!
//! Matching is case-insensitive substring containment, so overlapping entries
//! both hit (`javascript` also surfaces `java`, `html` surfaces `ml`). That is
//! the documented behavior of this heuristic, not an accident; the ordered
//! vocabulary doubles as the canonical output order for every skill list the
//! service emits.

/// Recognized technology keywords, in canonical (output) order.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "nodejs",
    "node.js",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "mongodb",
    "postgresql",
    "mysql",
    "tensorflow",
    "pytorch",
    "machine learning",
    "ml",
    "ai",
    "devops",
    "git",
    "ci/cd",
    "typescript",
    "vue",
    "angular",
    "flask",
    "django",
    "fastapi",
    "rest api",
    "graphql",
    "sql",
    "nosql",
    "redis",
    "elasticsearch",
    "kafka",
    "microservices",
];

/// Cap on `found_skills` (and `parsed_resume.skills`) in the response.
pub const MAX_FOUND_SKILLS: usize = 15;

/// Cap on `missing_skills` in the response.
pub const MAX_MISSING_SKILLS: usize = 5;

/// Returns every vocabulary entry contained in `text`, in vocabulary order.
pub fn scan_skills(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();
    TECH_SKILLS
        .iter()
        .filter(|skill| text.contains(*skill))
        .copied()
        .collect()
}

/// Returns the vocabulary entries a job asks for: anything mentioned in the
/// requirements OR the description, in vocabulary order.
pub fn required_skills(requirements: &str, description: &str) -> Vec<&'static str> {
    let requirements = requirements.to_lowercase();
    let description = description.to_lowercase();
    TECH_SKILLS
        .iter()
        .filter(|skill| requirements.contains(*skill) || description.contains(*skill))
        .copied()
        .collect()
}

/// Required skills the resume does not cover, in vocabulary order, capped at
/// [`MAX_MISSING_SKILLS`]. Vocabulary order makes the truncated list
/// deterministic across runs.
pub fn missing_skills(required: &[&'static str], found: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|skill| !found.contains(*skill))
        .take(MAX_MISSING_SKILLS)
        .copied()
        .collect()
}
