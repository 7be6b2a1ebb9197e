// The matching engine: skill extraction, scoring, classification, and
// response assembly, plus the /predict handler that fronts it.
// Pure functions throughout — the only async surface is the predictor trait.

pub mod handlers;
pub mod job_title;
pub mod predictor;
pub mod report;
pub mod resume_parser;
pub mod salary;
pub mod scoring;
pub mod vocabulary;
