// src/types/request.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /resumes/analyze-all`, derived from the form at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: String,
}
