// src/types/response.rs
//! Response payload of the resume analysis service.
//!
//! The shape is owned by the external service; this crate only reads it.

use serde::{Deserialize, Serialize};

use crate::types::score::ShortlistScore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Any JSON number; rendered through `Display`, so `3.0` shows as `3`.
    pub total_jobs_analyzed: f64,
    pub summary: AnalysisSummary,
    pub job_analyses: Vec<JobAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub average_probability: f64,
    pub best_match: BestMatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub job_title: String,
    pub company: String,
    pub job_link: String,
    pub job_description: String,
    pub tailored_resume_download: String,
    pub tailored_resume: TailoredResume,
    pub analysis: FitAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub summary: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitAnalysis {
    pub shortlist_probability: ShortlistScore,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<MissingSkill>,
    pub rejection_reasons: Vec<String>,
}

/// A required skill the candidate lacks, with where to learn it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub platform: String,
}

impl AnalysisSummary {
    /// Average probability as shown to the user, e.g. `62.5%`.
    pub fn average_percent(&self) -> String {
        format!("{:.1}%", self.average_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::score::ScoreTier;

    const SAMPLE: &str = r#"{
        "total_jobs_analyzed": 2,
        "summary": {
            "average_probability": 61.34,
            "best_match": { "job_title": "Backend Engineer" }
        },
        "job_analyses": [
            {
                "job_title": "Backend Engineer",
                "company": "Acme",
                "job_link": "https://jobs.example.com/1",
                "job_description": "Build services in Rust.",
                "tailored_resume_download": "https://files.example.com/1.pdf",
                "tailored_resume": { "summary": "Rust engineer", "skills": ["Rust", "SQL"] },
                "analysis": {
                    "shortlist_probability": "82.5",
                    "matching_skills": ["Rust"],
                    "missing_skills": [{ "skill": "Kubernetes", "platform": "Coursera" }],
                    "rejection_reasons": ["Limited cloud experience"],
                    "extra_field": true
                }
            },
            {
                "job_title": "Data Analyst",
                "company": "Globex",
                "job_link": "https://jobs.example.com/2",
                "job_description": "Dashboards.",
                "tailored_resume_download": "https://files.example.com/2.pdf",
                "tailored_resume": { "summary": "Analyst", "skills": [] },
                "analysis": {
                    "shortlist_probability": 40,
                    "matching_skills": [],
                    "missing_skills": [],
                    "rejection_reasons": []
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_service_payload() {
        let result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.total_jobs_analyzed, 2.0);
        assert_eq!(result.summary.best_match.job_title, "Backend Engineer");
        assert_eq!(result.job_analyses.len(), 2);

        let first = &result.job_analyses[0].analysis;
        assert_eq!(first.shortlist_probability.value(), Some(82.5));
        assert_eq!(first.shortlist_probability.tier(), ScoreTier::Good);
        assert_eq!(first.missing_skills[0].platform, "Coursera");

        let second = &result.job_analyses[1].analysis;
        assert_eq!(second.shortlist_probability.tier(), ScoreTier::Poor);
    }

    #[test]
    fn test_missing_top_level_field_is_rejected() {
        let payload = r#"{ "total_jobs_analyzed": 0, "job_analyses": [] }"#;
        assert!(serde_json::from_str::<AnalysisResult>(payload).is_err());
    }

    #[test]
    fn test_float_job_count_is_accepted() {
        let payload = SAMPLE.replace("\"total_jobs_analyzed\": 2,", "\"total_jobs_analyzed\": 3.0,");
        let result: AnalysisResult = serde_json::from_str(&payload).unwrap();
        assert_eq!(result.total_jobs_analyzed, 3.0);
        assert_eq!(result.total_jobs_analyzed.to_string(), "3");
    }

    #[test]
    fn test_average_percent_uses_one_decimal() {
        let result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.summary.average_percent(), "61.3%");
    }
}
