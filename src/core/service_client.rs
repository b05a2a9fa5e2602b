// src/core/service_client.rs
//! HTTP client for the resume analysis service

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, trace};

use crate::types::{AnalysisRequest, AnalysisResult};
use crate::utils::normalize_base_url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

const ANALYZE_ALL_ENDPOINT: &str = "/resumes/analyze-all";

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_ALL_ENDPOINT)
    }

    /// Send skills, narrative and projects; receive job matches for all jobs.
    pub async fn analyze_all(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = self.analyze_url();

        info!(
            "Calling resume analysis service: {} ({} skills)",
            url,
            request.skills.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        trace!("Response status: {}", status);

        let response_text = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            anyhow::bail!("Analysis service returned error {}: {}", status, response_text);
        }

        let result: AnalysisResult = serde_json::from_str(&response_text).with_context(|| {
            format!(
                "Failed to parse analysis response. Raw response: {}",
                response_text
            )
        })?;

        info!(
            "Received analysis for {} jobs",
            result.total_jobs_analyzed
        );
        Ok(result)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    pub(crate) fn sample_result() -> serde_json::Value {
        serde_json::json!({
            "total_jobs_analyzed": 1,
            "summary": {
                "average_probability": 72.0,
                "best_match": { "job_title": "Platform Engineer" }
            },
            "job_analyses": [{
                "job_title": "Platform Engineer",
                "company": "Initech",
                "job_link": "https://jobs.example.com/42",
                "job_description": "Own the deploy pipeline.",
                "tailored_resume_download": "https://files.example.com/42.pdf",
                "tailored_resume": { "summary": "Infra engineer", "skills": ["Rust", "Docker"] },
                "analysis": {
                    "shortlist_probability": "72",
                    "matching_skills": ["Docker"],
                    "missing_skills": [{ "skill": "Terraform", "platform": "Udemy" }],
                    "rejection_reasons": ["No on-call experience"]
                }
            }]
        })
    }

    /// Mock analysis service that echoes the skills it received as the best match.
    pub(crate) async fn spawn_service(status: StatusCode, body: serde_json::Value) -> String {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let app = Router::new().route(
            "/resumes/analyze-all",
            post(move |Json(request): Json<AnalysisRequest>| {
                let mut body = body.clone();
                if status.is_success() && !request.skills.is_empty() {
                    body["summary"]["best_match"]["job_title"] =
                        serde_json::Value::String(request.skills.join("+"));
                }
                async move { (status, Json(body)) }
            }),
        );
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    /// Base URL of a port nothing listens on.
    pub(crate) async fn closed_service() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        format!("http://{addr}")
    }

    fn request(skills: &[&str]) -> AnalysisRequest {
        AnalysisRequest {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: "E".to_string(),
            projects: "P".to_string(),
        }
    }

    #[test]
    fn test_analyze_url_strips_trailing_slash() {
        let client = AnalysisClient::new("http://localhost:8001/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8001");
        assert_eq!(
            client.analyze_url(),
            "http://localhost:8001/resumes/analyze-all"
        );
    }

    #[tokio::test]
    async fn test_analyze_all_posts_request_and_parses_result() {
        let url = spawn_service(StatusCode::OK, sample_result()).await;
        let client = AnalysisClient::new(&url, None).unwrap();

        let result = client.analyze_all(&request(&["Rust", "Go"])).await.unwrap();
        assert_eq!(result.summary.best_match.job_title, "Rust+Go");
        assert_eq!(result.job_analyses[0].company, "Initech");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let url = spawn_service(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "detail": "boom" }),
        )
        .await;
        let client = AnalysisClient::new(&url, None).unwrap();

        let err = client.analyze_all(&request(&["Rust"])).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let url = spawn_service(StatusCode::OK, serde_json::json!({ "jobs": [] })).await;
        let client = AnalysisClient::new(&url, None).unwrap();

        assert!(client.analyze_all(&request(&[])).await.is_err());
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        let url = closed_service().await;
        let client = AnalysisClient::new(&url, Some(Duration::from_secs(5))).unwrap();

        assert!(client.analyze_all(&request(&["Rust"])).await.is_err());
    }
}
