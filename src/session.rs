// src/session.rs
//! Form controller: owns the form, the loading flag, the error and the last result.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{error, info};
use uuid::Uuid;

use crate::core::AnalysisClient;
use crate::form::{FormField, FormState};
use crate::types::AnalysisResult;

/// The only failure message ever shown to the user.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// State of one form view. Each view owns its own session.
///
/// A failed submission sets the error but keeps the result of an earlier
/// successful one, so both are shown together.
#[derive(Debug)]
pub struct AnalysisSession {
    client: AnalysisClient,
    form: FormState,
    loading: bool,
    error: Option<String>,
    result: Option<AnalysisResult>,
    analyzed_at: Option<DateTime<Utc>>,
}

impl AnalysisSession {
    pub fn new(client: AnalysisClient) -> Self {
        Self::with_form(client, FormState::new())
    }

    pub fn with_form(client: AnalysisClient, form: FormState) -> Self {
        Self {
            client,
            form,
            loading: false,
            error: None,
            result: None,
            analyzed_at: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Replace the whole form, e.g. with the values of a posted page.
    pub fn set_form(&mut self, form: FormState) {
        self.form = form;
    }

    /// Change handler: replace a single field of the form.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form = self.form.with_field(field, value);
    }

    pub fn update_named_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.form = self.form.with_named_field(name, value)?;
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn analyzed_at(&self) -> Option<DateTime<Utc>> {
        self.analyzed_at
    }

    pub fn phase(&self) -> UiPhase {
        if self.loading {
            UiPhase::Loading
        } else if self.error.is_some() {
            UiPhase::Failed
        } else if self.result.is_some() {
            UiPhase::Success
        } else {
            UiPhase::Idle
        }
    }

    /// Submit handler. Sends one request and records its outcome.
    pub async fn submit(&mut self) -> UiPhase {
        let submission_id = Uuid::new_v4();
        self.loading = true;
        self.error = None;

        let request = self.form.to_request();
        info!(
            "Submission {}: analyzing resume with {} skills",
            submission_id,
            request.skills.len()
        );

        match self.client.analyze_all(&request).await {
            Ok(result) => {
                info!(
                    "Submission {}: received {} job analyses",
                    submission_id,
                    result.job_analyses.len()
                );
                self.result = Some(result);
                self.analyzed_at = Some(Utc::now());
            }
            Err(e) => {
                error!("Submission {}: resume analysis failed: {:#}", submission_id, e);
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }

        self.loading = false;
        self.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service_client::tests::{closed_service, sample_result, spawn_service};
    use axum::http::StatusCode;

    fn session_for(url: &str) -> AnalysisSession {
        let mut session = AnalysisSession::new(AnalysisClient::new(url, None).unwrap());
        session.update_field(FormField::TechnicalSkills, "Rust, Docker");
        session.update_field(FormField::Projects, "CI bot");
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session_for("http://localhost:8001");
        assert_eq!(session.phase(), UiPhase::Idle);
        assert!(!session.is_loading());
        assert!(session.error().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_update_named_field() {
        let mut session = session_for("http://localhost:8001");
        session.update_named_field("fullName", "Ada").unwrap();
        assert_eq!(session.form().get(FormField::FullName), "Ada");
        assert!(session.update_named_field("age", "36").is_err());
        assert_eq!(session.form().get(FormField::Projects), "CI bot");
    }

    #[tokio::test]
    async fn test_successful_submit_stores_result() {
        let url = spawn_service(StatusCode::OK, sample_result()).await;
        let mut session = session_for(&url);

        assert_eq!(session.submit().await, UiPhase::Success);
        assert!(!session.is_loading());
        assert!(session.error().is_none());
        assert!(session.analyzed_at().is_some());
        let result = session.result().unwrap();
        assert_eq!(result.summary.best_match.job_title, "Rust+Docker");
    }

    #[tokio::test]
    async fn test_network_failure_sets_fixed_message() {
        let url = closed_service().await;
        let mut session = session_for(&url);

        assert_eq!(session.submit().await, UiPhase::Failed);
        assert_eq!(
            session.error(),
            Some("Failed to analyze resume. Please try again.")
        );
        assert!(!session.is_loading());
        assert!(session.result().is_none());
    }

    #[tokio::test]
    async fn test_error_after_success_keeps_previous_result() {
        let url = spawn_service(StatusCode::OK, sample_result()).await;
        let mut session = session_for(&url);
        session.submit().await;
        let previous = session.result().cloned().unwrap();

        session.client = AnalysisClient::new(&closed_service().await, None).unwrap();
        assert_eq!(session.submit().await, UiPhase::Failed);
        assert_eq!(session.error(), Some(ANALYSIS_FAILED_MESSAGE));
        assert_eq!(session.result(), Some(&previous));
    }

    #[tokio::test]
    async fn test_resubmit_clears_error_and_replaces_result() {
        let url = spawn_service(StatusCode::BAD_GATEWAY, serde_json::json!({})).await;
        let mut session = session_for(&url);
        assert_eq!(session.submit().await, UiPhase::Failed);

        session.client = AnalysisClient::new(
            &spawn_service(StatusCode::OK, sample_result()).await,
            None,
        )
        .unwrap();
        session.update_field(FormField::TechnicalSkills, "Go");
        assert_eq!(session.submit().await, UiPhase::Success);
        assert!(session.error().is_none());
        assert_eq!(session.result().unwrap().summary.best_match.job_title, "Go");
    }
}
