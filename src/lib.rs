//! Resume Automation: collect resume details, send them to the resume analysis
//! service and render the job matches it returns.

pub mod cli;
pub mod core;
pub mod environment;
pub mod form;
pub mod render;
pub mod session;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::core::AnalysisClient;
pub use environment::EnvironmentConfig;
pub use form::{FormField, FormState};
pub use session::{AnalysisSession, UiPhase, ANALYSIS_FAILED_MESSAGE};
pub use types::{AnalysisRequest, AnalysisResult, ScoreTier, ShortlistScore};
