// src/types/mod.rs
pub mod request;
pub mod response;
pub mod score;

pub use request::AnalysisRequest;
pub use response::{
    AnalysisResult, AnalysisSummary, BestMatch, FitAnalysis, JobAnalysis, MissingSkill,
    TailoredResume,
};
pub use score::{ScoreTier, ShortlistScore};
