// src/core/mod.rs
//! Outbound services

pub mod service_client;

pub use service_client::{AnalysisClient, DEFAULT_API_BASE_URL};
