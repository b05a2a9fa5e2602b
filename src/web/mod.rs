// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::figment::Figment;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use tracing::info;

use crate::core::AnalysisClient;
use crate::environment::EnvironmentConfig;
use crate::form::FormState;
use crate::render::{render_page, PageView};

#[get("/")]
pub async fn index() -> RawHtml<String> {
    handlers::index_handler().await
}

#[post("/", data = "<submission>")]
pub async fn submit(
    submission: Form<ResumeSubmission>,
    config: &State<ServerConfig>,
) -> RawHtml<String> {
    handlers::submit_handler(submission.into_inner(), config).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

fn error_page(message: &str) -> RawHtml<String> {
    let form = FormState::new();
    RawHtml(render_page(&PageView {
        error: Some(message),
        ..PageView::empty(&form)
    }))
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> RawHtml<String> {
    error_page("Page not found")
}

#[rocket::catch(422)]
pub fn unprocessable() -> RawHtml<String> {
    error_page("Invalid form submission")
}

#[rocket::catch(500)]
pub fn internal_error() -> RawHtml<String> {
    error_page("Internal server error")
}

pub fn build_rocket(figment: Figment, server_config: ServerConfig) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(server_config)
        .register("/", catchers![not_found, unprocessable, internal_error])
        .mount("/", routes![index, submit, health])
}

// Main server start function
pub async fn start_web_server(config: &EnvironmentConfig) -> Result<()> {
    let client = AnalysisClient::new(&config.api_base_url, config.timeout())?;

    info!("Starting Resume Automation web form");
    info!("Analysis service: {}", client.analyze_url());
    info!("Server: http://{}:{}", config.address, config.port);

    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));

    build_rocket(figment, ServerConfig::new(client))
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
