// src/web/handlers/form_handlers.rs
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

use crate::form::FormState;
use crate::render::{render_page, PageView};
use crate::web::types::{ResumeSubmission, ServerConfig};

pub async fn index_handler() -> RawHtml<String> {
    let form = FormState::new();
    RawHtml(render_page(&PageView::empty(&form)))
}

/// Each page carries the id of its view; posting it back reuses that view's
/// session, so an error is shown above the results of an earlier success.
pub async fn submit_handler(
    mut submission: ResumeSubmission,
    config: &State<ServerConfig>,
) -> RawHtml<String> {
    let view_id = submission.view_id.take();
    let form = submission.into_form_state();
    let (view_id, session) = config.views.open(view_id.as_deref(), &config.client);
    let mut session = session.lock().await;
    session.set_form(form);

    let missing = session.form().missing_required();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|field| field.name()).collect();
        warn!("Form submitted without required fields: {}", names.join(", "));
        return RawHtml(render_page(&PageView {
            view_id: Some(&view_id),
            missing: &missing,
            result: session.result(),
            analyzed_at: session.analyzed_at(),
            ..PageView::empty(session.form())
        }));
    }

    let phase = session.submit().await;
    info!("Form view {}: submission finished: {:?}", view_id, phase);

    RawHtml(render_page(&PageView {
        form: session.form(),
        view_id: Some(&view_id),
        error: session.error(),
        missing: &[],
        result: session.result(),
        analyzed_at: session.analyzed_at(),
    }))
}

pub async fn health_handler() -> Json<&'static str> {
    Json("OK")
}
