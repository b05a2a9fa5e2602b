// src/web/types.rs

use rocket::form::FromForm;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::core::AnalysisClient;
use crate::form::{FormField, FormState};
use crate::session::AnalysisSession;

/// Oldest views are forgotten past this many.
pub const MAX_VIEWS: usize = 1024;

pub type SharedSession = Arc<tokio::sync::Mutex<AnalysisSession>>;

pub struct ServerConfig {
    pub client: AnalysisClient,
    pub views: ViewStore,
}

impl ServerConfig {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            views: ViewStore::default(),
        }
    }
}

#[derive(Default)]
struct ViewSlots {
    sessions: HashMap<String, SharedSession>,
    order: VecDeque<String>,
}

/// Sessions of open form views, keyed by the id the page posts back.
#[derive(Default)]
pub struct ViewStore {
    slots: Mutex<ViewSlots>,
}

impl ViewStore {
    /// Session for `view_id`, or a fresh one under a new id when the id is
    /// absent or unknown.
    pub fn open(&self, view_id: Option<&str>, client: &AnalysisClient) -> (String, SharedSession) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());

        if let Some((id, session)) =
            view_id.and_then(|id| slots.sessions.get_key_value(id))
        {
            return (id.clone(), Arc::clone(session));
        }

        let id = Uuid::new_v4().to_string();
        let session = Arc::new(tokio::sync::Mutex::new(AnalysisSession::new(
            client.clone(),
        )));

        while slots.order.len() >= MAX_VIEWS {
            if let Some(oldest) = slots.order.pop_front() {
                slots.sessions.remove(&oldest);
            }
        }
        slots.sessions.insert(id.clone(), Arc::clone(&session));
        slots.order.push_back(id.clone());
        debug!("Opened form view {} ({} open)", id, slots.order.len());

        (id, session)
    }

    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Posted resume form. Absent inputs are treated as empty.
#[derive(Debug, Default, FromForm)]
pub struct ResumeSubmission {
    pub view_id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub summary: Option<String>,
    pub technical_skills: Option<String>,
    pub soft_skills: Option<String>,
    pub tools: Option<String>,
    pub languages: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<String>,
    pub certifications: Option<String>,
    pub achievements: Option<String>,
}

impl ResumeSubmission {
    /// Applies every posted input through the form's change handler.
    /// The view id is not part of the form and is ignored here.
    pub fn into_form_state(self) -> FormState {
        let inputs = [
            (FormField::FullName, self.full_name),
            (FormField::Email, self.email),
            (FormField::Phone, self.phone),
            (FormField::Location, self.location),
            (FormField::Linkedin, self.linkedin),
            (FormField::Github, self.github),
            (FormField::Portfolio, self.portfolio),
            (FormField::Summary, self.summary),
            (FormField::TechnicalSkills, self.technical_skills),
            (FormField::SoftSkills, self.soft_skills),
            (FormField::Tools, self.tools),
            (FormField::Languages, self.languages),
            (FormField::Experience, self.experience),
            (FormField::Education, self.education),
            (FormField::Projects, self.projects),
            (FormField::Certifications, self.certifications),
            (FormField::Achievements, self.achievements),
        ];

        inputs
            .into_iter()
            .fold(FormState::new(), |form, (field, value)| {
                form.with_field(field, value.unwrap_or_default())
            })
    }
}
