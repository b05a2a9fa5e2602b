// src/form/mod.rs
//! Resume form state and the request derived from it at submit time.

pub mod profile;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::AnalysisRequest;
use crate::utils::{normalize_field_name, split_list};

/// Every input of the resume form, in state order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Portfolio,
    Summary,
    TechnicalSkills,
    SoftSkills,
    Tools,
    Languages,
    Experience,
    Education,
    Projects,
    Certifications,
    Achievements,
}

/// HTML input type used when rendering a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Url,
    TextArea { rows: u8 },
}

impl FormField {
    pub const ALL: [FormField; 17] = [
        FormField::FullName,
        FormField::Email,
        FormField::Phone,
        FormField::Location,
        FormField::Linkedin,
        FormField::Github,
        FormField::Portfolio,
        FormField::Summary,
        FormField::TechnicalSkills,
        FormField::SoftSkills,
        FormField::Tools,
        FormField::Languages,
        FormField::Experience,
        FormField::Education,
        FormField::Projects,
        FormField::Certifications,
        FormField::Achievements,
    ];

    /// Skill fields, in the order their entries are concatenated.
    pub const SKILL_FIELDS: [FormField; 4] = [
        FormField::TechnicalSkills,
        FormField::SoftSkills,
        FormField::Tools,
        FormField::Languages,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Location => "location",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Portfolio => "portfolio",
            Self::Summary => "summary",
            Self::TechnicalSkills => "technical_skills",
            Self::SoftSkills => "soft_skills",
            Self::Tools => "tools",
            Self::Languages => "languages",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Achievements => "achievements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Location => "Location (City, State)",
            Self::Linkedin => "LinkedIn Profile URL",
            Self::Github => "GitHub Profile URL",
            Self::Portfolio => "Portfolio Website URL",
            Self::Summary => "Professional Summary",
            Self::TechnicalSkills => "Technical Skills",
            Self::SoftSkills => "Soft Skills",
            Self::Tools => "Tools & Frameworks",
            Self::Languages => "Programming Languages",
            Self::Experience => "Work Experience",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Achievements => "Achievements & Awards",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Location => "Location (City, State)",
            Self::Linkedin => "LinkedIn Profile URL",
            Self::Github => "GitHub Profile URL",
            Self::Portfolio => "Portfolio Website URL",
            Self::Summary => {
                "Brief professional summary highlighting your key strengths and career objectives..."
            }
            Self::TechnicalSkills => {
                "Technical Skills (Python, JavaScript, React, Node.js, SQL, etc.)"
            }
            Self::SoftSkills => "Soft Skills (Leadership, Communication, Problem-solving, etc.)",
            Self::Tools => "Tools & Frameworks (Git, Docker, AWS, Jenkins, etc.)",
            Self::Languages => "Programming Languages (Python, Java, C++, etc.)",
            Self::Experience => {
                "Job Title | Company Name | Duration (MM/YYYY - MM/YYYY)\nKey responsibilities and achievements..."
            }
            Self::Education => {
                "Degree | University/College | Graduation Year\nRelevant coursework, GPA (if above 3.5), honors..."
            }
            Self::Projects => {
                "Project Name | Technologies Used\nProject description, your role, key features, impact..."
            }
            Self::Certifications => {
                "Certification Name | Issuing Organization | Date\nAWS Certified Solutions Architect | Amazon | 2023"
            }
            Self::Achievements => {
                "Employee of the Month | Company Name | 2023\nHackathon Winner | Event Name | 2022"
            }
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Phone => InputKind::Tel,
            Self::Linkedin | Self::Github | Self::Portfolio => InputKind::Url,
            Self::Summary | Self::Education | Self::Certifications | Self::Achievements => {
                InputKind::TextArea { rows: 3 }
            }
            Self::Projects => InputKind::TextArea { rows: 5 },
            Self::Experience => InputKind::TextArea { rows: 6 },
            _ => InputKind::Text,
        }
    }

    /// Presence is the only validation; content is never format-checked.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::FullName
                | Self::Email
                | Self::Summary
                | Self::TechnicalSkills
                | Self::Experience
                | Self::Education
                | Self::Projects
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = anyhow::Error;

    /// Accepts `technical_skills`, `technicalSkills` and similar spellings.
    fn from_str(name: &str) -> Result<Self> {
        let wanted = normalize_field_name(name);
        Self::ALL
            .into_iter()
            .find(|field| normalize_field_name(field.name()) == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown form field: {}", name))
    }
}

/// Text of every form input. Created empty, replaced one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormState {
    #[serde(alias = "fullName")]
    full_name: String,
    email: String,
    phone: String,
    location: String,
    linkedin: String,
    github: String,
    portfolio: String,
    summary: String,
    #[serde(alias = "technicalSkills")]
    technical_skills: String,
    #[serde(alias = "softSkills")]
    soft_skills: String,
    tools: String,
    languages: String,
    experience: String,
    education: String,
    projects: String,
    certifications: String,
    achievements: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Location => &self.location,
            FormField::Linkedin => &self.linkedin,
            FormField::Github => &self.github,
            FormField::Portfolio => &self.portfolio,
            FormField::Summary => &self.summary,
            FormField::TechnicalSkills => &self.technical_skills,
            FormField::SoftSkills => &self.soft_skills,
            FormField::Tools => &self.tools,
            FormField::Languages => &self.languages,
            FormField::Experience => &self.experience,
            FormField::Education => &self.education,
            FormField::Projects => &self.projects,
            FormField::Certifications => &self.certifications,
            FormField::Achievements => &self.achievements,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Location => &mut self.location,
            FormField::Linkedin => &mut self.linkedin,
            FormField::Github => &mut self.github,
            FormField::Portfolio => &mut self.portfolio,
            FormField::Summary => &mut self.summary,
            FormField::TechnicalSkills => &mut self.technical_skills,
            FormField::SoftSkills => &mut self.soft_skills,
            FormField::Tools => &mut self.tools,
            FormField::Languages => &mut self.languages,
            FormField::Experience => &mut self.experience,
            FormField::Education => &mut self.education,
            FormField::Projects => &mut self.projects,
            FormField::Certifications => &mut self.certifications,
            FormField::Achievements => &mut self.achievements,
        }
    }

    /// Returns a copy with `field` replaced; `self` is left as is.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    pub fn with_named_field(&self, name: &str, value: impl Into<String>) -> Result<Self> {
        let field: FormField = name.parse()?;
        Ok(self.with_field(field, value))
    }

    pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Required fields that are empty or whitespace only.
    pub fn missing_required(&self) -> Vec<FormField> {
        self.fields()
            .filter(|(field, value)| field.is_required() && value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Skill entries of the four skill fields, concatenated in fixed order.
    /// Entries repeated across fields are kept.
    pub fn skills(&self) -> Vec<String> {
        FormField::SKILL_FIELDS
            .into_iter()
            .flat_map(|field| split_list(self.get(field)))
            .collect()
    }

    /// Experience followed by labelled education, certifications and achievements.
    pub fn narrative(&self) -> String {
        format!(
            "{}\n\nEducation: {}\n\nCertifications: {}\n\nAchievements: {}",
            self.experience, self.education, self.certifications, self.achievements
        )
    }

    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            skills: self.skills(),
            experience: self.narrative(),
            projects: self.projects.clone(),
        }
    }
}
