// src/render/html.rs
//! Single-page HTML form and results.

use chrono::{DateTime, Utc};

use crate::form::{FormField, FormState, InputKind};
use crate::types::{AnalysisResult, JobAnalysis};
use crate::utils::escape_html;

const PERSONAL_FIELDS: [FormField; 7] = [
    FormField::FullName,
    FormField::Email,
    FormField::Phone,
    FormField::Location,
    FormField::Linkedin,
    FormField::Github,
    FormField::Portfolio,
];

// Display order differs from the order skills are sent in.
const SKILL_INPUTS: [FormField; 4] = [
    FormField::TechnicalSkills,
    FormField::Tools,
    FormField::SoftSkills,
    FormField::Languages,
];

const NARRATIVE_FIELDS: [FormField; 5] = [
    FormField::Experience,
    FormField::Education,
    FormField::Projects,
    FormField::Certifications,
    FormField::Achievements,
];

const STYLE: &str = r#"
body { margin: 0; background: #f9fafb; font-family: Inter, sans-serif; color: #374151; }
h1, h2, h3, h4, button, .btn { font-family: Poppins, sans-serif; }
header { background: linear-gradient(135deg, #10B981, #047857); color: #fff; padding: 48px 24px; text-align: center; }
header h1 { font-size: 3rem; margin: 0 0 16px; }
.container { max-width: 1100px; margin: 0 auto; padding: 48px 24px; }
.card { background: #fff; border: 1px solid #f3f4f6; border-radius: 16px; padding: 32px; margin-bottom: 32px; }
.narrow { max-width: 760px; margin: 0 auto 48px; }
.section { padding: 24px; border-radius: 12px; margin-bottom: 24px; }
.grid { display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
input, textarea { width: 100%; box-sizing: border-box; padding: 12px 16px; border: 2px solid #e5e7eb; border-radius: 8px; margin-bottom: 16px; font: inherit; }
label { display: block; font-weight: 600; margin-bottom: 12px; }
button { width: 100%; background: #10B981; color: #fff; border: 0; padding: 16px 32px; border-radius: 12px; font-size: 1.1rem; font-weight: 600; cursor: pointer; }
button:disabled { opacity: .5; cursor: not-allowed; }
.btn { display: inline-block; color: #fff; padding: 12px 24px; border-radius: 12px; text-decoration: none; font-weight: 600; margin-right: 16px; }
.chip { display: inline-block; padding: 4px 12px; margin: 0 8px 8px 0; border-radius: 8px; background: #d1fae5; color: #065f46; font-size: .875rem; }
.job-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 24px; }
.badge { text-align: center; padding: 16px; border-radius: 12px; border: 2px solid; }
.badge .value { font-size: 1.9rem; font-weight: 700; }
.stat { text-align: center; padding: 24px; border-radius: 12px; border: 2px solid; }
.stat .value { font-size: 1.9rem; font-weight: 700; }
.item { padding: 12px; border-radius: 8px; border: 1px solid; margin-bottom: 8px; font-size: .875rem; }
.description { margin-top: 32px; padding-top: 24px; border-top: 1px solid #e5e7eb; line-height: 1.6; }
.muted { color: #4b5563; font-size: .875rem; }
.text-emerald-600 { color: #059669; } .text-amber-600 { color: #D97706; } .text-red-500 { color: #EF4444; } .text-blue-600 { color: #2563eb; }
.bg-emerald-50 { background: #ecfdf5; } .border-emerald-200 { border-color: #a7f3d0; }
.bg-amber-50 { background: #fffbeb; } .border-amber-200 { border-color: #fde68a; }
.bg-red-50 { background: #fef2f2; } .border-red-200 { border-color: #fecaca; }
.bg-blue-50 { background: #eff6ff; } .border-blue-200 { border-color: #bfdbfe; }
.bg-emerald-500 { background: #10B981; } .bg-amber-500 { background: #F59E0B; }
"#;

const SUBMIT_SCRIPT: &str = r#"
document.getElementById('resume-form').addEventListener('submit', function (event) {
  var button = event.target.querySelector('button[type=submit]');
  button.disabled = true;
  button.textContent = 'Analyzing...';
});
"#;

/// Everything one rendering of the page needs.
pub struct PageView<'a> {
    pub form: &'a FormState,
    /// Posted back with the form; `None` until the first submission.
    pub view_id: Option<&'a str>,
    pub error: Option<&'a str>,
    pub missing: &'a [FormField],
    pub result: Option<&'a AnalysisResult>,
    pub analyzed_at: Option<DateTime<Utc>>,
}

impl<'a> PageView<'a> {
    pub fn empty(form: &'a FormState) -> Self {
        Self {
            form,
            view_id: None,
            error: None,
            missing: &[],
            result: None,
            analyzed_at: None,
        }
    }
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut body = String::new();
    body.push_str(
        "<header><h1>Resume Automation</h1>\
         <p>AI-powered job matching and resume tailoring</p></header>\n",
    );
    body.push_str("<div class=\"container\">\n");
    body.push_str(&render_form(view));
    body.push_str(&render_results(view.result, view.analyzed_at));
    body.push_str("</div>\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Resume Automation</title>\n<style>{}</style>\n</head>\n<body>\n{}\
         <script>{}</script>\n</body>\n</html>\n",
        STYLE, body, SUBMIT_SCRIPT
    )
}

fn render_input(form: &FormState, field: FormField) -> String {
    let value = escape_html(form.get(field));
    let placeholder = escape_html(field.placeholder()).replace('\n', "&#10;");
    let required = if field.is_required() { " required" } else { "" };

    match field.kind() {
        InputKind::TextArea { rows } => format!(
            "<label for=\"{name}\">{label}</label>\n\
             <textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\" placeholder=\"{placeholder}\"{required}>\n{value}</textarea>\n",
            name = field.name(),
            label = escape_html(field.label()),
        ),
        kind => {
            let input_type = match kind {
                InputKind::Email => "email",
                InputKind::Tel => "tel",
                InputKind::Url => "url",
                _ => "text",
            };
            format!(
                "<input type=\"{input_type}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\"{required}>\n",
                name = field.name(),
            )
        }
    }
}

fn render_form(view: &PageView<'_>) -> String {
    let form = view.form;
    let mut out = String::from(
        "<div class=\"narrow\"><div class=\"card\">\n<h2>Enter Your Details</h2>\n\
         <form id=\"resume-form\" method=\"post\" action=\"/\">\n",
    );
    if let Some(view_id) = view.view_id {
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"view_id\" value=\"{}\">\n",
            escape_html(view_id)
        ));
    }

    out.push_str(
        "<div class=\"section bg-emerald-50 border-emerald-200\">\
         <h3 class=\"text-emerald-600\">Personal Information</h3>\n<div class=\"grid\">\n",
    );
    for field in PERSONAL_FIELDS {
        out.push_str(&render_input(form, field));
    }
    out.push_str("</div></div>\n");

    out.push_str(&render_input(form, FormField::Summary));

    out.push_str(
        "<div class=\"section bg-amber-50 border-amber-200\">\
         <h3 class=\"text-amber-600\">Skills &amp; Technologies</h3>\n",
    );
    for field in SKILL_INPUTS {
        out.push_str(&render_input(form, field));
    }
    out.push_str("</div>\n");

    for field in NARRATIVE_FIELDS {
        out.push_str(&render_input(form, field));
    }

    out.push_str("<button type=\"submit\">Analyze Resume</button>\n</form>\n");

    if !view.missing.is_empty() {
        let labels: Vec<String> = view
            .missing
            .iter()
            .map(|field| escape_html(field.label()))
            .collect();
        out.push_str(&format!(
            "<div class=\"item bg-red-50 border-red-200\"><p class=\"text-red-500\">\
             Please fill in the required fields: {}</p></div>\n",
            labels.join(", ")
        ));
    }

    if let Some(error) = view.error {
        out.push_str(&format!(
            "<div class=\"item bg-red-50 border-red-200\"><p class=\"text-red-500\">{}</p></div>\n",
            escape_html(error)
        ));
    }

    out.push_str("</div></div>\n");
    out
}

/// Empty when there is no result.
pub fn render_results(result: Option<&AnalysisResult>, analyzed_at: Option<DateTime<Utc>>) -> String {
    let Some(result) = result else {
        return String::new();
    };

    let mut out = String::from("<div class=\"card\">\n<h2>Analysis Summary</h2>\n<div class=\"grid\">\n");
    out.push_str(&format!(
        "<div class=\"stat bg-emerald-50 border-emerald-200\"><div class=\"value text-emerald-600\">{}</div>\
         <div class=\"muted\">Jobs Analyzed</div></div>\n",
        result.total_jobs_analyzed
    ));
    out.push_str(&format!(
        "<div class=\"stat bg-amber-50 border-amber-200\"><div class=\"value text-amber-600\">{}</div>\
         <div class=\"muted\">Avg. Match Score</div></div>\n",
        escape_html(&result.summary.average_percent())
    ));
    out.push_str(&format!(
        "<div class=\"stat bg-blue-50 border-blue-200\"><div class=\"value text-blue-600\">{}</div>\
         <div class=\"muted\">Best Match</div></div>\n",
        escape_html(&result.summary.best_match.job_title)
    ));
    out.push_str("</div>\n");
    if let Some(at) = analyzed_at {
        out.push_str(&format!(
            "<p class=\"muted\">Analyzed at {}</p>\n",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    out.push_str("</div>\n<h2>Job Analysis Results</h2>\n");

    for job in &result.job_analyses {
        out.push_str(&render_job(job));
    }
    out
}

fn chips(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"chip\">{}</span>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("")
}

fn render_job(job: &JobAnalysis) -> String {
    let score = &job.analysis.shortlist_probability;
    let tier = score.tier();
    let mut out = String::from("<div class=\"card job\">\n");

    out.push_str(&format!(
        "<div class=\"job-head\"><div><h3>{}</h3><p class=\"muted\">{}</p></div>\
         <div class=\"badge {}\" data-tier=\"{}\"><div class=\"value {}\">{}</div>\
         <div class=\"muted\">Match Score</div></div></div>\n",
        escape_html(&job.job_title),
        escape_html(&job.company),
        tier.badge_class(),
        tier.as_str(),
        tier.text_class(),
        escape_html(&score.to_string())
    ));

    out.push_str(&format!(
        "<p><a class=\"btn bg-emerald-500\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Apply for Job</a>\
         <a class=\"btn bg-amber-500\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Download Resume</a></p>\n",
        escape_html(&job.job_link),
        escape_html(&job.tailored_resume_download)
    ));

    out.push_str("<div class=\"grid\">\n");
    out.push_str(&format!(
        "<div><h4>Tailored Resume</h4><div class=\"section bg-emerald-50\">\
         <p><strong>Summary:</strong> {}</p><p><strong>Skills:</strong></p><div>{}</div></div></div>\n",
        escape_html(&job.tailored_resume.summary),
        chips(&job.tailored_resume.skills)
    ));

    out.push_str("<div><h4>Analysis</h4>\n");
    if !job.analysis.matching_skills.is_empty() {
        out.push_str(&format!(
            "<div class=\"matching-skills\"><p class=\"text-emerald-600\">Matching Skills:</p><div>{}</div></div>\n",
            chips(&job.analysis.matching_skills)
        ));
    }
    if !job.analysis.missing_skills.is_empty() {
        out.push_str("<div class=\"missing-skills\"><p class=\"text-red-500\">Missing Skills:</p>\n");
        for item in &job.analysis.missing_skills {
            out.push_str(&format!(
                "<div class=\"item bg-red-50 border-red-200\"><strong>{}</strong><br>\
                 <span class=\"muted\">Learn at: {}</span></div>\n",
                escape_html(&item.skill),
                escape_html(&item.platform)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("<div class=\"issues\"><p class=\"text-amber-600\">Potential Issues:</p><ul>\n");
    for reason in &job.analysis.rejection_reasons {
        out.push_str(&format!(
            "<li class=\"item bg-amber-50 border-amber-200\">{}</li>\n",
            escape_html(reason)
        ));
    }
    out.push_str("</ul></div>\n</div>\n</div>\n");

    out.push_str(&format!(
        "<div class=\"description\"><h4>Job Description</h4><p>{}</p></div>\n</div>\n",
        escape_html(&job.job_description)
    ));
    out
}
