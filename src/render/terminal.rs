// src/render/terminal.rs
//! Plain-text rendering of analysis results with optional ANSI colors.

use crate::types::{AnalysisResult, JobAnalysis, ScoreTier};
use crate::utils::strip_control;

const BOLD: &str = "1";
const DIM: &str = "2";
const RED: &str = "31";
const YELLOW: &str = "33";
const GREEN: &str = "32";
const BLUE: &str = "34";

pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        format!("{}\n{}\n", self.paint(BOLD, text), "=".repeat(text.chars().count()))
    }

    /// Empty when there is no result.
    pub fn render_result(&self, result: Option<&AnalysisResult>) -> String {
        let Some(result) = result else {
            return String::new();
        };

        let mut out = self.heading("Analysis Summary");
        out.push_str(&format!(
            "  Jobs Analyzed:     {}\n",
            self.paint(GREEN, &result.total_jobs_analyzed.to_string())
        ));
        out.push_str(&format!(
            "  Avg. Match Score:  {}\n",
            self.paint(YELLOW, &result.summary.average_percent())
        ));
        out.push_str(&format!(
            "  Best Match:        {}\n",
            self.paint(BLUE, &strip_control(&result.summary.best_match.job_title))
        ));

        out.push('\n');
        out.push_str(&self.heading("Job Analysis Results"));
        for (index, job) in result.job_analyses.iter().enumerate() {
            out.push('\n');
            self.render_job(&mut out, index + 1, job);
        }
        out
    }

    fn render_job(&self, out: &mut String, number: usize, job: &JobAnalysis) {
        let score = &job.analysis.shortlist_probability;
        let tier: ScoreTier = score.tier();

        out.push_str(&format!(
            "[{}] {} @ {}\n",
            number,
            self.paint(BOLD, &strip_control(&job.job_title)),
            strip_control(&job.company)
        ));
        out.push_str(&format!(
            "    Match Score: {} ({})\n",
            self.paint(
                &format!("{};{}", BOLD, tier.ansi_color()),
                &strip_control(&score.to_string())
            ),
            tier.as_str()
        ));
        out.push_str(&format!(
            "    Apply for Job:    {}\n",
            strip_control(&job.job_link)
        ));
        out.push_str(&format!(
            "    Download Resume:  {}\n",
            strip_control(&job.tailored_resume_download)
        ));

        out.push_str(&format!("\n    {}\n", self.paint(BOLD, "Tailored Resume")));
        out.push_str(&format!(
            "      Summary: {}\n",
            strip_control(&job.tailored_resume.summary)
        ));
        out.push_str(&format!(
            "      Skills:  {}\n",
            joined(&job.tailored_resume.skills)
        ));

        out.push_str(&format!("\n    {}\n", self.paint(BOLD, "Analysis")));
        if !job.analysis.matching_skills.is_empty() {
            out.push_str(&format!(
                "      {} {}\n",
                self.paint(GREEN, "Matching Skills:"),
                joined(&job.analysis.matching_skills)
            ));
        }
        if !job.analysis.missing_skills.is_empty() {
            out.push_str(&format!("      {}\n", self.paint(RED, "Missing Skills:")));
            for item in &job.analysis.missing_skills {
                out.push_str(&format!(
                    "        - {} {}\n",
                    self.paint(BOLD, &strip_control(&item.skill)),
                    self.paint(
                        DIM,
                        &format!("(Learn at: {})", strip_control(&item.platform))
                    )
                ));
            }
        }
        out.push_str(&format!("      {}\n", self.paint(YELLOW, "Potential Issues:")));
        for reason in &job.analysis.rejection_reasons {
            out.push_str(&format!("        * {}\n", strip_control(reason)));
        }

        out.push_str(&format!("\n    {}\n", self.paint(BOLD, "Job Description")));
        for line in strip_control(&job.job_description).lines() {
            out.push_str(&format!("      {}\n", line));
        }
    }
}

fn joined(items: &[String]) -> String {
    strip_control(&items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AnalysisSummary, BestMatch, FitAnalysis, MissingSkill, ShortlistScore, TailoredResume,
    };

    fn job(score: ShortlistScore, missing: Vec<MissingSkill>) -> JobAnalysis {
        JobAnalysis {
            job_title: "SRE".to_string(),
            company: "Hooli".to_string(),
            job_link: "https://jobs.example.com/sre".to_string(),
            job_description: "Keep things up.\nCarry the pager.".to_string(),
            tailored_resume_download: "https://files.example.com/sre.pdf".to_string(),
            tailored_resume: TailoredResume {
                summary: "Reliability focused".to_string(),
                skills: vec!["Linux".to_string(), "Go".to_string()],
            },
            analysis: FitAnalysis {
                shortlist_probability: score,
                matching_skills: vec![],
                missing_skills: missing,
                rejection_reasons: vec!["Short tenure".to_string()],
            },
        }
    }

    fn result(jobs: Vec<JobAnalysis>) -> AnalysisResult {
        AnalysisResult {
            total_jobs_analyzed: jobs.len() as f64,
            summary: AnalysisSummary {
                average_probability: 55.0,
                best_match: BestMatch {
                    job_title: "SRE".to_string(),
                },
            },
            job_analyses: jobs,
        }
    }

    #[test]
    fn test_no_result_renders_nothing() {
        assert_eq!(TerminalRenderer::new(true).render_result(None), "");
    }

    #[test]
    fn test_plain_rendering() {
        let result = result(vec![job(ShortlistScore::from_text("55%"), vec![])]);
        let text = TerminalRenderer::new(false).render_result(Some(&result));

        assert!(text.contains("Jobs Analyzed:     1\n"));
        assert!(text.contains("Avg. Match Score:  55.0%"));
        assert!(text.contains("[1] SRE @ Hooli"));
        assert!(text.contains("Match Score: 55% (warning)"));
        assert!(text.contains("Skills:  Linux, Go"));
        assert!(text.contains("        * Short tenure"));
        assert!(text.contains("      Carry the pager."));
        assert!(!text.contains("Matching Skills:"));
        assert!(!text.contains("Missing Skills:"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_missing_skills_show_platform() {
        let missing = vec![MissingSkill {
            skill: "Kubernetes".to_string(),
            platform: "Coursera".to_string(),
        }];
        let result = result(vec![job(ShortlistScore::from_number(90.0), missing)]);
        let text = TerminalRenderer::new(false).render_result(Some(&result));

        assert!(text.contains("Missing Skills:"));
        assert!(text.contains("- Kubernetes (Learn at: Coursera)"));
    }

    #[test]
    fn test_score_colored_by_tier() {
        let result = result(vec![job(ShortlistScore::from_number(90.0), vec![])]);
        let text = TerminalRenderer::new(true).render_result(Some(&result));
        assert!(text.contains("\x1b[1;32m90\x1b[0m"));

        let result = self::result(vec![job(ShortlistScore::from_text("n/a"), vec![])]);
        let text = TerminalRenderer::new(true).render_result(Some(&result));
        assert!(text.contains("\x1b[1;31mn/a\x1b[0m"));
    }

    #[test]
    fn test_service_text_cannot_inject_escape_sequences() {
        let mut injected = job(ShortlistScore::from_text("\x1b[32m99"), vec![]);
        injected.job_title = "\x1b[2J\x1b[HAll clear".to_string();
        injected.analysis.rejection_reasons = vec!["ok\x07\rfine".to_string()];
        injected.job_description = "Line one\x1b]0;title\x07\nLine two".to_string();
        let text = TerminalRenderer::new(false).render_result(Some(&result(vec![injected])));

        assert!(!text.chars().any(|c| c.is_control() && c != '\n'));
        assert!(text.contains("[1] [2J[HAll clear @ Hooli"));
        assert!(text.contains("        * okfine"));
        assert!(text.contains("      Line two"));
    }
}
