// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use crate::core::AnalysisClient;
use crate::environment::EnvironmentConfig;
use crate::form::profile::{load_profile, write_profile_template};
use crate::form::FormField;
use crate::render::TerminalRenderer;
use crate::session::{AnalysisSession, UiPhase, ANALYSIS_FAILED_MESSAGE};
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "resume-automation")]
#[command(about = "AI-powered job matching and resume tailoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit a resume profile for analysis and print the job matches
    Analyze {
        /// Profile file (.yaml, .toml or .json)
        #[arg(long, short)]
        profile: PathBuf,
        /// Override a single field, e.g. --set technical_skills="Rust, SQL"
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,
        /// Analysis service base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Print the raw analysis result as JSON
        #[arg(long)]
        json: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Write an empty resume profile listing every field
    InitProfile {
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Serve the resume form as a web page
    Serve {
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// Analysis service base URL
        #[arg(long)]
        api_url: Option<String>,
    },
}

/// Split `name=value`; the value may itself contain `=`.
pub fn parse_override(raw: &str) -> Result<(FormField, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid override '{}', expected FIELD=VALUE", raw))?;
    let field: FormField = name.trim().parse()?;
    Ok((field, value.to_string()))
}

/// Submits the session and returns what `analyze` prints on stdout.
/// A failed submission is an error carrying only the user-facing message.
pub async fn analysis_output(
    session: &mut AnalysisSession,
    json: bool,
    renderer: &TerminalRenderer,
) -> Result<String> {
    if session.submit().await == UiPhase::Failed {
        anyhow::bail!(session.error().unwrap_or(ANALYSIS_FAILED_MESSAGE).to_string());
    }

    if json {
        let output = serde_json::to_string_pretty(&session.result())
            .context("Failed to serialize analysis result")?;
        Ok(format!("{}\n", output))
    } else {
        Ok(renderer.render_result(session.result()))
    }
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            profile,
            overrides,
            api_url,
            json,
            no_color,
        } => {
            let mut config = EnvironmentConfig::load(cli.config.as_deref())?;
            if let Some(url) = api_url {
                config.api_base_url = url;
            }

            let form = load_profile(&profile).await?;
            let client = AnalysisClient::new(&config.api_base_url, config.timeout())?;
            let mut session = AnalysisSession::with_form(client, form);

            for raw in &overrides {
                let (field, value) = parse_override(raw)?;
                session.update_field(field, value);
            }

            let missing = session.form().missing_required();
            if !missing.is_empty() {
                let labels: Vec<String> = missing
                    .iter()
                    .map(|field| format!("{} ({})", field.label(), field.name()))
                    .collect();
                anyhow::bail!("Missing required fields: {}", labels.join(", "));
            }

            let renderer = TerminalRenderer::new(!no_color && std::io::stdout().is_terminal());
            print!("{}", analysis_output(&mut session, json, &renderer).await?);
        }

        Command::InitProfile { path, force } => {
            write_profile_template(&path, force).await?;
            info!("Profile template written to {}", path.display());
            println!("✓ Created profile template: {}", path.display());
            println!("  Fill it in, then run: resume-automation analyze --profile {}", path.display());
        }

        Command::Serve {
            address,
            port,
            api_url,
        } => {
            let mut config = EnvironmentConfig::load(cli.config.as_deref())?;
            if let Some(address) = address {
                config.address = address;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(url) = api_url {
                config.api_base_url = url;
            }
            start_web_server(&config).await?;
        }
    }

    Ok(())
}
