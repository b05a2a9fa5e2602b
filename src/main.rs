use anyhow::Result;
use clap::Parser;
use resume_automation::cli::{handle_command, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `analyze --json` output stays clean.
    Registry::default()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("resume_automation=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    handle_command(cli).await
}
