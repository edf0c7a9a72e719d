use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod error;
mod form;
mod models;
mod service;
mod teams;
mod terminal;

use config::Config;
use form::FormController;
use models::TeamId;
use service::HttpPredictionClient;
use terminal::{Session, TerminalDisplay};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let teams = teams::resolve(&config)?;

    let client = HttpPredictionClient::new(&config.server_url, config.request_timeout())?;
    info!("Prediction endpoint: {}", client.endpoint());

    let text = config.lang.text();
    let display = TerminalDisplay::new(std::io::stdout(), text);
    let mut form = FormController::new(Arc::new(client), display, &teams, text);

    if let Some((home, away)) = config.one_shot() {
        form.select_home(Some(TeamId::new(home)))
            .context("Cannot select home team")?;
        form.select_away(Some(TeamId::new(away)))
            .context("Cannot select away team")?;

        if let Err(e) = form.on_submit().await {
            error!("Prediction failed: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // A single --home or --away is preselected for the interactive session.
    if let Some(home) = &config.home_team {
        form.select_home(Some(TeamId::new(home.as_str())))
            .context("Cannot select home team")?;
    }
    if let Some(away) = &config.away_team {
        form.select_away(Some(TeamId::new(away.as_str())))
            .context("Cannot select away team")?;
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    Session::new(form, std::io::stdout()).run(stdin).await
}
