//! View command - read (and burn) a paste

use anyhow::{Context, Result};
use pasteburn_client::{RequestOutcome, ServiceConfig};

use crate::ui;

#[tracing::instrument(skip(config, key))]
pub async fn run(
    config: &ServiceConfig,
    key: String,
    id: String,
    json: bool,
    verbose: bool,
) -> Result<()> {
    if verbose {
        ui::title("View Paste");
        ui::field("Server", &config.base_url);
        ui::field("Id", &id);
    }

    let session = super::connect(config)?;
    session.set_key(key);
    session.set_id(id);

    let spinner = ui::spinner("Fetching paste...");
    let result = session.load().await;
    spinner.finish_and_clear();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            super::show_alert(&session);
            return Err(err).context("Failed to view paste");
        }
    };

    if json {
        if let RequestOutcome::Applied(response) = &outcome {
            ui::print_json(&serde_json::to_value(response)?)?;
        }
        return Ok(());
    }

    if verbose {
        ui::rule();
    }
    println!("{}", session.body());
    if verbose {
        ui::rule();
        super::show_alert(&session);
    }
    Ok(())
}
