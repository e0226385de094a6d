//! Create command - store a new paste

use anyhow::{Context, Result};
use pasteburn_client::ServiceConfig;
use tokio::io::AsyncReadExt;

use crate::ui;

#[tracing::instrument(skip(config, key, body))]
pub async fn run(
    config: &ServiceConfig,
    key: String,
    body: Option<String>,
    file: Option<String>,
    verbose: bool,
) -> Result<()> {
    let body = match (body, file) {
        (Some(body), _) => body,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path))?,
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read paste text from stdin")?;
            buf
        }
    };

    if verbose {
        ui::title("Create Paste");
        ui::field("Server", &config.base_url);
        ui::field("Body", &format!("{} bytes", body.len()));
    }

    let session = super::connect(config)?;
    session.set_key(key);
    session.set_body(body);

    let spinner = ui::spinner("Saving paste...");
    let result = session.save().await;
    spinner.finish_and_clear();

    if let Err(err) = result {
        super::show_alert(&session);
        return Err(err).context("Failed to create paste");
    }

    if verbose {
        ui::success("Paste stored. It will be deleted after the first read.");
    }
    println!("{}", session.id());
    Ok(())
}
