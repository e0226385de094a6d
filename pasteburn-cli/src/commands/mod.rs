//! Command implementations

pub mod create;
pub mod gen_key;
pub mod shell;
pub mod view;

use anyhow::{Context, Result};
use pasteburn_client::{HttpPasteService, PasteSession, ServiceConfig};

use crate::ui;

/// Build a session against the configured service.
pub fn connect(config: &ServiceConfig) -> Result<PasteSession<HttpPasteService>> {
    let service = HttpPasteService::new(config.clone())
        .with_context(|| format!("Failed to set up client for {}", config.base_url))?;
    Ok(PasteSession::from_config(service, config))
}

/// Print the session alert, if one is showing.
pub fn show_alert(session: &PasteSession<HttpPasteService>) {
    if let Some(alert) = session.alert() {
        ui::warning(alert.message());
    }
}
