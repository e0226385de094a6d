//! Terminal output for the pasteburn commands
//!
//! Paste text and ids go to stdout untouched so they can be piped. Problems
//! and alerts go to stderr.

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Kind of one-line status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

impl Tone {
    fn mark(self) -> ColoredString {
        match self {
            Tone::Success => "✓".green().bold(),
            Tone::Info => "ℹ".blue().bold(),
            Tone::Warning => "⚠".yellow().bold(),
            Tone::Error => "✗".red().bold(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warning | Tone::Error)
    }
}

fn status_line(tone: Tone, message: &str) -> String {
    format!("{} {}", tone.mark(), message)
}

/// Print a status line on the stream that matches its tone.
pub fn status(tone: Tone, message: &str) {
    let line = status_line(tone, message);
    if tone.to_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn success(message: &str) {
    status(Tone::Success, message);
}

pub fn info(message: &str) {
    status(Tone::Info, message);
}

/// Alerts raised by the session.
pub fn warning(message: &str) {
    status(Tone::Warning, message);
}

pub fn error(message: &str) {
    status(Tone::Error, message);
}

/// Underlined title above a block of fields.
pub fn title(text: &str) {
    println!("\n{}", text.bold().underline());
}

fn field_line(name: &str, value: &str) -> String {
    format!("  {}: {}", name.cyan(), value)
}

/// Print one `name: value` line.
pub fn field(name: &str, value: &str) {
    println!("{}", field_line(name, value));
}

/// Horizontal rule around paste text in verbose mode.
pub fn rule() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Spinner shown while a request is in flight. Hidden when stderr is not a
/// terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prompt for a secret without echoing it. Fails without a terminal.
pub fn password(prompt: &str) -> anyhow::Result<String> {
    Ok(dialoguer::Password::new().with_prompt(prompt).interact()?)
}

pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
