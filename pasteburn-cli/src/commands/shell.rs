//! Shell command - interactive paste session
//!
//! Reads one command per line from stdin, so it also works with piped input.

use anyhow::{Context, Result};
use console::Term;
use pasteburn_client::{HttpPasteService, PasteSession, ServiceConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::ui;

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Key(Option<&'a str>),
    Id(&'a str),
    Body(&'a str),
    Load,
    Save,
    Show,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    Some(match word {
        "key" if rest.is_empty() => Command::Key(None),
        "key" => Command::Key(Some(rest)),
        "id" => Command::Id(rest),
        "body" => Command::Body(rest),
        "load" | "view" => Command::Load,
        "save" | "create" => Command::Save,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other),
    })
}

fn print_help() {
    ui::info("Commands:");
    ui::field("key [K]", "set the access key (prompts when omitted)");
    ui::field("id <ID>", "set the document id");
    ui::field("body <TEXT>", "set the paste text");
    ui::field("load", "fetch and burn the paste");
    ui::field("save", "store the paste and assign an id");
    ui::field("show", "print the current state");
    ui::field("quit", "leave the shell");
}

fn print_state(session: &PasteSession<HttpPasteService>) {
    let state = session.state();
    ui::field("Key", &format!("{} characters", state.key.chars().count()));
    ui::field("Id", &state.id);
    ui::field("Body", &state.body);
}

pub async fn run(config: &ServiceConfig) -> Result<()> {
    let session = super::connect(config)?;
    let interactive = Term::stdout().features().is_attended();

    if interactive {
        ui::title("Pasteburn Shell");
        ui::field("Server", &config.base_url);
        print_help();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("pasteburn> ");
            std::io::Write::flush(&mut std::io::stdout())?;
        }
        let Some(line) = lines.next_line().await.context("Failed to read command")? else {
            break;
        };

        let Some(command) = parse(&line) else {
            continue;
        };

        match command {
            Command::Key(Some(key)) => session.set_key(key),
            Command::Key(None) => match ui::password("Access key") {
                Ok(key) => session.set_key(key),
                Err(err) => ui::error(&format!("Could not read key: {}", err)),
            },
            Command::Id(id) => session.set_id(id),
            Command::Body(body) => session.set_body(body),
            Command::Load => {
                let spinner = ui::spinner("Fetching paste...");
                let result = session.load().await;
                spinner.finish_and_clear();
                if result.is_ok() {
                    println!("{}", session.body());
                }
            }
            Command::Save => {
                let spinner = ui::spinner("Saving paste...");
                let result = session.save().await;
                spinner.finish_and_clear();
                if result.is_ok() {
                    ui::success(&format!("Saved as {}", session.id()));
                }
            }
            Command::Show => print_state(&session),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(word) => ui::error(&format!("Unknown command '{}'", word)),
        }

        super::show_alert(&session);
    }

    Ok(())
}
