//! # salonview — salon service catalog viewer
//!
//! Composition root that wires the catalog source into the session and
//! renders it in the terminal.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber (stderr, so stdout stays the view)
//! - Construct the HTTP catalog source (adapter)
//! - Run the session's single catalog load
//! - Read line commands from stdin and redraw from the session subscription
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod command;
mod config;
mod terminal;

use std::io::{BufRead, Write};

use salonview_adapter_catalog_http::HttpCatalogSource;
use salonview_app::services::catalog_loader::CatalogLoader;
use salonview_app::session::SessionStore;
use salonview_domain::state::LoadStatus;
use tracing_subscriber::EnvFilter;

use command::Command;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(endpoint = %config.catalog.endpoint, "starting salonview");

    let source = HttpCatalogSource::new(&config.catalog)?;
    let store = SessionStore::new();

    let mut stdout = std::io::stdout();
    let mut screen = store.subscribe();
    terminal::draw(&mut stdout, &mut screen)?;

    store.run_loader(CatalogLoader::new(source)).await;
    screen.changed().await?;
    terminal::draw(&mut stdout, &mut screen)?;

    // A failed load is terminal for the session.
    if matches!(screen.borrow().status(), LoadStatus::Error(_)) {
        return Ok(());
    }

    prompt(&mut stdout)?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(stdout, "{}", command::HELP)?,
            Ok(Command::Redraw) => terminal::draw(&mut stdout, &mut screen)?,
            Ok(Command::Search(query)) => {
                store.search(query);
                terminal::draw(&mut stdout, &mut screen)?;
            }
            Ok(Command::Navigate(nav)) => {
                if !store.navigate(nav) {
                    tracing::debug!(?nav, "pagination control disabled");
                }
                terminal::draw(&mut stdout, &mut screen)?;
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
