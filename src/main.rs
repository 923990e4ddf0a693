mod cli;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use restaurant_browser::pipeline::{detect_terminal_size, run};
use restaurant_browser::{
    MountOptions, RenderMode, RestaurantBrowser, UiState, mount, render_once, set_theme, terminal_width,
};

use crate::cli::Cli;

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    tracing::debug!(?cli, "starting");

    set_theme(&cli.theme)?;

    let browser = RestaurantBrowser::new();
    browser.set_search_term(cli.search.clone());
    browser.set_selected_cuisine(cli.cuisine);
    let ui = UiState::new();
    ui.set_cursor(cli.search.chars().count());

    if cli.once {
        detect_terminal_size();
        render_once(&browser, &ui, terminal_width(), &mut io::stdout().lock())?;
        return Ok(());
    }

    let mode = if cli.inline { RenderMode::Inline } else { RenderMode::Fullscreen };
    let handle = mount(&browser, &ui, MountOptions { mode }).context("setting up the terminal")?;
    let result = run(&handle);
    handle.unmount()?;
    result?;
    Ok(())
}
