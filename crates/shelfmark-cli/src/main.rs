//! Shelfmark CLI Application
//!
//! Command-line interface for tracking a personal book collection and the
//! books currently lent out to friends.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shelfmark_core::LibraryBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let library = LibraryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize library")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Shelfmark started");

    match command {
        Some(Book { command }) => {
            Cli::new(library, renderer)
                .handle_book_command(command)
                .await
        }
        Some(Friend { command }) => {
            Cli::new(library, renderer)
                .handle_friend_command(command)
                .await
        }
        Some(Loan { command }) => {
            Cli::new(library, renderer)
                .handle_loan_command(command)
                .await
        }
        Some(Status) | None => Cli::new(library, renderer).show_status().await,
    }
}
