//! `shortly` command-line front-end.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (and copy the result)
//! shortly shorten https://example.com/very/long/url --copy
//!
//! # Show history, optionally filtered
//! shortly list
//! shortly list --search example
//!
//! # Manage entries
//! shortly copy 1718452800000
//! shortly open 1718452800000
//! shortly delete 1718452800000
//! shortly clear
//! ```
//!
//! # Environment Variables
//!
//! See [`shortly::config`] for the full list.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use shortly::AppError;
use shortly::config::{self, Config};
use shortly::infrastructure::desktop;
use shortly::runtime::{self, DefaultLinkService};
use shortly::utils::display::{
    DEFAULT_MAX_LENGTH, format_absolute, format_relative_time, truncate_url,
};
use shortly::utils::extract_domain::extract_domain;

/// Shorten URLs and keep a searchable local history.
#[derive(Parser)]
#[command(name = "shortly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// The long URL (http or https)
        url: String,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Show the history, newest first
    List {
        /// Only show entries whose original or short URL contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print the matching entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an entry from the history
    Delete {
        /// Entry id (see `list`)
        id: String,
    },

    /// Delete the whole history
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Copy an entry's short URL to the clipboard
    Copy {
        /// Entry id (see `list`)
        id: String,

        /// Copy the original URL instead
        #[arg(short, long)]
        original: bool,
    },

    /// Open an entry's original URL in the browser
    Open {
        /// Entry id (see `list`)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config)?;
    config.print_summary();

    let mut service = runtime::open_service(&config);

    match cli.command {
        Commands::Shorten { url, copy } => handle_shorten(&mut service, &url, copy).await,
        Commands::List { search, json } => handle_list(&service, search.as_deref(), json)?,
        Commands::Delete { id } => handle_delete(&mut service, &id),
        Commands::Clear { yes } => handle_clear(&mut service, yes)?,
        Commands::Copy { id, original } => handle_copy(&service, &id, original),
        Commands::Open { id } => handle_open(&service, &id),
    }

    runtime::shutdown(service).context("Failed to save URL history")?;

    Ok(())
}

/// Installs the global subscriber. Logs go to stderr.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Runs the shortening workflow and reports the outcome.
///
/// Validation and duplicate errors are shown verbatim and do not fail the
/// process.
async fn handle_shorten(service: &mut DefaultLinkService, url: &str, copy: bool) {
    println!("{}", "Shortening URL...".bright_black());

    let short_url = match service.submit(url).await {
        Ok(short_url) => short_url,
        Err(e) => {
            println!("{}", e.to_string().red());
            return;
        }
    };

    println!("{}", "URL shortened successfully!".green().bold());
    println!();
    println!("  Your shortened URL: {}", short_url.bright_cyan().bold());
    println!();

    if copy {
        match desktop::copy_to_clipboard(&short_url) {
            Ok(()) => println!("{}", "Copied to clipboard!".green()),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

/// Prints the history, optionally filtered by `search`.
fn handle_list(service: &DefaultLinkService, search: Option<&str>, json: bool) -> Result<()> {
    let history = service.history();
    let term = search.unwrap_or("");
    let entries = history.search(term);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("{}", "No URLs shortened yet.".yellow());
        println!();
        println!("  Start with: {} <URL>", "shortly shorten".bright_cyan());
        return Ok(());
    }

    println!(
        "{}",
        format!("URL History ({})", history.len()).bright_blue().bold()
    );
    println!();

    if entries.is_empty() {
        println!("  No URLs found matching \"{term}\"");
        println!();
        return Ok(());
    }

    let now = Utc::now();
    for entry in &entries {
        println!(
            "  {}  {} ({})",
            entry.id.bright_black(),
            format_relative_time(entry.created_at, now).bright_black(),
            format_absolute(&entry.created_at.with_timezone(&Local)).bright_black()
        );
        println!("    {}", entry.short_url.bright_cyan().bold());
        println!(
            "    {}  {}",
            truncate_url(&entry.long_url, DEFAULT_MAX_LENGTH),
            format!("({})", extract_domain(&entry.long_url)).bright_black()
        );
        println!();
    }

    if !term.is_empty() {
        println!(
            "  Showing {} of {}",
            entries.len().to_string().bright_white().bold(),
            history.len()
        );
        println!();
    }

    Ok(())
}

fn handle_delete(service: &mut DefaultLinkService, id: &str) {
    if service.delete(id) {
        println!("{}", "URL deleted".green());
    } else {
        println!("{}", AppError::not_found(id).to_string().yellow());
    }
}

/// Clears the history after confirmation.
fn handle_clear(service: &mut DefaultLinkService, skip_confirm: bool) -> Result<()> {
    if service.history().is_empty() {
        println!("{}", "History is already empty".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to clear all URL history?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service.clear_history();
    println!("{}", "History cleared".green().bold());

    Ok(())
}

/// Copies the short (or original) URL of an entry. Clipboard failures are
/// reported as warnings.
fn handle_copy(service: &DefaultLinkService, id: &str, original: bool) {
    let Some(entry) = service.history().get(id) else {
        println!("{}", AppError::not_found(id).to_string().yellow());
        return;
    };

    let text = if original {
        &entry.long_url
    } else {
        &entry.short_url
    };

    match desktop::copy_to_clipboard(text) {
        Ok(()) => println!("{} {}", "Copied:".green(), text.bright_cyan()),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

/// Opens the original URL; short URLs are not resolvable.
fn handle_open(service: &DefaultLinkService, id: &str) {
    let Some(entry) = service.history().get(id) else {
        println!("{}", AppError::not_found(id).to_string().yellow());
        return;
    };

    match desktop::open_url(&entry.long_url) {
        Ok(()) => println!("{} {}", "Opened:".green(), entry.long_url.bright_cyan()),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}
