use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gastos_client::{IngestClient, IngestError};
use gastos_core::{parse_expenses, summarize, Pager, Row};
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod status;

use status::StatusKind;

#[derive(Parser, Debug)]
#[command(name = "gastos", version, about = "CSV expense summaries and ingestion upload")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a CSV and print the aggregate summary
    Summary {
        /// Path to the expense CSV
        #[arg(long)]
        csv: PathBuf,
    },

    /// Render one page of parsed rows
    Show {
        /// Path to the expense CSV
        #[arg(long)]
        csv: PathBuf,

        /// Page to display (clamped into range)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Upload parsed rows to the ingestion endpoint
    Upload {
        /// Path to the expense CSV
        #[arg(long)]
        csv: PathBuf,

        /// Tenant identifier (overrides config)
        #[arg(long)]
        tenant: Option<String>,

        /// Ingestion base URL (overrides config)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Manage ~/.gastos/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        status::report(StatusKind::Error, &format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Summary { csv } => cmd_summary(&csv),
        Command::Show { csv, page, page_size } => cmd_show(&csv, page, page_size),
        Command::Upload { csv, tenant, base_url } => cmd_upload(&csv, tenant, base_url).await,
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => config::show_config(),
        },
    }
}

/// Read and parse a CSV; each invocation produces a fresh dataset.
fn load_rows(csv: &Path) -> Result<Vec<Row>> {
    let text = fs::read_to_string(csv).with_context(|| format!("read {}", csv.display()))?;
    Ok(parse_expenses(&text))
}

fn cmd_summary(csv: &Path) -> Result<()> {
    let rows = load_rows(csv)?;
    if rows.is_empty() {
        bail!("no valid rows found in {}", csv.display());
    }

    let summary = summarize(&rows);
    status::report(
        StatusKind::Neutral,
        &format!("{} rows parsed from {}", rows.len(), csv.display()),
    );
    println!("Gasto total: ${:.2}", summary.total);
    println!();
    for (category, amount) in summary.categories_sorted() {
        println!("{category}: ${amount:.2}");
    }
    Ok(())
}

fn cmd_show(csv: &Path, page: usize, page_size: Option<usize>) -> Result<()> {
    let cfg = config::load_config()?;
    let page_size = page_size.unwrap_or(cfg.view.page_size);

    let mut pager = Pager::new(load_rows(csv)?, page_size);
    pager.goto(page);
    let view = pager.page();

    if view.rows.is_empty() {
        status::report(StatusKind::Neutral, "no expenses to display");
    } else {
        println!("{:<12} {:<24} {:>12}", "date", "category", "amount");
        for row in view.rows {
            println!("{:<12} {:<24} {:>12.2}", row.date, row.category, row.amount);
        }
    }
    println!();
    println!(
        "rows {}-{} of {} (page {} of {})",
        view.start, view.end, view.total_rows, view.current_page, view.total_pages
    );
    Ok(())
}

async fn cmd_upload(csv: &Path, tenant: Option<String>, base_url: Option<String>) -> Result<()> {
    let cfg = config::load_config()?;
    let tenant = tenant.unwrap_or(cfg.ingest.tenant_id);
    let base_url = base_url.unwrap_or(cfg.ingest.base_url);

    let rows = load_rows(csv)?;
    if rows.is_empty() {
        bail!("no valid rows found in {}; nothing to upload", csv.display());
    }

    status::report(
        StatusKind::Neutral,
        &format!("uploading {} rows for tenant {tenant}", rows.len()),
    );

    // Single awaited exchange; a second submission cannot start while one
    // is in flight.
    let client = IngestClient::new(base_url);
    match client.upload(&tenant, &rows).await {
        Ok(receipt) => {
            let msg = receipt
                .message
                .unwrap_or_else(|| format!("{} rows accepted", rows.len()));
            status::report(StatusKind::Ok, &msg);
            Ok(())
        }
        Err(IngestError::Status { status, body }) => {
            if body.is_empty() {
                bail!("upload rejected with HTTP {status}")
            }
            bail!("upload rejected with HTTP {status}: {body}")
        }
        Err(err) => Err(err).context("upload did not complete"),
    }
}
