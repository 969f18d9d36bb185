// ==============================================================================
// main.rs - Genotype Report Entry Point
// ==============================================================================
// Description: Command-line driver for the genotype panel report
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod parsers;
mod models;
mod error;
mod equivalence;
mod reference;
mod reconciler;
mod validator;
mod loader;
mod session;
mod output;

use session::ReportSession;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Client genotype data file (CSV)
    #[arg(short, long)]
    client: PathBuf,

    /// Knowledge table file (CSV); bundled panel is used when omitted
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// The knowledge table file carries a header row
    #[arg(long, default_value_t = false)]
    reference_header: bool,

    /// Gene identifier to search for in the client table's first column
    #[arg(short, long)]
    search: Option<String>,

    /// Emit the report as JSON instead of a text table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print a preview of the client table (first 5 rows)
    #[arg(long, default_value_t = false)]
    preview: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genotype_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Genotype report starting...");

    let args = Args::parse();

    let mut session = match &args.reference {
        Some(_) => ReportSession::new(),
        None => {
            info!("No knowledge table given, using bundled panel");
            ReportSession::with_builtin_reference()
        }
    };

    session.load_client(&args.client)?;

    if let Some(reference) = &args.reference {
        session.load_reference(reference, args.reference_header)?;
    }

    if args.preview {
        if let Some(client) = session.client_table() {
            print!("{}", output::format_preview(client));
        }
    }

    let report = session.try_report()?.to_vec();
    if args.json {
        println!("{}", output::format_report_json(&report)?);
    } else {
        print!("{}", output::format_report_text(&report));
    }

    if let Some(key) = &args.search {
        match session.search(key) {
            Ok(result) => println!("Search result: {result}"),
            Err(err) => println!("{err}"),
        }
    }

    info!("Done");
    Ok(())
}
