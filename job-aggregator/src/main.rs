use anyhow::Context;
use clap::{Parser, Subcommand};
use job_aggregator::scheduler::spawn_scheduler;
use job_aggregator::server::{serve, AppState};
use job_aggregator::{AppConfig, JobAggregator, RunReport};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "job-aggregator", version, about = "Scrapes local job listings from LinkedIn, Indeed and APEC")]
struct Cli {
    /// CSV file holding the latest snapshot
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,

    /// Email listings that were not in the previous snapshot
    #[arg(long, global = true)]
    notify: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the listing page and scrape on a schedule (default)
    Serve {
        #[arg(long)]
        bind: Option<String>,

        #[arg(long)]
        no_scheduler: bool,
    },
    /// Run one scrape and print a summary
    Scrape,
    /// Print the stored listings
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.data_path {
        config.data_path = path;
    }
    if cli.notify {
        config.notify = true;
    }

    let command = cli.command.unwrap_or(Command::Serve {
        bind: None,
        no_scheduler: false,
    });

    let aggregator = Arc::new(JobAggregator::from_config(&config).context("Failed to set up the scrapers")?);

    match command {
        Command::Serve { bind, no_scheduler } => {
            let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());

            if no_scheduler {
                warn!("Scheduler disabled, scraping only runs on /trigger-scraping");
            } else {
                spawn_scheduler(aggregator.clone(), config.scrape_interval)?;
            }

            info!("Starting job aggregator web server on {}", bind_addr);
            serve(&bind_addr, AppState { aggregator }).await?;
        }
        Command::Scrape => {
            let report = aggregator.run().await?;
            print_report(&report);
        }
        Command::List => {
            let listings = aggregator.store().load()?;
            for listing in &listings {
                println!(
                    "{} | {} | {} | {} | {} | {}",
                    listing.date_added, listing.source, listing.title, listing.company, listing.location, listing.link
                );
            }
            println!("{} listings in {}", listings.len(), config.data_path.display());
        }
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    for source in &report.sources {
        match &source.error {
            Some(error) => println!("{:<9} failed: {}", source.source, error),
            None => println!(
                "{:<9} kept {:>3}, outside the area {:>3}, skipped {:>3}",
                source.source,
                source.kept,
                source.filtered_out,
                source.skipped.len()
            ),
        }
    }
    println!("{} listings found, {} new", report.total(), report.new_listings.len());
}
