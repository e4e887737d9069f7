use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use tracing::info;

use dossier::config::Config;
use dossier::filter::{PlatformFilter, RiskFilter};
use dossier::output::terminal;
use dossier::reveal::RevealDelays;
use dossier::session::{
    FilterUpdate, PlatformScope, ScanDepth, SearchOptions, SearchType, SessionController,
};
use dossier::synth::Platform;

/// Dossier: simulated OSINT profile discovery.
///
/// Fans a query out across eight platforms and stage-reveals a grid of
/// synthetic profile records. Everything is generated locally — no
/// lookups happen, which is the entire point of the demo.
#[derive(Parser)]
#[command(name = "dossier", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scan and reveal the results
    Scan {
        /// Username, email, or identifier to scan for
        query: String,

        /// What kind of identifier the query is (accepted but does not
        /// change the synthesized output)
        #[arg(long, default_value = "username")]
        search_type: String,

        /// Platform category to scan (accepted but inert, like search-type)
        #[arg(long, default_value = "all")]
        scope: String,

        /// Scan depth (accepted but inert, like search-type)
        #[arg(long, default_value = "deep")]
        depth: String,

        /// Show only one platform ("all" or unknown values show everything)
        #[arg(long, default_value = "all")]
        platform: String,

        /// Show only one risk level ("all" or unknown values show everything)
        #[arg(long, default_value = "all")]
        risk: String,

        /// Case-insensitive text filter on username and platform
        #[arg(long, default_value = "")]
        find: String,

        /// Print the filtered records as JSON and skip the staged reveal
        #[arg(long)]
        json: bool,

        /// Collapse all simulated delays to zero
        #[arg(long)]
        fast: bool,
    },

    /// List the platforms every scan fans out to
    Platforms,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dossier=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            query,
            search_type,
            scope,
            depth,
            platform,
            risk,
            find,
            json,
            fast,
        } => {
            let mut config = Config::load()?;
            if fast || json {
                config = config.instant();
            }
            let options = SearchOptions {
                search_type: SearchType::parse(&search_type),
                scope: PlatformScope::parse(&scope),
                depth: ScanDepth::parse(&depth),
            };
            run_scan(&config, &query, options, &platform, &risk, &find, json).await
        }
        Commands::Platforms => {
            println!("Every scan produces one record per platform:");
            for p in Platform::ALL {
                println!("  {:<12} https://{p}.com/<query>", p.label());
            }
            Ok(())
        }
    }
}

async fn run_scan(
    config: &Config,
    query: &str,
    options: SearchOptions,
    platform: &str,
    risk: &str,
    find: &str,
    json: bool,
) -> Result<()> {
    let delays = RevealDelays {
        stats: config.stats_delay,
        cards: config.cards_delay,
        tick: config.tick_interval,
    };
    let mut session = SessionController::new(delays);

    if let Err(e) = session.submit_query(query, options) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }

    // Simulated scan delay between submission and the results view.
    if !json {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Initiating deep scan...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        tokio::time::sleep(config.scan_delay).await;
        spinner.finish_and_clear();
    }

    session.complete_loading().await;

    // Pre-set filters from the command line, same path a UI would take.
    session
        .update_filter(FilterUpdate::Platform(PlatformFilter::parse(platform)))
        .await;
    session
        .update_filter(FilterUpdate::Risk(RiskFilter::parse(risk)))
        .await;
    if !find.is_empty() {
        session
            .update_filter(FilterUpdate::Text(find.to_string()))
            .await;
    }

    let filtered = session.filtered_records();
    info!(
        total = session.base_records().len(),
        filtered = filtered.len(),
        "Rendering results"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    render_reveal(&mut session).await;
    Ok(())
}

/// Append-only render loop: poll the reveal state and print each piece of
/// the view as its skeleton resolves.
async fn render_reveal(session: &mut SessionController) {
    let filtered = session.filtered_records();
    let stats = session.risk_stats();
    let total = session.base_records().len();

    terminal::print_header(session.query(), total);

    let mut stats_printed = false;
    let mut cards_printed = 0usize;
    loop {
        let reveal = session.reveal().await;

        if !stats_printed && !reveal.loading_stats {
            terminal::print_risk_stats(&stats, total);
            stats_printed = true;
        }

        if !reveal.loading_cards {
            while cards_printed < reveal.visible.min(filtered.len()) {
                terminal::print_card(&filtered[cards_printed], cards_printed);
                cards_printed += 1;
            }
        }

        if stats_printed && reveal.complete() {
            if filtered.is_empty() {
                terminal::print_no_results();
            }
            break;
        }

        tokio::time::sleep(Duration::from_millis(30)).await;
    }

    session.go_back();
}
