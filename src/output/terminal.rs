// Colored terminal rendering of the results view.
//
// The render loop in main prints append-only: the header and stats row
// once their skeletons resolve, then one card block per reveal tick. This
// module only formats; all state lives in the session.

use colored::{ColoredString, Colorize};

use crate::output::{format_count, truncate_chars};
use crate::session::RiskStats;
use crate::synth::{Record, RiskLevel};

/// Header line for the results view.
pub fn print_header(query: &str, total: usize) {
    println!();
    println!("{}", format!("=== Scan Results: {query} ===").bold());
    println!("  {} profiles found", total.to_string().bright_cyan());
}

/// The stats row — total plus one counter per risk label.
pub fn print_risk_stats(stats: &RiskStats, total: usize) {
    println!();
    println!(
        "  {:<16} {:<14} {:<14} {:<14}",
        format!("Total {total}").bold(),
        format!("Low {}", stats.low).green(),
        format!("Medium {}", stats.medium).yellow(),
        format!("High {}", stats.high).red(),
    );
    println!("  {}", "-".repeat(58).dimmed());
}

/// One revealed profile card.
pub fn print_card(record: &Record, index: usize) {
    let verified = if record.verified {
        "✓ verified".bright_cyan()
    } else {
        "unverified".dimmed()
    };

    println!(
        "  {:>2}. {:<12} @{:<28} {}",
        index + 1,
        record.platform.label().bold(),
        record.username,
        colorize_risk(record.risk),
    );
    println!(
        "      {}  {} followers · {} following · {} posts",
        verified,
        format_count(record.followers),
        format_count(record.following),
        format_count(record.posts),
    );
    println!(
        "      {} · joined {} · active {} · engagement {:.1}",
        record.location.dimmed(),
        record.join_date,
        record.last_active,
        record.engagement_score,
    );
    println!("      {}", truncate_chars(&record.bio, 70).dimmed());
    println!("      {}", record.profile_url.underline().dimmed());
    println!();
}

/// Shown when the active filters leave nothing to reveal.
pub fn print_no_results() {
    println!();
    println!("  {}", "No results found".bold());
    println!("  Try adjusting your filters or search criteria");
    println!();
}

fn colorize_risk(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::Low => format!("[{}]", risk).green(),
        RiskLevel::Medium => format!("[{}]", risk).yellow(),
        RiskLevel::High => format!("[{}]", risk).red().bold(),
    }
}
