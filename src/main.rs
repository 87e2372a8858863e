use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use steam_paradox::correlation::{self, Verdict};
use steam_paradox::dataset;
use steam_paradox::genre::{self, ALL_GENRES};
use steam_paradox::rank::{rank, Metric, RankDirection};
use steam_paradox::segment::{segment, MAINSTREAM_FLOOR, NICHE_FLOOR};
use steam_paradox::{ParadoxError, Record};

#[derive(Parser)]
#[command(name = "steam-paradox")]
#[command(about = "Popularity vs quality analysis over a Steam games dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis: segment rankings plus the correlation verdict
    Report {
        /// Dataset CSV file
        input: PathBuf,

        /// Restrict the analysis to one genre
        #[arg(short, long, default_value = ALL_GENRES)]
        genre: String,

        /// Games per ranking (10-100 in steps of 10)
        #[arg(short, long, default_value_t = 10, value_parser = parse_count)]
        count: usize,
    },

    /// List the selectable genres in a dataset
    Genres {
        /// Dataset CSV file
        input: PathBuf,
    },

    /// Correlation between owners and positive rate
    Correlate {
        /// Dataset CSV file
        input: PathBuf,

        /// Restrict the analysis to one genre
        #[arg(short, long, default_value = ALL_GENRES)]
        genre: String,
    },

    /// Rank games by a single metric across the whole reliable set
    Rank {
        /// Dataset CSV file
        input: PathBuf,

        /// Metric to rank by
        #[arg(short, long, value_enum, default_value = "positive-rate")]
        metric: Metric,

        /// Keep the largest or smallest values
        #[arg(short, long, value_enum, default_value = "top")]
        direction: RankDirection,

        /// Restrict the analysis to one genre
        #[arg(short, long, default_value = ALL_GENRES)]
        genre: String,

        /// Games to show (10-100 in steps of 10)
        #[arg(short, long, default_value_t = 10, value_parser = parse_count)]
        count: usize,
    },

    /// Dataset summary: reliable rows and segment sizes
    Info {
        /// Dataset CSV file
        input: PathBuf,
    },
}

/// Display counts mirror the dashboard slider: 10 to 100 in steps of 10
fn parse_count(s: &str) -> std::result::Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (10..=100).contains(&n) && n % 10 == 0 {
        Ok(n)
    } else {
        Err("count must be between 10 and 100 in steps of 10".to_string())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { input, genre, count } => {
            report(&input, &genre, count)?;
        }
        Commands::Genres { input } => {
            genres(&input)?;
        }
        Commands::Correlate { input, genre } => {
            correlate(&input, &genre)?;
        }
        Commands::Rank { input, metric, direction, genre, count } => {
            rank_command(&input, metric, direction, &genre, count)?;
        }
        Commands::Info { input } => {
            info(&input)?;
        }
    }

    Ok(())
}

/// Load once per invocation; every section below works from this one set
fn load(input: &PathBuf) -> Result<Vec<Record>> {
    dataset::load_and_enrich(input).with_context(|| format!("Failed to load {}", input.display()))
}

fn report(input: &PathBuf, genre: &str, count: usize) -> Result<()> {
    let records = load(input)?;
    let filtered = genre::filter_by_genre(&records, genre);

    println!("The Steam Paradox: Popularity vs Quality");
    println!("Genre: {}   Games analyzed: {}", genre, filtered.len());
    println!();

    let segments = segment(&filtered);

    println!(
        "== Mainstream (>{}k owners) ==",
        MAINSTREAM_FLOOR as u64 / 1000
    );
    if segments.mainstream.is_empty() {
        println!("No mainstream games in this genre.");
    } else {
        print_ranking(
            "Worth the hype (highest rated)",
            &rank(&segments.mainstream, Metric::PositiveRate, count, RankDirection::Top),
        );
        print_ranking(
            "Overrated (lowest rated)",
            &rank(&segments.mainstream, Metric::PositiveRate, count, RankDirection::Bottom),
        );
    }
    println!();

    println!(
        "== Niche ({}k-{}k owners) ==",
        NICHE_FLOOR as u64 / 1000,
        MAINSTREAM_FLOOR as u64 / 1000
    );
    if segments.niche.is_empty() {
        println!("No niche games in this genre.");
    } else {
        print_ranking(
            "Niche favorites",
            &rank(&segments.niche, Metric::PositiveRate, count, RankDirection::Top),
        );
    }
    println!();

    println!("== Hidden gems (<{}k owners) ==", NICHE_FLOOR as u64 / 1000);
    if segments.hidden_gems.is_empty() {
        println!("No hidden gems with enough reviews in this genre.");
    } else {
        print_ranking(
            "Hidden gems",
            &rank(&segments.hidden_gems, Metric::PositiveRate, count, RankDirection::Top),
        );
    }
    println!();

    print_correlation(&filtered);
    Ok(())
}

fn genres(input: &PathBuf) -> Result<()> {
    let records = load(input)?;
    for g in genre::list_genres(&records) {
        println!("{}", g);
    }
    Ok(())
}

fn correlate(input: &PathBuf, genre_token: &str) -> Result<()> {
    let records = load(input)?;
    let filtered = genre::filter_by_genre(&records, genre_token);
    print_correlation(&filtered);
    Ok(())
}

fn rank_command(
    input: &PathBuf,
    metric: Metric,
    direction: RankDirection,
    genre_token: &str,
    count: usize,
) -> Result<()> {
    let records = load(input)?;
    let filtered = genre::filter_by_genre(&records, genre_token);
    let title = match direction {
        RankDirection::Top => format!("Top {} by {}", count, metric),
        RankDirection::Bottom => format!("Bottom {} by {}", count, metric),
    };
    print_ranking(&title, &rank(&filtered, metric, count, direction));
    Ok(())
}

fn info(input: &PathBuf) -> Result<()> {
    let records = load(input)?;
    let segments = segment(&records);

    println!("Dataset: {}", input.display());
    println!(
        "Reliable games (> {} ratings): {}",
        dataset::MIN_TOTAL_RATINGS,
        records.len()
    );
    println!("  Mainstream:  {}", segments.mainstream.len());
    println!("  Niche:       {}", segments.niche.len());
    println!("  Hidden gems: {}", segments.hidden_gems.len());
    println!("Genres: {}", genre::list_genres(&records).len() - 1);
    Ok(())
}

/// Print a ranked list, largest value first
fn print_ranking(title: &str, ranked: &[Record]) {
    println!("{}:", title);
    if ranked.is_empty() {
        println!("  (no games)");
        return;
    }
    // rank() returns ascending order; a terminal list reads best top-down
    for record in ranked.iter().rev() {
        println!(
            "  {:>5.1}%  {:>12} owners  {}",
            record.positive_rate, record.average_owners as u64, record.name
        );
    }
}

fn print_correlation(records: &[Record]) {
    match correlation::correlation(records) {
        Ok(c) => {
            println!("Correlation (owners vs positive rate): {:.3}", c.coefficient);
            match c.verdict {
                Verdict::ParadoxConfirmed => {
                    println!("Paradox confirmed: popularity does not imply quality.")
                }
                Verdict::PositiveRelationship => {
                    println!("Positive relationship observed between popularity and quality.")
                }
            }
        }
        Err(ParadoxError::NotComputable(reason)) => {
            println!("Correlation: insufficient data ({})", reason);
        }
        Err(e) => println!("Correlation: processing error ({})", e),
    }
}
