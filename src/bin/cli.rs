//! Gamedash CLI
//!
//! Command-line interface for Gamedash operations:
//! - Run the dashboard aggregations offline over a CSV
//! - Print any chart's figure for a selection
//! - Check a running server's status
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gamedash::aggregate;
use gamedash::binding::{Dispatcher, SelectionState};
use gamedash::chart::ChartId;
use gamedash::dataset::{load_dataset, Dataset, Metric};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gamedash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Video game sales dashboard tools")]
#[command(long_about = "Gamedash computes the dashboard's aggregations and chart figures.\nRun them offline against a CSV or check a running server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset CSV for offline commands
    #[arg(short, long, default_value = "video_games.csv", global = true)]
    pub dataset: PathBuf,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8273", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show record count and distinct keys
    Summary,

    /// Sales per year up to a year
    Line {
        /// Sales column (NA_Sales, EU_Sales, JP_Sales, Global_Sales)
        #[arg(short, long, default_value = "NA_Sales")]
        metric: String,
        /// Year threshold (default: earliest year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Pearson correlation of a metric against Critic_Score
    Correlation {
        /// Numeric column
        #[arg(short, long, default_value = "Critic_Count")]
        metric: String,
    },

    /// Mean critic score and global sales per year for one genre
    Genre {
        /// Genre name, case-sensitive
        genre: String,
    },

    /// Rating counts, optionally for one genre
    Ratings {
        /// Genre name (default: counts per genre)
        genre: Option<String>,
    },

    /// Genre x rating counts, optionally for one genre
    Crosstab {
        /// Genre name
        genre: Option<String>,
    },

    /// Print a chart figure as JSON
    Figure {
        /// Chart id (line-chart, scatter-plot, chart1, chart2, pie-chart, bar-graph)
        chart: String,
        /// Selection state as JSON (default: initial selection)
        #[arg(short, long)]
        selection: Option<String>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary => {
            let dataset = open(&cli.dataset)?;
            let summary = dataset.summary();

            match cli.format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Table => {
                    println!("Records:   {}", summary.record_count);
                    if let (Some(min), Some(max)) = (summary.min_year, summary.max_year) {
                        println!("Years:     {}-{}", min, max);
                    }
                    println!("Genres:    {}", summary.genres.join(", "));
                    println!("Ratings:   {}", summary.ratings.join(", "));
                    println!("Platforms: {}", summary.platforms.len());
                }
            }
        }

        Commands::Line { metric, year } => {
            let dataset = open(&cli.dataset)?;
            let metric = parse_metric(&metric)?;
            let year = year
                .or_else(|| dataset.years().first().copied())
                .unwrap_or_default();
            let series = aggregate::sales_by_year_up_to(&dataset, metric, year);

            match cli.format {
                OutputFormat::Json => print_json(&series)?,
                OutputFormat::Table => {
                    println!("{:<8} {:>12}", "Year", metric.label());
                    println!("{}", "-".repeat(21));
                    for point in &series {
                        println!("{:<8} {:>12.2}", point.year, point.value);
                    }
                }
            }
        }

        Commands::Correlation { metric } => {
            let dataset = open(&cli.dataset)?;
            let metric = parse_metric(&metric)?;
            let correlation = aggregate::correlation_against_critic_score(&dataset, metric);

            match cli.format {
                OutputFormat::Json => print_json(&correlation)?,
                OutputFormat::Table => {
                    println!(
                        "{} vs Critic Score: {} (n = {})",
                        metric.label(),
                        correlation,
                        correlation.sample_size()
                    );
                }
            }
        }

        Commands::Genre { genre } => {
            let dataset = open(&cli.dataset)?;
            let summary = aggregate::mean_score_and_sales_by_year_for_genre(&dataset, &genre);

            match cli.format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Table => {
                    if summary.is_empty() {
                        println!("No games in genre {:?}", genre);
                        return Ok(());
                    }
                    println!("{:<8} {:>14} {:>14}", "Year", "Critic Score", "Global Sales");
                    println!("{}", "-".repeat(38));
                    for ((year, score), sales) in summary
                        .years
                        .iter()
                        .zip(&summary.mean_critic_score)
                        .zip(&summary.global_sales)
                    {
                        let score = score
                            .map(|s| format!("{:.2}", s))
                            .unwrap_or_else(|| "-".to_string());
                        println!("{:<8} {:>14} {:>14.2}", year, score, sales);
                    }
                }
            }
        }

        Commands::Ratings { genre } => {
            let dataset = open(&cli.dataset)?;
            let distribution = aggregate::rating_distribution_for_genre(&dataset, genre.as_deref());

            match cli.format {
                OutputFormat::Json => print_json(&distribution)?,
                OutputFormat::Table => {
                    let header = if distribution.genre.is_some() { "Rating" } else { "Genre" };
                    println!("{:<20} {:>8}", header, "Count");
                    println!("{}", "-".repeat(29));
                    for entry in &distribution.counts {
                        println!("{:<20} {:>8}", entry.category, entry.count);
                    }
                    println!("{:<20} {:>8}", "Total", distribution.total());
                }
            }
        }

        Commands::Crosstab { genre } => {
            let dataset = open(&cli.dataset)?;
            let entries = aggregate::genre_rating_cross_tabulation(&dataset, genre.as_deref());

            match cli.format {
                OutputFormat::Json => print_json(&entries)?,
                OutputFormat::Table => {
                    println!("{:<20} {:<10} {:>8}", "Genre", "Rating", "Count");
                    println!("{}", "-".repeat(40));
                    for entry in &entries {
                        println!("{:<20} {:<10} {:>8}", entry.genre, entry.rating, entry.count);
                    }
                }
            }
        }

        Commands::Figure { chart, selection } => {
            let chart: ChartId = chart.parse().map_err(anyhow::Error::msg)?;
            let selection: SelectionState = match selection {
                Some(json) => serde_json::from_str(&json).context("Invalid selection JSON")?,
                None => SelectionState::default(),
            };
            selection.validate()?;

            let dispatcher = Dispatcher::new(Arc::new(open(&cli.dataset)?));
            let figure = dispatcher.render(chart, &selection);

            // Figures are JSON in either format
            print_json(&figure)?;
        }

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if cli.format == OutputFormat::Json {
                        return print_json(&health);
                    }

                    println!(
                        "Gamedash v{}",
                        health["version"].as_str().unwrap_or(env!("CARGO_PKG_VERSION"))
                    );
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    if let Some(records) = health["record_count"].as_u64() {
                        println!("Records:    {}", records);
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Gamedash API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Gamedash API server is running:");
                    eprintln!("  cargo run --bin gamedash");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = gamedash::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn open(path: &Path) -> anyhow::Result<Dataset> {
    load_dataset(path).with_context(|| format!("Failed to load dataset from {:?}", path))
}

fn parse_metric(name: &str) -> anyhow::Result<Metric> {
    Ok(name.parse::<Metric>()?)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
