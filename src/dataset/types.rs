//! Core data types for the game sales dataset
//!
//! This module defines the fundamental types shared by every layer:
//! - `GameRecord`: One row of the dataset
//! - `Metric`: Closed set of numeric columns that controls may select
//! - `Dataset`: The immutable, ordered collection of records
//! - `DatasetSummary`: Distinct keys used to populate controls

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::error::DatasetError;

/// Label used for records that carry no ESRB rating
pub const UNRATED: &str = "Unrated";

/// A single game record
///
/// Numeric cells are optional: the source data leaves scores blank (or `tbd`)
/// for many titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// Title of the game
    #[serde(default)]
    pub name: Option<String>,
    /// Hardware platform (PS2, X360, ...)
    #[serde(default)]
    pub platform: Option<String>,
    /// Release year
    pub year: i32,
    /// Genre (Action, Sports, ...)
    pub genre: String,
    /// Publisher name
    #[serde(default)]
    pub publisher: Option<String>,
    /// ESRB rating (E, T, M, ...)
    #[serde(default)]
    pub rating: Option<String>,
    pub na_sales: Option<f64>,
    pub eu_sales: Option<f64>,
    pub jp_sales: Option<f64>,
    pub global_sales: Option<f64>,
    pub critic_score: Option<f64>,
    pub critic_count: Option<f64>,
    pub user_score: Option<f64>,
}

impl GameRecord {
    /// Create a record with only the grouping keys set
    pub fn new(year: i32, genre: impl Into<String>) -> Self {
        Self {
            name: None,
            platform: None,
            year,
            genre: genre.into(),
            publisher: None,
            rating: None,
            na_sales: None,
            eu_sales: None,
            jp_sales: None,
            global_sales: None,
            critic_score: None,
            critic_count: None,
            user_score: None,
        }
    }

    /// Builder method: set the rating
    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Builder method: set the platform
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Builder method: set the title
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method: set one numeric column
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        *self.metric_slot(metric) = Some(value);
        self
    }

    /// Value of a numeric column, if present
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::NaSales => self.na_sales,
            Metric::EuSales => self.eu_sales,
            Metric::JpSales => self.jp_sales,
            Metric::GlobalSales => self.global_sales,
            Metric::CriticScore => self.critic_score,
            Metric::CriticCount => self.critic_count,
            Metric::UserScore => self.user_score,
        }
    }

    /// Rating label used for grouping; missing ratings fall under [`UNRATED`]
    pub fn rating_label(&self) -> &str {
        self.rating.as_deref().unwrap_or(UNRATED)
    }

    fn metric_slot(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::NaSales => &mut self.na_sales,
            Metric::EuSales => &mut self.eu_sales,
            Metric::JpSales => &mut self.jp_sales,
            Metric::GlobalSales => &mut self.global_sales,
            Metric::CriticScore => &mut self.critic_score,
            Metric::CriticCount => &mut self.critic_count,
            Metric::UserScore => &mut self.user_score,
        }
    }
}

/// Numeric columns of the dataset
///
/// Serialized with the CSV column names so that controls and the UI host use
/// the same identifiers as the data file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    #[serde(rename = "NA_Sales")]
    NaSales,
    #[serde(rename = "EU_Sales")]
    EuSales,
    #[serde(rename = "JP_Sales")]
    JpSales,
    #[serde(rename = "Global_Sales")]
    GlobalSales,
    #[serde(rename = "Critic_Score")]
    CriticScore,
    #[serde(rename = "Critic_Count")]
    CriticCount,
    #[serde(rename = "User_Score")]
    UserScore,
}

impl Metric {
    /// Get all metrics for iteration
    pub fn all() -> &'static [Metric] {
        &[
            Metric::NaSales,
            Metric::EuSales,
            Metric::JpSales,
            Metric::GlobalSales,
            Metric::CriticScore,
            Metric::CriticCount,
            Metric::UserScore,
        ]
    }

    /// Column name as it appears in the CSV header
    pub fn column(&self) -> &'static str {
        match self {
            Metric::NaSales => "NA_Sales",
            Metric::EuSales => "EU_Sales",
            Metric::JpSales => "JP_Sales",
            Metric::GlobalSales => "Global_Sales",
            Metric::CriticScore => "Critic_Score",
            Metric::CriticCount => "Critic_Count",
            Metric::UserScore => "User_Score",
        }
    }

    /// Human-readable label for axis titles
    pub fn label(&self) -> &'static str {
        match self {
            Metric::NaSales => "NA Sales",
            Metric::EuSales => "EU Sales",
            Metric::JpSales => "JP Sales",
            Metric::GlobalSales => "Global Sales",
            Metric::CriticScore => "Critic Score",
            Metric::CriticCount => "Critic Count",
            Metric::UserScore => "User Score",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl std::str::FromStr for Metric {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::all()
            .iter()
            .copied()
            .find(|m| m.column() == s)
            .ok_or_else(|| DatasetError::UnknownMetric(s.to_string()))
    }
}

/// The loaded dataset
///
/// Built once at startup and shared read-only (`Arc<Dataset>`) by every
/// aggregation call.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<GameRecord>,
}

impl Dataset {
    /// Wrap an ordered list of records
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    /// All records in load order
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in ascending order
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        years.into_iter().collect()
    }

    /// Distinct genres in ascending order
    pub fn genres(&self) -> Vec<String> {
        let genres: BTreeSet<&str> = self.records.iter().map(|r| r.genre.as_str()).collect();
        genres.into_iter().map(str::to_string).collect()
    }

    /// Distinct rating labels in ascending order, including "Unrated"
    pub fn ratings(&self) -> Vec<String> {
        let ratings: BTreeSet<&str> = self.records.iter().map(|r| r.rating_label()).collect();
        ratings.into_iter().map(str::to_string).collect()
    }

    /// Summarize the distinct keys of the dataset
    pub fn summary(&self) -> DatasetSummary {
        let years = self.years();
        let platforms: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.platform.as_deref())
            .collect();

        DatasetSummary {
            record_count: self.records.len(),
            min_year: years.first().copied(),
            max_year: years.last().copied(),
            years,
            genres: self.genres(),
            ratings: self.ratings(),
            platforms: platforms.into_iter().map(str::to_string).collect(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Distinct keys of a dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub years: Vec<i32>,
    pub genres: Vec<String>,
    pub ratings: Vec<String>,
    pub platforms: Vec<String>,
    /// When this summary was produced
    pub generated_at: String,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min_year, self.max_year) {
            (Some(min), Some(max)) => write!(
                f,
                "{} records, years {}-{}, {} genres, {} ratings",
                self.record_count,
                min,
                max,
                self.genres.len(),
                self.ratings.len()
            ),
            _ => write!(f, "{} records", self.record_count),
        }
    }
}
