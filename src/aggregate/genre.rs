//! Genre and rating breakdowns

use crate::dataset::{Dataset, GameRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Yearly critic score and sales of one genre
///
/// `years`, `mean_critic_score` and `global_sales` are aligned by index.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreYearSummary {
    pub genre: String,
    pub years: Vec<i32>,
    /// `None` for years where no record of the genre has a score
    pub mean_critic_score: Vec<Option<f64>>,
    pub global_sales: Vec<f64>,
}

impl GenreYearSummary {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Record count of one category
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Record counts per genre, or per rating within one genre
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RatingDistribution {
    /// Genre the counts are restricted to; `None` means counts are per genre
    pub genre: Option<String>,
    pub counts: Vec<CategoryCount>,
}

impl RatingDistribution {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Record count of one (genre, rating) pair
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CrossTabEntry {
    pub genre: String,
    pub rating: String,
    pub count: usize,
}

/// A (genre, critic score) point
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreScorePoint {
    pub genre: String,
    pub critic_score: f64,
}

#[derive(Default)]
struct YearAccumulator {
    score_sum: f64,
    score_count: usize,
    sales: f64,
}

/// Mean Critic_Score and summed Global_Sales per year for one genre
///
/// Both series share the same ascending year keys: every year with at least
/// one record of the genre.
pub fn mean_score_and_sales_by_year_for_genre(dataset: &Dataset, genre: &str) -> GenreYearSummary {
    let mut by_year: BTreeMap<i32, YearAccumulator> = BTreeMap::new();

    for record in dataset.records().iter().filter(|r| r.genre == genre) {
        let acc = by_year.entry(record.year).or_default();
        if let Some(score) = record.critic_score {
            acc.score_sum += score;
            acc.score_count += 1;
        }
        if let Some(sales) = record.global_sales {
            acc.sales += sales;
        }
    }

    let mut summary = GenreYearSummary {
        genre: genre.to_string(),
        years: Vec::with_capacity(by_year.len()),
        mean_critic_score: Vec::with_capacity(by_year.len()),
        global_sales: Vec::with_capacity(by_year.len()),
    };

    for (year, acc) in by_year {
        summary.years.push(year);
        summary.mean_critic_score.push(
            (acc.score_count > 0).then(|| acc.score_sum / acc.score_count as f64),
        );
        summary.global_sales.push(acc.sales);
    }

    summary
}

/// Record counts per genre, or per rating when a genre is given
///
/// Records without a rating are counted under [`UNRATED`](crate::dataset::UNRATED),
/// so the counts always add up to the number of records considered.
pub fn rating_distribution_for_genre(dataset: &Dataset, genre: Option<&str>) -> RatingDistribution {
    let counts = match genre {
        None => count_by(dataset.records().iter(), |r| r.genre.as_str()),
        Some(genre) => count_by(
            dataset.records().iter().filter(|r| r.genre == genre),
            GameRecord::rating_label,
        ),
    };

    RatingDistribution {
        genre: genre.map(str::to_string),
        counts,
    }
}

/// Record counts per (genre, rating), optionally restricted to one genre
pub fn genre_rating_cross_tabulation(dataset: &Dataset, genre: Option<&str>) -> Vec<CrossTabEntry> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();

    for record in dataset
        .records()
        .iter()
        .filter(|r| genre.map_or(true, |g| r.genre == g))
    {
        *counts
            .entry((record.genre.as_str(), record.rating_label()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((genre, rating), count)| CrossTabEntry {
            genre: genre.to_string(),
            rating: rating.to_string(),
            count,
        })
        .collect()
}

/// Summed Critic_Score per genre, ascending by genre
pub fn critic_score_by_genre(dataset: &Dataset) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for record in dataset.records() {
        let total = totals.entry(record.genre.as_str()).or_insert(0.0);
        if let Some(score) = record.critic_score {
            *total += score;
        }
    }

    totals
        .into_iter()
        .map(|(genre, total)| (genre.to_string(), total))
        .collect()
}

/// Every scored record as a (genre, score) point, grouped by genre
///
/// Points within a genre keep dataset order.
pub fn critic_scores_with_genre(dataset: &Dataset) -> Vec<GenreScorePoint> {
    let mut points: Vec<GenreScorePoint> = dataset
        .records()
        .iter()
        .filter_map(|r| {
            r.critic_score.map(|critic_score| GenreScorePoint {
                genre: r.genre.clone(),
                critic_score,
            })
        })
        .collect();

    // stable sort keeps dataset order within a genre
    points.sort_by(|a, b| a.genre.cmp(&b.genre));
    points
}

fn count_by<'a, I, F>(records: I, key: F) -> Vec<CategoryCount>
where
    I: Iterator<Item = &'a GameRecord>,
    F: Fn(&'a GameRecord) -> &'a str,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}
