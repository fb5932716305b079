//! Aggregations
//!
//! Pure functions deriving summaries from the [`Dataset`](crate::dataset::Dataset)
//! and a selection value. None of them keep state between calls, and every
//! grouped output is ordered ascending by its grouping key.
//!
//! # Functions
//!
//! - [`sales_by_year_up_to`]: summed sales per year up to a threshold
//! - [`correlation_against_critic_score`]: Pearson r between Critic_Score and a metric
//! - [`mean_score_and_sales_by_year_for_genre`]: yearly mean score and sales of one genre
//! - [`rating_distribution_for_genre`]: record counts per genre, or per rating within a genre
//! - [`genre_rating_cross_tabulation`]: record counts per (genre, rating)

pub mod correlation;
pub mod genre;
pub mod sales;

pub use correlation::{
    correlation_against_critic_score, metric_pairs, pearson_correlation, Correlation,
    ScatterPoints,
};
pub use genre::{
    critic_score_by_genre, critic_scores_with_genre, genre_rating_cross_tabulation,
    mean_score_and_sales_by_year_for_genre, rating_distribution_for_genre, CategoryCount,
    CrossTabEntry, GenreScorePoint, GenreYearSummary, RatingDistribution,
};
pub use sales::{sales_by_year_up_to, YearValue};
