//! Chart builders
//!
//! One function per chart state, mapping an aggregation result to a
//! [`ChartSpec`]. Builders do no I/O and never fail: an empty aggregation
//! produces a chart with empty traces and a normal title.

use super::spec::{ChartSpec, LineStyle, Trace, Values};
use crate::aggregate::{
    CrossTabEntry, Correlation, GenreScorePoint, GenreYearSummary, RatingDistribution,
    ScatterPoints, YearValue,
};
use crate::dataset::Metric;

/// Colors for rating series
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// Yearly totals of `metric` for years up to `year`
pub fn sales_line_chart(series: &[YearValue], metric: Metric, year: i32) -> ChartSpec {
    let years = series.iter().map(|p| p.year).collect();
    let totals = series.iter().map(|p| p.value).collect();

    ChartSpec::new(format!("Video Game {} by Year up to {}", metric.label(), year))
        .axes("Year", metric.label())
        .trace(Trace::line(Values::Integers(years), Values::Numbers(totals)).named(metric.label()))
}

/// Critic score against `metric`, titled with the correlation
pub fn correlation_scatter(points: &ScatterPoints, metric: Metric, correlation: Correlation) -> ChartSpec {
    ChartSpec::new(format!(
        "Correlation is {} in relation to Critic Score",
        correlation
    ))
    .axes(Metric::CriticScore.label(), metric.label())
    .trace(
        Trace::scatter(
            Values::Numbers(points.x.clone()),
            Values::Numbers(points.y.clone()),
        )
        .named(metric.label()),
    )
}

/// Summed critic score per genre
pub fn critic_score_bar(totals: &[(String, f64)]) -> ChartSpec {
    let genres = totals.iter().map(|(g, _)| g.clone()).collect();
    let scores = totals.iter().map(|(_, s)| *s).collect();

    ChartSpec::new("Critic Score by Genre")
        .axes("Genre", "Critic Score")
        .trace(Trace::bar(Values::Text(genres), Values::Numbers(scores)).named("Critic Score"))
}

/// Every scored record placed by genre
pub fn genre_score_scatter(points: &[GenreScorePoint]) -> ChartSpec {
    let genres = points.iter().map(|p| p.genre.clone()).collect();
    let scores = points.iter().map(|p| p.critic_score).collect();

    ChartSpec::new("Critic Score and Game Genre")
        .axes("Genre", "Critic Score")
        .trace(Trace::scatter(Values::Text(genres), Values::Numbers(scores)).named("Critic Score"))
}

/// Yearly mean critic score and global sales of one genre
pub fn genre_trend_chart(summary: &GenreYearSummary) -> ChartSpec {
    let dashed = |color: &str| LineStyle {
        color: color.to_string(),
        width: 4.0,
        dash: Some("dashdot".to_string()),
    };

    ChartSpec::new(format!(
        "Critic Score and Global Sales by Year for {}",
        summary.genre
    ))
    .axes("Year", "Value")
    .trace(
        Trace::line(
            Values::Integers(summary.years.clone()),
            Values::Nullable(summary.mean_critic_score.clone()),
        )
        .named("Critic_Score")
        .styled(dashed("firebrick")),
    )
    .trace(
        Trace::line(
            Values::Integers(summary.years.clone()),
            Values::Numbers(summary.global_sales.clone()),
        )
        .named("Global_Sales")
        .styled(dashed("blue")),
    )
}

/// Record counts as bars
///
/// Whole-dataset counts are one bar per genre. Counts restricted to a genre
/// are one stacked series per rating over that genre's single bar, so the
/// clicked x value is always a genre. A rating's color is taken from its
/// position in `ratings` (every rating of the dataset), so it is the same
/// whichever genre is shown.
pub fn rating_bar_graph(distribution: &RatingDistribution, ratings: &[String]) -> ChartSpec {
    match &distribution.genre {
        None => {
            let genres = distribution.counts.iter().map(|c| c.category.clone()).collect();
            let counts = distribution.counts.iter().map(|c| c.count as f64).collect();

            ChartSpec::new("Games by Genre")
                .axes("Genre", "Count")
                .trace(Trace::bar(Values::Text(genres), Values::Numbers(counts)).named("Count"))
        }
        Some(genre) => {
            let mut spec = ChartSpec::new(format!("Rating Distribution for {}", genre))
                .axes("Genre", "Count")
                .stacked();

            for count in &distribution.counts {
                let idx = ratings
                    .iter()
                    .position(|r| *r == count.category)
                    .unwrap_or(ratings.len());
                spec = spec.trace(
                    Trace::bar(
                        Values::Text(vec![genre.clone()]),
                        Values::Numbers(vec![count.count as f64]),
                    )
                    .named(count.category.clone())
                    .colored(SERIES_COLORS[idx % SERIES_COLORS.len()]),
                );
            }

            spec
        }
    }
}

/// Cross-tabulated counts as a pie
///
/// Without a genre the slices are genres (ratings summed). With a genre the
/// slices are that genre's ratings. Every slice carries its genre as
/// `customdata` so a click always identifies a genre.
pub fn cross_tab_pie(entries: &[CrossTabEntry], genre: Option<&str>) -> ChartSpec {
    let mut labels: Vec<String> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    let mut customdata: Vec<String> = Vec::new();

    match genre {
        None => {
            // entries arrive sorted by genre, so equal genres are adjacent
            for entry in entries {
                if labels.last() == Some(&entry.genre) {
                    if let Some(total) = values.last_mut() {
                        *total += entry.count as f64;
                    }
                } else {
                    labels.push(entry.genre.clone());
                    values.push(entry.count as f64);
                    customdata.push(entry.genre.clone());
                }
            }
        }
        Some(_) => {
            for entry in entries {
                labels.push(entry.rating.clone());
                values.push(entry.count as f64);
                customdata.push(entry.genre.clone());
            }
        }
    }

    let title = match genre {
        None => "Genre Distribution".to_string(),
        Some(genre) => format!("Rating Distribution of {} Games", genre),
    };

    ChartSpec::new(title).trace(Trace::pie(labels, values).customdata(customdata))
}
