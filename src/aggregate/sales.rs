//! Yearly sales totals

use crate::dataset::{Dataset, Metric};
use serde::Serialize;
use std::collections::BTreeMap;

/// One point of a per-year series
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// Sum `metric` per year over records released in or before `year_threshold`
///
/// Missing cells contribute nothing, so a year whose records all lack the
/// metric still appears with a total of 0. Returns an empty series when no
/// record passes the filter.
pub fn sales_by_year_up_to(dataset: &Dataset, metric: Metric, year_threshold: i32) -> Vec<YearValue> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();

    for record in dataset.records().iter().filter(|r| r.year <= year_threshold) {
        let total = totals.entry(record.year).or_insert(0.0);
        if let Some(value) = record.metric(metric) {
            *total += value;
        }
    }

    totals
        .into_iter()
        .map(|(year, value)| YearValue { year, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::GameRecord;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            GameRecord::new(2003, "Action").with(Metric::NaSales, 1.0),
            GameRecord::new(2001, "Action").with(Metric::NaSales, 2.0),
            GameRecord::new(2003, "Sports").with(Metric::NaSales, 0.5),
            GameRecord::new(2002, "Sports"),
            GameRecord::new(2005, "Racing").with(Metric::NaSales, 4.0),
        ])
    }

    #[test]
    fn test_sums_per_year_ascending() {
        let series = sales_by_year_up_to(&dataset(), Metric::NaSales, 2004);
        assert_eq!(
            series,
            vec![
                YearValue { year: 2001, value: 2.0 },
                YearValue { year: 2002, value: 0.0 },
                YearValue { year: 2003, value: 1.5 },
            ]
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let series = sales_by_year_up_to(&dataset(), Metric::NaSales, 2005);
        assert_eq!(series.last().map(|p| p.year), Some(2005));
    }

    #[test]
    fn test_only_years_up_to_threshold_without_duplicates() {
        let data = dataset();
        for threshold in 1999..=2006 {
            let series = sales_by_year_up_to(&data, Metric::NaSales, threshold);
            assert!(series.iter().all(|p| p.year <= threshold));
            assert!(series.windows(2).all(|w| w[0].year < w[1].year));
        }
    }

    #[test]
    fn test_no_matching_records() {
        assert!(sales_by_year_up_to(&dataset(), Metric::NaSales, 1990).is_empty());
    }

    #[test]
    fn test_single_year_gives_single_point() {
        let data = Dataset::new(vec![
            GameRecord::new(2000, "Action").with(Metric::JpSales, 0.3),
            GameRecord::new(2000, "Puzzle").with(Metric::JpSales, 0.2),
        ]);
        let series = sales_by_year_up_to(&data, Metric::JpSales, 2000);
        assert_eq!(series.len(), 1);
        assert!((series[0].value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let data = dataset();
        assert_eq!(
            sales_by_year_up_to(&data, Metric::NaSales, 2003),
            sales_by_year_up_to(&data, Metric::NaSales, 2003)
        );
    }
}
