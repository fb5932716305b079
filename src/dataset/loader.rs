//! CSV Loader
//!
//! Reads the game sales CSV into a [`Dataset`]. Columns are resolved by header
//! name, so extra columns (Other_Sales, User_Count, Developer, ...) and column
//! order do not matter. Rows without a Year or Genre are skipped; any other
//! malformed cell aborts the whole load.

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, GameRecord, Metric};
use std::path::Path;

/// Cell values treated as missing, compared case-insensitively
///
/// The dataframe NA tokens plus "tbd", which the sales dataset uses for
/// pending user scores.
const MISSING_MARKERS: [&str; 16] = [
    "", "#n/a", "#n/a n/a", "#na", "-1.#ind", "-1.#qnan", "-nan", "1.#ind", "1.#qnan", "<na>",
    "n/a", "na", "nan", "none", "null", "tbd",
];

/// Header positions of the columns the dataset uses
#[derive(Debug, Clone)]
struct ColumnMap {
    year: usize,
    genre: usize,
    rating: Option<usize>,
    platform: Option<usize>,
    name: Option<usize>,
    publisher: Option<usize>,
    metrics: Vec<(Metric, usize)>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> DatasetResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let year = find("Year").ok_or(DatasetError::MissingColumn("Year"))?;
        let genre = find("Genre").ok_or(DatasetError::MissingColumn("Genre"))?;

        let mut metrics = Vec::with_capacity(Metric::all().len());
        for metric in Metric::all() {
            let idx = find(metric.column()).ok_or(DatasetError::MissingColumn(metric.column()))?;
            metrics.push((*metric, idx));
        }

        Ok(Self {
            year,
            genre,
            rating: find("Rating"),
            platform: find("Platform"),
            name: find("Name"),
            publisher: find("Publisher"),
            metrics,
        })
    }
}

/// Loads game records from CSV
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    delimiter: u8,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader for comma-separated files
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a dataset from a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<Dataset> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        let dataset = self.from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "Dataset loaded"
        );

        Ok(dataset)
    }

    /// Load a dataset from a CSV string (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<Dataset> {
        self.from_reader(csv_data.as_bytes())
    }

    fn from_reader<R: std::io::Read>(&self, reader: R) -> DatasetResult<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            match parse_record(&row, &columns, line)? {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!(line, "Skipping row without Year or Genre");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Skipped rows without Year or Genre");
        }

        Ok(Dataset::new(records))
    }
}

/// Convenience wrapper: load with default settings
pub fn load_dataset(path: &Path) -> DatasetResult<Dataset> {
    DatasetLoader::new().load(path)
}

/// `Ok(None)` when the row has no Year or Genre
fn parse_record(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    line: u64,
) -> DatasetResult<Option<GameRecord>> {
    let cell = |idx: usize| row.get(idx).map(str::trim).unwrap_or("");
    let text = |idx: Option<usize>| {
        idx.map(|i| cell(i))
            .filter(|s| !is_missing(s))
            .map(str::to_string)
    };

    let year_str = cell(columns.year);
    let genre = cell(columns.genre);
    if is_missing(year_str) || is_missing(genre) {
        return Ok(None);
    }

    let year = parse_year(year_str).ok_or_else(|| DatasetError::InvalidValue {
        line,
        column: "Year",
        value: year_str.to_string(),
    })?;

    let mut record = GameRecord::new(year, genre);
    record.rating = text(columns.rating);
    record.platform = text(columns.platform);
    record.name = text(columns.name);
    record.publisher = text(columns.publisher);

    for (metric, idx) in &columns.metrics {
        let raw = cell(*idx);
        if is_missing(raw) {
            continue;
        }
        let value = raw.parse::<f64>().map_err(|_| DatasetError::InvalidValue {
            line,
            column: metric.column(),
            value: raw.to_string(),
        })?;
        if value.is_finite() {
            record = record.with(*metric, value);
        }
    }

    Ok(Some(record))
}

/// Years may be written as floats ("2004.0") by dataframe exports
fn parse_year(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    let value = s.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value.abs() < i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

fn is_missing(s: &str) -> bool {
    MISSING_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales,Critic_Score,Critic_Count,User_Score,User_Count,Developer,Rating";

    fn csv_with(rows: &[&str]) -> String {
        let mut data = HEADER.to_string();
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        data
    }

    #[test]
    fn test_load_full_rows() {
        let data = csv_with(&[
            "Wii Sports,Wii,2006,Sports,Nintendo,41.36,28.96,3.77,8.45,82.53,76,51,8,322,Nintendo,E",
            "Halo 3,X360,2007.0,Shooter,Microsoft,7.97,2.81,0.13,1.21,12.12,94,86,7.8,3712,Bungie,M",
        ]);

        let dataset = DatasetLoader::new().load_str(&data).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.name.as_deref(), Some("Wii Sports"));
        assert_eq!(first.year, 2006);
        assert_eq!(first.genre, "Sports");
        assert_eq!(first.rating.as_deref(), Some("E"));
        assert_eq!(first.metric(Metric::GlobalSales), Some(82.53));
        assert_eq!(first.metric(Metric::CriticCount), Some(51.0));

        assert_eq!(dataset.records()[1].year, 2007);
    }

    #[test]
    fn test_missing_cells_become_none() {
        let data = csv_with(&[
            "Some Game,PS2,2002,Action,Acme,1.0,0.5,0,0.1,1.6,,,tbd,,,",
        ]);

        let dataset = DatasetLoader::new().load_str(&data).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.metric(Metric::CriticScore), None);
        assert_eq!(record.metric(Metric::UserScore), None);
        assert_eq!(record.metric(Metric::JpSales), Some(0.0));
        assert_eq!(record.rating, None);
    }

    #[test]
    fn test_dataframe_na_tokens_are_missing() {
        let data = csv_with(&[
            "A,PS2,2002,Action,Acme,N/A,#N/A,NULL,0,-nan,N/A,None,<NA>,,,NA",
        ]);

        let dataset = DatasetLoader::new().load_str(&data).unwrap();
        let record = &dataset.records()[0];
        for metric in Metric::all() {
            assert_eq!(record.metric(*metric), None, "{metric}");
        }
        assert_eq!(record.rating, None);
    }

    #[test]
    fn test_rows_without_year_or_genre_are_skipped() {
        let data = csv_with(&[
            "Kept,PS2,2001,Action,A,1,1,1,1,4,70,10,7,10,Dev,T",
            "No Year,PS2,,Action,A,1,1,1,1,4,70,10,7,10,Dev,T",
            "NA Year,PS2,N/A,Action,A,1,1,1,1,4,70,10,7,10,Dev,T",
            "No Genre,PS2,2003,,A,1,1,1,1,4,70,10,7,10,Dev,T",
        ]);

        let dataset = DatasetLoader::new().load_str(&data).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name.as_deref(), Some("Kept"));
        assert_eq!(dataset.years(), vec![2001]);
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let data = "Name,Year,NA_Sales\nA,2001,1.0";
        let err = DatasetLoader::new().load_str(data).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Genre")));
    }

    #[test]
    fn test_invalid_year_is_fatal() {
        let data = csv_with(&[
            "Good,PS2,2001,Action,A,1,1,1,1,4,70,10,7,10,Dev,T",
            "Bad,PS2,soon,Action,A,1,1,1,1,4,70,10,7,10,Dev,T",
        ]);

        let err = DatasetLoader::new().load_str(&data).unwrap_err();
        match err {
            DatasetError::InvalidValue { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Year");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_number_is_fatal() {
        let data = csv_with(&["X,PS2,2001,Action,A,lots,1,1,1,4,70,10,7,10,Dev,T"]);
        let err = DatasetLoader::new().load_str(&data).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidValue { column: "NA_Sales", .. }
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "A,PS2,2001,Action,P,1,1,1,1,4,70,10,7,10,Dev,T").unwrap();
        file.flush().unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/games.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = "Year;Genre;NA_Sales;EU_Sales;JP_Sales;Global_Sales;Critic_Score;Critic_Count;User_Score\n2010;Puzzle;1;2;3;6;80;5;8";
        let dataset = DatasetLoader::new().with_delimiter(b';').load_str(data).unwrap();
        assert_eq!(dataset.records()[0].metric(Metric::JpSales), Some(3.0));
    }
}
