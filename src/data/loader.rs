use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Film, MAX_RATING, UNRATED};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that prevents the film table from being loaded.  Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' is missing from the header")]
    MissingColumn(String),
    #[error("row {row}: title is empty")]
    EmptyTitle { row: usize },
    #[error("row {row}, column '{column}': '{value}' is not a valid number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row}: rating {value} is outside 0..=10 and not the unrated marker -1")]
    RatingOutOfDomain { row: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Header names of the required columns.  Defaults match the Hungarian source file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub rating: String,
    pub cover_image: String,
    pub review_link: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            title: "Cím".into(),
            year: "Év".into(),
            runtime: "Játékidő [perc]".into(),
            rating: "Értékelés".into(),
            cover_image: "Borító".into(),
            review_link: "Link".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderOptions {
    pub delimiter: u8,
    pub columns: ColumnNames,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            columns: ColumnNames::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the film table from a delimited text file.
pub fn load_file(path: &Path, options: &LoaderOptions) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file, options)?;
    log::info!("Loaded {} films from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse delimited text with a header row.  Source row order is preserved.
pub fn load_reader<R: Read>(reader: R, options: &LoaderOptions) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let layout = ColumnLayout::locate(reader.headers()?, &options.columns)?;

    let mut films = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        films.push(layout.parse_row(&record, i + 1)?);
    }

    Ok(Dataset::from_films(films))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Header positions of the required columns.
struct ColumnLayout<'a> {
    names: &'a ColumnNames,
    title: usize,
    year: usize,
    runtime: usize,
    rating: usize,
    cover_image: usize,
    review_link: usize,
}

impl<'a> ColumnLayout<'a> {
    fn locate(headers: &csv::StringRecord, names: &'a ColumnNames) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            names,
            title: find(&names.title)?,
            year: find(&names.year)?,
            runtime: find(&names.runtime)?,
            rating: find(&names.rating)?,
            cover_image: find(&names.cover_image)?,
            review_link: find(&names.review_link)?,
        })
    }

    fn parse_row(&self, record: &csv::StringRecord, row: usize) -> Result<Film, LoadError> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let title = cell(self.title);
        if title.is_empty() {
            return Err(LoadError::EmptyTitle { row });
        }

        let year = parse_number::<i32>(cell(self.year), row, &self.names.year)?;
        let runtime_minutes = parse_number::<u32>(cell(self.runtime), row, &self.names.runtime)?;
        let rating = parse_rating(cell(self.rating), row, &self.names.rating)?;

        Ok(Film {
            title: title.to_string(),
            year,
            runtime_minutes,
            rating,
            cover_image_url: optional(cell(self.cover_image)),
            review_url: optional(cell(self.review_link)),
        })
    }
}

fn parse_number<T: std::str::FromStr>(s: &str, row: usize, column: &str) -> Result<T, LoadError> {
    s.parse::<T>().map_err(|_| LoadError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}

/// Empty cells and `-1` mean "unrated".  Accepts a decimal comma.
fn parse_rating(s: &str, row: usize, column: &str) -> Result<f64, LoadError> {
    if s.is_empty() {
        return Ok(UNRATED);
    }
    let value: f64 = parse_number(&s.replace(',', "."), row, column)?;
    if value == UNRATED {
        return Ok(UNRATED);
    }
    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(LoadError::RatingOutOfDomain { row, value });
    }
    // Folds `-0` into `0`.
    Ok(value + 0.0)
}

fn optional(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
