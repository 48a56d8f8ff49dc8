use std::cmp::Ordering;

use thiserror::Error;

use super::model::{Dataset, Film, NumericField, RATING_DOMAIN};

// ---------------------------------------------------------------------------
// NumericRange – one closed interval
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid range [{min}, {max}]: lower bound must not exceed upper bound")]
pub struct InvalidRangeError {
    pub min: f64,
    pub max: f64,
}

/// Closed interval `[min, max]`.  Inverted or NaN bounds cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    min: f64,
    max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidRangeError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(InvalidRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<(f64, f64)> for NumericRange {
    /// Bounds are put in order, so any pair is accepted.
    fn from((a, b): (f64, f64)) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

// ---------------------------------------------------------------------------
// RangeFilter – year, runtime and rating intervals combined by AND
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    pub year: NumericRange,
    pub runtime: NumericRange,
    pub rating: NumericRange,
}

impl RangeFilter {
    /// The widest filter for `dataset`: observed year and runtime bounds and
    /// the whole rating domain, sentinel included.
    pub fn full(dataset: &Dataset) -> Self {
        let range = |field| NumericRange::from(bounds(dataset, field).unwrap_or((0.0, 0.0)));
        Self {
            year: range(NumericField::Year),
            runtime: range(NumericField::Runtime),
            rating: range(NumericField::Rating),
        }
    }

    pub fn range(&self, field: NumericField) -> NumericRange {
        match field {
            NumericField::Year => self.year,
            NumericField::Runtime => self.runtime,
            NumericField::Rating => self.rating,
        }
    }

    pub fn set_range(&mut self, field: NumericField, range: NumericRange) {
        match field {
            NumericField::Year => self.year = range,
            NumericField::Runtime => self.runtime = range,
            NumericField::Rating => self.rating = range,
        }
    }

    /// Whether `film` satisfies all three intervals.  The unrated sentinel is
    /// compared numerically like any other rating.
    pub fn matches(&self, film: &Film) -> bool {
        NumericField::ALL
            .iter()
            .all(|&field| self.range(field).contains(film.value(field)))
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Min/max of `field` over the whole dataset.
///
/// * `Year`, `Runtime` → observed bounds, `None` for an empty dataset
/// * `Rating` → always [`RATING_DOMAIN`], so the unrated marker stays
///   selectable regardless of the data
pub fn bounds(dataset: &Dataset, field: NumericField) -> Option<(f64, f64)> {
    if field == NumericField::Rating {
        return Some(RATING_DOMAIN);
    }
    dataset
        .films()
        .iter()
        .map(|f| f.value(field))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Return indices of films that pass `filter`, best rated first.
///
/// Equal ratings keep their dataset order (`sort_by` is stable).  Ratings
/// compare numerically, so `-0` and `0` tie.
fn filtered_indices(dataset: &Dataset, filter: &RangeFilter) -> Vec<usize> {
    let films = dataset.films();
    let mut indices: Vec<usize> = films
        .iter()
        .enumerate()
        .filter(|(_, film)| filter.matches(film))
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|&a, &b| {
        films[b]
            .rating
            .partial_cmp(&films[a].rating)
            .unwrap_or(Ordering::Equal)
    });

    log::debug!("{} of {} films match {:?}", indices.len(), films.len(), filter);
    indices
}

/// The films passing `filter`, ordered by rating descending.
pub fn apply<'a>(dataset: &'a Dataset, filter: &RangeFilter) -> Vec<&'a Film> {
    filtered_indices(dataset, filter)
        .into_iter()
        .map(|i| &dataset.films()[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::UNRATED;

    fn film(title: &str, year: i32, runtime: u32, rating: f64) -> Film {
        Film {
            title: title.into(),
            year,
            runtime_minutes: runtime,
            rating,
            cover_image_url: None,
            review_url: None,
        }
    }

    /// A(2020, 90, 8), B(2019, 100, 8), C(2021, 80, unrated)
    fn sample() -> Dataset {
        Dataset::from_films(vec![
            film("A", 2020, 90, 8.0),
            film("B", 2019, 100, 8.0),
            film("C", 2021, 80, UNRATED),
        ])
    }

    fn larger() -> Dataset {
        Dataset::from_films(vec![
            film("Szindbád", 1971, 98, 9.0),
            film("Macskafogó", 1986, 96, 9.5),
            film("Kontroll", 2003, 105, UNRATED),
            film("Üvegtigris", 2001, 92, 7.0),
            film("Valami Amerika", 2002, 110, 5.5),
            film("A tanú", 1969, 110, 9.5),
            film("Hukkle", 2002, 78, UNRATED),
            film("Taxidermia", 2006, 91, 7.0),
        ])
    }

    fn filter(year: (f64, f64), runtime: (f64, f64), rating: (f64, f64)) -> RangeFilter {
        RangeFilter {
            year: NumericRange::new(year.0, year.1).unwrap(),
            runtime: NumericRange::new(runtime.0, runtime.1).unwrap(),
            rating: NumericRange::new(rating.0, rating.1).unwrap(),
        }
    }

    fn titles(films: &[&Film]) -> Vec<String> {
        films.iter().map(|f| f.title.clone()).collect()
    }

    #[test]
    fn example_with_unrated_included() {
        let ds = sample();
        let out = apply(&ds, &filter((2019.0, 2021.0), (0.0, 200.0), (-1.0, 10.0)));
        assert_eq!(titles(&out), ["A", "B", "C"]);
    }

    #[test]
    fn example_with_unrated_excluded() {
        let ds = sample();
        let out = apply(&ds, &filter((2019.0, 2021.0), (0.0, 200.0), (0.0, 10.0)));
        assert_eq!(titles(&out), ["A", "B"]);
    }

    #[test]
    fn bounds_example() {
        let ds = sample();
        assert_eq!(bounds(&ds, NumericField::Year), Some((2019.0, 2021.0)));
        assert_eq!(bounds(&ds, NumericField::Runtime), Some((80.0, 100.0)));
        assert_eq!(bounds(&ds, NumericField::Rating), Some(RATING_DOMAIN));
    }

    #[test]
    fn bounds_of_empty_dataset() {
        let ds = Dataset::default();
        assert_eq!(bounds(&ds, NumericField::Year), None);
        assert_eq!(bounds(&ds, NumericField::Runtime), None);
        assert_eq!(bounds(&ds, NumericField::Rating), Some(RATING_DOMAIN));
        assert!(apply(&ds, &RangeFilter::full(&ds)).is_empty());
    }

    #[test]
    fn full_filter_returns_every_row_sorted_stably() {
        let ds = larger();
        let out = apply(&ds, &RangeFilter::full(&ds));
        assert_eq!(out.len(), ds.len());
        assert_eq!(
            titles(&out),
            [
                "Macskafogó",
                "A tanú",
                "Szindbád",
                "Üvegtigris",
                "Taxidermia",
                "Valami Amerika",
                "Kontroll",
                "Hukkle",
            ]
        );
    }

    #[test]
    fn output_is_exactly_the_matching_rows() {
        let ds = larger();
        let f = filter((1980.0, 2003.0), (90.0, 110.0), (0.0, 9.0));
        let out = filtered_indices(&ds, &f);

        for (i, film) in ds.films().iter().enumerate() {
            assert_eq!(out.contains(&i), f.matches(film), "row {i} ({})", film.title);
        }
        assert_eq!(
            titles(&apply(&ds, &f)),
            ["Üvegtigris", "Valami Amerika"]
        );
    }

    #[test]
    fn output_is_sorted_by_rating_descending() {
        let ds = larger();
        let out = apply(&ds, &RangeFilter::full(&ds));
        assert!(out.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let ds = Dataset::from_films(vec![
            film("A", 2020, 90, -0.0),
            film("B", 2020, 90, 0.0),
            film("C", 2020, 90, 1.0),
        ]);
        let out = apply(&ds, &RangeFilter::full(&ds));
        assert_eq!(titles(&out), ["C", "A", "B"]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = sample();
        let out = apply(&ds, &filter((2020.0, 2020.0), (90.0, 90.0), (8.0, 8.0)));
        assert_eq!(titles(&out), ["A"]);
    }

    #[test]
    fn single_field_restriction() {
        let ds = larger();
        let mut f = RangeFilter::full(&ds);
        f.set_range(NumericField::Runtime, NumericRange::new(100.0, 200.0).unwrap());
        assert_eq!(f.range(NumericField::Runtime).min(), 100.0);
        assert_eq!(
            titles(&apply(&ds, &f)),
            ["A tanú", "Valami Amerika", "Kontroll"]
        );
    }

    #[test]
    fn only_unrated() {
        let ds = larger();
        let mut f = RangeFilter::full(&ds);
        f.set_range(NumericField::Rating, NumericRange::new(-1.0, -1.0).unwrap());
        assert_eq!(titles(&apply(&ds, &f)), ["Kontroll", "Hukkle"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let ds = sample();
        let out = apply(&ds, &filter((1900.0, 1950.0), (0.0, 200.0), (-1.0, 10.0)));
        assert!(out.is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = larger();
        let f = filter((1960.0, 2010.0), (80.0, 120.0), (-1.0, 9.0));
        assert_eq!(filtered_indices(&ds, &f), filtered_indices(&ds, &f));
        assert_eq!(apply(&ds, &f), apply(&ds, &f));
    }

    #[test]
    fn source_is_not_mutated() {
        let ds = larger();
        let before = ds.films().to_vec();
        let _ = apply(&ds, &filter((2000.0, 2010.0), (0.0, 200.0), (5.0, 10.0)));
        assert_eq!(ds.films(), before.as_slice());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = NumericRange::new(2021.0, 2019.0).unwrap_err();
        assert_eq!(err, InvalidRangeError { min: 2021.0, max: 2019.0 });
        assert!(NumericRange::new(f64::NAN, 1.0).is_err());
        assert!(NumericRange::new(0.0, f64::NAN).is_err());
        assert!(NumericRange::new(3.0, 3.0).is_ok());
    }

    #[test]
    fn out_of_domain_bounds_are_kept() {
        let r = NumericRange::new(-100.0, 100.0).unwrap();
        assert_eq!((r.min(), r.max()), (-100.0, 100.0));
        let ds = sample();
        let out = apply(&ds, &filter((0.0, 3000.0), (0.0, 1000.0), (-100.0, 100.0)));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn from_pair_orders_bounds() {
        let r = NumericRange::from((5.0, 1.0));
        assert_eq!((r.min(), r.max()), (1.0, 5.0));
    }
}
