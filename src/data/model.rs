use std::fmt;

// ---------------------------------------------------------------------------
// Rating domain
// ---------------------------------------------------------------------------

/// Rating value stored for films that have not been rated.
pub const UNRATED: f64 = -1.0;

/// Full selectable rating domain: the sentinel through the top score.
pub const RATING_DOMAIN: (f64, f64) = (UNRATED, 10.0);

/// Highest regular rating.
pub const MAX_RATING: f64 = 10.0;

// ---------------------------------------------------------------------------
// NumericField – the columns the range filter works on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Year,
    Runtime,
    Rating,
}

impl NumericField {
    pub const ALL: [NumericField; 3] = [NumericField::Year, NumericField::Runtime, NumericField::Rating];

    /// Slider label shown in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::Year => "Bemutatás éve",
            NumericField::Runtime => "Játékidő [perc]",
            NumericField::Rating => "Értékelés",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Film – one row of the source table
// ---------------------------------------------------------------------------

/// A single film entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub title: String,
    pub year: i32,
    pub runtime_minutes: u32,
    /// Score in `0..=10`, or [`UNRATED`].
    pub rating: f64,
    pub cover_image_url: Option<String>,
    pub review_url: Option<String>,
}

impl Film {
    pub fn is_rated(&self) -> bool {
        self.rating != UNRATED
    }

    /// Numeric value of `field`, as compared by the range filter.
    pub fn value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Year => f64::from(self.year),
            NumericField::Runtime => f64::from(self.runtime_minutes),
            NumericField::Rating => self.rating,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded film table. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    films: Vec<Film>,
}

impl Dataset {
    pub fn from_films(films: Vec<Film>) -> Self {
        Dataset { films }
    }

    /// All films in source order.
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}
