use crate::columns::{default_columns, TableColumn};
use crate::config::ViewerConfig;
use crate::data::filter::{apply, bounds, InvalidRangeError, NumericRange, RangeFilter};
use crate::data::loader::ColumnNames;
use crate::data::model::{Dataset, Film, NumericField};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The film table, loaded once before the window opens.
    dataset: Dataset,

    /// Current slider selections.
    pub filter: RangeFilter,

    /// Slider limits, from the full dataset.
    pub slider_bounds: RangeFilter,

    /// Whether the cover thumbnail column is shown.
    pub show_covers: bool,

    pub thumbnail_height: f32,

    column_names: ColumnNames,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &ViewerConfig) -> Self {
        let full = RangeFilter::full(&dataset);
        Self {
            dataset,
            filter: full,
            slider_bounds: full,
            show_covers: config.show_covers,
            thumbnail_height: config.thumbnail_height,
            column_names: config.columns.clone(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Replace one interval of the filter.  An inverted range leaves the
    /// filter untouched.
    pub fn set_range(
        &mut self,
        field: NumericField,
        min: f64,
        max: f64,
    ) -> Result<(), InvalidRangeError> {
        let range = NumericRange::new(min, max)?;
        self.filter.set_range(field, range);
        Ok(())
    }

    /// Widen every slider back to its full range.
    pub fn reset_filters(&mut self) {
        self.filter = self.slider_bounds;
    }

    /// Whether `field` has any spread to slide over.
    pub fn has_bounds(&self, field: NumericField) -> bool {
        bounds(&self.dataset, field).is_some()
    }

    /// Films passing the current filter, best rated first.  Recomputed from
    /// the full dataset on every call; nothing is cached between frames.
    pub fn visible_films(&self) -> Vec<&Film> {
        apply(&self.dataset, &self.filter)
    }

    pub fn columns(&self) -> Vec<TableColumn> {
        default_columns(&self.column_names, self.show_covers)
    }
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

    fn state() -> AppState {
        let ds = Dataset::from_films(vec![
            film("A", 2020, 90, 8.0),
            film("B", 2019, 100, 8.0),
            film("C", 2021, 80, UNRATED),
            film("D", 2018, 120, 9.0),
        ]);
        AppState::new(ds, &ViewerConfig::default())
    }

    fn visible_titles(state: &AppState) -> Vec<&str> {
        state.visible_films().iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn starts_with_everything_visible() {
        let s = state();
        assert_eq!(visible_titles(&s), ["D", "A", "B", "C"]);
        assert_eq!(s.slider_bounds.year.min(), 2018.0);
        assert_eq!(s.slider_bounds.year.max(), 2021.0);
        assert_eq!(s.slider_bounds.rating.min(), UNRATED);
    }

    #[test]
    fn set_range_recomputes() {
        let mut s = state();
        s.set_range(NumericField::Rating, 0.0, 10.0).unwrap();
        assert_eq!(visible_titles(&s), ["D", "A", "B"]);

        s.set_range(NumericField::Year, 2019.0, 2020.0).unwrap();
        assert_eq!(visible_titles(&s), ["A", "B"]);

        // Widening again brings rows back: nothing is dropped for good.
        s.set_range(NumericField::Year, 2000.0, 2030.0).unwrap();
        assert_eq!(visible_titles(&s), ["D", "A", "B"]);
    }

    #[test]
    fn inverted_range_leaves_state_untouched() {
        let mut s = state();
        s.set_range(NumericField::Runtime, 85.0, 110.0).unwrap();
        assert_eq!(visible_titles(&s), ["A", "B"]);

        assert!(s.set_range(NumericField::Runtime, 110.0, 85.0).is_err());
        assert_eq!(visible_titles(&s), ["A", "B"]);
        assert_eq!(s.filter.runtime.min(), 85.0);
    }

    #[test]
    fn empty_result_then_reset() {
        let mut s = state();
        s.set_range(NumericField::Year, 1900.0, 1910.0).unwrap();
        assert!(s.visible_films().is_empty());

        s.reset_filters();
        assert_eq!(s.visible_films().len(), 4);
        assert_eq!(s.filter, s.slider_bounds);
    }

    #[test]
    fn covers_toggle_changes_columns() {
        let mut s = state();
        assert_eq!(s.columns().len(), 6);
        s.show_covers = false;
        assert_eq!(s.columns().len(), 5);
    }

    #[test]
    fn empty_dataset_has_no_year_bounds() {
        let s = AppState::new(Dataset::default(), &ViewerConfig::default());
        assert!(!s.has_bounds(NumericField::Year));
        assert!(s.has_bounds(NumericField::Rating));
        assert!(s.visible_films().is_empty());
        assert_eq!(s.dataset().len(), 0);
    }
}
