use crate::data::loader::ColumnNames;
use crate::data::model::Film;

// ---------------------------------------------------------------------------
// Column roles: how each table column is rendered
// ---------------------------------------------------------------------------

/// Plain-text fields of a [`Film`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Year,
    Runtime,
    Rating,
}

impl TextField {
    pub fn text(self, film: &Film) -> String {
        match self {
            TextField::Title => film.title.clone(),
            TextField::Year => film.year.to_string(),
            TextField::Runtime => film.runtime_minutes.to_string(),
            TextField::Rating if film.is_rated() => film.rating.to_string(),
            TextField::Rating => "–".to_string(),
        }
    }
}

/// URL-valued fields of a [`Film`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlField {
    Cover,
    Review,
}

impl UrlField {
    pub fn url(self, film: &Film) -> Option<&str> {
        match self {
            UrlField::Cover => film.cover_image_url.as_deref(),
            UrlField::Review => film.review_url.as_deref(),
        }
    }
}

/// Rendering role of a column, mapped to concrete widgets by the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    PlainText(TextField),
    /// Clickable link with a fixed label.
    Hyperlink { label: String, url: UrlField },
    /// Embedded image loaded from the URL.
    Thumbnail(UrlField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub role: ColumnRole,
}

impl TableColumn {
    fn new(header: &str, role: ColumnRole) -> Self {
        Self {
            header: header.to_string(),
            role,
        }
    }
}

/// Column layout of the film table, headed by the source column names.
pub fn default_columns(names: &ColumnNames, show_covers: bool) -> Vec<TableColumn> {
    let mut columns = Vec::with_capacity(6);
    if show_covers {
        columns.push(TableColumn::new(
            &names.cover_image,
            ColumnRole::Thumbnail(UrlField::Cover),
        ));
    }
    columns.extend([
        TableColumn::new(&names.title, ColumnRole::PlainText(TextField::Title)),
        TableColumn::new(&names.year, ColumnRole::PlainText(TextField::Year)),
        TableColumn::new(&names.runtime, ColumnRole::PlainText(TextField::Runtime)),
        TableColumn::new(&names.rating, ColumnRole::PlainText(TextField::Rating)),
        TableColumn::new(
            &names.review_link,
            ColumnRole::Hyperlink {
                label: "Értékelés".to_string(),
                url: UrlField::Review,
            },
        ),
    ]);
    columns
}
