use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::rating_color;
use crate::columns::{ColumnRole, TableColumn, TextField};
use crate::data::model::Film;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Film table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered films, best rated first.
pub fn film_table(ui: &mut Ui, state: &AppState) {
    let columns = state.columns();
    let films = state.visible_films();
    let thumb_height = state.thumbnail_height;

    if films.is_empty() {
        let note = if state.dataset().is_empty() {
            "The film table is empty."
        } else {
            "No films match the current filters."
        };
        ui.label(RichText::new(note).italics());
    }

    let row_height = if state.show_covers {
        thumb_height
    } else {
        ui.text_style_height(&egui::TextStyle::Body) + 6.0
    };

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for col in &columns {
        table = table.column(column_width(col, thumb_height));
    }

    table
        .header(22.0, |mut header| {
            for col in &columns {
                header.col(|ui| {
                    ui.strong(col.header.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(row_height, films.len(), |mut row| {
                let film = films[row.index()];
                for col in &columns {
                    row.col(|ui| cell(ui, film, &col.role, thumb_height));
                }
            });
        });
}

fn column_width(col: &TableColumn, thumb_height: f32) -> Column {
    match col.role {
        // Covers are portrait posters.
        ColumnRole::Thumbnail(_) => Column::exact(thumb_height * 0.7),
        ColumnRole::PlainText(TextField::Title) => Column::remainder().at_least(160.0),
        _ => Column::auto().at_least(60.0),
    }
}

/// Draw one cell according to its column role.
fn cell(ui: &mut Ui, film: &Film, role: &ColumnRole, thumb_height: f32) {
    match role {
        ColumnRole::PlainText(TextField::Rating) => {
            let text = TextField::Rating.text(film);
            ui.label(RichText::new(text).strong().color(rating_color(film.rating)));
        }
        ColumnRole::PlainText(field) => {
            ui.label(field.text(film));
        }
        ColumnRole::Hyperlink { label, url } => {
            if let Some(href) = url.url(film) {
                ui.hyperlink_to(label.as_str(), href);
            }
        }
        ColumnRole::Thumbnail(url) => {
            if let Some(src) = url.url(film) {
                ui.add(
                    egui::Image::from_uri(src)
                        .max_height(thumb_height)
                        .show_loading_spinner(true),
                );
            }
        }
    }
}
