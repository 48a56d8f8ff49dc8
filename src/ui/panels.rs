use eframe::egui::{self, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::NumericRange;
use crate::data::model::NumericField;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – range sliders
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Szűrők");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for field in NumericField::ALL {
                if !state.has_bounds(field) {
                    continue;
                }
                range_sliders(ui, state, field);
                ui.add_space(8.0);
            }

            ui.separator();
            if ui.button("Reset").clicked() {
                state.reset_filters();
            }
        });
}

/// A min and a max slider for one field.  Dragging one handle past the
/// other pushes the other along, so the range never inverts.
fn range_sliders(ui: &mut Ui, state: &mut AppState, field: NumericField) {
    let limits = state.slider_bounds.range(field);
    let current = state.filter.range(field);
    let (mut lo, mut hi) = (current.min(), current.max());

    let (step, decimals) = match field {
        NumericField::Rating => (0.5, 1),
        NumericField::Year | NumericField::Runtime => (1.0, 0),
    };

    ui.strong(field.label());
    let lo_changed = ui
        .add(bounded_slider(&mut lo, limits, step, decimals, "min"))
        .changed();
    let hi_changed = ui
        .add(bounded_slider(&mut hi, limits, step, decimals, "max"))
        .changed();

    if !(lo_changed || hi_changed) {
        return;
    }
    if lo_changed && lo > hi {
        hi = lo;
    }
    if hi_changed && hi < lo {
        lo = hi;
    }
    if let Err(e) = state.set_range(field, lo, hi) {
        log::warn!("Ignoring slider update for {field}: {e}");
    }
}

fn bounded_slider<'a>(
    value: &'a mut f64,
    limits: NumericRange,
    step: f64,
    decimals: usize,
    text: &str,
) -> Slider<'a> {
    Slider::new(value, limits.min()..=limits.max())
        .step_by(step)
        .fixed_decimals(decimals)
        .text(text)
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title row with counters and the cover toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Magyar Film Maraton Toplista").heading());
        ui.separator();
        ui.label(format!(
            "{} films, {} shown",
            state.dataset().len(),
            state.visible_films().len()
        ));
        ui.separator();
        if ui
            .selectable_label(state.show_covers, "Covers")
            .clicked()
        {
            state.show_covers = !state.show_covers;
        }
    });
    ui.add_space(2.0);
    egui::warn_if_debug_build(ui);
}
