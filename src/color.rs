use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{MAX_RATING, UNRATED};

// ---------------------------------------------------------------------------
// Rating colour scale
// ---------------------------------------------------------------------------

/// Colour for unrated films.
pub const UNRATED_COLOR: Color32 = Color32::GRAY;

/// Maps a rating onto a red (0) → green (10) hue ramp.
pub fn rating_color(rating: f64) -> Color32 {
    if rating == UNRATED || rating.is_nan() {
        return UNRATED_COLOR;
    }
    let t = (rating / MAX_RATING).clamp(0.0, 1.0) as f32;
    let hsl = Hsl::new(t * 120.0, 0.75, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
