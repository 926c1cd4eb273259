//! Map styling.

use serde::{Deserialize, Serialize};

use super::svg::{Color, Point};

/// How the map is drawn. Absent fields fall back to zero, no color and an
/// empty palette.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Canvas size in pixels
    pub width: f64,
    pub height: f64,
    /// Clear margin on every side of the canvas
    pub padding: f64,

    /// Stroke width of route lines
    pub line_width: f64,
    pub stop_radius: f64,

    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,

    /// Halo drawn under every label
    pub underlayer_color: Color,
    pub underlayer_width: f64,

    /// Route colors, assigned cyclically in bus name order
    pub color_palette: Vec<Color>,
}

impl RenderSettings {
    /// Color of the route at `index` in bus name order.
    pub fn route_color(&self, index: usize) -> Color {
        if self.color_palette.is_empty() {
            return Color::none();
        }
        self.color_palette[index % self.color_palette.len()].clone()
    }
}
