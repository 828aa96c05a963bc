use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const STEEL_BLUE: Color = Color::rgb8(70, 130, 180);
const GRID_GRAY: Color = Color::rgb8(224, 224, 224);
const LABEL_GRAY: Color = Color::rgb8(119, 119, 119);

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the plot edge and value-axis labels.
    pub value_label_padding_px: f64,
    /// Gap between the plot bottom and time-axis labels.
    pub time_label_padding_px: f64,
    pub title_color: Color,
    pub title_font_size_px: f64,
    /// Title anchor: left of the plot edge by `x`, above the plot top by `y`.
    pub title_offset_x_px: f64,
    pub title_offset_y_px: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub tooltip_background_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_border_width: f64,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_color: STEEL_BLUE,
            series_line_width: 1.0,
            grid_line_color: GRID_GRAY,
            grid_line_width: 0.5,
            axis_label_color: LABEL_GRAY,
            axis_label_font_size_px: 14.0,
            value_label_padding_px: 10.0,
            time_label_padding_px: 9.0,
            title_color: Color::rgb(0.0, 0.0, 0.0),
            title_font_size_px: 24.0,
            title_offset_x_px: 35.0,
            title_offset_y_px: 54.0,
            marker_fill_color: STEEL_BLUE.with_alpha(0.7),
            marker_stroke_color: Color::rgb(1.0, 1.0, 1.0),
            marker_stroke_width: 1.0,
            tooltip_background_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_border_color: Color::rgb8(204, 204, 204),
            tooltip_border_width: 1.0,
            tooltip_text_color: Color::rgb8(51, 51, 51),
            tooltip_font_size_px: 12.0,
            tooltip_padding_px: 8.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.series_line_color,
            self.grid_line_color,
            self.axis_label_color,
            self.title_color,
            self.marker_fill_color,
            self.marker_stroke_color,
            self.tooltip_background_color,
            self.tooltip_border_color,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series line width", self.series_line_width),
            ("grid line width", self.grid_line_width),
            ("axis label font size", self.axis_label_font_size_px),
            ("title font size", self.title_font_size_px),
            ("tooltip font size", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("value label padding", self.value_label_padding_px),
            ("time label padding", self.time_label_padding_px),
            ("title offset x", self.title_offset_x_px),
            ("title offset y", self.title_offset_y_px),
            ("marker stroke width", self.marker_stroke_width),
            ("tooltip border width", self.tooltip_border_width),
            ("tooltip padding", self.tooltip_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }
}
