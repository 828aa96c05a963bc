use crate::core::project_line_paths;
use crate::error::ChartResult;
use crate::interaction::{Tooltip, format_scaled_value};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::ChartEngine;

/// Rough advance width of one glyph relative to font size, used to size the
/// tooltip box without a font backend.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const TOOLTIP_LINE_HEIGHT_RATIO: f64 = 1.4;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the full scene in surface pixels.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);

        self.append_grid_lines(&mut frame)?;
        self.append_time_axis_labels(&mut frame)?;
        self.append_value_axis_labels(&mut frame)?;
        self.append_titles(&mut frame);
        self.append_series_line(&mut frame)?;
        self.append_marker(&mut frame);
        if let Some(tooltip) = self.tooltip() {
            self.append_tooltip(&mut frame, &tooltip);
        }

        Ok(frame)
    }

    fn append_grid_lines(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let (ox, oy) = self.plot_origin();
        let (width, height) = (self.plot_width(), self.plot_height());
        let color = self.style.grid_line_color;
        let stroke = self.style.grid_line_width;

        for date in self
            .time_scale
            .ticks(self.config.time_grid_tick_count)
            .into_iter()
            .skip(1)
        {
            let x = ox + self.time_scale.date_to_pixel(date)?;
            frame
                .lines
                .push(LinePrimitive::new(x, oy, x, oy + height, stroke, color));
        }

        for value in self
            .value_scale
            .ticks(self.config.value_tick_count)
            .into_iter()
            .skip(1)
        {
            let y = oy + self.value_scale.value_to_pixel(value)?;
            frame
                .lines
                .push(LinePrimitive::new(ox, y, ox + width, y, stroke, color));
        }

        Ok(())
    }

    fn append_time_axis_labels(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let (ox, oy) = self.plot_origin();
        let y = oy + self.plot_height() + self.style.time_label_padding_px;

        for date in self
            .time_scale
            .month_ticks(self.config.time_label_every_months)
        {
            let x = ox + self.time_scale.date_to_pixel(date)?;
            frame.texts.push(TextPrimitive::new(
                date.format(&self.config.time_label_format).to_string(),
                x,
                y,
                self.style.axis_label_font_size_px,
                self.style.axis_label_color,
                TextHAlign::Center,
            ));
        }

        Ok(())
    }

    fn append_value_axis_labels(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let (ox, oy) = self.plot_origin();
        let x = ox - self.style.value_label_padding_px;
        let half_font = self.style.axis_label_font_size_px / 2.0;
        let skip = usize::from(self.config.hide_first_value_label);

        for value in self
            .value_scale
            .ticks(self.config.value_tick_count)
            .into_iter()
            .skip(skip)
        {
            let y = oy + self.value_scale.value_to_pixel(value)? - half_font;
            frame.texts.push(TextPrimitive::new(
                format_scaled_value(value, self.config.value_label_divisor),
                x,
                y,
                self.style.axis_label_font_size_px,
                self.style.axis_label_color,
                TextHAlign::Right,
            ));
        }

        Ok(())
    }

    fn append_titles(&self, frame: &mut RenderFrame) {
        let (ox, oy) = self.plot_origin();

        if !self.config.value_axis_title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.value_axis_title.clone(),
                    0.0,
                    oy + self.plot_height() / 2.0,
                    self.style.axis_label_font_size_px,
                    self.style.axis_label_color,
                    TextHAlign::Center,
                )
                .rotated_quarter_ccw(),
            );
        }

        if !self.config.title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.config.title.clone(),
                (ox - self.style.title_offset_x_px).max(0.0),
                (oy - self.style.title_offset_y_px).max(0.0),
                self.style.title_font_size_px,
                self.style.title_color,
                TextHAlign::Left,
            ));
        }
    }

    fn append_series_line(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let (ox, oy) = self.plot_origin();
        for path in project_line_paths(&self.series, self.time_scale, self.value_scale)? {
            let points = path
                .points
                .into_iter()
                .map(|(x, y)| (ox + x, oy + y))
                .collect();
            frame.polylines.push(PolylinePrimitive::new(
                points,
                self.style.series_line_width,
                self.style.series_line_color,
            ));
        }
        Ok(())
    }

    fn append_marker(&self, frame: &mut RenderFrame) {
        let radius = self.marker_radius();
        let Some(snap) = self.cursor_state().snap else {
            return;
        };
        if radius <= 0.0 {
            return;
        }

        let (ox, oy) = self.plot_origin();
        frame.circles.push(CirclePrimitive {
            cx: ox + snap.marker_x,
            cy: oy + snap.marker_y,
            radius,
            fill_color: self.style.marker_fill_color,
            stroke_width: self.style.marker_stroke_width,
            stroke_color: self.style.marker_stroke_color,
        });
    }

    fn append_tooltip(&self, frame: &mut RenderFrame, tooltip: &Tooltip) {
        let lines = tooltip.content.lines();
        let font = self.style.tooltip_font_size_px;
        let padding = self.style.tooltip_padding_px;
        let line_height = font * TOOLTIP_LINE_HEIGHT_RATIO;
        let longest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let width = longest as f64 * font * GLYPH_WIDTH_RATIO + 2.0 * padding;
        let height = lines.len() as f64 * line_height + 2.0 * padding;
        frame.rects.push(
            RectPrimitive::new(
                tooltip.x,
                tooltip.y,
                width,
                height,
                self.style.tooltip_background_color,
            )
            .with_border(
                self.style.tooltip_border_width,
                self.style.tooltip_border_color,
            ),
        );

        for (row, line) in lines.into_iter().enumerate() {
            frame.texts.push(TextPrimitive::new(
                line,
                tooltip.x + padding,
                tooltip.y + padding + row as f64 * line_height,
                font,
                self.style.tooltip_text_color,
                TextHAlign::Left,
            ));
        }
    }
}
