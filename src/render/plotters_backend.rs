use plotters::coord::Shift;
use plotters::element::{Circle, PathElement, Rectangle, Text};
use plotters::prelude::{DrawingArea, DrawingBackend, IntoDrawingArea};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontTransform, IntoFont, RGBAColor, ShapeStyle, TextStyle};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlottersRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer drawing frames onto any `plotters` backend.
///
/// `SVGBackend` gives vector output and `BitMapBackend` PNG output; the frame
/// is drawn in surface pixels through a `Shift` drawing area. Call
/// [`PlottersRenderer::present`] once drawing is done to flush the backend.
pub struct PlottersRenderer<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    clear_color: Color,
    last_stats: PlottersRenderStats,
}

impl<DB: DrawingBackend> PlottersRenderer<DB> {
    pub fn new(backend: DB) -> Self {
        Self {
            area: backend.into_drawing_area(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: PlottersRenderStats::default(),
        }
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> PlottersRenderStats {
        self.last_stats
    }

    /// Flushes pending output (writes the SVG/PNG file or string).
    pub fn present(&self) -> ChartResult<()> {
        self.area.present().map_err(map_backend_error)
    }
}

impl<DB: DrawingBackend> Renderer for PlottersRenderer<DB> {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        self.area
            .fill(&to_plotters_color(self.clear_color))
            .map_err(map_backend_error)?;

        let mut stats = PlottersRenderStats::default();

        for line in &frame.lines {
            self.area
                .draw(&PathElement::new(
                    vec![(px(line.x1), px(line.y1)), (px(line.x2), px(line.y2))],
                    stroke(line.color, line.stroke_width),
                ))
                .map_err(map_backend_error)?;
            stats.lines_drawn += 1;
        }

        for polyline in &frame.polylines {
            let points: Vec<(i32, i32)> = polyline
                .points
                .iter()
                .map(|(x, y)| (px(*x), px(*y)))
                .collect();
            self.area
                .draw(&PathElement::new(
                    points,
                    stroke(polyline.color, polyline.stroke_width),
                ))
                .map_err(map_backend_error)?;
            stats.polylines_drawn += 1;
        }

        for circle in &frame.circles {
            let center = (px(circle.cx), px(circle.cy));
            let radius = circle.radius.round().max(1.0) as i32;
            self.area
                .draw(&Circle::new(center, radius, fill(circle.fill_color)))
                .map_err(map_backend_error)?;
            if circle.stroke_width > 0.0 {
                self.area
                    .draw(&Circle::new(
                        center,
                        radius,
                        stroke(circle.stroke_color, circle.stroke_width),
                    ))
                    .map_err(map_backend_error)?;
            }
            stats.circles_drawn += 1;
        }

        for rect in &frame.rects {
            let corners = [
                (px(rect.x), px(rect.y)),
                (px(rect.x + rect.width), px(rect.y + rect.height)),
            ];
            self.area
                .draw(&Rectangle::new(corners, fill(rect.fill_color)))
                .map_err(map_backend_error)?;
            if rect.border_width > 0.0 {
                self.area
                    .draw(&Rectangle::new(
                        corners,
                        stroke(rect.border_color, rect.border_width),
                    ))
                    .map_err(map_backend_error)?;
            }
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            let h_pos = match text.h_align {
                TextHAlign::Left => HPos::Left,
                TextHAlign::Center => HPos::Center,
                TextHAlign::Right => HPos::Right,
            };
            let mut font = ("sans-serif", text.font_size_px).into_font();
            if text.rotate_quarter_ccw {
                font = font.transform(FontTransform::Rotate270);
            }
            let style: TextStyle = font
                .color(&to_plotters_color(text.color))
                .pos(Pos::new(h_pos, VPos::Top));
            self.area
                .draw(&Text::new(text.text.as_str(), (px(text.x), px(text.y)), style))
                .map_err(map_backend_error)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn px(value: f64) -> i32 {
    value.round() as i32
}

fn to_plotters_color(color: Color) -> RGBAColor {
    let (red, green, blue) = color.to_rgb8();
    RGBAColor(red, green, blue, color.alpha)
}

fn stroke(color: Color, width: f64) -> ShapeStyle {
    ShapeStyle {
        color: to_plotters_color(color),
        filled: false,
        stroke_width: width.round().max(1.0) as u32,
    }
}

fn fill(color: Color) -> ShapeStyle {
    ShapeStyle {
        color: to_plotters_color(color),
        filled: true,
        stroke_width: 0,
    }
}

fn map_backend_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Backend(err.to_string())
}
