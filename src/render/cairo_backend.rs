use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fs::File;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also draw into a host-owned cairo context
/// (toolkit draw callbacks, PDF or SVG surfaces).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> ChartResult<()>;
}

/// Cairo/Pango renderer drawing into an offscreen ARGB surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(format!(
                "cairo surface size must be > 0, got {width}x{height}"
            )));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(backend_err("create surface"))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
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
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("cairo: write png: {err}")))
    }

    fn draw_frame(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        set_source(context, self.clear_color);
        context.paint().map_err(backend_err("clear surface"))?;

        let mut stats = CairoRenderStats::default();
        for line in &frame.lines {
            draw_line(context, line)?;
            stats.lines_drawn += 1;
        }
        for polyline in &frame.polylines {
            if draw_polyline(context, polyline)? {
                stats.polylines_drawn += 1;
            }
        }
        for circle in &frame.circles {
            draw_circle(context, circle)?;
            stats.circles_drawn += 1;
        }
        for rect in &frame.rects {
            draw_rect(context, rect)?;
            stats.rects_drawn += 1;
        }
        for text in &frame.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface).map_err(backend_err("create context"))?;
        self.draw_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.draw_frame(context, frame)
    }
}

fn draw_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    stroke_path(context, line.color, line.stroke_width)
}

/// Returns `false` when there was nothing to stroke.
fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<bool> {
    let mut points = polyline.points.iter();
    let Some(&(x, y)) = points.next() else {
        return Ok(false);
    };
    context.move_to(x, y);
    for &(x, y) in points {
        context.line_to(x, y);
    }
    stroke_path(context, polyline.color, polyline.stroke_width)?;
    Ok(true)
}

fn draw_circle(context: &Context, circle: &CirclePrimitive) -> ChartResult<()> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    fill_and_outline(
        context,
        circle.fill_color,
        circle.stroke_width,
        circle.stroke_color,
    )
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    fill_and_outline(context, rect.fill_color, rect.border_width, rect.border_color)
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let width = f64::from(layout.pixel_size().0);
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -width / 2.0,
        TextHAlign::Right => -width,
    };

    context.save().map_err(backend_err("save context"))?;
    set_source(context, text.color);
    context.translate(text.x, text.y);
    if text.rotate_quarter_ccw {
        context.rotate(-FRAC_PI_2);
    }
    context.move_to(dx, 0.0);
    pangocairo::functions::show_layout(context, &layout);
    context.restore().map_err(backend_err("restore context"))
}

fn stroke_path(context: &Context, color: Color, width: f64) -> ChartResult<()> {
    set_source(context, color);
    context.set_line_width(width);
    context.stroke().map_err(backend_err("stroke path"))
}

/// Fills the current path, then strokes it when `outline_width > 0`.
fn fill_and_outline(
    context: &Context,
    fill: Color,
    outline_width: f64,
    outline: Color,
) -> ChartResult<()> {
    set_source(context, fill);
    if outline_width <= 0.0 {
        return context.fill().map_err(backend_err("fill path"));
    }
    context.fill_preserve().map_err(backend_err("fill path"))?;
    stroke_path(context, outline, outline_width)
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_err(action: &'static str) -> impl Fn(cairo::Error) -> ChartError {
    move |err| ChartError::Backend(format!("cairo: {action}: {err}"))
}
