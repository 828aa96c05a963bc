use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::{Sample, SampleSeries, TimeScale, ValueScale};
use crate::error::ChartResult;
use crate::interaction::{
    CursorSnap, CursorState, InteractionState, Tooltip, TooltipVisibility, locate, locate_index,
};
use crate::render::Renderer;
#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{ChartEngineConfig, RenderStyle};

/// Chart session consumed by host applications.
///
/// Owns the fitted scales, the series, the transient cursor state and the
/// renderer. Scales are fitted once at construction and never change; event
/// handlers (`pointer_move` / `pointer_leave`) only touch cursor state.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) style: RenderStyle,
    pub(super) series: SampleSeries,
    pub(super) time_scale: TimeScale,
    pub(super) value_scale: ValueScale,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates a session and fits both scales to `series`.
    pub fn new(renderer: R, config: ChartEngineConfig, series: SampleSeries) -> ChartResult<Self> {
        config.validate()?;
        let (plot_width, plot_height) = config.plot_size()?;
        let time_scale = TimeScale::fit(&series, plot_width)?;
        let value_scale = ValueScale::fit(&series, plot_height)?;
        let interaction = InteractionState::new(config.marker_radius, config.marker_transition());

        let (first, last) = series.date_extent();
        info!(
            samples = series.len(),
            %first,
            %last,
            max_value = value_scale.domain().1,
            plot_width,
            plot_height,
            "chart session initialized"
        );

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            series,
            time_scale,
            value_scale,
            interaction,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.time_scale.plot_width()
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.value_scale.plot_height()
    }

    /// Surface position of the plot's top-left corner.
    #[must_use]
    pub fn plot_origin(&self) -> (f64, f64) {
        (
            f64::from(self.config.margins.left),
            f64::from(self.config.margins.top),
        )
    }

    pub fn map_date_to_pixel(&self, date: NaiveDate) -> ChartResult<f64> {
        self.time_scale.date_to_pixel(date)
    }

    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        self.value_scale.value_to_pixel(value)
    }

    /// Nearest sample for a plot-relative pixel X.
    #[must_use]
    pub fn locate(&self, pixel_x: f64) -> &Sample {
        locate(pixel_x, &self.series, self.time_scale)
    }

    /// Handles a pointer move in plot-relative pixel coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.snap_at_x(x) {
            Some(snap) => {
                debug!(
                    pointer_x = x,
                    index = snap.index,
                    date = %snap.sample.date,
                    "pointer resolved to sample"
                );
                self.interaction.on_pointer_move(x, y, snap);
            }
            None => {
                debug!(pointer_x = x, "pointer could not be resolved to a marker");
                self.interaction.on_pointer_refresh(x, y);
            }
        }
    }

    /// Handles the pointer leaving the plotting area.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.interaction.cursor()
    }

    #[must_use]
    pub fn tooltip_visibility(&self) -> TooltipVisibility {
        self.interaction.visibility()
    }

    /// Tooltip for the resolved sample, present only while `Shown`.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let cursor = self.interaction.cursor();
        if !cursor.is_visible() {
            return None;
        }
        let snap = cursor.snap?;
        Some(Tooltip {
            content: self.config.tooltip.content(&snap.sample),
            x: snap.marker_x + self.config.tooltip_offset_x,
            y: snap.marker_y + self.config.tooltip_offset_y,
        })
    }

    /// Current animated marker radius.
    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.interaction.marker_radius()
    }

    /// Advances the marker transition; returns `true` while still animating.
    pub fn advance_animation(&mut self, delta: Duration) -> bool {
        self.interaction.advance_animation(delta)
    }

    pub fn finish_animation(&mut self) {
        self.interaction.finish_animation();
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        debug!(
            primitives = frame.primitive_count(),
            polylines = frame.polylines.len(),
            hovering = !frame.circles.is_empty(),
            "frame rendered"
        );
        Ok(())
    }

    /// Renders the frame into an external cairo context owned by the host.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn snap_at_x(&self, pointer_x: f64) -> Option<CursorSnap> {
        let index = locate_index(pointer_x, &self.series, self.time_scale);
        let sample = *self.series.get(index)?;
        let marker_x = self.time_scale.date_to_pixel(sample.date).ok()?;
        // Samples without a value sit on the baseline.
        let marker_y = self
            .value_scale
            .value_to_pixel(sample.value.unwrap_or(0.0))
            .ok()?;
        Some(CursorSnap {
            index,
            sample,
            marker_x,
            marker_y,
        })
    }
}
