mod frame;
mod null_renderer;
mod plotters_backend;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use plotters_backend::{PlottersRenderStats, PlottersRenderer};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
