mod engine;
mod engine_config;
mod render_frame_builder;
mod render_style;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use render_style::RenderStyle;
