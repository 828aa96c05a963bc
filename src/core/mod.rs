pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use line_series::{LinePath, project_line_paths};
pub use scale::{LinearScale, nice_ticks};
pub use series::SampleSeries;
pub use time_scale::TimeScale;
pub use types::{PlotMargins, Sample, Viewport};
pub use value_scale::ValueScale;
