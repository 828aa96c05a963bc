use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipFormat, validate_date_format};

/// Public chart-session bootstrap configuration.
///
/// Serializable so hosts can persist/load chart setup as JSON; every field
/// except the viewport falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_value_axis_title")]
    pub value_axis_title: String,
    /// Cadence of time-axis labels in months.
    #[serde(default = "default_time_label_every_months")]
    pub time_label_every_months: u32,
    /// chrono pattern for time-axis labels.
    #[serde(default = "default_time_label_format")]
    pub time_label_format: String,
    /// Approximate number of vertical gridline ticks.
    #[serde(default = "default_time_grid_tick_count")]
    pub time_grid_tick_count: usize,
    /// Approximate number of value ticks (labels and horizontal gridlines).
    #[serde(default = "default_value_tick_count")]
    pub value_tick_count: usize,
    /// Value-axis labels show `tick / divisor` rounded to whole units.
    #[serde(default = "default_value_label_divisor")]
    pub value_label_divisor: f64,
    #[serde(default = "default_hide_first_value_label")]
    pub hide_first_value_label: bool,
    #[serde(default)]
    pub tooltip: TooltipFormat,
    /// Tooltip anchor offset from the plot-relative marker position.
    #[serde(default = "default_tooltip_offset_x")]
    pub tooltip_offset_x: f64,
    #[serde(default = "default_tooltip_offset_y")]
    pub tooltip_offset_y: f64,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_marker_transition_ms")]
    pub marker_transition_ms: u64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1600, 500))
    }
}

impl ChartEngineConfig {
    /// Creates a config with default layout and formatting for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            title: default_title(),
            value_axis_title: default_value_axis_title(),
            time_label_every_months: default_time_label_every_months(),
            time_label_format: default_time_label_format(),
            time_grid_tick_count: default_time_grid_tick_count(),
            value_tick_count: default_value_tick_count(),
            value_label_divisor: default_value_label_divisor(),
            hide_first_value_label: default_hide_first_value_label(),
            tooltip: TooltipFormat::default(),
            tooltip_offset_x: default_tooltip_offset_x(),
            tooltip_offset_y: default_tooltip_offset_y(),
            marker_radius: default_marker_radius(),
            marker_transition_ms: default_marker_transition_ms(),
        }
    }

    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| ChartError::InvalidData(format!("invalid config json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("failed to serialize config: {err}")))
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_value_tick_count(mut self, count: usize) -> Self {
        self.value_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_time_label_every_months(mut self, months: u32) -> Self {
        self.time_label_every_months = months;
        self
    }

    #[must_use]
    pub fn with_tooltip_format(mut self, tooltip: TooltipFormat) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, x: f64, y: f64) -> Self {
        self.tooltip_offset_x = x;
        self.tooltip_offset_y = y;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, radius: f64, transition: Duration) -> Self {
        self.marker_radius = radius;
        self.marker_transition_ms = u64::try_from(transition.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn marker_transition(&self) -> Duration {
        Duration::from_millis(self.marker_transition_ms)
    }

    /// Plot area size (`viewport` minus margins).
    pub fn plot_size(&self) -> ChartResult<(f64, f64)> {
        self.margins.plot_size(self.viewport)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_size()?;
        if self.time_label_every_months == 0 {
            return Err(ChartError::InvalidData(
                "time label cadence must be at least one month".to_owned(),
            ));
        }
        validate_date_format(&self.time_label_format)?;
        if self.value_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "value tick count must be > 0".to_owned(),
            ));
        }
        if !self.value_label_divisor.is_finite() || self.value_label_divisor <= 0.0 {
            return Err(ChartError::InvalidData(
                "value label divisor must be finite and > 0".to_owned(),
            ));
        }
        self.tooltip.validate()?;
        if !self.tooltip_offset_x.is_finite() || !self.tooltip_offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        if !self.marker_radius.is_finite() || self.marker_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_title() -> String {
    "Performance of the NASDAQ 100 for a decade from 2012-2022".to_owned()
}

fn default_value_axis_title() -> String {
    "Close Value".to_owned()
}

fn default_time_label_every_months() -> u32 {
    24
}

fn default_time_label_format() -> String {
    "%b %Y".to_owned()
}

fn default_time_grid_tick_count() -> usize {
    10
}

fn default_value_tick_count() -> usize {
    10
}

fn default_value_label_divisor() -> f64 {
    1000.0
}

fn default_hide_first_value_label() -> bool {
    true
}

fn default_tooltip_offset_x() -> f64 {
    100.0
}

fn default_tooltip_offset_y() -> f64 {
    50.0
}

fn default_marker_radius() -> f64 {
    5.0
}

fn default_marker_transition_ms() -> u64 {
    50
}
