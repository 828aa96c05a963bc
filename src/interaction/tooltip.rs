use std::fmt;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Text policy for hover tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipFormat {
    /// chrono `strftime` pattern for the date line.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Values are divided by this before rounding to whole units.
    #[serde(default = "default_value_divisor")]
    pub value_divisor: f64,
    #[serde(default = "default_date_caption")]
    pub date_caption: String,
    #[serde(default = "default_value_caption")]
    pub value_caption: String,
    /// Shown in place of a missing or malformed value.
    #[serde(default = "default_missing_value_text")]
    pub missing_value_text: String,
}

impl Default for TooltipFormat {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            value_divisor: default_value_divisor(),
            date_caption: default_date_caption(),
            value_caption: default_value_caption(),
            missing_value_text: default_missing_value_text(),
        }
    }
}

impl TooltipFormat {
    pub fn validate(&self) -> ChartResult<()> {
        validate_date_format(&self.date_format)?;
        if !self.value_divisor.is_finite() || self.value_divisor <= 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip value divisor must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    #[must_use]
    pub fn format_value(&self, value: Option<f64>) -> String {
        match value {
            Some(value) if value.is_finite() => format_scaled_value(value, self.value_divisor),
            _ => self.missing_value_text.clone(),
        }
    }

    #[must_use]
    pub fn content(&self, sample: &Sample) -> TooltipContent {
        TooltipContent {
            date_caption: self.date_caption.clone(),
            date_label: self.format_date(sample.date),
            value_caption: self.value_caption.clone(),
            value_label: self.format_value(sample.value),
        }
    }
}

/// Formatted tooltip lines for one resolved sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub date_caption: String,
    pub date_label: String,
    pub value_caption: String,
    pub value_label: String,
}

impl TooltipContent {
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        [
            format!("{}: {}", self.date_caption, self.date_label),
            format!("{}: {}", self.value_caption, self.value_label),
        ]
    }
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [date_line, value_line] = self.lines();
        write!(f, "{date_line}\n{value_line}")
    }
}

/// Tooltip content anchored at a surface position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub content: TooltipContent,
    pub x: f64,
    pub y: f64,
}

/// Divides and rounds half away from zero to a whole number.
#[must_use]
pub fn format_scaled_value(value: f64, divisor: f64) -> String {
    // `+ 0.0` folds negative zero so tiny negatives print as "0".
    let scaled = (value / divisor).round() + 0.0;
    format!("{scaled:.0}")
}

pub fn validate_date_format(pattern: &str) -> ChartResult<()> {
    if pattern.is_empty() {
        return Err(ChartError::InvalidData(
            "date format must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "invalid date format `{pattern}`"
        )));
    }
    Ok(())
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_owned()
}

fn default_value_divisor() -> f64 {
    1000.0
}

fn default_date_caption() -> String {
    "Date".to_owned()
}

fn default_value_caption() -> String {
    "Close Value".to_owned()
}

fn default_missing_value_text() -> String {
    "N/A".to_owned()
}
