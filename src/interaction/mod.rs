mod locator;
mod tooltip;
mod transition;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Sample;

pub use locator::{locate, locate_index, nearest_index};
pub use tooltip::{
    Tooltip, TooltipContent, TooltipFormat, format_scaled_value, validate_date_format,
};
pub use transition::MarkerTransition;

/// Hover tooltip visibility. `Hidden` is both initial and terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Sample resolved for the current pointer position and its marker anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSnap {
    pub index: usize,
    pub sample: Sample,
    pub marker_x: f64,
    pub marker_y: f64,
}

/// Transient cursor state, fully overwritten on every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub snap: Option<CursorSnap>,
    pub visibility: TooltipVisibility,
}

impl CursorState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == TooltipVisibility::Shown
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    cursor: CursorState,
    marker_radius: f64,
    marker: MarkerTransition,
}

impl InteractionState {
    #[must_use]
    pub fn new(marker_radius: f64, transition: Duration) -> Self {
        Self {
            cursor: CursorState::default(),
            marker_radius,
            marker: MarkerTransition::settled(0.0, transition),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    #[must_use]
    pub fn visibility(&self) -> TooltipVisibility {
        self.cursor.visibility
    }

    #[must_use]
    pub fn marker_transition(&self) -> MarkerTransition {
        self.marker
    }

    /// Current animated marker radius.
    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.marker.radius()
    }

    /// Enters (or refreshes) `Shown` with a newly resolved sample.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, snap: CursorSnap) {
        self.cursor = CursorState {
            pointer_x: x,
            pointer_y: y,
            snap: Some(snap),
            visibility: TooltipVisibility::Shown,
        };
        self.marker.retarget(self.marker_radius);
    }

    /// Stays in (or enters) `Shown` without a new sample; the last snap is kept.
    pub fn on_pointer_refresh(&mut self, x: f64, y: f64) {
        self.cursor.pointer_x = x;
        self.cursor.pointer_y = y;
        self.cursor.visibility = TooltipVisibility::Shown;
        if self.cursor.snap.is_some() {
            self.marker.retarget(self.marker_radius);
        }
    }

    /// Returns to `Hidden`; the marker keeps its last anchor while it shrinks.
    pub fn on_pointer_leave(&mut self) {
        self.cursor.visibility = TooltipVisibility::Hidden;
        self.marker.retarget(0.0);
    }

    pub fn advance_animation(&mut self, delta: Duration) -> bool {
        self.marker.advance(delta)
    }

    pub fn finish_animation(&mut self) {
        self.marker.finish();
    }
}
