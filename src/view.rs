//! Derived view state.
//!
//! Positions, the overlap flag and the slider accessibility attributes are
//! recomputed from an engine snapshot after every change. None of it is stored.

use crate::config::CURRENCY_SYMBOL;
use crate::engine::RangeEngine;
use crate::utils::{format_value, position_percent};
use crate::Thumb;

/// Rendered size of a thumb relative to its track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub thumb_width: f64,
    pub track_width: f64,
}

impl ThumbGeometry {
    /// Build from DOM `offsetWidth` readings.
    pub fn from_offsets(thumb_width: i32, track_width: i32) -> Self {
        Self {
            thumb_width: f64::from(thumb_width),
            track_width: f64::from(track_width),
        }
    }

    /// Thumb width as a percentage of the track, `None` before layout.
    pub fn width_percent(&self) -> Option<f64> {
        if self.track_width > 0.0 {
            Some(self.thumb_width / self.track_width * 100.0)
        } else {
            None
        }
    }
}

/// True when the thumbs sit closer together than one thumb width.
pub fn thumbs_overlapping(
    start_position: f64,
    end_position: f64,
    thumb_width_percent: f64,
) -> bool {
    end_position - start_position < thumb_width_percent
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub start_value: f64,
    pub end_value: f64,
    pub start_input: String,
    pub end_input: String,
    pub start_position: f64,
    pub end_position: f64,
    pub active_thumb: Option<Thumb>,
    pub thumbs_overlapping: bool,
}

impl ViewState {
    pub fn derive(engine: &RangeEngine, geometry: Option<ThumbGeometry>) -> Self {
        let (min, max) = (engine.min(), engine.max());
        let start_position = position_percent(engine.start_value(), min, max);
        let end_position = position_percent(engine.end_value(), min, max);
        let thumbs_overlapping = geometry
            .and_then(|g| g.width_percent())
            .is_some_and(|width| thumbs_overlapping(start_position, end_position, width));

        Self {
            start_value: engine.start_value(),
            end_value: engine.end_value(),
            start_input: engine.start_input().to_owned(),
            end_input: engine.end_input().to_owned(),
            start_position,
            end_position,
            active_thumb: engine.active_thumb(),
            thumbs_overlapping,
        }
    }

    pub fn position(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Start => self.start_position,
            Thumb::End => self.end_position,
        }
    }

    pub fn value(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Start => self.start_value,
            Thumb::End => self.end_value,
        }
    }

    pub fn input(&self, thumb: Thumb) -> &str {
        match thumb {
            Thumb::Start => &self.start_input,
            Thumb::End => &self.end_input,
        }
    }

    pub fn is_active(&self, thumb: Thumb) -> bool {
        self.active_thumb == Some(thumb)
    }

    /// Width of the highlighted segment between the thumbs, in percent.
    pub fn active_track_width(&self) -> f64 {
        self.end_position - self.start_position
    }
}

/// `role="slider"` attribute values for one thumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderAria {
    pub value_now: String,
    pub value_min: String,
    pub value_max: String,
    pub value_text: String,
}

impl SliderAria {
    pub fn for_thumb(view: &ViewState, thumb: Thumb, min: f64, max: f64) -> Self {
        let value = view.value(thumb);
        Self {
            value_now: format_value(value),
            value_min: format_value(min),
            value_max: format_value(max),
            value_text: aria_value_text(value),
        }
    }
}

/// Value followed by the currency symbol, e.g. `35€`.
pub fn aria_value_text(value: f64) -> String {
    format!("{}{}", format_value(value), CURRENCY_SYMBOL)
}
