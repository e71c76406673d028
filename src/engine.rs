//! Selection state engine.
//!
//! [`RangeEngine`] is the single owner of the committed start/end values,
//! their editable text buffers and the drag capture flag. Every mutation goes
//! through one of its operations, each of which runs to completion and leaves
//! `start < end` (one step or one fixed-value index apart at minimum).
//!
//! Bounds for a thumb are never the other thumb's raw value. They are one
//! [`step_value`] away from it, which keeps discrete thumbs off the same
//! fixed value:
//!
//! ```
//! use range_slider::{Direction, RangeBounds, RangeEngine};
//!
//! let bounds = RangeBounds::continuous(1.0, 100.0).unwrap();
//! let mut engine = RangeEngine::new(bounds);
//!
//! engine.jump_start_to_max();
//! assert_eq!(engine.start_value(), 99.0);
//!
//! engine.step_end(Direction::Decrease);
//! assert_eq!(engine.end_value(), 100.0);
//! ```

use crate::utils::{
    clamp, closest_fixed_value, format_value, parse_input, round_half_up, sanitize_input,
    step_value,
};
use crate::view::{ThumbGeometry, ViewState};
use crate::{Direction, RangeBounds, Thumb};
use log::debug;

/// Every engine operation as a value, so controllers can hand them to a
/// reducer instead of holding a mutable engine themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineAction {
    SetInput(Thumb, String),
    Commit(Thumb),
    Step(Thumb, Direction),
    JumpToMin(Thumb),
    JumpToMax(Thumb),
    BeginDrag(Thumb),
    /// Fraction `0..=1` of the track traversed by the pointer.
    UpdateDrag(f64),
    EndDrag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeEngine {
    bounds: RangeBounds,
    start_value: f64,
    end_value: f64,
    start_input: String,
    end_input: String,
    active_thumb: Option<Thumb>,
}

impl RangeEngine {
    /// Seed a selection spanning the whole range.
    pub fn new(bounds: RangeBounds) -> Self {
        let start_value = bounds.min();
        let end_value = bounds.max();
        Self {
            bounds,
            start_value,
            end_value,
            start_input: format_value(start_value),
            end_input: format_value(end_value),
            active_thumb: None,
        }
    }

    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }

    pub fn min(&self) -> f64 {
        self.bounds.min()
    }

    pub fn max(&self) -> f64 {
        self.bounds.max()
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    pub fn end_input(&self) -> &str {
        &self.end_input
    }

    pub fn active_thumb(&self) -> Option<Thumb> {
        self.active_thumb
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

    /// Largest start value allowed by the current end value.
    pub fn upper_bound_for_start(&self) -> f64 {
        step_value(
            self.end_value,
            Direction::Decrease,
            self.bounds.fixed_values(),
        )
    }

    /// Smallest end value allowed by the current start value.
    pub fn lower_bound_for_end(&self) -> f64 {
        step_value(
            self.start_value,
            Direction::Increase,
            self.bounds.fixed_values(),
        )
    }

    /// `(lo, hi)` a thumb may currently occupy.
    pub fn allowed_range(&self, thumb: Thumb) -> (f64, f64) {
        match thumb {
            Thumb::Start => (self.min(), self.upper_bound_for_start()),
            Thumb::End => (self.lower_bound_for_end(), self.max()),
        }
    }

    // ── text buffers ────────────────────────────────────────────────────────

    pub fn set_start_input(&mut self, text: &str) {
        self.set_input(Thumb::Start, text);
    }

    pub fn set_end_input(&mut self, text: &str) {
        self.set_input(Thumb::End, text);
    }

    /// Replace a text buffer with its sanitized form. Committed values are
    /// left alone until [`commit`](Self::commit).
    pub fn set_input(&mut self, thumb: Thumb, text: &str) {
        let sanitized = sanitize_input(text);
        match thumb {
            Thumb::Start => self.start_input = sanitized,
            Thumb::End => self.end_input = sanitized,
        }
    }

    pub fn commit_start(&mut self) {
        self.commit(Thumb::Start);
    }

    pub fn commit_end(&mut self) {
        self.commit(Thumb::End);
    }

    /// Reconcile a text buffer into its committed value.
    ///
    /// Empty or unparseable text falls back to the thumb's own bound (`min`
    /// for start, `max` for end). The result is clamped against the other
    /// thumb and the buffer is rewritten from the committed value.
    pub fn commit(&mut self, thumb: Thumb) {
        let fallback = match thumb {
            Thumb::Start => self.min(),
            Thumb::End => self.max(),
        };
        let text = self.input(thumb);
        let mut parsed = parse_input(text).unwrap_or(fallback);
        if let Some(values) = self.bounds.fixed_values() {
            parsed = closest_fixed_value(parsed, values);
        }
        let committed = self.assign(thumb, parsed);
        debug!("Committed {} input to {}", thumb, committed);
    }

    // ── keyboard stepping ───────────────────────────────────────────────────

    pub fn step_start(&mut self, direction: Direction) {
        self.step(Thumb::Start, direction);
    }

    pub fn step_end(&mut self, direction: Direction) {
        self.step(Thumb::End, direction);
    }

    /// Nudge a thumb one step, bypassing its text buffer.
    pub fn step(&mut self, thumb: Thumb, direction: Direction) {
        let candidate = step_value(self.value(thumb), direction, self.bounds.fixed_values());
        self.assign(thumb, candidate);
    }

    pub fn jump_start_to_min(&mut self) {
        self.jump_to_min(Thumb::Start);
    }

    /// Start goes to the highest value the end thumb leaves free, not `max`.
    pub fn jump_start_to_max(&mut self) {
        self.jump_to_max(Thumb::Start);
    }

    /// End goes to the lowest value the start thumb leaves free, not `min`.
    pub fn jump_end_to_min(&mut self) {
        self.jump_to_min(Thumb::End);
    }

    pub fn jump_end_to_max(&mut self) {
        self.jump_to_max(Thumb::End);
    }

    pub fn jump_to_min(&mut self, thumb: Thumb) {
        let (lo, _) = self.allowed_range(thumb);
        self.assign(thumb, lo);
    }

    pub fn jump_to_max(&mut self, thumb: Thumb) {
        let (_, hi) = self.allowed_range(thumb);
        self.assign(thumb, hi);
    }

    // ── pointer drag ────────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, thumb: Thumb) {
        self.active_thumb = Some(thumb);
    }

    /// Move the captured thumb to the value under `fraction` of the track.
    ///
    /// The caller clamps `fraction` to `0..=1`. Continuous values round to
    /// the nearest integer, discrete values snap to the closest fixed value.
    /// Without a captured thumb this is a no-op.
    pub fn update_drag(&mut self, fraction: f64) {
        let Some(thumb) = self.active_thumb else {
            return;
        };
        let raw = self.min() + fraction * (self.max() - self.min());
        let snapped = match self.bounds.fixed_values() {
            Some(values) => closest_fixed_value(raw, values),
            None => round_half_up(raw),
        };
        self.assign(thumb, snapped);
    }

    pub fn end_drag(&mut self) {
        self.active_thumb = None;
    }

    /// Apply an [`EngineAction`].
    pub fn dispatch(&mut self, action: EngineAction) {
        match action {
            EngineAction::SetInput(thumb, text) => self.set_input(thumb, &text),
            EngineAction::Commit(thumb) => self.commit(thumb),
            EngineAction::Step(thumb, direction) => self.step(thumb, direction),
            EngineAction::JumpToMin(thumb) => self.jump_to_min(thumb),
            EngineAction::JumpToMax(thumb) => self.jump_to_max(thumb),
            EngineAction::BeginDrag(thumb) => self.begin_drag(thumb),
            EngineAction::UpdateDrag(fraction) => self.update_drag(fraction),
            EngineAction::EndDrag => self.end_drag(),
        }
    }

    /// Snapshot of everything the presentation layer renders.
    pub fn view(&self, geometry: Option<ThumbGeometry>) -> ViewState {
        ViewState::derive(self, geometry)
    }

    // Clamp into the thumb's allowed range, store, and resync its buffer.
    fn assign(&mut self, thumb: Thumb, candidate: f64) -> f64 {
        let (lo, hi) = self.allowed_range(thumb);
        let value = clamp(candidate, lo, hi);
        if value != candidate {
            debug!("Clamped {} from {} to {}", thumb, candidate, value);
        }
        match thumb {
            Thumb::Start => {
                self.start_value = value;
                self.start_input = format_value(value);
            }
            Thumb::End => {
                self.end_value = value;
                self.end_input = format_value(value);
            }
        }
        value
    }
}
