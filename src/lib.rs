//! Dual-thumb range selection engine.
//!
//! The crate is split into a browser-free core (bounds, numeric helpers,
//! the selection engine, drag and keyboard controllers, derived view
//! state) and a thin Yew front end living in the binary. Everything in
//! this library compiles and tests natively.

use std::fmt;

pub mod api;
pub mod config;
pub mod drag;
pub mod engine;
pub mod keyboard;
pub mod utils;
pub mod view;

pub use drag::{DragController, DragState, TrackGeometry};
pub use engine::{EngineAction, RangeEngine};
pub use view::{SliderAria, ThumbGeometry, ViewState};

/// One of the two handles on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Start,
    End,
}

impl Thumb {
    /// The thumb on the other side of the selection.
    pub fn other(self) -> Thumb {
        match self {
            Thumb::Start => Thumb::End,
            Thumb::End => Thumb::Start,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Thumb::Start => "start",
            Thumb::End => "end",
        }
    }
}

impl fmt::Display for Thumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stepping direction for keyboard and programmatic nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Errors raised when bounds handed to the engine break its contract.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// A bound was NaN or infinite.
    NonFinite(f64),
    /// Continuous bounds with `min >= max`.
    EmptyRange { min: f64, max: f64 },
    /// Continuous bounds narrower than one integer step.
    TooNarrow { min: f64, max: f64 },
    /// Fewer than two fixed values were supplied.
    TooFewValues(usize),
    /// Fixed values not strictly increasing at the given index.
    NotIncreasing { index: usize, value: f64 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::NonFinite(v) => write!(f, "Bound {} is not a finite number", v),
            BoundsError::EmptyRange { min, max } => {
                write!(f, "Minimum {} must be lower than maximum {}", min, max)
            }
            BoundsError::TooNarrow { min, max } => write!(
                f,
                "Range {}..{} is narrower than one step of 1",
                min, max
            ),
            BoundsError::TooFewValues(n) => {
                write!(f, "At least 2 fixed values are required, got {}", n)
            }
            BoundsError::NotIncreasing { index, value } => write!(
                f,
                "Fixed value {} at index {} is not greater than its predecessor",
                value, index
            ),
        }
    }
}

impl std::error::Error for BoundsError {}

/// The value space a widget instance selects from. The mode never changes
/// for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeBounds {
    /// Integer-stepped range `[min, max]`.
    Continuous { min: f64, max: f64 },
    /// Strictly increasing list of allowed values.
    Fixed(Vec<f64>),
}

impl RangeBounds {
    /// Build continuous bounds, checking `min < max` with room for at least
    /// one integer step between them.
    pub fn continuous(min: f64, max: f64) -> Result<Self, BoundsError> {
        for v in [min, max] {
            if !v.is_finite() {
                return Err(BoundsError::NonFinite(v));
            }
        }
        if min >= max {
            return Err(BoundsError::EmptyRange { min, max });
        }
        if max - min < 1.0 {
            return Err(BoundsError::TooNarrow { min, max });
        }
        Ok(RangeBounds::Continuous { min, max })
    }

    /// Build discrete bounds, checking length and strict ordering.
    pub fn fixed(values: Vec<f64>) -> Result<Self, BoundsError> {
        if values.len() < 2 {
            return Err(BoundsError::TooFewValues(values.len()));
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(BoundsError::NonFinite(bad));
        }
        if let Some(index) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(BoundsError::NotIncreasing {
                index: index + 1,
                value: values[index + 1],
            });
        }
        Ok(RangeBounds::Fixed(values))
    }

    /// Effective lower bound (first fixed value in discrete mode).
    pub fn min(&self) -> f64 {
        match self {
            RangeBounds::Continuous { min, .. } => *min,
            RangeBounds::Fixed(values) => values[0],
        }
    }

    /// Effective upper bound (last fixed value in discrete mode).
    pub fn max(&self) -> f64 {
        match self {
            RangeBounds::Continuous { max, .. } => *max,
            RangeBounds::Fixed(values) => values[values.len() - 1],
        }
    }

    pub fn fixed_values(&self) -> Option<&[f64]> {
        match self {
            RangeBounds::Continuous { .. } => None,
            RangeBounds::Fixed(values) => Some(values),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, RangeBounds::Fixed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_bounds_reject_empty_range() {
        assert_eq!(
            RangeBounds::continuous(5.0, 5.0),
            Err(BoundsError::EmptyRange { min: 5.0, max: 5.0 })
        );
        assert!(RangeBounds::continuous(f64::NAN, 5.0).is_err());
        assert_eq!(
            RangeBounds::continuous(1.0, 2.0).map(|b| b.max()),
            Ok(2.0)
        );
        let b = RangeBounds::continuous(1.0, 100.0).unwrap();
        assert_eq!((b.min(), b.max()), (1.0, 100.0));
        assert!(!b.is_fixed());
    }

    #[test]
    fn continuous_bounds_need_one_step() {
        assert_eq!(
            RangeBounds::continuous(1.0, 1.5),
            Err(BoundsError::TooNarrow { min: 1.0, max: 1.5 })
        );
    }

    #[test]
    fn fixed_bounds_need_two_increasing_values() {
        assert_eq!(
            RangeBounds::fixed(vec![1.0]),
            Err(BoundsError::TooFewValues(1))
        );
        assert_eq!(
            RangeBounds::fixed(vec![1.0, 3.0, 3.0]),
            Err(BoundsError::NotIncreasing { index: 2, value: 3.0 })
        );
        let b = RangeBounds::fixed(vec![1.99, 5.99, 70.99]).unwrap();
        assert_eq!((b.min(), b.max()), (1.99, 70.99));
        assert_eq!(b.fixed_values(), Some(&[1.99, 5.99, 70.99][..]));
    }

    #[test]
    fn other_thumb() {
        assert_eq!(Thumb::Start.other(), Thumb::End);
        assert_eq!(Thumb::End.to_string(), "end");
    }
}
