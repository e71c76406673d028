//! Pointer drag controller.
//!
//! Translates pointer coordinates into [`EngineAction`]s against the track's
//! current geometry. The controller only decides *what* to dispatch; listener
//! installation lives with the presentation layer and follows [`DragState`].

use crate::engine::EngineAction;
use crate::utils::clamp;
use crate::Thumb;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Thumb),
}

/// Horizontal extent of the track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    /// Fraction of the track left of `pointer_x`, clamped to `0..=1`.
    ///
    /// `None` while the track has no measurable width.
    pub fn fraction_at(&self, pointer_x: f64) -> Option<f64> {
        if self.width.is_nan() || self.width <= 0.0 {
            return None;
        }
        Some(clamp((pointer_x - self.left) / self.width, 0.0, 1.0))
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Pointer pressed on a thumb: capture it.
    pub fn pointer_down(&mut self, thumb: Thumb) -> EngineAction {
        debug!("Drag started on {} thumb", thumb);
        self.state = DragState::Dragging(thumb);
        EngineAction::BeginDrag(thumb)
    }

    /// Pointer moved anywhere on the page.
    ///
    /// Produces an update only while dragging and when the track geometry is
    /// known; otherwise the event is dropped.
    pub fn pointer_move(&self, pointer_x: f64, track: Option<TrackGeometry>) -> Option<EngineAction> {
        if !self.is_dragging() {
            return None;
        }
        let fraction = track?.fraction_at(pointer_x)?;
        Some(EngineAction::UpdateDrag(fraction))
    }

    /// Pointer released. The last dragged value stays committed.
    pub fn pointer_up(&mut self) -> Option<EngineAction> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(thumb) => {
                debug!("Drag ended on {} thumb", thumb);
                Some(EngineAction::EndDrag)
            }
        }
    }

    /// Same as [`pointer_up`](Self::pointer_up); there is no rollback.
    pub fn pointer_cancel(&mut self) -> Option<EngineAction> {
        self.pointer_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeBounds, RangeEngine};

    const TRACK: TrackGeometry = TrackGeometry {
        left: 0.0,
        width: 1000.0,
    };

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(TRACK.fraction_at(310.0), Some(0.31));
        assert_eq!(TRACK.fraction_at(-20.0), Some(0.0));
        assert_eq!(TRACK.fraction_at(1500.0), Some(1.0));

        let offset = TrackGeometry {
            left: 100.0,
            width: 200.0,
        };
        assert_eq!(offset.fraction_at(150.0), Some(0.25));
    }

    #[test]
    fn unmeasured_track_yields_nothing() {
        let collapsed = TrackGeometry {
            left: 0.0,
            width: 0.0,
        };
        assert_eq!(collapsed.fraction_at(10.0), None);

        let mut controller = DragController::new();
        controller.pointer_down(Thumb::Start);
        assert_eq!(controller.pointer_move(10.0, None), None);
        assert_eq!(controller.pointer_move(10.0, Some(collapsed)), None);
    }

    #[test]
    fn idle_ignores_moves_and_releases() {
        let mut controller = DragController::new();
        assert_eq!(controller.pointer_move(310.0, Some(TRACK)), None);
        assert_eq!(controller.pointer_up(), None);
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn full_drag_cycle() {
        let mut controller = DragController::new();
        assert_eq!(
            controller.pointer_down(Thumb::End),
            EngineAction::BeginDrag(Thumb::End)
        );
        assert_eq!(controller.state(), DragState::Dragging(Thumb::End));
        assert_eq!(
            controller.pointer_move(500.0, Some(TRACK)),
            Some(EngineAction::UpdateDrag(0.5))
        );
        assert_eq!(controller.pointer_cancel(), Some(EngineAction::EndDrag));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drives_engine_with_snapping() {
        let bounds = RangeBounds::fixed(vec![0.0, 25.0, 50.0, 75.0, 100.0]).unwrap();
        let mut engine = RangeEngine::new(bounds);
        let mut controller = DragController::new();

        engine.dispatch(controller.pointer_down(Thumb::Start));
        for x in [310.0, 410.0] {
            if let Some(action) = controller.pointer_move(x, Some(TRACK)) {
                engine.dispatch(action);
            }
        }
        assert_eq!(engine.start_value(), 50.0);

        if let Some(action) = controller.pointer_cancel() {
            engine.dispatch(action);
        }
        assert_eq!(engine.active_thumb(), None);
        assert_eq!(engine.start_value(), 50.0);
    }
}
