use gloo_events::EventListener;
use range_slider::{
    DragController, EngineAction, RangeBounds, RangeEngine, Thumb, ThumbGeometry, TrackGeometry,
    ViewState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, PointerEvent};
use yew::prelude::*;

/// Reducer wrapper so the engine can live in `use_reducer`.
#[derive(Debug, PartialEq)]
pub struct RangeStore {
    engine: RangeEngine,
}

impl Reducible for RangeStore {
    type Action = EngineAction;

    fn reduce(self: Rc<Self>, action: EngineAction) -> Rc<Self> {
        let mut engine = self.engine.clone();
        engine.dispatch(action);
        Rc::new(RangeStore { engine })
    }
}

/// Window-level pointer listeners for one drag. Dropping it detaches them.
pub struct DragSubscription {
    _listeners: [EventListener; 3],
}

impl DragSubscription {
    fn attach(
        controller: Rc<RefCell<DragController>>,
        track_ref: NodeRef,
        dispatcher: UseReducerDispatcher<RangeStore>,
    ) -> Self {
        let window = gloo_utils::window();

        let on_move = {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            EventListener::new(&window, "pointermove", move |event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let track = track_geometry(&track_ref);
                let action = controller
                    .borrow()
                    .pointer_move(f64::from(event.client_x()), track);
                if let Some(action) = action {
                    dispatcher.dispatch(action);
                }
            })
        };

        let release = |event_type: &'static str| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            EventListener::new(&window, event_type, move |_| {
                let action = controller.borrow_mut().pointer_up();
                if let Some(action) = action {
                    dispatcher.dispatch(action);
                }
            })
        };

        Self {
            _listeners: [on_move, release("pointerup"), release("pointercancel")],
        }
    }
}

fn track_geometry(track_ref: &NodeRef) -> Option<TrackGeometry> {
    let rect = track_ref.cast::<Element>()?.get_bounding_client_rect();
    Some(TrackGeometry {
        left: rect.left(),
        width: rect.width(),
    })
}

fn thumb_geometry(thumb_ref: &NodeRef, track_ref: &NodeRef) -> Option<ThumbGeometry> {
    let thumb = thumb_ref.cast::<HtmlElement>()?;
    let track = track_ref.cast::<HtmlElement>()?;
    Some(ThumbGeometry::from_offsets(
        thumb.offset_width(),
        track.offset_width(),
    ))
}

/// State and callbacks for one range widget.
#[derive(Clone)]
pub struct RangeHandle {
    pub view: ViewState,
    pub min: f64,
    pub max: f64,
    /// Discrete mode; text inputs are disabled.
    pub is_fixed: bool,
    pub track_ref: NodeRef,
    pub start_thumb_ref: NodeRef,
    pub end_thumb_ref: NodeRef,
    /// Feed any engine action in.
    pub dispatch: Callback<EngineAction>,
    /// Pointer pressed on a thumb.
    pub on_thumb_pointer_down: Callback<(Thumb, PointerEvent)>,
}

impl RangeHandle {
    pub fn thumb_ref(&self, thumb: Thumb) -> NodeRef {
        match thumb {
            Thumb::Start => self.start_thumb_ref.clone(),
            Thumb::End => self.end_thumb_ref.clone(),
        }
    }
}

/// Custom hook owning a [`RangeEngine`] and its drag wiring.
///
/// Window listeners exist only while a thumb is captured; they are installed
/// when the engine reports an active thumb and dropped when it clears or the
/// component unmounts.
#[hook]
pub fn use_range(bounds: &RangeBounds) -> RangeHandle {
    let store = {
        let bounds = bounds.clone();
        use_reducer(move || RangeStore {
            engine: RangeEngine::new(bounds),
        })
    };
    let controller = use_mut_ref(DragController::new);
    let track_ref = use_node_ref();
    let start_thumb_ref = use_node_ref();
    let end_thumb_ref = use_node_ref();

    let active_thumb = store.engine.active_thumb();
    {
        let controller = controller.clone();
        let track_ref = track_ref.clone();
        let dispatcher = store.dispatcher();
        use_effect_with(active_thumb, move |active| {
            let subscription =
                active.map(|_| DragSubscription::attach(controller, track_ref, dispatcher));
            move || drop(subscription)
        });
    }

    let dispatch = {
        let dispatcher = store.dispatcher();
        Callback::from(move |action: EngineAction| dispatcher.dispatch(action))
    };

    let on_thumb_pointer_down = {
        let controller = controller.clone();
        let dispatcher = store.dispatcher();
        Callback::from(move |(thumb, event): (Thumb, PointerEvent)| {
            event.prevent_default();
            let action = controller.borrow_mut().pointer_down(thumb);
            dispatcher.dispatch(action);
        })
    };

    // Measured after layout; either thumb works since they share a width.
    let geometry = use_state_eq(|| None::<ThumbGeometry>);
    {
        let geometry = geometry.clone();
        let start_thumb_ref = start_thumb_ref.clone();
        let track_ref = track_ref.clone();
        use_effect(move || {
            geometry.set(thumb_geometry(&start_thumb_ref, &track_ref));
        });
    }
    {
        let geometry = geometry.clone();
        let start_thumb_ref = start_thumb_ref.clone();
        let track_ref = track_ref.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo_utils::window(), "resize", move |_| {
                geometry.set(thumb_geometry(&start_thumb_ref, &track_ref));
            });
            move || drop(listener)
        });
    }

    RangeHandle {
        view: store.engine.view(*geometry),
        min: store.engine.min(),
        max: store.engine.max(),
        is_fixed: store.engine.bounds().is_fixed(),
        track_ref,
        start_thumb_ref,
        end_thumb_ref,
        dispatch,
        on_thumb_pointer_down,
    }
}
