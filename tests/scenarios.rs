use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use range_slider::api::{limits_or_fallback, parse_limits};
use range_slider::keyboard::{input_action_for, thumb_action_for};
use range_slider::{
    Direction, DragController, EngineAction, RangeBounds, RangeEngine, Thumb, ThumbGeometry,
    TrackGeometry,
};

const FIXED: [f64; 6] = [1.99, 5.99, 10.99, 30.99, 50.99, 70.99];

fn continuous() -> RangeEngine {
    RangeEngine::new(RangeBounds::continuous(1.0, 100.0).unwrap())
}

fn press(engine: &mut RangeEngine, thumb: Thumb, key: &str) {
    let action = thumb_action_for(thumb, key).expect("key should be handled");
    engine.dispatch(action);
}

#[test]
fn continuous_arrow_stepping() {
    let mut engine = continuous();
    press(&mut engine, Thumb::Start, "ArrowRight");
    assert_eq!(engine.start_value(), 2.0);
    press(&mut engine, Thumb::Start, "ArrowLeft");
    assert_eq!(engine.start_value(), 1.0);
    press(&mut engine, Thumb::End, "ArrowLeft");
    assert_eq!(engine.end_value(), 99.0);
    press(&mut engine, Thumb::End, "ArrowUp");
    assert_eq!(engine.end_value(), 100.0);
}

#[test]
fn home_end_without_crossover() {
    let mut engine = continuous();
    press(&mut engine, Thumb::Start, "End");
    assert_eq!(engine.start_value(), 99.0);
    press(&mut engine, Thumb::Start, "Home");
    assert_eq!(engine.start_value(), 1.0);
    press(&mut engine, Thumb::End, "Home");
    assert_eq!(engine.end_value(), 2.0);
}

#[test]
fn discrete_stepping() {
    let mut engine = RangeEngine::new(RangeBounds::fixed(FIXED.to_vec()).unwrap());
    press(&mut engine, Thumb::Start, "ArrowRight");
    assert_eq!(engine.start_value(), 5.99);
    press(&mut engine, Thumb::End, "ArrowLeft");
    assert_eq!(engine.end_value(), 50.99);
}

#[test]
fn drag_snapping() {
    let bounds = RangeBounds::fixed(vec![0.0, 25.0, 50.0, 75.0, 100.0]).unwrap();
    let mut engine = RangeEngine::new(bounds);
    let mut controller = DragController::new();
    let track = TrackGeometry {
        left: 0.0,
        width: 1000.0,
    };

    engine.dispatch(controller.pointer_down(Thumb::Start));
    if let Some(action) = controller.pointer_move(310.0, Some(track)) {
        engine.dispatch(action);
    }
    assert_eq!(engine.start_value(), 25.0);
    if let Some(action) = controller.pointer_move(410.0, Some(track)) {
        engine.dispatch(action);
    }
    assert_eq!(engine.start_value(), 50.0);
    if let Some(action) = controller.pointer_up() {
        engine.dispatch(action);
    }
    assert_eq!(engine.active_thumb(), None);
}

#[test]
fn text_commit_fallback() {
    let mut engine = continuous();
    engine.set_end_input("");
    engine.commit_end();
    assert_eq!(engine.end_value(), 100.0);
    assert_eq!(engine.end_input(), "100");
}

#[test]
fn typing_then_enter_commits() {
    let mut engine = continuous();
    engine.dispatch(EngineAction::SetInput(Thumb::Start, "35".into()));
    assert_eq!(engine.start_value(), 1.0);
    let action = input_action_for(Thumb::Start, "Enter").expect("enter commits");
    engine.dispatch(action);
    assert_eq!(engine.start_value(), 35.0);
    assert_eq!(engine.start_input(), "35");
}

#[test]
fn overlap_detection() {
    let mut engine = continuous();
    engine.set_start_input("97");
    engine.commit_start();
    let geometry = ThumbGeometry {
        thumb_width: 20.0,
        track_width: 500.0,
    };
    let view = engine.view(Some(geometry));
    assert!(view.end_position - view.start_position < 4.0);
    assert!(view.thumbs_overlapping);
}

#[test]
fn sub_step_limits_never_reach_the_engine() {
    let bounds = parse_limits(r#"{"min": 1, "max": 1.5}"#);
    let mut engine = RangeEngine::new(limits_or_fallback(bounds));
    engine.step_start(Direction::Increase);
    engine.jump_start_to_max();
    assert_eq!(engine.min(), 1.0);
    assert_eq!(engine.start_value(), 99.0);
    assert!(engine.start_value() >= engine.min());
}

fn random_action(rng: &mut StdRng) -> EngineAction {
    let thumb = if rng.random_bool(0.5) {
        Thumb::Start
    } else {
        Thumb::End
    };
    let direction = if rng.random_bool(0.5) {
        Direction::Increase
    } else {
        Direction::Decrease
    };
    match rng.random_range(0..8) {
        0 => EngineAction::SetInput(thumb, rng.random_range(0..1000).to_string()),
        1 => EngineAction::Commit(thumb),
        2 => EngineAction::Step(thumb, direction),
        3 => EngineAction::JumpToMin(thumb),
        4 => EngineAction::JumpToMax(thumb),
        5 => EngineAction::BeginDrag(thumb),
        6 => EngineAction::UpdateDrag(rng.random::<f64>()),
        _ => EngineAction::EndDrag,
    }
}

#[test]
fn ordering_invariant_holds_for_random_sequences() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let modes = [
        RangeBounds::continuous(1.0, 100.0).unwrap(),
        RangeBounds::continuous(0.0, 1.0).unwrap(),
        RangeBounds::continuous(0.5, 1.5).unwrap(),
        RangeBounds::fixed(FIXED.to_vec()).unwrap(),
        RangeBounds::fixed(vec![3.0, 4.0]).unwrap(),
    ];

    for bounds in modes {
        let fixed = bounds.fixed_values().map(<[f64]>::to_vec);
        let mut engine = RangeEngine::new(bounds);
        for _ in 0..2_000 {
            let action = random_action(&mut rng);
            engine.dispatch(action.clone());

            let (start, end) = (engine.start_value(), engine.end_value());
            assert!(start < end, "{:?} left start={} end={}", action, start, end);
            assert!(start >= engine.min() && end <= engine.max());
            if let Some(values) = &fixed {
                assert!(values.contains(&start), "start {} not a fixed value", start);
                assert!(values.contains(&end), "end {} not a fixed value", end);
            }
        }
    }
}
