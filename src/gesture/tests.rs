use super::*;
use crate::config::GestureConfig;
use crate::util::Point;
use std::time::Duration;

fn create_engine() -> PaintInput<Vec<PaintEvent>> {
    PaintInput::new(&GestureConfig::default(), Vec::new())
}

fn finger(id: i32) -> DeviceInfo {
    DeviceInfo::new(id, DeviceKind::Touch)
}

fn pen(id: i32) -> DeviceInfo {
    DeviceInfo::new(id, DeviceKind::Pen)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn drain(engine: &mut PaintInput<Vec<PaintEvent>>) -> Vec<PaintEvent> {
    std::mem::take(engine.sink_mut())
}

fn feed(engine: &mut PaintInput<Vec<PaintEvent>>, events: &[RawEvent]) {
    let now = Instant::now();
    for event in events {
        engine.handle(event, now).expect("no receiver ever violates a precondition");
    }
}

#[test]
fn pen_stroke_accumulates_points_in_order() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::ContactDown {
                device: pen(7),
                position: pt(10.0, 10.0),
            },
            RawEvent::ContactMove {
                device: pen(7),
                position: pt(11.0, 12.0),
            },
            RawEvent::ContactMove {
                device: pen(7),
                position: pt(12.0, 14.0),
            },
            RawEvent::ContactUp {
                device: pen(7),
                position: pt(13.0, 16.0),
            },
        ],
    );

    let events = drain(&mut engine);
    assert_eq!(events.len(), 6); // started + 4 points + completed
    assert_eq!(events[0], PaintEvent::StrokeStarted { device: pen(7) });
    let PaintEvent::StrokeCompleted { stroke } = &events[5] else {
        panic!("expected completion, got {:?}", events[5]);
    };
    assert_eq!(
        stroke.points(),
        &[pt(10.0, 10.0), pt(11.0, 12.0), pt(12.0, 14.0), pt(13.0, 16.0)]
    );
    assert!(!engine.processor().has_stroke(7));
}

#[test]
fn press_move_release_emits_the_full_point_sequence() {
    // press (10,10) → move (10,11) → release (10,11)
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::ContactDown {
                device: pen(1),
                position: pt(10.0, 10.0),
            },
            RawEvent::ContactMove {
                device: pen(1),
                position: pt(10.0, 11.0),
            },
            RawEvent::ContactUp {
                device: pen(1),
                position: pt(10.0, 11.0),
            },
        ],
    );

    let events = drain(&mut engine);
    assert_eq!(events[0], PaintEvent::StrokeStarted { device: pen(1) });
    assert_eq!(
        events[1],
        PaintEvent::StrokePointAdded {
            device: pen(1),
            point: pt(10.0, 10.0)
        }
    );
    assert_eq!(
        events[2],
        PaintEvent::StrokePointAdded {
            device: pen(1),
            point: pt(10.0, 11.0)
        }
    );
    // The final position is appended again before completion.
    assert_eq!(
        events[3],
        PaintEvent::StrokePointAdded {
            device: pen(1),
            point: pt(10.0, 11.0)
        }
    );
    assert!(matches!(events[4], PaintEvent::StrokeCompleted { .. }));
    assert_eq!(events.len(), 5);
}

#[test]
fn restarting_a_busy_device_id_cancels_the_old_stroke_first() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::ContactDown {
                device: pen(4),
                position: pt(1.0, 1.0),
            },
            // Same id reused for a new physical contact, no release seen.
            RawEvent::ContactDown {
                device: pen(4),
                position: pt(50.0, 50.0),
            },
        ],
    );

    let events = drain(&mut engine);
    assert!(matches!(events[0], PaintEvent::StrokeStarted { .. }));
    assert!(matches!(events[1], PaintEvent::StrokePointAdded { .. }));
    let PaintEvent::StrokeCanceled { stroke } = &events[2] else {
        panic!("expected cancellation before restart, got {:?}", events[2]);
    };
    assert_eq!(stroke.points(), &[pt(1.0, 1.0)]);
    assert!(matches!(events[3], PaintEvent::StrokeStarted { .. }));
    assert_eq!(engine.processor().active_stroke_count(), 1);
}

#[test]
fn stroke_operations_without_an_active_stroke_fail_loudly() {
    let mut engine = create_engine();
    let processor = &mut engine.processor;

    assert_eq!(
        processor.add_stroke_point(9, pt(0.0, 0.0)),
        Err(GestureError::NoActiveStroke { device_id: 9 })
    );
    assert_eq!(
        processor.complete_stroke(9),
        Err(GestureError::NoActiveStroke { device_id: 9 })
    );
    assert_eq!(
        processor.cancel_stroke(9),
        Err(GestureError::NoActiveStroke { device_id: 9 })
    );
    // No observable emission for any of the failures.
    assert!(engine.sink().is_empty());
}

#[test]
fn manipulation_preempts_every_active_stroke() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::Gesture {
                device: finger(1),
                position: pt(10.0, 10.0),
                gesture: SystemGesture::Drag,
            },
            RawEvent::Gesture {
                device: finger(2),
                position: pt(100.0, 10.0),
                gesture: SystemGesture::Drag,
            },
        ],
    );
    drain(&mut engine);

    let rotating = ManipulationDelta {
        rotation: 3.0,
        ..Default::default()
    };
    feed(&mut engine, &[RawEvent::ManipulationDelta { delta: rotating }]);

    let events = drain(&mut engine);
    let cancels = events
        .iter()
        .filter(|e| matches!(e, PaintEvent::StrokeCanceled { .. }))
        .count();
    assert_eq!(cancels, 2);
    assert_eq!(
        events.last(),
        Some(&PaintEvent::ManipulationStarted { delta: rotating })
    );
    assert_eq!(events.len(), 3);
    assert_eq!(engine.processor().active_stroke_count(), 0);
    assert!(engine.processor().is_manipulating());
}

#[test]
fn two_independent_drags_survive_a_translating_delta() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::Gesture {
                device: finger(1),
                position: pt(10.0, 10.0),
                gesture: SystemGesture::Drag,
            },
            RawEvent::Gesture {
                device: finger(2),
                position: pt(100.0, 10.0),
                gesture: SystemGesture::Drag,
            },
            // Pure translation: not enough to tell a two-finger gesture from
            // two independent single-finger drags.
            RawEvent::ManipulationDelta {
                delta: ManipulationDelta {
                    translation: (25.0, 0.0),
                    ..Default::default()
                },
            },
            RawEvent::ContactMove {
                device: finger(1),
                position: pt(11.0, 10.0),
            },
        ],
    );

    assert!(!engine.processor().is_manipulating());
    assert_eq!(engine.processor().active_stroke_count(), 2);
    let events = drain(&mut engine);
    assert!(!events.iter().any(|e| matches!(e, PaintEvent::ManipulationStarted { .. })));
}

#[test]
fn stale_move_after_preemption_is_dropped() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::Gesture {
                device: finger(1),
                position: pt(10.0, 10.0),
                gesture: SystemGesture::Drag,
            },
            RawEvent::ManipulationDelta {
                delta: ManipulationDelta {
                    rotation: 1.0,
                    ..Default::default()
                },
            },
        ],
    );
    drain(&mut engine);

    // The platform already queued a move for the canceled stroke.
    feed(
        &mut engine,
        &[RawEvent::ContactMove {
            device: finger(1),
            position: pt(12.0, 10.0),
        }],
    );
    assert!(engine.sink().is_empty());
}

#[test]
fn manipulation_completed_without_escalation_is_a_no_op() {
    let mut engine = create_engine();
    feed(&mut engine, &[RawEvent::ManipulationCompleted]);
    assert!(engine.sink().is_empty());
    assert!(!engine.processor().is_manipulating());
}

#[test]
fn manipulation_updates_and_end_are_forwarded_while_active() {
    let mut engine = create_engine();
    let rotating = ManipulationDelta {
        rotation: 1.0,
        ..Default::default()
    };
    feed(
        &mut engine,
        &[
            RawEvent::ManipulationDelta { delta: rotating },
            RawEvent::ManipulationDelta { delta: rotating },
            RawEvent::ManipulationCompleted,
        ],
    );

    let events = drain(&mut engine);
    assert_eq!(
        events,
        vec![
            PaintEvent::ManipulationStarted { delta: rotating },
            PaintEvent::ManipulationUpdated { delta: rotating },
            PaintEvent::ManipulationEnded,
        ]
    );
}

#[test]
fn lone_touch_tap_resolves_to_a_dot_after_the_window() {
    let mut engine = create_engine();
    let now = Instant::now();
    engine
        .handle(
            &RawEvent::Gesture {
                device: finger(3),
                position: pt(40.0, 40.0),
                gesture: SystemGesture::Tap,
            },
            now,
        )
        .unwrap();

    // Still pending inside the window.
    engine.pump_taps(now + Duration::from_millis(100));
    assert!(engine.sink().is_empty());

    let deadline = engine.next_tap_deadline().expect("window open");
    engine.pump_taps(deadline);
    assert_eq!(
        drain(&mut engine),
        vec![PaintEvent::DotPlaced {
            device: finger(3),
            position: pt(40.0, 40.0)
        }]
    );
    assert!(engine.next_tap_deadline().is_none());
}

#[test]
fn simultaneous_taps_become_one_multi_finger_tap() {
    let mut engine = create_engine();
    let now = Instant::now();
    for (id, x) in [(3, 40.0), (4, 80.0), (5, 120.0)] {
        engine
            .handle(
                &RawEvent::Gesture {
                    device: finger(id),
                    position: pt(x, 40.0),
                    gesture: SystemGesture::Tap,
                },
                now + Duration::from_millis(id as u64 * 10),
            )
            .unwrap();
    }

    let deadline = engine.next_tap_deadline().unwrap();
    engine.pump_taps(deadline);
    assert_eq!(drain(&mut engine), vec![PaintEvent::MultiFingerTap { fingers: 3 }]);
}

#[test]
fn mouse_release_within_threshold_places_a_dot() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::MouseDown {
                button: MouseButton::Left,
                position: pt(10.0, 10.0),
                from_stylus: false,
            },
            RawEvent::MouseMove {
                position: pt(10.0, 11.0),
                left_held: true,
                from_stylus: false,
            },
            RawEvent::MouseUp {
                button: MouseButton::Left,
                position: pt(10.0, 11.0),
                from_stylus: false,
            },
        ],
    );

    let events = drain(&mut engine);
    // The provisional stroke is rolled back, then the dot lands at the
    // press position.
    assert!(matches!(events[0], PaintEvent::StrokeStarted { .. }));
    assert!(!events.iter().any(|e| matches!(e, PaintEvent::StrokeCompleted { .. })));
    assert!(events.iter().any(|e| matches!(e, PaintEvent::StrokeCanceled { .. })));
    assert_eq!(
        events.last(),
        Some(&PaintEvent::DotPlaced {
            device: MOUSE_DEVICE,
            position: pt(10.0, 10.0)
        })
    );
    assert!(!engine.processor().has_stroke(MOUSE_DEVICE.id));
}

#[test]
fn mouse_release_beyond_threshold_completes_the_stroke() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::MouseDown {
                button: MouseButton::Left,
                position: pt(10.0, 10.0),
                from_stylus: false,
            },
            RawEvent::MouseMove {
                position: pt(30.0, 30.0),
                left_held: true,
                from_stylus: false,
            },
            RawEvent::MouseUp {
                button: MouseButton::Left,
                position: pt(50.0, 50.0),
                from_stylus: false,
            },
        ],
    );

    let events = drain(&mut engine);
    assert!(!events.iter().any(|e| matches!(e, PaintEvent::DotPlaced { .. })));
    let PaintEvent::StrokeCompleted { stroke } = events.last().unwrap() else {
        panic!("expected completion, got {:?}", events.last());
    };
    assert_eq!(stroke.points(), &[pt(10.0, 10.0), pt(30.0, 30.0), pt(50.0, 50.0)]);
}

#[test]
fn mouse_move_with_button_released_cancels() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::MouseDown {
                button: MouseButton::Left,
                position: pt(10.0, 10.0),
                from_stylus: false,
            },
            // The up event was lost; the next move reports the button gone.
            RawEvent::MouseMove {
                position: pt(30.0, 30.0),
                left_held: false,
                from_stylus: false,
            },
        ],
    );

    let events = drain(&mut engine);
    assert!(matches!(events.last(), Some(PaintEvent::StrokeCanceled { .. })));
    assert!(!engine.processor().has_stroke(MOUSE_DEVICE.id));
}

#[test]
fn stylus_emulated_mouse_events_are_ignored() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::MouseDown {
                button: MouseButton::Left,
                position: pt(10.0, 10.0),
                from_stylus: true,
            },
            RawEvent::MouseMove {
                position: pt(30.0, 30.0),
                left_held: true,
                from_stylus: true,
            },
            RawEvent::MouseUp {
                button: MouseButton::Left,
                position: pt(30.0, 30.0),
                from_stylus: true,
            },
        ],
    );
    assert!(engine.sink().is_empty());
}

#[test]
fn pen_tap_places_a_dot_immediately() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[RawEvent::Gesture {
            device: pen(2),
            position: pt(5.0, 6.0),
            gesture: SystemGesture::Tap,
        }],
    );
    assert_eq!(
        drain(&mut engine),
        vec![PaintEvent::DotPlaced {
            device: pen(2),
            position: pt(5.0, 6.0)
        }]
    );
}

#[test]
fn hold_pins_the_finger_and_its_release_ends_the_hold() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[RawEvent::Gesture {
            device: finger(6),
            position: pt(20.0, 20.0),
            gesture: SystemGesture::HoldEnter,
        }],
    );
    assert_eq!(engine.processor().held_finger(), Some(6));

    // While pinned, taps and drags from other fingers are suppressed.
    feed(
        &mut engine,
        &[
            RawEvent::Gesture {
                device: finger(7),
                position: pt(60.0, 20.0),
                gesture: SystemGesture::Tap,
            },
            RawEvent::Gesture {
                device: finger(8),
                position: pt(90.0, 20.0),
                gesture: SystemGesture::Drag,
            },
        ],
    );
    assert_eq!(engine.processor().active_stroke_count(), 0);
    assert!(engine.next_tap_deadline().is_none());

    // The held finger's up ends the hold instead of completing a stroke.
    feed(
        &mut engine,
        &[RawEvent::ContactUp {
            device: finger(6),
            position: pt(20.0, 20.0),
        }],
    );
    assert_eq!(engine.processor().held_finger(), None);
    assert_eq!(
        drain(&mut engine),
        vec![
            PaintEvent::HoldStarted {
                position: pt(20.0, 20.0)
            },
            PaintEvent::HoldEnded,
        ]
    );
}

#[test]
fn hold_suppresses_manipulation_escalation() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::Gesture {
                device: finger(6),
                position: pt(20.0, 20.0),
                gesture: SystemGesture::HoldEnter,
            },
            RawEvent::ManipulationDelta {
                delta: ManipulationDelta {
                    rotation: 2.0,
                    ..Default::default()
                },
            },
        ],
    );
    assert!(!engine.processor().is_manipulating());
    assert_eq!(engine.processor().held_finger(), Some(6));
}

#[test]
fn disabled_finger_painting_suppresses_touch_strokes_and_lone_dots() {
    let mut engine = create_engine();
    engine.set_finger_painting(false);
    let now = Instant::now();

    engine
        .handle(
            &RawEvent::Gesture {
                device: finger(1),
                position: pt(10.0, 10.0),
                gesture: SystemGesture::Drag,
            },
            now,
        )
        .unwrap();
    assert_eq!(engine.processor().active_stroke_count(), 0);

    engine
        .handle(
            &RawEvent::Gesture {
                device: finger(1),
                position: pt(10.0, 10.0),
                gesture: SystemGesture::Tap,
            },
            now,
        )
        .unwrap();
    let deadline = engine.next_tap_deadline().unwrap();
    engine.pump_taps(deadline);
    // The lone tap resolved, but with painting off it produces nothing.
    assert!(engine.sink().is_empty());

    // Multi-finger taps still work: they are navigation, not painting.
    for id in [2, 3] {
        engine
            .handle(
                &RawEvent::Gesture {
                    device: finger(id),
                    position: pt(10.0 * id as f64, 10.0),
                    gesture: SystemGesture::Tap,
                },
                now,
            )
            .unwrap();
    }
    let deadline = engine.next_tap_deadline().unwrap();
    engine.pump_taps(deadline);
    assert_eq!(drain(&mut engine), vec![PaintEvent::MultiFingerTap { fingers: 2 }]);
}

#[test]
fn disabled_finger_painting_escalates_plain_translation() {
    let mut engine = create_engine();
    engine.set_finger_painting(false);
    feed(
        &mut engine,
        &[RawEvent::ManipulationDelta {
            delta: ManipulationDelta {
                translation: (10.0, 0.0),
                ..Default::default()
            },
        }],
    );
    assert!(engine.processor().is_manipulating());
}

#[test]
fn pending_tap_defers_escalation_with_painting_disabled() {
    let mut engine = create_engine();
    engine.set_finger_painting(false);
    let now = Instant::now();
    engine
        .handle(
            &RawEvent::Gesture {
                device: finger(1),
                position: pt(10.0, 10.0),
                gesture: SystemGesture::Tap,
            },
            now,
        )
        .unwrap();

    // A tap is pending and the delta shows no rotation/scale: no escalation.
    engine
        .handle(
            &RawEvent::ManipulationDelta {
                delta: ManipulationDelta {
                    translation: (4.0, 0.0),
                    ..Default::default()
                },
            },
            now,
        )
        .unwrap();
    assert!(!engine.processor().is_manipulating());
}

#[test]
fn touch_and_pen_strokes_coexist() {
    let mut engine = create_engine();
    feed(
        &mut engine,
        &[
            RawEvent::ContactDown {
                device: pen(1),
                position: pt(10.0, 10.0),
            },
            RawEvent::Gesture {
                device: finger(2),
                position: pt(200.0, 10.0),
                gesture: SystemGesture::Drag,
            },
            RawEvent::ContactMove {
                device: pen(1),
                position: pt(11.0, 10.0),
            },
            RawEvent::ContactMove {
                device: finger(2),
                position: pt(201.0, 10.0),
            },
        ],
    );
    assert_eq!(engine.processor().active_stroke_count(), 2);

    feed(
        &mut engine,
        &[
            RawEvent::ContactUp {
                device: pen(1),
                position: pt(12.0, 10.0),
            },
            RawEvent::ContactUp {
                device: finger(2),
                position: pt(202.0, 10.0),
            },
        ],
    );
    let completions = drain(&mut engine)
        .into_iter()
        .filter_map(|e| match e {
            PaintEvent::StrokeCompleted { stroke } => Some(stroke),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(completions.len(), 2);
    assert_eq!(completions[0].points().len(), 3);
    assert_eq!(completions[1].points().len(), 3);
}
