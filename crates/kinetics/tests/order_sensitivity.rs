//! Collisions are resolved pair by pair in slot order, and each resolution is
//! visible to the pairs tested after it in the same tick.

use kinetics::{BodyHandle, CollisionConfig, Engine, EventLog, Vec3};

const RADIUS: f32 = 1.0;

/// Three touching spheres on the X axis, the left one moving right.
/// Returns the handles ordered left to right.
fn cradle(register_left_first: bool) -> anyhow::Result<(Engine, [BodyHandle; 3])> {
    let mut engine = Engine::new(CollisionConfig::default())?;
    let specs = [
        (1, Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
        (2, Vec3::new(1.5, 0.0, 0.0), Vec3::ZERO),
        (3, Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO),
    ];
    let mut handles = Vec::new();
    if register_left_first {
        for (code, pos, vel) in specs {
            handles.push(engine.add_sphere(code, 1.0, pos, vel, RADIUS)?);
        }
    } else {
        for (code, pos, vel) in specs.into_iter().rev() {
            handles.push(engine.add_sphere(code, 1.0, pos, vel, RADIUS)?);
        }
        handles.reverse();
    }
    Ok((engine, [handles[0], handles[1], handles[2]]))
}

fn velocities_x(engine: &Engine, handles: [BodyHandle; 3]) -> [f32; 3] {
    handles.map(|h| engine.body(h).map_or(f32::NAN, |b| b.velocity.x))
}

/// Left-to-right registration resolves (left, middle) first, so the
/// middle sphere's new velocity is passed on to the right sphere in the
/// same tick.
#[test]
fn left_first_registration_propagates_through_the_row() -> anyhow::Result<()> {
    let (mut engine, handles) = cradle(true)?;
    let mut log = EventLog::new();
    engine.step_observed(0.0, &mut log)?;

    assert_eq!(velocities_x(&engine, handles), [0.0, 0.0, 1.0]);
    let codes: Vec<_> = log
        .collisions
        .iter()
        .map(|e| (e.first_code, e.second_code))
        .collect();
    assert_eq!(codes, vec![(1, 2), (2, 3)]);
    // second resolution saw the middle sphere already moving
    assert!((log.collisions[1].impulse - 1.0).abs() < 1e-6);
    Ok(())
}

/// Right-to-left registration tests (right, middle) while both are still at
/// rest, so the impulse there is zero and the middle sphere keeps the
/// velocity it receives afterwards.
#[test]
fn right_first_registration_stops_in_the_middle() -> anyhow::Result<()> {
    let (mut engine, handles) = cradle(false)?;
    let mut log = EventLog::new();
    engine.step_observed(0.0, &mut log)?;

    assert_eq!(velocities_x(&engine, handles), [0.0, 1.0, 0.0]);
    let codes: Vec<_> = log
        .collisions
        .iter()
        .map(|e| (e.first_code, e.second_code))
        .collect();
    assert_eq!(codes, vec![(3, 2), (2, 1)]);
    assert_eq!(log.collisions[0].impulse, 0.0);
    Ok(())
}

/// The same registration order always gives the same result.
#[test]
fn outcome_is_deterministic_for_a_fixed_order() -> anyhow::Result<()> {
    let mut results = Vec::new();
    for _ in 0..3 {
        let (mut engine, handles) = cradle(true)?;
        engine.run(0.01, 25, &mut kinetics::NullObserver)?;
        results.push(handles.map(|h| {
            let body = engine.body(h).expect("live handle");
            (body.position, body.velocity)
        }));
    }
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

/// Pair tests within a tick happen in slot order: (0,1), (0,2), (1,2).
#[test]
fn pairs_are_visited_in_slot_order() -> anyhow::Result<()> {
    let (mut engine, _) = cradle(true)?;
    let handles = engine.handles();
    let mut log = EventLog::new();
    engine.step_observed(0.0, &mut log)?;
    let visited: Vec<_> = log.pairs.iter().map(|&(_, a, b, _)| (a, b)).collect();
    assert_eq!(
        visited,
        vec![
            (handles[0], handles[1]),
            (handles[0], handles[2]),
            (handles[1], handles[2]),
        ]
    );
    Ok(())
}
