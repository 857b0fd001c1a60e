use kinetics::{CollisionConfig, Engine, NullObserver, Vec3};

fn total_momentum(engine: &Engine) -> Vec3 {
    engine
        .bodies()
        .fold(Vec3::ZERO, |acc, (_, body)| acc + body.momentum())
}

fn total_energy(engine: &Engine) -> f32 {
    engine.bodies().map(|(_, body)| body.kinetic_energy()).sum()
}

/// A loose cluster of spheres and cubes with unequal masses, all heading
/// towards the origin.
fn cluster(config: CollisionConfig) -> anyhow::Result<Engine> {
    let mut engine = Engine::new(config)?;
    let layout = [
        (Vec3::new(-3.0, 0.2, 0.0), 1.0, true),
        (Vec3::new(3.0, -0.1, 0.3), 2.5, false),
        (Vec3::new(0.1, 3.0, -0.2), 0.7, true),
        (Vec3::new(-0.3, -3.0, 0.1), 4.0, false),
        (Vec3::new(0.2, 0.1, 3.0), 1.5, true),
        (Vec3::new(0.0, 0.4, -3.0), 3.0, false),
    ];
    for (code, (position, mass, is_sphere)) in (1..).zip(layout) {
        let velocity = position * -0.8;
        if is_sphere {
            engine.add_sphere(code, mass, position, velocity, 0.6)?;
        } else {
            engine.add_cube(code, mass, position, velocity, 1.0)?;
        }
    }
    Ok(engine)
}

fn assert_conserved(config: CollisionConfig) -> anyhow::Result<()> {
    let mut engine = cluster(config)?;
    let momentum = total_momentum(&engine);
    let energy = total_energy(&engine);

    let summary = engine.run(0.01, 600, &mut NullObserver)?;
    assert!(summary.collisions > 0, "cluster never collided");

    let drift = (total_momentum(&engine) - momentum).length();
    assert!(drift < 5e-3, "momentum drifted by {drift}");
    let energy_error = (total_energy(&engine) - energy).abs() / energy;
    assert!(energy_error < 1e-3, "energy changed by {energy_error}");
    Ok(())
}

#[test]
fn elastic_response_conserves_momentum_and_energy() -> anyhow::Result<()> {
    assert_conserved(CollisionConfig::default())
}

#[test]
fn geometric_models_conserve_momentum_and_energy() -> anyhow::Result<()> {
    assert_conserved(CollisionConfig::geometric())
}

#[test]
fn inelastic_response_loses_energy_but_not_momentum() -> anyhow::Result<()> {
    let config = CollisionConfig {
        restitution: 0.3,
        ignore_separating: true,
        ..CollisionConfig::geometric()
    };
    let mut engine = cluster(config)?;
    let momentum = total_momentum(&engine);
    let energy = total_energy(&engine);

    engine.run(0.01, 600, &mut NullObserver)?;
    assert!((total_momentum(&engine) - momentum).length() < 5e-3);
    assert!(total_energy(&engine) < energy);
    Ok(())
}

#[test]
fn immovable_cube_reflects_a_sphere() -> anyhow::Result<()> {
    for wall_first in [true, false] {
        let mut engine = Engine::new(CollisionConfig {
            ignore_separating: true,
            ..CollisionConfig::geometric()
        })?;
        let (wall, ball) = if wall_first {
            let wall = engine.add_static_cube(1, Vec3::ZERO, 1.0)?;
            let ball = engine.add_sphere(2, 1.0, Vec3::new(-1.2, 0.0, 0.0), Vec3::X, 0.5)?;
            (wall, ball)
        } else {
            let ball = engine.add_sphere(2, 1.0, Vec3::new(-1.2, 0.0, 0.0), Vec3::X, 0.5)?;
            let wall = engine.add_static_cube(1, Vec3::ZERO, 1.0)?;
            (wall, ball)
        };

        // separating contacts are skipped, so the ball is reflected once
        let summary = engine.run(0.01, 40, &mut NullObserver)?;
        assert!(summary.collisions >= 1);

        let wall = engine.body(wall).expect("wall is live");
        assert_eq!(wall.position, Vec3::ZERO);
        assert_eq!(wall.velocity, Vec3::ZERO);
        let ball = engine.body(ball).expect("ball is live");
        assert!((ball.velocity - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }
    Ok(())
}

/// A resting immovable body adds nothing to the totals, so a scene with a
/// wall still reports the finite momentum and energy of the moving bodies.
#[test]
fn static_bodies_keep_totals_finite() -> anyhow::Result<()> {
    let mut engine = Engine::new(CollisionConfig::default())?;
    engine.add_static_cube(1, Vec3::new(5.0, 0.0, 0.0), 1.0)?;
    engine.add_sphere(2, 2.0, Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), 0.5)?;

    assert_eq!(total_momentum(&engine), Vec3::new(0.0, 6.0, 0.0));
    assert_eq!(total_energy(&engine), 9.0);

    engine.run(0.01, 10, &mut NullObserver)?;
    assert!(total_momentum(&engine).length().is_finite());
    assert!(total_energy(&engine).is_finite());
    Ok(())
}
