//! # Engine
//!
//! [`Engine`] owns every body and advances them one tick at a time:
//!
//! 1. integrate all positions by `dt`,
//! 2. test every unordered pair `(i, j)`, `i < j`, in slot order,
//! 3. resolve each colliding pair immediately.
//!
//! Step 3 mutates velocities in place, so a pair tested later in the same
//! tick sees the velocities produced by earlier pairs. The outcome therefore
//! depends on pair order, and that order is fixed: ascending slot index for
//! the first body, then ascending slot index for the second.

use crate::arena::{BodyHandle, BodySet};
use crate::body::RigidBody;
use crate::collision::{
    apply_positional_correction, bodies_overlap, collision_normal, resolve_impulse,
    CollisionConfig,
};
use crate::error::PhysicsError;
use crate::integrator::integrate_bodies;
use crate::observer::{CollisionEvent, NullObserver, StepObserver};
use crate::types::BodyState;

/// What happened during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based tick number.
    pub tick: u64,
    pub pairs_tested: usize,
    pub collisions: usize,
}

/// Totals over several ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub pairs_tested: usize,
    pub collisions: usize,
}

impl RunSummary {
    /// Adds one tick's counts.
    pub fn absorb(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.pairs_tested += report.pairs_tested;
        self.collisions += report.collisions;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Engine {
    bodies: BodySet,
    config: CollisionConfig,
    tick: u64,
}

impl Engine {
    pub fn new(config: CollisionConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            bodies: BodySet::default(),
            config,
            tick: 0,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CollisionConfig) -> Result<(), PhysicsError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Number of ticks advanced so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.tick
    }

    /// Registers a body. Codes must be unique among live bodies.
    pub fn add_body(&mut self, body: RigidBody) -> Result<BodyHandle, PhysicsError> {
        if self.find_by_code(body.code()).is_some() {
            return Err(PhysicsError::DuplicateBodyCode(body.code()));
        }
        Ok(self.bodies.insert(body))
    }

    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody, PhysicsError> {
        self.bodies
            .remove(handle)
            .ok_or(PhysicsError::StaleHandle(handle))
    }

    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    /// Mutable access for repositioning a body or changing its velocity.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn set_body_code(&mut self, handle: BodyHandle, code: i32) -> Result<(), PhysicsError> {
        match self.find_by_code(code) {
            Some(owner) if owner == handle => return Ok(()),
            Some(_) => return Err(PhysicsError::DuplicateBodyCode(code)),
            None => {}
        }
        self.bodies
            .get_mut(handle)
            .ok_or(PhysicsError::StaleHandle(handle))?
            .set_code(code);
        Ok(())
    }

    #[must_use]
    pub fn find_by_code(&self, code: i32) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .find(|(_, body)| body.code() == code)
            .map(|(handle, _)| handle)
    }

    /// Live handles in pair-iteration order.
    #[must_use]
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.bodies.handles()
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bodies.len() == 0
    }

    /// Per-body render records in slot order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.bodies.iter().map(|(_, body)| body.state()).collect()
    }

    /// [`Engine::snapshot`] as raw bytes, ready for a GPU instance buffer.
    #[must_use]
    pub fn snapshot_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.snapshot()).to_vec()
    }

    pub fn step(&mut self, dt: f32) -> Result<TickReport, PhysicsError> {
        self.step_observed(dt, &mut NullObserver)
    }

    pub fn step_observed<O: StepObserver + ?Sized>(
        &mut self,
        dt: f32,
        observer: &mut O,
    ) -> Result<TickReport, PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        self.tick += 1;
        let tick = self.tick;

        integrate_bodies(&mut self.bodies, dt);
        for (handle, body) in self.bodies.iter() {
            observer.on_integrated(tick, handle, body);
        }

        let mut report = TickReport {
            tick,
            ..TickReport::default()
        };
        let handles = self.bodies.handles();
        for (i, &first) in handles.iter().enumerate() {
            for &second in &handles[i + 1..] {
                let Some((a, b)) = self.bodies.pair_mut(first, second) else {
                    continue;
                };
                let colliding = bodies_overlap(a, b, &self.config);
                report.pairs_tested += 1;
                observer.on_pair(tick, first, second, colliding);
                if !colliding {
                    continue;
                }

                let normal = collision_normal(a, b, self.config.normal);
                let impulse = resolve_impulse(a, b, normal, &self.config);
                let depth = self
                    .config
                    .positional_correction
                    .map(|correction| apply_positional_correction(a, b, normal, correction));
                report.collisions += 1;
                observer.on_collision(&CollisionEvent {
                    tick,
                    first,
                    second,
                    first_code: a.code(),
                    second_code: b.code(),
                    normal,
                    impulse,
                    depth,
                });
            }
        }

        observer.on_tick(&report);
        Ok(report)
    }

    /// Advances `steps` ticks of `dt`, stopping at the first error.
    pub fn run<O: StepObserver + ?Sized>(
        &mut self,
        dt: f32,
        steps: usize,
        observer: &mut O,
    ) -> Result<RunSummary, PhysicsError> {
        let mut summary = RunSummary::default();
        for _ in 0..steps {
            let report = self.step_observed(dt, observer)?;
            summary.absorb(&report);
        }
        Ok(summary)
    }
}
