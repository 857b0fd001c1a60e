//! # Step Observers
//!
//! The engine performs no I/O of its own. Callers that want progress output
//! or a record of what happened during a tick pass a [`StepObserver`] to
//! [`Engine::step_observed`](crate::Engine::step_observed).
//!
//! Callbacks arrive in tick order: one `on_integrated` per live body, then
//! one `on_pair` per tested pair (followed by `on_collision` when the pair
//! collided), then a single `on_tick`.

use tracing::{debug, trace};

use crate::arena::BodyHandle;
use crate::body::RigidBody;
use crate::simulation::TickReport;
use crate::types::Vec3;

/// A resolved collision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    pub tick: u64,
    pub first: BodyHandle,
    pub second: BodyHandle,
    pub first_code: i32,
    pub second_code: i32,
    /// Never points from `first` towards `second`.
    pub normal: Vec3,
    /// Signed impulse magnitude applied along `normal`.
    pub impulse: f32,
    /// Penetration measured along the normal, when positional correction ran.
    pub depth: Option<f32>,
}

pub trait StepObserver {
    fn on_integrated(&mut self, _tick: u64, _handle: BodyHandle, _body: &RigidBody) {}

    fn on_pair(&mut self, _tick: u64, _first: BodyHandle, _second: BodyHandle, _colliding: bool) {}

    fn on_collision(&mut self, _event: &CollisionEvent) {}

    fn on_tick(&mut self, _report: &TickReport) {}
}

/// Ignores every callback.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {}

/// Forwards callbacks to `tracing`: body state and pair results at `TRACE`,
/// collisions and tick summaries at `DEBUG`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_integrated(&mut self, tick: u64, _handle: BodyHandle, body: &RigidBody) {
        trace!(
            tick,
            code = body.code(),
            position = ?body.position,
            velocity = ?body.velocity,
            "body integrated"
        );
    }

    fn on_pair(&mut self, tick: u64, first: BodyHandle, second: BodyHandle, colliding: bool) {
        trace!(tick, ?first, ?second, colliding, "pair tested");
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        debug!(
            tick = event.tick,
            first = event.first_code,
            second = event.second_code,
            normal = ?event.normal,
            impulse = event.impulse,
            "collision resolved"
        );
    }

    fn on_tick(&mut self, report: &TickReport) {
        debug!(
            tick = report.tick,
            pairs = report.pairs_tested,
            collisions = report.collisions,
            "tick complete"
        );
    }
}

/// Records collisions and tick reports in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub collisions: Vec<CollisionEvent>,
    pub pairs: Vec<(u64, BodyHandle, BodyHandle, bool)>,
    pub ticks: Vec<TickReport>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.collisions.clear();
        self.pairs.clear();
        self.ticks.clear();
    }

    /// Collisions recorded during `tick`.
    pub fn collisions_in(&self, tick: u64) -> impl Iterator<Item = &CollisionEvent> + '_ {
        self.collisions.iter().filter(move |event| event.tick == tick)
    }
}

impl StepObserver for EventLog {
    fn on_pair(&mut self, tick: u64, first: BodyHandle, second: BodyHandle, colliding: bool) {
        self.pairs.push((tick, first, second, colliding));
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        self.collisions.push(*event);
    }

    fn on_tick(&mut self, report: &TickReport) {
        self.ticks.push(*report);
    }
}

impl<T: StepObserver + ?Sized> StepObserver for &mut T {
    fn on_integrated(&mut self, tick: u64, handle: BodyHandle, body: &RigidBody) {
        (**self).on_integrated(tick, handle, body);
    }

    fn on_pair(&mut self, tick: u64, first: BodyHandle, second: BodyHandle, colliding: bool) {
        (**self).on_pair(tick, first, second, colliding);
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        (**self).on_collision(event);
    }

    fn on_tick(&mut self, report: &TickReport) {
        (**self).on_tick(report);
    }
}

/// Fans every callback out to two observers, `first` before `second`.
#[derive(Debug, Default)]
pub struct Both<A, B>(pub A, pub B);

impl<A: StepObserver, B: StepObserver> StepObserver for Both<A, B> {
    fn on_integrated(&mut self, tick: u64, handle: BodyHandle, body: &RigidBody) {
        self.0.on_integrated(tick, handle, body);
        self.1.on_integrated(tick, handle, body);
    }

    fn on_pair(&mut self, tick: u64, first: BodyHandle, second: BodyHandle, colliding: bool) {
        self.0.on_pair(tick, first, second, colliding);
        self.1.on_pair(tick, first, second, colliding);
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        self.0.on_collision(event);
        self.1.on_collision(event);
    }

    fn on_tick(&mut self, report: &TickReport) {
        self.0.on_tick(report);
        self.1.on_tick(report);
    }
}
