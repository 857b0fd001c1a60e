#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! # Kinetics
//!
//! A small rigid-body collision kernel for spheres and axis-aligned cubes.
//!
//! Each tick the [`Engine`] moves every body along its velocity, tests every
//! pair of bodies for overlap and, for each overlapping pair, exchanges a
//! single frictionless impulse along a contact normal. There is no gravity,
//! rotation, broad phase or contact persistence.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`RigidBody`] stores mass, position, velocity and a
//!     [`Shape`]. Invalid masses and extents are rejected on construction.
//! -   **Engine:** [`Engine`] owns the bodies in a generational arena and
//!     hands out [`BodyHandle`]s.
//! -   **Collision:** the [`collision`] module holds the narrow-phase tests,
//!     contact normals and impulse response, configured by
//!     [`CollisionConfig`].
//! -   **Observers:** [`StepObserver`] receives per-body, per-pair and
//!     per-tick callbacks. [`TracingObserver`] logs them through `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use kinetics::{CollisionConfig, Engine, Vec3};
//!
//! let mut engine = Engine::new(CollisionConfig::default())?;
//! let a = engine.add_sphere(1, 1.0, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 1.0)?;
//! engine.add_sphere(2, 1.0, Vec3::new(1.5, 0.0, 0.0), Vec3::ZERO, 1.0)?;
//!
//! let report = engine.step(0.0)?;
//! assert_eq!(report.collisions, 1);
//! assert_eq!(engine.body(a).map(|b| b.velocity), Some(Vec3::ZERO));
//! # Ok::<(), kinetics::PhysicsError>(())
//! ```

mod arena;
mod body;
mod builder;
pub mod collision;
mod error;
mod integrator;
pub mod observer;
mod shapes;
pub mod simulation;
pub mod types;

pub use arena::BodyHandle;
pub use body::RigidBody;
pub use collision::{
    BoxOverlap, CollisionConfig, NormalModel, PositionalCorrection, SphereOverlap,
};
pub use error::{BodyError, PhysicsError};
pub use observer::{Both, CollisionEvent, EventLog, NullObserver, StepObserver, TracingObserver};
pub use shapes::{Shape, ShapeKind};
pub use simulation::{Engine, RunSummary, TickReport};
pub use types::{BodyState, Vec3};
