//! # Rigid Bodies
//!
//! A [`RigidBody`] is a point mass carrying a [`Shape`]. Bodies have no
//! orientation; cubes stay axis-aligned for their whole lifetime.
//!
//! Mass may be `f32::INFINITY`, which makes the body immovable under impulse
//! resolution (its inverse mass is zero). Any other non-positive or NaN mass
//! is rejected when the body is built.

use crate::error::BodyError;
use crate::shapes::{Shape, ShapeKind};
use crate::types::{BodyState, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    code: i32,
    mass: f32,
    inv_mass: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    shape: Shape,
}

impl RigidBody {
    pub fn new(
        code: i32,
        mass: f32,
        position: Vec3,
        velocity: Vec3,
        shape: Shape,
    ) -> Result<Self, BodyError> {
        shape.validate()?;
        if mass.is_nan() || mass <= 0.0 {
            return Err(BodyError::NonPositiveMass(mass));
        }
        Ok(Self {
            code,
            mass,
            inv_mass: mass.recip(),
            position,
            velocity,
            shape,
        })
    }

    pub fn sphere(
        code: i32,
        mass: f32,
        position: Vec3,
        velocity: Vec3,
        radius: f32,
    ) -> Result<Self, BodyError> {
        Self::new(code, mass, position, velocity, Shape::Sphere { radius })
    }

    pub fn cube(
        code: i32,
        mass: f32,
        position: Vec3,
        velocity: Vec3,
        side: f32,
    ) -> Result<Self, BodyError> {
        Self::new(code, mass, position, velocity, Shape::Cube { side })
    }

    /// Builds a body whose mass is `density * shape.volume()`.
    pub fn with_density(
        code: i32,
        density: f32,
        position: Vec3,
        velocity: Vec3,
        shape: Shape,
    ) -> Result<Self, BodyError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(BodyError::NonPositiveDensity(density));
        }
        shape.validate()?;
        let volume = shape.volume();
        let mass = density * volume;
        if !mass.is_finite() {
            return Err(BodyError::MassOverflow { density, volume });
        }
        Self::new(code, mass, position, velocity, shape)
    }

    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    pub(crate) fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Zero for infinite-mass bodies.
    #[must_use]
    pub const fn inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.shape.volume()
    }

    /// Zero for a body at rest, including an immovable one.
    #[must_use]
    pub fn momentum(&self) -> Vec3 {
        if self.velocity == Vec3::ZERO {
            return Vec3::ZERO;
        }
        self.velocity * self.mass
    }

    /// Zero for a body at rest, including an immovable one.
    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        if self.velocity == Vec3::ZERO {
            return 0.0;
        }
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Explicit Euler step; no forces act on the body.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    #[must_use]
    pub fn state(&self) -> BodyState {
        let (extent, kind) = match self.shape {
            Shape::Sphere { radius } => (radius, 0),
            Shape::Cube { side } => (side * 0.5, 1),
        };
        BodyState {
            position: self.position.to_array(),
            extent,
            velocity: self.velocity.to_array(),
            kind,
        }
    }
}
