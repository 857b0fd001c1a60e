//! # Engine Builder Methods
//!
//! Shorthands for constructing a body and registering it in one call.

use crate::arena::BodyHandle;
use crate::body::RigidBody;
use crate::error::PhysicsError;
use crate::shapes::Shape;
use crate::types::Vec3;
use crate::Engine;

impl Engine {
    /// Add a sphere with an explicit mass
    pub fn add_sphere(
        &mut self,
        code: i32,
        mass: f32,
        position: Vec3,
        velocity: Vec3,
        radius: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        self.add_body(RigidBody::sphere(code, mass, position, velocity, radius)?)
    }

    /// Add an axis-aligned cube with an explicit mass
    pub fn add_cube(
        &mut self,
        code: i32,
        mass: f32,
        position: Vec3,
        velocity: Vec3,
        side: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        self.add_body(RigidBody::cube(code, mass, position, velocity, side)?)
    }

    /// Add a body whose mass follows from `density` and the shape's volume
    pub fn add_with_density(
        &mut self,
        code: i32,
        density: f32,
        position: Vec3,
        velocity: Vec3,
        shape: Shape,
    ) -> Result<BodyHandle, PhysicsError> {
        self.add_body(RigidBody::with_density(
            code, density, position, velocity, shape,
        )?)
    }

    /// Add an immovable cube, e.g. a wall or floor block
    pub fn add_static_cube(
        &mut self,
        code: i32,
        position: Vec3,
        side: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        self.add_cube(code, f32::INFINITY, position, Vec3::ZERO, side)
    }
}
