//! # Integration
//!
//! Explicit Euler position update. No forces are modeled, so velocities are
//! only changed by collision response. Bodies are independent here, which
//! lets the `parallel` feature spread the pass over rayon's pool.

use crate::arena::BodySet;

#[cfg(not(feature = "parallel"))]
pub(crate) fn integrate_bodies(bodies: &mut BodySet, dt: f32) {
    for body in bodies.bodies_mut() {
        body.integrate(dt);
    }
}

#[cfg(feature = "parallel")]
pub(crate) fn integrate_bodies(bodies: &mut BodySet, dt: f32) {
    use rayon::iter::ParallelIterator;
    bodies.par_bodies_mut().for_each(|body| body.integrate(dt));
}
