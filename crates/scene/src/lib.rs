#![deny(clippy::all, clippy::pedantic)]
//! # Scene Files
//!
//! JSON description of a collision setup: an optional [`CollisionConfig`]
//! and a list of bodies tagged by `shape`.
//!
//! ```json
//! {
//!   "config": { "sphere_overlap": "squared_sum" },
//!   "bodies": [
//!     { "shape": "sphere", "code": 1, "mass": 1.0, "radius": 1.0,
//!       "position": [0, 0, 0], "velocity": [1, 0, 0] },
//!     { "shape": "cube", "code": 2, "density": 2.0, "side": 1.0,
//!       "position": [3, 0, 0] }
//!   ]
//! }
//! ```
//!
//! Each body gives exactly one of `mass`, `density` or `"fixed": true`.
//! `velocity` defaults to zero and is ignored for fixed bodies. Bodies are
//! registered in file order, which is also the order pairs are resolved in.

use anyhow::{bail, Context, Result};
use kinetics::{CollisionConfig, Engine, RigidBody, Shape, Vec3};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: CollisionConfig,
    pub bodies: Vec<BodyDef>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum BodyDef {
    Sphere {
        code: i32,
        radius: f32,
        #[serde(default)]
        mass: Option<f32>,
        #[serde(default)]
        density: Option<f32>,
        #[serde(default)]
        fixed: bool,
        position: Vec3,
        #[serde(default)]
        velocity: Vec3,
    },
    Cube {
        code: i32,
        side: f32,
        #[serde(default)]
        mass: Option<f32>,
        #[serde(default)]
        density: Option<f32>,
        #[serde(default)]
        fixed: bool,
        position: Vec3,
        #[serde(default)]
        velocity: Vec3,
    },
}

/// How a body's mass is given in the file.
enum MassSpec {
    Mass(f32),
    Density(f32),
    Fixed,
}

impl BodyDef {
    #[must_use]
    pub fn code(&self) -> i32 {
        match *self {
            BodyDef::Sphere { code, .. } | BodyDef::Cube { code, .. } => code,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        match *self {
            BodyDef::Sphere { radius, .. } => Shape::Sphere { radius },
            BodyDef::Cube { side, .. } => Shape::Cube { side },
        }
    }

    fn mass_spec(&self) -> Result<MassSpec> {
        let (mass, density, fixed) = match *self {
            BodyDef::Sphere {
                mass,
                density,
                fixed,
                ..
            }
            | BodyDef::Cube {
                mass,
                density,
                fixed,
                ..
            } => (mass, density, fixed),
        };
        match (mass, density, fixed) {
            (Some(mass), None, false) => Ok(MassSpec::Mass(mass)),
            (None, Some(density), false) => Ok(MassSpec::Density(density)),
            (None, None, true) => Ok(MassSpec::Fixed),
            (None, None, false) => bail!("needs one of `mass`, `density` or `fixed`"),
            _ => bail!("`mass`, `density` and `fixed` are mutually exclusive"),
        }
    }

    /// Validates the definition and builds the body.
    pub fn to_body(&self) -> Result<RigidBody> {
        let (position, velocity) = match *self {
            BodyDef::Sphere {
                position, velocity, ..
            }
            | BodyDef::Cube {
                position, velocity, ..
            } => (position, velocity),
        };
        let shape = self.shape();
        let body = match self.mass_spec()? {
            MassSpec::Mass(mass) => RigidBody::new(self.code(), mass, position, velocity, shape),
            MassSpec::Density(density) => {
                RigidBody::with_density(self.code(), density, position, velocity, shape)
            }
            MassSpec::Fixed => {
                RigidBody::new(self.code(), f32::INFINITY, position, Vec3::ZERO, shape)
            }
        }?;
        Ok(body)
    }
}

impl FromStr for Scene {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json).context("malformed scene JSON")
    }
}

impl Scene {
    /// Two unit spheres on the X axis, the left one moving right into the
    /// other.
    #[must_use]
    pub fn demo() -> Self {
        Scene {
            config: CollisionConfig::default(),
            bodies: vec![
                BodyDef::Sphere {
                    code: 1,
                    radius: 1.0,
                    mass: Some(1.0),
                    density: None,
                    fixed: false,
                    position: Vec3::ZERO,
                    velocity: Vec3::new(1.0, 0.0, 0.0),
                },
                BodyDef::Sphere {
                    code: 2,
                    radius: 1.0,
                    mass: Some(1.0),
                    density: None,
                    fixed: false,
                    position: Vec3::new(1.5, 0.0, 0.0),
                    velocity: Vec3::ZERO,
                },
            ],
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        json.parse::<Self>()
            .with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Builds an engine holding every body, in file order.
    pub fn into_engine(self) -> Result<Engine> {
        let mut engine = Engine::new(self.config).context("invalid collision config")?;
        for (index, def) in self.bodies.iter().enumerate() {
            let body = def
                .to_body()
                .with_context(|| format!("body #{index} (code {})", def.code()))?;
            engine
                .add_body(body)
                .with_context(|| format!("body #{index} (code {})", def.code()))?;
        }
        Ok(engine)
    }
}
