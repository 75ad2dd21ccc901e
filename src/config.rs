// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Containment query configuration.
//!
//! The historical behaviour casts each ray from the query point along the
//! point's own position vector. That is kept as the default; callers that
//! want a direction independent of where the coordinate origin sits can pick
//! a fixed or seeded one instead.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    error::{MeshError, MeshResult},
    geometry::{
        point::Point3,
        util::{fallback_direction, random_unit_vector},
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

/// How the ray direction is chosen for a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayDirection<T: Scalar> {
    /// `d = p - origin`, the query point's own coordinates.
    ThroughPoint,
    /// The same direction for every query; must be at least `epsilon` long.
    Fixed(Vector3<T>),
    /// A unit vector drawn from a `StdRng` seeded with this value. The same
    /// seed always gives the same direction.
    Seeded(u64),
}

/// What to do when the derived direction is shorter than the tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Use [`ContainsConfig::fallback_direction`].
    #[default]
    Fallback,
    /// Fail with [`MeshError::DegenerateQuery`].
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainsConfig<T: Scalar> {
    pub direction: RayDirection<T>,
    pub degenerate: DegeneratePolicy,
    pub fallback_direction: Vector3<T>,
    /// Threshold for parallel rays, hits at the origin and degenerate directions.
    pub epsilon: T,
    /// Count facet crossings on the rayon pool.
    pub parallel: bool,
}

impl<T: Scalar> Default for ContainsConfig<T> {
    fn default() -> Self {
        Self {
            direction: RayDirection::ThroughPoint,
            degenerate: DegeneratePolicy::Fallback,
            fallback_direction: fallback_direction(),
            epsilon: T::tolerance(),
            parallel: false,
        }
    }
}

impl<T: Scalar> ContainsConfig<T> {
    pub fn new(
        direction: RayDirection<T>,
        degenerate: DegeneratePolicy,
        epsilon: T,
    ) -> MeshResult<Self> {
        let cfg = Self {
            direction,
            degenerate,
            epsilon,
            ..Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    // The `with_*` setters do not validate; queries call `validate` first.
    pub fn with_direction(mut self, direction: RayDirection<T>) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_degenerate_policy(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn with_fallback_direction(mut self, fallback: Vector3<T>) -> Self {
        self.fallback_direction = fallback;
        self
    }

    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> MeshResult<()> {
        if !self.epsilon.is_finite() || self.epsilon <= T::zero() {
            return Err(MeshError::InvalidTolerance(self.epsilon.as_f64()));
        }
        if self.fallback_direction.is_degenerate(self.epsilon) {
            return Err(MeshError::DegenerateDirection {
                direction: self.fallback_direction.coords.map(|c| c.as_f64()),
            });
        }
        if let RayDirection::Fixed(d) = &self.direction
            && d.is_degenerate(self.epsilon)
        {
            return Err(MeshError::DegenerateDirection {
                direction: d.coords.map(|c| c.as_f64()),
            });
        }
        Ok(())
    }

    /// Direction for a ray cast from `p`, after applying the degenerate policy.
    ///
    /// Assumes `self` has passed [`ContainsConfig::validate`].
    pub fn resolve_direction(&self, p: &Point3<T>) -> MeshResult<Vector3<T>> {
        let d = match self.direction {
            RayDirection::ThroughPoint => p.as_vector(),
            RayDirection::Fixed(d) => d,
            RayDirection::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                random_unit_vector(&mut rng)
            }
        };

        if !d.is_degenerate(self.epsilon) {
            return Ok(d);
        }

        match self.degenerate {
            DegeneratePolicy::Fallback => {
                log::debug!(
                    "degenerate ray direction {:?} for query {:?}, using fallback {:?}",
                    d.coords,
                    p.coords,
                    self.fallback_direction.coords
                );
                Ok(self.fallback_direction)
            }
            DegeneratePolicy::Error => Err(MeshError::DegenerateQuery {
                point: p.coords.map(|c| c.as_f64()),
            }),
        }
    }
}
