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

use rayon::prelude::*;

use crate::{
    config::ContainsConfig,
    error::{MeshError, MeshResult},
    geometry::{intersection::ray_triangle_intersection, point::Point3, vector::Vector3},
    mesh::{basic_types::RayCastResult, mesh::TriangleMesh},
    numeric::scalar::Scalar,
};

/// Is `p` inside the solid bounded by `mesh`?
///
/// Casts one ray from `p` in the direction chosen by `config` and applies the
/// parity rule to the number of facets it crosses. Points on the surface may
/// classify either way; identical inputs always give the same answer.
pub fn contains<T: Scalar>(
    mesh: &TriangleMesh<T>,
    p: &Point3<T>,
    config: &ContainsConfig<T>,
) -> MeshResult<bool> {
    Ok(cast_ray(mesh, p, config)?.is_inside())
}

/// Number of facets crossed by the ray `config` chooses for `p`.
///
/// Fails with [`MeshError::InvalidTolerance`] or
/// [`MeshError::DegenerateDirection`] when `config` does not validate.
pub fn cast_ray<T: Scalar>(
    mesh: &TriangleMesh<T>,
    p: &Point3<T>,
    config: &ContainsConfig<T>,
) -> MeshResult<RayCastResult> {
    config.validate()?;

    if !p.is_finite() {
        return Err(MeshError::NonFiniteQuery {
            point: p.coords.map(|c| c.as_f64()),
        });
    }

    let dir = config.resolve_direction(p)?;
    let crossings = crossing_count(mesh, p, &dir, config.epsilon, config.parallel);

    log::trace!(
        "ray from {:?} along {:?} crossed {} facets",
        p.coords,
        dir.coords,
        crossings
    );

    Ok(RayCastResult { crossings })
}

/// Counts facets hit strictly ahead of `origin` along `dir`.
pub fn crossing_count<T: Scalar>(
    mesh: &TriangleMesh<T>,
    origin: &Point3<T>,
    dir: &Vector3<T>,
    eps: T,
    parallel: bool,
) -> usize {
    let hits = |tri: &[usize; 3]| {
        ray_triangle_intersection(origin, dir, mesh.facet_vertices(tri), eps).is_some()
    };

    if parallel {
        mesh.facets().par_iter().filter(|tri| hits(*tri)).count()
    } else {
        mesh.facets().iter().filter(|tri| hits(*tri)).count()
    }
}
