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

use crate::{
    geometry::{
        point::Point3,
        vector::{Cross3, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Möller–Trumbore ray/triangle test.
///
/// Returns the ray parameter `t` of the hit `origin + t * dir` when the ray
/// meets the triangle `[v0, v1, v2]` strictly ahead of its origin (`t > eps`).
/// Rays whose determinant is within `eps` of zero are treated as parallel to
/// the triangle's plane and never hit.
///
/// The barycentric bounds are inclusive, so a ray through a shared edge or
/// vertex may be reported for more than one triangle. This is deterministic
/// for identical inputs but not resolved further.
pub fn ray_triangle_intersection<T: Scalar>(
    origin: &Point3<T>,
    dir: &Vector3<T>,
    triangle: [&Point3<T>; 3],
    eps: T,
) -> Option<T> {
    let zero = T::zero();
    let one = T::one();

    let [v0, v1, v2] = triangle;

    // Triangle edges
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = dir.cross(&edge2);

    // Determinant
    let a = edge1.dot(&h);
    if a.abs() < eps {
        return None; // Ray is parallel to triangle
    }

    let f = one / a;

    // Vector from v0 to ray origin
    let s = origin - v0;

    let u = f * s.dot(&h);
    if u < zero || u > one {
        return None;
    }

    let q = s.cross(&edge1);

    let v = f * dir.dot(&q);
    if v < zero || u + v > one {
        return None;
    }

    // Distance along ray
    let t = f * edge2.dot(&q);
    if t > eps { Some(t) } else { None }
}

/// Half-line hit test with the default tolerance.
pub fn ray_intersects_triangle<T: Scalar>(
    origin: &Point3<T>,
    dir: &Vector3<T>,
    v0: &Point3<T>,
    v1: &Point3<T>,
    v2: &Point3<T>,
) -> bool {
    ray_triangle_intersection(origin, dir, [v0, v1, v2], T::tolerance()).is_some()
}
