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

use meshcontain::geometry::{Point3, Vector3, ray_intersects_triangle, ray_triangle_intersection};

use approx::assert_relative_eq;

const EPS: f64 = 1e-5;

fn unit_triangle() -> [Point3<f64>; 3] {
    [
        Point3::xyz(0.0, 0.0, 0.0),
        Point3::xyz(1.0, 0.0, 0.0),
        Point3::xyz(0.0, 1.0, 0.0),
    ]
}

#[test]
fn test_ray_hits_triangle_ahead() {
    let [a, b, c] = unit_triangle();
    let origin = Point3::xyz(0.25, 0.25, 1.0);
    let dir = Vector3::xyz(0.0, 0.0, -1.0);

    let t = ray_triangle_intersection(&origin, &dir, [&a, &b, &c], EPS).unwrap();
    assert_relative_eq!(t, 1.0);
    assert!(ray_intersects_triangle(&origin, &dir, &a, &b, &c));

    // Winding does not matter.
    assert!(ray_intersects_triangle(&origin, &dir, &a, &c, &b));
}

#[test]
fn test_ray_scale_changes_parameter_only() {
    let [a, b, c] = unit_triangle();
    let origin = Point3::xyz(0.25, 0.25, 1.0);
    let dir = Vector3::xyz(0.0, 0.0, -4.0);

    let t = ray_triangle_intersection(&origin, &dir, [&a, &b, &c], EPS).unwrap();
    assert_relative_eq!(t, 0.25);
}

#[test]
fn test_triangle_behind_origin() {
    let [a, b, c] = unit_triangle();
    let origin = Point3::xyz(0.25, 0.25, 1.0);
    let dir = Vector3::xyz(0.0, 0.0, 1.0);
    assert_eq!(ray_triangle_intersection(&origin, &dir, [&a, &b, &c], EPS), None);
}

#[test]
fn test_origin_on_triangle_plane() {
    let [a, b, c] = unit_triangle();
    let dir = Vector3::xyz(0.0, 0.0, -1.0);

    // t == 0
    let on_plane = Point3::xyz(0.25, 0.25, 0.0);
    assert!(!ray_intersects_triangle(&on_plane, &dir, &a, &b, &c));

    // 0 < t <= eps
    let just_above = Point3::xyz(0.25, 0.25, 1e-6);
    assert!(!ray_intersects_triangle(&just_above, &dir, &a, &b, &c));
}

#[test]
fn test_parallel_ray() {
    let [a, b, c] = unit_triangle();
    let origin = Point3::xyz(-1.0, 0.25, 0.0);
    let dir = Vector3::xyz(1.0, 0.0, 0.0);
    assert!(!ray_intersects_triangle(&origin, &dir, &a, &b, &c));

    // Nearly parallel: determinant below the tolerance.
    let origin = Point3::xyz(-1.0, 0.25, 1e-7);
    let dir = Vector3::xyz(1.0, 0.0, -1e-6);
    assert!(!ray_intersects_triangle(&origin, &dir, &a, &b, &c));
}

#[test]
fn test_ray_misses_outside_barycentric_range() {
    let [a, b, c] = unit_triangle();
    let dir = Vector3::xyz(0.0, 0.0, -1.0);

    for (x, y) in [(2.0, 0.1), (-0.1, 0.1), (0.1, -0.1), (0.6, 0.6), (0.1, 1.5)] {
        let origin = Point3::xyz(x, y, 1.0);
        assert!(
            !ray_intersects_triangle(&origin, &dir, &a, &b, &c),
            "ray through ({x}, {y}) should miss"
        );
    }
}

#[test]
fn test_edge_hit_is_deterministic() {
    let [a, b, c] = unit_triangle();
    let origin = Point3::xyz(0.5, 0.5, 1.0);
    let dir = Vector3::xyz(0.0, 0.0, -1.0);
    let first = ray_intersects_triangle(&origin, &dir, &a, &b, &c);
    for _ in 0..16 {
        assert_eq!(ray_intersects_triangle(&origin, &dir, &a, &b, &c), first);
    }
}

#[test]
fn test_f32_triangle() {
    let a = Point3::<f32>::xyz(0.0, 0.0, 0.0);
    let b = Point3::xyz(1.0, 0.0, 0.0);
    let c = Point3::xyz(0.0, 1.0, 0.0);
    let origin = Point3::xyz(0.2, 0.3, -2.0);
    let dir = Vector3::xyz(0.0, 0.0, 1.0);

    let t = ray_triangle_intersection(&origin, &dir, [&a, &b, &c], 1e-5).unwrap();
    assert_relative_eq!(t, 2.0f32);
}
