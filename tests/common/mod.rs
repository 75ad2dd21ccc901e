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

#![allow(dead_code)]

use meshcontain::{Facet, Point3, TriangleMesh};

pub fn tetrahedron() -> TriangleMesh<f64> {
    TriangleMesh::new(
        vec![
            Point3::xyz(0.0, 0.0, 0.0),
            Point3::xyz(1.0, 0.0, 0.0),
            Point3::xyz(0.0, 1.0, 0.0),
            Point3::xyz(0.0, 0.0, 1.0),
        ],
        vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]],
    )
    .unwrap()
}

/// Closed cube spanning `[-h, h]^3`, two triangles per face.
///
/// Vertex `i` sits at `(±h, ±h, ±h)` with bit 0, 1, 2 of `i` selecting +h
/// on x, y, z respectively.
pub fn cube(h: f64) -> TriangleMesh<f64> {
    let vertices: Vec<Point3<f64>> = (0..8)
        .map(|i| {
            let c = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
            Point3::xyz(c(0), c(1), c(2))
        })
        .collect();
    let facets: Vec<Facet> = vec![
        // x = -h
        [0, 4, 6],
        [0, 6, 2],
        // x = +h
        [1, 3, 5],
        [3, 7, 5],
        // y = -h
        [0, 1, 5],
        [0, 5, 4],
        // y = +h
        [2, 6, 7],
        [2, 7, 3],
        // z = -h
        [0, 2, 3],
        [0, 3, 1],
        // z = +h
        [4, 5, 7],
        [4, 7, 6],
    ];
    TriangleMesh::new(vertices, facets).unwrap()
}

pub fn inside_cube(p: &Point3<f64>, h: f64) -> bool {
    p.iter().all(|c| c.abs() < h)
}
