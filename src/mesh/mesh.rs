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
    config::ContainsConfig,
    error::{MeshError, MeshResult},
    geometry::{aabb::Aabb, point::Point3},
    mesh::{basic_types::Facet, point_in_mesh},
    numeric::scalar::Scalar,
};

/// An immutable triangle mesh.
///
/// Containment queries assume the surface is closed and free of
/// self-intersections. That is not checked; only facet indices are.
#[derive(Debug, Clone)]
pub struct TriangleMesh<T: Scalar> {
    vertices: Vec<Point3<T>>,
    facets: Vec<Facet>,
    bounds: Aabb<T, 3>,
}

impl<T: Scalar> TriangleMesh<T> {
    /// Takes ownership of `vertices` and `facets`.
    pub fn new(vertices: Vec<Point3<T>>, facets: Vec<Facet>) -> MeshResult<Self> {
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshError::NonFiniteVertex { index });
        }

        let bounds = Aabb::from_point_set(&vertices).ok_or(MeshError::EmptyMesh)?;

        let vertex_count = vertices.len();
        for (facet, tri) in facets.iter().enumerate() {
            for (corner, &index) in tri.iter().enumerate() {
                if index >= vertex_count {
                    return Err(MeshError::FacetIndexOutOfRange {
                        facet,
                        corner,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        log::debug!(
            "built triangle mesh with {} vertices and {} facets",
            vertex_count,
            facets.len()
        );

        Ok(Self {
            vertices,
            facets,
            bounds,
        })
    }

    /// Copies borrowed input; later changes to the caller's storage do not
    /// affect the mesh.
    pub fn from_slices(vertices: &[Point3<T>], facets: &[Facet]) -> MeshResult<Self> {
        Self::new(vertices.to_vec(), facets.to_vec())
    }

    pub fn vertex(&self, k: usize) -> MeshResult<&Point3<T>> {
        self.vertices
            .get(k)
            .ok_or(MeshError::VertexIndexOutOfRange {
                index: k,
                vertex_count: self.vertices.len(),
            })
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn bounding_box(&self) -> &Aabb<T, 3> {
        &self.bounds
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Corner positions of facet `f`.
    pub fn triangle(&self, f: usize) -> Option<[&Point3<T>; 3]> {
        self.facets.get(f).map(|tri| self.facet_vertices(tri))
    }

    /// Indices were checked in [`TriangleMesh::new`].
    pub(crate) fn facet_vertices(&self, tri: &Facet) -> [&Point3<T>; 3] {
        [
            &self.vertices[tri[0]],
            &self.vertices[tri[1]],
            &self.vertices[tri[2]],
        ]
    }

    /// Parity test with the default [`ContainsConfig`].
    pub fn contains(&self, p: &Point3<T>) -> MeshResult<bool> {
        point_in_mesh::contains(self, p, &ContainsConfig::default())
    }

    pub fn contains_with(&self, p: &Point3<T>, config: &ContainsConfig<T>) -> MeshResult<bool> {
        point_in_mesh::contains(self, p, config)
    }
}
