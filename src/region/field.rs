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
    error::MeshError,
    geometry::{aabb::Aabb, point::Point},
    mesh::{mesh::TriangleMesh, point_in_mesh},
    numeric::scalar::Scalar,
};

/// A field over continuous N-dimensional space, bounded by a box.
///
/// Points outside [`BoundedField::bounds`] may still be sampled.
pub trait BoundedField<T: Scalar, const N: usize> {
    type Value;
    type Error;

    fn bounds(&self) -> &Aabb<T, N>;

    fn sample(&self, p: &Point<T, N>) -> Result<Self::Value, Self::Error>;

    /// A cursor over this field starting at the origin.
    fn access(&self) -> FieldAccess<'_, Self, T, N>
    where
        Self: Sized,
    {
        FieldAccess::new(self)
    }
}

/// Positionable sampler over a [`BoundedField`].
///
/// Each consumer keeps its own cursor; the field itself is shared.
#[derive(Debug)]
pub struct FieldAccess<'a, F, T: Scalar, const N: usize> {
    field: &'a F,
    position: Point<T, N>,
}

impl<F, T: Scalar, const N: usize> Clone for FieldAccess<'_, F, T, N> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            position: self.position,
        }
    }
}

impl<'a, F, T, const N: usize> FieldAccess<'a, F, T, N>
where
    F: BoundedField<T, N>,
    T: Scalar,
{
    pub fn new(field: &'a F) -> Self {
        Self {
            field,
            position: Point::origin(),
        }
    }

    pub fn at(field: &'a F, position: Point<T, N>) -> Self {
        Self { field, position }
    }

    pub fn field(&self) -> &'a F {
        self.field
    }

    pub fn position(&self) -> &Point<T, N> {
        &self.position
    }

    pub fn set_position(&mut self, position: Point<T, N>) {
        self.position = position;
    }

    /// Shifts the cursor by `delta` along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn move_by(&mut self, axis: usize, delta: T) {
        self.position[axis] = self.position[axis] + delta;
    }

    pub fn get(&self) -> Result<F::Value, F::Error> {
        self.field.sample(&self.position)
    }
}

impl<T: Scalar> BoundedField<T, 3> for TriangleMesh<T> {
    type Value = bool;
    type Error = MeshError;

    fn bounds(&self) -> &Aabb<T, 3> {
        self.bounding_box()
    }

    fn sample(&self, p: &Point<T, 3>) -> Result<bool, MeshError> {
        self.contains(p)
    }
}

/// A mesh paired with the configuration its samples are classified with.
#[derive(Debug, Clone)]
pub struct MeshRegion<'a, T: Scalar> {
    mesh: &'a TriangleMesh<T>,
    config: ContainsConfig<T>,
}

impl<'a, T: Scalar> MeshRegion<'a, T> {
    pub fn new(mesh: &'a TriangleMesh<T>, config: ContainsConfig<T>) -> Result<Self, MeshError> {
        config.validate()?;
        Ok(Self { mesh, config })
    }

    pub fn mesh(&self) -> &'a TriangleMesh<T> {
        self.mesh
    }

    pub fn config(&self) -> &ContainsConfig<T> {
        &self.config
    }
}

impl<T: Scalar> BoundedField<T, 3> for MeshRegion<'_, T> {
    type Value = bool;
    type Error = MeshError;

    fn bounds(&self) -> &Aabb<T, 3> {
        self.mesh.bounding_box()
    }

    fn sample(&self, p: &Point<T, 3>) -> Result<bool, MeshError> {
        point_in_mesh::contains(self.mesh, p, &self.config)
    }
}

impl<T: Scalar> TriangleMesh<T> {
    /// View of this mesh as a field classified with `config`.
    pub fn region(&self, config: ContainsConfig<T>) -> Result<MeshRegion<'_, T>, MeshError> {
        MeshRegion::new(self, config)
    }
}
