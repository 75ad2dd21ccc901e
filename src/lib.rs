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

//! Point-in-mesh containment for closed triangle meshes.
//!
//! A [`TriangleMesh`] owns its vertices and facets and answers
//! [`TriangleMesh::contains`] by casting a ray from the query point and
//! counting facet crossings with the Möller–Trumbore test. An odd count means
//! inside. The mesh must be watertight and free of self-intersections for the
//! answer to be meaningful.
//!
//! ```
//! use meshcontain::{Point3, TriangleMesh};
//!
//! let mesh = TriangleMesh::new(
//!     vec![
//!         Point3::xyz(0.0, 0.0, 0.0),
//!         Point3::xyz(1.0, 0.0, 0.0),
//!         Point3::xyz(0.0, 1.0, 0.0),
//!         Point3::xyz(0.0, 0.0, 1.0),
//!     ],
//!     vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]],
//! )
//! .unwrap();
//!
//! assert!(mesh.contains(&Point3::xyz(0.1, 0.1, 0.1)).unwrap());
//! assert!(!mesh.contains(&Point3::xyz(10.0, 10.0, 10.0)).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod numeric;
pub mod region;

pub use config::{ContainsConfig, DegeneratePolicy, RayDirection};
pub use error::{MeshError, MeshResult};
pub use geometry::{Aabb, Point3, Vector3};
pub use mesh::{Facet, TriangleMesh};
pub use numeric::Scalar;
pub use region::{BoundedField, FieldAccess, MeshRegion};
