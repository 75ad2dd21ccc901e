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

use thiserror::Error;

/// Errors raised while building a mesh or classifying a point against it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A mesh needs at least one vertex to have a bounding box.
    #[error("mesh has no vertices")]
    EmptyMesh,

    #[error(
        "facet {facet} corner {corner} references vertex {index}, but the mesh has {vertex_count} vertices"
    )]
    FacetIndexOutOfRange {
        facet: usize,
        corner: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("vertex index {index} out of range for {vertex_count} vertices")]
    VertexIndexOutOfRange { index: usize, vertex_count: usize },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("query point {point:?} has a non-finite coordinate")]
    NonFiniteQuery { point: [f64; 3] },

    /// The ray direction derived for the query is (near) zero and the
    /// configured policy forbids substituting a fallback.
    #[error("ray direction for query point {point:?} is degenerate")]
    DegenerateQuery { point: [f64; 3] },

    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),

    #[error("configured direction {direction:?} is degenerate")]
    DegenerateDirection { direction: [f64; 3] },
}

pub type MeshResult<T> = Result<T, MeshError>;
