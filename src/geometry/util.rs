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

use rand::Rng;

use crate::{
    geometry::vector::{Vector3, VectorOps},
    numeric::scalar::Scalar,
};

/// Direction used when a query's own direction collapses to zero.
pub const FALLBACK_DIRECTION: [f64; 3] = [1.0, 1e-3, 1e-3];

pub fn fallback_direction<T: Scalar>() -> Vector3<T> {
    Vector3::new(FALLBACK_DIRECTION.map(T::from_f64))
}

/// Uniformly distributed unit vector, by rejection sampling in the unit ball.
pub fn random_unit_vector<T: Scalar, R: Rng + ?Sized>(rng: &mut R) -> Vector3<T> {
    loop {
        let c: [f64; 3] = [
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        ];
        let n2 = c[0] * c[0] + c[1] * c[1] + c[2] * c[2];
        if n2 > 1e-6 && n2 <= 1.0 {
            let v = Vector3::new(c.map(T::from_f64));
            if let Some(unit) = v.normalized() {
                return unit;
            }
        }
    }
}
