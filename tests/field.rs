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

mod common;

use meshcontain::{
    Aabb, BoundedField, ContainsConfig, FieldAccess, MeshError, Point3, RayDirection, Vector3,
};

/// Counts grid cell centres of `field.bounds()` whose sample is true.
fn count_inside<F>(field: &F, cells: usize) -> usize
where
    F: BoundedField<f64, 3, Value = bool, Error = MeshError>,
{
    let bb = *field.bounds();
    let step: [f64; 3] = std::array::from_fn(|i| bb.extent(i) / cells as f64);
    let mut cursor = field.access();
    let mut inside = 0;
    for i in 0..cells {
        for j in 0..cells {
            for k in 0..cells {
                cursor.set_position(Point3::xyz(
                    bb.min[0] + (i as f64 + 0.5) * step[0],
                    bb.min[1] + (j as f64 + 0.5) * step[1],
                    bb.min[2] + (k as f64 + 0.5) * step[2],
                ));
                if cursor.get().unwrap() {
                    inside += 1;
                }
            }
        }
    }
    inside
}

#[test]
fn test_mesh_is_a_bounded_field() {
    let cube = common::cube(1.0);
    assert_eq!(
        cube.bounds(),
        &Aabb::new(Point3::xyz(-1.0, -1.0, -1.0), Point3::xyz(1.0, 1.0, 1.0))
    );
    assert!(cube.sample(&Point3::xyz(0.2, -0.3, 0.4)).unwrap());
    assert!(!cube.sample(&Point3::xyz(2.2, -0.3, 0.4)).unwrap());
}

#[test]
fn test_region_samples_with_its_config() {
    let cube = common::cube(1.0);
    let region = cube
        .region(
            ContainsConfig::default()
                .with_direction(RayDirection::Fixed(Vector3::xyz(0.31, 0.57, 0.76))),
        )
        .unwrap();

    assert_eq!(region.bounds(), cube.bounding_box());

    // 4 cells per axis over [-1, 1]: all 64 centres are interior.
    assert_eq!(count_inside(&region, 4), 64);

    for x in [-1.5, -0.5, 0.5, 1.5] {
        for y in [-1.5, -0.5, 0.5, 1.5] {
            for z in [-1.5, -0.5, 0.5, 1.5] {
                let p = Point3::xyz(x, y, z);
                assert_eq!(
                    region.sample(&p).unwrap(),
                    common::inside_cube(&p, 1.0),
                    "sample at {:?}",
                    p.coords
                );
            }
        }
    }
}

#[test]
fn test_region_rejects_invalid_config() {
    let cube = common::cube(1.0);
    let err = cube
        .region(ContainsConfig::default().with_epsilon(-1.0))
        .unwrap_err();
    assert_eq!(err, MeshError::InvalidTolerance(-1.0));
}

#[test]
fn test_field_access_cursor() {
    let tetra = common::tetrahedron();
    let mut cursor = FieldAccess::at(&tetra, Point3::xyz(0.1, 0.1, 0.1));
    assert!(cursor.get().unwrap());

    let snapshot = cursor.clone();
    cursor.move_by(0, 5.0);
    assert_eq!(cursor.position(), &Point3::xyz(5.1, 0.1, 0.1));
    assert!(!cursor.get().unwrap());

    // Clones are independent cursors over the same field.
    assert!(snapshot.get().unwrap());
    assert!(std::ptr::eq(snapshot.field(), cursor.field()));
}

#[test]
#[should_panic]
fn test_field_access_move_by_rejects_bad_axis() {
    let tetra = common::tetrahedron();
    let mut cursor = tetra.access();
    cursor.move_by(3, 1.0);
}

#[test]
fn test_default_access_starts_at_origin() {
    let tetra = common::tetrahedron();
    let cursor = tetra.access();
    assert_eq!(cursor.position(), &Point3::origin());
    // Boundary point: any answer, but not an error.
    assert!(cursor.get().is_ok());
}
