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

//! Exact, symbolic triangle-triangle intersection in 3D.
//!
//! Given two non-degenerate triangles, [`triangles_intersections`] reports
//! whether they intersect and, if so, the vertices of the intersection
//! polygon. Each vertex is labelled by the pair of features (vertex, edge or
//! interior, one from each triangle) meeting there. All decisions are signs
//! of adaptive orientation predicates that are exact for `f64` input.
//!
//! ```
//! use trisect::{Point3, TriangleRegion::*, TriangleIsect, triangles_intersections};
//!
//! let p = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let q = [
//!     Point3::new(0.25, 0.25, -1.0),
//!     Point3::new(0.25, 0.25, 1.0),
//!     Point3::new(5.0, 5.0, 0.0),
//! ];
//! let isect = triangles_intersections(&p, &q);
//! assert!(isect.intersects);
//! assert!(isect.pairs.contains(&TriangleIsect(T1T, T2E2)));
//! ```

pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod tri_tri_intersect;

pub use geometry::{Point2, Point3, Triangle3, TriangleError};
pub use numeric::Sign;
pub use tri_tri_intersect::{
    TriangleIntersection, TriangleIsect, TriangleRegion, region_to_string, triangles_intersect,
    triangles_intersections, triangles_intersections_into,
};
