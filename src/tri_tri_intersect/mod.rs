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

//! Symbolic triangle-triangle intersection.
//!
//! The intersection of two triangles is described by the features (vertex,
//! edge or interior) of each triangle that meet at every vertex of the
//! intersection polygon. No coordinate of the intersection is ever computed:
//! all decisions are signs of exact orientation predicates, so degenerate
//! configurations (a vertex exactly on an edge, coplanar overlaps) are
//! resolved consistently.
//!
//! Triangles sharing a vertex, an edge, or all three vertices are reported as
//! not intersecting, which is the normal state of adjacent triangles in a
//! mesh.

pub mod assemble;
pub mod classify;
pub mod degeneracy;
pub mod format;
pub mod region;
pub mod topology;

use log::{debug, trace, warn};

use crate::geometry::{Point3, Triangle3};

pub use assemble::MAX_PAIRS;
pub use classify::{PlaneSide, SignTriple, classify_vertices};
pub use degeneracy::{Degeneracy, degeneracy};
pub use format::region_to_string;
pub use region::{TriangleIntersection, TriangleIsect, TriangleRegion, Which};
pub use topology::{DispatchGap, Topology, dispatch};

use assemble::Assembler;
use topology::separated_by_axis;

/// Triangle-triangle intersection in symbolic form.
///
/// The input triangles must be non-degenerate (three distinct, non-collinear
/// vertices); see [`Triangle3::try_new`] to check this beforehand.
///
/// `intersects` is false and `pairs` empty when the triangles are disjoint,
/// or when they share one vertex, two vertices (an edge) or all three. Else
/// `pairs` holds between 1 and 6 pairs, the vertex set of the intersection
/// polygon in no particular order.
pub fn triangles_intersections(p: &[Point3; 3], q: &[Point3; 3]) -> TriangleIntersection {
    let mut pairs = Vec::with_capacity(MAX_PAIRS);
    let intersects = triangles_intersections_into(p, q, &mut pairs);
    TriangleIntersection { intersects, pairs }
}

/// Same as [`triangles_intersections`], writing the pairs into `result`
/// (cleared first) so that a buffer can be reused across calls.
pub fn triangles_intersections_into(
    p: &[Point3; 3],
    q: &[Point3; 3],
    result: &mut Vec<TriangleIsect>,
) -> bool {
    result.clear();
    let t1 = Triangle3::from(*p);
    let t2 = Triangle3::from(*q);

    if let Some(kind) = degeneracy(&t1, &t2) {
        debug!("triangles_intersections: {kind:?}, reporting no intersection");
        return false;
    }
    if separated_by_axis(&t1, &t2) {
        trace!("triangles_intersections: bounding boxes disjoint");
        return false;
    }

    let s1 = classify_vertices(&t2, &t1);
    let s2 = classify_vertices(&t1, &t2);
    let outcome = dispatch(&s1, &s2).and_then(|topology| {
        trace!("triangles_intersections: signs {s1:?} / {s2:?} -> {topology:?}");
        Assembler::new(&t1, &t2, s1, s2).assemble(topology, result)
    });

    if let Err(gap) = outcome {
        warn!("triangles_intersections: {gap}; reporting no intersection");
        result.clear();
        return false;
    }
    !result.is_empty()
}

/// Boolean-only form of [`triangles_intersections`].
pub fn triangles_intersect(p: &[Point3; 3], q: &[Point3; 3]) -> bool {
    let mut pairs = Vec::with_capacity(MAX_PAIRS);
    triangles_intersections_into(p, q, &mut pairs)
}

impl Triangle3 {
    /// Symbolic intersection with `other`, `self` being the first triangle.
    pub fn intersection(&self, other: &Triangle3) -> TriangleIntersection {
        triangles_intersections(&self.p, &other.p)
    }
}
