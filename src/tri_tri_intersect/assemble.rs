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

//! Symbolic assembly of the intersection polygon.
//!
//! Every vertex of the intersection of two triangles is a point where a
//! feature of one triangle meets the other triangle: a vertex contained in
//! the other triangle, or a point where an edge crosses the other triangle.
//! Each such point is labelled with the pair of features that meet there and
//! the labels are deduplicated. Labels only depend on exact signs, so one
//! point always receives the same label, whichever edge discovered it.

use crate::geometry::{Point2, Point3, Projection, Triangle3};
use crate::kernel::{orient2d, orient3d};
use crate::numeric::Sign;
use crate::tri_tri_intersect::classify::SignTriple;
use crate::tri_tri_intersect::region::{TriangleIsect, TriangleRegion, Which};
use crate::tri_tri_intersect::topology::{DispatchGap, Topology};

/// The intersection of two triangles is a convex polygon with at most six
/// vertices.
pub const MAX_PAIRS: usize = 6;

pub struct Assembler<'a> {
    tris: [&'a Triangle3; 2],
    /// `signs[k]`: vertices of triangle `k` against the plane of the other.
    signs: [SignTriple; 2],
}

impl<'a> Assembler<'a> {
    pub fn new(t1: &'a Triangle3, t2: &'a Triangle3, s1: SignTriple, s2: SignTriple) -> Self {
        Self {
            tris: [t1, t2],
            signs: [s1, s2],
        }
    }

    fn tri(&self, which: Which) -> &'a Triangle3 {
        match which {
            Which::First => self.tris[0],
            Which::Second => self.tris[1],
        }
    }

    fn signs(&self, which: Which) -> &SignTriple {
        match which {
            Which::First => &self.signs[0],
            Which::Second => &self.signs[1],
        }
    }

    fn projection(&self, which: Which) -> Result<Projection, DispatchGap> {
        self.tri(which)
            .projection()
            .ok_or(DispatchGap::DegenerateTriangle(which))
    }

    /// Appends the sorted, deduplicated pairs for `topology` to `out`.
    pub fn assemble(
        &self,
        topology: Topology,
        out: &mut Vec<TriangleIsect>,
    ) -> Result<(), DispatchGap> {
        let start = out.len();
        match topology {
            Topology::Separated => {}
            Topology::Coplanar => self.coplanar(out)?,
            Topology::Crossing {
                isolated1,
                isolated2,
            } => {
                // only the two edges at the isolated vertex reach the other plane
                for (which, isolated) in [(Which::First, isolated1), (Which::Second, isolated2)] {
                    for e in [(isolated + 1) % 3, (isolated + 2) % 3] {
                        self.crossing_edge(which, e, out);
                    }
                }
            }
            Topology::Touching => {
                for which in [Which::First, Which::Second] {
                    for e in 0..3 {
                        self.edge_vs_triangle(which, e, out)?;
                    }
                }
            }
        }

        let mut found = out.split_off(start);
        found.sort_unstable();
        found.dedup();
        if found.len() > MAX_PAIRS {
            return Err(DispatchGap::TooManyPairs(found.len()));
        }
        out.extend(found);
        Ok(())
    }

    /// Edge `e` of `mine` has endpoints strictly on both sides of the other
    /// plane.
    fn crossing_edge(&self, mine: Which, e: usize, out: &mut Vec<TriangleIsect>) {
        let (a, b) = self.tri(mine).edge(e);
        let theirs = mine.other();
        if let Some(r) = locate_crossing(self.tri(theirs), theirs, a, b) {
            out.push(TriangleIsect::ordered(TriangleRegion::edge(mine, e), r));
        }
    }

    fn edge_vs_triangle(
        &self,
        mine: Which,
        e: usize,
        out: &mut Vec<TriangleIsect>,
    ) -> Result<(), DispatchGap> {
        let signs = self.signs(mine);
        let (ia, ib) = ((e + 1) % 3, (e + 2) % 3);
        match (signs[ia], signs[ib]) {
            (Sign::Zero, Sign::Zero) => self.in_plane_edge(mine, e, out)?,
            (Sign::Zero, _) => self.in_plane_vertex(mine, ia, out)?,
            (_, Sign::Zero) => self.in_plane_vertex(mine, ib, out)?,
            (sa, sb) if sa == sb => {}
            _ => self.crossing_edge(mine, e, out),
        }
        Ok(())
    }

    /// Vertex `i` of `mine` lies in the other plane.
    fn in_plane_vertex(
        &self,
        mine: Which,
        i: usize,
        out: &mut Vec<TriangleIsect>,
    ) -> Result<(), DispatchGap> {
        let theirs = mine.other();
        let proj = self.projection(theirs)?;
        self.locate_vertex(mine, i, &proj, out);
        Ok(())
    }

    fn locate_vertex(
        &self,
        mine: Which,
        i: usize,
        proj: &Projection,
        out: &mut Vec<TriangleIsect>,
    ) {
        let theirs = mine.other();
        let p = self.tri(mine).vertex(i);
        if let Some(r) = locate_in_plane(self.tri(theirs), theirs, proj, p) {
            out.push(TriangleIsect::ordered(TriangleRegion::vertex(mine, i), r));
        }
    }

    /// Edge `e` of `mine` lies in the other plane while the triangles
    /// themselves are not coplanar: clip it against the other triangle.
    fn in_plane_edge(
        &self,
        mine: Which,
        e: usize,
        out: &mut Vec<TriangleIsect>,
    ) -> Result<(), DispatchGap> {
        let theirs = mine.other();
        let other = self.tri(theirs);
        let proj = self.projection(theirs)?;

        let (ia, ib) = ((e + 1) % 3, (e + 2) % 3);
        self.locate_vertex(mine, ia, &proj, out);
        self.locate_vertex(mine, ib, &proj, out);

        let (pa, pb) = self.tri(mine).edge(e);
        let a = proj.project(pa);
        let b = proj.project(pb);
        let edge = TriangleRegion::edge(mine, e);

        for k in 0..3 {
            let (c, d) = other.edge(k);
            if segments_cross(&a, &b, &proj.project(c), &proj.project(d)) {
                out.push(TriangleIsect::ordered(edge, TriangleRegion::edge(theirs, k)));
            }
        }
        for j in 0..3 {
            let q = proj.project(other.vertex(j));
            if orient2d(&a, &b, &q).is_zero() && q.strictly_between(&a, &b) {
                out.push(TriangleIsect::ordered(edge, TriangleRegion::vertex(theirs, j)));
            }
        }
        Ok(())
    }

    /// Both triangles in one plane: vertices contained in the other triangle
    /// plus proper edge-edge crossings.
    fn coplanar(&self, out: &mut Vec<TriangleIsect>) -> Result<(), DispatchGap> {
        let proj1 = self.projection(Which::First)?;
        let proj2 = self.projection(Which::Second)?;

        for i in 0..3 {
            self.locate_vertex(Which::First, i, &proj2, out);
            self.locate_vertex(Which::Second, i, &proj1, out);
        }

        // any projection that keeps one triangle non-degenerate keeps the
        // whole common plane non-degenerate
        let (t1, t2) = (self.tris[0], self.tris[1]);
        for e1 in 0..3 {
            let (a, b) = t1.edge(e1);
            let (a, b) = (proj1.project(a), proj1.project(b));
            for e2 in 0..3 {
                let (c, d) = t2.edge(e2);
                if segments_cross(&a, &b, &proj1.project(c), &proj1.project(d)) {
                    out.push(TriangleIsect(
                        TriangleRegion::edge(Which::First, e1),
                        TriangleRegion::edge(Which::Second, e2),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Maps barycentric signs (up to a common factor) to a region of `tri`.
/// `signs[i]` is the sign of the coordinate attached to vertex `i`.
fn region_from_signs(which: Which, signs: [Sign; 3]) -> Option<TriangleRegion> {
    if signs.contains(&Sign::Positive) && signs.contains(&Sign::Negative) {
        return None;
    }
    match signs.iter().filter(|s| s.is_zero()).count() {
        0 => Some(TriangleRegion::interior(which)),
        1 => signs
            .iter()
            .position(|s| s.is_zero())
            .map(|k| TriangleRegion::edge(which, k)),
        2 => signs
            .iter()
            .position(|s| s.is_strict())
            .map(|i| TriangleRegion::vertex(which, i)),
        _ => None,
    }
}

/// Region of `tri` containing `p`, which lies in the plane of `tri`.
fn locate_in_plane(
    tri: &Triangle3,
    which: Which,
    proj: &Projection,
    p: &Point3,
) -> Option<TriangleRegion> {
    let t = tri.p.map(|v| proj.project(&v));
    let q = proj.project(p);
    let signs =
        [0, 1, 2].map(|i| orient2d(&t[(i + 1) % 3], &t[(i + 2) % 3], &q) * proj.orientation);
    region_from_signs(which, signs)
}

/// Region of `tri` hit by the segment `ab`, whose endpoints lie strictly on
/// opposite sides of the plane of `tri`.
///
/// `orient3d(a, b, q[i+1], q[i+2])` is the barycentric coordinate of the
/// crossing point for vertex `i`, times a factor common to all three.
fn locate_crossing(
    tri: &Triangle3,
    which: Which,
    a: &Point3,
    b: &Point3,
) -> Option<TriangleRegion> {
    let signs = [0, 1, 2].map(|i| {
        let (c, d) = tri.edge(i);
        orient3d(a, b, c, d)
    });
    region_from_signs(which, signs)
}

/// Segments `ab` and `cd` cross at a point interior to both.
fn segments_cross(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    orient2d(a, b, c) * orient2d(a, b, d) == Sign::Negative
        && orient2d(c, d, a) * orient2d(c, d, b) == Sign::Negative
}
