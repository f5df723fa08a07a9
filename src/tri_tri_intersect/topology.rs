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

use crate::geometry::Triangle3;
use crate::tri_tri_intersect::classify::{PlaneSide, SignTriple};
use crate::tri_tri_intersect::region::Which;

/// Internal inconsistencies. Unreachable for valid input; the public entry
/// points report them as "no intersection".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchGap {
    #[error("sign patterns {0:?} and {1:?} match no topology")]
    UnmappedSigns(SignTriple, SignTriple),
    #[error("{0:?} triangle has no non-degenerate projection")]
    DegenerateTriangle(Which),
    #[error("{0} distinct intersection points exceed the polygon bound")]
    TooManyPairs(usize),
}

/// Shape of the contact between two triangles, decided from signs only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// A plane or a coordinate axis separates the triangles.
    Separated,
    /// Both triangles lie in the same plane.
    Coplanar,
    /// Each triangle properly crosses the other's plane: vertex `isolated1`
    /// of the first and `isolated2` of the second are alone on their side.
    Crossing { isolated1: usize, isolated2: usize },
    /// Some vertex lies exactly on the other plane.
    Touching,
}

/// Maps the two sign triples to a topology. `first` classifies the first
/// triangle against the second one's plane, `second` the converse.
///
/// Fails for sign combinations no pair of non-degenerate triangles can
/// produce.
pub fn dispatch(first: &SignTriple, second: &SignTriple) -> Result<Topology, DispatchGap> {
    use PlaneSide::*;

    match (first.side(), second.side()) {
        (StrictlyOneSide(_), _) | (_, StrictlyOneSide(_)) => Ok(Topology::Separated),
        (InPlane, InPlane) => Ok(Topology::Coplanar),
        // one plane containing the other triangle means the planes coincide
        (InPlane, _) | (_, InPlane) => Err(DispatchGap::UnmappedSigns(*first, *second)),
        (Straddles { isolated: isolated1 }, Straddles { isolated: isolated2 }) => {
            Ok(Topology::Crossing {
                isolated1,
                isolated2,
            })
        }
        (Straddles { .. } | Touches, Touches) | (Touches, Straddles { .. }) => {
            Ok(Topology::Touching)
        }
    }
}

/// True if the bounding boxes of the two triangles are disjoint along some
/// coordinate axis. Only compares input coordinates, so it is exact.
pub fn separated_by_axis(t1: &Triangle3, t2: &Triangle3) -> bool {
    (0..3).any(|axis| {
        let (min1, max1) = extent(t1, axis);
        let (min2, max2) = extent(t2, axis);
        max1 < min2 || max2 < min1
    })
}

fn extent(t: &Triangle3, axis: usize) -> (f64, f64) {
    let v = t.p.map(|p| p[axis]);
    (v[0].min(v[1]).min(v[2]), v[0].max(v[1]).max(v[2]))
}
