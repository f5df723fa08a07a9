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
use crate::kernel::orient3d;
use crate::numeric::Sign;

/// How a triangle sits relative to the supporting plane of another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneSide {
    /// All three vertices strictly on the same side.
    StrictlyOneSide(Sign),
    /// All three vertices in the plane.
    InPlane,
    /// No vertex in the plane, vertex `isolated` alone on its side.
    Straddles { isolated: usize },
    /// One or two vertices in the plane.
    Touches,
}

/// Orientation of each vertex of a triangle against a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignTriple(pub [Sign; 3]);

impl SignTriple {
    pub fn zeros(&self) -> usize {
        self.0.iter().filter(|s| s.is_zero()).count()
    }

    pub fn side(&self) -> PlaneSide {
        let [s0, s1, s2] = self.0;
        let pos = self.0.contains(&Sign::Positive);
        let neg = self.0.contains(&Sign::Negative);

        match self.zeros() {
            3 => PlaneSide::InPlane,
            0 if pos && neg => {
                let isolated = if s0 == s1 {
                    2
                } else if s0 == s2 {
                    1
                } else {
                    0
                };
                PlaneSide::Straddles { isolated }
            }
            0 => PlaneSide::StrictlyOneSide(s0),
            _ => {
                debug_assert!(s0.is_zero() || s1.is_zero() || s2.is_zero());
                PlaneSide::Touches
            }
        }
    }
}

impl std::ops::Index<usize> for SignTriple {
    type Output = Sign;
    fn index(&self, i: usize) -> &Sign {
        &self.0[i]
    }
}

/// Classifies each vertex of `tri` against the supporting plane of `plane`.
pub fn classify_vertices(plane: &Triangle3, tri: &Triangle3) -> SignTriple {
    let [a, b, c] = plane.vertices();
    SignTriple(tri.p.map(|q| orient3d(a, b, c, &q)))
}
