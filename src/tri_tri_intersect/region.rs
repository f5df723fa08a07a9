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

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Selects one of the two triangles of an intersection query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Which {
    First,
    Second,
}

impl Which {
    pub fn other(self) -> Which {
        match self {
            Which::First => Which::Second,
            Which::Second => Which::First,
        }
    }
}

/// Location of a point on one of the two triangles: one of its three
/// vertices, one of its three edges (edge `i` is opposite vertex `i`), or its
/// interior. The discriminants are stable codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TriangleRegion {
    T1P0 = 0,
    T1P1 = 1,
    T1P2 = 2,

    T2P0 = 3,
    T2P1 = 4,
    T2P2 = 5,

    T1E0 = 6,
    T1E1 = 7,
    T1E2 = 8,

    T2E0 = 9,
    T2E1 = 10,
    T2E2 = 11,

    T1T = 12,
    T2T = 13,
}

use TriangleRegion::*;

impl TriangleRegion {
    pub const COUNT: usize = 14;

    pub const ALL: [TriangleRegion; Self::COUNT] = [
        T1P0, T1P1, T1P2, T2P0, T2P1, T2P2, T1E0, T1E1, T1E2, T2E0, T2E1, T2E2, T1T, T2T,
    ];

    /// Vertex `i` of the selected triangle. Panics if `i >= 3`.
    pub fn vertex(which: Which, i: usize) -> Self {
        match which {
            Which::First => [T1P0, T1P1, T1P2][i],
            Which::Second => [T2P0, T2P1, T2P2][i],
        }
    }

    /// Edge `i` (opposite vertex `i`) of the selected triangle. Panics if
    /// `i >= 3`.
    pub fn edge(which: Which, i: usize) -> Self {
        match which {
            Which::First => [T1E0, T1E1, T1E2][i],
            Which::Second => [T2E0, T2E1, T2E2][i],
        }
    }

    pub fn interior(which: Which) -> Self {
        match which {
            Which::First => T1T,
            Which::Second => T2T,
        }
    }

    pub fn triangle(self) -> Which {
        match self {
            T1P0 | T1P1 | T1P2 | T1E0 | T1E1 | T1E2 | T1T => Which::First,
            T2P0 | T2P1 | T2P2 | T2E0 | T2E1 | T2E2 | T2T => Which::Second,
        }
    }

    /// 0 for a vertex, 1 for an edge, 2 for the interior.
    pub fn dim(self) -> u8 {
        match self {
            T1P0 | T1P1 | T1P2 | T2P0 | T2P1 | T2P2 => 0,
            T1E0 | T1E1 | T1E2 | T2E0 | T2E1 | T2E2 => 1,
            T1T | T2T => 2,
        }
    }

    /// Index of the vertex or edge within its triangle, `None` for interiors.
    pub fn local_index(self) -> Option<usize> {
        match self {
            T1P0 | T2P0 | T1E0 | T2E0 => Some(0),
            T1P1 | T2P1 | T1E1 | T2E1 => Some(1),
            T1P2 | T2P2 | T1E2 | T2E2 => Some(2),
            T1T | T2T => None,
        }
    }

    /// The same feature on the other triangle.
    pub fn swapped(self) -> Self {
        let which = self.triangle().other();
        match (self.dim(), self.local_index()) {
            (0, Some(i)) => Self::vertex(which, i),
            (1, Some(i)) => Self::edge(which, i),
            _ => Self::interior(which),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            T1P0 => "T1_RGN_P0",
            T1P1 => "T1_RGN_P1",
            T1P2 => "T1_RGN_P2",
            T2P0 => "T2_RGN_P0",
            T2P1 => "T2_RGN_P1",
            T2P2 => "T2_RGN_P2",
            T1E0 => "T1_RGN_E0",
            T1E1 => "T1_RGN_E1",
            T1E2 => "T1_RGN_E2",
            T2E0 => "T2_RGN_E0",
            T2E1 => "T2_RGN_E1",
            T2E2 => "T2_RGN_E2",
            T1T => "T1_RGN_T",
            T2T => "T2_RGN_T",
        }
    }
}

/// One vertex of the intersection polygon: a feature of the first triangle
/// and a feature of the second that meet at a single point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleIsect(pub TriangleRegion, pub TriangleRegion);

impl TriangleIsect {
    /// Builds the pair from two regions given in any order, the one on the
    /// first triangle going first.
    pub(crate) fn ordered(a: TriangleRegion, b: TriangleRegion) -> Self {
        debug_assert_ne!(a.triangle(), b.triangle());
        if a.triangle() == Which::First {
            TriangleIsect(a, b)
        } else {
            TriangleIsect(b, a)
        }
    }

    /// The pair describing the same point once the two triangles are
    /// exchanged.
    pub fn swapped(self) -> Self {
        TriangleIsect(self.1.swapped(), self.0.swapped())
    }
}

/// Symbolic result of a triangle-triangle query.
///
/// `pairs` is the vertex set of the intersection polygon (a point, a segment
/// or a convex polygon with up to six vertices) in no particular cyclic order;
/// order them with a convex hull if needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleIntersection {
    pub intersects: bool,
    pub pairs: Vec<TriangleIsect>,
}

impl TriangleIntersection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The same intersection seen with the two triangles exchanged.
    pub fn swapped(&self) -> Self {
        let mut pairs: Vec<_> = self.pairs.iter().map(|p| p.swapped()).collect();
        pairs.sort();
        Self {
            intersects: self.intersects,
            pairs,
        }
    }
}
