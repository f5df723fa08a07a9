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

use std::ops::Index;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point2, Point3};
use crate::kernel::orient2d;
use crate::numeric::Sign;

/// Reasons a vertex triple cannot be used as a triangle.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TriangleError {
    /// A coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    /// Two vertices have identical coordinates.
    #[error("vertices {first} and {second} coincide")]
    RepeatedVertex { first: usize, second: usize },
    /// The three vertices lie on a line.
    #[error("the three vertices are collinear")]
    Collinear,
}

/// A 3D triangle. Edge `i` is the edge opposite vertex `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Triangle3 {
    pub p: [Point3; 3],
}

/// Axis-aligned projection under which a triangle stays non-degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Coordinate dropped by the projection.
    pub axis: usize,
    /// Orientation of the projected triangle.
    pub orientation: Sign,
}

impl Projection {
    pub fn project(&self, p: &Point3) -> Point2 {
        p.project_dropping(self.axis)
    }
}

impl Triangle3 {
    /// Builds a triangle without checking the non-degeneracy precondition.
    pub const fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p: [p0, p1, p2] }
    }

    /// Builds a triangle, rejecting non-finite, repeated or collinear vertices.
    pub fn try_new(p0: Point3, p1: Point3, p2: Point3) -> Result<Self, TriangleError> {
        let tri = Self::new(p0, p1, p2);
        if let Some(index) = tri.p.iter().position(|p| !p.is_finite()) {
            return Err(TriangleError::NonFinite { index });
        }
        for (first, second) in [(0, 1), (0, 2), (1, 2)] {
            if tri.p[first] == tri.p[second] {
                return Err(TriangleError::RepeatedVertex { first, second });
            }
        }
        if tri.projection().is_none() {
            return Err(TriangleError::Collinear);
        }
        Ok(tri)
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.p
    }

    /// Panics if `i >= 3`.
    pub fn vertex(&self, i: usize) -> &Point3 {
        &self.p[i]
    }

    /// Endpoints of edge `i`, the edge opposite vertex `i`. Panics if
    /// `i >= 3`.
    pub fn edge(&self, i: usize) -> (&Point3, &Point3) {
        assert!(i < 3, "edge index out of bounds: {i}");
        (&self.p[(i + 1) % 3], &self.p[(i + 2) % 3])
    }

    /// Picks the coordinate to drop for in-plane tests. Axes are tried by
    /// decreasing magnitude of the floating-point normal, but the choice is
    /// confirmed with the exact 2D predicate. `None` iff the triangle is
    /// degenerate.
    pub fn projection(&self) -> Option<Projection> {
        let n = (self.p[1] - self.p[0]).cross(&(self.p[2] - self.p[0])).abs();
        let mut axes = [0usize, 1, 2];
        let mag = [n.x, n.y, n.z];
        axes.sort_by(|&i, &j| mag[j].total_cmp(&mag[i]));

        axes.into_iter().find_map(|axis| {
            let [a, b, c] = self.p.map(|p| p.project_dropping(axis));
            let orientation = orient2d(&a, &b, &c);
            orientation.is_strict().then_some(Projection { axis, orientation })
        })
    }
}

impl Index<usize> for Triangle3 {
    type Output = Point3;
    fn index(&self, i: usize) -> &Point3 {
        &self.p[i]
    }
}

impl From<[Point3; 3]> for Triangle3 {
    fn from(p: [Point3; 3]) -> Self {
        Self { p }
    }
}
