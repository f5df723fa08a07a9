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

use std::ops::{Index, Sub};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::geometry::point_2::Point2;
use crate::geometry::vector_3::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Drops coordinate `axis`; the two remaining ones keep their cyclic
    /// order so that projected orientations agree with the sign of the
    /// normal component along `axis`.
    pub fn project_dropping(&self, axis: usize) -> Point2 {
        match axis {
            0 => Point2::new(self.y, self.z),
            1 => Point2::new(self.z, self.x),
            _ => Point2::new(self.x, self.y),
        }
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(c: [f64; 3]) -> Self {
        Point3::new(c[0], c[1], c[2])
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3::new(x, y, z)
    }
}

/// Coordinate `i`: 0 for `x`, 1 for `y`, 2 for `z`.
///
/// # Panics
///
/// If `i >= 3`.
impl Index<usize> for Point3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of bounds: {i}"),
        }
    }
}

impl<'a, 'b> Sub<&'b Point3> for &'a Point3 {
    type Output = Vector3;
    fn sub(self, rhs: &'b Point3) -> Vector3 {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Sub for Point3 {
    type Output = Vector3;
    fn sub(self, rhs: Point3) -> Vector3 {
        &self - &rhs
    }
}
