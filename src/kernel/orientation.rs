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

//! Adaptive orientation predicates.
//!
//! Each predicate first evaluates its determinant in `f64` and compares it
//! against a static forward error bound (Shewchuk's `errboundA`). Only when
//! the bound cannot certify the sign is the determinant recomputed exactly
//! over `rug` rationals. The returned sign is therefore always the sign of
//! the exact determinant of the input values.

use log::trace;
use num_traits::Zero;

use crate::geometry::{Point2, Point3};
use crate::numeric::{ExactRational, Sign};

/// Half an ulp of 1.0, i.e. 2^-53.
const EPSILON: f64 = f64::EPSILON * 0.5;
const CCW_ERRBOUND_A: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
const O3D_ERRBOUND_A: f64 = (7.0 + 56.0 * EPSILON) * EPSILON;

/// Below this magnitude products may have lost bits to gradual underflow,
/// which the relative bounds above do not account for.
const UNDERFLOW_GUARD: f64 = 1e-280;

/// Returns:
/// - `Positive` if `a, b, c` are counter-clockwise
/// - `Negative` if clockwise
/// - `Zero` if collinear
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Sign {
    match orient2d_fast(a, b, c) {
        Some(s) => s,
        None => {
            trace!("orient2d: filter failed, switching to exact arithmetic");
            orient2d_exact(a, b, c)
        }
    }
}

/// Floating-point stage of [`orient2d`]. `None` when rounding error could
/// have flipped the sign.
pub fn orient2d_fast(a: &Point2, b: &Point2, c: &Point2) -> Option<Sign> {
    let detleft = (a.x - c.x) * (b.y - c.y);
    let detright = (a.y - c.y) * (b.x - c.x);
    let det = detleft - detright;
    let detsum = detleft.abs() + detright.abs();

    // also catches NaN from overflowing inputs
    if !(detsum >= UNDERFLOW_GUARD) {
        return None;
    }
    let errbound = CCW_ERRBOUND_A * detsum;
    if det > errbound || -det > errbound {
        Some(Sign::of_f64(det))
    } else {
        None
    }
}

/// Exact rational evaluation of [`orient2d`]. Non-finite inputs violate the
/// precondition and yield `Zero`.
pub fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Sign {
    let Some([ax, ay, bx, by, cx, cy]) = to_exact([a.x, a.y, b.x, b.y, c.x, c.y]) else {
        return Sign::Zero;
    };
    let detleft = &(&ax - &cx) * &(&by - &cy);
    let detright = &(&ay - &cy) * &(&bx - &cx);
    (&detleft - &detright).sign()
}

/// Sign of `((b - a) x (c - a)) . (d - a)`:
/// - `Positive` if `d` lies above the plane of the counter-clockwise triangle `abc`
/// - `Negative` if below
/// - `Zero` if the four points are coplanar
pub fn orient3d(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Sign {
    match orient3d_fast(a, b, c, d) {
        Some(s) => s,
        None => {
            trace!("orient3d: filter failed, switching to exact arithmetic");
            orient3d_exact(a, b, c, d)
        }
    }
}

/// Floating-point stage of [`orient3d`]. `None` when rounding error could
/// have flipped the sign.
pub fn orient3d_fast(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Option<Sign> {
    let u = b - a;
    let v = c - a;
    let w = d - a;

    let vywz = v.y * w.z;
    let vzwy = v.z * w.y;
    let vzwx = v.z * w.x;
    let vxwz = v.x * w.z;
    let vxwy = v.x * w.y;
    let vywx = v.y * w.x;

    let det = u.x * (vywz - vzwy) + u.y * (vzwx - vxwz) + u.z * (vxwy - vywx);
    let permanent = u.x.abs() * (vywz.abs() + vzwy.abs())
        + u.y.abs() * (vzwx.abs() + vxwz.abs())
        + u.z.abs() * (vxwy.abs() + vywx.abs());

    if !(permanent >= UNDERFLOW_GUARD) {
        return None;
    }
    let errbound = O3D_ERRBOUND_A * permanent;
    if det > errbound || -det > errbound {
        Some(Sign::of_f64(det))
    } else {
        None
    }
}

/// Exact rational evaluation of [`orient3d`]. Non-finite inputs violate the
/// precondition and yield `Zero`.
pub fn orient3d_exact(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Sign {
    let Some([ax, ay, az, bx, by, bz, cx, cy, cz, dx, dy, dz]) = to_exact([
        a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z, d.x, d.y, d.z,
    ]) else {
        return Sign::Zero;
    };

    let (ux, uy, uz) = (&bx - &ax, &by - &ay, &bz - &az);
    let (vx, vy, vz) = (&cx - &ax, &cy - &ay, &cz - &az);
    let (wx, wy, wz) = (&dx - &ax, &dy - &ay, &dz - &az);

    let m0 = &(&vy * &wz) - &(&vz * &wy);
    let m1 = &(&vz * &wx) - &(&vx * &wz);
    let m2 = &(&vx * &wy) - &(&vy * &wx);

    let det = &(&(&ux * &m0) + &(&uy * &m1)) + &(&uz * &m2);
    det.sign()
}

fn to_exact<const N: usize>(vals: [f64; N]) -> Option<[ExactRational; N]> {
    let mut out: [ExactRational; N] = std::array::from_fn(|_| ExactRational::zero());
    for (slot, v) in out.iter_mut().zip(vals) {
        *slot = ExactRational::from_f64(v)?;
    }
    Some(out)
}
