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

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;
use rug::Rational;

use crate::numeric::sign::Sign;

/// Arbitrary-precision rational backed by GMP. Every finite `f64` converts
/// to it without loss, so sums and products of input coordinates are exact.
#[derive(Clone, Debug)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    /// Exact conversion; `None` for NaN and infinities.
    pub fn from_f64(v: f64) -> Option<Self> {
        Rational::from_f64(v).map(ExactRational)
    }

    pub fn sign(&self) -> Sign {
        Sign::from_ordering(self.0.cmp0())
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;
    fn add(self, rhs: ExactRational) -> ExactRational {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl PartialEq for ExactRational {
    fn eq(&self, other: &ExactRational) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for ExactRational {
    fn partial_cmp(&self, other: &ExactRational) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_lossless() {
        let tiny = ExactRational::from_f64(0.1).unwrap();
        let three = ExactRational::from_f64(3.0).unwrap();
        let sum = &(&tiny + &tiny) + &tiny;
        // 0.1 is not representable, so three copies never add up to 0.3 exactly
        let point_three = ExactRational::from_f64(0.3).unwrap();
        assert!(sum != point_three);
        assert_eq!((&three * &tiny).sign(), Sign::Positive);
        assert!((&sum - &sum).is_zero());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(ExactRational::from_f64(f64::NAN).is_none());
        assert!(ExactRational::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn signs_of_constants() {
        let v = ExactRational::from_f64(-42.0).unwrap();
        assert_eq!(v.sign(), Sign::Negative);
        assert_eq!(ExactRational::zero().sign(), Sign::Zero);
        assert!(ExactRational::from_f64(-0.0).unwrap().is_zero());
    }
}
