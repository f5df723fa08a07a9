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

/// Contacts that are considered normal adjacency rather than intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    SharedVertex,
    SharedEdge,
    Duplicate,
}

/// Number of vertices of `t1` whose coordinates equal those of some vertex
/// of `t2`.
pub fn shared_vertices(t1: &Triangle3, t2: &Triangle3) -> usize {
    t1.p.iter().filter(|p| t2.p.contains(*p)).count()
}

/// Detects triangles that share a vertex, an edge, or all three vertices
/// (in any order).
pub fn degeneracy(t1: &Triangle3, t2: &Triangle3) -> Option<Degeneracy> {
    match shared_vertices(t1, t2) {
        0 => None,
        1 => Some(Degeneracy::SharedVertex),
        2 => Some(Degeneracy::SharedEdge),
        _ => Some(Degeneracy::Duplicate),
    }
}
