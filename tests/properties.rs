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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rug::Rational;

use trisect::tri_tri_intersect::{
    MAX_PAIRS, Topology, Which, classify_vertices, degeneracy, dispatch,
};
use trisect::{
    Point3, Triangle3, TriangleIntersection, TriangleIsect, TriangleRegion, triangles_intersect,
    triangles_intersections,
};

/// Small integer grid: lots of shared planes, edges through vertices and
/// other exact contacts.
fn grid_triangle(rng: &mut StdRng) -> Option<Triangle3> {
    let mut pt = || {
        Point3::new(
            rng.random_range(-2..=2) as f64,
            rng.random_range(-2..=2) as f64,
            rng.random_range(-2..=2) as f64,
        )
    };
    let (a, b, c) = (pt(), pt(), pt());
    Triangle3::try_new(a, b, c).ok()
}

fn float_triangle(rng: &mut StdRng) -> Option<Triangle3> {
    let mut pt = || {
        Point3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
    };
    let (a, b, c) = (pt(), pt(), pt());
    Triangle3::try_new(a, b, c).ok()
}

/// Integer triangles in the plane `z = 0`: mostly coplanar pairs.
fn flat_triangle(rng: &mut StdRng) -> Option<Triangle3> {
    let mut pt = || {
        Point3::new(
            rng.random_range(-3..=3) as f64,
            rng.random_range(-3..=3) as f64,
            0.0,
        )
    };
    let (a, b, c) = (pt(), pt(), pt());
    Triangle3::try_new(a, b, c).ok()
}

/// Integer triangles in the plane `z = x - y`.
fn tilted_triangle(rng: &mut StdRng) -> Option<Triangle3> {
    let mut pt = || {
        let (u, v) = (rng.random_range(-3..=3), rng.random_range(-3..=3));
        Point3::new(u as f64, v as f64, (u - v) as f64)
    };
    let (a, b, c) = (pt(), pt(), pt());
    Triangle3::try_new(a, b, c).ok()
}

fn random_pairs(
    seed: u64,
    count: usize,
    make: fn(&mut StdRng) -> Option<Triangle3>,
) -> Vec<(Triangle3, Triangle3)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        if let (Some(p), Some(q)) = (make(&mut rng), make(&mut rng)) {
            pairs.push((p, q));
        }
    }
    pairs
}

fn all_pairs() -> Vec<(Triangle3, Triangle3)> {
    let mut pairs = random_pairs(11, 3000, grid_triangle);
    pairs.extend(random_pairs(12, 1000, float_triangle));
    pairs
}

fn sorted(mut r: TriangleIntersection) -> TriangleIntersection {
    r.pairs.sort();
    r
}

/// Relabels the first triangle's features after its vertices were rotated
/// to `[p1, p2, p0]`: old index `j` becomes `(j + 2) % 3`.
fn rotate_first(r: TriangleRegion) -> TriangleRegion {
    if r.triangle() != Which::First {
        return r;
    }
    match (r.dim(), r.local_index()) {
        (0, Some(j)) => TriangleRegion::vertex(Which::First, (j + 2) % 3),
        (1, Some(j)) => TriangleRegion::edge(Which::First, (j + 2) % 3),
        _ => r,
    }
}

#[test]
fn result_is_well_formed() {
    for (p, q) in all_pairs() {
        let r = triangles_intersections(&p.p, &q.p);
        assert_eq!(r.intersects, !r.pairs.is_empty());
        assert_eq!(triangles_intersect(&p.p, &q.p), r.intersects);
        assert!(r.len() <= MAX_PAIRS, "{r}");
        for (i, pair) in r.pairs.iter().enumerate() {
            assert_eq!(pair.0.triangle(), Which::First);
            assert_eq!(pair.1.triangle(), Which::Second);
            assert!(!r.pairs[i + 1..].contains(pair), "duplicate in {r}");
        }
    }
}

#[test]
fn exchanging_triangles_swaps_labels() {
    for (p, q) in all_pairs() {
        let pq = triangles_intersections(&p.p, &q.p);
        let qp = triangles_intersections(&q.p, &p.p);
        assert_eq!(sorted(qp), pq.swapped(), "{p:?} {q:?}");
    }
}

#[test]
fn repeated_queries_agree() {
    for (p, q) in all_pairs().into_iter().take(500) {
        assert_eq!(
            triangles_intersections(&p.p, &q.p),
            triangles_intersections(&p.p, &q.p)
        );
    }
}

#[test]
fn rotating_vertices_relabels_features() {
    for (p, q) in all_pairs() {
        let r = triangles_intersections(&p.p, &q.p);
        let rotated = triangles_intersections(&[p.p[1], p.p[2], p.p[0]], &q.p);

        let mut expected: Vec<TriangleIsect> = r
            .pairs
            .iter()
            .map(|i| TriangleIsect(rotate_first(i.0), i.1))
            .collect();
        expected.sort();
        assert_eq!(sorted(rotated).pairs, expected);
    }
}

#[test]
fn reversing_winding_keeps_the_intersection() {
    for (p, q) in all_pairs() {
        let r = triangles_intersections(&p.p, &q.p);
        let reversed =
            triangles_intersections(&[p.p[0], p.p[2], p.p[1]], &[q.p[2], q.p[1], q.p[0]]);
        assert_eq!(r.intersects, reversed.intersects);
        assert_eq!(r.len(), reversed.len());
    }
}

#[test]
fn power_of_two_scaling_is_invisible() {
    for (p, q) in all_pairs() {
        let scale = |t: &Triangle3, s: f64| t.p.map(|v| Point3::new(v.x * s, v.y * s, v.z * s));
        let r = triangles_intersections(&p.p, &q.p);
        for s in [0.125, 1024.0, 2f64.powi(-400)] {
            assert_eq!(triangles_intersections(&scale(&p, s), &scale(&q, s)), r);
        }
    }
}

#[test]
fn shared_vertices_never_intersect() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut checked = 0;
    while checked < 500 {
        let (Some(p), Some(mut q)) = (grid_triangle(&mut rng), grid_triangle(&mut rng)) else {
            continue;
        };
        q.p[rng.random_range(0..3)] = p.p[rng.random_range(0..3)];
        let Ok(q) = Triangle3::try_new(q.p[0], q.p[1], q.p[2]) else {
            continue;
        };
        assert!(degeneracy(&p, &q).is_some());
        assert_eq!(triangles_intersections(&p.p, &q.p), TriangleIntersection::none());
        checked += 1;
    }
}

#[test]
fn topology_bounds_the_pair_count() {
    let mut crossings = 0;
    for (p, q) in all_pairs() {
        if degeneracy(&p, &q).is_some() {
            continue;
        }
        let topology = dispatch(&classify_vertices(&q, &p), &classify_vertices(&p, &q))
            .expect("valid triangles always dispatch");
        let r = triangles_intersections(&p.p, &q.p);
        match topology {
            Topology::Separated => assert!(!r.intersects),
            Topology::Crossing { .. } => {
                crossings += 1;
                assert!(r.len() <= 2, "{r}");
            }
            Topology::Coplanar | Topology::Touching => assert!(r.len() <= MAX_PAIRS),
        }
    }
    assert!(crossings > 0);
}

type Exact2 = [Rational; 2];
type Exact3 = [Rational; 3];

fn exact(p: &Point3) -> Exact3 {
    [p.x, p.y, p.z].map(|v| Rational::from_f64(v).expect("finite coordinate"))
}

fn mul(a: &Rational, b: &Rational) -> Rational {
    a.clone() * b.clone()
}

fn sub3(a: &Exact3, b: &Exact3) -> Exact3 {
    [0, 1, 2].map(|i| a[i].clone() - b[i].clone())
}

fn cross3(u: &Exact3, v: &Exact3) -> Exact3 {
    [0, 1, 2].map(|i| {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        mul(&u[j], &v[k]) - mul(&u[k], &v[j])
    })
}

fn dot3(u: &Exact3, v: &Exact3) -> Rational {
    mul(&u[0], &v[0]) + mul(&u[1], &v[1]) + mul(&u[2], &v[2])
}

fn normal(t: &[Exact3; 3]) -> Exact3 {
    cross3(&sub3(&t[1], &t[0]), &sub3(&t[2], &t[0]))
}

fn sub2(a: &Exact2, b: &Exact2) -> Exact2 {
    [a[0].clone() - b[0].clone(), a[1].clone() - b[1].clone()]
}

fn cross2(u: &Exact2, v: &Exact2) -> Rational {
    mul(&u[0], &v[1]) - mul(&u[1], &v[0])
}

/// Closed containment of `p`, which lies in the plane of `t`.
fn contains3(t: &[Exact3; 3], p: &Exact3) -> bool {
    let n = normal(t);
    (0..3).all(|i| {
        let (u, v) = (&t[i], &t[(i + 1) % 3]);
        dot3(&cross3(&sub3(v, u), &sub3(p, u)), &n).cmp0() != Ordering::Less
    })
}

fn contains2(t: &[Exact2; 3], p: &Exact2) -> bool {
    let orientation = cross2(&sub2(&t[1], &t[0]), &sub2(&t[2], &t[0])).cmp0();
    (0..3).all(|i| {
        let s = cross2(&sub2(&t[(i + 1) % 3], &t[i]), &sub2(p, &t[i])).cmp0();
        s == Ordering::Equal || s == orientation
    })
}

/// Points where the boundary of `t` meets the plane of `other`, kept when
/// they lie in `other`.
fn boundary_hits(t: &[Exact3; 3], other: &[Exact3; 3]) -> Vec<Exact3> {
    let n = normal(other);
    let h: Vec<Rational> = t.iter().map(|p| dot3(&n, &sub3(p, &other[0]))).collect();
    let mut hits = Vec::new();
    for i in 0..3 {
        let j = (i + 1) % 3;
        let (si, sj) = (h[i].cmp0(), h[j].cmp0());
        if si == Ordering::Equal {
            hits.push(t[i].clone());
        } else if sj != Ordering::Equal && si != sj {
            let s = h[i].clone() / (h[i].clone() - h[j].clone());
            hits.push([0, 1, 2].map(|k| {
                let step = t[j][k].clone() - t[i][k].clone();
                t[i][k].clone() + mul(&s, &step)
            }));
        }
    }
    hits.retain(|p| contains3(other, p));
    hits
}

/// Intersection point of the closed segments `ab` and `cd` when they are
/// not parallel.
fn segment_meet(a: &Exact2, b: &Exact2, c: &Exact2, d: &Exact2) -> Option<Exact2> {
    let (r, s) = (sub2(b, a), sub2(d, c));
    let denom = cross2(&r, &s);
    if denom.cmp0() == Ordering::Equal {
        return None;
    }
    let ca = sub2(c, a);
    let t = cross2(&ca, &s) / denom.clone();
    let u = cross2(&ca, &r) / denom;
    let unit = |x: &Rational| *x >= 0 && *x <= 1;
    (unit(&t) && unit(&u)).then(|| [a[0].clone() + mul(&t, &r[0]), a[1].clone() + mul(&t, &r[1])])
}

fn half_hull<'a>(points: impl Iterator<Item = &'a Exact2>) -> usize {
    let mut chain: Vec<&Exact2> = Vec::new();
    for p in points {
        while chain.len() >= 2 {
            let (o, a) = (chain[chain.len() - 2], chain[chain.len() - 1]);
            if cross2(&sub2(a, o), &sub2(p, o)).cmp0() == Ordering::Greater {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain.len()
}

/// Number of corners of the convex hull, collinear points excluded.
fn hull_corners(mut points: Vec<Exact2>) -> usize {
    points.sort();
    points.dedup();
    if points.len() <= 2 {
        return points.len();
    }
    half_hull(points.iter()) + half_hull(points.iter().rev()) - 2
}

/// Vertex count of `p ∩ q` computed with rational coordinates, and whether
/// the triangles are coplanar.
fn exact_vertex_count(p: &Triangle3, q: &Triangle3) -> (usize, bool) {
    let t1 = p.p.map(|v| exact(&v));
    let t2 = q.p.map(|v| exact(&v));
    let n = normal(&t2);
    let coplanar = t1.iter().all(|v| dot3(&n, &sub3(v, &t2[0])).cmp0() == Ordering::Equal);

    if !coplanar {
        // both chords lie on the common line; the overlap has at most two ends
        let mut ends = boundary_hits(&t1, &t2);
        ends.extend(boundary_hits(&t2, &t1));
        ends.sort();
        ends.dedup();
        return (ends.len(), false);
    }

    let axis = (0..3)
        .find(|&i| n[i].cmp0() != Ordering::Equal)
        .expect("non-degenerate triangle");
    let flat = |t: &[Exact3; 3]| {
        t.clone()
            .map(|v| [v[(axis + 1) % 3].clone(), v[(axis + 2) % 3].clone()])
    };
    let (a, b) = (flat(&t1), flat(&t2));

    let mut points: Vec<Exact2> = Vec::new();
    points.extend(a.iter().filter(|v| contains2(&b, v)).cloned());
    points.extend(b.iter().filter(|v| contains2(&a, v)).cloned());
    for i in 0..3 {
        for j in 0..3 {
            let (a0, a1) = (&a[i], &a[(i + 1) % 3]);
            let (b0, b1) = (&b[j], &b[(j + 1) % 3]);
            points.extend(segment_meet(a0, a1, b0, b1));
        }
    }
    (hull_corners(points), true)
}

#[test]
fn vertex_count_matches_rational_geometry() {
    let mut pairs = random_pairs(21, 3000, grid_triangle);
    pairs.extend(random_pairs(22, 3000, flat_triangle));
    pairs.extend(random_pairs(23, 1500, tilted_triangle));

    let mut coplanar_polygons = 0;
    let mut crossings = 0;
    for (p, q) in pairs {
        if degeneracy(&p, &q).is_some() {
            continue;
        }
        let (expected, coplanar) = exact_vertex_count(&p, &q);
        let r = triangles_intersections(&p.p, &q.p);
        assert_eq!(r.len(), expected, "{p:?} {q:?}: {r}");
        assert_eq!(r.intersects, expected > 0);
        if coplanar && expected >= 3 {
            coplanar_polygons += 1;
        }
        if !coplanar && expected == 2 {
            crossings += 1;
        }
    }
    assert!(coplanar_polygons > 0);
    assert!(crossings > 0);
}
