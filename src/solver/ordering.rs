//! Fill reducing row order for the Laplacian factorization.

use crate::domain::Point;
use std::cmp::Ordering;

/// Pieces at or below this size keep their canonical order.
pub const LEAF_SIZE: usize = 64;

/// Geometric nested dissection over domain points.
///
/// Returns `order` where `order[k]` is the canonical row placed at
/// position `k`. Each level cuts the points along the median line of the
/// longer side of their bounding box. A 5 point stencil never couples
/// points more than one line apart, so the two halves only touch through
/// the cut, which is ordered after both of them.
pub fn nested_dissection(points: &[Point]) -> Vec<usize> {
    profiling::scope!("ordering: nested_dissection");
    let mut order = Vec::with_capacity(points.len());
    dissect(points, (0..points.len()).collect(), &mut order);
    debug_assert_eq!(order.len(), points.len());
    order
}

fn dissect(points: &[Point], rows: Vec<usize>, order: &mut Vec<usize>) {
    if rows.len() <= LEAF_SIZE {
        order.extend(rows);
        return;
    }

    let axis = longer_axis(points, &rows);
    let key = |i: usize| match axis {
        0 => points[i].x,
        _ => points[i].y,
    };
    let mut keys: Vec<u32> = rows.iter().map(|&i| key(i)).collect();
    let mid = keys.len() / 2;
    let median = *keys.select_nth_unstable(mid).1;

    // The cut holds at least the median point, both halves shrink.
    let mut lower = Vec::new();
    let mut upper = Vec::new();
    let mut cut = Vec::new();
    for i in rows {
        match key(i).cmp(&median) {
            Ordering::Less => lower.push(i),
            Ordering::Greater => upper.push(i),
            Ordering::Equal => cut.push(i),
        }
    }
    dissect(points, lower, order);
    dissect(points, upper, order);
    order.extend(cut);
}

/// 0 for x, 1 for y, ties go to x.
fn longer_axis(points: &[Point], rows: &[usize]) -> usize {
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0, 0);
    for &i in rows {
        let p = points[i];
        min = (min.0.min(p.x), min.1.min(p.y));
        max = (max.0.max(p.x), max.1.max(p.y));
    }
    if max.0 - min.0 >= max.1 - min.1 {
        0
    } else {
        1
    }
}
