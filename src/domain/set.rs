use super::*;
use crate::util::*;
use std::collections::BTreeSet;

/// Set of pixels to solve for.
/// Iteration always follows `Point` order, regardless of how the
/// domain was assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    points: BTreeSet<Point>,
}

impl Domain {
    pub fn new() -> Self {
        Domain::default()
    }

    /// Every pixel of the rectangle with top left corner `(x, y)`,
    /// clipped at `u32::MAX`.
    pub fn from_rect(x: u32, y: u32, width: u32, height: u32) -> Self {
        let x_end = x.saturating_add(width);
        let y_end = y.saturating_add(height);
        (x..x_end)
            .flat_map(|px| (y..y_end).map(move |py| Point::new(px, py)))
            .collect()
    }

    /// Every non zero pixel of a single channel mask image.
    pub fn from_mask_image(mask: &image::GrayImage) -> Self {
        mask.enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[0] != 0)
            .map(|(x, y, _)| Point::new(x, y))
            .collect()
    }

    /// Returns whether the point was newly added.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Shift every point, `None` if any point would become negative.
    pub fn translated(&self, offset: &Coord) -> Option<Self> {
        self.points.iter().map(|p| p.offset(offset)).collect()
    }

    /// Smallest box containing every point, `None` when empty.
    pub fn bounding_box(&self) -> Option<AABB> {
        let first = self.points.first()?;
        let mut min = first.coord();
        let mut max = min;
        for p in self.points.iter() {
            let c = p.coord();
            min = Coord::new(min[0].min(c[0]), min[1].min(c[1]));
            max = Coord::new(max[0].max(c[0]), max[1].max(c[1]));
        }
        Some(AABB::from_mm(min, max))
    }
}

impl FromIterator<Point> for Domain {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Domain {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Domain {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl IntoIterator for Domain {
    type Item = Point;
    type IntoIter = std::collections::btree_set::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Domain {
    type Item = &'a Point;
    type IntoIter = std::collections::btree_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
