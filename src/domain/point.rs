use crate::util::*;

/// Pixel coordinate inside an image.
///
/// Points order lexicographically by `(x, y)`. That order fixes the
/// row and column of every unknown in the Poisson system, so the derived
/// `Ord` (field order matters) is load bearing.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }

    /// Signed coordinate for offset arithmetic.
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x as i32, self.y as i32)
    }

    /// Inverse of `coord`, `None` for negative components.
    pub fn from_coord(coord: &Coord) -> Option<Self> {
        Some(Point {
            x: u32::try_from(coord[0]).ok()?,
            y: u32::try_from(coord[1]).ok()?,
        })
    }

    /// Shift by a signed offset,
    /// `None` if the result leaves the first quadrant.
    pub fn offset(&self, offset: &Coord) -> Option<Self> {
        Self::from_coord(&(self.coord() + offset))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn order_test() {
        let a = Point::new(1, 5);
        let b = Point::new(2, 0);
        let c = Point::new(2, 3);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert!(c > a);
        assert_eq!(a, Point::new(1, 5));
        assert_ne!(a, b);

        let mut points = vec![c, a, b];
        points.sort();
        assert_eq!(points, vec![a, b, c]);
    }

    #[test]
    fn exactly_one_order_test() {
        for x0 in 0..3 {
            for y0 in 0..3 {
                for x1 in 0..3 {
                    for y1 in 0..3 {
                        let p = Point::new(x0, y0);
                        let q = Point::new(x1, y1);
                        let relations = [p < q, p > q, p == q]
                            .iter()
                            .filter(|r| **r)
                            .count();
                        assert_eq!(relations, 1);
                    }
                }
            }
        }
    }

    #[test]
    fn coord_test() {
        let p = Point::new(4, 7);
        assert_eq!(p.coord(), vector![4, 7]);
        assert_eq!(Point::from_coord(&vector![4, 7]), Some(p));
        assert_eq!(Point::from_coord(&vector![-1, 7]), None);
        assert_eq!(p.offset(&vector![-4, 1]), Some(Point::new(0, 8)));
        assert_eq!(p.offset(&vector![-5, 0]), None);
        assert_eq!(p.to_string(), "(4, 7)");
    }
}
