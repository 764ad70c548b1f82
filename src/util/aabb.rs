use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) over pixel coordinates.
/// Each instance is inclusive of both corners.
/// Images are described by the box `[0, width - 1] x [0, height - 1]`;
/// a box with a zero sized side is invalid and contains nothing.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB {
    pub bounds: Bounds,
}

impl std::fmt::Display for AABB {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.bounds[(0, 0)],
            self.bounds[(0, 1)],
            self.bounds[(1, 0)],
            self.bounds[(1, 1)]
        )
    }
}

impl AABB {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds) -> Self {
        AABB { bounds }
    }

    /// Box covering every pixel of a `width x height` image.
    pub fn from_size(width: u32, height: u32) -> Self {
        AABB::new(Bounds::new(
            0,
            width as i32 - 1,
            0,
            height as i32 - 1,
        ))
    }

    /// Create AABB from corners.
    pub fn from_mm(min: Coord, max: Coord) -> Self {
        AABB {
            bounds: Bounds::from_columns(&[min, max]),
        }
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    pub fn width(&self) -> u32 {
        self.exclusive_bounds()[0].max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.exclusive_bounds()[1].max(0) as u32
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord) -> bool {
        for d in 0..2 {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Check whether another AABB is contained in the instance.
    pub fn contains_aabb(&self, other: &Self) -> bool {
        for d in 0..2 {
            if other.bounds[(d, 0)] < self.bounds[(d, 0)]
                || other.bounds[(d, 1)] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Nearest contained coordinate, i.e. replicate the border outward.
    pub fn clamp(&self, coord: &Coord) -> Coord {
        debug_assert!(self.check_validity());
        let mut result = *coord;
        for d in 0..2 {
            result[d] =
                result[d].clamp(self.bounds[(d, 0)], self.bounds[(d, 1)]);
        }
        result
    }

    /// Whether a coordinate sits on the min or max side of axis `d`.
    pub fn on_edge(&self, coord: &Coord, d: usize) -> bool {
        coord[d] == self.bounds[(d, 0)] || coord[d] == self.bounds[(d, 1)]
    }

    /// Shift both corners.
    pub fn translate(&self, offset: &Coord) -> Self {
        AABB::from_mm(self.min() + offset, self.max() + offset)
    }

    /// Return min corner.
    pub fn min(&self) -> Coord {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..2 {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use nalgebra::{matrix, vector};

    #[test]
    fn buffer_size_test() {
        {
            let aabb = AABB::from_size(10, 4);
            assert_eq!(aabb.buffer_size(), 40);
            assert_eq!(aabb.width(), 10);
            assert_eq!(aabb.height(), 4);
        }

        {
            let aabb = AABB::from_size(0, 4);
            assert_eq!(aabb.buffer_size(), 0);
            assert!(!aabb.check_validity());
        }
    }

    #[test]
    fn coord_to_linear_in_box_test() {
        let aabb = AABB::new(matrix![2, 5; 10, 12]);
        assert_eq!(aabb.coord_to_linear(&vector![2, 10]), 0);
        assert_eq!(aabb.coord_to_linear(&vector![3, 11]), 5);
        assert_eq!(aabb.linear_to_coord(5), vector![3, 11]);
    }

    #[test]
    fn contains_test() {
        let aabb = AABB::from_size(3, 3);
        assert!(aabb.contains(&vector![0, 0]));
        assert!(aabb.contains(&vector![2, 2]));
        assert!(!aabb.contains(&vector![-1, 0]));
        assert!(!aabb.contains(&vector![0, 3]));
        assert!(aabb.contains_aabb(&AABB::new(matrix![1, 2; 0, 1])));
        assert!(!aabb.contains_aabb(&AABB::new(matrix![1, 3; 0, 1])));
    }

    #[test]
    fn clamp_test() {
        let aabb = AABB::from_size(4, 3);
        assert_eq!(aabb.clamp(&vector![-1, 1]), vector![0, 1]);
        assert_eq!(aabb.clamp(&vector![5, -7]), vector![3, 0]);
        assert_eq!(aabb.clamp(&vector![2, 2]), vector![2, 2]);
    }

    #[test]
    fn on_edge_test() {
        let aabb = AABB::from_size(4, 3);
        assert!(aabb.on_edge(&vector![0, 1], 0));
        assert!(aabb.on_edge(&vector![3, 1], 0));
        assert!(!aabb.on_edge(&vector![2, 1], 0));
        assert!(aabb.on_edge(&vector![2, 2], 1));
    }

    #[test]
    fn coord_iter_test() {
        let aabb = AABB::new(matrix![1, 2; 5, 6]);
        let coords: Vec<Coord> = aabb.coord_iter().collect();
        assert_eq!(
            coords,
            vec![vector![1, 5], vector![2, 5], vector![1, 6], vector![2, 6]]
        );
        assert_eq!(aabb.translate(&vector![-1, -5]), AABB::from_size(2, 2));
    }
}
