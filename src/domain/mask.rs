use super::*;
use crate::error::*;
use crate::util::*;

/// Dense index image over the target.
/// Each pixel holds either the rank of that pixel within the domain
/// or nothing, meaning its value is known (Dirichlet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMask {
    aabb: AABB,
    indices: Vec<Option<usize>>,
    len: usize,
}

impl DomainMask {
    /// Enumerate `domain` in canonical order and record each rank.
    /// Fails if any point lies outside the `width x height` image.
    pub fn new(width: u32, height: u32, domain: &Domain) -> Result<Self> {
        let aabb = AABB::from_size(width, height);
        let mut indices = vec![None; aabb.buffer_size()];
        for (i, p) in domain.iter().enumerate() {
            if !aabb.contains(&p.coord()) {
                return Err(Error::OutOfBoundsDomain {
                    point: *p,
                    width,
                    height,
                });
            }
            indices[aabb.coord_to_linear(&p.coord())] = Some(i);
        }
        Ok(DomainMask {
            aabb,
            indices,
            len: domain.len(),
        })
    }

    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    pub fn width(&self) -> u32 {
        self.aabb.width()
    }

    pub fn height(&self) -> u32 {
        self.aabb.height()
    }

    /// Number of domain pixels.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Domain rank of `coord`, `None` when outside the domain
    /// (including outside the image).
    #[inline]
    pub fn index_coord(&self, coord: &Coord) -> Option<usize> {
        if !self.aabb.contains(coord) {
            return None;
        }
        self.indices[self.aabb.coord_to_linear(coord)]
    }

    #[inline]
    pub fn index(&self, point: Point) -> Option<usize> {
        self.index_coord(&point.coord())
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Domain pixels with their ranks, in image (row major) order.
    pub fn indices(&self) -> impl Iterator<Item = (Point, usize)> + '_ {
        self.indices.iter().enumerate().filter_map(|(l, index)| {
            let index = (*index)?;
            let point = Point::from_coord(&self.aabb.linear_to_coord(l))?;
            Some((point, index))
        })
    }

    /// Check that this mask is exactly the enumeration of `domain`.
    pub fn check_consistency(&self, domain: &Domain) -> Result<()> {
        if self.len != domain.len() {
            return Err(Error::inconsistent_mask(format!(
                "mask holds {} points, domain holds {}",
                self.len,
                domain.len()
            )));
        }
        for (i, p) in domain.iter().enumerate() {
            match self.index(*p) {
                Some(index) if index == i => {}
                Some(index) => {
                    return Err(Error::inconsistent_mask(format!(
                        "point {p} has rank {i} but mask index {index}"
                    )))
                }
                None => {
                    return Err(Error::inconsistent_mask(format!(
                        "point {p} is missing from the mask"
                    )))
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn simple_mask_test() {
        let domain: Domain =
            [Point::new(2, 1), Point::new(1, 1), Point::new(1, 2)]
                .into_iter()
                .collect();
        let mask = DomainMask::new(4, 3, &domain).unwrap();
        assert_eq!(mask.len(), 3);
        assert_eq!(mask.index(Point::new(1, 1)), Some(0));
        assert_eq!(mask.index(Point::new(1, 2)), Some(1));
        assert_eq!(mask.index(Point::new(2, 1)), Some(2));
        assert_eq!(mask.index(Point::new(0, 0)), None);
        assert_eq!(mask.index(Point::new(10, 10)), None);
        assert_eq!(mask.index_coord(&Coord::new(-1, 1)), None);
        assert!(mask.check_consistency(&domain).is_ok());
    }

    #[test]
    fn out_of_bounds_test() {
        let domain: Domain = [Point::new(0, 0), Point::new(4, 1)]
            .into_iter()
            .collect();
        match DomainMask::new(4, 3, &domain) {
            Err(Error::OutOfBoundsDomain {
                point,
                width,
                height,
            }) => {
                assert_eq!(point, Point::new(4, 1));
                assert_eq!((width, height), (4, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_domain_test() {
        let mask = DomainMask::new(5, 5, &Domain::new()).unwrap();
        assert!(mask.is_empty());
        assert_eq!(mask.indices().count(), 0);
    }

    #[test]
    fn inconsistent_test() {
        let domain = Domain::from_rect(0, 0, 2, 2);
        let mask = DomainMask::new(3, 3, &domain).unwrap();

        {
            let other = Domain::from_rect(0, 0, 2, 1);
            assert!(matches!(
                mask.check_consistency(&other),
                Err(Error::InconsistentMask(_))
            ));
        }

        {
            let other = Domain::from_rect(1, 1, 2, 2);
            assert!(matches!(
                mask.check_consistency(&other),
                Err(Error::InconsistentMask(_))
            ));
        }
    }

    #[test]
    fn random_bijection_test() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let width = rng.gen_range(1..40);
            let height = rng.gen_range(1..40);
            let density = rng.gen_range(0.0..1.0);
            let domain: Domain = (0..width)
                .flat_map(|x| (0..height).map(move |y| Point::new(x, y)))
                .filter(|_| rng.gen_bool(density))
                .collect();

            let mask = DomainMask::new(width, height, &domain).unwrap();
            let n = domain.len();
            let mut seen = vec![0; n];
            for (p, i) in mask.indices() {
                assert!(domain.contains(&p));
                seen[i] += 1;
            }
            assert!(seen.iter().all(|count| *count == 1));

            for (i, p) in domain.iter().enumerate() {
                assert_eq!(mask.index(*p), Some(i));
            }
        }
    }
}
