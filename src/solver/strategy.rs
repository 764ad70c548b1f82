use crate::domain::Point;

/// Scalar value per pixel, e.g. one channel of an image.
pub trait ScalarField: Sync {
    fn sample(&self, point: Point) -> f64;
}

/// Known value just outside the domain.
/// Any scalar field serves as a boundary condition.
pub trait BoundaryCondition: Sync {
    fn value(&self, point: Point) -> f64;
}

/// Target difference `f(p) - f(q)` along the grid edge from `p` to `q`.
pub trait GuidanceField: Sync {
    fn gradient(&self, p: Point, q: Point) -> f64;
}

impl<F: Fn(Point) -> f64 + Sync> ScalarField for F {
    #[inline]
    fn sample(&self, point: Point) -> f64 {
        self(point)
    }
}

impl<T: ScalarField + ?Sized> BoundaryCondition for T {
    #[inline]
    fn value(&self, point: Point) -> f64 {
        self.sample(point)
    }
}

impl<F: Fn(Point, Point) -> f64 + Sync> GuidanceField for F {
    #[inline]
    fn gradient(&self, p: Point, q: Point) -> f64 {
        self(p, q)
    }
}

/// Same value everywhere.
#[derive(Debug, Copy, Clone)]
pub struct ConstantField {
    value: f64,
}

impl ConstantField {
    pub fn new(value: f64) -> Self {
        ConstantField { value }
    }
}

impl ScalarField for ConstantField {
    fn sample(&self, _point: Point) -> f64 {
        self.value
    }
}

/// Zero guidance, the solve becomes a membrane (harmonic) interpolation
/// of the boundary.
#[derive(Debug, Copy, Clone)]
pub struct NoGuidance;

impl GuidanceField for NoGuidance {
    fn gradient(&self, _p: Point, _q: Point) -> f64 {
        0.0
    }
}
