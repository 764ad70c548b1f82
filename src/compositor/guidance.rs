use crate::domain::Point;
use crate::solver::{GuidanceField, ScalarField};

/// Reproduce the source's gradients inside the domain.
#[derive(Copy, Clone)]
pub struct ImportedGradient<S> {
    source: S,
}

impl<S: ScalarField> ImportedGradient<S> {
    pub fn new(source: S) -> Self {
        ImportedGradient { source }
    }
}

impl<S: ScalarField> GuidanceField for ImportedGradient<S> {
    #[inline]
    fn gradient(&self, p: Point, q: Point) -> f64 {
        self.source.sample(p) - self.source.sample(q)
    }
}

/// Per edge, keep whichever of the source and destination gradients
/// is stronger. The source wins ties, so a flat destination gives
/// exactly `ImportedGradient`.
#[derive(Copy, Clone)]
pub struct MixedGradient<S, D> {
    source: S,
    destination: D,
}

impl<S: ScalarField, D: ScalarField> MixedGradient<S, D> {
    pub fn new(source: S, destination: D) -> Self {
        MixedGradient {
            source,
            destination,
        }
    }
}

impl<S: ScalarField, D: ScalarField> GuidanceField for MixedGradient<S, D> {
    #[inline]
    fn gradient(&self, p: Point, q: Point) -> f64 {
        let s = self.source.sample(p) - self.source.sample(q);
        let d = self.destination.sample(p) - self.destination.sample(q);
        if d.abs() > s.abs() {
            d
        } else {
            s
        }
    }
}

/// Mean of the source and destination gradients.
#[derive(Copy, Clone)]
pub struct AveragedGradient<S, D> {
    source: S,
    destination: D,
}

impl<S: ScalarField, D: ScalarField> AveragedGradient<S, D> {
    pub fn new(source: S, destination: D) -> Self {
        AveragedGradient {
            source,
            destination,
        }
    }
}

impl<S: ScalarField, D: ScalarField> GuidanceField for AveragedGradient<S, D> {
    #[inline]
    fn gradient(&self, p: Point, q: Point) -> f64 {
        let s = self.source.sample(p) - self.source.sample(q);
        let d = self.destination.sample(p) - self.destination.sample(q);
        0.5 * (s + d)
    }
}
