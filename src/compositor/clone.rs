use super::*;
use crate::domain::*;
use crate::error::*;
use crate::solver::*;
use crate::util::*;
use clap::ValueEnum;
use image::Pixel;
use imageproc::definitions::Image;
use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

/// How the domain is filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum CloneMode {
    /// Copy source pixels as they are, no solve
    Flatten,

    /// Source gradients, destination boundary
    #[default]
    Imported,

    /// Stronger of source and destination gradient per edge
    Mixed,

    /// Mean of source and destination gradients
    Averaged,
}

impl CloneMode {
    /// Guidance policy for the modes that run a Poisson solve.
    pub fn guidance(&self) -> Option<GuidancePolicy> {
        match self {
            CloneMode::Flatten => None,
            CloneMode::Imported => Some(GuidancePolicy::Imported),
            CloneMode::Mixed => Some(GuidancePolicy::Mixed),
            CloneMode::Averaged => Some(GuidancePolicy::Averaged),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuidancePolicy {
    Imported,
    Mixed,
    Averaged,
}

/// Composite `source` into `destination`.
///
/// `domain` is given in destination coordinates, and the source's origin
/// lands on `anchor`, so destination pixel `p` takes its guidance from
/// source pixel `p - anchor`. Pixels outside the domain are returned
/// unchanged.
pub fn seamless_clone<P>(
    source: &Image<P>,
    destination: &Image<P>,
    domain: &Domain,
    anchor: Point,
    mode: CloneMode,
) -> Result<Image<P>>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Send + Sync,
{
    match mode.guidance() {
        None => flatten(source, destination, domain, anchor),
        Some(policy) => {
            poisson_clone(source, destination, domain, anchor, policy)
        }
    }
}

pub fn clone_imported_gradient<P>(
    source: &Image<P>,
    destination: &Image<P>,
    domain: &Domain,
    anchor: Point,
) -> Result<Image<P>>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Send + Sync,
{
    poisson_clone(
        source,
        destination,
        domain,
        anchor,
        GuidancePolicy::Imported,
    )
}

pub fn clone_mixed_gradient<P>(
    source: &Image<P>,
    destination: &Image<P>,
    domain: &Domain,
    anchor: Point,
) -> Result<Image<P>>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Send + Sync,
{
    poisson_clone(source, destination, domain, anchor, GuidancePolicy::Mixed)
}

pub fn clone_averaged_gradient<P>(
    source: &Image<P>,
    destination: &Image<P>,
    domain: &Domain,
    anchor: Point,
) -> Result<Image<P>>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Send + Sync,
{
    poisson_clone(
        source,
        destination,
        domain,
        anchor,
        GuidancePolicy::Averaged,
    )
}

/// Hard replace: copy source pixels over the domain.
/// An empty domain returns the destination unchanged.
pub fn flatten<P>(
    source: &Image<P>,
    destination: &Image<P>,
    domain: &Domain,
    anchor: Point,
) -> Result<Image<P>>
where
    P: Pixel,
{
    profiling::scope!("compositor: flatten");
    check_bounds(destination, domain, &Coord::zeros())?;
    check_bounds(source, domain, &anchor.coord())?;
    let mut output = destination.clone();
    for p in domain.iter() {
        let pixel = *source.get_pixel(p.x - anchor.x, p.y - anchor.y);
        output.put_pixel(p.x, p.y, pixel);
    }
    tracing::info!(points = domain.len(), "flatten finished");
    Ok(output)
}

#[tracing::instrument(
    skip(source, destination, domain),
    fields(points = domain.len())
)]
fn poisson_clone<P>(
    source: &Image<P>,
    destination: &Image<P>,
    domain: &Domain,
    anchor: Point,
    policy: GuidancePolicy,
) -> Result<Image<P>>
where
    P: Pixel + Send + Sync,
    P::Subpixel: Send + Sync,
{
    if domain.is_empty() {
        return Err(Error::EmptyDomain);
    }
    check_bounds(source, domain, &anchor.coord())?;
    let size = destination.dimensions();
    let mask = DomainMask::new(size.0, size.1, domain)?;
    let mut solver = PoissonSolver::new(domain.clone(), size, mask)?;
    solver.compute()?;

    let channels = P::CHANNEL_COUNT as usize;
    let columns: Vec<DVector<f64>> = (0..channels)
        .into_par_iter()
        .map(|c| {
            profiling::scope!("compositor: channel rhs");
            let src = ChannelView::anchored(source, c, anchor);
            let dst = ChannelView::new(destination, c);
            match policy {
                GuidancePolicy::Imported => solver
                    .right_hand_side(&dst, &ImportedGradient::new(src)),
                GuidancePolicy::Mixed => solver
                    .right_hand_side(&dst, &MixedGradient::new(src, dst)),
                GuidancePolicy::Averaged => solver
                    .right_hand_side(&dst, &AveragedGradient::new(src, dst)),
            }
        })
        .collect();
    let solution = solver.solve_columns(&DMatrix::from_columns(&columns))?;

    let mut output = destination.clone();
    {
        profiling::scope!("compositor: scatter");
        for (i, p) in solver.rows().iter().enumerate() {
            let pixel = output.get_pixel_mut(p.x, p.y);
            for (c, value) in pixel.channels_mut().iter_mut().enumerate() {
                *value = quantize(solution[(i, c)]);
            }
        }
    }
    tracing::info!(?policy, channels, "seamless clone finished");
    Ok(output)
}

/// Every domain point must land inside `image` once shifted by `-anchor`.
fn check_bounds<P: Pixel>(
    image: &Image<P>,
    domain: &Domain,
    anchor: &Coord,
) -> Result<()> {
    let aabb = AABB::from_size(image.width(), image.height()).translate(anchor);
    match domain.iter().find(|p| !aabb.contains(&p.coord())) {
        Some(p) => Err(Error::OutOfBoundsDomain {
            point: *p,
            width: image.width(),
            height: image.height(),
        }),
        None => Ok(()),
    }
}
