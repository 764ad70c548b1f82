use crate::domain::Point;
use crate::solver::ScalarField;
use crate::util::*;
use image::{Pixel, Primitive};
use imageproc::definitions::Image;
use num_traits::{NumCast, ToPrimitive};

/// One channel of an image seen as a scalar field.
///
/// With an anchor, the image's origin sits at `anchor` and point `p`
/// reads pixel `p - anchor`. Lookups past the image edge replicate the
/// nearest border pixel.
#[derive(Copy, Clone)]
pub struct ChannelView<'a, P: Pixel> {
    image: &'a Image<P>,
    aabb: AABB,
    channel: usize,
    anchor: Coord,
}

impl<'a, P: Pixel> ChannelView<'a, P> {
    pub fn new(image: &'a Image<P>, channel: usize) -> Self {
        Self::anchored(image, channel, Point::new(0, 0))
    }

    pub fn anchored(
        image: &'a Image<P>,
        channel: usize,
        anchor: Point,
    ) -> Self {
        debug_assert!(channel < P::CHANNEL_COUNT as usize);
        ChannelView {
            image,
            aabb: AABB::from_size(image.width(), image.height()),
            channel,
            anchor: anchor.coord(),
        }
    }

    pub fn channel(&self) -> usize {
        self.channel
    }
}

impl<P> ScalarField for ChannelView<'_, P>
where
    P: Pixel + Sync,
    P::Subpixel: Sync,
{
    #[inline]
    fn sample(&self, point: Point) -> f64 {
        let c = self.aabb.clamp(&(point.coord() - self.anchor));
        let pixel = self.image.get_pixel(c[0] as u32, c[1] as u32);
        pixel.channels()[self.channel].to_f64().unwrap_or(0.0)
    }
}

/// Convert a solved value back into a subpixel.
///
/// Values are clamped to the subpixel's nominal range
/// (`[0, 255]` for `u8`, `[0, 1]` for `f32`); integer subpixels are
/// rounded to nearest, NaN maps to the minimum.
pub fn quantize<S: Primitive>(value: f64) -> S {
    if value.is_nan() {
        return S::DEFAULT_MIN_VALUE;
    }
    let min = S::DEFAULT_MIN_VALUE.to_f64().unwrap_or(0.0);
    let max = S::DEFAULT_MAX_VALUE.to_f64().unwrap_or(1.0);
    let clamped = value.clamp(min, max);
    // Integer casts truncate 0.5 to 0.
    let integral =
        <S as NumCast>::from(0.5).and_then(|s: S| s.to_f64()) == Some(0.0);
    let v = if integral { clamped.round() } else { clamped };
    <S as NumCast>::from(v).unwrap_or(S::DEFAULT_MIN_VALUE)
}
