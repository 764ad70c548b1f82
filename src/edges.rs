//! Edge hints for picking a domain by hand or by a separate tool.
//! Nothing in the solver consumes edge maps.

use image::{DynamicImage, GrayImage};

pub trait EdgeDetector {
    /// Binary edge map, 255 on edges and 0 elsewhere.
    fn detect_edges(&self, image: &DynamicImage) -> GrayImage;
}

/// Grayscale, box blur, then Canny hysteresis thresholding.
#[derive(Copy, Clone, Debug)]
pub struct CannyEdges {
    pub low_threshold: f32,
    pub high_threshold: f32,
    /// Box filter radius, 1 gives a 3x3 window. 0 disables the blur.
    pub blur_radius: u32,
}

impl Default for CannyEdges {
    fn default() -> Self {
        CannyEdges {
            low_threshold: 20.0,
            high_threshold: 50.0,
            blur_radius: 1,
        }
    }
}

impl EdgeDetector for CannyEdges {
    fn detect_edges(&self, image: &DynamicImage) -> GrayImage {
        profiling::scope!("canny_edges");
        let gray = image.to_luma8();
        let smoothed = if self.blur_radius > 0 {
            imageproc::filter::box_filter(
                &gray,
                self.blur_radius,
                self.blur_radius,
            )
        } else {
            gray
        };
        imageproc::edges::canny(
            &smoothed,
            self.low_threshold,
            self.high_threshold,
        )
    }
}
