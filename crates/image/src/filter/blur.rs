use crate::filter::{ImageFilter, is_empty};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Gaussian blur with the given radius (the standard deviation of the kernel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianBlur {
    radius: f32,
}

impl GaussianBlur {
    /// The largest radius accepted, the kernel grows linearly with it.
    pub const MAX_RADIUS: f32 = 512.0;

    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Whether the radius is positive and within [`GaussianBlur::MAX_RADIUS`].
    pub fn is_valid_radius(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0 && self.radius <= Self::MAX_RADIUS
    }
}

impl ImageFilter for GaussianBlur {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn process(&self, image: &DynamicImage) -> Option<DynamicImage> {
        if !self.is_valid_radius() || is_empty(image) {
            return None;
        }
        // a kernel wider than the image only flattens it
        let longer_side = image.width().max(image.height());
        if f64::from(self.radius) > f64::from(longer_side) {
            return None;
        }
        Some(image.blur(self.radius))
    }
}
