use crate::filter::{ImageFilter, is_empty};
use image::DynamicImage;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Rescales an image by independent horizontal and vertical factors.
///
/// Without `has_alpha` the output is an opaque RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rescale {
    x_scale: f32,
    y_scale: f32,
    #[serde(default)]
    has_alpha: bool,
}

impl Rescale {
    /// The largest scale factor accepted on either axis.
    pub const MAX_SCALE: f32 = 64.0;
    /// The largest pixel count of the output and of the intermediate horizontal pass.
    pub const MAX_PIXELS: u64 = 1 << 24;

    pub fn new(x_scale: f32, y_scale: f32) -> Self {
        Self { x_scale, y_scale, has_alpha: false }
    }

    pub fn with_alpha(mut self, has_alpha: bool) -> Self {
        self.has_alpha = has_alpha;
        self
    }

    pub fn x_scale(&self) -> f32 {
        self.x_scale
    }

    pub fn y_scale(&self) -> f32 {
        self.y_scale
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn set_scale(&mut self, x_scale: f32, y_scale: f32) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
    }

    pub fn set_has_alpha(&mut self, has_alpha: bool) {
        self.has_alpha = has_alpha;
    }

    /// Whether both factors are positive and within [`Rescale::MAX_SCALE`].
    pub fn is_valid_scale(&self) -> bool {
        let valid = |factor: f32| factor.is_finite() && factor > 0.0 && factor <= Self::MAX_SCALE;
        valid(self.x_scale) && valid(self.y_scale)
    }

    /// The target size for an image of `width` x `height`, `None` if it would be empty
    /// or exceed [`Rescale::MAX_PIXELS`].
    pub fn target_size(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let scale = |length: u32, factor: f32| {
            let scaled = (f64::from(length) * f64::from(factor)).round();
            (scaled.is_finite() && scaled >= 1.0 && scaled <= f64::from(u32::MAX)).then(|| scaled as u32)
        };
        let (target_width, target_height) = (scale(width, self.x_scale)?, scale(height, self.y_scale)?);

        // resizing runs horizontally first, through a target_width x height buffer
        let pixels = u64::from(target_width) * u64::from(target_height.max(height));
        (pixels <= Self::MAX_PIXELS).then_some((target_width, target_height))
    }
}

impl ImageFilter for Rescale {
    fn name(&self) -> &'static str {
        "resize"
    }

    fn process(&self, image: &DynamicImage) -> Option<DynamicImage> {
        if is_empty(image) {
            return None;
        }
        let (width, height) = self.target_size(image.width(), image.height())?;

        let resized = image.resize_exact(width, height, FilterType::Triangle);
        if self.has_alpha {
            Some(DynamicImage::ImageRgba8(resized.to_rgba8()))
        } else {
            Some(DynamicImage::ImageRgb8(resized.to_rgb8()))
        }
    }
}
