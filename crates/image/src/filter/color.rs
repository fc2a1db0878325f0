use crate::filter::{ImageFilter, is_empty};
use image::{ColorType, DynamicImage, Rgba};
use serde::{Deserialize, Serialize};

// Rec. 709 luma weights
const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Saturation, brightness and contrast adjustments, applied in that order.
///
/// - `saturation` scales each channel's distance from the pixel's luma, `1.0` keeps it.
/// - `brightness` is added to every channel, `0.0` keeps it, `1.0` is full white.
/// - `contrast` scales each channel's distance from mid grey, `1.0` keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorControls {
    saturation: f32,
    brightness: f32,
    contrast: f32,
}

impl Default for ColorControls {
    fn default() -> Self {
        Self { saturation: 1.0, brightness: 0.0, contrast: 1.0 }
    }
}

impl ColorControls {
    pub fn new(saturation: f32, brightness: f32, contrast: f32) -> Self {
        Self { saturation, brightness, contrast }
    }

    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = saturation;
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    pub fn set_contrast(&mut self, contrast: f32) {
        self.contrast = contrast;
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.saturation.is_finite() && self.brightness.is_finite() && self.contrast.is_finite()
    }

    fn adjust(&self, pixel: &mut Rgba<f32>) {
        let channels = [pixel.0[0], pixel.0[1], pixel.0[2]];
        let luma = channels.iter().zip(LUMA).map(|(c, w)| c * w).sum::<f32>();

        for (i, c) in channels.into_iter().enumerate() {
            let saturated = luma + (c - luma) * self.saturation;
            let brightened = saturated + self.brightness;
            let contrasted = (brightened - 0.5) * self.contrast + 0.5;
            pixel.0[i] = contrasted.clamp(0.0, 1.0);
        }
    }
}

impl ImageFilter for ColorControls {
    fn name(&self) -> &'static str {
        "color"
    }

    fn process(&self, image: &DynamicImage) -> Option<DynamicImage> {
        if !self.is_finite() || is_empty(image) {
            return None;
        }

        let mut buffer = image.to_rgba32f();
        buffer.pixels_mut().for_each(|pixel| self.adjust(pixel));
        let adjusted = DynamicImage::ImageRgba32F(buffer);

        // keep the channel depth of the input, grey inputs come out as color
        let alpha = image.color().has_alpha();
        Some(match image.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
                if alpha { DynamicImage::ImageRgba8(adjusted.to_rgba8()) } else { DynamicImage::ImageRgb8(adjusted.to_rgb8()) }
            }
            ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
                if alpha { DynamicImage::ImageRgba16(adjusted.to_rgba16()) } else { DynamicImage::ImageRgb16(adjusted.to_rgb16()) }
            }
            _ => {
                if alpha { adjusted } else { DynamicImage::ImageRgb32F(adjusted.to_rgb32f()) }
            }
        })
    }
}
