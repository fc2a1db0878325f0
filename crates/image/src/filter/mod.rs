//! Image transforms applied by [`FilterDecorator`](crate::FilterDecorator).
//!
//! Each filter holds its own parameters and produces a new image from the one it is
//! given. A filter returns `None` when it cannot produce a usable image (empty input,
//! degenerate parameters); the decorator then keeps the image it received.

mod blur;
mod color;
mod resize;

pub use blur::GaussianBlur;
pub use color::ColorControls;
pub use resize::Rescale;

use image::DynamicImage;

pub trait ImageFilter {
    /// the filter's name, used in logs
    fn name(&self) -> &'static str;

    /// Produces the filtered image, or `None` when there is no usable output.
    fn process(&self, image: &DynamicImage) -> Option<DynamicImage>;
}

fn is_empty(image: &DynamicImage) -> bool {
    image.width() == 0 || image.height() == 0
}
