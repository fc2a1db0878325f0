//! An image editing pipeline built from stacked decorators.
//!
//! The capability is [`ImageEditor::apply`], which produces an image. A plain
//! [`DynamicImage`] is the terminal editor and returns itself. Every filter decorator
//! asks the editor it wraps for an image first and then transforms that image, so the
//! innermost decorator runs first and the outermost one last.
//!
//! # Example
//! ```
//! use image::{DynamicImage, GenericImageView};
//! use micro_decorator::{Decorator, DecoratorComposer};
//! use micro_image::{ColorControls, GaussianBlur, ImageEditor, Rescale};
//!
//! let base = DynamicImage::new_rgba8(100, 50);
//! let pipeline = DecoratorComposer::new(Rescale::new(0.2, 0.2), GaussianBlur::new(2.0))
//!     .and_then(ColorControls::default().with_contrast(0.53).with_brightness(0.12).with_saturation(4.0));
//!
//! let editor = pipeline.decorate(base);
//! assert_eq!(editor.apply().dimensions(), (20, 10));
//! ```

mod config;
mod decorator;
mod filter;
mod loader;

pub use config::EditorLayer;
pub use config::compose_editor;
pub use config::parse_layers;
pub use decorator::BlurFilter;
pub use decorator::ColorFilter;
pub use decorator::FilterDecorator;
pub use decorator::Resizer;
pub use filter::ColorControls;
pub use filter::GaussianBlur;
pub use filter::ImageFilter;
pub use filter::Rescale;
pub use loader::ImageError;
pub use loader::load_image;
pub use loader::load_image_from_path;

pub use image::DynamicImage;

/// Something that can produce an image.
#[cfg_attr(test, mockall::automock)]
pub trait ImageEditor {
    fn apply(&self) -> DynamicImage;
}

/// An image is the terminal editor: applying it returns the image unchanged.
impl ImageEditor for DynamicImage {
    fn apply(&self) -> DynamicImage {
        self.clone()
    }
}

impl<E: ImageEditor + ?Sized> ImageEditor for Box<E> {
    fn apply(&self) -> DynamicImage {
        (**self).apply()
    }
}

impl<E: ImageEditor + ?Sized> ImageEditor for &E {
    fn apply(&self) -> DynamicImage {
        (**self).apply()
    }
}

#[cfg(test)]
mod tests {
    use crate::ImageEditor;
    use image::{DynamicImage, Rgba, RgbaImage};

    #[test]
    fn test_undecorated_image_is_unchanged() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(4, 3, |x, y| Rgba([x as u8, y as u8, 7, 255])));

        assert_eq!(image.apply(), image);
        let boxed: Box<dyn ImageEditor> = Box::new(image.clone());
        assert_eq!(boxed.apply(), image);
    }
}
