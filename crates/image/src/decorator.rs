//! The delegating image decorator and its concrete flavours.
//!
//! [`FilterDecorator`] owns the editor it wraps plus one [`ImageFilter`]. Applying it
//! applies the wrapped editor first and filters the result. The filter types are also
//! [`Decorator`]s, so a pipeline can be described once and laid over any editor:
//!
//! ```
//! use image::DynamicImage;
//! use micro_decorator::{Decorator, DecoratorComposer};
//! use micro_image::{GaussianBlur, ImageEditor, Rescale};
//!
//! let pipeline = DecoratorComposer::new(Rescale::new(0.5, 0.5), GaussianBlur::new(1.0));
//! let mut editor = pipeline.decorate(DynamicImage::new_rgb8(8, 8));
//! editor.update_radius(3.0);
//! assert_eq!(editor.apply().width(), 4);
//! ```

use crate::ImageEditor;
use crate::filter::{ColorControls, GaussianBlur, ImageFilter, Rescale};
use image::DynamicImage;
use micro_decorator::Decorator;
use tracing::{trace, warn};

#[derive(Debug, Clone)]
pub struct FilterDecorator<E, F> {
    editor: E,
    filter: F,
}

pub type BlurFilter<E> = FilterDecorator<E, GaussianBlur>;
pub type ColorFilter<E> = FilterDecorator<E, ColorControls>;
pub type Resizer<E> = FilterDecorator<E, Rescale>;

impl<E, F> FilterDecorator<E, F> {
    pub fn new(editor: E, filter: F) -> Self {
        Self { editor, filter }
    }

    /// Gets a reference to the wrapped editor.
    pub fn get_ref(&self) -> &E {
        &self.editor
    }

    /// Gets a mutable reference to the wrapped editor, e.g. to tune an inner layer.
    pub fn get_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn into_inner(self) -> E {
        self.editor
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }
}

impl<E: ImageEditor, F: ImageFilter> ImageEditor for FilterDecorator<E, F> {
    fn apply(&self) -> DynamicImage {
        let image = self.editor.apply();

        match self.filter.process(&image) {
            Some(output) => {
                trace!(filter = self.filter.name(), width = output.width(), height = output.height(), "filter applied");
                output
            }
            None => {
                warn!(filter = self.filter.name(), "filter produced no output, keep the input image");
                image
            }
        }
    }
}

impl<E> BlurFilter<E> {
    pub fn update_radius(&mut self, radius: f32) {
        self.filter.set_radius(radius);
    }
}

impl<E> ColorFilter<E> {
    pub fn update_saturation(&mut self, saturation: f32) {
        self.filter.set_saturation(saturation);
    }

    pub fn update_brightness(&mut self, brightness: f32) {
        self.filter.set_brightness(brightness);
    }

    pub fn update_contrast(&mut self, contrast: f32) {
        self.filter.set_contrast(contrast);
    }
}

impl<E> Resizer<E> {
    pub fn update_scale(&mut self, x_scale: f32, y_scale: f32) {
        self.filter.set_scale(x_scale, y_scale);
    }

    pub fn update_has_alpha(&mut self, has_alpha: bool) {
        self.filter.set_has_alpha(has_alpha);
    }
}

impl<E: ImageEditor> Decorator<E> for GaussianBlur {
    type Out = BlurFilter<E>;

    fn decorate(&self, raw: E) -> Self::Out {
        FilterDecorator::new(raw, *self)
    }
}

impl<E: ImageEditor> Decorator<E> for ColorControls {
    type Out = ColorFilter<E>;

    fn decorate(&self, raw: E) -> Self::Out {
        FilterDecorator::new(raw, *self)
    }
}

impl<E: ImageEditor> Decorator<E> for Rescale {
    type Out = Resizer<E>;

    fn decorate(&self, raw: E) -> Self::Out {
        FilterDecorator::new(raw, *self)
    }
}
