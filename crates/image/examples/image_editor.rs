use image::{DynamicImage, Rgba, RgbaImage};
use micro_decorator::{Decorator, DecoratorComposer};
use micro_image::{ColorControls, GaussianBlur, ImageEditor, Rescale, load_image_from_path};
use std::env;
use std::error::Error;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn logo() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(600, 300, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 160, 255])))
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // an image path may be given, otherwise a generated gradient is used
    let image = match env::args().nth(1) {
        Some(path) => load_image_from_path(path)?,
        None => logo(),
    };
    info!(width = image.width(), height = image.height(), "loaded image");

    // resize first, then blur, then adjust colors
    let pipeline = DecoratorComposer::default()
        .and_then(Rescale::new(0.2, 0.2))
        .and_then(GaussianBlur::new(1.0))
        .and_then(ColorControls::default());

    let mut color_filter = pipeline.decorate(image);
    color_filter.get_mut().update_radius(2.0);
    color_filter.update_contrast(0.53);
    color_filter.update_brightness(0.12);
    color_filter.update_saturation(4.0);

    let output = color_filter.apply();
    let path = env::temp_dir().join("micro-image-output.png");
    output.save(&path)?;

    info!(width = output.width(), height = output.height(), path = %path.display(), "saved output image");
    Ok(())
}
