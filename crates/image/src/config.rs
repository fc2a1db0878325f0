//! Serializable description of an image pipeline.
//!
//! A pipeline is a JSON array of layers, innermost first:
//!
//! ```json
//! [
//!   { "kind": "resize", "x_scale": 0.2, "y_scale": 0.2 },
//!   { "kind": "blur", "radius": 2.0 },
//!   { "kind": "color", "contrast": 0.53, "brightness": 0.12, "saturation": 4.0 }
//! ]
//! ```

use crate::decorator::FilterDecorator;
use crate::filter::{ColorControls, GaussianBlur, Rescale};
use crate::ImageEditor;
use micro_decorator::{CompositionBuilder, InvalidCompositionError, Layer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorLayer {
    Resize(Rescale),
    Blur(GaussianBlur),
    Color(ColorControls),
}

impl EditorLayer {
    fn validate(&self) -> Result<(), InvalidCompositionError> {
        match self {
            Self::Resize(rescale) => {
                if !rescale.is_valid_scale() {
                    return Err(InvalidCompositionError::invalid_parameter(
                        self.name(),
                        format!(
                            "scale must be within (0, {}], got {}x{}",
                            Rescale::MAX_SCALE,
                            rescale.x_scale(),
                            rescale.y_scale()
                        ),
                    ));
                }
            }
            Self::Blur(blur) => {
                if !blur.is_valid_radius() {
                    return Err(InvalidCompositionError::invalid_parameter(
                        self.name(),
                        format!("radius must be within (0, {}], got {}", GaussianBlur::MAX_RADIUS, blur.radius()),
                    ));
                }
            }
            Self::Color(color) => {
                if !color.is_finite() {
                    return Err(InvalidCompositionError::invalid_parameter(self.name(), "adjustments must be finite"));
                }
            }
        }
        Ok(())
    }
}

impl Layer<dyn ImageEditor> for EditorLayer {
    fn name(&self) -> &'static str {
        match self {
            Self::Resize(_) => "resize",
            Self::Blur(_) => "blur",
            Self::Color(_) => "color",
        }
    }

    fn wrap(&self, inner: Box<dyn ImageEditor>) -> Result<Box<dyn ImageEditor>, InvalidCompositionError> {
        self.validate()?;
        let editor: Box<dyn ImageEditor> = match *self {
            Self::Resize(rescale) => Box::new(FilterDecorator::new(inner, rescale)),
            Self::Blur(blur) => Box::new(FilterDecorator::new(inner, blur)),
            Self::Color(color) => Box::new(FilterDecorator::new(inner, color)),
        };
        Ok(editor)
    }
}

/// Parses a JSON array of [`EditorLayer`]s.
pub fn parse_layers(json: &str) -> Result<Vec<EditorLayer>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Lays `layers` over `base`, the first layer being the innermost one.
pub fn compose_editor<E>(base: E, layers: &[EditorLayer]) -> Result<Box<dyn ImageEditor>, InvalidCompositionError>
where
    E: ImageEditor + 'static,
{
    let base: Box<dyn ImageEditor> = Box::new(base);
    CompositionBuilder::new().base(base).layers(layers.iter().copied()).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView};

    const PIPELINE: &str = r#"[
        { "kind": "resize", "x_scale": 0.2, "y_scale": 0.2 },
        { "kind": "blur", "radius": 2.0 },
        { "kind": "color", "contrast": 0.53, "brightness": 0.12, "saturation": 4.0 }
    ]"#;

    #[test]
    fn test_parse_layers() {
        let layers = parse_layers(PIPELINE).unwrap();

        assert_eq!(
            layers,
            vec![
                EditorLayer::Resize(Rescale::new(0.2, 0.2)),
                EditorLayer::Blur(GaussianBlur::new(2.0)),
                EditorLayer::Color(ColorControls::new(4.0, 0.12, 0.53)),
            ]
        );
    }

    #[test]
    fn test_color_defaults() {
        let layers = parse_layers(r#"[{ "kind": "color", "brightness": 0.5 }]"#).unwrap();
        assert_eq!(layers, vec![EditorLayer::Color(ColorControls::default().with_brightness(0.5))]);
    }

    #[test]
    fn test_unknown_kind() {
        assert!(parse_layers(r#"[{ "kind": "sharpen" }]"#).is_err());
    }

    #[test]
    fn test_compose_editor() {
        let layers = parse_layers(PIPELINE).unwrap();
        let editor = compose_editor(DynamicImage::new_rgba8(100, 50), &layers).unwrap();

        let output = editor.apply();
        assert_eq!(output.dimensions(), (20, 10));
        assert!(!output.color().has_alpha());
    }

    #[test]
    fn test_compose_without_layers_returns_base() {
        let base = DynamicImage::new_rgb8(3, 3);
        let editor = compose_editor(base.clone(), &[]).unwrap();
        assert_eq!(editor.apply(), base);
    }

    #[test]
    fn test_oversized_parameters_are_rejected() {
        let base = || DynamicImage::new_rgba8(4, 4);

        let result = compose_editor(base(), &[EditorLayer::Blur(GaussianBlur::new(1.0e30))]);
        assert!(matches!(result, Err(InvalidCompositionError::InvalidParameter { layer: "blur", .. })));

        let result = compose_editor(base(), &[EditorLayer::Resize(Rescale::new(1.0e30, 1.0e30))]);
        assert!(matches!(result, Err(InvalidCompositionError::InvalidParameter { layer: "resize", .. })));
    }

    #[test]
    fn test_oversized_blur_set_after_composition_keeps_image() {
        let base = DynamicImage::new_rgba8(4, 4);
        let mut editor = FilterDecorator::new(base.clone(), GaussianBlur::new(1.0));
        editor.update_radius(1.0e30);

        assert_eq!(editor.apply(), base);
    }

    #[test]
    fn test_invalid_parameters() {
        let base = || DynamicImage::new_rgb8(3, 3);

        let result = compose_editor(base(), &[EditorLayer::Resize(Rescale::new(0.0, 1.0))]);
        assert!(matches!(result, Err(InvalidCompositionError::InvalidParameter { layer: "resize", .. })));

        let result = compose_editor(base(), &[EditorLayer::Blur(GaussianBlur::new(-2.0))]);
        assert!(matches!(result, Err(InvalidCompositionError::InvalidParameter { layer: "blur", .. })));

        let result = compose_editor(base(), &[EditorLayer::Blur(GaussianBlur::new(0.0))]);
        assert!(matches!(result, Err(InvalidCompositionError::InvalidParameter { layer: "blur", .. })));

        let result = compose_editor(base(), &[EditorLayer::Color(ColorControls::new(f32::NAN, 0.0, 1.0))]);
        assert!(matches!(result, Err(InvalidCompositionError::InvalidParameter { layer: "color", .. })));
    }
}
