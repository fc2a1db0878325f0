//! Runtime composition of decorator chains.
//!
//! A [`Layer`] is a configuration value describing one decorator. [`compose`] folds an
//! ordered list of layers around a base capability: the first layer wraps the base
//! directly, the last layer becomes the outermost one. [`CompositionBuilder`] collects
//! the same pieces step by step and refuses to build without a base.

use crate::InvalidCompositionError;
use std::fmt;
use tracing::trace;

/// Describes one decorator which can wrap a boxed capability `T`.
pub trait Layer<T: ?Sized> {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Wraps `inner`, failing when the layer's own parameters are unusable.
    fn wrap(&self, inner: Box<T>) -> Result<Box<T>, InvalidCompositionError>;
}

impl<T: ?Sized, L: Layer<T> + ?Sized> Layer<T> for Box<L> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn wrap(&self, inner: Box<T>) -> Result<Box<T>, InvalidCompositionError> {
        (**self).wrap(inner)
    }
}

/// Wraps `base` with every layer in order and returns the outermost capability.
///
/// An empty `layers` slice returns `base` itself.
pub fn compose<T, L>(base: Box<T>, layers: &[L]) -> Result<Box<T>, InvalidCompositionError>
where
    T: ?Sized,
    L: Layer<T>,
{
    layers.iter().enumerate().try_fold(base, |inner, (index, layer)| {
        trace!(index, layer = layer.name(), "wrapping layer");
        layer.wrap(inner)
    })
}

/// Collects a base capability and its layers, then assembles them with [`compose`].
pub struct CompositionBuilder<T: ?Sized, L> {
    base: Option<Box<T>>,
    layers: Vec<L>,
}

impl<T: ?Sized, L: Layer<T>> CompositionBuilder<T, L> {
    pub fn new() -> Self {
        Self { base: None, layers: vec![] }
    }

    pub fn base(mut self, base: Box<T>) -> Self {
        self.base = Some(base);
        self
    }

    /// add a layer on the outside of the layers added so far
    pub fn layer(mut self, layer: L) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn layers<I: IntoIterator<Item = L>>(mut self, layers: I) -> Self {
        self.layers.extend(layers);
        self
    }

    pub fn build(self) -> Result<Box<T>, InvalidCompositionError> {
        let base = self.base.ok_or(InvalidCompositionError::MissingBase)?;
        compose(base, &self.layers)
    }
}

impl<T: ?Sized, L: Layer<T>> Default for CompositionBuilder<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, L> fmt::Debug for CompositionBuilder<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionBuilder")
            .field("has_base", &self.base.is_some())
            .field("layers", &self.layers.len())
            .finish()
    }
}
