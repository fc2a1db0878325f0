//! Composable decorators over a shared capability.
//!
//! A capability is any trait describing an operation (`apply`, `read`, `write`, ...).
//! A decorator owns exactly one value implementing that capability, delegates to it
//! and augments the result. Chains built this way are strictly linear and always end
//! in a terminal value which does no delegation.
//!
//! Two ways of building chains are offered:
//! - statically, through [`Decorator`] and [`DecoratorComposer::and_then`], where every
//!   layer is part of the resulting type;
//! - at runtime, through [`Layer`], [`compose`] and [`CompositionBuilder`], where the
//!   chain is described by a list of layer configurations and boxed as `Box<dyn T>`.

mod composition;
mod decorator_composer;
mod error;
mod identity;

pub use composition::CompositionBuilder;
pub use composition::Layer;
pub use composition::compose;
pub use decorator_composer::DecoratorComposer;
pub use error::InvalidCompositionError;
pub use identity::IdentityDecorator;

/// Wraps a value into another one that delegates to it.
pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}
