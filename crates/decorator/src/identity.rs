use crate::Decorator;

/// Lays no layer at all: the decorated value is the raw one.
///
/// It is the starting point of a [`DecoratorComposer`](crate::DecoratorComposer) chain,
/// see `DecoratorComposer::default()`, and the whole chain when no layer is added.
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}
