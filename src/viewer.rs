//! External viewer construction and release contract.
//!
//! The deep-zoom viewer is an injected capability rather than an ambient
//! global: the hook is handed a [`ViewerFactory`] and only ever talks to the
//! viewer through it. This keeps the lifecycle binding testable with a
//! substitute implementation exposing the same contract.
//!
//! Downstream failures (malformed locator, unreachable resource, malformed
//! info document) are the viewer's own to surface. The factory therefore
//! returns a handle directly; the binding neither catches nor wraps viewer
//! errors.

use crate::config::ViewerOptions;

/// Injected constructor for the external deep-zoom viewer.
pub trait ViewerFactory: Send + Sync + 'static {
    /// The handle type returned by construction.
    type Handle: ViewerHandle;

    /// Construct a viewer bound to the element with the given identity.
    ///
    /// # Arguments
    /// * `element_id` - Identity of the host element the viewer renders into
    /// * `tile_sources` - Tile source URLs; the binding always passes exactly
    ///   one, the derived info-document URL
    /// * `options` - The static presentation configuration
    fn create(
        &self,
        element_id: &str,
        tile_sources: &[String],
        options: &ViewerOptions,
    ) -> Self::Handle;
}

/// A shared factory is itself a factory, so hooks can hand out `Arc<F>`
/// without a wrapper type.
impl<F: ViewerFactory> ViewerFactory for std::sync::Arc<F> {
    type Handle = F::Handle;

    fn create(
        &self,
        element_id: &str,
        tile_sources: &[String],
        options: &ViewerOptions,
    ) -> Self::Handle {
        (**self).create(element_id, tile_sources, options)
    }
}

/// A live viewer instance.
///
/// `destroy` consumes the handle, so release happens at most once per
/// construction by construction.
pub trait ViewerHandle: Send + 'static {
    /// Release the viewer and everything it holds onto.
    fn destroy(self);
}
