//! Host-side bookkeeping of hooks.
//!
//! A hooks framework mounts one hook instance per element. [`HookRegistry`]
//! is that host side: it creates and attaches a [`ViewerHook`] when an
//! element is mounted, keyed by element id, and detaches it when the element
//! is destroyed. Mounting over an existing id (an element re-render) releases
//! the previous hook first, so a replaced viewer can never leak.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::config::{ViewerOptions, SETTLE_DELAY};
use crate::element::ElementHandle;
use crate::hook::ViewerHook;
use crate::viewer::ViewerFactory;

/// Registry owning one [`ViewerHook`] per mounted element.
///
/// All hooks share the same factory and options; the registry is the single
/// place the embedding layer calls into on element lifecycle events.
pub struct HookRegistry<F: ViewerFactory> {
    /// Shared constructor capability handed to every hook
    factory: Arc<F>,

    /// Presentation block every hook constructs viewers with
    options: ViewerOptions,

    /// Settle delay applied to every hook
    settle_delay: Duration,

    /// Live hooks indexed by element id
    hooks: Mutex<HashMap<String, ViewerHook<Arc<F>>>>,
}

impl<F: ViewerFactory> HookRegistry<F> {
    /// Create a registry with the default options and settle delay.
    pub fn new(factory: F) -> Self {
        Self::with_options(factory, ViewerOptions::default())
    }

    /// Create a registry with explicit presentation options.
    pub fn with_options(factory: F, options: ViewerOptions) -> Self {
        Self {
            factory: Arc::new(factory),
            options,
            settle_delay: SETTLE_DELAY,
            hooks: Mutex::new(HashMap::new()),
        }
    }

    /// Override the settle delay applied to subsequently mounted hooks.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// React to an element being mounted: attach a fresh hook for it.
    ///
    /// If a hook already exists for this element id the old one is detached
    /// and replaced; a re-rendered element gets a fresh viewer.
    pub async fn mounted<E: ElementHandle>(&self, element: E) {
        let element_id = element.id().to_string();

        let mut hook = ViewerHook::with_options(Arc::clone(&self.factory), self.options.clone())
            .with_settle_delay(self.settle_delay);
        hook.attach(element);

        let mut hooks = self.hooks.lock().await;
        if let Some(mut previous) = hooks.insert(element_id.clone(), hook) {
            debug!(element = %element_id, "replacing hook for re-mounted element");
            previous.detach().await;
        }
    }

    /// React to an element being destroyed: detach and drop its hook.
    ///
    /// A no-op for element ids that were never mounted.
    pub async fn destroyed(&self, element_id: &str) {
        let removed = self.hooks.lock().await.remove(element_id);
        if let Some(mut hook) = removed {
            hook.detach().await;
        }
    }

    /// Detach every remaining hook. Used when the whole view goes away.
    pub async fn shutdown(&self) {
        let mut hooks = self.hooks.lock().await;
        for (_, mut hook) in hooks.drain() {
            hook.detach().await;
        }
    }

    /// Number of currently mounted hooks.
    pub async fn mounted_count(&self) -> usize {
        self.hooks.lock().await.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
