//! The lifecycle adapter binding a viewer to a host element.
//!
//! [`ViewerHook`] is the whole component: attach schedules a delayed
//! initialization, detach cancels it and releases the viewer. The delay lets
//! the surrounding layout/animation settle so the viewer never binds to a
//! zero-sized container.
//!
//! # State machine
//!
//! ```text
//! {not-initialized} --delay elapses, locator present--> {initialized}
//! {not-initialized} --delay elapses, locator absent---> {not-initialized}  (warn, permanent)
//! {not-initialized} --detach before delay-------------> {released-without-init}
//! {initialized}     --detach---------------------------> {released}
//! ```
//!
//! Release is terminal: a fresh hook is required for a new attach.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::{ViewerOptions, INFO_URL_ATTRIBUTE, SETTLE_DELAY};
use crate::element::ElementHandle;
use crate::iiif::info_document_url;
use crate::viewer::{ViewerFactory, ViewerHandle};

// =============================================================================
// Viewer Hook
// =============================================================================

/// Lifecycle adapter owning at most one pending initialization and at most
/// one live viewer.
///
/// # Example
///
/// ```ignore
/// use deepzoom_hook::ViewerHook;
///
/// let mut hook = ViewerHook::new(factory);
/// hook.attach(element);          // viewer appears after the settle delay
/// // ...
/// hook.detach().await;           // cancels or destroys, whichever applies
/// ```
pub struct ViewerHook<F: ViewerFactory> {
    /// Constructor capability for the external viewer
    factory: Arc<F>,

    /// The static presentation block passed at construction
    options: ViewerOptions,

    /// Wait between attach and initialization
    settle_delay: Duration,

    /// The scheduled initialization, if one is outstanding
    pending: Option<JoinHandle<()>>,

    /// Slot the initialization task stores the viewer handle into
    viewer: Arc<Mutex<Option<F::Handle>>>,

    /// Set by detach; attach after release is a warned no-op
    released: bool,
}

/// Lock the viewer slot, recovering from a poisoned lock.
///
/// The slot only ever holds a store or a take, so a panic mid-critical
/// section cannot leave it logically inconsistent.
fn lock_slot<H>(slot: &Mutex<Option<H>>) -> MutexGuard<'_, Option<H>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<F: ViewerFactory> ViewerHook<F> {
    /// Create a hook with the default presentation options and settle delay.
    pub fn new(factory: F) -> Self {
        Self::with_options(factory, ViewerOptions::default())
    }

    /// Create a hook with explicit presentation options.
    pub fn with_options(factory: F, options: ViewerOptions) -> Self {
        Self {
            factory: Arc::new(factory),
            options,
            settle_delay: SETTLE_DELAY,
            pending: None,
            viewer: Arc::new(Mutex::new(None)),
            released: false,
        }
    }

    /// Override the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Whether a viewer has been constructed and not yet released.
    pub fn is_initialized(&self) -> bool {
        lock_slot(&self.viewer).is_some()
    }

    /// Whether the hook has been detached. Terminal.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// The presentation options this hook constructs viewers with.
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// React to the host element entering the UI tree.
    ///
    /// Schedules a single cancellable initialization that runs after the
    /// settle delay:
    ///
    /// 1. Reads [`INFO_URL_ATTRIBUTE`] from the element; absent → warn and
    ///    stop, the hook stays uninitialized permanently.
    /// 2. Derives the info-document URL.
    /// 3. Constructs the viewer against the element's identity with that
    ///    single tile source and the static options.
    ///
    /// Must be called from within a tokio runtime. A second attach while a
    /// viewer is pending or live is a warned no-op, as is attach after
    /// release.
    pub fn attach<E: ElementHandle>(&mut self, element: E) {
        if self.released {
            warn!(
                element = element.id(),
                "attach on a released hook ignored; a fresh hook is required"
            );
            return;
        }
        if self.pending.is_some() || self.is_initialized() {
            warn!(
                element = element.id(),
                "attach ignored; a viewer is already live or pending"
            );
            return;
        }

        let factory = Arc::clone(&self.factory);
        let options = self.options.clone();
        let slot = Arc::clone(&self.viewer);
        let delay = self.settle_delay;

        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;

            let Some(raw) = element.attribute(INFO_URL_ATTRIBUTE) else {
                warn!(
                    element = element.id(),
                    attribute = INFO_URL_ATTRIBUTE,
                    "locator attribute is not set; viewer not initialized"
                );
                return;
            };

            let info_url = info_document_url(&raw);
            debug!(
                element = element.id(),
                tile_source = %info_url,
                "initializing deep-zoom viewer"
            );

            let handle = factory.create(element.id(), std::slice::from_ref(&info_url), &options);
            // No await between construction and store, so cancellation
            // cannot strand a constructed handle.
            *lock_slot(&slot) = Some(handle);
        }));
    }

    /// React to the host element leaving the UI tree.
    ///
    /// Cancels the pending initialization if it has not run (harmless when it
    /// already has), then destroys the viewer handle if one exists. Both
    /// steps are independently idempotent; calling this on a hook that never
    /// attached, never initialized, or already detached is safe.
    pub async fn detach(&mut self) {
        self.released = true;

        if let Some(pending) = self.pending.take() {
            pending.abort();
            // Wait for the task to wind down so a late store cannot race
            // the take below.
            let _ = pending.await;
        }

        let handle = lock_slot(&self.viewer).take();
        if let Some(handle) = handle {
            debug!("destroying deep-zoom viewer");
            handle.destroy();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
