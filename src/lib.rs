//! # Deep-Zoom Hook
//!
//! Lifecycle binding for an OpenSeadragon-style deep-zoom image viewer widget.
//!
//! This library is the glue between a host UI element and an external
//! tile-rendering viewer. It owns exactly one concern: construct the viewer
//! once the host element has settled into layout, and release it when the
//! element goes away. The IIIF tiling protocol, tile caching, and rendering
//! pipeline belong entirely to the external viewer.
//!
//! ## Features
//!
//! - **Settle-delayed initialization**: the viewer is constructed after a
//!   short fixed delay so it never binds to a zero-sized container
//! - **Cancellable**: detaching before the delay elapses provably prevents
//!   construction
//! - **Injected viewer capability**: the external viewer is a trait, not an
//!   ambient global, so the binding is testable with a mock
//! - **IIIF convention**: the configured locator is normalized to an
//!   `info.json` info-document URL
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`element`] - Host element capability trait
//! - [`viewer`] - External viewer construction/release contract
//! - [`config`] - Static presentation options and timing constants
//! - [`iiif`] - Info-document URL derivation
//! - [`hook`] - The lifecycle adapter itself
//! - [`registry`] - Host-side bookkeeping of one hook per element
//!
//! ## Example
//!
//! ```ignore
//! use deepzoom_hook::{ViewerHook, ViewerOptions};
//!
//! // `factory` implements ViewerFactory, `element` implements ElementHandle.
//! let mut hook = ViewerHook::new(factory);
//! hook.attach(element);
//!
//! // ... element is removed from the page ...
//! hook.detach().await;
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod hook;
pub mod iiif;
pub mod registry;
pub mod viewer;

// Re-export commonly used types
pub use config::{
    GestureSettingsMouse, GestureSettingsTouch, NavigatorPosition, ViewerOptions,
    DEFAULT_ANIMATION_TIME, DEFAULT_MAX_ZOOM_LEVEL, DEFAULT_MIN_ZOOM_LEVEL, DEFAULT_PREFIX_URL,
    INFO_URL_ATTRIBUTE, SETTLE_DELAY,
};
pub use element::ElementHandle;
pub use error::ConfigError;
pub use hook::ViewerHook;
pub use iiif::{info_document_url, INFO_DOCUMENT_SUFFIX};
pub use registry::HookRegistry;
pub use viewer::{ViewerFactory, ViewerHandle};
